pub mod context;
pub mod error;
pub mod models;


pub use context::Context;
pub use error::{CoreError, CoreResult};
pub use models::envelope::{IdentitiesEnvelope, IdentityEnvelope};
pub use models::identity_type::IdentityType;
pub use models::page::{Page, PageOptions};
pub use models::user_identity::UserIdentity;
