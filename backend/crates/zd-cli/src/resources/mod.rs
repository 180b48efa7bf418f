pub(crate) mod user_identities;

pub use user_identities::{UserIdentities, UserIdentityApi};
