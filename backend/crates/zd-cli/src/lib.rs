//! zd-cli library
//!
//! Typed bindings for the Zendesk user identities API, the HTTP transport
//! they run on, and the pieces shared with the `zd` binary.

pub mod client;
pub mod resources;


pub use client::{BasicAuth, CliClientResult, Client, ClientError, Transport};
pub use resources::{UserIdentities, UserIdentityApi};
pub use zd_core::{Context, IdentityType, Page, PageOptions, UserIdentity};
