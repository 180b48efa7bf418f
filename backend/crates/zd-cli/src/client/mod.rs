pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod transport;

pub use client::{BasicAuth, Client};
pub use error::{ClientError, Result as CliClientResult};
pub use transport::Transport;
