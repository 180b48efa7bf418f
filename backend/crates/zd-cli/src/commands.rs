use crate::identity_commands::IdentityCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// User identity operations
    Identity {
        #[command(subcommand)]
        action: IdentityCommands,
    },
}
