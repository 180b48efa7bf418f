use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "zd")]
#[command(about = "Zendesk user identities from the command line")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (overrides --subdomain and api.base_url)
    #[arg(long, global = true)]
    pub(crate) base_url: Option<String>,

    /// Account subdomain, e.g. "acme" for acme.zendesk.com
    #[arg(long, global = true)]
    pub(crate) subdomain: Option<String>,

    /// Agent email for API token authentication
    #[arg(long, global = true)]
    pub(crate) email: Option<String>,

    /// API token (prefer ZD_API_TOKEN to keep it out of shell history)
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub(crate) timeout: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
