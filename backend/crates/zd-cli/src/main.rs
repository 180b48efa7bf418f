//! zd - Zendesk user identities CLI
//!
//! # Examples
//!
//! ```bash
//! # List a user's identities
//! zd --subdomain acme identity list 135 --pretty
//!
//! # Add an email address
//! zd identity create 135 --type email --value someone@example.com
//!
//! # Promote it to primary
//! zd identity make-primary 135 35436
//! ```

mod cli;
mod commands;
mod identity_commands;
mod logger;

use crate::{cli::Cli, commands::Commands, identity_commands::IdentityCommands};

use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::warn;
use serde_json::{Value, json};
use zd_cli::{
    CliClientResult, Client, Context, IdentityType, PageOptions, UserIdentity, UserIdentityApi,
};
use zd_config::{Config, ConfigErrorResult};
use zd_core::{IdentitiesEnvelope, IdentityEnvelope};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!();
                eprintln!("{}", hint);
            }
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file_path(),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let client = match Client::from_config(&config.api) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&client, cli.command).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load config and layer command line flags on top.
/// Priority: flags > ZD_* env vars > config.toml > defaults
fn load_config(cli: &Cli) -> ConfigErrorResult<Config> {
    let mut config = Config::load()?;

    if let Some(ref base_url) = cli.base_url {
        config.api.base_url = Some(base_url.clone());
    }
    if let Some(ref subdomain) = cli.subdomain {
        config.api.subdomain = Some(subdomain.clone());
    }
    if let Some(ref email) = cli.email {
        config.api.email = Some(email.clone());
    }
    if let Some(ref token) = cli.token {
        config.api.api_token = Some(token.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }

    config.validate()?;
    Ok(config)
}

async fn run(client: &Client, command: Commands) -> CliClientResult<Value> {
    let ctx = Context::background();

    match command {
        Commands::Identity { action } => {
            let identities = client.user_identities();

            match action {
                IdentityCommands::List {
                    user_id,
                    page: None,
                    per_page: None,
                } => {
                    let identities = identities.list(&ctx, user_id).await?;
                    Ok(serde_json::to_value(IdentitiesEnvelope { identities })?)
                }
                IdentityCommands::List {
                    user_id,
                    page,
                    per_page,
                } => {
                    let opts = PageOptions::new(page, per_page);
                    let (identities, page) = identities.list_page(&ctx, user_id, &opts).await?;
                    Ok(json!({
                        "identities": serde_json::to_value(identities)?,
                        "next_page": page.next_page,
                        "previous_page": page.previous_page,
                        "count": page.count,
                    }))
                }
                IdentityCommands::Create {
                    user_id,
                    r#type,
                    value,
                } => {
                    if IdentityType::from_str(&r#type).is_err() {
                        warn!("Unrecognized identity type '{}', sending as-is", r#type);
                    }

                    let identity = UserIdentity {
                        kind: r#type,
                        value,
                        ..Default::default()
                    };
                    let identity = identities.create(&ctx, user_id, identity).await?;
                    Ok(serde_json::to_value(IdentityEnvelope::new(identity))?)
                }
                IdentityCommands::MakePrimary {
                    user_id,
                    identity_id,
                } => {
                    let identities = identities.make_primary(&ctx, user_id, identity_id).await?;
                    Ok(serde_json::to_value(IdentitiesEnvelope { identities })?)
                }
                IdentityCommands::Verify {
                    user_id,
                    identity_id,
                } => {
                    let identity = identities.verify(&ctx, user_id, identity_id).await?;
                    Ok(serde_json::to_value(IdentityEnvelope::new(identity))?)
                }
                IdentityCommands::Delete {
                    user_id,
                    identity_id,
                } => {
                    identities.delete(&ctx, user_id, identity_id).await?;
                    Ok(json!({ "deleted_id": identity_id }))
                }
            }
        }
    }
}
