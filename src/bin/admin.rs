//! CLI administration tool for alias-shortener.
//!
//! Manages mappings directly against the database, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a mapping with a generated alias
//! cargo run --bin admin -- create https://example.com
//!
//! # Create a mapping with a chosen alias
//! cargo run --bin admin -- create https://example.com --alias ex1
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve ex1
//!
//! # Delete an alias
//! cargo run --bin admin -- delete ex1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `alias_shortener::config`.

use alias_shortener::api::dto::save::SaveRequest;
use alias_shortener::config;
use alias_shortener::domain::repositories::UrlStore;
use alias_shortener::error::{AliasError, AppError, CreateMappingError};
use alias_shortener::infrastructure::persistence::SqliteUrlStore;
use alias_shortener::server::{build_mapping_service, open_store};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Store a URL under an alias
    Create {
        /// Destination URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Resolve {
        alias: String,
    },

    /// Delete the mapping stored under an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = open_store(&config).await?;

    match cli.command {
        Commands::Create { url, alias } => {
            let (url, alias) = match validate_create(url, alias) {
                Ok(valid) => valid,
                Err(error) => {
                    println!("{} {}", "❌ Invalid mapping:".red(), error.message());
                    return Ok(());
                }
            };

            let service = build_mapping_service(store, &config);
            match service.create_mapping(url, alias).await {
                Ok(mapping) => {
                    println!("{}", "✅ Mapping created".green().bold());
                    println!("  Alias: {}", mapping.alias.bright_yellow().bold());
                    println!("  URL:   {}", mapping.url.cyan());
                    println!("  ID:    {}", mapping.id);
                }
                Err(CreateMappingError::AliasExists(alias)) => {
                    println!("{} {}", "❌ Alias already exists:".red(), alias.bright_white());
                }
                Err(CreateMappingError::NotUnique(alias)) => {
                    println!(
                        "{} {}",
                        "❌ Generated alias collided, try again:".red(),
                        alias.bright_white()
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Resolve { alias } => {
            let service = build_mapping_service(store, &config);
            match service.resolve_alias(&alias).await {
                Ok(url) => println!("{} -> {}", alias.bright_yellow(), url.cyan()),
                Err(AliasError::NotFound) => {
                    println!("{} {}", "❌ Alias not found:".red(), alias.bright_white());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Delete { alias, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete alias '{}'?", alias))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let service = build_mapping_service(store, &config);
            match service.delete_mapping(&alias).await {
                Ok(()) => println!("{} {}", "✅ Deleted".green().bold(), alias.bright_white()),
                Err(AliasError::NotFound) => {
                    println!("{} {}", "❌ Alias not found:".red(), alias.bright_white());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Db { action } => handle_db_action(action, store).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, store: Arc<SqliteUrlStore>) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking database connection... ");
            match store.ping().await {
                Ok(()) => println!("{}", "✅ OK".green().bold()),
                Err(e) => {
                    println!("{}", "❌ FAILED".red().bold());
                    return Err(e.into());
                }
            }
        }
        DbAction::Info => {
            let count = store.count().await?;

            println!("{}", "📊 Database Info".bright_blue().bold());
            println!();
            println!("  Mappings: {}", count.to_string().bright_yellow());
        }
    }

    Ok(())
}

/// Applies the `POST /url` rules so an alias created here stays reachable over HTTP.
fn validate_create(url: String, alias: Option<String>) -> Result<(String, Option<String>), AppError> {
    let request = SaveRequest::new(Some(url), alias);
    request.validate()?;
    Ok((request.url.unwrap_or_default(), request.alias))
}
