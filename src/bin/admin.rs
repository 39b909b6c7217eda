//! CLI administration tool for the shortener.
//!
//! Operates directly on the storage file, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Add a mapping (alias generated when omitted)
//! cargo run --bin admin -- url add https://example.com --alias ex
//!
//! # Show where an alias points
//! cargo run --bin admin -- url get ex
//!
//! # Delete a mapping
//! cargo run --bin admin -- url delete ex
//!
//! # Check storage
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required): SQLite storage file

use shortener::application::services::UrlService;
use shortener::domain::repositories::UrlRepository;
use shortener::error::AppError;
use shortener::infrastructure::persistence::SqliteUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing the shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage alias/URL mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Save a URL under an alias
    Add {
        /// Absolute URL to redirect to
        url: String,

        /// Alias to use (random 6-character alias if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the URL stored under an alias
    Get { alias: String },

    /// Delete the mapping stored under an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Storage subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check that storage answers and count mappings
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_path = std::env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

    let repository = Arc::new(
        SqliteUrlRepository::connect(&storage_path)
            .await
            .with_context(|| format!("Failed to open storage at '{storage_path}'"))?,
    );

    match cli.command {
        Commands::Url { action } => handle_url_action(action, repository).await?,
        Commands::Db { action } => handle_db_action(action, repository).await?,
    }

    Ok(())
}

/// Dispatches mapping management commands.
async fn handle_url_action(action: UrlAction, repository: Arc<SqliteUrlRepository>) -> Result<()> {
    let service = UrlService::new(repository);

    match action {
        UrlAction::Add { url, alias } => add_url(&service, &url, alias.as_deref()).await,
        UrlAction::Get { alias } => get_url(&service, &alias).await,
        UrlAction::Delete { alias, yes } => delete_url(&service, &alias, yes).await,
    }
}

async fn add_url(service: &UrlService, url: &str, alias: Option<&str>) -> Result<()> {
    match service.save(url, alias).await {
        Ok(record) => {
            println!("{}", "✅ URL saved".green().bold());
            println!("  Alias: {}", record.alias.bright_yellow().bold());
            println!("  URL:   {}", record.url.cyan());
            println!("  ID:    {}", record.id.to_string().bright_black());
            Ok(())
        }
        Err(AppError::Conflict(_)) => {
            println!("{}", "❌ URL or alias already exists".red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to save url: {}", e)),
    }
}

async fn get_url(service: &UrlService, alias: &str) -> Result<()> {
    match service.resolve(alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(AppError::NotFound(_)) => {
            println!("{}", format!("  No URL stored under '{alias}'").yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to get url: {}", e)),
    }
}

/// Deletes a mapping with confirmation prompt.
async fn delete_url(service: &UrlService, alias: &str, skip_confirm: bool) -> Result<()> {
    let url = match service.resolve(alias).await {
        Ok(url) => url,
        Err(AppError::NotFound(_)) => {
            println!("{}", format!("  No URL stored under '{alias}'").yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to get url: {}", e)),
    };

    println!("  {} → {}", alias.bright_yellow(), url.cyan());

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete url: {}", e))?;

    println!("{}", "✅ Deleted".green().bold());
    Ok(())
}

/// Dispatches storage commands.
async fn handle_db_action(action: DbAction, repository: Arc<SqliteUrlRepository>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking storage...".bright_blue());

            repository
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Storage check failed: {}", e))?;

            let count = repository
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count urls: {}", e))?;

            println!("{}", "✅ Storage OK".green().bold());
            println!("  Mappings: {}", count.to_string().bright_white().bold());
        }
    }

    Ok(())
}
