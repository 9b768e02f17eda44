//! CLI administration tool for shortly.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Show the most recent links
//! cargo run --bin admin -- recent --limit 10
//!
//! # Show one link
//! cargo run --bin admin -- stats aZ3k9Q
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`shortly::config`]. Only `DATABASE_URL` and
//! `BASE_URL` matter here.

use shortly::application::services::LinkService;
use shortly::config::{self, Config};
use shortly::domain::entities::Link;
use shortly::infrastructure::persistence::{SqliteLinkRepository, database};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing shortly.
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
    /// Get or create the short code for a URL
    Shorten {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,
    },

    /// List the most recently created links
    Recent {
        /// Number of links to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Show details for one short code
    Stats {
        /// Short code
        code: String,
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

type Service = LinkService<SqliteLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = database::connect(&config).await?;
    database::migrate(&pool).await?;

    let service = LinkService::new(Arc::new(SqliteLinkRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::Shorten { url } => shorten(&service, &config, url).await?,
        Commands::Recent { limit } => recent(&service, limit).await?,
        Commands::Stats { code } => stats(&service, &config, &code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Shortens a URL, prompting for it when not given on the command line.
async fn shorten(service: &Service, config: &Config, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL (include http:// or https://)")
            .interact_text()?,
    };

    match service.get_or_create(&url).await {
        Ok(code) => {
            println!("  Code:      {}", code.bright_yellow().bold());
            println!("  Short URL: {}", config.short_url(&code).cyan());
            println!();
        }
        Err(e @ shortly::AppError::Validation { .. }) => {
            println!("{} {}", "❌".red(), e.to_string().red());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }

    Ok(())
}

/// Lists recent links.
///
/// # Output Format
///
/// ```text
/// 📋 Recent links
///
///   Code    Visits  Created              Target
///   ────────────────────────────────────────────────────────────
///   aZ3k9Q  12      2025-01-15 10:30     https://example.com
/// ```
async fn recent(service: &Service, limit: i64) -> Result<()> {
    println!("{}", "📋 Recent links".bright_blue().bold());
    println!();

    let links = service
        .list_recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        println!(
            "  Create one with: {} admin shorten",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {:<7} {:<20} {}",
        "Code".bright_white().bold(),
        "Visits".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<7} {:<20} {}",
            link.code.cyan(),
            link.visits,
            link.created_at.format("%Y-%m-%d %H:%M"),
            link.target_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white());

    Ok(())
}

/// Shows one link without counting a visit.
async fn stats(service: &Service, config: &Config, code: &str) -> Result<()> {
    println!("{}", "📊 Link stats".bright_blue().bold());
    println!();

    match service.stats(code).await {
        Ok(link) => print_link(&link, config),
        Err(e @ shortly::AppError::NotFound { .. }) => {
            println!("{} {}", "❌".red(), e.to_string().red());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to load link: {}", e)),
    }

    Ok(())
}

fn print_link(link: &Link, config: &Config) {
    println!("  Code:      {}", link.code.bright_yellow().bold());
    println!("  Target:    {}", link.target_url.cyan());
    println!("  Short URL: {}", config.short_url(&link.code));
    println!(
        "  Visits:    {}",
        link.visits.to_string().bright_green().bold()
    );
    println!("  Created:   {}", link.created_at.to_rfc3339());
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            let visits_total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(visits), 0) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!(
                "  Links:  {}",
                links_count.to_string().bright_green().bold()
            );
            println!(
                "  Visits: {}",
                visits_total.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
