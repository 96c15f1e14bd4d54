//! CLI administration tool for shortlinks.
//!
//! Provides commands for inspecting and moderating links, issuing tokens,
//! and checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Inspect a link
//! cargo run --bin admin -- link show my-slug
//!
//! # Delete a link regardless of owner
//! cargo run --bin admin -- link purge my-slug --yes
//!
//! # Issue a token for an existing account
//! cargo run --bin admin -- user token alice@example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection
//! - `JWT_SECRET` (required for `user token`), `TOKEN_TTL_HOURS` (default 24)

use shortlinks::config::{Config, mask_connection_string};
use shortlinks::domain::entities::user::normalize_email;
use shortlinks::domain::repositories::{LinkRepository, UserRepository};
use shortlinks::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use shortlinks::infrastructure::security::jwt::TokenSigner;
use shortlinks::prelude::AuthService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlinks.
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
    /// Show statistics
    Stats,

    /// Inspect and moderate short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Account tools
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Show a link without counting a visit
    Show { slug: String },

    /// Permanently delete a link, whoever owns it
    Purge {
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Issue a bearer token for an existing account
    Token {
        /// Account email (prompted when omitted)
        email: Option<String>,
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        Config::load_database_url().context("Failed to load database configuration")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    let pool = Arc::new(pool);

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays totals for accounts, links and visits.
async fn handle_stats(pool: &Arc<PgPool>) -> Result<()> {
    let users = PgUserRepository::new(pool.clone());
    let links = PgLinkRepository::new(pool.clone());

    let users_count = users.count().await?;
    let links_count = links.count().await?;
    let visits = links.total_visits().await?;

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();
    println!(
        "  Users:  {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!("  Visits: {}", visits.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Dispatches link moderation commands.
async fn handle_link_action(action: LinkAction, pool: &Arc<PgPool>) -> Result<()> {
    let repo = PgLinkRepository::new(pool.clone());

    match action {
        LinkAction::Show { slug } => {
            let link = repo
                .find_by_slug(&slug)
                .await?
                .with_context(|| format!("Link '{slug}' not found"))?;

            println!("{}", "🔗 Short link".bright_blue().bold());
            println!();
            println!("  Slug:     {}", link.slug.cyan());
            println!("  ID:       {}", link.id.to_string().bright_black());
            println!("  Target:   {}", link.original.bright_white());
            println!(
                "  Owner:    {}",
                link.owner_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "anonymous".to_string())
                    .bright_black()
            );
            println!("  Visits:   {}", link.visits.to_string().bright_green());
            println!("  Created:  {}", link.created_at.to_rfc3339());
            println!();
        }
        LinkAction::Purge { slug, yes } => {
            let link = repo
                .find_by_slug(&slug)
                .await?
                .with_context(|| format!("Link '{slug}' not found"))?;

            println!("  Slug:   {}", link.slug.cyan());
            println!("  Target: {}", link.original.bright_white());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Permanently delete this link?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            if repo.delete_by_slug(&slug).await? {
                println!("{}", "✅ Link deleted".green().bold());
            } else {
                println!("{}", "⚠️  Link was already gone".yellow());
            }
        }
    }

    Ok(())
}

/// Dispatches account commands.
async fn handle_user_action(action: UserAction, pool: &Arc<PgPool>) -> Result<()> {
    match action {
        UserAction::Token { email } => {
            let email = match email {
                Some(email) => email,
                None => Input::<String>::new().with_prompt("Account email").interact_text()?,
            };

            let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
            let ttl_hours: i64 = std::env::var("TOKEN_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24);

            let users = Arc::new(PgUserRepository::new(pool.clone()));
            let user = users
                .find_by_email(&normalize_email(&email))
                .await?
                .with_context(|| format!("No account for '{email}'"))?;

            let auth = AuthService::new(
                users,
                TokenSigner::new(&secret, chrono::Duration::hours(ttl_hours)),
            );
            let token = auth.issue_token(&user)?;

            println!("{}", "🔑 Token issued".bright_blue().bold());
            println!();
            println!("  Account: {}", user.email.cyan());
            println!("  Expires: in {ttl_hours}h");
            println!();
            println!("{token}");
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
