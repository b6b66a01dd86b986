//! CLI administration tool for product-store.
//!
//! Runs maintenance tasks directly against the database, without the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Row counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Server version
//! cargo run --bin admin -- db info
//!
//! # Delete every product, store and association
//! cargo run --bin admin -- db clear
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL`, or the `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` /
//! `DB_NAME` components.

use product_store::config::{Config, mask_connection_string};
use product_store::domain::repositories::{ProductRepository, StoreRepository};
use product_store::infrastructure::persistence::{PgProductRepository, PgStoreRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing product-store.
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
    /// Show row counts
    Stats,

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

    /// Delete all products, stores and associations
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repositories(pool: &PgPool) -> (PgProductRepository, PgStoreRepository) {
    let pool = Arc::new(pool.clone());
    (
        PgProductRepository::new(pool.clone()),
        PgStoreRepository::new(pool),
    )
}

/// Displays row counts for products, stores and associations.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (products, stores) = repositories(pool);

    let products_count = products
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count products: {}", e))?;
    let associations_count = products
        .count_associations()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count associations: {}", e))?;
    let stores_count = stores
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count stores: {}", e))?;

    println!(
        "  Products:     {}",
        products_count.to_string().bright_green().bold()
    );
    println!(
        "  Stores:       {}",
        stores_count.to_string().bright_green().bold()
    );
    println!(
        "  Associations: {}",
        associations_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic and maintenance commands.
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Clear { yes } => clear_database(pool, yes).await?,
    }

    Ok(())
}

/// Deletes every product, store and association after confirmation.
///
/// The prompt defaults to No.
async fn clear_database(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Clear Database".bright_blue().bold());
    println!();
    println!(
        "{}",
        "⚠️  This deletes ALL products, stores and associations."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete everything?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let (products, stores) = repositories(pool);

    products
        .clear()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to clear products: {}", e))?;
    stores
        .clear()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to clear stores: {}", e))?;

    println!("{}", "✅ Database cleared".green().bold());
    println!();

    Ok(())
}
