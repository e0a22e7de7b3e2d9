//! CLI administration tool for banner-rotator.
//!
//! Provides commands for managing placements, viewing statistics, and
//! performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List placements
//! cargo run --bin admin -- placement list
//!
//! # Create a placement
//! cargo run --bin admin -- placement create --slug sidebar --name "Sidebar"
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use banner_rotator::application::services::PlacementService;
use banner_rotator::domain::entities::{NewPlacement, RotationStrategy};
use banner_rotator::infrastructure::persistence::PgPlacementRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing banner-rotator.
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
    /// Manage placements
    Placement {
        #[command(subcommand)]
        action: PlacementAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Placement management subcommands.
#[derive(Subcommand)]
enum PlacementAction {
    /// Create a new placement
    Create {
        /// Placement slug (lowercase letters, digits, hyphens)
        #[arg(short, long)]
        slug: Option<String>,

        /// Human-readable name
        #[arg(short, long)]
        name: Option<String>,

        /// Rotation strategy: random, weighted or ordered
        #[arg(long, default_value = "random")]
        strategy: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all placements
    List,
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Placement { action } => handle_placement_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches placement management commands.
async fn handle_placement_action(action: PlacementAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgPlacementRepository::new(Arc::new(pool.clone())));
    let service = PlacementService::new(repo);

    match action {
        PlacementAction::Create {
            slug,
            name,
            strategy,
            yes,
        } => {
            create_placement(&service, slug, name, &strategy, yes).await?;
        }
        PlacementAction::List => {
            list_placements(&service).await?;
        }
    }

    Ok(())
}

/// Creates a placement with interactive prompts.
async fn create_placement(
    service: &PlacementService<PgPlacementRepository>,
    slug: Option<String>,
    name: Option<String>,
    strategy: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create placement".bright_blue().bold());
    println!();

    let slug = match slug {
        Some(s) => s,
        None => Input::new()
            .with_prompt("Placement slug")
            .with_initial_text("sidebar")
            .interact_text()?,
    };

    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Placement name")
            .with_initial_text("Sidebar")
            .interact_text()?,
    };

    let rotation_strategy = match strategy {
        "random" => RotationStrategy::Random,
        "weighted" => RotationStrategy::Weighted,
        "ordered" => RotationStrategy::Ordered,
        other => anyhow::bail!("Unknown strategy '{other}' (expected random, weighted or ordered)"),
    };

    println!();
    println!("{}", "Placement details:".bright_white().bold());
    println!("  Slug:     {}", slug.cyan());
    println!("  Name:     {}", name.cyan());
    println!("  Strategy: {}", strategy.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this placement?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let placement = service
        .create_placement(NewPlacement {
            slug,
            name,
            rotation_strategy,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create placement: {}", e))?;

    println!();
    println!("{}", "Placement created!".green().bold());
    println!();
    println!("  Embed it with:");
    println!(
        "  curl http://localhost:3000/serve/{}",
        placement.slug.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all placements.
async fn list_placements(service: &PlacementService<PgPlacementRepository>) -> Result<()> {
    println!("{}", "Placements".bright_blue().bold());
    println!();

    let (placements, total) = service
        .list_placements(1, 100)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list placements: {}", e))?;

    if placements.is_empty() {
        println!("{}", "  No placements found".yellow());
        println!();
        println!(
            "  Create one with: {} admin placement create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<30} {:<10}",
        "ID".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Name".bright_white().bold(),
        "Strategy".bright_white().bold()
    );
    println!("  {}", "─".repeat(68).bright_black());

    for placement in &placements {
        println!(
            "  {:<4} {:<20} {:<30} {:<10}",
            placement.id.to_string().bright_black(),
            placement.slug.cyan(),
            placement.name,
            placement.rotation_strategy.as_str().bright_green()
        );
    }

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of banners and placements
/// - Accumulated impression and click counts
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let banners_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM banners")
        .fetch_one(pool)
        .await?;

    let placements_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM placements")
        .fetch_one(pool)
        .await?;

    let (impressions, clicks): (i64, i64) = sqlx::query_as(
        "SELECT COALESCE(SUM(impressions), 0)::bigint, COALESCE(SUM(clicks), 0)::bigint \
         FROM daily_statistics",
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Banners:     {}",
        banners_count.to_string().bright_green().bold()
    );
    println!(
        "  Placements:  {}",
        placements_count.to_string().bright_green().bold()
    );
    println!(
        "  Impressions: {}",
        impressions.to_string().bright_green().bold()
    );
    println!("  Clicks:      {}", clicks.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
