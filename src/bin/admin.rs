//! CLI administration tool for social-media-api.
//!
//! Provides commands for managing user roles, viewing statistics,
//! inspecting the page navigation table and performing database
//! operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- users list
//!
//! # Grant or revoke the admin role
//! cargo run --bin admin -- users promote alice@example.com
//! cargo run --bin admin -- users demote 42 --yes
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Show served pages and legacy redirects
//! cargo run --bin admin -- routes
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for everything except `routes`): PostgreSQL connection string

use social_media_api::domain::entities::Role;
use social_media_api::domain::repositories::UserRepository;
use social_media_api::infrastructure::persistence::PgUserRepository;
use social_media_api::web::navigation::NavigationTable;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing social-media-api.
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
    /// Manage user accounts
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Print the navigation table
    Routes,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Grant the admin role
    Promote {
        /// Account email or numeric id
        user: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Revoke the admin role
    Demote {
        /// Account email or numeric id
        user: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    match cli.command {
        Commands::Users { action } => handle_user_action(action, &connect().await?).await?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Routes => print_routes(),
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::List => list_users(repo).await?,
        UserAction::Promote { user, yes } => change_role(repo, &user, Role::Admin, yes).await?,
        UserAction::Demote { user, yes } => change_role(repo, &user, Role::User, yes).await?,
    }

    Ok(())
}

/// Lists all users with their roles.
///
/// # Output Format
///
/// ```text
/// Users
///
///   ID  Name                 Email                          Created           Role
///   ---------------------------------------------------------------------------------
///   1   alice                alice@example.com              2025-01-15 10:30  ADMIN
///   2   bob                  bob@example.com                2025-01-16 14:20  USER
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<30} {:<17} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "-".repeat(81).bright_black());

    for user in &users {
        let role = if user.is_admin() {
            user.role.as_str().magenta()
        } else {
            user.role.as_str().green()
        };

        println!(
            "  {:<4} {:<20} {:<30} {:<17} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            role
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Changes the role of an account.
///
/// # Lookup
///
/// - If input is numeric, lookup by ID
/// - Otherwise, lookup by email (case-insensitive)
///
/// Asks for confirmation (default: No) unless `skip_confirm` is set.
async fn change_role(
    repo: Arc<PgUserRepository>,
    email_or_id: &str,
    role: Role,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Change role".bright_blue().bold());
    println!();

    let user = match email_or_id.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_email(email_or_id).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("User not found")?;

    if user.role == role {
        println!(
            "{}",
            format!("{} already has role {}", user.name, role).yellow()
        );
        return Ok(());
    }

    println!("  User: {} <{}>", user.name.cyan(), user.email);
    println!("  Role: {} -> {}", user.role, role.as_str().bright_white().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Apply this change?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let updated = repo
        .set_role(user.id, role)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to change role: {}", e))?;

    if updated {
        println!("{}", "Role changed successfully".green().bold());
    } else {
        println!("{}", "User disappeared before the update".yellow());
    }
    println!();

    Ok(())
}

/// Displays row counts for the main tables.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let counts = [
        ("Users", "SELECT COUNT(*) FROM users"),
        ("Posts", "SELECT COUNT(*) FROM posts"),
        ("Messages", "SELECT COUNT(*) FROM messages"),
        ("Subscriptions", "SELECT COUNT(*) FROM user_subscriptions"),
        ("Friendships", "SELECT COUNT(*) FROM friendships"),
    ];

    for (label, query) in counts {
        let count: i64 = sqlx::query_scalar(query).fetch_one(pool).await?;
        println!(
            "  {:<15}{}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Prints the served navigation table and the redirects kept for the legacy one.
fn print_routes() {
    let table = NavigationTable::current();

    println!("{}", "Pages".bright_blue().bold());
    println!();
    for entry in table.iter() {
        let access = if entry.page.requires_session() {
            "session".yellow()
        } else {
            "public".green()
        };
        println!(
            "  {:<12} {:<14} {}",
            entry.path.cyan(),
            entry.name,
            access
        );
    }

    let redirects = table.redirects_from(&NavigationTable::legacy());
    if !redirects.is_empty() {
        println!();
        println!("{}", "Legacy redirects".bright_blue().bold());
        println!();
        for (old_path, target) in redirects {
            println!("  {:<12} -> {}", old_path.bright_black(), target.path.cyan());
        }
    }
    println!();
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
