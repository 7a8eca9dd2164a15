//! CLI administration tool for alias-shortener.
//!
//! Provides commands for provisioning users, viewing statistics,
//! and performing database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a user that can log in
//! cargo run --bin admin -- user create --email admin@example.com
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` or `DATABASE_URL` (required): PostgreSQL connection string

use alias_shortener::domain::repositories::UserRepository;
use alias_shortener::infrastructure::persistence::PgUserRepository;
use alias_shortener::utils::password::hash_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user
    Create {
        /// Login email
        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("STORAGE_PATH")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            email,
            password,
            yes,
        } => create_user(repo, email, password, yes).await,
        UserAction::List => list_users(repo).await,
    }
}

/// Creates a user with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email and password (or use provided)
/// 2. Confirm creation (unless `--yes` flag)
/// 3. Hash the password with argon2
/// 4. Store in database
///
/// Only the argon2 hash is stored.
async fn create_user(
    repo: Arc<PgUserRepository>,
    email: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = match password {
        Some(p) => {
            println!("{}", "⚠️  Password passed on the command line".yellow());
            p
        }
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    if email.trim().is_empty() || password.is_empty() {
        anyhow::bail!("Email and password must not be empty");
    }

    println!();
    println!("  Email: {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let password_hash = hash_password(&password)?;

    let user = repo
        .create(email.trim(), &password_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST -H 'Content-Type: application/json' \\\n    -d '{{\"email\":\"{}\",\"password\":\"...\"}}' http://localhost:8080/auth/login",
        user.email.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Email                          Created
///   ──────────────────────────────────────────────────────────
///   1   admin@example.com              2025-01-15 10:30
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(58).bright_black());

    for user in &users {
        println!(
            "  {:<4} {:<30} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays counts of stored aliases and users.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!(
        "  Aliases: {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Users:   {}",
        users_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

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
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
