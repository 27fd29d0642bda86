//! trivia CLI - run, migrate, and seed the trivia API
//!
//! The `serve` subcommand is the production entry point; `migrate` and
//! `seed` exist so deploy scripts can prepare a database without starting
//! the server.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use trivia_server::db::{create_pool, migrations};
use trivia_server::http::{run_server, ServerConfig};
use trivia_server::AppState;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia quiz API server over a PostgreSQL question store"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(long, global = true)]
    debug: bool,

    /// PostgreSQL connection string
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost/trivia",
        global = true
    )]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Create the database schema and exit
    Migrate,
    /// Create the schema and insert the default categories
    Seed,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    let pool = create_pool(&cli.database_url)
        .await
        .context("failed to connect to the database")?;

    match cli.command {
        Commands::Serve(args) => {
            migrations::run(&pool).await?;
            let state = AppState::postgres(pool);
            let config = ServerConfig {
                bind_addr: args.bind,
            };
            run_server(state, config).await?;
        }
        Commands::Migrate => {
            migrations::run(&pool).await?;
            tracing::info!("schema ready");
        }
        Commands::Seed => {
            migrations::run(&pool).await?;
            migrations::seed(&pool).await?;
            tracing::info!("database seeded");
        }
    }

    Ok(())
}
