//! Affiliate CLI - storefront and admin dashboard for the affiliate catalog.
//!
//! Commands:
//! - `affiliate browse` - Featured product, categories and product grid
//! - `affiliate show` - Product detail
//! - `affiliate products` - List, add, edit and delete products (admin)
//! - `affiliate stats` - Dashboard statistics (admin)
//! - `affiliate login` / `affiliate logout` - Manage the session token
//! - `affiliate config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;
mod token_store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ConfigArgs, LoginArgs, ProductsArgs, ShowArgs};

/// Affiliate CLI - browse and manage the affiliate product catalog
#[derive(Parser)]
#[command(name = "affiliate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the storefront
    Browse(BrowseArgs),

    /// Show a single product
    Show(ShowArgs),

    /// Manage products (requires login)
    Products(ProductsArgs),

    /// Show dashboard statistics (requires login)
    Stats,

    /// Store an admin session token
    Login(LoginArgs),

    /// Forget the admin session token
    Logout,

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Show(args) => commands::browse::show(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Stats => commands::stats::run(&ctx).await,
        Commands::Login(args) => commands::session::login(args, &ctx).await,
        Commands::Logout => commands::session::logout(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::ProductsCommand;

    #[test]
    fn test_delete_takes_only_an_id() {
        let cli = Cli::try_parse_from(["affiliate", "products", "delete", "3"]).unwrap();
        match cli.command {
            Commands::Products(args) => {
                assert!(matches!(args.command, ProductsCommand::Delete { id: 3 }));
            }
            _ => panic!("expected products command"),
        }

        assert!(Cli::try_parse_from(["affiliate", "products", "delete", "3", "--yes"]).is_err());
    }
}
