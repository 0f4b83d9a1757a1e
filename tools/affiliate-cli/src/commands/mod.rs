//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod products;
pub mod session;
pub mod stats;

use affiliate_catalog::prelude::{AdminWorkflow, ProductRepository};
use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use crate::output::Output;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against product titles.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category chip to select ("Todos" for all).
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: i64,

    /// Force the compact layout.
    #[arg(long, conflicts_with = "full")]
    pub compact: bool,

    /// Force the full layout.
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List every product
    List,

    /// Add a product
    Add(ProductFields),

    /// Edit a product
    Edit {
        /// Product id.
        id: i64,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product immediately
    Delete {
        /// Product id.
        id: i64,
    },
}

/// Product form fields. Missing values are prompted for.
#[derive(Args, Default)]
pub struct ProductFields {
    /// Display title.
    #[arg(long)]
    pub title: Option<String>,

    /// Short description.
    #[arg(long)]
    pub description: Option<String>,

    /// Image URL.
    #[arg(long)]
    pub image_url: Option<String>,

    /// Final affiliate link.
    #[arg(long)]
    pub link: Option<String>,

    /// Custom slug.
    #[arg(long)]
    pub slug: Option<String>,

    /// Display price (free text, e.g. "R$ 99,90").
    #[arg(long)]
    pub price: Option<String>,

    /// Platform (e.g. Amazon).
    #[arg(long)]
    pub platform: Option<String>,

    /// Category label.
    #[arg(long)]
    pub category: Option<String>,

    /// Featured flag.
    #[arg(long)]
    pub featured: Option<bool>,

    /// Never prompt; keep current values for missing fields.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Admin token (prompted for when omitted).
    #[arg(short, long)]
    pub token: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new config file
    Init {
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Print pending workflow notifications. On failure the first error
/// notification becomes the command's error instead of being printed.
pub fn report<R, T, E>(workflow: &mut AdminWorkflow<R>, result: Result<T, E>, output: &Output) -> Result<T>
where
    R: ProductRepository,
    E: std::error::Error + Send + Sync + 'static,
{
    let mut failure = None;
    for notification in workflow.drain_notifications() {
        if result.is_err() && notification.is_error() {
            failure.get_or_insert(notification.message);
        } else {
            output.notify(&notification);
        }
    }

    result.map_err(|e| match failure {
        Some(message) => anyhow!(message),
        None => anyhow::Error::new(e),
    })
}
