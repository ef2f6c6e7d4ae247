//! CLI for inspecting the site configuration.
//!
//! # Usage
//!
//! ```bash
//! # Print the resolved configuration
//! SITE=https://arejula27.dev cargo run -- show
//!
//! # Same, as JSON for other build steps
//! SITE=https://arejula27.dev cargo run -- show --json
//!
//! # Derive the origin of an arbitrary URL
//! cargo run -- origin "https://example.com:8443/blog?page=2"
//!
//! # Fail the build early if SITE is missing or malformed
//! cargo run -- check
//! ```
//!
//! # Environment Variables
//!
//! - `SITE` (required for `show` / `check`): absolute URL of the deployed site
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use site_config::config::{SiteConfig, load_from_env};
use site_config::utils::origin::site_origin;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use tracing_subscriber::EnvFilter;

/// Inspect and check the blog's site configuration.
#[derive(Parser)]
#[command(name = "site-config")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configuration from the environment and print it
    Show {
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the origin of a URL
    Origin {
        /// Absolute URL, e.g. https://example.com/blog
        url: String,
    },

    /// Load and validate the configuration, failing on any error
    Check,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.command {
        Commands::Show { json } => {
            let config = load_config()?;
            if json {
                let out = serde_json::to_string_pretty(&config)
                    .context("Failed to serialize configuration")?;
                println!("{out}");
            } else {
                print_config(&config);
            }
        }
        Commands::Origin { url } => {
            let origin =
                site_origin(&url).with_context(|| format!("Failed to derive origin of '{url}'"))?;
            println!("{origin}");
        }
        Commands::Check => {
            let config = load_config()?;
            config.print_summary();
            println!("{} {}", "OK".green().bold(), config.site_url());
        }
    }

    Ok(())
}

/// Logs go to stderr so `show --json` output stays machine readable.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn load_config() -> Result<SiteConfig> {
    let config = load_from_env().context("Failed to load site configuration")?;
    tracing::info!(site_url = %config.site_url(), "Configuration loaded");
    Ok(config)
}

fn print_config(config: &SiteConfig) {
    println!("{}", "Site configuration".bright_blue().bold());
    println!();
    print_field("Title:", config.title.cyan());
    print_field("Author:", config.author_name.cyan());
    print_field("Twitter:", config.twitter_handle.cyan());
    print_field("Base URL:", config.base_url().as_str().normal());
    print_field("Site URL:", config.site_url().bright_yellow().bold());
    println!();
    println!("{}", "Description:".bright_white());
    println!("  {}", config.description);
}

fn print_field(label: &str, value: ColoredString) {
    println!("  {} {}", format!("{label:<12}").bright_white(), value);
}
