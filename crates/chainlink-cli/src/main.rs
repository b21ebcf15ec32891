mod directory;
mod onboarding;
mod overview;
mod suppliers;

use chainlink_core::{AppConfig, ConfigError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::suppliers::SuppliersCommands;

#[derive(Debug, Parser)]
#[command(name = "chainlink")]
#[command(about = "ChainLink Pro supplier dashboard command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Discover, filter and inspect suppliers
    Suppliers {
        #[command(subcommand)]
        command: SuppliersCommands,
    },
    /// Search the marketing supplier directory
    Directory {
        /// Match against listing name or any specialty
        #[arg(long, default_value = "")]
        search: String,
        /// Exact industry, or "All Industries"
        #[arg(long)]
        industry: Option<String>,
        /// Location substring, or "All Locations"
        #[arg(long)]
        location: Option<String>,
    },
    /// Show the dashboard overview
    Dashboard,
    /// Score a password the way the sign-up form does
    PasswordStrength {
        password: String,
        /// Confirmation to compare against the password
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Check which verification documents would be accepted
    CheckDocuments {
        #[arg(required = true)]
        files: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(command) => run(command, chainlink_core::load_app_config),
        None => {
            println!("chainlink ready; run `chainlink --help` for commands");
            Ok(())
        }
    }
}

/// Run `command`. Configuration is loaded through `load_config` only by the
/// commands that read seed data; the onboarding helpers never touch it.
fn run<F>(command: Commands, load_config: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match command {
        Commands::Suppliers { command } => {
            let config = configure(load_config)?;
            let catalog = chainlink_core::load_catalog(config.suppliers_path.as_deref())?;
            suppliers::run(&catalog, command)?;
        }
        Commands::Directory {
            search,
            industry,
            location,
        } => {
            let config = configure(load_config)?;
            let directory = chainlink_core::load_directory(config.directory_path.as_deref())?;
            let query = chainlink_core::DirectoryQuery {
                search,
                industry,
                location,
            };
            directory::run_directory_search(&directory, &query);
        }
        Commands::Dashboard => {
            let config = configure(load_config)?;
            let dashboard = chainlink_core::load_dashboard(config.dashboard_path.as_deref())?;
            overview::run_dashboard(&dashboard);
        }
        Commands::PasswordStrength { password, confirm } => {
            onboarding::run_password_strength(&password, confirm.as_deref());
        }
        Commands::CheckDocuments { files } => onboarding::run_check_documents(files),
    }

    Ok(())
}

/// Load configuration and install the stderr tracing subscriber.
fn configure<F>(load_config: F) -> anyhow::Result<AppConfig>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    let config = load_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(config)
}
