use anyhow::Result;
use clap::{Parser, Subcommand};

use repasse_cli::api::ApiClient;
use repasse_cli::cli::{
    handle_clients_command, handle_owners_command, handle_returns_command, handle_status_command,
    handle_transfers_command, ClientsCommands, OwnersCommands, ReturnsCommands, TransfersCommands,
};
use repasse_cli::config::{paths::RepassePaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "repasse",
    version,
    about = "Terminal front end for the agency's property-management backend",
    long_about = "repasse-cli renders the agency's monthly rent-transfer \
                  calculations and bank-return reconciliation records as \
                  terminal tables, and exports them as Excel workbooks, \
                  fetching everything from the REST backend."
)]
struct Cli {
    /// Backend base URL (overrides the configured value)
    #[arg(long, env = "REPASSE_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bank-return reconciliation records
    #[command(subcommand, alias = "retornos")]
    Returns(ReturnsCommands),

    /// Monthly rent transfers per owner
    #[command(subcommand, alias = "repasses")]
    Transfers(TransfersCommands),

    /// Client (tenant) listings
    #[command(subcommand, alias = "locatarios")]
    Clients(ClientsCommands),

    /// Property owner listings
    #[command(subcommand, alias = "proprietarios")]
    Owners(OwnersCommands),

    /// Check backend health
    Status,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = RepassePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(url) = cli.api_url {
        settings.api_base_url = url;
    }

    let api = ApiClient::with_timeout(
        &settings.api_base_url,
        std::time::Duration::from_secs(settings.timeout_secs),
    );

    match cli.command {
        Some(Commands::Returns(cmd)) => {
            handle_returns_command(&api, cmd)?;
        }
        Some(Commands::Transfers(cmd)) => {
            handle_transfers_command(&api, cmd)?;
        }
        Some(Commands::Clients(cmd)) => {
            handle_clients_command(&api, cmd)?;
        }
        Some(Commands::Owners(cmd)) => {
            handle_owners_command(&api, cmd)?;
        }
        Some(Commands::Status) => {
            handle_status_command(&api)?;
        }
        Some(Commands::Config) => {
            println!("repasse-cli Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  API base URL:    {}", settings.api_base_url);
            println!("  Request timeout: {}s", settings.timeout_secs);
        }
        None => {
            println!("repasse-cli - Property-management reports from the terminal");
            println!();
            println!("Run 'repasse --help' for usage information.");
            println!("Run 'repasse returns list' to see this month's bank returns.");
        }
    }

    Ok(())
}
