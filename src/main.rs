//! easybroker - command line access to the EasyBroker listings API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use easybroker_client::commands::{ContactCommand, ListCommand, PropertyCommand};
use easybroker_client::config::{Config, OutputFormat};
use easybroker_client::easybroker::client::{DEFAULT_LIMIT, DEFAULT_PAGE};
use easybroker_client::{ContactRequest, StatusOption};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "easybroker",
    version,
    about = "Browse EasyBroker property listings from the command line"
)]
struct Cli {
    /// EasyBroker API key
    #[arg(long, global = true, env = "EASYBROKER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API root URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of properties
    #[command(alias = "l")]
    List {
        /// Page number
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: u32,

        /// Properties per page (max 50)
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Statuses to include (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        status: Vec<StatusOption>,
    },

    /// Fetch every property across all pages
    All,

    /// Look up a property by public id
    #[command(alias = "p")]
    Property {
        /// Public id (e.g. EB-B1234)
        id: String,
    },

    /// Send a contact request for a property
    Contact {
        /// Public id of the property
        #[arg(long)]
        property_id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        message: String,

        /// Where the lead came from
        #[arg(long, default_value = "easybroker-cli")]
        source: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // File, then environment, then flags
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(api_key) = cli.api_key {
        config.api_key = Some(api_key);
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let output = match cli.command {
        Commands::List { page, limit, status } => {
            ListCommand::new(config).execute(page, limit, &status).await?
        }

        Commands::All => ListCommand::new(config).execute_all().await?,

        Commands::Property { id } => PropertyCommand::new(config).execute(&id).await?,

        Commands::Contact { property_id, name, email, phone, message, source } => {
            let request = ContactRequest { name, email, phone, property_id, message, source };
            ContactCommand::new(config).execute(&request).await?
        }
    };

    println!("{}", output);

    Ok(())
}
