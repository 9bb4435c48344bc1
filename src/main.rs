use anyhow::Result;
use clap::{Parser, Subcommand};

/// contact-desk - website contact form backend
#[derive(Parser)]
#[command(name = "contact-desk")]
#[command(about = "Stores contact form submissions and relays them by email", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Check that the configured SMTP relay accepts a session
    VerifySmtp,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, the environment may already be set
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = contact_desk::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    contact_desk::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.observability.format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => contact_desk::cli::serve(config, host, port).await,
        Commands::VerifySmtp => contact_desk::cli::verify_smtp(config).await,
    }
}
