use anyhow::{Result, bail};
use clap::Parser;

use aeol::api::AccessToken;
use aeol::commands;

/// aeol - Arista EOL lookup
///
/// Query end-of-life dates for Arista hardware SKUs and EOS release trains.
///
/// An API access token is required. Generate one on the arista.com profile
/// page and pass it with --token or the ARISTA_EOL_TOKEN environment
/// variable.
///
/// Examples:
///   aeol hardware DCS-7050QX-32S    # EOL dates for a hardware SKU
///   aeol software 4.28              # EOL dates for an EOS release train
#[derive(Parser, Debug)]
#[command(author, version = env!("AEOL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API access token (also via ARISTA_EOL_TOKEN)
    #[arg(
        long = "token",
        short = 't',
        env = "ARISTA_EOL_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub token: Option<String>,

    /// EOL API URL (defaults to https://www.arista.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// HTTP timeout in seconds (no timeout unless set)
    #[arg(long = "timeout", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Look up end-of-life dates for a hardware SKU
    Hardware(HardwareArgs),

    /// Look up end-of-life dates for an EOS software release train
    Software(SoftwareArgs),
}

#[derive(clap::Args, Debug)]
pub struct HardwareArgs {
    /// The hardware SKU, e.g. "DCS-7050QX-32S"
    #[arg(value_name = "SKU")]
    pub sku: String,
}

#[derive(clap::Args, Debug)]
pub struct SoftwareArgs {
    /// The EOS release train, e.g. "4.28"
    #[arg(value_name = "RELEASE_TRAIN")]
    pub release_train: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let Some(token) = cli.token else {
        bail!("No API access token provided. Pass --token or set ARISTA_EOL_TOKEN.");
    };
    let token = AccessToken::new(token);

    match cli.command {
        Commands::Hardware(args) => {
            commands::hardware(token, &args.sku, cli.api_url, cli.timeout).await?
        }
        Commands::Software(args) => {
            commands::software(token, &args.release_train, cli.api_url, cli.timeout).await?
        }
    }
    Ok(())
}
