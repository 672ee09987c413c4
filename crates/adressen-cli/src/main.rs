use std::path::PathBuf;

use adressen_core::QueryMode;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod export;
mod fetch;
mod lookup;
mod stats;

#[derive(Debug, Parser)]
#[command(name = "adressen")]
#[command(about = "Fetch Dutch address records from PDOK and export them to CSV")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every address for a list of postcodes or towns and write a CSV
    Fetch {
        /// Query mode: `postcode` (or `1`) or `town` (or `2`)
        #[arg(long)]
        mode: QueryMode,

        /// Comma-separated postcode prefixes or town names
        #[arg(long)]
        terms: Option<String>,

        /// Output CSV path (defaults to ADRESSEN_OUTPUT_PATH)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Look up a single address by postcode and house number
    Lookup {
        #[arg(long)]
        postcode: String,

        #[arg(long)]
        huisnummer: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = adressen_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Fetch {
            mode,
            terms,
            output,
        }) => {
            let output = output.unwrap_or_else(|| config.output_path.clone());
            fetch::run_fetch(&config, mode, terms.as_deref(), &output).await?;
        }
        Some(Commands::Lookup {
            postcode,
            huisnummer,
        }) => lookup::run_lookup(&config, &postcode, &huisnummer).await?,
        None => println!("adressen: no command given, see `adressen --help`"),
    }

    Ok(())
}
