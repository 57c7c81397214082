#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    AskInput, AskStrategy, CommandStrategy, InfoStrategy, InitStrategy, SeedInput, SeedStrategy,
    ServeInput, ServeStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "healthbot")]
#[command(about = "Disease lookup chatbot", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/healthbot/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP chat service
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Answer a single message and exit
    Ask {
        /// Message to look up
        #[arg(short = 'm', long)]
        message: String,
    },
    /// Import the spreadsheet into MySQL
    Seed {
        /// Drop existing tables first
        #[arg(long)]
        reset: bool,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and data source status
    Info,
    /// Show version
    Version,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.config;

    match cli.command {
        Commands::Serve { host, port } => {
            ServeStrategy
                .execute(ServeInput {
                    config_path,
                    host,
                    port,
                })
                .await
        }
        Commands::Ask { message } => {
            AskStrategy
                .execute(AskInput {
                    config_path,
                    message,
                })
                .await
        }
        Commands::Seed { reset } => {
            SeedStrategy
                .execute(SeedInput { config_path, reset })
                .await
        }
        Commands::Init => InitStrategy.execute(config_path).await,
        Commands::Info => InfoStrategy.execute(config_path).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
