use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A scroll-driven personal portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Section to scroll to on start
        #[arg(short = 'a', long = "at")]
        at: Option<String>,
    },
    /// Print where each section lands for a terminal size
    Sections {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Terminal width in cells
        #[arg(short = 'w', long, default_value_t = 100)]
        width: u16,
        /// Terminal height in cells
        #[arg(long, default_value_t = 40)]
        height: u16,
    },
    /// Open the CV with the system viewer
    Cv,
    /// Write the default config and sample content
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config and content files
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let tui = matches!(cli.command, None | Some(Commands::Run { .. }));
    init_logging(&config, tui)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run { at }) => commands::run::run(config, at).await,
        None => commands::run::run(config, None).await,
        Some(Commands::Sections {
            json,
            width,
            height,
        }) => commands::sections::run(&config, width, height, json),
        Some(Commands::Cv) => commands::cv::run(&config),
        Some(Commands::Init { force }) => commands::init::run(&config, force),
        Some(Commands::Check) => commands::check::run(&config),
    }
}

/// RUST_LOG wins over the configured level. While the TUI owns the terminal,
/// logs go to a file in the data directory.
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if tui {
        std::fs::create_dir_all(config.data_dir())?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
