use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use onboard::cli::{handle_logo_command, handle_validate_command, LogoCommands};
use onboard::config::{OnboardPaths, Settings};
use onboard::logging;

#[derive(Parser)]
#[command(
    name = "onboard",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based company onboarding wizard",
    long_about = "Collects company, address and bank, and services information \
                  in three validated steps, then saves the combined record."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive wizard (default)
    #[command(alias = "ui")]
    Tui,

    /// Validate a JSON draft against one step's rules
    Validate {
        /// Step number (1-3)
        #[arg(short, long)]
        step: u8,
        /// Path to the JSON draft
        file: PathBuf,
    },

    /// Stored logo commands
    #[command(subcommand)]
    Logo(LogoCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = OnboardPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            let _guard = logging::init_tui(&paths, &settings)?;
            onboard::tui::run_tui(&paths, &settings)?;
        }
        Some(Commands::Validate { step, file }) => {
            logging::init_cli(&settings)?;
            if !handle_validate_command(step, &file)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Logo(cmd)) => {
            logging::init_cli(&settings)?;
            handle_logo_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Onboard Configuration");
            println!("=====================");
            println!("Base directory:        {}", paths.base_dir().display());
            println!("Settings file:         {}", paths.settings_file().display());
            println!("Blob directory:        {}", paths.blob_dir().display());
            println!("Submissions directory: {}", paths.submissions_dir().display());
            println!("Log directory:         {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!(
                "  Blob database:        {} (v{})",
                settings.blob_database, settings.blob_version
            );
            println!("  Persist attachments:  {}", settings.persist_attachments);
            println!("  Save submissions:     {}", settings.save_submissions);
            println!("  Log filter:           {}", settings.log_filter);
        }
    }

    Ok(ExitCode::SUCCESS)
}
