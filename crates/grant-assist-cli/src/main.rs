//! Grant Assist CLI - check proposal state against funder compliance rules.
//!
//! Works on proposal state exported from the grant-writing app as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::{config as config_cmd, OutputFormat};
use config::Config;

/// Grant Assist CLI - Validate grant proposals before submission.
///
/// Every command that takes STATE reads a proposal snapshot JSON file.
#[derive(Parser, Debug)]
#[command(
    name = "ga",
    author,
    version,
    about = "Grant Assist: compliance validation and submission readiness for grant proposals",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run compliance validation on a proposal.
    Validate {
        /// Proposal state JSON file.
        state: PathBuf,

        /// Output format: text, json or md (defaults to the configured format).
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Write the result to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with an error when the proposal is not ready for submission.
        #[arg(long)]
        strict: bool,
    },

    /// Show the submission readiness checklist and score.
    Readiness {
        /// Proposal state JSON file.
        state: PathBuf,

        /// Output format: text, json or md.
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Re-run validation instead of using the stored result.
        #[arg(long)]
        revalidate: bool,
    },

    /// Write a markdown compliance and readiness report.
    Report {
        /// Proposal state JSON file.
        state: PathBuf,

        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Explain how to resolve a specific issue (e.g. BUDGET-01).
    Fix {
        /// Proposal state JSON file.
        state: PathBuf,

        /// Issue code.
        issue_id: String,
    },

    /// List compliance rules in evaluation order.
    Rules,

    /// Write a sample proposal state file.
    Demo {
        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the compliance HTTP API.
    Serve {
        /// Port to listen on (defaults to the configured port).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load()?;

    match cli.command {
        Commands::Validate {
            state,
            format,
            output,
            strict,
        } => {
            let format = format.unwrap_or(config.default_format);
            commands::validate::execute(&state, format, output.as_deref(), strict)?;
        }

        Commands::Readiness {
            state,
            format,
            revalidate,
        } => {
            let format = format.unwrap_or(config.default_format);
            commands::readiness::execute(&state, format, revalidate)?;
        }

        Commands::Report { state, output } => {
            commands::report::execute(&config, &state, output)?;
        }

        Commands::Fix { state, issue_id } => {
            commands::fix::execute(&state, &issue_id)?;
        }

        Commands::Rules => {
            commands::rules::execute()?;
        }

        Commands::Demo { output } => {
            commands::demo::execute(&config, output)?;
        }

        Commands::Serve { port } => {
            commands::serve::execute(port.unwrap_or(config.port)).await?;
        }

        Commands::Config(config_cmd_inner) => {
            let mut config = config;
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    config_cmd::set(&mut config, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}
