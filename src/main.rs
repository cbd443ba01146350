// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

use tscleaner::app_config::{Config, LogLevel};
use tscleaner::app_controller::Controller;
use tscleaner::logging::{self, LoggingOptions};
use tscleaner::transcript_format::FormatChoice;

/// CLI Wrapper for FormatChoice to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Srt,
    Vtt,
    Simple,
    Auto,
}

impl From<CliFormat> for FormatChoice {
    fn from(cli_format: CliFormat) -> Self {
        match cli_format {
            CliFormat::Srt => FormatChoice::Srt,
            CliFormat::Vtt => FormatChoice::Vtt,
            CliFormat::Simple => FormatChoice::Simple,
            CliFormat::Auto => FormatChoice::Auto,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for tscleaner
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// tscleaner - strip timestamps and cue numbers from transcripts
#[derive(Parser, Debug)]
#[command(name = "tscleaner")]
#[command(version)]
#[command(about = "Clean transcript files by removing timestamps and line numbers.")]
#[command(long_about = "tscleaner turns SRT, WebVTT and simple timed transcripts into plain text.

EXAMPLES:
    tscleaner talk.srt                      # Writes cleaned_talk.srt in the current directory
    tscleaner talk.vtt -o talk.txt          # Choose the output file
    tscleaner --format simple notes.srt     # Skip auto-detection
    tscleaner subs/ -o cleaned/             # Clean every .srt and .vtt file in subs/
    tscleaner completions bash > tscleaner.bash")]
#[command(args_conflicts_with_subcommands = true)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the input file or directory
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file or directory (default: cleaned_<input>)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Transcript format (default: auto-detect)
    #[arg(long, value_enum)]
    format: Option<CliFormat>,

    /// Optional JSON configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Log file path (default: transcript_cleaning.log)
    #[arg(long, value_name = "LOG_FILE", conflicts_with = "no_log_file")]
    log_file: Option<PathBuf>,

    /// Log to the console only
    #[arg(long)]
    no_log_file: bool,
}

fn main() -> Result<ExitCode> {
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "tscleaner", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(input) = cli.input.clone() else {
        CommandLineOptions::command()
            .error(clap::error::ErrorKind::MissingRequiredArgument, "INPUT is required")
            .exit();
    };

    let config = build_config(&cli)?;

    let log_options = LoggingOptions {
        level: config.log_level.to_level_filter(),
        log_file: config.log_file.as_ref().map(PathBuf::from),
    };
    let log_guard = logging::init(&log_options)?;
    debug!("Effective configuration: {:?}", config);

    let controller = Controller::with_config(config);
    let exit_code = match controller.run(&input, cli.output.as_deref()) {
        Ok(summary) => {
            info!(
                "Finished: {} file(s) cleaned, {} failed",
                summary.cleaned.len(),
                summary.failed.len()
            );
            if summary.has_failures() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            Controller::report_error(&e);
            match e {
                tscleaner::CleanError::NoTranscriptFiles { .. } => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            }
        }
    };

    drop(log_guard);
    Ok(exit_code)
}

// @returns: Config from file or defaults, with CLI overrides applied
fn build_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(format) = cli.format {
        config.format = format.into();
    }

    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }

    if cli.no_log_file {
        config.log_file = None;
    } else if let Some(log_file) = &cli.log_file {
        config.log_file = Some(log_file.to_string_lossy().into_owned());
    }

    config.validate()?;
    Ok(config)
}
