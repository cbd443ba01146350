use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::{CleanError, CleanResult};
use crate::file_utils::FileManager;
use crate::transcript_cleaner;
use crate::transcript_format::{self, FormatChoice, TranscriptFormat};

// @module: Application controller for transcript cleaning

/// Outcome of cleaning one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: TranscriptFormat,
    pub lines_removed: usize,
}

/// Totals for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cleaned: Vec<FileReport>,
    pub failed: Vec<PathBuf>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Main application controller. Files are handled one at a time; a failing
/// file is reported and skipped.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Clean a single file or every transcript in a directory.
    ///
    /// Returns an error only when nothing could be processed: the input is
    /// neither a file nor a directory, the output directory cannot be
    /// created, or the directory holds no transcripts. Per-file failures are
    /// recorded in the summary instead.
    pub fn run(&self, input: &Path, output: Option<&Path>) -> CleanResult<RunSummary> {
        if FileManager::file_exists(input) {
            let output_path = match output {
                Some(path) => path.to_path_buf(),
                None => FileManager::generate_output_path(input, "", &self.config.output_prefix),
            };

            let mut summary = RunSummary::default();
            self.record(&mut summary, input, self.process_file(input, &output_path));
            Ok(summary)
        } else if FileManager::dir_exists(input) {
            let output_dir = match output {
                Some(path) => path.to_path_buf(),
                None => std::env::current_dir().map_err(|e| CleanError::from_io(".", e))?,
            };
            self.run_folder(input, &output_dir)
        } else {
            Err(CleanError::InvalidInput { path: input.to_path_buf() })
        }
    }

    /// Clean every `.srt` and `.vtt` file directly inside `input_dir`
    pub fn run_folder(&self, input_dir: &Path, output_dir: &Path) -> CleanResult<RunSummary> {
        info!("Starting transcript cleaning for directory: {}", input_dir.display());

        FileManager::ensure_dir(output_dir)?;

        let transcript_files = FileManager::find_transcript_files(input_dir)?;
        if transcript_files.is_empty() {
            return Err(CleanError::NoTranscriptFiles { dir: input_dir.to_path_buf() });
        }

        debug!("Found {} transcript file(s)", transcript_files.len());

        let mut summary = RunSummary::default();
        for file_path in &transcript_files {
            let output_file = FileManager::generate_output_path(
                file_path,
                output_dir,
                &self.config.output_prefix,
            );
            self.record(&mut summary, file_path, self.process_file(file_path, &output_file));
        }

        info!(
            "Directory done: {} cleaned, {} failed",
            summary.cleaned.len(),
            summary.failed.len()
        );
        Ok(summary)
    }

    /// Read, clean and write one transcript
    pub fn process_file(&self, input_path: &Path, output_path: &Path) -> CleanResult<FileReport> {
        info!("Processing file: {}", input_path.display());

        let document = FileManager::read_to_string(input_path)?;
        let format = self.resolve_format(&document);

        info!("Starting transcript cleaning");
        let cleaned = transcript_cleaner::clean(&document, format);
        info!("Removed {} lines", cleaned.lines_removed());

        FileManager::write_to_file(output_path, &cleaned.text)?;
        info!("Cleaned transcript saved to {}", output_path.display());

        Ok(FileReport {
            input: input_path.to_path_buf(),
            output: output_path.to_path_buf(),
            format,
            lines_removed: cleaned.lines_removed(),
        })
    }

    // @returns: Configured format, or the detected one in auto mode
    fn resolve_format(&self, document: &str) -> TranscriptFormat {
        if let Some(format) = self.config.format.fixed() {
            debug!("Using configured transcript format: {}", format);
            return format;
        }

        debug_assert_eq!(self.config.format, FormatChoice::Auto);
        match transcript_format::detect_format(document) {
            Some(format) => {
                info!("Detected transcript format: {}", format);
                format
            }
            None => {
                warn!("No known format detected, defaulting to SRT");
                TranscriptFormat::default()
            }
        }
    }

    fn record(&self, summary: &mut RunSummary, input: &Path, result: CleanResult<FileReport>) {
        match result {
            Ok(report) => summary.cleaned.push(report),
            Err(e) => {
                Self::report_error(&e);
                summary.failed.push(input.to_path_buf());
            }
        }
    }

    /// Log an error with context and show the user-facing message
    pub fn report_error(error: &CleanError) {
        match error {
            CleanError::NoTranscriptFiles { .. } => warn!("{}", error),
            _ => error!("{}", error),
        }
        println!("{}", error.user_message());
    }
}
