/*!
 * Error types for the tscleaner application.
 *
 * Per-file failures are typed with thiserror so the controller can report
 * them and move on to the next file.
 */

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while cleaning transcripts
#[derive(Error, Debug)]
pub enum CleanError {
    /// The input file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
    },

    /// The file or its directory is not accessible
    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
    },

    /// Any other I/O failure, including input that is not valid UTF-8
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory mode found nothing to clean
    #[error("No transcript files (.srt or .vtt) found in directory: {}", dir.display())]
    NoTranscriptFiles {
        dir: PathBuf,
    },

    /// The input is neither a file nor a directory
    #[error("'{}' is not a valid file or directory", path.display())]
    InvalidInput {
        path: PathBuf,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CleanError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io<P: AsRef<Path>>(path: P, error: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: error },
        }
    }

    /// The message shown to the user on stdout
    pub fn user_message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("Error: The file '{}' was not found.", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("Error: Permission denied when accessing '{}'.", path.display())
            }
            Self::Io { source, .. } => format!("An unexpected error occurred: {}", source),
            Self::NoTranscriptFiles { .. } => {
                "No transcript files (.srt or .vtt) found in the directory.".to_string()
            }
            Self::InvalidInput { path } => {
                format!("Error: '{}' is not a valid file or directory.", path.display())
            }
            Self::Config(message) => format!("Error: {}", message),
        }
    }
}

pub type CleanResult<T> = std::result::Result<T, CleanError>;
