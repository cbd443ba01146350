use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::{CleanError, CleanResult};

// @module: File and directory utilities

// @const: Extensions discovered in directory mode, in processing order
pub const TRANSCRIPT_EXTENSIONS: [&str; 2] = ["srt", "vtt"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> CleanResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || path.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|e| CleanError::from_io(path, e))
    }

    // @generates: Output path for a cleaned transcript
    // @params: input_file, output_dir, prefix
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        prefix: &str,
    ) -> PathBuf {
        let file_name = input_file.as_ref().file_name().unwrap_or_default();

        let mut output_filename = prefix.to_string();
        output_filename.push_str(&file_name.to_string_lossy());

        output_dir.as_ref().join(output_filename)
    }

    /// Find transcript files directly inside `dir`: all `.srt` files first,
    /// then all `.vtt` files, each group sorted by name. Hidden files and
    /// subdirectories are skipped.
    pub fn find_transcript_files<P: AsRef<Path>>(dir: P) -> CleanResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut candidates = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                match e.into_io_error() {
                    Some(io_error) => CleanError::from_io(path, io_error),
                    None => CleanError::Io {
                        path,
                        source: std::io::Error::other("filesystem loop detected"),
                    },
                }
            })?;

            if !entry.path().is_file() || entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            candidates.push(entry.into_path());
        }

        let mut result = Vec::new();
        for extension in TRANSCRIPT_EXTENSIONS {
            result.extend(
                candidates
                    .iter()
                    .filter(|path| Self::has_extension(path, extension))
                    .cloned(),
            );
        }

        Ok(result)
    }

    /// Case-insensitive extension check
    pub fn has_extension<P: AsRef<Path>>(path: P, extension: &str) -> bool {
        path.as_ref()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> CleanResult<String> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| CleanError::from_io(path, e))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> CleanResult<()> {
        let path = path.as_ref();

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(path, content).map_err(|e| CleanError::from_io(path, e))
    }
}
