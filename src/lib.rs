/*!
 * # tscleaner - transcript cleaner
 *
 * Turns SRT, WebVTT and loosely timed "simple" subtitle files into plain
 * text transcripts by stripping timestamp ranges, cue numbers and blank
 * lines.
 *
 * ## Architecture
 *
 * - `transcript_format`: timestamp patterns and format detection
 * - `transcript_cleaner`: the cleaning passes
 * - `file_utils`: file discovery, reading and writing
 * - `app_controller`: per-file and per-directory driver
 * - `app_config`: configuration defaults and JSON loading
 * - `logging`: console and file logger
 * - `errors`: error types for the application
 *
 * Detection and cleaning are pure and never log; the controller does.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod logging;
pub mod transcript_cleaner;
pub mod transcript_format;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FileReport, RunSummary};
pub use errors::CleanError;
pub use transcript_cleaner::{clean, CleanedTranscript};
pub use transcript_format::{detect, detect_format, FormatChoice, TranscriptFormat};
