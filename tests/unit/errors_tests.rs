/*!
 * Tests for error types and conversions
 */

use std::io;
use tscleaner::errors::CleanError;

#[test]
fn test_fromIo_notFound_shouldMapToFileNotFound() {
    let error = CleanError::from_io("a.srt", io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(error, CleanError::FileNotFound { .. }));
    assert!(error.to_string().contains("File not found: a.srt"));
}

#[test]
fn test_fromIo_permissionDenied_shouldMapToPermissionDenied() {
    let error = CleanError::from_io("b.srt", io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(matches!(error, CleanError::PermissionDenied { .. }));
    assert!(error.user_message().contains("Permission denied"));
}

#[test]
fn test_fromIo_otherKind_shouldKeepSource() {
    let error = CleanError::from_io("c.srt", io::Error::new(io::ErrorKind::InvalidData, "bad bytes"));
    assert!(matches!(error, CleanError::Io { .. }));
    assert!(error.to_string().contains("bad bytes"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_noTranscriptFiles_shouldDisplayDirectory() {
    let error = CleanError::NoTranscriptFiles { dir: "subs".into() };
    assert!(error.to_string().contains("subs"));
    assert_eq!(
        error.user_message(),
        "No transcript files (.srt or .vtt) found in the directory."
    );
}

#[test]
fn test_invalidInput_userMessage_shouldNamePath() {
    let error = CleanError::InvalidInput { path: "nowhere".into() };
    assert_eq!(error.user_message(), "Error: 'nowhere' is not a valid file or directory.");
}
