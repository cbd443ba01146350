/*!
 * Transcript cleaning.
 *
 * Removes the timestamp ranges of one format, bare cue-number lines and
 * blank lines, leaving the spoken text one line per surviving line.
 */

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::transcript_format::TranscriptFormat;

// @const: A line holding nothing but a cue number
static SEQUENCE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\s*$").unwrap()
});

/// Result of cleaning one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedTranscript {
    /// Cleaned text, lines joined with `\n`
    pub text: String,

    /// Number of lines in the raw input
    pub input_lines: usize,

    /// Number of lines in the cleaned text
    pub output_lines: usize,
}

impl CleanedTranscript {
    /// Lines dropped by cleaning
    pub fn lines_removed(&self) -> usize {
        self.input_lines.saturating_sub(self.output_lines)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Clean a transcript using the timestamp pattern of `format`.
///
/// Only the pattern of the given format is stripped. Any line made up solely
/// of digits is treated as a cue number and dropped, whatever its context.
pub fn clean(text: &str, format: TranscriptFormat) -> CleanedTranscript {
    let input_lines = text.split('\n').count();

    let stripped = strip_timestamps(text, format);

    let lines: Vec<&str> = stripped
        .split('\n')
        .filter(|line| !SEQUENCE_LINE_REGEX.is_match(line))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    CleanedTranscript {
        input_lines,
        output_lines: lines.len(),
        text: lines.join("\n"),
    }
}

/// Remove every timestamp range of `format`, repeating until none is left
/// since a removal can splice the halves of a new range together.
fn strip_timestamps(text: &str, format: TranscriptFormat) -> Cow<'_, str> {
    let regex = format.timestamp_regex();
    let mut current = Cow::Borrowed(text);
    while regex.is_match(&current) {
        let replaced = regex.replace_all(&current, "").into_owned();
        current = Cow::Owned(replaced);
    }
    current
}
