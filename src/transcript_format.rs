use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// @module: Transcript timestamp formats and format detection

// @const: SRT range, comma-separated milliseconds
static SRT_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}").unwrap()
});

// @const: WebVTT range, dot-separated milliseconds
static VTT_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}:\d{2}:\d{2}\.\d{3} --> \d{2}:\d{2}:\d{2}\.\d{3}").unwrap()
});

// @const: Loose M:SS range, optional hour digit and milliseconds
static SIMPLE_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}:\d{2}(,\d{1,3})? --> \d{1,2}:\d{2}(,\d{1,3})?").unwrap()
});

/// A known transcript timestamp format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptFormat {
    /// SubRip, `00:00:01,000 --> 00:00:02,000`
    #[default]
    Srt,
    /// WebVTT, `00:00:01.000 --> 00:00:02.000`
    Vtt,
    /// Loosely timed, `0:01 --> 0:02,500`
    Simple,
}

impl TranscriptFormat {
    /// Formats in detection priority order
    pub const ALL: [TranscriptFormat; 3] = [Self::Srt, Self::Vtt, Self::Simple];

    /// The timestamp-range pattern stripped for this format
    pub fn timestamp_regex(&self) -> &'static Regex {
        match self {
            Self::Srt => &*SRT_TIMESTAMP_REGEX,
            Self::Vtt => &*VTT_TIMESTAMP_REGEX,
            Self::Simple => &*SIMPLE_TIMESTAMP_REGEX,
        }
    }

    // @returns: Lowercase format identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Simple => "simple",
        }
    }
}

impl fmt::Display for TranscriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TranscriptFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" => Ok(Self::Vtt),
            "simple" => Ok(Self::Simple),
            _ => Err(anyhow!("Invalid transcript format: {}", s)),
        }
    }
}

/// What the user asked for: a fixed format or auto-detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    Srt,
    Vtt,
    Simple,
    #[default]
    Auto,
}

impl FormatChoice {
    /// The fixed format, or `None` when detection is needed
    pub fn fixed(&self) -> Option<TranscriptFormat> {
        match self {
            Self::Srt => Some(TranscriptFormat::Srt),
            Self::Vtt => Some(TranscriptFormat::Vtt),
            Self::Simple => Some(TranscriptFormat::Simple),
            Self::Auto => None,
        }
    }
}

impl From<TranscriptFormat> for FormatChoice {
    fn from(format: TranscriptFormat) -> Self {
        match format {
            TranscriptFormat::Srt => Self::Srt,
            TranscriptFormat::Vtt => Self::Vtt,
            TranscriptFormat::Simple => Self::Simple,
        }
    }
}

impl FromStr for FormatChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        s.parse::<TranscriptFormat>().map(Self::from)
    }
}

/// Find the first format, in priority order, whose timestamp pattern occurs
/// anywhere in the text.
pub fn detect_format(text: &str) -> Option<TranscriptFormat> {
    TranscriptFormat::ALL
        .into_iter()
        .find(|format| format.timestamp_regex().is_match(text))
}

/// Detect the format, falling back to SRT when nothing matches
pub fn detect(text: &str) -> TranscriptFormat {
    detect_format(text).unwrap_or_default()
}
