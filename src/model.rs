use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A scheduled event, partitioned by its `date` in the schedule index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub color: Rgb,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub done: bool,
    pub description: String,
}

/// An sRGB color as stored in schedule records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Coarse classification of [`EngineError`], used by callers to decide
/// whether a failure is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    IoFailure,
    MalformedRecord,
    NotFound,
}

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "malformed record{}: {source}",
        .line.map(|n| format!(" on line {n}")).unwrap_or_default()
    )]
    MalformedRecord {
        line: Option<usize>,
        #[source]
        source: RecordError,
    },
    #[error("no such {0}")]
    NotFound(String),
}

/// Why a single line could not be decoded or an item could not be encoded.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has {found} characters, expected at least {expected}")]
    TooShort { expected: usize, found: usize },
    #[error("invalid date field {0:?}")]
    InvalidDate(String),
    #[error("invalid time field {0:?}")]
    InvalidTime(String),
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    #[error("invalid completion flag {0:?}")]
    InvalidFlag(char),
    #[error("description contains a line break")]
    EmbeddedNewline,
    #[error("year {0} does not fit a four digit date key")]
    YearOutOfRange(i32),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Io { .. } => ErrorKind::IoFailure,
            EngineError::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            EngineError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<RecordError> for EngineError {
    fn from(source: RecordError) -> Self {
        EngineError::MalformedRecord { line: None, source }
    }
}

impl Event {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        color: Rgb,
        description: impl Into<String>,
    ) -> Self {
        // Records only carry HHMM.
        let time = time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(time);
        Event {
            date,
            time,
            color,
            description: trim_description(description.into()),
        }
    }
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Task {
            done: false,
            description: trim_description(description.into()),
        }
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

fn trim_description(mut description: String) -> String {
    let len = description.trim_end().len();
    description.truncate(len);
    description
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Six lowercase hex digits, no leading `#`.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses exactly six hex digits (either case), no leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, RecordError> {
        let invalid = || RecordError::InvalidColor(hex.to_string());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rgb::from_hex(s.strip_prefix('#').unwrap_or(s))
    }
}

impl TryFrom<String> for Rgb {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_lose_trailing_whitespace() {
        let task = Task::new("buy milk  \t");
        assert_eq!(task.description, "buy milk");
        assert!(!task.done);
        assert_eq!(Task::new("  indented").description, "  indented");
    }

    #[test]
    fn hex_colors_parse_in_either_case() {
        assert_eq!(Rgb::from_hex("FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("#0a0b0c".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
        assert_eq!(Rgb::new(255, 128, 0).to_hex(), "ff8000");
        assert_eq!(Rgb::new(255, 128, 0).to_string(), "#ff8000");
    }

    #[test]
    fn bad_hex_is_rejected() {
        for bad in ["", "fff", "gg0000", "#ff0000", "ff00001", "+f0000"] {
            assert!(Rgb::from_hex(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn error_kinds() {
        let err: EngineError = RecordError::EmbeddedNewline.into();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
        assert_eq!(
            err.to_string(),
            "malformed record: description contains a line break"
        );
        let err = EngineError::MalformedRecord {
            line: Some(3),
            source: RecordError::InvalidFlag('x'),
        };
        assert_eq!(
            err.to_string(),
            "malformed record on line 3: invalid completion flag 'x'"
        );
        assert_eq!(
            EngineError::NotFound("task".into()).kind(),
            ErrorKind::NotFound
        );
    }
}
