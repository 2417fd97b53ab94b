use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum TranslateError {
    // Can't open file: path does not exist
    FileNotFound(PathBuf),

    // Can't read file: any other I/O failure
    Io(io::Error),

    // Can't load dictionary: line has a key but no value (or no key at all)
    // line is 1-based
    MalformedDictionaryLine {
        line: usize,
        content: String,
    },

    // Can't translate record: record has fewer fields than the target column
    // line and column are 1-based
    ColumnOutOfRange {
        line: usize,
        column: usize,
        fields: usize,
    },
}

impl Display for TranslateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::FileNotFound(path) => {
                write!(f, "file not found: {}", path.display())
            }
            TranslateError::Io(e) => write!(f, "io error: {}", e),
            TranslateError::MalformedDictionaryLine { line, content } => {
                write!(f, "malformed dictionary line {}: {:?} has no value", line, content)
            }
            TranslateError::ColumnOutOfRange { line, column, fields } => {
                write!(f, "line {}: column {} out of range, record has {} field(s)", line, column, fields)
            }
        }
    }
}

impl Error for TranslateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranslateError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TranslateError {
    fn from(e: io::Error) -> Self {
        TranslateError::Io(e)
    }
}
