use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use csv::ErrorKind;
use translate_core::TranslateError;
use crate::error::ErrorType::{CsvOther, CsvWrite, FileNotFound, IndexOutOfRange, MalformedDictionaryLine, IO};

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorType {
    CliParseError,
    InvalidArgument,
    FileNotFound,
    IO,
    MalformedDictionaryLine,
    IndexOutOfRange,
    CsvWrite,
    CsvOther,
}

pub struct CliError {
    message: String,
    error_type: ErrorType,
}

impl CliError {
    pub fn new<T>(error_type: ErrorType, message: T) -> Self
        where T: ToString
    {
        CliError {
            error_type,
            message: message.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[allow(dead_code)]
    pub fn error_type(&self) -> &ErrorType {
        &self.error_type
    }
}

impl Debug for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "App error type: {:?}, Message: {}", self.error_type, self.message)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for CliError {}

impl From<TranslateError> for CliError {
    fn from(e: TranslateError) -> Self {
        let error_type = match &e {
            TranslateError::FileNotFound(_) => FileNotFound,
            TranslateError::Io(_) => IO,
            TranslateError::MalformedDictionaryLine { .. } => MalformedDictionaryLine,
            TranslateError::ColumnOutOfRange { .. } => IndexOutOfRange,
        };
        CliError::new(error_type, e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            ErrorKind::Io(e) => CliError::new(IO, e.to_string()),
            ErrorKind::Serialize(e) => CliError::new(CsvWrite, e),
            _ => CliError::new(CsvOther, e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => CliError::new(FileNotFound, e.to_string()),
            _ => CliError::new(IO, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use translate_core::TranslateError;
    use crate::{CliError, ErrorType};

    #[test]
    fn translate_error_mapping() {
        let e: CliError = TranslateError::FileNotFound(PathBuf::from("dict.tsv")).into();
        assert_eq!(e.error_type(), &ErrorType::FileNotFound);
        assert!(e.message().contains("dict.tsv"));

        let e: CliError = TranslateError::ColumnOutOfRange { line: 3, column: 5, fields: 2 }.into();
        assert_eq!(e.error_type(), &ErrorType::IndexOutOfRange);
        assert_eq!(e.message(), "line 3: column 5 out of range, record has 2 field(s)");

        let e: CliError = TranslateError::MalformedDictionaryLine { line: 1, content: "key".to_string() }.into();
        assert_eq!(e.error_type(), &ErrorType::MalformedDictionaryLine);
    }

    #[test]
    fn debug_output() {
        let e = CliError::new(ErrorType::InvalidArgument, "column: invalid digit found in string");
        assert_eq!(format!("{}", e), "App error type: InvalidArgument, Message: column: invalid digit found in string");
    }
}
