use std::num::NonZeroUsize;
use serde::Serialize;
use crate::{Delimiter, Dictionary, TranslateError};

/// Column targeted for translation.
/// Supplied 1-based from outside, stored 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column(usize);

impl Column {
    pub fn from_one_based(column: NonZeroUsize) -> Self {
        Column(column.get() - 1)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

/// One line of a delimited file viewed as an ordered sequence of fields.
/// Serializes as a plain sequence so it can be written as one csv row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,

    // 1-based, only used for error reporting
    #[serde(skip)]
    line: usize,
}

impl Record {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Record {
            fields,
            line,
        }
    }

    pub fn parse(line: usize, text: &str, delimiter: Delimiter) -> Self {
        let fields = delimiter.split(text).into_iter().map(str::to_string).collect();
        Record::new(line, fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// A blank line: no fields, or a single empty one.
    pub fn is_blank(&self) -> bool {
        self.fields.len() <= 1 && self.fields.iter().all(String::is_empty)
    }

    /// Replace the field at `column` with its dictionary translation.
    /// Multi-field translations expand in place, later fields shift right.
    /// Returns true when a translation was found.
    pub fn translate(&mut self, column: Column, dictionary: &Dictionary) -> Result<bool, TranslateError> {
        let field = self.fields.get(column.index()).ok_or_else(|| TranslateError::ColumnOutOfRange {
            line: self.line,
            column: column.one_based(),
            fields: self.fields.len(),
        })?;

        match dictionary.get(field.trim_end()) {
            Some(translation) => {
                let index = column.index();
                self.fields.splice(index..=index, translation.fields().iter().cloned());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
