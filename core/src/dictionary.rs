use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;
use crate::{Delimiter, TranslateError};

/// Value a dictionary key translates to.
/// Tab delimited dictionaries hold a single value per key,
/// space delimited dictionaries hold every field after the key, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Single(String),
    Fields(Vec<String>),
}

impl Translation {
    pub fn fields(&self) -> &[String] {
        match self {
            Translation::Single(value) => std::slice::from_ref(value),
            Translation::Fields(values) => values,
        }
    }
}

/// In-memory key -> translation mapping.
/// Built once from a dictionary file, read only afterwards.
/// Duplicate keys: last write wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    inner: HashMap<String, Translation>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            inner: HashMap::new()
        }
    }

    pub fn load<T>(path: T, delimiter: Delimiter) -> Result<Self, TranslateError>
        where T: AsRef<Path>
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TranslateError::FileNotFound(path.to_path_buf()),
            _ => TranslateError::Io(e),
        })?;

        let dictionary = Self::from_reader(BufReader::new(file), delimiter)?;
        debug!(path = %path.display(), entries = dictionary.len(), ?delimiter, "dictionary loaded");

        Ok(dictionary)
    }

    pub fn from_reader<R>(reader: R, delimiter: Delimiter) -> Result<Self, TranslateError>
        where R: BufRead
    {
        let mut dictionary = Dictionary::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let (key, translation) = parse_line(&line, delimiter).ok_or_else(|| {
                TranslateError::MalformedDictionaryLine {
                    line: index + 1,
                    content: line.clone(),
                }
            })?;

            dictionary.insert(key, translation);
        }

        Ok(dictionary)
    }

    pub fn insert(&mut self, key: String, translation: Translation) {
        if let Some(previous) = self.inner.insert(key, translation) {
            debug!(?previous, "duplicate dictionary key overwritten");
        }
    }

    pub fn get(&self, key: &str) -> Option<&Translation> {
        self.inner.get(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// None when the line has no value for its key
fn parse_line(line: &str, delimiter: Delimiter) -> Option<(String, Translation)> {
    let mut fields = delimiter.split(line).into_iter();
    let key = fields.next()?;

    let translation = match delimiter {
        // an empty value is allowed, extra fields are ignored
        Delimiter::Tab => Translation::Single(fields.next()?.to_string()),
        Delimiter::Space => {
            let values: Vec<String> = fields.map(str::to_string).collect();
            if values.is_empty() {
                return None;
            }
            Translation::Fields(values)
        }
    };

    Some((key.to_string(), translation))
}
