//! Core library for translating one column of a delimited file through a dictionary.
//! A dictionary maps a key to a single value (tab delimited) or to a list of fields (space delimited).
//! Records are translated through the RecordTranslator trait; ColumnTranslator is the default implementation.

pub mod delimiter;
pub mod dictionary;
pub mod error;
pub mod record;
pub mod translator;

pub use crate::delimiter::Delimiter;
pub use crate::dictionary::{Dictionary, Translation};
pub use crate::error::TranslateError;
pub use crate::record::{Column, Record};
pub use crate::translator::ColumnTranslator;

/// Record translator trait is abstraction about translating a single record.
/// Returns true if the record was changed, a missing dictionary entry is not an error.
pub trait RecordTranslator {
    fn translate(&self, record: &mut Record) -> Result<bool, TranslateError>;
}
