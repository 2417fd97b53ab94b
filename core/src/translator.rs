use crate::{Column, Dictionary, Record, RecordTranslator, TranslateError};

/// Translates a single fixed column of every record through a dictionary.
pub struct ColumnTranslator {
    dictionary: Dictionary,
    column: Column,
}

impl ColumnTranslator {
    pub fn new(dictionary: Dictionary, column: Column) -> Self {
        ColumnTranslator {
            dictionary,
            column,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn column(&self) -> Column {
        self.column
    }
}

impl RecordTranslator for ColumnTranslator {
    fn translate(&self, record: &mut Record) -> Result<bool, TranslateError> {
        record.translate(self.column, &self.dictionary)
    }
}
