use std::num::NonZeroUsize;
use std::path::PathBuf;
use clap::ArgMatches;
use translate_core::{Column, Delimiter};
use crate::cli::{COLUMN, DICTIONARY_PATH, INPUT_PATH, SPACE, SPACE_DICT, SPACE_INPUT};
use crate::{CliError, ErrorType};

/// Run options, resolved once from the command line before any processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub column: Column,
    pub dictionary_delimiter: Delimiter,
    pub input_delimiter: Delimiter,
}

impl TryFrom<&ArgMatches> for Options {
    type Error = CliError;

    fn try_from(matches: &ArgMatches) -> Result<Self, Self::Error> {
        let input_path = required(matches, INPUT_PATH)?;
        let dictionary_path = required(matches, DICTIONARY_PATH)?;

        let column = required(matches, COLUMN)?
            .parse::<NonZeroUsize>()
            .map_err(|e| CliError::new(ErrorType::InvalidArgument, format!("column: {}", e)))?;

        let space = matches.is_present(SPACE);

        Ok(Options {
            input_path: PathBuf::from(input_path),
            dictionary_path: PathBuf::from(dictionary_path),
            column: Column::from_one_based(column),
            dictionary_delimiter: Delimiter::from_space_flag(space || matches.is_present(SPACE_DICT)),
            input_delimiter: Delimiter::from_space_flag(space || matches.is_present(SPACE_INPUT)),
        })
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, CliError> {
    matches.value_of(name).ok_or_else(|| {
        // this should not happen at this stage
        CliError::new(ErrorType::CliParseError, format!("Arg {} not found", name))
    })
}
