use std::io;
use clap::ArgMatches;
use tracing::{debug, info, warn};
use translate_core::{ColumnTranslator, Dictionary, Record, RecordTranslator};
use crate::CliError;
use crate::options::Options;
use crate::reader::read_from_file;
use crate::write::write;

/// Counters for a single run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub translated: usize,
}

pub fn execute(matches: &ArgMatches) -> Result<(), CliError> {
    let options = Options::try_from(matches)?;
    debug!(?options, "options resolved");

    // the whole dictionary is loaded before the first input line is read
    let dictionary = Dictionary::load(&options.dictionary_path, options.dictionary_delimiter)?;
    let translator = ColumnTranslator::new(dictionary, options.column);

    if translator.dictionary().is_empty() {
        warn!(path = %options.dictionary_path.display(), "dictionary is empty, input passes through unchanged");
    }
    info!(entries = translator.dictionary().len(), column = translator.column().one_based(), "dictionary loaded");

    // read input lazily, one record per line
    let records = read_from_file(&options.input_path, options.input_delimiter)?;

    let mut summary = Summary::default();
    let proc_iter = process(records, &translator, &mut summary);

    // output uses the same delimiter as the input
    write(proc_iter, options.input_delimiter)?;

    info!(lines = summary.lines, translated = summary.translated, "done");

    Ok(())
}

/// Translates records one by one as the returned iterator is consumed.
/// A read or translate error is yielded as is, the consumer is expected to abort on it.
pub fn process<'a, I, T>(iter: I, translator: &'a T, summary: &'a mut Summary) -> impl Iterator<Item=Result<Record, CliError>> + 'a
    where I: Iterator<Item=Result<Record, io::Error>> + 'a,
          T: RecordTranslator
{
    iter.map(move |record| -> Result<Record, CliError> {
        let mut record = record?;
        summary.lines += 1;

        if translator.translate(&mut record)? {
            summary.translated += 1;
        }

        Ok(record)
    })
}
