use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;
use translate_core::{Delimiter, Record, TranslateError};

pub fn read_from_file<T>(file_path: T, delimiter: Delimiter) -> Result<impl Iterator<Item=Result<Record, io::Error>>, TranslateError>
    where T: AsRef<Path>
{
    let file_path = file_path.as_ref();
    let file = File::open(file_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TranslateError::FileNotFound(file_path.to_path_buf()),
        _ => TranslateError::Io(e),
    })?;

    Ok(read_records(BufReader::new(file), delimiter))
}

/// Lazy, one record per line, line numbers are 1-based.
pub fn read_records<R>(reader: R, delimiter: Delimiter) -> impl Iterator<Item=Result<Record, io::Error>>
    where R: BufRead
{
    reader.lines()
        .enumerate()
        .map(move |(index, line)| line.map(|line| Record::parse(index + 1, &line, delimiter)))
}
