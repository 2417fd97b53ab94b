use std::io::Write;
use translate_core::{Delimiter, Record};
use crate::CliError;

pub fn write(iter: impl Iterator<Item=Result<Record, CliError>>, delimiter: Delimiter) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    write_records(stdout.lock(), iter, delimiter)
}

/// Writes every record as one row joined by `delimiter`, fields are never quoted.
/// Stops at the first error, rows written before it are flushed.
pub fn write_records<W>(writer: W, iter: impl Iterator<Item=Result<Record, CliError>>, delimiter: Delimiter) -> Result<(), CliError>
    where W: Write
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.as_byte())
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in iter {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                writer.flush()?;
                return Err(e);
            }
        };

        // csv quotes an empty record as `""` whatever the quote style
        if record.is_blank() {
            writer.flush()?;
            writer.get_mut().write_all(b"\n")?;
            continue;
        }

        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
