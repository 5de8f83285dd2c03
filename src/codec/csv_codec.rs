use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use tracing::debug;

use crate::codec::CodecError;
use crate::models::{InputRecord, OutputRecord, OUTPUT_HEADERS};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses a header-led CSV buffer into input records, in file order.
///
/// Cells are trimmed. Columns absent from the header decode as empty values,
/// but every row must have as many cells as the header. The first
/// undecodable row fails the whole buffer.
pub fn decode(bytes: &[u8]) -> Result<Vec<InputRecord>, CodecError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(bytes);

    let headers = reader.headers().map_err(CodecError::Decode)?.clone();
    let mut record = StringRecord::new();
    let mut records = Vec::new();
    let mut last_start = (0, 1);

    while reader.read_record(&mut record).map_err(CodecError::Decode)? {
        if let Some(position) = record.position() {
            last_start = (position.byte(), position.line());
        }

        records.push(record.deserialize::<InputRecord>(Some(&headers)).map_err(CodecError::Decode)?);
    }

    //NOTE: An unclosed quote runs to the end of the buffer, so only the final record can hold one
    let (byte, line) = last_start;
    let tail = usize::try_from(byte).ok().and_then(|start| bytes.get(start..)).unwrap_or_default();

    if ends_inside_quotes(tail) {
        return Err(CodecError::UnterminatedQuote { line });
    }

    debug!("Decoded {} records from {} bytes", records.len(), bytes.len());

    Ok(records)
}

/// Replays the reader's quoting rules: a quote only opens a field at its
/// first byte, and `""` inside a quoted field is an escaped quote.
fn ends_inside_quotes(tail: &[u8]) -> bool {
    let mut in_quotes = false;
    let mut field_start = true;
    let mut bytes = tail.iter().peekable();

    while let Some(&byte) = bytes.next() {
        if in_quotes {
            if byte == b'"' && bytes.next_if_eq(&&b'"').is_none() {
                in_quotes = false;
            }
            continue;
        }

        match byte {
            b'"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            b',' | b'\n' | b'\r' => field_start = true,
            _ => field_start = false
        }
    }

    in_quotes
}

/// Writes the header row followed by one line per record.
pub fn encode(records: &[OutputRecord]) -> Result<String, CodecError> {
    //NOTE: Headers are written by hand so an empty batch still produces the header line
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_HEADERS).map_err(CodecError::Encode)?;

    for record in records {
        writer.serialize(record).map_err(CodecError::Encode)?;
    }

    let bytes = writer.into_inner().map_err(|error| CodecError::Io(error.into_error()))?;

    Ok(String::from_utf8(bytes)?)
}
