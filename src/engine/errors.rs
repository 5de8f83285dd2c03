use thiserror::Error;

use crate::codec::CodecError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to process file{loc}: {err}", loc = at_line(.0), err = .0)]
    Decode(#[source] CodecError),
    #[error("failed to write converted file: {0}")]
    Encode(#[source] CodecError)
}

fn at_line(error: &CodecError) -> String {
    error.line()
        .map(|line| format!(" (line {line})"))
        .unwrap_or_default()
}
