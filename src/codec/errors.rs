use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Decode error: {0}")]
    Decode(csv::Error),
    #[error("Decode error: quoted field starting on line {line} is never closed")]
    UnterminatedQuote {
        line: u64
    },
    #[error("Encode error: {0}")]
    Encode(csv::Error),
    #[error("Encode error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encode error: {0}")]
    Utf8(#[from] FromUtf8Error)
}

impl CodecError {
    /// Line of the offending input record, when the csv reader knows it.
    pub fn line(&self) -> Option<u64> {
        match self {
            CodecError::Decode(error) => error.position().map(|position| position.line()),
            CodecError::UnterminatedQuote { line } => Some(*line),
            _ => None
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CodecError::Decode(_) | CodecError::UnterminatedQuote { .. })
    }
}
