use std::path::PathBuf;

use thiserror::Error;

/// Rejections raised before a batch reaches the converter.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Validation error: wallet address must be at least {minimum} characters (got {length})")]
    WalletAddressTooShort {
        length: usize,
        minimum: usize
    },
    #[error("Validation error: no file uploaded")]
    MissingInput,
    #[error("Validation error: file is {size} bytes, limit is {limit} bytes")]
    PayloadTooLarge {
        size: u64,
        limit: u64
    },
    #[error("Validation error: [{}] is not a CSV file", .path.display())]
    NotCsv {
        path: PathBuf
    }
}
