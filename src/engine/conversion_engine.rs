use tracing::{debug, info, warn};

use crate::codec;
use crate::converter::convert;
use crate::engine::EngineError;
use crate::models::{InputRecord, OutputRecord};
use crate::types::ConversionContext;

/// Outcome of one converted batch.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// The converted file, header row included.
    pub csv: String,
    pub rows: usize,
    /// Rows whose type was outside the known vocabulary (still converted).
    pub unrecognized: usize
}

/// Runs decode, per-row conversion and encode for one uploaded file.
pub struct ConversionEngine {
    context: ConversionContext
}

impl ConversionEngine {
    pub fn new(context: ConversionContext) -> Self {
        Self { context }
    }

    /// Converts a whole export buffer.
    ///
    /// # Errors
    /// Returns `EngineError::Decode` if any row of the buffer cannot be read;
    /// no partial output is produced in that case.
    pub fn run(&self, bytes: &[u8]) -> Result<ConversionReport, EngineError> {
        let records = codec::decode(bytes).map_err(EngineError::Decode)?;

        info!("Parsed {} transactions for wallet [{}]", records.len(), self.context.origin);

        let (converted, unrecognized) = self.convert_all(&records);
        let csv = codec::encode(&converted).map_err(EngineError::Encode)?;

        info!("Converted {} transactions ({} with unrecognized types)", converted.len(), unrecognized);

        Ok(ConversionReport {
            csv,
            rows: converted.len(),
            unrecognized
        })
    }

    /// Converts already decoded rows, preserving their order.
    pub fn convert_all(&self, records: &[InputRecord]) -> (Vec<OutputRecord>, usize) {
        let origin = self.context.origin_address();
        let mut unrecognized = 0;

        let converted = records.iter()
            .enumerate()
            .map(|(index, record)| {
                if !record.transaction_type.is_recognized() {
                    unrecognized += 1;
                    warn!("Row [{}] has unrecognized type [{}], tagging as [{}]", index + 1, record.transaction_type, record.transaction_type.tag());
                }

                let output = convert(record, origin);
                debug!("Row [{}]:[{}] converted", index + 1, record.transaction_type);
                output
            })
            .collect();

        (converted, unrecognized)
    }
}
