use serde::Deserialize;

use crate::models::TransactionType;

/// Represents a single row from the exported wallet history.
///
/// Only the columns the converter reads are mapped; cost basis, comments,
/// wallet labels and hashes are dropped during decoding. A mapped column
/// that the file's header does not name decodes as an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputRecord {
    /// ISO-8601 instant of the on-chain transaction.
    #[serde(rename = "Date")]
    pub timestamp: String,
    #[serde(rename = "Type")]
    pub transaction_type: TransactionType,
    #[serde(rename = "Received Quantity")]
    pub received_quantity: String,
    #[serde(rename = "Received Currency")]
    pub received_currency: String,
    /// Counterparty address on the receiving side.
    #[serde(rename = "Received Address")]
    pub received_address: String,
    #[serde(rename = "Sent Quantity")]
    pub sent_quantity: String,
    #[serde(rename = "Sent Currency")]
    pub sent_currency: String,
    /// Counterparty address on the sending side.
    #[serde(rename = "Sent Address")]
    pub sent_address: String,
    #[serde(rename = "Fee Amount")]
    pub fee_amount: String,
    #[serde(rename = "Fee Currency")]
    pub fee_currency: String
}
