use serde::Serialize;

/// Header row of the converted file, in column order.
pub const OUTPUT_HEADERS: [&str; 8] = [
    "Date",
    "Received Quantity",
    "Received Currency",
    "Sent Quantity",
    "Sent Currency",
    "Fee Amount",
    "Fee Currency",
    "Tag"
];

/// One row of the portfolio-tool import file.
///
/// Field order is the column order. Absent values are empty strings.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Received Quantity")]
    pub received_quantity: String,
    #[serde(rename = "Received Currency")]
    pub received_currency: String,
    #[serde(rename = "Sent Quantity")]
    pub sent_quantity: String,
    #[serde(rename = "Sent Currency")]
    pub sent_currency: String,
    #[serde(rename = "Fee Amount")]
    pub fee_amount: String,
    #[serde(rename = "Fee Currency")]
    pub fee_currency: String,
    #[serde(rename = "Tag")]
    pub tag: String
}
