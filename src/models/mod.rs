mod output;
#[cfg(test)]
mod tests;
mod transaction;

use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use output::{OutputRecord, OUTPUT_HEADERS};
pub use transaction::InputRecord;

/// Transaction vocabulary of the wallet export.
///
/// Anything outside the known set is kept verbatim in `Unrecognized` so the
/// converter can still emit a row for it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TransactionType {
    AddLiquidity,
    Airdrop,
    Bridge,
    Buy,
    InterestPayment,
    Mint,
    RemoveLiquidity,
    Receive,
    Send,
    Sell,
    Spam,
    Stake,
    Trade,
    Transfer,
    Unstake,
    Wrap,
    Unrecognized(String)
}

impl TransactionType {
    pub const KNOWN: [TransactionType; 16] = [
        TransactionType::AddLiquidity,
        TransactionType::Airdrop,
        TransactionType::Bridge,
        TransactionType::Buy,
        TransactionType::InterestPayment,
        TransactionType::Mint,
        TransactionType::RemoveLiquidity,
        TransactionType::Receive,
        TransactionType::Send,
        TransactionType::Sell,
        TransactionType::Spam,
        TransactionType::Stake,
        TransactionType::Trade,
        TransactionType::Transfer,
        TransactionType::Unstake,
        TransactionType::Wrap
    ];

    /// Case-insensitive, never fails.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        match raw.to_uppercase().as_str() {
            "ADD_LIQUIDITY" => TransactionType::AddLiquidity,
            "AIRDROP" => TransactionType::Airdrop,
            "BRIDGE" => TransactionType::Bridge,
            "BUY" => TransactionType::Buy,
            "INTEREST_PAYMENT" => TransactionType::InterestPayment,
            "MINT" => TransactionType::Mint,
            "REMOVE_LIQUIDITY" => TransactionType::RemoveLiquidity,
            "RECEIVE" => TransactionType::Receive,
            "SEND" => TransactionType::Send,
            "SELL" => TransactionType::Sell,
            "SPAM" => TransactionType::Spam,
            "STAKE" => TransactionType::Stake,
            "TRADE" => TransactionType::Trade,
            "TRANSFER" => TransactionType::Transfer,
            "UNSTAKE" => TransactionType::Unstake,
            "WRAP" => TransactionType::Wrap,
            _ => TransactionType::Unrecognized(raw.to_string())
        }
    }

    /// Canonical uppercase name as it appears in the export.
    pub fn name(&self) -> &str {
        match self {
            TransactionType::AddLiquidity => "ADD_LIQUIDITY",
            TransactionType::Airdrop => "AIRDROP",
            TransactionType::Bridge => "BRIDGE",
            TransactionType::Buy => "BUY",
            TransactionType::InterestPayment => "INTEREST_PAYMENT",
            TransactionType::Mint => "MINT",
            TransactionType::RemoveLiquidity => "REMOVE_LIQUIDITY",
            TransactionType::Receive => "RECEIVE",
            TransactionType::Send => "SEND",
            TransactionType::Sell => "SELL",
            TransactionType::Spam => "SPAM",
            TransactionType::Stake => "STAKE",
            TransactionType::Trade => "TRADE",
            TransactionType::Transfer => "TRANSFER",
            TransactionType::Unstake => "UNSTAKE",
            TransactionType::Wrap => "WRAP",
            TransactionType::Unrecognized(raw) => raw
        }
    }

    /// Label written to the output `Tag` column.
    pub fn tag(&self) -> Cow<'_, str> {
        match self {
            TransactionType::AddLiquidity => Cow::Borrowed("add_liquidity"),
            TransactionType::Airdrop => Cow::Borrowed("airdrop"),
            TransactionType::Bridge => Cow::Borrowed("bridge"),
            TransactionType::RemoveLiquidity => Cow::Borrowed("remove_liquidity"),
            TransactionType::Stake => Cow::Borrowed("stake"),
            TransactionType::Unstake => Cow::Borrowed("unstake"),
            TransactionType::Wrap => Cow::Borrowed("wrap"),
            //NOTE: The target tool has no mint tag, so MINT rows go out untagged
            TransactionType::Mint => Cow::Borrowed(""),
            TransactionType::Unrecognized(raw) => Cow::Owned(raw.to_lowercase()),
            TransactionType::Buy
            | TransactionType::InterestPayment
            | TransactionType::Receive
            | TransactionType::Send
            | TransactionType::Sell
            | TransactionType::Spam
            | TransactionType::Trade
            | TransactionType::Transfer => Cow::Borrowed("")
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TransactionType::Unrecognized(_))
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Unrecognized(String::new())
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for TransactionType {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(TransactionType::parse(value))
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(TransactionType::parse(&value))
    }
}
