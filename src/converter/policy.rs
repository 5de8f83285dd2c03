use tracing::debug;

use crate::models::TransactionType;

/// Which quantity/currency pairs a transaction type carries into the output.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldPolicy {
    /// Copy both the received and the sent pair.
    Both,
    ReceivedOnly,
    SentOnly,
    /// Received pair if it has a quantity, otherwise the sent pair if it has one.
    ReceivedElseSent,
    /// Each pair independently, only when it has a quantity.
    EachIfPresent,
    /// Sent pair if it has a quantity, otherwise the received pair written to the sent columns.
    SentElseReceivedAsSent,
    /// Direction depends on the counterparty addresses and the origin wallet.
    Transfer
}

impl FieldPolicy {
    pub fn for_type(transaction_type: &TransactionType) -> Self {
        match transaction_type {
            TransactionType::AddLiquidity
            | TransactionType::Buy
            | TransactionType::RemoveLiquidity
            | TransactionType::Sell
            | TransactionType::Trade
            | TransactionType::Wrap => FieldPolicy::Both,
            TransactionType::Airdrop
            | TransactionType::InterestPayment
            | TransactionType::Mint
            | TransactionType::Receive
            | TransactionType::Unstake => FieldPolicy::ReceivedOnly,
            TransactionType::Send => FieldPolicy::SentOnly,
            TransactionType::Bridge
            | TransactionType::Unrecognized(_) => FieldPolicy::ReceivedElseSent,
            TransactionType::Spam => FieldPolicy::EachIfPresent,
            TransactionType::Stake => FieldPolicy::SentElseReceivedAsSent,
            TransactionType::Transfer => FieldPolicy::Transfer
        }
    }
}

/// Resolved side of a TRANSFER row.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Send,
    Receive,
    /// No counterparty address on either side; nothing is copied.
    Neither
}

/// Decides whether a TRANSFER left or entered the origin wallet.
///
/// When both addresses are present and the origin matches neither, the row
/// is treated as a receive.
pub fn resolve_transfer(sent_address: &str, received_address: &str, origin_address: &str) -> Direction {
    match (sent_address.is_empty(), received_address.is_empty()) {
        (false, true) => Direction::Send,
        (true, false) => Direction::Receive,
        (true, true) => Direction::Neither,
        (false, false) if origin_address == sent_address => Direction::Send,
        (false, false) if origin_address == received_address => Direction::Receive,
        (false, false) => {
            //TODO: Confirm with the import tool owners whether unmatched transfers should stay receives
            debug!("Transfer [{sent_address}] -> [{received_address}] does not involve origin [{origin_address}], treating as receive");
            Direction::Receive
        }
    }
}
