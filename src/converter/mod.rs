mod date;
mod policy;

use crate::models::{InputRecord, OutputRecord};

pub use date::{format_timestamp, parse_utc, OUTPUT_DATE_FORMAT};
pub use policy::{resolve_transfer, Direction, FieldPolicy};

/// Maps one export row onto one import row.
///
/// Total over every input: unknown types and empty columns never produce an
/// error. `origin_address` is only consulted for TRANSFER rows.
pub fn convert(record: &InputRecord, origin_address: &str) -> OutputRecord {
    let mut output = OutputRecord {
        date: format_timestamp(&record.timestamp),
        fee_amount: record.fee_amount.clone(),
        fee_currency: record.fee_currency.clone(),
        tag: record.transaction_type.tag().into_owned(),
        ..OutputRecord::default()
    };

    match FieldPolicy::for_type(&record.transaction_type) {
        FieldPolicy::Both => {
            copy_received(record, &mut output);
            copy_sent(record, &mut output);
        }
        FieldPolicy::ReceivedOnly => copy_received(record, &mut output),
        FieldPolicy::SentOnly => copy_sent(record, &mut output),
        FieldPolicy::ReceivedElseSent => {
            if !record.received_quantity.is_empty() {
                copy_received(record, &mut output);
            } else if !record.sent_quantity.is_empty() {
                copy_sent(record, &mut output);
            }
        }
        FieldPolicy::EachIfPresent => {
            if !record.received_quantity.is_empty() {
                copy_received(record, &mut output);
            }
            if !record.sent_quantity.is_empty() {
                copy_sent(record, &mut output);
            }
        }
        FieldPolicy::SentElseReceivedAsSent => {
            //NOTE: Some exports book the staked deposit on the received side
            if !record.sent_quantity.is_empty() {
                copy_sent(record, &mut output);
            } else {
                output.sent_quantity = record.received_quantity.clone();
                output.sent_currency = record.received_currency.clone();
            }
        }
        FieldPolicy::Transfer => {
            match resolve_transfer(&record.sent_address, &record.received_address, origin_address) {
                Direction::Send => copy_sent(record, &mut output),
                Direction::Receive => copy_received(record, &mut output),
                Direction::Neither => {}
            }
        }
    }

    output
}

fn copy_received(record: &InputRecord, output: &mut OutputRecord) {
    output.received_quantity = record.received_quantity.clone();
    output.received_currency = record.received_currency.clone();
}

fn copy_sent(record: &InputRecord, output: &mut OutputRecord) {
    output.sent_quantity = record.sent_quantity.clone();
    output.sent_currency = record.sent_currency.clone();
}
