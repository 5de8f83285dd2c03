use super::{ConversionEngine, EngineError};
use crate::models::{InputRecord, TransactionType};
use crate::types::{ConversionContext, WalletAddress};
use anyhow::Result;

const ORIGIN: &str = "0x1111111111111111111111111111111111111111";
const HEADER: &str = "Date,Received Quantity,Received Currency,Sent Quantity,Sent Currency,Fee Amount,Fee Currency,Tag";

fn create_engine() -> Result<ConversionEngine> {
    Ok(ConversionEngine::new(ConversionContext::new(WalletAddress::parse(ORIGIN)?)))
}

#[test]
fn test_engine_converts_a_batch_in_order() -> Result<()> {
    let csv = format!(
        "Date,Type,Received Quantity,Received Currency,Received Address,Sent Quantity,Sent Currency,Sent Address,Fee Amount,Fee Currency\n\
         2024-12-17T00:00:00Z,BUY,100,BTC,,20000,USD,,1,PLS\n\
         2024-01-05T03:07:09Z,TRANSFER,5,HEX,0x2222222222222222222222222222222222222222,5,HEX,{ORIGIN},2,PLS\n\
         2024-11-23T14:45:30Z,STAKE,200,HEX,,,,,3,PLS\n"
    );

    let report = create_engine()?.run(csv.as_bytes())?;
    let lines: Vec<&str> = report.csv.lines().collect();

    assert_eq!(report.rows, 3);
    assert_eq!(report.unrecognized, 0);
    assert_eq!(lines, [
        HEADER,
        "12/17/2024 00:00:00,100,BTC,20000,USD,1,PLS,",
        "01/05/2024 03:07:09,,,5,HEX,2,PLS,",
        "11/23/2024 14:45:30,,,200,HEX,3,PLS,stake"
    ]);

    Ok(())
}

#[test]
fn test_engine_counts_unrecognized_types_without_dropping_them() -> Result<()> {
    let report = create_engine()?.run(b"Date,Type,Received Quantity,Received Currency\n2024-12-17T00:00:00Z,FOO,1,ABC\n2024-12-17T00:00:00Z,RECEIVE,2,DEF\n")?;

    assert_eq!(report.rows, 2);
    assert_eq!(report.unrecognized, 1);
    assert!(report.csv.contains("12/17/2024 00:00:00,1,ABC,,,,,foo\n"));

    Ok(())
}

#[test]
fn test_engine_empty_input_yields_header_only() -> Result<()> {
    let report = create_engine()?.run(b"")?;

    assert_eq!(report.rows, 0);
    assert_eq!(report.csv, format!("{HEADER}\n"));

    Ok(())
}

#[test]
fn test_engine_aborts_batch_on_decode_failure() -> Result<()> {
    let result = create_engine()?.run(b"Date,Type\n2024-12-17T00:00:00Z,BUY\n\xc3\x28,SELL\n");

    assert!(matches!(result, Err(EngineError::Decode(_))));
    assert!(result.err().is_some_and(|error| error.to_string().starts_with("failed to process file")));

    Ok(())
}

#[test]
fn test_convert_all_preserves_length_and_order() -> Result<()> {
    let records: Vec<InputRecord> = ["1", "2", "3"].iter()
        .map(|fee| InputRecord {
            transaction_type: TransactionType::Send,
            fee_amount: fee.to_string(),
            ..InputRecord::default()
        })
        .collect();

    let (converted, unrecognized) = create_engine()?.convert_all(&records);
    let fees: Vec<&str> = converted.iter().map(|record| record.fee_amount.as_str()).collect();

    assert_eq!(unrecognized, 0);
    assert_eq!(fees, ["1", "2", "3"]);

    Ok(())
}

#[test]
fn test_engine_decode_failure_names_the_line() -> Result<()> {
    let result = create_engine()?.run(b"Date,Type,Received Quantity\n2024-12-17T00:00:00Z,SEND,1\n2024-12-17T00:00:00Z,BUY,\"100\n2024-12-18T00:00:00Z,SELL,5\n");
    let message = result.err().map(|error| error.to_string()).unwrap_or_default();

    assert!(message.starts_with("failed to process file (line 3): "), "{message}");

    Ok(())
}
