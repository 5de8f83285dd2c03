use super::TransactionType;

#[test]
fn test_known_types_parse_case_insensitively() {
    assert_eq!(TransactionType::parse("transfer"), TransactionType::Transfer);
    assert_eq!(TransactionType::parse("Add_Liquidity"), TransactionType::AddLiquidity);
    assert_eq!(TransactionType::parse("  STAKE "), TransactionType::Stake);
}

#[test]
fn test_every_known_type_round_trips_through_its_name() {
    for transaction_type in TransactionType::KNOWN {
        assert!(transaction_type.is_recognized());
        assert_eq!(TransactionType::parse(transaction_type.name()), transaction_type);
        assert_eq!(TransactionType::parse(&transaction_type.name().to_lowercase()), transaction_type);
    }
}

#[test]
fn test_unknown_type_keeps_raw_value() {
    let transaction_type = TransactionType::parse("Liquidation");

    assert_eq!(transaction_type, TransactionType::Unrecognized("Liquidation".to_string()));
    assert!(!transaction_type.is_recognized());
    assert_eq!(transaction_type.to_string(), "Liquidation");
}

#[test]
fn test_tag_table() {
    assert_eq!(TransactionType::AddLiquidity.tag(), "add_liquidity");
    assert_eq!(TransactionType::Airdrop.tag(), "airdrop");
    assert_eq!(TransactionType::Bridge.tag(), "bridge");
    assert_eq!(TransactionType::RemoveLiquidity.tag(), "remove_liquidity");
    assert_eq!(TransactionType::Stake.tag(), "stake");
    assert_eq!(TransactionType::Unstake.tag(), "unstake");
    assert_eq!(TransactionType::Wrap.tag(), "wrap");
    assert_eq!(TransactionType::Mint.tag(), "");
    assert_eq!(TransactionType::Transfer.tag(), "");
    assert_eq!(TransactionType::Buy.tag(), "");
}

#[test]
fn test_unrecognized_tag_is_lowercased_raw_value() {
    assert_eq!(TransactionType::parse("FOO").tag(), "foo");
    assert_eq!(TransactionType::parse("Contract_Call").tag(), "contract_call");
    assert_eq!(TransactionType::parse("").tag(), "");
}

#[test]
fn test_default_type_is_empty_unrecognized() {
    assert_eq!(TransactionType::default(), TransactionType::Unrecognized(String::new()));
}

