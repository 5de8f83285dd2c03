use super::{ConversionContext, ValidationError, WalletAddress};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_wallet_address_is_trimmed() -> Result<()> {
    let address = WalletAddress::parse("  0x1234567890abcdef \n")?;

    assert_eq!(address.as_str(), "0x1234567890abcdef");
    assert_eq!(address.to_string(), "0x1234567890abcdef");

    Ok(())
}

#[test]
fn test_wallet_address_accepts_exact_minimum_length() -> Result<()> {
    let address = WalletAddress::from_str("0123456789")?;

    assert_eq!(address.as_str(), "0123456789");

    Ok(())
}

#[test]
fn test_wallet_address_rejects_short_values() {
    let result = WalletAddress::parse("0x12345");

    assert!(matches!(result, Err(ValidationError::WalletAddressTooShort { length: 7, minimum: 10 })));
}

#[test]
fn test_wallet_address_length_is_measured_after_trimming() {
    let result = WalletAddress::parse("   abc        ");

    assert!(matches!(result, Err(ValidationError::WalletAddressTooShort { length: 3, .. })));
}

#[test]
fn test_wallet_address_rejects_blank_input() {
    assert!(WalletAddress::parse("").is_err());
    assert!(WalletAddress::parse("            ").is_err());
}

#[test]
fn test_context_exposes_origin_address() -> Result<()> {
    let context = ConversionContext::new(WalletAddress::parse("0xabcdef0123456789")?);

    assert_eq!(context.origin_address(), "0xabcdef0123456789");

    Ok(())
}
