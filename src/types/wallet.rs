use crate::types::errors::ValidationError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const MIN_WALLET_ADDRESS_LENGTH: usize = 10;

/// A trimmed wallet address that passed the boundary length check.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();

        if length < MIN_WALLET_ADDRESS_LENGTH {
            return Err(ValidationError::WalletAddressTooShort {
                length,
                minimum: MIN_WALLET_ADDRESS_LENGTH
            });
        }

        Ok(WalletAddress(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WalletAddress {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        WalletAddress::parse(value)
    }
}

/// Read-only values shared by every row of one conversion batch.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    /// The wallet whose history is being converted.
    pub origin: WalletAddress
}

impl ConversionContext {
    pub fn new(origin: WalletAddress) -> Self {
        Self { origin }
    }

    pub fn origin_address(&self) -> &str {
        self.origin.as_str()
    }
}
