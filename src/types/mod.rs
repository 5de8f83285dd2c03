mod errors;
#[cfg(test)]
mod tests;
mod wallet;

pub use errors::ValidationError;
pub use wallet::{ConversionContext, WalletAddress, MIN_WALLET_ADDRESS_LENGTH};
