mod csv_codec;
mod errors;

pub use csv_codec::{decode, encode};
pub use errors::CodecError;
