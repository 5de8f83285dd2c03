mod conversion_engine;
mod errors;
#[cfg(test)]
mod tests;

pub use conversion_engine::{ConversionEngine, ConversionReport};
pub use errors::EngineError;
