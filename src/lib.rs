//! Converts exported wallet transaction histories into the CSV layout of a
//! portfolio tracking tool.
//!
//! The flow is decode ([`codec::decode`]), per-row mapping
//! ([`converter::convert`]) and encode ([`codec::encode`]), wrapped up by
//! [`engine::ConversionEngine`].

pub mod codec;
pub mod converter;
pub mod engine;
pub mod models;
pub mod types;
