//! Various utility modules.

pub mod base32;
pub mod base58;
pub mod bech32;
