//! The codec for Solana.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::base::{DecodeError, EncodeError};
use crate::utils::base58;
use super::registry::CoinCodec;

//------------ SolCodec ------------------------------------------------------

/// The codec for Solana.
///
/// The record bytes are the 32 octets of the account's public key. The text
/// form is plain base 58 without a checksum, which the ed25519 key space
/// makes acceptable.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolCodec;

impl CoinCodec for SolCodec {
    fn decode(&self, data: &[u8]) -> Result<String, DecodeError> {
        if data.len() != 32 {
            return Err(DecodeError::BadLength);
        }
        Ok(base58::encode_string(data))
    }

    fn encode(&self, addr: &str) -> Result<Vec<u8>, EncodeError> {
        let data = base58::decode(addr)?;
        if data.len() != 32 {
            return Err(EncodeError::BadValue);
        }
        Ok(data)
    }
}

//============ Test ==========================================================
