//! The codec for plain bech32 chains.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::base::{DecodeError, EncodeError};
use crate::utils::bech32::{self, Variant};
use super::registry::CoinCodec;

//------------ Bech32Codec ---------------------------------------------------

/// The codec for chains whose addresses are bech32 over a key hash.
///
/// The record bytes are the 20 octets of the key hash. The text form wraps
/// them in classic bech32 with the chain's human readable part. These
/// chains predate bech32m, so that variant is rejected.
#[derive(Clone, Copy, Debug)]
pub struct Bech32Codec {
    /// The human readable part of the chain's addresses.
    hrp: &'static str,
}

impl Bech32Codec {
    /// Creates the codec for the BNB Beacon Chain.
    #[must_use]
    pub fn bnb() -> Self {
        Bech32Codec { hrp: "bnb" }
    }

    /// Creates the codec for the Cosmos Hub.
    #[must_use]
    pub fn atom() -> Self {
        Bech32Codec { hrp: "cosmos" }
    }
}

//--- CoinCodec

impl CoinCodec for Bech32Codec {
    fn decode(&self, data: &[u8]) -> Result<String, DecodeError> {
        if data.len() != 20 {
            return Err(DecodeError::BadLength);
        }
        let five = bech32::convert_bits(data, 8, 5, true)?;
        Ok(bech32::encode_string(self.hrp, &five, Variant::Bech32))
    }

    fn encode(&self, addr: &str) -> Result<Vec<u8>, EncodeError> {
        let (hrp, five, variant) = bech32::decode(addr)?;
        if hrp != self.hrp || variant != Variant::Bech32 {
            return Err(EncodeError::BadValue);
        }
        let data = bech32::convert_bits(&five, 5, 8, false)?;
        if data.len() != 20 {
            return Err(EncodeError::BadValue);
        }
        Ok(data)
    }
}

//============ Test ==========================================================
