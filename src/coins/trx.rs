//! The codec for Tron.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::base::{DecodeError, EncodeError};
use crate::utils::base58;
use super::registry::CoinCodec;

//------------ TrxCodec ------------------------------------------------------

/// The codec for Tron.
///
/// The record bytes are 21 octets, the account prefix 0x41 followed by the
/// 20 octet account hash. The text form is base 58 check over the whole of
/// the record bytes, which is why every Tron address starts with a `T`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrxCodec;

impl CoinCodec for TrxCodec {
    fn decode(&self, data: &[u8]) -> Result<String, DecodeError> {
        if data.len() != 21 {
            return Err(DecodeError::BadLength);
        }
        if data[0] != 0x41 {
            return Err(DecodeError::BadFormat);
        }
        Ok(base58::encode_check_string(data))
    }

    fn encode(&self, addr: &str) -> Result<Vec<u8>, EncodeError> {
        let data = base58::decode_check(addr)?;
        if data.len() != 21 || data[0] != 0x41 {
            return Err(EncodeError::BadValue);
        }
        Ok(data)
    }
}

//============ Test ==========================================================
