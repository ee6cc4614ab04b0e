//! The codec for EVM style chains.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::base::{ChainAddress, DecodeError, EncodeError};
use super::registry::CoinCodec;

//------------ EvmCodec ------------------------------------------------------

/// The codec for chains that use 20 octet EVM accounts.
///
/// The record bytes are the raw 20 octets of the account. The text form is
/// the usual checksummed hex notation produced by [`ChainAddress`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EvmCodec;

impl CoinCodec for EvmCodec {
    fn decode(&self, data: &[u8]) -> Result<String, DecodeError> {
        ChainAddress::from_slice(data).map(|addr| addr.to_string())
    }

    fn encode(&self, addr: &str) -> Result<Vec<u8>, EncodeError> {
        let addr: ChainAddress = addr.parse()?;
        Ok(addr.as_slice().to_vec())
    }
}

//============ Test ==========================================================
