//! The codec registry.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::fmt;
use std::collections::BTreeMap;
use crate::base::coin::CoinType;
use crate::base::{DecodeError, EncodeError};
use super::bech::Bech32Codec;
use super::btc::BtcCodec;
use super::evm::EvmCodec;
use super::sol::SolCodec;
use super::trx::TrxCodec;

//------------ CoinCodec -----------------------------------------------------

/// A translator between the record bytes and the text of addresses.
///
/// The record bytes are the canonical on chain form for the coin type,
/// the text is what a user of that chain would recognize as an address.
/// Implementations for the common coin types are provided by this module
/// and collected into a [`CoinRegistry`]. Implementing the trait yourself
/// lets you support further coin types through
/// [`CoinRegistry::register`].
pub trait CoinCodec {
    /// Decodes the record bytes of an address into its text form.
    fn decode(&self, data: &[u8]) -> Result<String, DecodeError>;

    /// Encodes the text form of an address into its record bytes.
    fn encode(&self, addr: &str) -> Result<Vec<u8>, EncodeError>;
}

//------------ CoinRegistry --------------------------------------------------

/// The set of codecs known for coin types.
///
/// The registry created by [`CoinRegistry::standard`], which is also what
/// `Default` returns, covers the coin types with constants on
/// [`CoinType`]. Codecs can be added or replaced through
/// [`register`][Self::register].
pub struct CoinRegistry {
    codecs: BTreeMap<CoinType, Box<dyn CoinCodec + Send + Sync>>,
}

impl CoinRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        CoinRegistry {
            codecs: BTreeMap::new(),
        }
    }

    /// Creates a registry with the built-in codecs.
    #[must_use]
    pub fn standard() -> Self {
        let mut res = Self::new();
        res.register(CoinType::BTC, BtcCodec::btc());
        res.register(CoinType::LTC, BtcCodec::ltc());
        res.register(CoinType::DOGE, BtcCodec::doge());
        res.register(CoinType::ETH, EvmCodec);
        res.register(CoinType::ATOM, Bech32Codec::atom());
        res.register(CoinType::TRX, TrxCodec);
        res.register(CoinType::SOL, SolCodec);
        res.register(CoinType::BNB, Bech32Codec::bnb());
        res.register(CoinType::MATIC, EvmCodec);
        res.register(CoinType::BSC, EvmCodec);
        res
    }

    /// Registers a codec for a coin type.
    ///
    /// An already registered codec for the coin type is replaced.
    pub fn register(
        &mut self,
        coin: CoinType,
        codec: impl CoinCodec + Send + Sync + 'static,
    ) {
        self.codecs.insert(coin, Box::new(codec));
    }

    /// Returns the codec registered for a coin type.
    #[must_use]
    pub fn get(
        &self,
        coin: CoinType,
    ) -> Option<&(dyn CoinCodec + Send + Sync)> {
        self.codecs.get(&coin).map(|codec| codec.as_ref())
    }

    /// Decodes record bytes with the codec of a coin type.
    pub fn decode(
        &self,
        coin: CoinType,
        data: &[u8],
    ) -> Result<String, DecodeError> {
        match self.get(coin) {
            Some(codec) => codec.decode(data),
            None => Err(DecodeError::UnsupportedCoin(coin)),
        }
    }

    /// Encodes address text with the codec of a coin type.
    pub fn encode(
        &self,
        coin: CoinType,
        addr: &str,
    ) -> Result<Vec<u8>, EncodeError> {
        match self.get(coin) {
            Some(codec) => codec.encode(addr),
            None => Err(EncodeError::UnsupportedCoin(coin)),
        }
    }
}

//--- Default

impl Default for CoinRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

//--- Debug

impl fmt::Debug for CoinRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.codecs.keys()).finish()
    }
}

//============ Test ==========================================================
