//! Translating address records into chain specific text forms.
//!
//! The address records of a name store one address per coin type, each in
//! the canonical binary form of its chain rather than as text. This module
//! provides the translation between the two: a [`CoinCodec`] knows how to
//! do it for one family of chains, a [`CoinRegistry`] collects the codecs
//! for all the coin types an application cares about.
//!
//! The registry returned by [`CoinRegistry::standard`] covers the coin
//! types with constants on [`CoinType`][crate::base::coin::CoinType].
//! Additional coin types can be supported by implementing [`CoinCodec`]
//! and adding the implementation through [`CoinRegistry::register`].

//--- Re-exports of the private modules

mod bech;
pub use self::bech::Bech32Codec;

mod btc;
pub use self::btc::BtcCodec;

mod evm;
pub use self::evm::EvmCodec;

mod registry;
pub use self::registry::{CoinCodec, CoinRegistry};

mod sol;
pub use self::sol::SolCodec;

mod trx;
pub use self::trx::TrxCodec;
