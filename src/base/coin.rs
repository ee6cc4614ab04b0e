//! Coin types identifying address record formats.

use core::{fmt, str};

//------------ CoinType ------------------------------------------------------

/// The coin type of a multi chain address record.
///
/// Resolvers can store one address per chain for a name. The records are
/// keyed by the coin type registered for the chain in [SLIP-44], so this is
/// an open ended registry rather than an enum. Constants are defined for
/// the coin types this crate ships codecs for.
///
/// [SLIP-44]: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CoinType(u32);

impl CoinType {
    /// Bitcoin.
    pub const BTC: CoinType = CoinType(0);

    /// Litecoin.
    pub const LTC: CoinType = CoinType(2);

    /// Dogecoin.
    pub const DOGE: CoinType = CoinType(3);

    /// Ether.
    pub const ETH: CoinType = CoinType(60);

    /// Cosmos Hub.
    pub const ATOM: CoinType = CoinType(118);

    /// Tron.
    pub const TRX: CoinType = CoinType(195);

    /// Solana.
    pub const SOL: CoinType = CoinType(501);

    /// BNB Beacon Chain.
    pub const BNB: CoinType = CoinType(714);

    /// Polygon.
    pub const MATIC: CoinType = CoinType(966);

    /// BNB Smart Chain.
    pub const BSC: CoinType = CoinType(9006);
}

impl CoinType {
    /// Returns a value from its raw integer value.
    #[must_use]
    pub const fn from_int(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value for a value.
    #[must_use]
    pub const fn to_int(self) -> u32 {
        self.0
    }

    /// Returns a value from a well-defined mnemonic.
    #[must_use]
    pub fn from_mnemonic(m: &[u8]) -> Option<Self> {
        if m.eq_ignore_ascii_case(b"BTC") {
            return Some(CoinType::BTC);
        }
        if m.eq_ignore_ascii_case(b"LTC") {
            return Some(CoinType::LTC);
        }
        if m.eq_ignore_ascii_case(b"DOGE") {
            return Some(CoinType::DOGE);
        }
        if m.eq_ignore_ascii_case(b"ETH") {
            return Some(CoinType::ETH);
        }
        if m.eq_ignore_ascii_case(b"ATOM") {
            return Some(CoinType::ATOM);
        }
        if m.eq_ignore_ascii_case(b"TRX") {
            return Some(CoinType::TRX);
        }
        if m.eq_ignore_ascii_case(b"SOL") {
            return Some(CoinType::SOL);
        }
        if m.eq_ignore_ascii_case(b"BNB") {
            return Some(CoinType::BNB);
        }
        if m.eq_ignore_ascii_case(b"MATIC") {
            return Some(CoinType::MATIC);
        }
        if m.eq_ignore_ascii_case(b"BSC") {
            return Some(CoinType::BSC);
        }
        None
    }

    /// Returns the mnemonic for this value if there is one.
    #[must_use]
    pub const fn to_mnemonic(self) -> Option<&'static [u8]> {
        match self.to_mnemonic_str() {
            Some(m) => Some(m.as_bytes()),
            None => None,
        }
    }

    /// Returns the mnemonic as a `&str` for this value if there is one.
    #[must_use]
    pub const fn to_mnemonic_str(self) -> Option<&'static str> {
        match self {
            CoinType::BTC => Some("BTC"),
            CoinType::LTC => Some("LTC"),
            CoinType::DOGE => Some("DOGE"),
            CoinType::ETH => Some("ETH"),
            CoinType::ATOM => Some("ATOM"),
            CoinType::TRX => Some("TRX"),
            CoinType::SOL => Some("SOL"),
            CoinType::BNB => Some("BNB"),
            CoinType::MATIC => Some("MATIC"),
            CoinType::BSC => Some("BSC"),
            _ => None,
        }
    }

    /// Returns a value from either a mnemonic or a decimal number.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        CoinType::from_mnemonic(bytes).or_else(|| {
            core::str::from_utf8(bytes)
                .ok()
                .and_then(|r| r.parse().ok().map(CoinType::from_int))
        })
    }

    /// Returns the key the address record is stored under.
    ///
    /// The multi chain address interface of resolvers takes the coin type
    /// widened to 32 octets in big endian order.
    #[must_use]
    pub const fn record_key(self) -> [u8; 32] {
        let bytes = self.0.to_be_bytes();
        let mut res = [0u8; 32];
        res[28] = bytes[0];
        res[29] = bytes[1];
        res[30] = bytes[2];
        res[31] = bytes[3];
        res
    }
}

//--- From

impl From<u32> for CoinType {
    fn from(value: u32) -> Self {
        CoinType::from_int(value)
    }
}

impl From<CoinType> for u32 {
    fn from(value: CoinType) -> Self {
        value.to_int()
    }
}

impl<'a> From<&'a CoinType> for u32 {
    fn from(value: &'a CoinType) -> Self {
        value.to_int()
    }
}

//--- FromStr and Display

impl str::FromStr for CoinType {
    type Err = FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // We assume all mnemonics are always ASCII, so using
        // the bytes representation of `s` is safe.
        match CoinType::from_mnemonic(s.as_bytes()) {
            Some(res) => Ok(res),
            None => {
                if let Ok(res) = s.parse() {
                    Ok(CoinType::from_int(res))
                } else {
                    Err(FromStrError(()))
                }
            }
        }
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_mnemonic_str() {
            Some(m) => f.write_str(m),
            None => {
                write!(f, "{}", self.to_int())
            }
        }
    }
}

//--- Debug

impl fmt::Debug for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_mnemonic().and_then(|bytes| {
            core::str::from_utf8(bytes).ok()
        }) {
            Some(mnemonic) => {
                write!(f, concat!(stringify!(CoinType), "::{}"), mnemonic)
            }
            None => {
                f.debug_tuple(stringify!(CoinType))
                    .field(&self.0)
                    .finish()
            }
        }
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for CoinType {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.to_int().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CoinType {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Into::into)
    }
}

//------------ FromStrError --------------------------------------------------

/// An error happened when converting a string to a coin type.
#[derive(Clone, Debug)]
pub struct FromStrError(());

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unknown coin type")
    }
}

impl std::error::Error for FromStrError {}

//============ Test ==========================================================
