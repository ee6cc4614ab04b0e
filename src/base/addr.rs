//! Blockchain account addresses.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::{fmt, str};
use sha3::{Digest, Keccak256};
use super::error::DecodeError;

//------------ ChainAddress --------------------------------------------------

/// A twenty octet account address.
///
/// This is the address format shared by all chains the registry contracts
/// are deployed on. The all zero value doubles as the missing value in
/// contract storage and is available as [`ChainAddress::ZERO`].
///
/// The canonical text form is `0x` followed by forty hex digits whose mixed
/// case carries a checksum as defined in [EIP-55]. The `Display` impl
/// produces this form. Parsing accepts uniformly lower or upper case digits
/// without a checksum but insists on a correct checksum when the digits are
/// mixed case.
///
/// [EIP-55]: https://eips.ethereum.org/EIPS/eip-55
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChainAddress([u8; 20]);

impl ChainAddress {
    /// The all zero address marking a missing value.
    pub const ZERO: Self = ChainAddress([0; 20]);

    /// Creates an address from its raw octets.
    #[must_use]
    pub const fn from_octets(octets: [u8; 20]) -> Self {
        ChainAddress(octets)
    }

    /// Creates an address from an octets slice.
    ///
    /// This will fail if the slice is not exactly 20 octets long.
    pub fn from_slice(slice: &[u8]) -> Result<Self, DecodeError> {
        if slice.len() != 20 {
            return Err(DecodeError::BadLength);
        }
        let mut octets = [0u8; 20];
        octets.copy_from_slice(slice);
        Ok(ChainAddress(octets))
    }

    /// Returns the raw octets of the address.
    #[must_use]
    pub const fn into_octets(self) -> [u8; 20] {
        self.0
    }

    /// Returns a slice of the octets of the address.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns whether this is the all zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }

    /// Returns the lower case hex digits of the address.
    fn hex_digits(&self) -> [u8; 40] {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut res = [0u8; 40];
        for (i, &byte) in self.0.iter().enumerate() {
            res[i * 2] = DIGITS[usize::from(byte >> 4)];
            res[i * 2 + 1] = DIGITS[usize::from(byte & 0x0F)];
        }
        res
    }
}

//--- From and AsRef

impl From<[u8; 20]> for ChainAddress {
    fn from(octets: [u8; 20]) -> Self {
        ChainAddress(octets)
    }
}

impl From<ChainAddress> for [u8; 20] {
    fn from(addr: ChainAddress) -> Self {
        addr.0
    }
}

impl AsRef<[u8]> for ChainAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

//--- FromStr

impl str::FromStr for ChainAddress {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = match s.strip_prefix("0x") {
            Some(digits) => digits,
            None => return Err(DecodeError::BadFormat),
        };
        if digits.len() != 40 {
            return Err(DecodeError::BadLength);
        }
        let mut octets = [0u8; 20];
        match hex::decode_to_slice(digits, &mut octets) {
            Ok(()) => {}
            Err(hex::FromHexError::InvalidHexCharacter { c, .. }) => {
                return Err(DecodeError::IllegalChar(c))
            }
            Err(_) => return Err(DecodeError::BadLength),
        }
        let res = ChainAddress(octets);
        let upper = digits.bytes().any(|ch| ch.is_ascii_uppercase());
        let lower = digits.bytes().any(|ch| ch.is_ascii_lowercase());
        if upper && lower && s != res.to_string() {
            return Err(DecodeError::BadChecksum);
        }
        Ok(res)
    }
}

//--- Display, LowerHex, and Debug

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use core::fmt::Write;

        let digits = self.hex_digits();
        let digest = Keccak256::digest(digits);
        f.write_str("0x")?;
        for (i, &digit) in digits.iter().enumerate() {
            let nibble = if i & 1 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0F
            };
            if nibble >= 8 {
                f.write_char(char::from(digit.to_ascii_uppercase()))?;
            } else {
                f.write_char(char::from(digit))?;
            }
        }
        Ok(())
    }
}

impl fmt::LowerHex for ChainAddress {
    /// Formats the address as bare lower case hex digits.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use core::fmt::Write;

        for &digit in self.hex_digits().iter() {
            f.write_char(char::from(digit))?;
        }
        Ok(())
    }
}

impl fmt::Debug for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ChainAddress({})", self)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for ChainAddress {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChainAddress {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = ChainAddress;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an account address")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_bytes<E: serde::de::Error>(
                self,
                v: &[u8],
            ) -> Result<Self::Value, E> {
                ChainAddress::from_slice(v).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(Visitor)
        } else {
            deserializer.deserialize_bytes(Visitor)
        }
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    // The checksummed example addresses of EIP-55.
    const CHECKSUMMED: &[&str] = &[
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn display_checksums() {
        for addr in CHECKSUMMED {
            let parsed: ChainAddress =
                addr.to_lowercase().parse().unwrap();
            assert_eq!(parsed.to_string(), *addr);
        }
    }

    #[test]
    fn from_str() {
        for addr in CHECKSUMMED {
            assert_eq!(
                addr.parse::<ChainAddress>().unwrap().to_string(),
                *addr
            );
            assert!(addr.to_lowercase().parse::<ChainAddress>().is_ok());
            assert!(addr
                .to_uppercase()
                .replace("0X", "0x")
                .parse::<ChainAddress>()
                .is_ok());
        }
        assert_eq!(
            "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
                .parse::<ChainAddress>()
                .unwrap_err(),
            DecodeError::BadChecksum
        );
        assert_eq!(
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
                .parse::<ChainAddress>()
                .unwrap_err(),
            DecodeError::BadFormat
        );
        assert_eq!(
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe"
                .parse::<ChainAddress>()
                .unwrap_err(),
            DecodeError::BadLength
        );
        assert_eq!(
            "0xzaAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
                .parse::<ChainAddress>()
                .unwrap_err(),
            DecodeError::IllegalChar('z')
        );
    }

    #[test]
    fn zero() {
        assert!(ChainAddress::ZERO.is_zero());
        assert_eq!(
            ChainAddress::ZERO.to_string(),
            "0x0000000000000000000000000000000000000000"
        );
        assert_eq!(
            format!("{:x}", ChainAddress::ZERO),
            "0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn slices() {
        assert!(ChainAddress::from_slice(&[0u8; 19]).is_err());
        assert!(ChainAddress::from_slice(&[0u8; 20]).is_ok());
    }
}
