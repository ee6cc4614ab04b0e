//! Fixed size hash values.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.
//!
//! The types here are thin wrappers around 32 octet arrays. They only differ
//! in what the octets mean, so they are all generated by the same macro.

use core::{fmt, str};
use super::error::DecodeError;

//------------ hash_type! ----------------------------------------------------

/// Defines a newtype around a 32 octet hash value.
///
/// The generated type gets conversions from and to its octets, parsing and
/// display of the conventional `0x` prefixed hex form, and, if the `serde`
/// feature is enabled, serialization as a hex string in human readable
/// formats and as raw bytes otherwise.
macro_rules! hash_type {
    ( $(#[$attr:meta])* $name:ident ) => {
        $(#[$attr])*
        #[derive(
            Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd
        )]
        pub struct $name([u8; 32]);

        impl $name {
            /// Creates a value from its raw octets.
            #[must_use]
            pub const fn from_octets(octets: [u8; 32]) -> Self {
                $name(octets)
            }

            /// Creates a value from an octets slice.
            ///
            /// This will fail if the slice is not exactly 32 octets long.
            pub fn from_slice(slice: &[u8]) -> Result<Self, DecodeError> {
                if slice.len() != 32 {
                    return Err(DecodeError::BadLength);
                }
                let mut octets = [0u8; 32];
                octets.copy_from_slice(slice);
                Ok($name(octets))
            }

            /// Returns the raw octets of the value.
            #[must_use]
            pub const fn into_octets(self) -> [u8; 32] {
                self.0
            }

            /// Returns a slice of the octets of the value.
            #[must_use]
            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }
        }

        //--- From and AsRef

        impl From<[u8; 32]> for $name {
            fn from(octets: [u8; 32]) -> Self {
                $name(octets)
            }
        }

        impl From<$name> for [u8; 32] {
            fn from(hash: $name) -> Self {
                hash.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        //--- FromStr

        impl str::FromStr for $name {
            type Err = DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = match s.strip_prefix("0x") {
                    Some(digits) => digits,
                    None => return Err(DecodeError::BadFormat),
                };
                if digits.len() != 64 {
                    return Err(DecodeError::BadLength);
                }
                let mut octets = [0u8; 32];
                match hex::decode_to_slice(digits, &mut octets) {
                    Ok(()) => {}
                    Err(
                        hex::FromHexError::InvalidHexCharacter { c, .. }
                    ) => {
                        return Err(DecodeError::IllegalChar(c))
                    }
                    Err(_) => return Err(DecodeError::BadLength),
                }
                Ok($name(octets))
            }
        }

        //--- Display and Debug

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("0x")?;
                for byte in self.0 {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self)
            }
        }

        //--- Serialize and Deserialize

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
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
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                struct Visitor;

                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = $name;

                    fn expecting(
                        &self, f: &mut fmt::Formatter
                    ) -> fmt::Result {
                        f.write_str("a 32 octet hash value")
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
                        $name::from_slice(v).map_err(E::custom)
                    }
                }

                if deserializer.is_human_readable() {
                    deserializer.deserialize_str(Visitor)
                } else {
                    deserializer.deserialize_bytes(Visitor)
                }
            }
        }
    };
}

//------------ NodeHash ------------------------------------------------------

hash_type! {
    /// The hash identifying a name in the registry.
    ///
    /// Contracts never store or compare names as text. Instead a name is
    /// folded into a single 32 octet value by hashing its labels from the
    /// right: the hash of the empty name is all zeros and each label
    /// prepended to a name turns the hash `h` into
    /// `keccak256(h || keccak256(label))`. The result identifies the name
    /// in every registry and resolver call.
    NodeHash
}

impl NodeHash {
    /// The hash of the empty name at the root of the hierarchy.
    pub const ROOT: Self = NodeHash([0; 32]);

    /// Returns whether this is the hash of the empty name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self == &Self::ROOT
    }
}

//------------ LabelHash -----------------------------------------------------

hash_type! {
    /// The Keccak-256 hash of a single label.
    ///
    /// Labels appear in contract calls only through this hash, both as the
    /// second ingredient of [`NodeHash`] folding and as the label argument
    /// of subnode updates.
    LabelHash
}

//------------ TxHash --------------------------------------------------------

hash_type! {
    /// The hash identifying a submitted transaction.
    ///
    /// Write operations return this value so callers can track the
    /// transaction on chain.
    TxHash
}

//============ Test ==========================================================
