//! Content identifiers.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::fmt;
use core::str::FromStr;
use crate::base::DecodeError;
use crate::utils::{base32, base58};
use super::{read_varint, write_varint};

//------------ Cid -----------------------------------------------------------

/// A content identifier.
///
/// A content identifier, or CID, names a piece of content on a distributed
/// storage network through the hash of the content. It consists of the code
/// of the content's data format, the code of the hash function, and the
/// digest itself.
///
/// The binary form used inside content hash records is the version 1
/// layout: a version octet of one, then the format code, the hash function
/// code, the digest length, and the digest, with all integers as unsigned
/// varints. Parsing also accepts the old version 0 layout which is a bare
/// SHA-256 multihash. The text form follows the same split: an identifier
/// that fits version 0 displays as base 58 over the multihash, anything
/// else as `b` followed by base 32 over the version 1 octets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cid {
    /// The code of the data format of the content.
    codec: u64,

    /// The code of the hash function that produced the digest.
    hash_code: u64,

    /// The digest of the content.
    digest: Vec<u8>,
}

/// # Well-known Codes
///
impl Cid {
    /// The data format of protobuf framed Merkle DAG nodes.
    pub const DAG_PB: u64 = 0x70;

    /// The data format of libp2p public keys.
    pub const LIBP2P_KEY: u64 = 0x72;

    /// The data format of Swarm manifests.
    pub const SWARM_MANIFEST: u64 = 0xfa;

    /// The hash function code of SHA-256.
    pub const SHA2_256: u64 = 0x12;

    /// The hash function code of Keccak-256.
    pub const KECCAK_256: u64 = 0x1b;

    /// The hash function code of the identity function.
    pub const IDENTITY: u64 = 0x00;
}

impl Cid {
    /// Creates a new content identifier from its parts.
    #[must_use]
    pub fn new(codec: u64, hash_code: u64, digest: Vec<u8>) -> Self {
        Cid {
            codec,
            hash_code,
            digest,
        }
    }

    /// Parses a content identifier from its binary form.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() == 34 && data[0] == 0x12 && data[1] == 0x20 {
            return Ok(Cid::new(
                Self::DAG_PB,
                Self::SHA2_256,
                data[2..].to_vec(),
            ));
        }
        let (version, data) = read_varint(data)?;
        if version != 1 {
            return Err(DecodeError::BadFormat);
        }
        let (codec, data) = read_varint(data)?;
        let (hash_code, data) = read_varint(data)?;
        let (len, data) = read_varint(data)?;
        if data.len() as u64 != len {
            return Err(DecodeError::BadLength);
        }
        Ok(Cid::new(codec, hash_code, data.to_vec()))
    }

    /// Returns the version 1 binary form of the identifier.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.digest.len() + 8);
        res.push(1);
        write_varint(self.codec, &mut res);
        write_varint(self.hash_code, &mut res);
        write_varint(self.digest.len() as u64, &mut res);
        res.extend_from_slice(&self.digest);
        res
    }

    /// Returns the code of the data format of the content.
    #[must_use]
    pub fn codec(&self) -> u64 {
        self.codec
    }

    /// Returns the code of the hash function behind the digest.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        self.hash_code
    }

    /// Returns the digest of the content.
    #[must_use]
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Returns the multihash part of the identifier.
    pub(super) fn multihash(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.digest.len() + 4);
        write_varint(self.hash_code, &mut res);
        write_varint(self.digest.len() as u64, &mut res);
        res.extend_from_slice(&self.digest);
        res
    }

    /// Returns whether the identifier can use the version 0 text form.
    fn is_v0(&self) -> bool {
        self.codec == Self::DAG_PB
            && self.hash_code == Self::SHA2_256
            && self.digest.len() == 32
    }
}

//--- FromStr

impl FromStr for Cid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('b') {
            return Self::from_bytes(&base32::decode(rest)?);
        }
        let data = base58::decode(s)?;
        if data.len() != 34 || data[0] != 0x12 || data[1] != 0x20 {
            return Err(DecodeError::BadFormat);
        }
        Ok(Cid::new(Self::DAG_PB, Self::SHA2_256, data[2..].to_vec()))
    }
}

//--- Display

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use core::fmt::Write;

        if self.is_v0() {
            base58::display(&self.multihash(), f)
        } else {
            f.write_char('b')?;
            base32::display(&self.to_bytes(), f)
        }
    }
}

//============ Test ==========================================================
