//! Decoding and encoding of content hash records.
//!
//! The content hash record of a name points at content hosted off chain.
//! The record value is self describing: a protocol code as an unsigned
//! varint followed by a payload whose layout depends on the protocol. For
//! the storage networks the payload is a [`Cid`], for onion services it is
//! the ASCII service address.
//!
//! [`decode`] turns a record value into its display form and never fails:
//! a value it cannot make sense of comes back with the error noted and the
//! raw hex as a stand-in. [`encode`] turns a URI of the form
//! `"<scheme>://<value>"` back into a record value and does fail, since it
//! sits on the write path.

use core::fmt;
use core::str::FromStr;
use crate::base::{DecodeError, EncodeError};
use crate::utils::base58;

//--- Re-exports of the private modules

mod cid;
pub use self::cid::Cid;

//------------ ContentProtocol -----------------------------------------------

/// The protocol a content hash record points into.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContentProtocol {
    /// Content on the Interplanetary File System.
    Ipfs,

    /// Content behind a mutable IPNS name.
    Ipns,

    /// Content on Swarm.
    Swarm,

    /// A version 2 onion service.
    Onion,

    /// A version 3 onion service.
    Onion3,
}

impl ContentProtocol {
    /// Returns the protocol for a multicodec code.
    #[must_use]
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0xe3 => Some(ContentProtocol::Ipfs),
            0xe4 => Some(ContentProtocol::Swarm),
            0xe5 => Some(ContentProtocol::Ipns),
            0x01bc => Some(ContentProtocol::Onion),
            0x01bd => Some(ContentProtocol::Onion3),
            _ => None,
        }
    }

    /// Returns the multicodec code of the protocol.
    #[must_use]
    pub fn code(self) -> u64 {
        match self {
            ContentProtocol::Ipfs => 0xe3,
            ContentProtocol::Swarm => 0xe4,
            ContentProtocol::Ipns => 0xe5,
            ContentProtocol::Onion => 0x01bc,
            ContentProtocol::Onion3 => 0x01bd,
        }
    }

    /// Returns the protocol for a URI scheme.
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "ipfs" => Some(ContentProtocol::Ipfs),
            "bzz" => Some(ContentProtocol::Swarm),
            "ipns" => Some(ContentProtocol::Ipns),
            "onion" => Some(ContentProtocol::Onion),
            "onion3" => Some(ContentProtocol::Onion3),
            _ => None,
        }
    }

    /// Returns the URI scheme of the protocol.
    #[must_use]
    pub fn scheme(self) -> &'static str {
        match self {
            ContentProtocol::Ipfs => "ipfs",
            ContentProtocol::Swarm => "bzz",
            ContentProtocol::Ipns => "ipns",
            ContentProtocol::Onion => "onion",
            ContentProtocol::Onion3 => "onion3",
        }
    }
}

//--- Display

impl fmt::Display for ContentProtocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

//------------ DecodedContent ------------------------------------------------

/// The outcome of decoding a content hash record.
///
/// Decoding always produces a value. When it went well, `protocol` names
/// the protocol and `decoded` holds the display form of the payload. When
/// it did not, `error` says why, `protocol` is `None`, and `decoded` falls
/// back to the hex form of the raw record so callers still have something
/// to show.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedContent {
    /// The protocol of the record, if it was recognized.
    pub protocol: Option<ContentProtocol>,

    /// The display form of the payload, or the raw hex on error.
    pub decoded: String,

    /// What went wrong, if anything.
    pub error: Option<DecodeError>,
}

//--- Display

impl fmt::Display for DecodedContent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.protocol {
            Some(protocol) => {
                write!(f, "{}://{}", protocol, self.decoded)
            }
            None => f.write_str(&self.decoded),
        }
    }
}

//------------ Convenience Functions -----------------------------------------

/// Decodes a content hash record into its display form.
///
/// This function never fails. See [`DecodedContent`] for how trouble is
/// reported.
#[must_use]
pub fn decode(data: &[u8]) -> DecodedContent {
    match try_decode(data) {
        Ok((protocol, decoded)) => DecodedContent {
            protocol: Some(protocol),
            decoded,
            error: None,
        },
        Err(err) => DecodedContent {
            protocol: None,
            decoded: format!("0x{}", hex::encode(data)),
            error: Some(err),
        },
    }
}

/// Encodes a content URI into a content hash record.
///
/// The URI must have the form `"<scheme>://<value>"` with one of the
/// schemes of [`ContentProtocol`].
pub fn encode(uri: &str) -> Result<Vec<u8>, EncodeError> {
    let (scheme, value) = match uri.split_once("://") {
        Some(parts) => parts,
        None => return Err(EncodeError::UnsupportedScheme),
    };
    let protocol = match ContentProtocol::from_scheme(scheme) {
        Some(protocol) => protocol,
        None => return Err(EncodeError::UnsupportedScheme),
    };
    let mut res = Vec::new();
    write_varint(protocol.code(), &mut res);
    match protocol {
        ContentProtocol::Ipfs => {
            let cid = Cid::from_str(value)?;
            res.extend_from_slice(&cid.to_bytes());
        }
        ContentProtocol::Ipns => {
            let cid = Cid::new(
                Cid::LIBP2P_KEY,
                Cid::IDENTITY,
                value.as_bytes().to_vec(),
            );
            res.extend_from_slice(&cid.to_bytes());
        }
        ContentProtocol::Swarm => {
            let digest = match hex::decode(value) {
                Ok(digest) => digest,
                Err(_) => return Err(EncodeError::BadValue),
            };
            if digest.len() != 32 {
                return Err(EncodeError::BadValue);
            }
            let cid = Cid::new(
                Cid::SWARM_MANIFEST,
                Cid::KECCAK_256,
                digest,
            );
            res.extend_from_slice(&cid.to_bytes());
        }
        ContentProtocol::Onion => {
            encode_onion(value, 16, &mut res)?;
        }
        ContentProtocol::Onion3 => {
            encode_onion(value, 56, &mut res)?;
        }
    }
    Ok(res)
}

//------------ Helper Functions ----------------------------------------------

/// Decodes a record into its protocol and display form.
fn try_decode(
    data: &[u8],
) -> Result<(ContentProtocol, String), DecodeError> {
    let (code, payload) = read_varint(data)?;
    let protocol = match ContentProtocol::from_code(code) {
        Some(protocol) => protocol,
        None => return Err(DecodeError::UnsupportedProtocol(code)),
    };
    let decoded = match protocol {
        ContentProtocol::Ipfs => Cid::from_bytes(payload)?.to_string(),
        ContentProtocol::Ipns => decode_ipns(payload)?,
        ContentProtocol::Swarm => {
            hex::encode(Cid::from_bytes(payload)?.digest())
        }
        ContentProtocol::Onion => decode_onion(payload, 16)?,
        ContentProtocol::Onion3 => decode_onion(payload, 56)?,
    };
    Ok((protocol, decoded))
}

/// Decodes the payload of an IPNS record.
///
/// An identity multihash wraps the name itself and decodes back into it.
/// A real hash cannot be inverted, so it displays as base 58 over the
/// multihash the way peer identifiers do.
fn decode_ipns(payload: &[u8]) -> Result<String, DecodeError> {
    let cid = Cid::from_bytes(payload)?;
    if cid.hash_code() == Cid::IDENTITY {
        String::from_utf8(cid.digest().to_vec())
            .map_err(|_| DecodeError::BadFormat)
    } else {
        Ok(base58::encode_string(&cid.multihash()))
    }
}

/// Decodes the payload of an onion record of the given length.
fn decode_onion(payload: &[u8], len: usize) -> Result<String, DecodeError> {
    if payload.len() != len {
        return Err(DecodeError::BadLength);
    }
    String::from_utf8(payload.to_vec()).map_err(|_| DecodeError::BadFormat)
}

/// Encodes an onion service address of the given length.
fn encode_onion(
    addr: &str,
    len: usize,
    target: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    if addr.len() != len || !addr.bytes().all(|ch| ch.is_ascii_alphanumeric())
    {
        return Err(EncodeError::BadValue);
    }
    target.extend_from_slice(addr.as_bytes());
    Ok(())
}

/// Reads an unsigned varint off the start of a slice.
///
/// Returns the value and the data following it.
fn read_varint(data: &[u8]) -> Result<(u64, &[u8]), DecodeError> {
    let mut res = 0u64;
    let mut shift = 0;
    for (i, &byte) in data.iter().enumerate() {
        if shift > 63 {
            return Err(DecodeError::BadFormat);
        }
        res |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((res, &data[i + 1..]));
        }
        shift += 7;
    }
    Err(DecodeError::ShortInput)
}

/// Appends the unsigned varint form of a value to a buffer.
fn write_varint(mut value: u64, target: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            target.push(byte);
            break;
        }
        target.push(byte | 0x80);
    }
}

//============ Test ==========================================================
