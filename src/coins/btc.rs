//! The codec for Bitcoin style chains.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::base::{DecodeError, EncodeError};
use crate::utils::base58;
use crate::utils::bech32::{self, Variant};
use super::registry::CoinCodec;

//------------ BtcCodec ------------------------------------------------------

/// The codec for chains with Bitcoin style payment scripts.
///
/// The record bytes are the output script of a payment to the address.
/// Pay-to-pubkey-hash and pay-to-script-hash scripts translate into base 58
/// check addresses with the version octets given at construction. Witness
/// program scripts translate into bech32 addresses when the chain has a
/// human readable part, with bech32m used for witness versions above zero.
///
/// When encoding, an address that starts with the human readable part
/// followed by the separator `1` is treated as a bech32 address and
/// anything else as a base 58 check address.
#[derive(Clone, Copy, Debug)]
pub struct BtcCodec {
    /// The version octet of pay-to-pubkey-hash addresses.
    p2pkh: u8,

    /// The version octet of pay-to-script-hash addresses.
    p2sh: u8,

    /// The human readable part of witness addresses, if the chain has them.
    hrp: Option<&'static str>,
}

impl BtcCodec {
    /// Creates the codec for Bitcoin.
    #[must_use]
    pub fn btc() -> Self {
        BtcCodec {
            p2pkh: 0x00,
            p2sh: 0x05,
            hrp: Some("bc"),
        }
    }

    /// Creates the codec for Litecoin.
    #[must_use]
    pub fn ltc() -> Self {
        BtcCodec {
            p2pkh: 0x30,
            p2sh: 0x32,
            hrp: Some("ltc"),
        }
    }

    /// Creates the codec for Dogecoin.
    ///
    /// Dogecoin has no witness programs, so only base 58 check addresses
    /// are produced and accepted.
    #[must_use]
    pub fn doge() -> Self {
        BtcCodec {
            p2pkh: 0x1e,
            p2sh: 0x16,
            hrp: None,
        }
    }

    /// Decodes a witness program script into a bech32 address.
    fn decode_witness(&self, data: &[u8]) -> Result<String, DecodeError> {
        let hrp = self.hrp.ok_or(DecodeError::BadFormat)?;
        if data.len() < 4 {
            return Err(DecodeError::BadFormat);
        }
        let version = match data[0] {
            0x00 => 0,
            op @ 0x51..=0x60 => op - 0x50,
            _ => return Err(DecodeError::BadFormat),
        };
        let program = &data[2..];
        if usize::from(data[1]) != program.len() || program.len() > 40 {
            return Err(DecodeError::BadFormat);
        }
        if version == 0 && program.len() != 20 && program.len() != 32 {
            return Err(DecodeError::BadFormat);
        }
        let mut five = Vec::with_capacity(1 + (program.len() * 8 + 4) / 5);
        five.push(version);
        five.extend(bech32::convert_bits(program, 8, 5, true)?);
        let variant = if version == 0 {
            Variant::Bech32
        } else {
            Variant::Bech32m
        };
        Ok(bech32::encode_string(hrp, &five, variant))
    }

    /// Encodes a bech32 address into a witness program script.
    fn encode_witness(
        &self,
        hrp: &str,
        addr: &str,
    ) -> Result<Vec<u8>, EncodeError> {
        let (dec_hrp, data, variant) = bech32::decode(addr)?;
        if dec_hrp != hrp {
            return Err(EncodeError::BadValue);
        }
        let (version, five) = match data.split_first() {
            Some((&version, five)) => (version, five),
            None => return Err(EncodeError::BadValue),
        };
        if version > 16 {
            return Err(EncodeError::BadValue);
        }
        let expected = if version == 0 {
            Variant::Bech32
        } else {
            Variant::Bech32m
        };
        if variant != expected {
            return Err(EncodeError::BadValue);
        }
        let program = bech32::convert_bits(five, 5, 8, false)?;
        if program.len() < 2 || program.len() > 40 {
            return Err(EncodeError::BadValue);
        }
        if version == 0 && program.len() != 20 && program.len() != 32 {
            return Err(EncodeError::BadValue);
        }
        let mut res = Vec::with_capacity(program.len() + 2);
        res.push(if version == 0 { 0x00 } else { 0x50 + version });
        res.push(program.len() as u8);
        res.extend_from_slice(&program);
        Ok(res)
    }
}

//--- CoinCodec

impl CoinCodec for BtcCodec {
    fn decode(&self, data: &[u8]) -> Result<String, DecodeError> {
        if data.len() == 25
            && data[0] == 0x76
            && data[1] == 0xa9
            && data[2] == 0x14
            && data[23] == 0x88
            && data[24] == 0xac
        {
            return Ok(version_hash(self.p2pkh, &data[3..23]));
        }
        if data.len() == 23
            && data[0] == 0xa9
            && data[1] == 0x14
            && data[22] == 0x87
        {
            return Ok(version_hash(self.p2sh, &data[2..22]));
        }
        self.decode_witness(data)
    }

    fn encode(&self, addr: &str) -> Result<Vec<u8>, EncodeError> {
        if let Some(hrp) = self.hrp {
            if has_hrp_prefix(addr, hrp) {
                return self.encode_witness(hrp, addr);
            }
        }
        let data = base58::decode_check(addr)?;
        if data.len() != 21 {
            return Err(EncodeError::BadValue);
        }
        if data[0] == self.p2pkh {
            let mut res = Vec::with_capacity(25);
            res.extend_from_slice(&[0x76, 0xa9, 0x14]);
            res.extend_from_slice(&data[1..]);
            res.extend_from_slice(&[0x88, 0xac]);
            Ok(res)
        } else if data[0] == self.p2sh {
            let mut res = Vec::with_capacity(23);
            res.extend_from_slice(&[0xa9, 0x14]);
            res.extend_from_slice(&data[1..]);
            res.push(0x87);
            Ok(res)
        } else {
            Err(EncodeError::BadValue)
        }
    }
}

//------------ Helper Functions ----------------------------------------------

/// Encodes a version octet and hash in base 58 check.
fn version_hash(version: u8, hash: &[u8]) -> String {
    let mut data = Vec::with_capacity(hash.len() + 1);
    data.push(version);
    data.extend_from_slice(hash);
    base58::encode_check_string(&data)
}

/// Returns whether an address starts with the given human readable part.
fn has_hrp_prefix(addr: &str, hrp: &str) -> bool {
    let addr = addr.as_bytes();
    let hrp = hrp.as_bytes();
    addr.len() > hrp.len()
        && addr[..hrp.len()].eq_ignore_ascii_case(hrp)
        && addr[hrp.len()] == b'1'
}

//============ Test ==========================================================
