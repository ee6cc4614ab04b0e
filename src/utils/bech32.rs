//! Decoding and encoding of Bech32.
//!
//! Bech32 is defined in [BIP-173]. A string consists of a human-readable
//! part, the separator `1`, and a data part of five-bit groups expressed in
//! an alphabet chosen for error detection, the last six of which are a
//! checksum over the whole string. [BIP-350] later defined the *Bech32m*
//! variant which differs only in the constant added when creating the
//! checksum and which is used for version 1 and later witness programs.
//!
//! The functions here deal with the string format only and leave the
//! interpretation of the five-bit data to their callers. Callers can
//! translate between five-bit groups and octets through [`convert_bits`].
//!
//! [BIP-173]: https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki
//! [BIP-350]: https://github.com/bitcoin/bips/blob/master/bip-0350.mediawiki

use core::fmt;

//------------ Re-exports ----------------------------------------------------

pub use crate::base::DecodeError;

//------------ Variant -------------------------------------------------------

/// The two flavours of the Bech32 checksum.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variant {
    /// The original checksum of BIP-173.
    Bech32,

    /// The modified checksum of BIP-350.
    Bech32m,
}

impl Variant {
    /// Returns the constant the checksum has to sum up to.
    fn residue(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }
}

//------------ Convenience Functions -----------------------------------------

/// Decodes a Bech32 encoded string.
///
/// Returns the lower-cased human-readable part, the data part as five-bit
/// values with the checksum removed, and the checksum variant that matched.
pub fn decode(s: &str) -> Result<(String, Vec<u8>, Variant), DecodeError> {
    if s.len() > 90 {
        return Err(DecodeError::BadLength);
    }
    let mut lower = false;
    let mut upper = false;
    for ch in s.chars() {
        match ch {
            '\x21'..='\x7e' => {}
            _ => return Err(DecodeError::IllegalChar(ch)),
        }
        lower |= ch.is_ascii_lowercase();
        upper |= ch.is_ascii_uppercase();
    }
    if lower && upper {
        return Err(DecodeError::MixedCase);
    }
    let s = s.to_ascii_lowercase();

    let sep = match s.rfind('1') {
        Some(pos) => pos,
        None => return Err(DecodeError::BadFormat),
    };
    if sep == 0 {
        return Err(DecodeError::BadFormat);
    }
    if s.len() < sep + 7 {
        return Err(DecodeError::ShortInput);
    }
    let hrp = &s[..sep];
    let mut data = Vec::with_capacity(s.len() - sep - 1);
    for ch in s[sep + 1..].chars() {
        let val = DECODE_ALPHABET[ch as usize];
        if val == 0xFF {
            return Err(DecodeError::IllegalChar(ch));
        }
        data.push(val);
    }

    let chk = polymod(
        hrp_expand(hrp).into_iter().chain(data.iter().copied()),
    );
    let variant = if chk == Variant::Bech32.residue() {
        Variant::Bech32
    } else if chk == Variant::Bech32m.residue() {
        Variant::Bech32m
    } else {
        return Err(DecodeError::BadChecksum);
    };
    data.truncate(data.len() - 6);
    Ok((hrp.into(), data, variant))
}

/// Encodes five-bit data in Bech32 and writes it into a format stream.
///
/// The human-readable part must consist of lower case ASCII characters.
/// The checksum for the requested variant is created and appended.
pub fn display<W: fmt::Write>(
    hrp: &str,
    data: &[u8],
    variant: Variant,
    f: &mut W,
) -> fmt::Result {
    f.write_str(hrp)?;
    f.write_char('1')?;
    for &val in data {
        f.write_char(ENCODE_ALPHABET[(val & 0x1F) as usize])?;
    }
    let chk = polymod(
        hrp_expand(hrp)
            .into_iter()
            .chain(data.iter().copied())
            .chain([0u8; 6]),
    ) ^ variant.residue();
    for i in 0..6 {
        let val = (chk >> (5 * (5 - i))) & 0x1F;
        f.write_char(ENCODE_ALPHABET[val as usize])?;
    }
    Ok(())
}

/// Encodes five-bit data in Bech32 and returns the result as a string.
pub fn encode_string(hrp: &str, data: &[u8], variant: Variant) -> String {
    let mut res = String::with_capacity(hrp.len() + 1 + data.len() + 6);
    display(hrp, data, variant, &mut res).unwrap();
    res
}

/// Regroups a sequence of bit groups into groups of a different width.
///
/// The input values are concatenated big-endian and cut into groups of the
/// new width. When `pad` is true, the last group is padded out with zero
/// bits; this is the mode used when encoding. When `pad` is false, left
/// over bits are only accepted if they are an incomplete group of zero
/// bits; this is the mode used when decoding.
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, DecodeError> {
    let mut acc = 0u32;
    let mut bits = 0u32;
    let maxv = (1u32 << to_bits) - 1;
    let mut res =
        Vec::with_capacity((data.len() * from_bits as usize).div_euclid(to_bits as usize) + 1);
    for &value in data {
        let value = u32::from(value);
        if value >> from_bits != 0 {
            return Err(DecodeError::BadFormat);
        }
        acc = acc << from_bits | value;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            res.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad {
        if bits > 0 {
            res.push(((acc << (to_bits - bits)) & maxv) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & maxv) != 0 {
        return Err(DecodeError::BadFormat);
    }
    Ok(res)
}

//------------ Helper Functions ----------------------------------------------

/// Returns the checksum values covering the human-readable part.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut res = Vec::with_capacity(hrp.len() * 2 + 1);
    for ch in hrp.bytes() {
        res.push(ch >> 5);
    }
    res.push(0);
    for ch in hrp.bytes() {
        res.push(ch & 0x1F);
    }
    res
}

/// The BCH checksum over a sequence of five-bit values.
fn polymod(values: impl Iterator<Item = u8>) -> u32 {
    let mut chk = 1u32;
    for value in values {
        let top = chk >> 25;
        chk = (chk & 0x01ff_ffff) << 5 ^ u32::from(value);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if top >> i & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}

//------------ Constants -----------------------------------------------------

/// The generator coefficients of the checksum.
const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

/// The alphabet used for decoding Bech32.
///
/// This maps encoding characters into their values. A value of 0xFF stands
/// in for illegal characters. We only provide the first 128 characters since
/// the alphabet will only use ASCII characters.
const DECODE_ALPHABET: [u8; 128] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x00 .. 0x07
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x08 .. 0x0F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x10 .. 0x17
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x18 .. 0x1F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x20 .. 0x27
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x28 .. 0x2F
    0x0F, 0xFF, 0x0A, 0x11, 0x15, 0x14, 0x1A, 0x1E, // 0x30 .. 0x37
    0x07, 0x05, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x38 .. 0x3F
    0xFF, 0x1D, 0xFF, 0x18, 0x0D, 0x19, 0x09, 0x08, // 0x40 .. 0x47
    0x17, 0xFF, 0x12, 0x16, 0x1F, 0x1B, 0x13, 0xFF, // 0x48 .. 0x4F
    0x01, 0x00, 0x03, 0x10, 0x0B, 0x1C, 0x0C, 0x0E, // 0x50 .. 0x57
    0x06, 0x04, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x58 .. 0x5F
    0xFF, 0x1D, 0xFF, 0x18, 0x0D, 0x19, 0x09, 0x08, // 0x60 .. 0x67
    0x17, 0xFF, 0x12, 0x16, 0x1F, 0x1B, 0x13, 0xFF, // 0x68 .. 0x6F
    0x01, 0x00, 0x03, 0x10, 0x0B, 0x1C, 0x0C, 0x0E, // 0x70 .. 0x77
    0x06, 0x04, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x78 .. 0x7F
];

/// The alphabet used for encoding Bech32.
const ENCODE_ALPHABET: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', // 0x00 .. 0x07
    'g', 'f', '2', 't', 'v', 'd', 'w', '0', // 0x08 .. 0x0F
    's', '3', 'j', 'n', '5', '4', 'k', 'h', // 0x10 .. 0x17
    'c', 'e', '6', 'm', 'u', 'a', '7', 'l', // 0x18 .. 0x1F
];

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_valid() {
        let (hrp, data, variant) = decode("A12UEL5L").unwrap();
        assert_eq!(hrp, "a");
        assert_eq!(data, b"");
        assert_eq!(variant, Variant::Bech32);

        let (hrp, data, variant) =
            decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
        assert_eq!(hrp, "abcdef");
        assert_eq!(data, (0..32).collect::<Vec<u8>>());
        assert_eq!(variant, Variant::Bech32);

        let (hrp, data, _) = decode(
            "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
        )
        .unwrap();
        assert_eq!(hrp, "split");
        assert!(!data.is_empty());
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(decode("A12UeL5L").unwrap_err(), DecodeError::MixedCase);
        assert_eq!(decode("A12UEL5M").unwrap_err(), DecodeError::BadChecksum);
        assert_eq!(decode("pzry9x0s3jn54khce6mua7l").unwrap_err(),
            DecodeError::BadFormat);
        assert_eq!(decode("1pzry9x0s3jn54khce6mua7l").unwrap_err(),
            DecodeError::BadFormat);
        assert_eq!(decode("a1qqqqq").unwrap_err(), DecodeError::ShortInput);
        assert_eq!(decode("x1b4n0q5v").unwrap_err(),
            DecodeError::IllegalChar('b'));
    }

    #[test]
    fn encode_round_trip() {
        for variant in [Variant::Bech32, Variant::Bech32m] {
            let data: Vec<u8> = (0..32).collect();
            let encoded = encode_string("test", &data, variant);
            let (hrp, decoded, var) = decode(&encoded).unwrap();
            assert_eq!(hrp, "test");
            assert_eq!(decoded, data);
            assert_eq!(var, variant);
        }
    }

    #[test]
    fn bits() {
        assert_eq!(
            convert_bits(&[0xFF], 8, 5, true).unwrap(),
            &[0x1F, 0x1C]
        );
        assert_eq!(
            convert_bits(&[0x1F, 0x1C], 5, 8, false).unwrap(),
            &[0xFF]
        );
        // Non-zero padding.
        assert_eq!(
            convert_bits(&[0x1F, 0x1F], 5, 8, false).unwrap_err(),
            DecodeError::BadFormat
        );
        // A whole group left over.
        assert_eq!(
            convert_bits(&[0x00, 0x00, 0x00], 5, 8, false).unwrap_err(),
            DecodeError::BadFormat
        );
        let data: Vec<u8> = (0..=255).collect();
        let five = convert_bits(&data, 8, 5, true).unwrap();
        assert_eq!(convert_bits(&five, 5, 8, false).unwrap(), data);
    }
}
