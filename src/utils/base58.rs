//! Decoding and encoding of base 58.
//!
//! Base 58 encodes binary data using the 58 alphanumeric ASCII characters
//! that remain after dropping the easily confused `0`, `O`, `I`, and `l`.
//! Unlike the base encodings of [RFC 4648], it treats the entire input as
//! one big-endian integer which it converts into digits of base 58, so
//! encoding and decoding take quadratic time. This is acceptable since the
//! encoding is only ever used for short and fixed-sized data such as
//! addresses and content hashes. Leading zero octets are represented by the
//! same number of leading `1` digits.
//!
//! The module implements both the plain encoding and the checked variant
//! used for wallet addresses which appends the first four octets of a
//! double SHA-256 digest over the data before encoding. The functions of
//! the checked variant use the suffix `_check`.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;
use ring::digest;

//------------ Re-exports ----------------------------------------------------

pub use crate::base::DecodeError;

//------------ Convenience Functions -----------------------------------------

/// Decodes a string with base 58 encoded data.
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut bytes = Vec::new();
    let mut leading = true;
    let mut zeros = 0;
    for ch in s.chars() {
        if ch > (127 as char) {
            return Err(DecodeError::IllegalChar(ch));
        }
        let val = DECODE_ALPHABET[ch as usize];
        if val == 0xFF {
            return Err(DecodeError::IllegalChar(ch));
        }
        if leading && val == 0 {
            zeros += 1;
            continue;
        }
        leading = false;
        let mut carry = u32::from(val);
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }
    let mut res = vec![0u8; zeros];
    res.extend(bytes.iter().rev());
    Ok(res)
}

/// Decodes a string with base 58 encoded data followed by a checksum.
///
/// The last four octets of the decoded data are interpreted as the leading
/// octets of a double SHA-256 digest over the rest and are checked and
/// removed. The function returns the data without the checksum.
pub fn decode_check(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut data = decode(s)?;
    if data.len() < 4 {
        return Err(DecodeError::ShortInput);
    }
    let payload_len = data.len() - 4;
    if checksum(&data[..payload_len]) != data[payload_len..] {
        return Err(DecodeError::BadChecksum);
    }
    data.truncate(payload_len);
    Ok(data)
}

/// Encodes binary data in base 58 and writes it into a format stream.
///
/// This function is intended to be used in implementations of formatting
/// traits:
///
/// ```
/// use core::fmt;
/// use sid::utils::base58;
///
/// struct Foo<'a>(&'a [u8]);
///
/// impl<'a> fmt::Display for Foo<'a> {
///     fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
///         base58::display(&self.0, f)
///     }
/// }
/// ```
pub fn display<B, W>(bytes: &B, f: &mut W) -> fmt::Result
where
    B: AsRef<[u8]> + ?Sized,
    W: fmt::Write,
{
    let bytes = bytes.as_ref();
    let mut zeros = 0;
    while zeros < bytes.len() && bytes[zeros] == 0 {
        zeros += 1;
    }

    // Base 58 digits of the remaining data, least significant first.
    let mut digits = Vec::with_capacity((bytes.len() - zeros) * 138 / 100 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    for _ in 0..zeros {
        f.write_char('1')?;
    }
    for &digit in digits.iter().rev() {
        f.write_char(ENCODE_ALPHABET[digit as usize])?;
    }
    Ok(())
}

/// Encodes binary data in base 58 and returns the encoded data as a string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let mut res = String::with_capacity(bytes.as_ref().len() * 138 / 100 + 1);
    display(bytes, &mut res).unwrap();
    res
}

/// Encodes binary data with a trailing checksum and returns a string.
///
/// This is the inverse of [`decode_check`]: the first four octets of a
/// double SHA-256 digest over the data are appended before encoding.
pub fn encode_check_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let bytes = bytes.as_ref();
    let mut data = Vec::with_capacity(bytes.len() + 4);
    data.extend_from_slice(bytes);
    data.extend_from_slice(&checksum(bytes));
    encode_string(&data)
}

//------------ Helper Functions ----------------------------------------------

/// Returns the four octet checksum over some data.
fn checksum(data: &[u8]) -> [u8; 4] {
    let first = digest::digest(&digest::SHA256, data);
    let second = digest::digest(&digest::SHA256, first.as_ref());
    let mut res = [0u8; 4];
    res.copy_from_slice(&second.as_ref()[..4]);
    res
}

//------------ Constants -----------------------------------------------------

/// The alphabet used for decoding base 58.
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
    0xFF, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, // 0x30 .. 0x37
    0x07, 0x08, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x38 .. 0x3F
    0xFF, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, // 0x40 .. 0x47
    0x10, 0xFF, 0x11, 0x12, 0x13, 0x14, 0x15, 0xFF, // 0x48 .. 0x4F
    0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, // 0x50 .. 0x57
    0x1e, 0x1f, 0x20, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x58 .. 0x5F
    0xFF, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, // 0x60 .. 0x67
    0x28, 0x29, 0x2a, 0x2b, 0xFF, 0x2c, 0x2d, 0x2e, // 0x68 .. 0x6F
    0x2f, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, // 0x70 .. 0x77
    0x37, 0x38, 0x39, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x78 .. 0x7F
];

/// The alphabet used for encoding base 58.
const ENCODE_ALPHABET: [char; 58] = [
    '1', '2', '3', '4', '5', '6', '7', '8', // 0x00 .. 0x07
    '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0x08 .. 0x0F
    'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', // 0x10 .. 0x17
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', // 0x18 .. 0x1F
    'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x20 .. 0x27
    'h', 'i', 'j', 'k', 'm', 'n', 'o', 'p', // 0x28 .. 0x2F
    'q', 'r', 's', 't', 'u', 'v', 'w', 'x', // 0x30 .. 0x37
    'y', 'z',
];

//============ Test ==========================================================
