//! Decoding and encoding of base 32.
//!
//! The base 32 encoding is defined in [RFC 4648]. The RFC defines two
//! separate alphabets, called *base32* and *base32hex*. Content identifiers
//! use the former in its unpadded, lower case form which is what this
//! module implements. Decoding accepts both cases.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;

//------------ Re-exports ----------------------------------------------------

pub use crate::base::DecodeError;

//------------ Convenience Functions -----------------------------------------

/// Decodes a string with base 32 encoded data.
///
/// The function does not expect padding and treats `=` as an illegal
/// character.
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut res = Vec::with_capacity(s.len() * 5 / 8 + 1);
    let mut buf = [0u8; 8];
    let mut next = 0;
    for ch in s.chars() {
        if ch > (127 as char) {
            return Err(DecodeError::IllegalChar(ch));
        }
        let val = DECODE_ALPHABET[ch as usize];
        if val == 0xFF {
            return Err(DecodeError::IllegalChar(ch));
        }
        buf[next] = val;
        next += 1;
        if next == 8 {
            res.push(buf[0] << 3 | buf[1] >> 2);
            res.push(buf[1] << 6 | buf[2] << 1 | buf[3] >> 4);
            res.push(buf[3] << 4 | buf[4] >> 1);
            res.push(buf[4] << 7 | buf[5] << 2 | buf[6] >> 3);
            res.push(buf[6] << 5 | buf[7]);
            next = 0;
        }
    }
    match next {
        0 => {}
        1 | 3 | 6 => return Err(DecodeError::ShortInput),
        2 => {
            res.push(buf[0] << 3 | buf[1] >> 2);
        }
        4 => {
            res.push(buf[0] << 3 | buf[1] >> 2);
            res.push(buf[1] << 6 | buf[2] << 1 | buf[3] >> 4);
        }
        5 => {
            res.push(buf[0] << 3 | buf[1] >> 2);
            res.push(buf[1] << 6 | buf[2] << 1 | buf[3] >> 4);
            res.push(buf[3] << 4 | buf[4] >> 1);
        }
        7 => {
            res.push(buf[0] << 3 | buf[1] >> 2);
            res.push(buf[1] << 6 | buf[2] << 1 | buf[3] >> 4);
            res.push(buf[3] << 4 | buf[4] >> 1);
            res.push(buf[4] << 7 | buf[5] << 2 | buf[6] >> 3);
        }
        _ => unreachable!(),
    }
    Ok(res)
}

/// Encodes binary data in base 32 and writes it into a format stream.
///
/// This function is intended to be used in implementations of formatting
/// traits:
///
/// ```
/// use core::fmt;
/// use sid::utils::base32;
///
/// struct Foo<'a>(&'a [u8]);
///
/// impl<'a> fmt::Display for Foo<'a> {
///     fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
///         base32::display(&self.0, f)
///     }
/// }
/// ```
pub fn display<B, W>(bytes: &B, f: &mut W) -> fmt::Result
where
    B: AsRef<[u8]> + ?Sized,
    W: fmt::Write,
{
    fn ch(i: u8) -> char {
        ENCODE_ALPHABET[i as usize]
    }

    for chunk in bytes.as_ref().chunks(5) {
        f.write_char(ch(chunk[0] >> 3))?; // 0
        if chunk.len() == 1 {
            f.write_char(ch((chunk[0] & 0x07) << 2))?; // 1
            break;
        }
        f.write_char(ch((chunk[0] & 0x07) << 2 | chunk[1] >> 6))?; // 1
        f.write_char(ch((chunk[1] & 0x3F) >> 1))?; // 2
        if chunk.len() == 2 {
            f.write_char(ch((chunk[1] & 0x01) << 4))?; // 3
            break;
        }
        f.write_char(ch((chunk[1] & 0x01) << 4 | chunk[2] >> 4))?; // 3
        if chunk.len() == 3 {
            f.write_char(ch((chunk[2] & 0x0F) << 1))?; // 4
            break;
        }
        f.write_char(ch((chunk[2] & 0x0F) << 1 | chunk[3] >> 7))?; // 4
        f.write_char(ch((chunk[3] & 0x7F) >> 2))?; // 5
        if chunk.len() == 4 {
            f.write_char(ch((chunk[3] & 0x03) << 3))?; // 6
            break;
        }
        f.write_char(ch((chunk[3] & 0x03) << 3 | chunk[4] >> 5))?; // 6
        f.write_char(ch(chunk[4] & 0x1F))?; // 7
    }
    Ok(())
}

/// Encodes binary data in base 32 and returns the encoded data as a string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let mut res = String::with_capacity((bytes.as_ref().len() / 5 + 1) * 8);
    display(bytes, &mut res).unwrap();
    res
}

//------------ Constants -----------------------------------------------------

/// The alphabet used for decoding base 32.
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
    0xFF, 0xFF, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, // 0x30 .. 0x37
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x38 .. 0x3F
    0xFF, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, // 0x40 .. 0x47
    0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, // 0x48 .. 0x4F
    0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, // 0x50 .. 0x57
    0x17, 0x18, 0x19, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x58 .. 0x5F
    0xFF, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, // 0x60 .. 0x67
    0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, // 0x68 .. 0x6F
    0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, // 0x70 .. 0x77
    0x17, 0x18, 0x19, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x78 .. 0x7F
];

/// The alphabet used for encoding base 32.
const ENCODE_ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', // 0x00 .. 0x07
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', // 0x08 .. 0x0F
    'q', 'r', 's', 't', 'u', 'v', 'w', 'x', // 0x10 .. 0x17
    'y', 'z', '2', '3', '4', '5', '6', '7', // 0x18 .. 0x1F
];

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_str() {
        assert_eq!(&decode("").unwrap(), b"");
        assert_eq!(&decode("my").unwrap(), b"f");
        assert_eq!(&decode("mzxq").unwrap(), b"fo");
        assert_eq!(&decode("mzxw6").unwrap(), b"foo");
        assert_eq!(&decode("mzxw6yq").unwrap(), b"foob");
        assert_eq!(&decode("mzxw6ytb").unwrap(), b"fooba");
        assert_eq!(&decode("mzxw6ytboi").unwrap(), b"foobar");
        assert_eq!(&decode("MZXW6YTBOI").unwrap(), b"foobar");
        assert_eq!(decode("m").unwrap_err(), DecodeError::ShortInput);
        assert_eq!(decode("m=").unwrap_err(), DecodeError::IllegalChar('='));
    }

    #[test]
    fn encode_str() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"f"), "my");
        assert_eq!(encode_string(b"fo"), "mzxq");
        assert_eq!(encode_string(b"foo"), "mzxw6");
        assert_eq!(encode_string(b"foob"), "mzxw6yq");
        assert_eq!(encode_string(b"fooba"), "mzxw6ytb");
        assert_eq!(encode_string(b"foobar"), "mzxw6ytboi");
    }
}
