//! Labels hidden behind their hash.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.
//!
//! A label of a name can be replaced by its hash written as 64 hex digits
//! between square brackets, for instance when the text of the label is not
//! known or must not be revealed. Such a label contributes its decoded hash
//! to name hashing instead of the hash of its text. The functions here
//! recognize and convert this form.

use crate::base::{DecodeError, LabelHash};

//------------ Functions -----------------------------------------------------

/// Returns whether a label is an encoded label hash.
///
/// This is the case if it consists of exactly 64 hex digits between
/// square brackets.
#[must_use]
pub fn is_encoded_labelhash(label: &str) -> bool {
    let bytes = label.as_bytes();
    bytes.len() == 66
        && bytes[0] == b'['
        && bytes[65] == b']'
        && bytes[1..65].iter().all(u8::is_ascii_hexdigit)
}

/// Encodes a label hash into its bracketed text form.
#[must_use]
pub fn encode_labelhash(hash: LabelHash) -> String {
    format!("[{}]", hex::encode(hash.as_slice()))
}

/// Decodes a label in bracketed text form into its label hash.
pub fn decode_labelhash(label: &str) -> Result<LabelHash, DecodeError> {
    let digits = match label
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        Some(digits) => digits,
        None => return Err(DecodeError::BadFormat),
    };
    if digits.len() != 64 {
        return Err(DecodeError::BadLength);
    }
    let mut octets = [0u8; 32];
    match hex::decode_to_slice(digits, &mut octets) {
        Ok(()) => {}
        Err(hex::FromHexError::InvalidHexCharacter { c, .. }) => {
            return Err(DecodeError::IllegalChar(c))
        }
        Err(_) => return Err(DecodeError::BadLength),
    }
    Ok(LabelHash::from_octets(octets))
}

//============ Test ==========================================================
