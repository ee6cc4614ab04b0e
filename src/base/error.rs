//! Error types shared across the crate.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::fmt;
use std::error;
use super::coin::CoinType;

//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data from its binary or text form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The input ended before the data was complete.
    ShortInput,

    /// An illegal character appeared in the input.
    IllegalChar(char),

    /// A checksum did not match the data it covers.
    BadChecksum,

    /// The input mixes upper and lower case where it must not.
    MixedCase,

    /// The input has the wrong length for its type.
    BadLength,

    /// The input violates the layout of its type.
    BadFormat,

    /// No codec is registered for the coin type.
    UnsupportedCoin(CoinType),

    /// The content protocol code is not known.
    UnsupportedProtocol(u64),

    /// Unexpected data remained after the end of the value.
    TrailingInput,
}

//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::ShortInput => f.write_str("short input"),
            DecodeError::IllegalChar(ch) => {
                write!(f, "illegal character '{}'", ch)
            }
            DecodeError::BadChecksum => f.write_str("invalid checksum"),
            DecodeError::MixedCase => f.write_str("mixed case"),
            DecodeError::BadLength => f.write_str("invalid length"),
            DecodeError::BadFormat => f.write_str("invalid format"),
            DecodeError::UnsupportedCoin(coin) => {
                write!(f, "unsupported coin type {}", coin)
            }
            DecodeError::UnsupportedProtocol(code) => {
                write!(f, "unsupported content protocol {:#x}", code)
            }
            DecodeError::TrailingInput => f.write_str("trailing input"),
        }
    }
}

impl error::Error for DecodeError {}

//------------ EncodeError ---------------------------------------------------

/// An error happened while encoding a value into its binary form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// No codec is registered for the coin type.
    UnsupportedCoin(CoinType),

    /// The content URI uses a scheme that is not known.
    UnsupportedScheme,

    /// The value is not valid for its coin or protocol.
    BadValue,

    /// The text form of the value could not be decoded.
    Decode(DecodeError),
}

//--- From

impl From<DecodeError> for EncodeError {
    fn from(err: DecodeError) -> Self {
        EncodeError::Decode(err)
    }
}

//--- Display and Error

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodeError::UnsupportedCoin(coin) => {
                write!(f, "unsupported coin type {}", coin)
            }
            EncodeError::UnsupportedScheme => {
                f.write_str("unsupported content scheme")
            }
            EncodeError::BadValue => f.write_str("invalid value"),
            EncodeError::Decode(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            EncodeError::Decode(ref err) => Some(err),
            _ => None,
        }
    }
}

//------------ TransportError ------------------------------------------------

/// A fault reported by the underlying chain transport.
///
/// The crate performs no chain access of its own, so all it can do with a
/// transport fault is carry it. The error wraps whatever the injected
/// client produced.
#[derive(Debug)]
pub struct TransportError(Box<dyn error::Error + Send + Sync>);

impl TransportError {
    /// Creates a transport error from some other error.
    pub fn new(err: impl error::Error + Send + Sync + 'static) -> Self {
        TransportError(Box::new(err))
    }

    /// Creates a transport error from a plain message.
    pub fn message(msg: impl Into<String>) -> Self {
        TransportError(msg.into().into())
    }
}

//--- Display and Error

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl error::Error for TransportError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

//============ Test ==========================================================
