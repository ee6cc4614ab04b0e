//! Resolver interface identifiers.

use core::fmt;

//------------ InterfaceId ---------------------------------------------------

/// The identifier of a resolver interface.
///
/// Resolver contracts advertise their capabilities through [ERC-165]: an
/// interface is identified by the four octet XOR of the selectors of its
/// functions and the contract reports through `supportsInterface` whether
/// it implements it. Constants are defined for the single function
/// interfaces this crate queries.
///
/// [ERC-165]: https://eips.ethereum.org/EIPS/eip-165
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct InterfaceId(u32);

impl InterfaceId {
    /// `addr(bytes32)`, the chain native address of a name.
    pub const ADDR: InterfaceId = InterfaceId(0x3b3b_57de);

    /// `addr(bytes32,uint256)`, the address of a name for a coin type.
    pub const MULTICOIN_ADDR: InterfaceId = InterfaceId(0xf1cb_7e06);

    /// `contenthash(bytes32)`, the content hash of a name.
    pub const CONTENT_HASH: InterfaceId = InterfaceId(0xbc1c_58d1);

    /// `content(bytes32)`, the content field of early resolvers.
    pub const LEGACY_CONTENT: InterfaceId = InterfaceId(0xd838_9dc5);

    /// `text(bytes32,string)`, a text record of a name.
    pub const TEXT: InterfaceId = InterfaceId(0x59d1_d43c);

    /// `name(bytes32)`, the name record used by reverse resolution.
    pub const NAME: InterfaceId = InterfaceId(0x691f_3431);

    /// `resolve(bytes,bytes)`, the wildcard resolution entry point.
    pub const WILDCARD: InterfaceId = InterfaceId(0x9061_b923);
}

impl InterfaceId {
    /// Returns a value from its raw integer value.
    #[must_use]
    pub const fn from_int(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value for a value.
    #[must_use]
    pub const fn to_int(self) -> u32 {
        self.0
    }

    /// Returns the function signature this is the selector of, if known.
    #[must_use]
    pub const fn signature(self) -> Option<&'static str> {
        match self {
            InterfaceId::ADDR => Some("addr(bytes32)"),
            InterfaceId::MULTICOIN_ADDR => Some("addr(bytes32,uint256)"),
            InterfaceId::CONTENT_HASH => Some("contenthash(bytes32)"),
            InterfaceId::LEGACY_CONTENT => Some("content(bytes32)"),
            InterfaceId::TEXT => Some("text(bytes32,string)"),
            InterfaceId::NAME => Some("name(bytes32)"),
            InterfaceId::WILDCARD => Some("resolve(bytes,bytes)"),
            _ => None,
        }
    }

    /// Returns the identifier as it appears in a contract call.
    #[must_use]
    pub const fn to_octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

//--- From

impl From<u32> for InterfaceId {
    fn from(value: u32) -> Self {
        InterfaceId::from_int(value)
    }
}

impl From<InterfaceId> for u32 {
    fn from(value: InterfaceId) -> Self {
        value.to_int()
    }
}

//--- Display and Debug

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl fmt::Debug for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.signature() {
            Some(signature) => {
                write!(f, "InterfaceId({})", signature)
            }
            None => {
                write!(f, "InterfaceId(0x{:08x})", self.0)
            }
        }
    }
}

//============ Test ==========================================================
