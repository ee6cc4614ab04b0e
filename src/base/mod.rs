//! Basics.
//!
//! This module provides the fundamental types the rest of the crate is
//! built from: the account address and hash newtypes that appear in
//! contract calls, the registries of coin types and resolver interfaces,
//! and the error types shared across the crate.
//!
//! The most important types are re-exported at the module level. The open
//! ended registries live in their own public submodules because they come
//! with support types of their own.

//--- Re-exports of the private modules

mod addr;
pub use self::addr::ChainAddress;

mod error;
pub use self::error::{DecodeError, EncodeError, TransportError};

mod node;
pub use self::node::{LabelHash, NodeHash, TxHash};

//--- Public modules

pub mod coin;
pub mod iface;

pub use self::coin::CoinType;
pub use self::iface::InterfaceId;
