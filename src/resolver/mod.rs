//! Finding resolvers.
//!
//! The registry only stores which resolver contract is responsible for a
//! node; the records themselves live in the resolver. This module provides
//! the traits a chain client has to implement so the crate can talk to
//! these contracts, and the discovery walk [`locate_resolver`] that finds
//! the responsible resolver for a name.

pub use self::locate::locate_resolver;
pub use self::traits::{
    ChainClient, RegistryOps, ResolverOps, ReverseRegistrarOps,
};

mod locate;
mod traits;
