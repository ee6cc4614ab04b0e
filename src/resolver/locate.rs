//! The resolver discovery walk.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use crate::base::{ChainAddress, InterfaceId, TransportError};
use crate::name::Name;
use super::traits::{RegistryOps, ResolverOps};

//------------ locate_resolver -----------------------------------------------

/// Finds the resolver responsible for a name.
///
/// The registry is asked for the resolver of the name itself first. A
/// resolver registered for the exact name is trusted unconditionally.
/// When the name has none, its ancestors are asked in turn, but a
/// resolver found on an ancestor is only trusted if it advertises
/// wildcard resolution through
/// [`InterfaceId::WILDCARD`]. An ancestor resolver
/// without that capability ends the walk: it must not silently answer
/// for names below it that were never registered.
///
/// Returns [`ChainAddress::ZERO`] if no resolver was found, which is also
/// the answer for the root and for names of a single label. Transport
/// failures are returned to the caller.
pub async fn locate_resolver<C>(
    client: &C,
    registry: ChainAddress,
    name: &Name,
) -> Result<ChainAddress, TransportError>
where
    C: RegistryOps + ResolverOps,
{
    let mut current = name.clone();
    for _ in 0..name.label_count() {
        if current.label_count() < 2 {
            return Ok(ChainAddress::ZERO);
        }
        let resolver = client.resolver_of(registry, current.node()).await?;
        if !resolver.is_zero() {
            if current != *name
                && !client
                    .supports_interface(resolver, InterfaceId::WILDCARD)
                    .await?
            {
                return Ok(ChainAddress::ZERO);
            }
            return Ok(resolver);
        }
        current = match current.parent() {
            Some(parent) => parent,
            None => return Ok(ChainAddress::ZERO),
        };
    }
    Ok(ChainAddress::ZERO)
}
