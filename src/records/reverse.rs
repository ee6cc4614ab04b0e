//! Reverse resolution of addresses into names.
//!
//! This is a private module. It adds the reverse resolution operations to
//! [`Sid`] in their own impl block.

use tracing::warn;
use crate::base::{ChainAddress, TransportError, TxHash};
use crate::name::{node_of_normalized, Name};
use crate::resolver::ChainClient;
use super::sid::Sid;

/// # Reverse Resolution
///
impl<C: ChainClient> Sid<C> {
    /// Returns the primary name of an address.
    ///
    /// The primary name is whatever the owner of the address declared
    /// through [`set_primary_name`][Self::set_primary_name]. Since any
    /// account can declare any name, the declaration only counts if the
    /// name in turn resolves to the address. If it does not, or the
    /// address has no reverse record at all, this returns `None`.
    ///
    /// The reverse record lives under the node of
    /// `<address-hex>.addr.reverse` and is read directly from that node's
    /// resolver without the discovery walk.
    pub async fn primary_name(
        &self,
        addr: ChainAddress,
    ) -> Result<Option<Name>, TransportError> {
        let node = node_of_normalized(&format!("{:x}.addr.reverse", addr));
        let resolver =
            self.client.resolver_of(self.conf.registry, node).await?;
        if resolver.is_zero() {
            return Ok(None);
        }
        let name = match self.client.name_record(resolver, node).await {
            Ok(name) => name,
            Err(err) => {
                warn!(
                    error = %err,
                    "Error getting name for reverse record of {}", addr
                );
                return Ok(None);
            }
        };
        if name.is_empty() {
            return Ok(None);
        }
        let handle = match self.name(&name) {
            Ok(handle) => handle,
            Err(err) => {
                warn!(
                    error = %err,
                    "Error getting name for reverse record of {}", addr
                );
                return Ok(None);
            }
        };
        match handle.address().await {
            Ok(forward) if forward == addr => Ok(Some(handle.into_name())),
            Ok(_) => Ok(None),
            Err(err) => {
                warn!(
                    error = %err,
                    "Error getting name for reverse record of {}", addr
                );
                Ok(None)
            }
        }
    }

    /// Declares a name as the primary name of the calling account.
    ///
    /// The call goes through the reverse registrar, which is looked up as
    /// the owner of the `addr.reverse` name.
    pub async fn set_primary_name(
        &self,
        name: &Name,
    ) -> Result<TxHash, TransportError> {
        let registrar = self
            .client
            .owner_of(self.conf.registry, node_of_normalized("addr.reverse"))
            .await?;
        self.client.set_name(registrar, name.as_str()).await
    }
}
