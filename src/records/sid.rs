//! The service value.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::base::ChainAddress;
use crate::coins::CoinRegistry;
use crate::conf::SidConf;
use crate::name::InvalidNameError;
use super::handle::NameHandle;

//------------ Sid -----------------------------------------------------------

/// Access to the records of a name service deployment.
///
/// The type combines three things: a client for the chain the deployment
/// lives on, the configuration naming the registry contract, and the
/// registry of coin codecs that translate address records. It hands out
/// [`NameHandle`]s through which the records of individual names are read
/// and written, and provides reverse resolution of addresses back into
/// names.
///
/// The chain client is anything implementing the traits of
/// [`resolver`][crate::resolver]. The crate itself never talks to a
/// chain.
#[derive(Debug)]
pub struct Sid<C> {
    /// The chain client.
    pub(super) client: C,

    /// The configuration of the deployment.
    pub(super) conf: SidConf,

    /// The codecs for address records.
    pub(super) coins: CoinRegistry,
}

impl<C> Sid<C> {
    /// Creates a service value with the standard coin codecs.
    pub fn new(client: C, conf: SidConf) -> Self {
        Sid::with_coins(client, conf, CoinRegistry::standard())
    }

    /// Creates a service value with its own set of coin codecs.
    pub fn with_coins(
        client: C,
        conf: SidConf,
        coins: CoinRegistry,
    ) -> Self {
        Sid {
            client,
            conf,
            coins,
        }
    }

    /// Returns a reference to the chain client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the configuration of the deployment.
    pub fn conf(&self) -> &SidConf {
        &self.conf
    }

    /// Returns the coin codecs used for address records.
    pub fn coins(&self) -> &CoinRegistry {
        &self.coins
    }

    /// Returns a handle for a name.
    ///
    /// The name is validated and normalized. The handle discovers the
    /// name's resolver on demand.
    pub fn name(
        &self,
        name: &str,
    ) -> Result<NameHandle<'_, C>, InvalidNameError> {
        Ok(NameHandle::new(self, name.parse()?, None))
    }

    /// Returns a handle for a name with a fixed resolver.
    ///
    /// The handle skips resolver discovery and uses the given resolver
    /// contract for all record operations.
    pub fn name_with_resolver(
        &self,
        name: &str,
        resolver: ChainAddress,
    ) -> Result<NameHandle<'_, C>, InvalidNameError> {
        Ok(NameHandle::new(self, name.parse()?, Some(resolver)))
    }
}
