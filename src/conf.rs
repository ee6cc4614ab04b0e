//! Deployment configuration.
//!
//! The registry contract is deployed at well known addresses on a number
//! of chains. [`SidConf`] carries the address to use and can be looked up
//! by chain ID through [`SidConf::for_chain`] or assembled manually for
//! private deployments.

use crate::base::ChainAddress;

//------------ SidConf -------------------------------------------------------

/// The configuration of a registry deployment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SidConf {
    /// The address of the registry contract.
    pub registry: ChainAddress,
}

impl SidConf {
    /// Creates a configuration from a registry address.
    #[must_use]
    pub fn new(registry: ChainAddress) -> Self {
        SidConf { registry }
    }

    /// Returns the configuration of the known deployment on a chain.
    ///
    /// Returns `None` if no deployment is known for the chain ID.
    #[must_use]
    pub fn for_chain(chain_id: u64) -> Option<Self> {
        let registry = match chain_id {
            // BNB Smart Chain testnet.
            97 => ChainAddress::from_octets([
                0xff, 0xb5, 0x21, 0x85, 0xb5, 0x66, 0x03, 0xe0, 0xfd, 0x71,
                0xde, 0x9d, 0xe4, 0xf6, 0xf9, 0x02, 0xf0, 0x5e, 0xea, 0x23,
            ]),
            // Ethereum mainnet and the Ropsten, Rinkeby, and Goerli
            // testnets.
            1 | 3 | 4 | 5 => ChainAddress::from_octets([
                0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x2e, 0x07, 0x4e, 0xc6,
                0x9a, 0x0d, 0xfb, 0x29, 0x97, 0xba, 0x6c, 0x7d, 0x2e, 0x1e,
            ]),
            // BNB Smart Chain.
            56 => ChainAddress::from_octets([
                0x08, 0xce, 0xd3, 0x2a, 0x7f, 0x3e, 0xec, 0x91, 0x5b, 0xa8,
                0x44, 0x15, 0xe9, 0xc0, 0x7a, 0x72, 0x86, 0x97, 0x79, 0x56,
            ]),
            // Arbitrum Goerli testnet.
            421_613 => ChainAddress::from_octets([
                0x1f, 0x70, 0xfc, 0x8d, 0xe5, 0x66, 0x9e, 0xaa, 0x8c, 0x9c,
                0xe7, 0x22, 0x57, 0xc9, 0x45, 0x00, 0xdc, 0x5f, 0xf2, 0xe4,
            ]),
            // Arbitrum One.
            42_161 => ChainAddress::from_octets([
                0x4a, 0x06, 0x7e, 0xe5, 0x8e, 0x73, 0xac, 0x5e, 0x4a, 0x43,
                0x72, 0x2e, 0x00, 0x8d, 0xfd, 0xf6, 0x5b, 0x2b, 0xf3, 0x48,
            ]),
            _ => return None,
        };
        Some(SidConf { registry })
    }
}

//------------ LENGTH_EXEMPT -------------------------------------------------

/// Names exempt from the length rule of validation.
///
/// Entries must be in lower case. The list is consulted with the whole
/// name whenever the domain part falls outside the allowed length.
pub const LENGTH_EXEMPT: &[&str] = &[];

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_deployments() {
        assert_eq!(
            SidConf::for_chain(97).unwrap().registry.to_string(),
            "0xfFB52185b56603e0fd71De9de4F6f902f05EEA23"
        );
        assert_eq!(
            SidConf::for_chain(1).unwrap().registry.to_string(),
            "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e"
        );
        assert_eq!(SidConf::for_chain(5), SidConf::for_chain(1));
        assert_eq!(
            SidConf::for_chain(56).unwrap().registry.to_string(),
            "0x08CEd32a7f3eeC915Ba84415e9C07a7286977956"
        );
        assert_eq!(
            SidConf::for_chain(421_613).unwrap().registry.to_string(),
            "0x1f70fc8de5669eaa8C9ce72257c94500DC5ff2E4"
        );
        assert_eq!(
            SidConf::for_chain(42_161).unwrap().registry.to_string(),
            "0x4a067EE58e73ac5E4a43722E008DFdf65B2bF348"
        );
        assert_eq!(SidConf::for_chain(2), None);
    }
}
