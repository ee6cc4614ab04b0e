//! The traits connecting the crate to a chain.
//!
//! This is a private module. Its traits are re-exported by the parent
//! module.
//!
//! The crate does not talk to any network itself. Everything it needs from
//! the outside world is expressed through the traits here, one per
//! contract type. An implementation submits the corresponding contract
//! call through whatever transport it has and maps transport and contract
//! failures into [`TransportError`]. The `tests` directory contains an
//! in-memory implementation that serves as a reference.

use crate::base::{
    ChainAddress, InterfaceId, LabelHash, NodeHash, TransportError, TxHash,
};

//------------ RegistryOps ---------------------------------------------------

/// The operations of the registry contract.
///
/// The registry is the single contract that maps a node hash to its
/// owner, resolver, and TTL. Every method takes the address of the
/// registry deployment to use.
pub trait RegistryOps {
    /// Returns the resolver of a node, the zero address if unset.
    ///
    /// This is `resolver(bytes32)`.
    async fn resolver_of(
        &self,
        registry: ChainAddress,
        node: NodeHash,
    ) -> Result<ChainAddress, TransportError>;

    /// Returns the owner of a node, the zero address if unset.
    ///
    /// This is `owner(bytes32)`.
    async fn owner_of(
        &self,
        registry: ChainAddress,
        node: NodeHash,
    ) -> Result<ChainAddress, TransportError>;

    /// Returns the caching TTL of a node in seconds.
    ///
    /// This is `ttl(bytes32)`.
    async fn ttl_of(
        &self,
        registry: ChainAddress,
        node: NodeHash,
    ) -> Result<u64, TransportError>;

    /// Transfers a node to a new owner.
    ///
    /// This is `setOwner(bytes32,address)`.
    async fn set_owner(
        &self,
        registry: ChainAddress,
        node: NodeHash,
        owner: ChainAddress,
    ) -> Result<TxHash, TransportError>;

    /// Sets the resolver of a node.
    ///
    /// This is `setResolver(bytes32,address)`.
    async fn set_resolver(
        &self,
        registry: ChainAddress,
        node: NodeHash,
        resolver: ChainAddress,
    ) -> Result<TxHash, TransportError>;

    /// Gives a child of a node to an owner, creating it if necessary.
    ///
    /// This is `setSubnodeOwner(bytes32,bytes32,address)`.
    async fn set_subnode_owner(
        &self,
        registry: ChainAddress,
        node: NodeHash,
        label: LabelHash,
        owner: ChainAddress,
    ) -> Result<TxHash, TransportError>;

    /// Sets owner, resolver, and TTL of a child of a node in one call.
    ///
    /// This is `setSubnodeRecord(bytes32,bytes32,address,address,uint64)`.
    async fn set_subnode_record(
        &self,
        registry: ChainAddress,
        node: NodeHash,
        label: LabelHash,
        owner: ChainAddress,
        resolver: ChainAddress,
        ttl: u64,
    ) -> Result<TxHash, TransportError>;
}

//------------ ResolverOps ---------------------------------------------------

/// The operations of a resolver contract.
///
/// Resolvers hold the actual records of a name. Which records a given
/// resolver supports can be queried through [`supports_interface`] with
/// the identifiers from
/// [`InterfaceId`][crate::base::InterfaceId].
///
/// Record reads return the contract's notion of an absent value: the zero
/// address, empty bytes, or the empty string. They only fail if the call
/// itself fails.
///
/// [`supports_interface`]: Self::supports_interface
pub trait ResolverOps {
    /// Returns whether the resolver implements an interface.
    ///
    /// This is `supportsInterface(bytes4)` of ERC-165.
    async fn supports_interface(
        &self,
        resolver: ChainAddress,
        iface: InterfaceId,
    ) -> Result<bool, TransportError>;

    /// Returns the chain native address of a node.
    ///
    /// This is `addr(bytes32)`.
    async fn addr(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Result<ChainAddress, TransportError>;

    /// Returns the address record of a node under a coin record key.
    ///
    /// This is `addr(bytes32,uint256)`. The key is produced by
    /// [`CoinType::record_key`][crate::base::CoinType::record_key].
    async fn coin_addr(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: [u8; 32],
    ) -> Result<Vec<u8>, TransportError>;

    /// Returns the content hash record of a node.
    ///
    /// This is `contenthash(bytes32)`.
    async fn contenthash(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Result<Vec<u8>, TransportError>;

    /// Returns the content field of an early resolver.
    ///
    /// This is `content(bytes32)` which predates the content hash record
    /// and stores a bare 32 octet hash.
    async fn legacy_content(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Result<[u8; 32], TransportError>;

    /// Returns the text record of a node under a key.
    ///
    /// This is `text(bytes32,string)`.
    async fn text(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: &str,
    ) -> Result<String, TransportError>;

    /// Returns the name record of a node.
    ///
    /// This is `name(bytes32)`, used by reverse resolution.
    async fn name_record(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Result<String, TransportError>;

    /// Writes the address record of a node under a coin record key.
    ///
    /// This is `setAddr(bytes32,uint256,bytes)`. Empty data clears the
    /// record.
    async fn set_coin_addr(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: [u8; 32],
        data: &[u8],
    ) -> Result<TxHash, TransportError>;

    /// Writes the content hash record of a node.
    ///
    /// This is `setContenthash(bytes32,bytes)`.
    async fn set_contenthash(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        data: &[u8],
    ) -> Result<TxHash, TransportError>;

    /// Writes the text record of a node under a key.
    ///
    /// This is `setText(bytes32,string,string)`.
    async fn set_text(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: &str,
        value: &str,
    ) -> Result<TxHash, TransportError>;
}

//------------ ReverseRegistrarOps -------------------------------------------

/// The operations of the reverse registrar contract.
///
/// The reverse registrar owns the `addr.reverse` subtree and claims the
/// reverse node of the calling account on its behalf.
pub trait ReverseRegistrarOps {
    /// Declares a name as the primary name of the calling account.
    ///
    /// This is `setName(string)`.
    async fn set_name(
        &self,
        registrar: ChainAddress,
        name: &str,
    ) -> Result<TxHash, TransportError>;
}

//------------ ChainClient ---------------------------------------------------

/// A client that can talk to all three contract types.
///
/// This is implemented for anything that implements the three operation
/// traits.
pub trait ChainClient:
    RegistryOps + ResolverOps + ReverseRegistrarOps
{
}

impl<T: RegistryOps + ResolverOps + ReverseRegistrarOps> ChainClient for T {}
