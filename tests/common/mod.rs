//! An in-memory chain backing the record operation tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use sid::base::{
    ChainAddress, InterfaceId, LabelHash, NodeHash, TransportError, TxHash,
};
use sid::resolver::{RegistryOps, ResolverOps, ReverseRegistrarOps};

//------------ MockChain -----------------------------------------------------

/// A chain client backed by in-memory tables.
///
/// The mock holds one registry at a fixed address plus the records of any
/// number of resolver contracts, keyed by their address. Tests populate
/// the tables up front, run an operation, and inspect what it read or
/// wrote. Resolvers listed as broken fail every call the way a contract
/// at a non-resolver address would.
pub struct MockChain {
    /// The address the registry is expected at.
    registry: ChainAddress,

    /// The mutable chain state.
    state: Mutex<State>,
}

/// The tables of the mock chain.
#[derive(Default)]
struct State {
    /// The resolver column of the registry.
    resolvers: HashMap<NodeHash, ChainAddress>,

    /// The owner column of the registry.
    owners: HashMap<NodeHash, ChainAddress>,

    /// The TTL column of the registry.
    ttls: HashMap<NodeHash, u64>,

    /// The subnode updates that were submitted, by parent and label.
    ///
    /// The value is the owner, resolver, and TTL of the last update.
    subnodes: HashMap<(NodeHash, LabelHash), (ChainAddress, ChainAddress, u64)>,

    /// The `addr(bytes32)` records of the resolvers.
    addrs: HashMap<(ChainAddress, NodeHash), ChainAddress>,

    /// The `addr(bytes32,uint256)` records of the resolvers.
    coin_records: HashMap<(ChainAddress, NodeHash, [u8; 32]), Vec<u8>>,

    /// The `contenthash(bytes32)` records of the resolvers.
    contenthashes: HashMap<(ChainAddress, NodeHash), Vec<u8>>,

    /// The `content(bytes32)` fields of the early resolvers.
    legacy_content: HashMap<(ChainAddress, NodeHash), [u8; 32]>,

    /// The `text(bytes32,string)` records of the resolvers.
    texts: HashMap<(ChainAddress, NodeHash, String), String>,

    /// The `name(bytes32)` records of the resolvers.
    names: HashMap<(ChainAddress, NodeHash), String>,

    /// The resolvers that advertise wildcard resolution.
    wildcard: HashSet<ChainAddress>,

    /// The resolvers that advertise the content hash record.
    contenthash_support: HashSet<ChainAddress>,

    /// The resolver addresses whose calls all fail.
    broken: HashSet<ChainAddress>,

    /// The nodes for which the registry itself fails.
    broken_nodes: HashSet<NodeHash>,

    /// The names submitted to the reverse registrar, with its address.
    submitted_names: Vec<(ChainAddress, String)>,

    /// The number of transactions submitted so far.
    txes: u64,
}

impl MockChain {
    /// Creates a mock serving a registry at the given address.
    pub fn new(registry: ChainAddress) -> Self {
        MockChain {
            registry,
            state: Mutex::new(State::default()),
        }
    }

    /// Registers owner and resolver of a node.
    pub fn provide_node(
        &self,
        node: NodeHash,
        owner: ChainAddress,
        resolver: ChainAddress,
    ) {
        let mut state = self.state.lock().unwrap();
        state.owners.insert(node, owner);
        state.resolvers.insert(node, resolver);
    }

    /// Sets the TTL of a node.
    pub fn provide_ttl(&self, node: NodeHash, ttl: u64) {
        self.state.lock().unwrap().ttls.insert(node, ttl);
    }

    /// Marks a resolver as advertising wildcard resolution.
    pub fn provide_wildcard(&self, resolver: ChainAddress) {
        self.state.lock().unwrap().wildcard.insert(resolver);
    }

    /// Marks a resolver as advertising the content hash record.
    pub fn provide_contenthash_support(&self, resolver: ChainAddress) {
        self.state
            .lock()
            .unwrap()
            .contenthash_support
            .insert(resolver);
    }

    /// Makes every call to a resolver fail.
    pub fn break_resolver(&self, resolver: ChainAddress) {
        self.state.lock().unwrap().broken.insert(resolver);
    }

    /// Makes every registry call for a node fail.
    pub fn break_node(&self, node: NodeHash) {
        self.state.lock().unwrap().broken_nodes.insert(node);
    }

    /// Stores the `addr` record of a node on a resolver.
    pub fn provide_addr(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        addr: ChainAddress,
    ) {
        self.state
            .lock()
            .unwrap()
            .addrs
            .insert((resolver, node), addr);
    }

    /// Stores a coin address record of a node on a resolver.
    pub fn provide_coin_record(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: [u8; 32],
        data: Vec<u8>,
    ) {
        self.state
            .lock()
            .unwrap()
            .coin_records
            .insert((resolver, node, key), data);
    }

    /// Stores the content hash record of a node on a resolver.
    pub fn provide_contenthash(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        data: Vec<u8>,
    ) {
        self.state
            .lock()
            .unwrap()
            .contenthashes
            .insert((resolver, node), data);
    }

    /// Stores the legacy content field of a node on a resolver.
    pub fn provide_legacy_content(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        data: [u8; 32],
    ) {
        self.state
            .lock()
            .unwrap()
            .legacy_content
            .insert((resolver, node), data);
    }

    /// Stores a text record of a node on a resolver.
    pub fn provide_text(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: &str,
        value: &str,
    ) {
        self.state
            .lock()
            .unwrap()
            .texts
            .insert((resolver, node, key.into()), value.into());
    }

    /// Stores the name record of a node on a resolver.
    pub fn provide_name(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        name: &str,
    ) {
        self.state
            .lock()
            .unwrap()
            .names
            .insert((resolver, node), name.into());
    }

    /// Returns the resolver column of a node.
    pub fn resolver_entry(&self, node: NodeHash) -> Option<ChainAddress> {
        self.state.lock().unwrap().resolvers.get(&node).copied()
    }

    /// Returns the owner column of a node.
    pub fn owner_entry(&self, node: NodeHash) -> Option<ChainAddress> {
        self.state.lock().unwrap().owners.get(&node).copied()
    }

    /// Returns the last subnode update under a parent and label.
    pub fn subnode_entry(
        &self,
        node: NodeHash,
        label: LabelHash,
    ) -> Option<(ChainAddress, ChainAddress, u64)> {
        self.state
            .lock()
            .unwrap()
            .subnodes
            .get(&(node, label))
            .copied()
    }

    /// Returns a coin address record of a node on a resolver.
    pub fn coin_record_entry(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: [u8; 32],
    ) -> Option<Vec<u8>> {
        self.state
            .lock()
            .unwrap()
            .coin_records
            .get(&(resolver, node, key))
            .cloned()
    }

    /// Returns the content hash record of a node on a resolver.
    pub fn contenthash_entry(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Option<Vec<u8>> {
        self.state
            .lock()
            .unwrap()
            .contenthashes
            .get(&(resolver, node))
            .cloned()
    }

    /// Returns a text record of a node on a resolver.
    pub fn text_entry(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: &str,
    ) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .texts
            .get(&(resolver, node, key.into()))
            .cloned()
    }

    /// Returns the names submitted to the reverse registrar.
    pub fn submitted_names(&self) -> Vec<(ChainAddress, String)> {
        self.state.lock().unwrap().submitted_names.clone()
    }

    /// Returns the number of transactions submitted so far.
    pub fn tx_count(&self) -> u64 {
        self.state.lock().unwrap().txes
    }

    /// Checks that a call went to the right registry.
    fn check_registry(
        &self,
        registry: ChainAddress,
        node: NodeHash,
    ) -> Result<(), TransportError> {
        assert_eq!(registry, self.registry);
        if self.state.lock().unwrap().broken_nodes.contains(&node) {
            return Err(fault());
        }
        Ok(())
    }

    /// Checks that a resolver call can go ahead.
    fn check_resolver(
        &self,
        resolver: ChainAddress,
    ) -> Result<(), TransportError> {
        if self.state.lock().unwrap().broken.contains(&resolver) {
            return Err(fault());
        }
        Ok(())
    }

    /// Submits a transaction.
    fn submit(&self) -> TxHash {
        let mut state = self.state.lock().unwrap();
        state.txes += 1;
        let mut octets = [0u8; 32];
        octets[24..].copy_from_slice(&state.txes.to_be_bytes());
        TxHash::from_octets(octets)
    }
}

//--- RegistryOps

impl RegistryOps for MockChain {
    async fn resolver_of(
        &self,
        registry: ChainAddress,
        node: NodeHash,
    ) -> Result<ChainAddress, TransportError> {
        self.check_registry(registry, node)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .resolvers
            .get(&node)
            .copied()
            .unwrap_or(ChainAddress::ZERO))
    }

    async fn owner_of(
        &self,
        registry: ChainAddress,
        node: NodeHash,
    ) -> Result<ChainAddress, TransportError> {
        self.check_registry(registry, node)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .owners
            .get(&node)
            .copied()
            .unwrap_or(ChainAddress::ZERO))
    }

    async fn ttl_of(
        &self,
        registry: ChainAddress,
        node: NodeHash,
    ) -> Result<u64, TransportError> {
        self.check_registry(registry, node)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .ttls
            .get(&node)
            .copied()
            .unwrap_or(0))
    }

    async fn set_owner(
        &self,
        registry: ChainAddress,
        node: NodeHash,
        owner: ChainAddress,
    ) -> Result<TxHash, TransportError> {
        self.check_registry(registry, node)?;
        self.state.lock().unwrap().owners.insert(node, owner);
        Ok(self.submit())
    }

    async fn set_resolver(
        &self,
        registry: ChainAddress,
        node: NodeHash,
        resolver: ChainAddress,
    ) -> Result<TxHash, TransportError> {
        self.check_registry(registry, node)?;
        self.state.lock().unwrap().resolvers.insert(node, resolver);
        Ok(self.submit())
    }

    async fn set_subnode_owner(
        &self,
        registry: ChainAddress,
        node: NodeHash,
        label: LabelHash,
        owner: ChainAddress,
    ) -> Result<TxHash, TransportError> {
        self.check_registry(registry, node)?;
        self.state
            .lock()
            .unwrap()
            .subnodes
            .insert((node, label), (owner, ChainAddress::ZERO, 0));
        Ok(self.submit())
    }

    async fn set_subnode_record(
        &self,
        registry: ChainAddress,
        node: NodeHash,
        label: LabelHash,
        owner: ChainAddress,
        resolver: ChainAddress,
        ttl: u64,
    ) -> Result<TxHash, TransportError> {
        self.check_registry(registry, node)?;
        self.state
            .lock()
            .unwrap()
            .subnodes
            .insert((node, label), (owner, resolver, ttl));
        Ok(self.submit())
    }
}

//--- ResolverOps

impl ResolverOps for MockChain {
    async fn supports_interface(
        &self,
        resolver: ChainAddress,
        iface: InterfaceId,
    ) -> Result<bool, TransportError> {
        self.check_resolver(resolver)?;
        let state = self.state.lock().unwrap();
        Ok(match iface {
            InterfaceId::WILDCARD => state.wildcard.contains(&resolver),
            InterfaceId::CONTENT_HASH => {
                state.contenthash_support.contains(&resolver)
            }
            _ => false,
        })
    }

    async fn addr(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Result<ChainAddress, TransportError> {
        self.check_resolver(resolver)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .addrs
            .get(&(resolver, node))
            .copied()
            .unwrap_or(ChainAddress::ZERO))
    }

    async fn coin_addr(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: [u8; 32],
    ) -> Result<Vec<u8>, TransportError> {
        self.check_resolver(resolver)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .coin_records
            .get(&(resolver, node, key))
            .cloned()
            .unwrap_or_default())
    }

    async fn contenthash(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Result<Vec<u8>, TransportError> {
        self.check_resolver(resolver)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .contenthashes
            .get(&(resolver, node))
            .cloned()
            .unwrap_or_default())
    }

    async fn legacy_content(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Result<[u8; 32], TransportError> {
        self.check_resolver(resolver)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .legacy_content
            .get(&(resolver, node))
            .copied()
            .unwrap_or([0; 32]))
    }

    async fn text(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: &str,
    ) -> Result<String, TransportError> {
        self.check_resolver(resolver)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .texts
            .get(&(resolver, node, key.into()))
            .cloned()
            .unwrap_or_default())
    }

    async fn name_record(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
    ) -> Result<String, TransportError> {
        self.check_resolver(resolver)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .names
            .get(&(resolver, node))
            .cloned()
            .unwrap_or_default())
    }

    async fn set_coin_addr(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: [u8; 32],
        data: &[u8],
    ) -> Result<TxHash, TransportError> {
        self.check_resolver(resolver)?;
        self.state
            .lock()
            .unwrap()
            .coin_records
            .insert((resolver, node, key), data.to_vec());
        Ok(self.submit())
    }

    async fn set_contenthash(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        data: &[u8],
    ) -> Result<TxHash, TransportError> {
        self.check_resolver(resolver)?;
        self.state
            .lock()
            .unwrap()
            .contenthashes
            .insert((resolver, node), data.to_vec());
        Ok(self.submit())
    }

    async fn set_text(
        &self,
        resolver: ChainAddress,
        node: NodeHash,
        key: &str,
        value: &str,
    ) -> Result<TxHash, TransportError> {
        self.check_resolver(resolver)?;
        self.state
            .lock()
            .unwrap()
            .texts
            .insert((resolver, node, key.into()), value.into());
        Ok(self.submit())
    }
}

//--- ReverseRegistrarOps

impl ReverseRegistrarOps for MockChain {
    async fn set_name(
        &self,
        registrar: ChainAddress,
        name: &str,
    ) -> Result<TxHash, TransportError> {
        self.state
            .lock()
            .unwrap()
            .submitted_names
            .push((registrar, name.into()));
        Ok(self.submit())
    }
}

//------------ Helper Functions ----------------------------------------------

/// Returns an address with a recognizable tag in its last octet.
pub fn tagged_addr(tag: u8) -> ChainAddress {
    let mut octets = [0u8; 20];
    octets[19] = tag;
    ChainAddress::from_octets(octets)
}

/// Returns the error every broken contract produces.
fn fault() -> TransportError {
    TransportError::message("call reverted")
}
