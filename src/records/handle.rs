//! Handles for the records of a single name.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::fmt;
use std::error;
use futures_util::future::try_join;
use tracing::warn;
use crate::base::coin::CoinType;
use crate::base::iface::InterfaceId;
use crate::base::{
    ChainAddress, EncodeError, NodeHash, TransportError, TxHash,
};
use crate::content;
use crate::name::{labelhash, InvalidNameError, Name};
use crate::resolver::{locate_resolver, ChainClient};
use super::sid::Sid;

//------------ NameHandle ----------------------------------------------------

/// Access to the records of a single name.
///
/// A handle is created through [`Sid::name`] and borrows the service value
/// it came from. It keeps the name and its node hash and, unless a
/// resolver was pinned through [`Sid::name_with_resolver`], discovers the
/// resolver anew for every record operation.
///
/// Read operations are forgiving: a fault while talking to the resolver
/// is logged and turns into the operation's empty value. Write operations
/// are strict and report every fault through [`WriteError`].
pub struct NameHandle<'a, C> {
    /// The service value the handle came from.
    sid: &'a Sid<C>,

    /// The name the handle works on.
    name: Name,

    /// The node hash of the name.
    node: NodeHash,

    /// The pinned resolver, if any.
    resolver: Option<ChainAddress>,
}

impl<'a, C> NameHandle<'a, C> {
    /// Creates a new handle.
    pub(super) fn new(
        sid: &'a Sid<C>,
        name: Name,
        resolver: Option<ChainAddress>,
    ) -> Self {
        let node = name.node();
        NameHandle {
            sid,
            name,
            node,
            resolver,
        }
    }

    /// Returns the name the handle works on.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Converts the handle into its name.
    pub fn into_name(self) -> Name {
        self.name
    }

    /// Returns the node hash of the name.
    pub fn node(&self) -> NodeHash {
        self.node
    }

    /// Returns the registry the handle works against.
    fn registry(&self) -> ChainAddress {
        self.sid.conf.registry
    }
}

/// # Registry Operations
///
impl<'a, C: ChainClient> NameHandle<'a, C> {
    /// Returns the owner of the name.
    pub async fn owner(&self) -> Result<ChainAddress, TransportError> {
        self.sid.client.owner_of(self.registry(), self.node).await
    }

    /// Transfers the name to a new owner.
    pub async fn set_owner(
        &self,
        owner: ChainAddress,
    ) -> Result<TxHash, TransportError> {
        self.sid
            .client
            .set_owner(self.registry(), self.node, owner)
            .await
    }

    /// Returns the caching TTL of the name in seconds.
    pub async fn ttl(&self) -> Result<u64, TransportError> {
        self.sid.client.ttl_of(self.registry(), self.node).await
    }

    /// Discovers the resolver responsible for the name.
    ///
    /// See [`locate_resolver`] for the rules the search follows. A pinned
    /// resolver is ignored here; use
    /// [`resolver_addr`][Self::resolver_addr] to honor it.
    pub async fn resolver(&self) -> Result<ChainAddress, TransportError> {
        locate_resolver(&self.sid.client, self.registry(), &self.name).await
    }

    /// Sets the resolver of the name.
    pub async fn set_resolver(
        &self,
        resolver: ChainAddress,
    ) -> Result<TxHash, TransportError> {
        self.sid
            .client
            .set_resolver(self.registry(), self.node, resolver)
            .await
    }

    /// Returns the resolver to use for record operations.
    ///
    /// This is the pinned resolver if there is one and the discovered
    /// resolver otherwise.
    pub async fn resolver_addr(
        &self,
    ) -> Result<ChainAddress, TransportError> {
        match self.resolver {
            Some(resolver) => Ok(resolver),
            None => self.resolver().await,
        }
    }

    /// Gives a direct child of the name to an owner.
    ///
    /// The child is created if it does not exist yet.
    pub async fn set_subnode_owner(
        &self,
        label: &str,
        owner: ChainAddress,
    ) -> Result<TxHash, WriteError> {
        let label = labelhash(label)?;
        self.sid
            .client
            .set_subnode_owner(self.registry(), self.node, label, owner)
            .await
            .map_err(Into::into)
    }

    /// Sets owner, resolver, and TTL of a direct child in one call.
    ///
    /// The child is created if it does not exist yet.
    pub async fn set_subnode_record(
        &self,
        label: &str,
        owner: ChainAddress,
        resolver: ChainAddress,
        ttl: u64,
    ) -> Result<TxHash, WriteError> {
        let label = labelhash(label)?;
        self.sid
            .client
            .set_subnode_record(
                self.registry(),
                self.node,
                label,
                owner,
                resolver,
                ttl,
            )
            .await
            .map_err(Into::into)
    }

    /// Creates a direct child of the name.
    ///
    /// The child starts out with the name's own owner and discovered
    /// resolver. The two lookups run concurrently.
    pub async fn create_subdomain(
        &self,
        label: &str,
    ) -> Result<TxHash, WriteError> {
        let (resolver, owner) =
            try_join(self.resolver(), self.owner()).await?;
        self.set_subnode_record(label, owner, resolver, 0).await
    }

    /// Deletes a direct child of the name.
    ///
    /// Owner and resolver of the child are set to the zero address.
    pub async fn delete_subdomain(
        &self,
        label: &str,
    ) -> Result<TxHash, WriteError> {
        self.set_subnode_record(
            label,
            ChainAddress::ZERO,
            ChainAddress::ZERO,
            0,
        )
        .await
    }
}

/// # Resolver Records
///
impl<'a, C: ChainClient> NameHandle<'a, C> {
    /// Returns the chain native address record of the name.
    ///
    /// Returns the zero address if the name has no resolver or no such
    /// record. A fault while reading from the resolver is logged and also
    /// produces the zero address; only a fault during resolver discovery
    /// is reported.
    pub async fn address(&self) -> Result<ChainAddress, TransportError> {
        let resolver = self.resolver_addr().await?;
        if resolver.is_zero() {
            return Ok(ChainAddress::ZERO);
        }
        match self.sid.client.addr(resolver, self.node).await {
            Ok(addr) => Ok(addr),
            Err(err) => {
                warn!(
                    error = %err,
                    "Error getting addr on the resolver contract, are you \
                     sure the resolver address is a resolver contract?"
                );
                Ok(ChainAddress::ZERO)
            }
        }
    }

    /// Returns the address record of the name for a coin type as text.
    ///
    /// Returns the display form of the zero address if the name has no
    /// resolver, the record is empty, or reading or decoding the record
    /// fails. Only a fault during resolver discovery is reported.
    pub async fn coin_address(
        &self,
        coin: CoinType,
    ) -> Result<String, TransportError> {
        let resolver = self.resolver_addr().await?;
        if resolver.is_zero() {
            return Ok(ChainAddress::ZERO.to_string());
        }
        let data = match self
            .sid
            .client
            .coin_addr(resolver, self.node, coin.record_key())
            .await
        {
            Ok(data) => data,
            Err(err) => {
                warn!(
                    error = %err,
                    "Error getting addr on the resolver contract, are you \
                     sure the resolver address is a resolver contract?"
                );
                return Ok(ChainAddress::ZERO.to_string());
            }
        };
        if data.is_empty() {
            return Ok(ChainAddress::ZERO.to_string());
        }
        match self.sid.coins.decode(coin, &data) {
            Ok(addr) => Ok(addr),
            Err(err) => {
                warn!(
                    error = %err,
                    "Error getting addr on the resolver contract, are you \
                     sure the resolver address is a resolver contract?"
                );
                Ok(ChainAddress::ZERO.to_string())
            }
        }
    }

    /// Writes the address record of the name for a coin type.
    ///
    /// An empty address clears the record. Anything else must be a valid
    /// address for the coin type.
    pub async fn set_coin_address(
        &self,
        coin: CoinType,
        addr: &str,
    ) -> Result<TxHash, WriteError> {
        let resolver = self.write_resolver().await?;
        let data = if addr.is_empty() {
            Vec::new()
        } else {
            self.sid.coins.encode(coin, addr)?
        };
        self.sid
            .client
            .set_coin_addr(resolver, self.node, coin.record_key(), &data)
            .await
            .map_err(Into::into)
    }

    /// Returns the content record of the name.
    ///
    /// The returned [`Content`] carries the kind of value that was found.
    /// Current resolvers store a self describing content hash which comes
    /// back in URI form. Resolvers that predate the content hash record
    /// fall back to their plain content field. A fault while talking to
    /// the resolver produces a value of kind [`ContentKind::Error`] with
    /// a description as the value.
    pub async fn content(&self) -> Result<Content, TransportError> {
        let resolver = self.resolver_addr().await?;
        if resolver.is_zero() {
            return Ok(Content::content_hash(
                ChainAddress::ZERO.to_string(),
            ));
        }
        Ok(self.content_with_resolver(resolver).await)
    }

    /// Reads the content record through a known resolver.
    async fn content_with_resolver(
        &self,
        resolver: ChainAddress,
    ) -> Content {
        let supported = match self
            .sid
            .client
            .supports_interface(resolver, InterfaceId::CONTENT_HASH)
            .await
        {
            Ok(supported) => supported,
            Err(err) => return Content::fault(&err),
        };
        if supported {
            let data = match self
                .sid
                .client
                .contenthash(resolver, self.node)
                .await
            {
                Ok(data) => data,
                Err(err) => return Content::fault(&err),
            };
            let decoded = content::decode(&data);
            match decoded.error {
                Some(err) => {
                    warn!(error = %err, "error decoding");
                    Content::content_hash(ChainAddress::ZERO.to_string())
                }
                None => Content::content_hash(decoded.to_string()),
            }
        } else {
            match self.sid.client.legacy_content(resolver, self.node).await
            {
                Ok(data) => Content {
                    value: format!("0x{}", hex::encode(data)),
                    kind: ContentKind::Legacy,
                },
                Err(err) => Content::fault(&err),
            }
        }
    }

    /// Writes the content record of the name.
    ///
    /// The value is normally a URI understood by
    /// [`content::encode`][crate::content::encode]. A hex value of zero
    /// is submitted as is, which clears the record.
    pub async fn set_contenthash(
        &self,
        value: &str,
    ) -> Result<TxHash, WriteError> {
        let resolver = self.write_resolver().await?;
        let data = match cleared_value(value) {
            Some(data) => data,
            None => content::encode(value)?,
        };
        self.sid
            .client
            .set_contenthash(resolver, self.node, &data)
            .await
            .map_err(Into::into)
    }

    /// Returns the text record of the name under a key.
    ///
    /// Returns the empty string if the name has no resolver or a fault
    /// happens while reading. Only a fault during resolver discovery is
    /// reported.
    pub async fn text(&self, key: &str) -> Result<String, TransportError> {
        let resolver = self.resolver_addr().await?;
        if resolver.is_zero() {
            return Ok(String::new());
        }
        match self.sid.client.text(resolver, self.node, key).await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(
                    error = %err,
                    "Error getting text record on the resolver contract, \
                     are you sure the resolver address is a resolver \
                     contract?"
                );
                Ok(String::new())
            }
        }
    }

    /// Writes the text record of the name under a key.
    pub async fn set_text(
        &self,
        key: &str,
        value: &str,
    ) -> Result<TxHash, WriteError> {
        let resolver = self.write_resolver().await?;
        self.sid
            .client
            .set_text(resolver, self.node, key, value)
            .await
            .map_err(Into::into)
    }

    /// Returns the resolver for a write operation.
    async fn write_resolver(&self) -> Result<ChainAddress, WriteError> {
        let resolver = self.resolver_addr().await?;
        if resolver.is_zero() {
            return Err(WriteError::NoResolver);
        }
        Ok(resolver)
    }
}

//------------ Content -------------------------------------------------------

/// The content record of a name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Content {
    /// The value of the record.
    pub value: String,

    /// What sort of value it is.
    pub kind: ContentKind,
}

impl Content {
    /// Creates a content hash value.
    fn content_hash(value: String) -> Self {
        Content {
            value,
            kind: ContentKind::ContentHash,
        }
    }

    /// Creates the value for a resolver fault, logging the fault.
    fn fault(err: &TransportError) -> Self {
        const MESSAGE: &str =
            "Error getting content on the resolver contract, are you sure \
             the resolver address is a resolver contract?";
        warn!(error = %err, "{}", MESSAGE);
        Content {
            value: MESSAGE.into(),
            kind: ContentKind::Error,
        }
    }
}

//------------ ContentKind ---------------------------------------------------

/// What sort of value a content read produced.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContentKind {
    /// A content hash in URI form.
    ContentHash,

    /// The plain content field of an early resolver.
    Legacy,

    /// A description of a fault stands in for the value.
    Error,
}

//--- Display

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ContentKind::ContentHash => "contenthash",
            ContentKind::Legacy => "oldcontent",
            ContentKind::Error => "error",
        })
    }
}

//------------ WriteError ----------------------------------------------------

/// A record write could not be carried out.
#[derive(Debug)]
pub enum WriteError {
    /// The name has no resolver to write the record through.
    NoResolver,

    /// A name or label was not acceptable.
    Name(InvalidNameError),

    /// The value could not be encoded into record data.
    Encode(EncodeError),

    /// The chain transport reported a fault.
    Transport(TransportError),
}

//--- From

impl From<InvalidNameError> for WriteError {
    fn from(err: InvalidNameError) -> Self {
        WriteError::Name(err)
    }
}

impl From<EncodeError> for WriteError {
    fn from(err: EncodeError) -> Self {
        WriteError::Encode(err)
    }
}

impl From<TransportError> for WriteError {
    fn from(err: TransportError) -> Self {
        WriteError::Transport(err)
    }
}

//--- Display and Error

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WriteError::NoResolver => {
                f.write_str("name does not have a resolver")
            }
            WriteError::Name(ref err) => err.fmt(f),
            WriteError::Encode(ref err) => err.fmt(f),
            WriteError::Transport(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for WriteError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            WriteError::NoResolver => None,
            WriteError::Name(ref err) => Some(err),
            WriteError::Encode(ref err) => Some(err),
            WriteError::Transport(ref err) => Some(err),
        }
    }
}

//------------ Helper Functions ----------------------------------------------

/// Returns the record data for a content value that clears the record.
///
/// A value of hex digits that amount to zero clears the record and is
/// submitted without encoding.
fn cleared_value(value: &str) -> Option<Vec<u8>> {
    let digits = value.strip_prefix("0x")?;
    if digits.is_empty() || !digits.bytes().all(|ch| ch == b'0') {
        return None;
    }
    Some(vec![0; digits.len() / 2])
}

//============ Test ==========================================================
