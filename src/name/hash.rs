//! Hashing names.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use sha3::{Digest, Keccak256};
use crate::base::{LabelHash, NodeHash};
use super::label;
use super::validate::{normalize_label, InvalidNameError};

//------------ Functions -----------------------------------------------------

/// Returns the hash of a single label.
///
/// The label is normalized first. A label that is an encoded label hash
/// contributes its decoded hash instead.
pub fn labelhash(label: &str) -> Result<LabelHash, InvalidNameError> {
    if label::is_encoded_labelhash(label) {
        if let Ok(hash) = label::decode_labelhash(label) {
            return Ok(hash);
        }
    }
    let normalized = normalize_label(label)?;
    Ok(LabelHash::from_octets(keccak256(normalized.as_bytes())))
}

/// Returns the node hash of a name.
///
/// The empty name hashes to [`NodeHash::ROOT`]. Any other name is hashed
/// label by label from the right: each label turns the hash `h` so far
/// into `keccak256(h || labelhash(label))`.
pub fn namehash(name: &str) -> Result<NodeHash, InvalidNameError> {
    let mut node = NodeHash::ROOT;
    if name.is_empty() {
        return Ok(node);
    }
    for label in name.rsplit('.') {
        node = fold(node, labelhash(label)?);
    }
    Ok(node)
}

/// Returns the node hash of a name that is already normalized.
///
/// Unlike [`namehash`] this never fails. It is used for names that were
/// normalized before and for the synthetic names of reverse resolution.
pub(crate) fn node_of_normalized(name: &str) -> NodeHash {
    let mut node = NodeHash::ROOT;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let hash = if label::is_encoded_labelhash(label) {
            match label::decode_labelhash(label) {
                Ok(hash) => hash,
                Err(_) => raw_labelhash(label),
            }
        } else {
            raw_labelhash(label)
        };
        node = fold(node, hash);
    }
    node
}

fn raw_labelhash(label: &str) -> LabelHash {
    LabelHash::from_octets(keccak256(label.as_bytes()))
}

fn fold(node: NodeHash, label: LabelHash) -> NodeHash {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(node.as_slice());
    data[32..].copy_from_slice(label.as_slice());
    NodeHash::from_octets(keccak256(&data))
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    const ETH_NODE: &str =
        "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae";
    const FOO_ETH_NODE: &str =
        "0xde9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f";
    const ETH_LABEL: &str =
        "0x4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0";

    #[test]
    fn known_hashes() {
        assert_eq!(namehash("").unwrap(), NodeHash::ROOT);
        assert_eq!(
            namehash("eth").unwrap(),
            ETH_NODE.parse().unwrap()
        );
        assert_eq!(
            namehash("foo.eth").unwrap(),
            FOO_ETH_NODE.parse().unwrap()
        );
        assert_eq!(
            labelhash("eth").unwrap(),
            ETH_LABEL.parse().unwrap()
        );
    }

    #[test]
    fn case_folding() {
        assert_eq!(
            namehash("FOO.eth").unwrap(),
            namehash("foo.eth").unwrap()
        );
    }

    #[test]
    fn parent_recurrence() {
        let parent = namehash("bnb").unwrap();
        let label = labelhash("space-id").unwrap();
        assert_eq!(
            namehash("space-id.bnb").unwrap(),
            fold(parent, label)
        );
    }

    #[test]
    fn encoded_label() {
        let label = labelhash("foo").unwrap();
        let encoded = label::encode_labelhash(label);
        assert_eq!(
            namehash(&format!("{}.eth", encoded)).unwrap(),
            namehash("foo.eth").unwrap()
        );
    }

    #[test]
    fn normalized_matches() {
        for name in ["", "eth", "foo.eth", "space-id.bnb", "addr.reverse"] {
            assert_eq!(
                node_of_normalized(name),
                namehash(name).unwrap()
            );
        }
    }

    #[test]
    fn rejects_bad_labels() {
        assert!(namehash("spa ce.eth").is_err());
        assert!(labelhash("spa ce").is_err());
    }
}
