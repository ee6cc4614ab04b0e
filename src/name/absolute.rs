//! The normalized name.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use core::{fmt, str};
use crate::base::NodeHash;
use super::hash::node_of_normalized;
use super::label::is_encoded_labelhash;
use super::validate::{validate_name, InvalidNameError};

//------------ Name ----------------------------------------------------------

/// A name that passed validation.
///
/// A name is a sequence of labels separated by dots, read with the most
/// significant label last. The type holds the name in normalized text
/// form, so two values compare equal exactly if they refer to the same
/// node. The empty name at the root of the hierarchy is the value
/// returned by [`Name::root`].
///
/// The only way to create a name from arbitrary text is through
/// [`validate_name`][super::validate_name], conveniently available via
/// `FromStr`:
///
/// ```
/// use sid::name::Name;
///
/// let name: Name = "SPACE-ID.bnb".parse().unwrap();
/// assert_eq!(name.as_str(), "space-id.bnb");
/// assert!("spa ce.bnb".parse::<Name>().is_err());
/// ```
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Name {
    /// The name in normalized dotted form, empty for the root.
    name: String,
}

impl Name {
    /// Creates the empty name at the root of the hierarchy.
    #[must_use]
    pub fn root() -> Self {
        Name {
            name: String::new(),
        }
    }

    /// Creates a name from a string already in normalized form.
    pub(super) fn from_normalized(name: String) -> Self {
        Name { name }
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns whether this is the empty name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns the number of labels of the name.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.iter_labels().count()
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// For the root this is an empty iterator.
    pub fn iter_labels(&self) -> impl Iterator<Item = &str> {
        self.name.split('.').filter(|label| !label.is_empty())
    }

    /// Returns the first, least significant label of the name.
    #[must_use]
    pub fn first_label(&self) -> Option<&str> {
        self.iter_labels().next()
    }

    /// Returns the final, most significant label of the name.
    #[must_use]
    pub fn tld(&self) -> Option<&str> {
        self.iter_labels().last()
    }

    /// Returns the name with the first label removed.
    ///
    /// For a name of one label this is the root. For the root itself
    /// there is no parent and `None` is returned.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.name.split_once('.') {
            Some((_, parent)) => Some(Name {
                name: parent.to_string(),
            }),
            None => Some(Self::root()),
        }
    }

    /// Returns whether any label of the name is an encoded label hash.
    #[must_use]
    pub fn has_encoded_labels(&self) -> bool {
        self.iter_labels().any(is_encoded_labelhash)
    }

    /// Returns the node hash of the name.
    #[must_use]
    pub fn node(&self) -> NodeHash {
        node_of_normalized(&self.name)
    }
}

//--- FromStr

impl str::FromStr for Name {
    type Err = InvalidNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_name(s)
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self.name)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Name;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a valid name")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::name::namehash;

    #[test]
    fn labels() {
        let name: Name = "sub.space-id.eth".parse().unwrap();
        assert_eq!(name.label_count(), 3);
        assert_eq!(name.first_label(), Some("sub"));
        assert_eq!(name.tld(), Some("eth"));
        assert_eq!(
            name.iter_labels().collect::<Vec<_>>(),
            ["sub", "space-id", "eth"]
        );
    }

    #[test]
    fn parents() {
        let name: Name = "sub.space-id.eth".parse().unwrap();
        let parent = name.parent().unwrap();
        assert_eq!(parent.as_str(), "space-id.eth");
        let tld = parent.parent().unwrap();
        assert_eq!(tld.as_str(), "eth");
        let root = tld.parent().unwrap();
        assert!(root.is_root());
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn root() {
        let root = Name::root();
        assert!(root.is_root());
        assert_eq!(root.label_count(), 0);
        assert_eq!(root.first_label(), None);
        assert_eq!(root.tld(), None);
        assert_eq!(root.node(), NodeHash::ROOT);
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn node() {
        let name: Name = "space-id.bnb".parse().unwrap();
        assert_eq!(name.node(), namehash("space-id.bnb").unwrap());
    }

    #[test]
    fn normalizes() {
        let name: Name = "SPACE-ID.bnb".parse().unwrap();
        assert_eq!(name.to_string(), "space-id.bnb");
        assert_eq!(
            name,
            "space-id.bnb".parse::<Name>().unwrap()
        );
    }

    #[test]
    fn encoded_labels() {
        let name: Name = "space-id.bnb".parse().unwrap();
        assert!(!name.has_encoded_labels());
        let bracket = format!("[{}].eth", "0".repeat(64));
        let name: Name = bracket.parse().unwrap();
        assert!(name.has_encoded_labels());
    }
}
