//! Names and their hashes.
//!
//! This module provides everything needed to go from user supplied text to
//! the node hash used in contract calls.
//!
//! Main types: [`Name`], [`SearchTerm`].<br/>
//! Main functions: [`validate_name`], [`normalize`], [`namehash`],
//! [`labelhash`].
//!
//! A name is a dot separated sequence of labels with the most significant
//! label last, `space-id.bnb` say. Before a name can be used it has to be
//! checked and normalized, which is what [`validate_name`] does. The
//! checks weed out names that cannot be registered; normalization maps
//! each label through UTS 46 so that differently written forms of the
//! same name end up identical. The result is a [`Name`].
//!
//! Contracts never see the text of a name. [`namehash`] folds a name into
//! the single 32 octet [`NodeHash`][crate::base::NodeHash] that keys all
//! registry and resolver records, and [`labelhash`] produces the hash of a
//! single label used when creating subdomains. A label whose text is not
//! known can be written as its hash in square brackets; the functions in
//! this module accept this form everywhere.

pub use self::absolute::Name;
pub use self::hash::{labelhash, namehash};
pub use self::label::{
    decode_labelhash, encode_labelhash, is_encoded_labelhash,
};
pub use self::validate::{
    is_label_valid, normalize, parse_search_term, validate_name,
    InvalidNameError, SearchTerm,
};

mod absolute;
mod hash;
mod label;
mod validate;

pub(crate) use self::hash::node_of_normalized;
