//! A Rust SDK for blockchain name services.
//!
//! This crate provides the building blocks for working with a name
//! service of the ENS family as deployed by SPACE ID: validating and
//! normalizing names, turning them into the node hashes the contracts
//! are keyed by, discovering the resolver responsible for a name, and
//! translating the records a resolver stores between their binary chain
//! form and the text forms users work with.
//!
//! The crate never talks to a chain itself. All chain access goes through
//! a client the application injects, described by the traits of the
//! [resolver] module. Everything else is pure computation over bytes and
//! strings and can be used on its own.
//!
//! # Modules
//!
//! * [base] contains the fundamental types: addresses, hashes, coin
//!   types, interface identifiers, and the error types shared across the
//!   crate.
//! * [name] deals with names: validation, normalization, and the label
//!   and name hashes derived from them.
//! * [conf] carries the configuration of the registry deployments.
//! * [resolver] defines the chain access traits and the resolver
//!   discovery walk.
//! * [coins] translates address records between their binary form and
//!   the address text of their chain.
//! * [content] does the same for the self describing content hash
//!   records.
//! * [records] ties everything together into the API an application
//!   works with: read and write the records of a name, and resolve
//!   addresses back into names.
//! * [utils] provides the base encodings the record formats are built
//!   on.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Adds implementations of the [serde](https://serde.rs/)
//!   traits to the types of the [base] module.

#![allow(async_fn_in_trait)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod coins;
pub mod conf;
pub mod content;
pub mod name;
pub mod records;
pub mod resolver;
pub mod utils;
