//! Reading and writing the records of names.
//!
//! This module ties the pieces of the crate together into the API an
//! application works with. A [`Sid`] value combines a chain client with
//! the configuration of a deployment. Its [`name`][Sid::name] method
//! validates a name and returns a [`NameHandle`] through which the name's
//! records are read and written. Reverse resolution of addresses into
//! names lives on [`Sid`] directly.
//!
//! Record reads are forgiving and record writes are strict. A read that
//! runs into trouble at the resolver logs the fault and returns the
//! record's empty value, so one broken resolver does not take down a
//! batch of reads. A write reports every fault through [`WriteError`].

//--- Re-exports of the private modules

mod handle;
pub use self::handle::{Content, ContentKind, NameHandle, WriteError};

mod reverse;

mod sid;
pub use self::sid::Sid;
