//! The resolver discovery walk against an in-memory chain.

mod common;

use crate::common::{tagged_addr, MockChain};
use sid::base::{ChainAddress, NodeHash};
use sid::conf::SidConf;
use sid::name::namehash;
use sid::records::Sid;

fn service() -> Sid<MockChain> {
    let registry = tagged_addr(0xaa);
    Sid::new(MockChain::new(registry), SidConf::new(registry))
}

fn node(name: &str) -> NodeHash {
    namehash(name).unwrap()
}

#[tokio::test]
async fn own_resolver_is_trusted() {
    let sid = service();
    let resolver = tagged_addr(1);
    sid.client()
        .provide_node(node("icebear.bnb"), tagged_addr(9), resolver);

    let handle = sid.name("icebear.bnb").unwrap();
    assert_eq!(handle.resolver().await.unwrap(), resolver);
}

#[tokio::test]
async fn ancestor_resolver_needs_wildcard() {
    let sid = service();
    let resolver = tagged_addr(1);
    sid.client()
        .provide_node(node("icebear.eth"), tagged_addr(9), resolver);

    // Not advertised as wildcard, so it must not answer for children.
    let handle = sid.name("sub.icebear.eth").unwrap();
    assert_eq!(handle.resolver().await.unwrap(), ChainAddress::ZERO);

    sid.client().provide_wildcard(resolver);
    assert_eq!(handle.resolver().await.unwrap(), resolver);
}

#[tokio::test]
async fn walk_stops_at_first_resolver() {
    let sid = service();
    let near = tagged_addr(1);
    let far = tagged_addr(2);
    sid.client()
        .provide_node(node("icebear.eth"), tagged_addr(9), near);
    sid.client().provide_node(node("eth"), tagged_addr(9), far);
    sid.client().provide_wildcard(far);

    // The non-wildcard resolver on icebear.eth shadows the wildcard one
    // above it.
    let handle = sid.name("sub.icebear.eth").unwrap();
    assert_eq!(handle.resolver().await.unwrap(), ChainAddress::ZERO);
}

#[tokio::test]
async fn no_resolver_anywhere() {
    let sid = service();
    let handle = sid.name("icebear.bnb").unwrap();
    assert_eq!(handle.resolver().await.unwrap(), ChainAddress::ZERO);
}

#[tokio::test]
async fn single_label_never_resolves() {
    let sid = service();
    sid.client()
        .provide_node(node("bnb"), tagged_addr(9), tagged_addr(1));

    let handle = sid.name("bnb").unwrap();
    assert_eq!(handle.resolver().await.unwrap(), ChainAddress::ZERO);
}

#[tokio::test]
async fn registry_fault_is_reported() {
    let sid = service();
    sid.client().break_node(node("icebear.bnb"));

    let handle = sid.name("icebear.bnb").unwrap();
    assert!(handle.resolver().await.is_err());

    // Reads forgive resolver faults but not discovery faults.
    assert!(handle.address().await.is_err());
}

#[tokio::test]
async fn wildcard_check_fault_is_reported() {
    let sid = service();
    let resolver = tagged_addr(1);
    sid.client()
        .provide_node(node("icebear.eth"), tagged_addr(9), resolver);
    sid.client().break_resolver(resolver);

    let handle = sid.name("sub.icebear.eth").unwrap();
    assert!(handle.resolver().await.is_err());
}

#[tokio::test]
async fn pinned_resolver_skips_the_walk() {
    let sid = service();
    let resolver = tagged_addr(1);
    let owner = tagged_addr(9);
    sid.client()
        .provide_addr(resolver, node("icebear.bnb"), owner);

    // Nothing is registered, but the pin makes records reachable anyway.
    let handle = sid.name_with_resolver("icebear.bnb", resolver).unwrap();
    assert_eq!(handle.resolver().await.unwrap(), ChainAddress::ZERO);
    assert_eq!(handle.address().await.unwrap(), owner);
}
