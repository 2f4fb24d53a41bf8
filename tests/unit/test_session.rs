use swaply_client::session::TokenStore;
use tokio_test::block_on;

#[test]
fn new_store_is_unauthenticated() {
    let tokens = TokenStore::new();
    assert!(block_on(tokens.get()).is_none());
    assert!(!block_on(tokens.is_authenticated()));
}

#[test]
fn set_and_clear_round_trip() {
    let tokens = TokenStore::new();
    block_on(tokens.set("tok-1"));
    assert_eq!(block_on(tokens.get()).as_deref(), Some("tok-1"));

    block_on(tokens.set("tok-2"));
    assert_eq!(block_on(tokens.get()).as_deref(), Some("tok-2"));

    block_on(tokens.clear());
    assert!(block_on(tokens.get()).is_none());
}

#[test]
fn clones_share_the_same_slot() {
    let tokens = TokenStore::new();
    let shared = tokens.clone();

    block_on(tokens.set("tok-1"));
    assert_eq!(block_on(shared.get()).as_deref(), Some("tok-1"));

    block_on(shared.clear());
    assert!(!block_on(tokens.is_authenticated()));
}

#[test]
fn with_token_starts_authenticated() {
    let tokens = TokenStore::with_token("tok-1");
    assert!(block_on(tokens.is_authenticated()));
}
