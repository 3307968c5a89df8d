// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod security;
pub mod store;

pub use fixtures::{alice, fixed_expiry};
pub use security::{FakeSessionVerifier, ALICE_TOKEN, GHOST_TOKEN, USERLESS_TOKEN};
pub use store::{InMemoryProfileStore, InMemoryStoreProvider, StoreBehavior};
