// src/domain/profile/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Profile;
pub use repository::{ProfileStore, ProfileStoreProvider, StoreScope};
pub use value_objects::UserId;
