// src/application/queries/profiles/mod.rs
mod load;
mod service;

pub use service::ProfileQueryService;
