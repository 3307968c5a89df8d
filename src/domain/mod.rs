pub mod errors;
pub mod profile;
pub mod session;
