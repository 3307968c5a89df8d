pub mod profiles;

pub use profiles::LoadResult;
