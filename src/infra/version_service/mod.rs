//! Version service client contract and the in-memory catalog implementation.

pub mod memory;
pub mod traits;

pub use memory::{InMemoryVersionService, VersionCatalog};
pub use traits::VersionService;
