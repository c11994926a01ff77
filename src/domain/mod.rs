//! Domain types for the version-history dialog.
//! Version records as the service reports them, request descriptors and errors.

pub mod error;
pub mod ticket;
pub mod version;

pub use error::*;
pub use ticket::*;
pub use version::*;
