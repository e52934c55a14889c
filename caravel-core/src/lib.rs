//! Caravel Core
//!
//! Session state, path resolution, and error types for the caravel
//! file-manager shell.

pub mod entry;
pub mod error;
pub mod path;
pub mod session;

pub use entry::{DirEntry, EntryKind};
pub use error::{CaravelError, CaravelResult, Notice};
pub use session::Session;
