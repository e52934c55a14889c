//! Caravel Ops
//!
//! The streaming transfer engine and the file-operation catalog built
//! on top of it.

pub mod operations;
pub mod transfer;
pub mod transform;

pub use transfer::{TransferOutcome, CHUNK_SIZE};
pub use transform::Transform;
