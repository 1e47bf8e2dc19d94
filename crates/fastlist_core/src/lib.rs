//! Fastlist Core
//!
//! Contains the growable array container and its supporting pieces:
//! - `DynamicArray<T>`: contiguous, index-addressable, resizable sequence
//! - Power-of-two growth policy
//! - Binary search with insertion-point encoding
//! - Allocation tracking

pub mod error;
pub mod list;
pub mod memory;

pub use error::ListError;
pub use list::{growth, search, DynamicArray, IntoIter};
pub use memory::AllocationTracker;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
