//! MLVT Database Layer
//!
//! The `VideoStore` trait is the persistence seam for video records and their
//! frames. `PostgresVideoStore` is the production implementation; an
//! in-memory store is available behind the `test-helpers` feature.

pub mod db;
#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;
pub mod store;

pub use db::PostgresVideoStore;
#[cfg(any(test, feature = "test-helpers"))]
pub use memory::MemoryVideoStore;
pub use store::{StoreError, StoreResult, VideoStore};
