//! Data models for the video backend
//!
//! Records persisted by the store, the request/response bodies of the REST
//! surface, and the status lifecycle enum.

mod frame;
mod upload;
mod video;

pub use frame::*;
pub use upload::*;
pub use video::*;

/// Store-assigned video identifier.
pub type VideoId = u64;

/// Identifier of the owning user.
pub type UserId = u64;
