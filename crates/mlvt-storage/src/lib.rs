//! MLVT Storage Library
//!
//! Issues time-limited URLs that let clients upload to and download from
//! object storage directly, without streaming bytes through the API.
//!
//! # Key format
//!
//! Object keys are `{folder}/{file_name}`, or just `{file_name}` when the
//! folder is empty. Keys must not contain `..` or a leading `/`. Key building
//! is centralized in the `keys` module so every issuer agrees on the layout.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-s3")]
pub mod s3;
#[cfg(any(test, feature = "test-helpers"))]
pub mod static_issuer;
pub mod traits;

// Re-export commonly used types
pub use factory::create_url_issuer;
pub use keys::object_key;
#[cfg(feature = "storage-s3")]
pub use s3::S3UrlIssuer;
#[cfg(any(test, feature = "test-helpers"))]
pub use static_issuer::{IssuedUrl, StaticUrlIssuer};
pub use traits::{BlobUrlIssuer, StorageError, StorageResult, UrlOperation};
