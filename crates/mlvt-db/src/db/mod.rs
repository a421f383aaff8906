//! Postgres implementations of the store traits

pub mod video;

pub use video::PostgresVideoStore;
