//! Common types and traits for all remote collections

pub mod collection;

// Re-exports
pub use collection::RestCollection;
