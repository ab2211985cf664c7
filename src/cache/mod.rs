//! Cache Module
//!
//! Provides typed in-memory caching with per-entry TTL expiration. Entries
//! are dropped lazily on read and in bulk by the periodic sweep task.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{CacheError, Ttl, TtlCache};
