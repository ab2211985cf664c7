//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cache entry: the stored value plus its expiry metadata.
///
/// Entries are immutable once inserted; a `set` on the same key replaces
/// the whole entry rather than merging into it.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - Optional TTL in seconds; None means the entry never expires
    pub fn new(value: T, ttl_seconds: Option<u64>) -> Self {
        let now = current_timestamp_ms();
        // Saturate so an absurdly large TTL pins the deadline at u64::MAX
        // instead of overflowing
        let expires_at = ttl_seconds.map(|ttl| now.saturating_add(ttl.saturating_mul(1000)));

        Self {
            value,
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current time
    /// is greater than or equal to the expiration time, so an entry whose TTL
    /// has fully elapsed is never returned to a caller.
    ///
    /// # Returns
    /// - `true` if the entry has a deadline and the current time >= that deadline
    /// - `false` if the entry has no deadline (never expires) or the TTL hasn't elapsed
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new("test_value".to_string(), None);

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = CacheEntry::new("test_value".to_string(), Some(60));

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_some());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry with 1 second TTL
        let entry = CacheEntry::new("test_value".to_string(), Some(1));

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_no_ttl_never_expires() {
        // An entry created arbitrarily far in the past with no deadline
        // must still be considered live.
        let ten_years_ms: u64 = 10 * 365 * 24 * 60 * 60 * 1000;
        let entry = CacheEntry {
            value: 42u32,
            created_at: current_timestamp_ms().saturating_sub(ten_years_ms),
            expires_at: None,
        };

        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_huge_ttl_saturates() {
        // A TTL near u64::MAX must not overflow the deadline computation
        let entry = CacheEntry::new("test_value".to_string(), Some(u64::MAX));

        assert_eq!(entry.expires_at, Some(u64::MAX));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_holds_arbitrary_value_types() {
        let entry = CacheEntry::new(vec![1u8, 2, 3], Some(60));
        assert_eq!(entry.value, vec![1, 2, 3]);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Create an entry with a known expiration time
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "test".to_string(),
            created_at: now,
            expires_at: Some(now), // Expires exactly at creation time
        };

        // Entry should be expired when current time >= expires_at
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
