use super::entry::*;

use std::time::*;

//
// CommonCacheEntry
//

/// [CacheEntry] implementation designed for common use cases.
///
/// Holds just the two timestamps. Cache stores with richer entries should implement [CacheEntry]
/// on their own types instead.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CommonCacheEntry {
    /// When the origin response was generated or received.
    pub response_created: SystemTime,

    /// Absolute expiration instant.
    pub response_expiration: SystemTime,
}

impl CommonCacheEntry {
    /// Constructor.
    pub fn new(response_created: SystemTime, response_expiration: SystemTime) -> Self {
        Self {
            response_created,
            response_expiration,
        }
    }

    /// Constructor with an expiration relative to the creation.
    ///
    /// Returns [None] if the expiration cannot be represented.
    pub fn with_lifetime(response_created: SystemTime, lifetime: Duration) -> Option<Self> {
        response_created
            .checked_add(lifetime)
            .map(|response_expiration| Self::new(response_created, response_expiration))
    }
}

impl CacheEntry for CommonCacheEntry {
    fn response_created(&self) -> SystemTime {
        self.response_created
    }

    fn response_expiration(&self) -> SystemTime {
        self.response_expiration
    }
}
