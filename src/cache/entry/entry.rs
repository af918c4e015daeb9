use {
    duration_str::*,
    std::{sync::*, time::*},
};

//
// CacheEntry
//

/// Cache entry.
///
/// Exposes the caching metadata of a stored response. The entry is owned by the cache store, we
/// only ever borrow it.
///
/// Note that we do *not* enforce that the expiration is at or after the creation.
pub trait CacheEntry {
    /// When the origin response was generated or received.
    fn response_created(&self) -> SystemTime;

    /// Absolute expiration instant.
    ///
    /// This is precomputed by the cache store from the original response's freshness headers,
    /// e.g. `Expires` or `Date` plus `max-age`.
    fn response_expiration(&self) -> SystemTime;

    /// Current age in whole seconds.
    ///
    /// Fractional seconds are truncated toward zero, never rounded up, so an entry that is 59.999
    /// seconds old has an age of 59.
    ///
    /// If `now` is before the creation (clock skew) then the age is negative.
    fn current_age(&self, now: SystemTime) -> i64 {
        match now.duration_since(self.response_created()) {
            Ok(age) => age.as_secs().try_into().unwrap_or(i64::MAX),

            Err(error) => {
                let skew = error.duration();
                tracing::trace!("clock skew: {}", skew.human_format());
                i64::try_from(skew.as_secs())
                    .map(|skew| -skew)
                    .unwrap_or(i64::MIN)
            }
        }
    }

    /// True if `now` is strictly after the expiration.
    fn is_expired_at(&self, now: SystemTime) -> bool {
        now > self.response_expiration()
    }
}

impl<CacheEntryT> CacheEntry for &CacheEntryT
where
    CacheEntryT: CacheEntry + ?Sized,
{
    fn response_created(&self) -> SystemTime {
        (**self).response_created()
    }

    fn response_expiration(&self) -> SystemTime {
        (**self).response_expiration()
    }
}

impl<CacheEntryT> CacheEntry for Arc<CacheEntryT>
where
    CacheEntryT: CacheEntry + ?Sized,
{
    fn response_created(&self) -> SystemTime {
        (**self).response_created()
    }

    fn response_expiration(&self) -> SystemTime {
        (**self).response_expiration()
    }
}
