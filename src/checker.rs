use super::cache::*;

use {
    duration_str::*,
    http::*,
    std::{fmt, time::*},
};

/// Whether a cache entry can be used for a request without revalidation.
///
/// Runs [DefaultSuitabilityChecker] without hooks.
pub fn can_use<CacheEntryT>(headers: &HeaderMap, entry: &CacheEntryT, now: SystemTime) -> bool
where
    CacheEntryT: CacheEntry,
{
    DefaultSuitabilityChecker::default().can_use(headers, entry, now)
}

//
// SuitabilityChecker
//

/// Cache entry suitability checker.
///
/// Decides whether a cached response may be served for a request without contacting the origin.
/// A `false` verdict should be treated as a cache miss; whether to revalidate or refetch is up to
/// the caller.
///
/// Implementations must not read a clock. The current time is always supplied as `now` so that
/// verdicts are deterministic.
pub trait SuitabilityChecker
where
    Self: Send + Sync,
{
    /// Whether the cache entry can be used without revalidation.
    fn can_use<CacheEntryT>(
        &self,
        headers: &HeaderMap,
        entry: &CacheEntryT,
        now: SystemTime,
    ) -> bool
    where
        CacheEntryT: CacheEntry;
}

//
// DefaultSuitabilityChecker
//

/// Default [SuitabilityChecker].
///
/// Checks, in order, stopping at the first failure:
///
/// 1. The entry must not be expired, i.e. `now` must not be after its expiration.
/// 2. If the request's `Cache-Control` has a `max-age` then the entry's current age must not
///    exceed it. The age is truncated to whole seconds, so an entry that is 60.9 seconds old
///    satisfies `max-age=60`.
///
/// All other `Cache-Control` directives are ignored. Stricter policies (e.g. `no-cache`,
/// `min-fresh`) can be layered around this checker or provided as another [SuitabilityChecker].
///
/// If the entry was created after `now` (clock skew) then its age is negative and only the
/// expiration check can reject it.
#[derive(Clone, Default)]
pub struct DefaultSuitabilityChecker {
    cache_control: Option<CacheControlHook>,
}

impl DefaultSuitabilityChecker {
    /// Provide a hook to parse the request's `Cache-Control`.
    ///
    /// The default is [parse_cache_control].
    pub fn cache_control(
        mut self,
        cache_control: impl Fn(CacheControlHookContext) -> CacheControl + 'static + Send + Sync,
    ) -> Self {
        self.cache_control = Some(CacheControlHook::new(Box::new(cache_control)));
        self
    }

    // Parse via hook or default.
    fn parse_cache_control(&self, headers: &HeaderMap) -> CacheControl {
        match &self.cache_control {
            Some(cache_control) => cache_control(CacheControlHookContext::new(headers)),
            None => parse_cache_control(headers),
        }
    }
}

impl SuitabilityChecker for DefaultSuitabilityChecker {
    fn can_use<CacheEntryT>(
        &self,
        headers: &HeaderMap,
        entry: &CacheEntryT,
        now: SystemTime,
    ) -> bool
    where
        CacheEntryT: CacheEntry,
    {
        if entry.is_expired_at(now) {
            tracing::debug!("unsuitable (expired)");
            return false;
        }

        if let Some(max_age) = self.parse_cache_control(headers).max_age {
            let age = entry.current_age(now);
            if exceeds(age, max_age) {
                tracing::debug!(
                    "unsuitable (age {} > {}={})",
                    Duration::from_secs(age.unsigned_abs()).human_format(),
                    MAX_AGE,
                    max_age
                );
                return false;
            }
        }

        true
    }
}

impl fmt::Debug for DefaultSuitabilityChecker {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("DefaultSuitabilityChecker")
            .field("cache_control", &self.cache_control.as_ref().map(|_| "hook"))
            .finish()
    }
}

// Negative ages never exceed.
fn exceeds(age: i64, max_age: u64) -> bool {
    u64::try_from(age).is_ok_and(|age| age > max_age)
}
