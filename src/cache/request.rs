use super::{super::checker::*, entry::*};

use {http::*, std::time::*};

//
// SuitabilityRequest
//

/// Ask a [SuitabilityChecker] whether a cache entry can be used for this request.
pub trait SuitabilityRequest {
    /// Whether the cache entry can be used without revalidation.
    fn can_use_cached_entry<CheckerT, CacheEntryT>(
        &self,
        checker: &CheckerT,
        entry: &CacheEntryT,
        now: SystemTime,
    ) -> bool
    where
        CheckerT: SuitabilityChecker,
        CacheEntryT: CacheEntry;
}

impl<RequestBodyT> SuitabilityRequest for Request<RequestBodyT> {
    fn can_use_cached_entry<CheckerT, CacheEntryT>(
        &self,
        checker: &CheckerT,
        entry: &CacheEntryT,
        now: SystemTime,
    ) -> bool
    where
        CheckerT: SuitabilityChecker,
        CacheEntryT: CacheEntry,
    {
        checker.can_use(self.headers(), entry, now)
    }
}
