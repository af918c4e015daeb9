use {
    http::{HeaderMap, Request, header::CACHE_CONTROL},
    http_cache_suitability::{cache::*, *},
    proptest::prelude::*,
    std::time::*,
};

const HOUR: Duration = Duration::from_secs(3600);

fn t0() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_600_000_000)
}

fn entry() -> CommonCacheEntry {
    CommonCacheEntry::new(t0(), t0() + HOUR)
}

fn request(cache_control: Option<String>) -> Request<()> {
    let mut builder = Request::get("/resource");
    if let Some(cache_control) = cache_control {
        builder = builder.header(CACHE_CONTROL, cache_control);
    }
    builder.body(()).unwrap()
}

fn max_age(max_age: u64) -> Option<String> {
    Some(format!("max-age={}", max_age))
}

fn check(request: &Request<()>, entry: &CommonCacheEntry, now: SystemTime) -> bool {
    request.can_use_cached_entry(&DefaultSuitabilityChecker::default(), entry, now)
}

#[test]
fn within_lifetime_without_cache_control() {
    assert!(check(&request(None), &entry(), t0() + Duration::from_secs(1800)));
}

#[test]
fn past_expiration() {
    assert!(!check(&request(None), &entry(), t0() + Duration::from_secs(3601)));
}

#[test]
fn older_than_requested_max_age() {
    assert!(!check(&request(max_age(60)), &entry(), t0() + Duration::from_secs(100)));
}

#[test]
fn younger_than_requested_max_age() {
    assert!(check(&request(max_age(60)), &entry(), t0() + Duration::from_secs(59)));
}

#[test]
fn exactly_requested_max_age() {
    assert!(check(&request(max_age(60)), &entry(), t0() + Duration::from_secs(60)));
}

#[test]
fn fractional_age_is_truncated() {
    assert!(check(&request(max_age(59)), &entry(), t0() + Duration::from_millis(59_999)));
}

//
// A policy layered around the default checker
//

struct NoCacheChecker(DefaultSuitabilityChecker);

impl SuitabilityChecker for NoCacheChecker {
    fn can_use<CacheEntryT>(
        &self,
        headers: &HeaderMap,
        entry: &CacheEntryT,
        now: SystemTime,
    ) -> bool
    where
        CacheEntryT: CacheEntry,
    {
        let no_cache = headers
            .get_all(CACHE_CONTROL)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|value| value.contains("no-cache"));

        !no_cache && self.0.can_use(headers, entry, now)
    }
}

#[test]
fn layered_policy() {
    let checker = NoCacheChecker(DefaultSuitabilityChecker::default());
    let now = t0() + Duration::from_secs(10);

    assert!(request(None).can_use_cached_entry(&checker, &entry(), now));
    assert!(!request(Some("no-cache".into())).can_use_cached_entry(&checker, &entry(), now));
    assert!(!request(max_age(5)).can_use_cached_entry(&checker, &entry(), now));
}

#[test]
fn concurrent_use() {
    let checker = DefaultSuitabilityChecker::default();
    let entry = entry();

    std::thread::scope(|scope| {
        for seconds in 0..8u64 {
            let checker = &checker;
            let entry = &entry;
            scope.spawn(move || {
                let now = t0() + Duration::from_secs(seconds * 20);
                assert_eq!(
                    request(max_age(60)).can_use_cached_entry(checker, entry, now),
                    seconds * 20 <= 60
                );
            });
        }
    });
}

proptest! {
    #[test]
    fn expiration_dominates(
        lifetime in 0u64..100_000,
        past in 1u64..100_000,
        limit in proptest::option::of(0u64..1_000_000),
    ) {
        let entry = CommonCacheEntry::new(t0(), t0() + Duration::from_secs(lifetime));
        let request = request(limit.and_then(max_age));
        let now = entry.response_expiration + Duration::from_millis(past);
        prop_assert!(!check(&request, &entry, now), "expired entry accepted");
    }

    #[test]
    fn absent_max_age_is_expiration_only(
        lifetime in 0u64..100_000,
        elapsed in 0u64..200_000_000,
    ) {
        let entry = CommonCacheEntry::new(t0(), t0() + Duration::from_secs(lifetime));
        let now = t0() + Duration::from_millis(elapsed);
        prop_assert_eq!(check(&request(None), &entry, now), !entry.is_expired_at(now));
        prop_assert_eq!(
            check(&request(Some("no-store, private".into())), &entry, now),
            !entry.is_expired_at(now)
        );
    }

    #[test]
    fn age_is_floored(limit in 0u64..100_000, fraction in 0u64..1000) {
        let entry = CommonCacheEntry::new(t0(), t0() + Duration::from_secs(200_000));
        let request = request(max_age(limit));

        let now = t0() + Duration::from_secs(limit) + Duration::from_millis(fraction);
        prop_assert!(check(&request, &entry, now), "age within limit rejected");

        let now = t0() + Duration::from_secs(limit + 1) + Duration::from_millis(fraction);
        prop_assert!(!check(&request, &entry, now), "age beyond limit accepted");
    }

    #[test]
    fn suitability_never_returns(
        lifetime in 0u64..10_000,
        limit in proptest::option::of(0u64..10_000),
        start in 0u64..20_000_000,
        later in 0u64..20_000_000,
    ) {
        let entry = CommonCacheEntry::new(t0(), t0() + Duration::from_secs(lifetime));
        let request = request(limit.and_then(max_age));

        let now = t0() + Duration::from_millis(start);
        let then = now + Duration::from_millis(later);
        if !check(&request, &entry, now) {
            prop_assert!(!check(&request, &entry, then), "entry became suitable again");
        }
    }
}
