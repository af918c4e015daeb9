mod utils;

use {
    http::*,
    http_cache_suitability::{cache::*, *},
    std::time::*,
};

// Walks a single cache entry through time and asks whether it can still be served
//
// Pay attention to the tracing log to see why entries are rejected!
//
//   cargo run --example basic
//   RUST_LOG=trace cargo run --example basic

// The entry's lifetime as decided by the cache store (e.g. from the response's `Expires`)
const LIFETIME: Duration = Duration::from_secs(3600);

// Offsets from the entry's creation at which we ask
const OFFSETS: &[u64] = &[0, 59, 60, 61, 1800, 3600, 3601];

fn main() {
    utils::init_tracing();

    // Any fixed instant will do; the checker never reads the clock itself
    let created = SystemTime::now();
    let Some(entry) = CommonCacheEntry::with_lifetime(created, LIFETIME) else {
        tracing::error!("lifetime overflow");
        return;
    };

    let checker = DefaultSuitabilityChecker::default();

    for cache_control in [None, Some("max-age=60"), Some("max-age=0"), Some("max-age=bogus")] {
        let mut builder = Request::get("/");
        if let Some(cache_control) = cache_control {
            builder = builder.header(header::CACHE_CONTROL, cache_control);
        }

        let request = match builder.body(()) {
            Ok(request) => request,
            Err(error) => {
                tracing::error!("request: {}", error);
                return;
            }
        };

        for offset in OFFSETS {
            let now = created + Duration::from_secs(*offset);
            let suitable = request.can_use_cached_entry(&checker, &entry, now);
            tracing::info!(
                "Cache-Control: {:<15} age: {:>5}s suitable: {}",
                cache_control.unwrap_or("-"),
                entry.current_age(now),
                suitable
            );
        }
    }
}
