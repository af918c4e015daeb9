use tracing_subscriber::{EnvFilter, fmt::time::*};

/// Log to stderr, tracing this crate. Override via `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,http_cache_suitability=trace"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
