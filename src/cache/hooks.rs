use super::control::*;

use {http::*, std::sync::*};

/// Hook to parse a request's `Cache-Control`.
///
/// Should degrade to an absent `max-age` rather than fail.
pub type CacheControlHook = Arc<Box<dyn Fn(CacheControlHookContext) -> CacheControl + Send + Sync>>;

//
// CacheControlHookContext
//

/// Context for [CacheControlHook].
#[derive(Clone, Debug)]
pub struct CacheControlHookContext<'this> {
    /// Request headers.
    pub headers: &'this HeaderMap,
}

impl<'this> CacheControlHookContext<'this> {
    /// Constructor.
    pub fn new(headers: &'this HeaderMap) -> Self {
        Self { headers }
    }
}
