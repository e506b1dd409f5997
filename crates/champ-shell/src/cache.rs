//! # Query Cache Hooks
//!
//! After a sale is created, list and dashboard screens hold stale data.
//! The shell tells the UI's query layer which cached queries to refetch;
//! it does not own the caches themselves.

/// Cached queries the shell knows how to invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachedQuery {
    /// The sales list screen.
    SalesList,
    /// Today's totals on the dashboard.
    DailyStats,
}

/// Invalidation sink implemented by the hosting UI layer.
pub trait QueryCache: Send + Sync {
    /// Marks a cached query stale so its next read refetches.
    fn invalidate(&self, query: CachedQuery);
}

/// Cache sink that drops invalidations, for hosts without cached screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl QueryCache for NullCache {
    fn invalidate(&self, _query: CachedQuery) {}
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records invalidations for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingCache {
        pub invalidated: Mutex<Vec<CachedQuery>>,
    }

    impl QueryCache for RecordingCache {
        fn invalidate(&self, query: CachedQuery) {
            self.invalidated.lock().unwrap().push(query);
        }
    }
}
