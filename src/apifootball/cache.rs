use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::models::Fixture;

/// Entries kept before the oldest insertion is evicted. A browsing session
/// touches a few dozen endpoints at most, so the cap exists only to bound a
/// pathologically long-lived session.
const MAX_ENTRIES: usize = 256;

// ---------------------------------------------------------------------------
// FixtureCache — session-scoped response cache keyed by full request URL
// ---------------------------------------------------------------------------

/// Shared cache of decoded fixture responses. Cloning is cheap and all
/// clones see the same entries. Successful responses — including legitimate
/// empty ones — are stored so the same endpoint is never fetched twice in a
/// session; failures are never stored, so a retry re-attempts the network.
///
/// Writes are idempotent: two in-flight fetches of the same URL may both
/// insert, and the second insert simply replaces an identical value.
#[derive(Debug, Clone, Default)]
pub struct FixtureCache {
    inner: Arc<Mutex<CacheInner>>,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, Vec<Fixture>>,
    // Insertion order, for eviction once MAX_ENTRIES is exceeded.
    order: VecDeque<String>,
}

impl FixtureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<Vec<Fixture>> {
        let inner = self.inner.lock().expect("fixture cache lock poisoned");
        inner.entries.get(url).cloned()
    }

    pub fn insert(&self, url: &str, fixtures: Vec<Fixture>) {
        let mut inner = self.inner.lock().expect("fixture cache lock poisoned");
        if inner.entries.insert(url.to_string(), fixtures).is_none() {
            inner.order.push_back(url.to_string());
        }
        while inner.order.len() > MAX_ENTRIES {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
            }
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        let inner = self.inner.lock().expect("fixture cache lock poisoned");
        inner.entries.contains_key(url)
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.lock().expect("fixture cache lock poisoned");
        inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full session reset. Nothing else ever evicts below the cap.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("fixture cache lock poisoned");
        inner.entries.clear();
        inner.order.clear();
    }
}
