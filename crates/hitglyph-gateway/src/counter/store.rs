use dashmap::DashMap;

/// key -> monotonic hit count.
pub trait CounterStore: Send + Sync {
    /// Add one hit and return the resulting count (first hit returns 1).
    fn increment(&self, key: &str) -> u64;

    /// Forget the key. Returns whether it existed.
    fn reset(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<u64>;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `DashMap`-backed store. Increment and read happen under the same shard
/// lock, so each caller sees its own finalized value.
#[derive(Default)]
pub struct ShardedCounterStore {
    counts: DashMap<String, u64>,
}

impl ShardedCounterStore {
    pub fn new() -> Self {
        Self {
            counts: DashMap::new(),
        }
    }
}

impl CounterStore for ShardedCounterStore {
    fn increment(&self, key: &str) -> u64 {
        // fast path: no key allocation for already-tracked keys
        if let Some(mut v) = self.counts.get_mut(key) {
            *v = v.saturating_add(1);
            return *v;
        }
        let mut v = self.counts.entry(key.to_string()).or_insert(0);
        *v = v.saturating_add(1);
        *v
    }

    fn reset(&self, key: &str) -> bool {
        self.counts.remove(key).is_some()
    }

    fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).map(|r| *r.value())
    }

    fn len(&self) -> usize {
        self.counts.len()
    }
}
