//! Concurrent string interning for textual representations.
//!
//! The pool stores weak references only, so it never keeps a string alive on
//! its own and never drops one that a live value still holds. Dead entries are
//! purged whenever the pool has doubled since the last purge, which bounds it
//! to twice the number of live strings.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::trace;

/// Pool size below which inserts never trigger a purge.
pub const PURGE_FLOOR: usize = 64;

/// Deduplicates equal strings behind shared `Arc<str>` handles.
#[derive(Debug)]
pub struct StringPool {
    entries: DashMap<Box<str>, Weak<str>>,
    purge_at: AtomicUsize,
}

impl Default for StringPool {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
            purge_at: AtomicUsize::new(PURGE_FLOOR),
        }
    }
}

impl StringPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shared handle equal to `text`, inserting it if needed.
    pub fn intern(&self, text: &str) -> Arc<str> {
        if let Some(live) = self.entries.get(text).and_then(|entry| entry.upgrade()) {
            return live;
        }
        let fresh = match self.entries.entry(Box::from(text)) {
            Entry::Occupied(mut entry) => {
                if let Some(live) = entry.get().upgrade() {
                    return live;
                }
                let fresh: Arc<str> = Arc::from(text);
                entry.insert(Arc::downgrade(&fresh));
                return fresh;
            }
            Entry::Vacant(entry) => {
                let fresh: Arc<str> = Arc::from(text);
                entry.insert(Arc::downgrade(&fresh));
                trace!(len = text.len(), "interned string");
                fresh
            }
        };
        // No shard guard is held here; `retain` locks every shard.
        self.purge_if_grown();
        fresh
    }

    fn purge_if_grown(&self) {
        if self.entries.len() < self.purge_at.load(Ordering::Relaxed) {
            return;
        }
        self.purge();
        let next = (self.entries.len() * 2).max(PURGE_FLOOR);
        self.purge_at.store(next, Ordering::Relaxed);
    }

    /// Drops entries no live handle refers to; returns how many were removed.
    pub fn purge(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        let removed = before.saturating_sub(self.entries.len());
        trace!(removed, remaining = self.entries.len(), "purged string pool");
        removed
    }

    /// Number of entries, live or not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the pool holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static SHARED: Lazy<StringPool> = Lazy::new(StringPool::new);

/// Process-wide pool backing [`AsciiText`](crate::repr::AsciiText).
pub fn shared() -> &'static StringPool {
    &SHARED
}
