//! In-memory duplicate-submission filter.
//!
//! Keeps a phone fingerprint to last-seen timestamp mapping behind an
//! async mutex. A background task drops entries older than the
//! configured retention window. The store can be swapped for an
//! external one through the [`DedupeStore`](super::DedupeStore) trait.

use super::DedupeStore;
use crate::consts;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::{collections::HashMap, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct InMemoryDedupeStore {
    entries: Arc<tokio::sync::Mutex<HashMap<String, DateTime<Utc>>>>,
    retention: TimeDelta,
}

impl InMemoryDedupeStore {
    pub fn new(retention: TimeDelta) -> Self {
        Self {
            entries: Arc::new(tokio::sync::Mutex::new(HashMap::new())),
            retention,
        }
    }

    /// Drops every entry older than the retention window.
    pub async fn sweep(&self) {
        let cutoff = Utc::now() - self.retention;
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, seen_at| *seen_at > cutoff);

        let dropped = before - entries.len();
        if dropped > 0 {
            log::info!("dedupe sweep dropped {} expired entries", dropped);
        }
    }

    /// Spawns the periodic sweep task on the current arbiter.
    pub fn spawn_sweeper(&self) {
        let store = self.clone();
        ntex::rt::spawn(async move {
            loop {
                ntex::time::sleep(Duration::from_millis(consts::DEDUPE_SWEEP_INTERVAL_MS)).await;
                store.sweep().await;
            }
        });
    }
}

#[async_trait]
impl DedupeStore for InMemoryDedupeStore {
    async fn seen(&self, key: &str) -> bool {
        let cutoff = Utc::now() - self.retention;
        self.entries
            .lock()
            .await
            .get(key)
            .is_some_and(|seen_at| *seen_at > cutoff)
    }

    async fn mark(&self, key: &str) {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), Utc::now());
    }
}
