// File: crates/chart-web/src/state.rs
// Summary: Shared application state; in-memory dataset store with eviction.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chart_data::Table;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Uploaded datasets kept in memory; the oldest is evicted past this bound.
pub const MAX_DATASETS: usize = 32;

#[derive(Clone)]
pub struct Dataset {
    pub name: String,
    pub table: Arc<Table>,
    pub uploaded_at: DateTime<Utc>,
    // Monotonic insertion order; wall clocks can tie.
    seq: u64,
}

#[derive(Clone, Default)]
pub struct AppState {
    datasets: Arc<RwLock<HashMap<Uuid, Dataset>>>,
    next_seq: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an uploaded table and return its id.
    pub fn insert(&self, name: String, table: Table) -> Uuid {
        let id = Uuid::new_v4();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let mut map = self.datasets.write().expect("dataset store lock");
        while map.len() >= MAX_DATASETS {
            let oldest = map.iter().min_by_key(|(_, d)| d.seq).map(|(id, _)| *id);
            match oldest {
                Some(old) => {
                    map.remove(&old);
                }
                None => break,
            }
        }
        map.insert(
            id,
            Dataset { name, table: Arc::new(table), uploaded_at: Utc::now(), seq },
        );
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<Dataset> {
        self.datasets.read().expect("dataset store lock").get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.datasets.read().expect("dataset store lock").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_table() -> Table {
        Table::from_csv("a\n1\n".as_bytes()).unwrap()
    }

    #[test]
    fn insert_and_get_roundtrip() {
        let state = AppState::new();
        let id = state.insert("t.csv".into(), tiny_table());
        let ds = state.get(&id).expect("stored");
        assert_eq!(ds.name, "t.csv");
        assert_eq!(ds.table.row_count(), 1);
        assert!(state.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn store_evicts_oldest_past_bound() {
        let state = AppState::new();
        let first = state.insert("first.csv".into(), tiny_table());
        for i in 0..MAX_DATASETS {
            state.insert(format!("{i}.csv"), tiny_table());
        }
        assert_eq!(state.len(), MAX_DATASETS);
        assert!(state.get(&first).is_none(), "oldest dataset should be gone");
    }
}
