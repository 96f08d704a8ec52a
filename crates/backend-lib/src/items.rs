// ============================
// crates/backend-lib/src/items.rs
// ============================
//! In-memory item collection.
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use taskboard_common::ItemBody;
use uuid::Uuid;

// Stored form of an item; `created_at` only orders the listing and never
// reaches the wire.
#[derive(Debug, Clone)]
struct StoredItem {
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Shared in-memory item store.
///
/// DashMap shards its locking internally, so item traffic never contends
/// with the session table. Contents die with the process.
#[derive(Default)]
pub struct ItemStore {
    items: DashMap<String, StoredItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, oldest first.
    pub fn list(&self) -> Vec<ItemBody> {
        let mut entries: Vec<(DateTime<Utc>, ItemBody)> = self
            .items
            .iter()
            .map(|entry| {
                let stored = entry.value();
                (
                    stored.created_at,
                    ItemBody {
                        id: entry.key().clone(),
                        title: stored.title.clone(),
                        completed: stored.completed,
                    },
                )
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
        entries.into_iter().map(|(_, item)| item).collect()
    }

    pub fn get(&self, id: &str) -> Option<ItemBody> {
        self.items.get(id).map(|stored| ItemBody {
            id: id.to_string(),
            title: stored.title.clone(),
            completed: stored.completed,
        })
    }

    /// Insert a new item with a server-assigned id.
    pub fn create(&self, title: String) -> ItemBody {
        let id = Uuid::new_v4().to_string();
        let stored = StoredItem {
            title,
            completed: false,
            created_at: Utc::now(),
        };
        let body = ItemBody {
            id: id.clone(),
            title: stored.title.clone(),
            completed: stored.completed,
        };
        self.items.insert(id, stored);
        body
    }

    /// Apply a partial update. `None` fields keep their stored value;
    /// `Some(false)` on `completed` is a real update.
    pub fn update(
        &self,
        id: &str,
        title: Option<String>,
        completed: Option<bool>,
    ) -> Option<ItemBody> {
        let mut entry = self.items.get_mut(id)?;
        if let Some(title) = title {
            entry.title = title;
        }
        if let Some(completed) = completed {
            entry.completed = completed;
        }
        Some(ItemBody {
            id: id.to_string(),
            title: entry.title.clone(),
            completed: entry.completed,
        })
    }

    pub fn remove(&self, id: &str) -> bool {
        self.items.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
