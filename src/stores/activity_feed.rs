use crate::models::views::ActivityItem;
use crate::utils::time::local_clock_time;
use std::collections::VecDeque;
use std::sync::Mutex;

pub const DEFAULT_CAPACITY: usize = 50;

/// Demo events shown on a fresh dashboard, oldest first
const DEMO_EVENTS: [&str; 3] = [
    "Node‑A07 anchored eDNA batch hash 0x91ab…",
    "Node‑O33 pinned orbital pass dataset 0x73ff…",
    "Node‑E12 submitted environmental log 0xd201…",
];

/// Newest-first feed of dashboard events, bounded to `capacity` entries
pub struct ActivityFeed {
    items: Mutex<VecDeque<ActivityItem>>,
    capacity: usize,
    explorer_tx_base: String,
}

impl ActivityFeed {
    pub fn with_capacity(capacity: usize, explorer_tx_base: String) -> Self {
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            explorer_tx_base,
        }
    }

    /// Feed pre-filled with the demo events
    pub fn seeded(explorer_tx_base: String) -> Self {
        let feed = Self::with_capacity(DEFAULT_CAPACITY, explorer_tx_base);
        for message in DEMO_EVENTS {
            feed.push(message, None);
        }
        feed
    }

    /// Prepend an event stamped with the local time
    pub fn push(&self, message: &str, tx_hash: Option<&str>) -> ActivityItem {
        let item = ActivityItem {
            message: message.to_string(),
            time: local_clock_time(),
            tx_hash: tx_hash.map(str::to_string),
            explorer_url: tx_hash.map(|hash| format!("{}{}", self.explorer_tx_base, hash)),
        };

        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.push_front(item.clone());
        items.truncate(self.capacity);

        item
    }

    pub fn list(&self) -> Vec<ActivityItem> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
