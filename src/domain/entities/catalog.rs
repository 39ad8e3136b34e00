//! Catalog snapshot - The item list as fetched at one point in time

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Item;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Items in upstream order; selection depends on this order
    pub items: Vec<Item>,
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(items: Vec<Item>, fetched_at: DateTime<Utc>) -> Self {
        Self { items, fetched_at }
    }

    /// Whether the snapshot is at most `ttl` old at `now`
    pub fn is_fresh(&self, ttl: TimeDelta, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.fetched_at) <= ttl
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
