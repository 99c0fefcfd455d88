//! Aggregate counts over the current item set.

use std::collections::HashSet;

use chrono::{DateTime, TimeDelta, Utc};

use super::Item;

/// Width of the trailing window counted as "recent", in days.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Summary numbers shown on the inventory dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemStats {
    pub total_items: usize,
    pub categories: usize,
    pub recent_additions: usize,
}

impl ItemStats {
    /// Summarise `items` as seen at `now`.
    ///
    /// An item is recent when it was added strictly after
    /// `now - RECENT_WINDOW_DAYS`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeDelta, Utc};
    /// use inventory_backend::domain::{Item, ItemId, ItemStats, ItemType, NewItem};
    ///
    /// let now = Utc::now();
    /// let items = vec![
    ///     Item::create(ItemId::new(1), NewItem::new("Tee", ItemType::Shirt), now),
    ///     Item::create(ItemId::new(2), NewItem::new("Boots", ItemType::Shoes), now - TimeDelta::days(30)),
    /// ];
    /// let stats = ItemStats::summarise(&items, now);
    /// assert_eq!((stats.total_items, stats.categories, stats.recent_additions), (2, 2, 1));
    /// ```
    pub fn summarise(items: &[Item], now: DateTime<Utc>) -> Self {
        let cutoff = now - TimeDelta::days(RECENT_WINDOW_DAYS);
        let categories = items
            .iter()
            .map(|item| item.item_type)
            .collect::<HashSet<_>>()
            .len();
        let recent_additions = items
            .iter()
            .filter(|item| item.date_added > cutoff)
            .count();
        Self {
            total_items: items.len(),
            categories,
            recent_additions,
        }
    }
}
