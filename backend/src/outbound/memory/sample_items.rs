//! Demonstration records loaded when sample seeding is enabled.

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::{ItemType, NewItem};

const UNSPLASH: &str = "https://images.unsplash.com";

fn photo(id: &str) -> String {
    format!("{UNSPLASH}/{id}")
}

/// Four sample items dated relative to `now`, in catalogue order.
///
/// Feed the result to [`MemoryStore::seed`](super::MemoryStore::seed).
pub fn sample_items(now: DateTime<Utc>) -> Vec<(NewItem, DateTime<Utc>)> {
    vec![
        (
            NewItem::new("Premium Running Shoes", ItemType::Shoes)
                .with_description(
                    "Professional-grade running shoes designed for maximum performance and \
                     comfort during intensive training sessions. Features advanced cushioning \
                     technology, breathable mesh upper, and durable rubber outsole for superior \
                     traction on various surfaces.",
                )
                .with_cover_image(photo("photo-1542291026-7eec264c27ff"))
                .with_additional_images(vec![
                    photo("photo-1549298916-b41d501d3772"),
                    photo("photo-1525966222134-fcfa99b8ae77"),
                ]),
            now - TimeDelta::days(2),
        ),
        (
            NewItem::new("Classic Denim Shirt", ItemType::Shirt)
                .with_description(
                    "Timeless denim shirt with premium cotton blend, perfect for casual outings \
                     and smart-casual occasions.",
                )
                .with_cover_image(photo("photo-1553062407-98eeb64c6a62"))
                .with_additional_images(Vec::new()),
            now - TimeDelta::days(7),
        ),
        (
            NewItem::new("Formal Business Trousers", ItemType::Pant)
                .with_description(
                    "Elegant formal trousers crafted from premium wool blend, ideal for business \
                     meetings and formal events.",
                )
                .with_cover_image(photo("photo-1594938298603-c8148c4dae35"))
                .with_additional_images(Vec::new()),
            now - TimeDelta::days(3),
        ),
        (
            NewItem::new("Professional Tennis Racket", ItemType::SportsGear)
                .with_description(
                    "High-performance tennis racket with advanced carbon fiber construction for \
                     competitive players and enthusiasts.",
                )
                .with_cover_image(photo("photo-1622279457486-62dcc4a431d6"))
                .with_additional_images(Vec::new()),
            now - TimeDelta::days(5),
        ),
    ]
}
