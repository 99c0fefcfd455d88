//! Inventory item aggregate and its category/condition vocabularies.
//!
//! An [`Item`] is created from a validated [`NewItem`] by the store, which
//! assigns the identifier and the `date_added` timestamp. Afterwards it is only
//! changed through [`ItemChanges`], which has no field for either value, so
//! neither can be rewritten by an update.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::UserId;

/// Sequential item identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(i64);

impl ItemId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a category or condition string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseVocabularyError {
    kind: &'static str,
    value: String,
}

macro_rules! vocabulary {
    (
        $(#[$outer:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$variant_meta:meta])* $variant:ident => $value:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Human-readable label shown by clients.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseVocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(ParseVocabularyError {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Item category.
    ///
    /// # Examples
    /// ```
    /// use inventory_backend::domain::ItemType;
    ///
    /// let parsed: ItemType = "sports-gear".parse().expect("known category");
    /// assert_eq!(parsed, ItemType::SportsGear);
    /// assert_eq!(parsed.label(), "Sports Gear");
    /// ```
    ItemType ("item type") {
        Shirt => "shirt", "Shirt",
        Pant => "pant", "Pant",
        Shoes => "shoes", "Shoes",
        SportsGear => "sports-gear", "Sports Gear",
        Accessories => "accessories", "Accessories",
        Outerwear => "outerwear", "Outerwear",
        Undergarments => "undergarments", "Undergarments",
        Other => "other", "Other",
    }
}

vocabulary! {
    /// Physical condition of an item.
    ItemCondition ("item condition") {
        New => "new", "New",
        LikeNew => "like-new", "Like New",
        Good => "good", "Good",
        Fair => "fair", "Fair",
        Poor => "poor", "Poor",
    }
}

impl Default for ItemCondition {
    fn default() -> Self {
        Self::New
    }
}

/// Validated input for creating an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub item_type: ItemType,
    pub condition: ItemCondition,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub additional_images: Option<Vec<String>>,
}

impl NewItem {
    /// Start an item with the required fields; the condition defaults to new.
    ///
    /// # Examples
    /// ```
    /// use inventory_backend::domain::{ItemCondition, ItemType, NewItem};
    ///
    /// let item = NewItem::new("Running Shoes", ItemType::Shoes)
    ///     .with_description("Trail runners");
    /// assert_eq!(item.condition, ItemCondition::New);
    /// ```
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            condition: ItemCondition::default(),
            description: None,
            cover_image: None,
            additional_images: None,
        }
    }

    /// Set the condition.
    #[must_use]
    pub fn with_condition(mut self, condition: ItemCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the cover image URL or data URL.
    #[must_use]
    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    /// Set the additional images, preserving their order.
    #[must_use]
    pub fn with_additional_images(mut self, images: Vec<String>) -> Self {
        self.additional_images = Some(images);
        self
    }
}

/// Fields an update may replace. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub item_type: Option<ItemType>,
    pub condition: Option<ItemCondition>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub additional_images: Option<Vec<String>>,
}

/// Stored inventory item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub item_type: ItemType,
    pub condition: ItemCondition,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub additional_images: Option<Vec<String>>,
    pub date_added: DateTime<Utc>,
    /// Owning user. Never populated; items are not scoped per user.
    pub user_id: Option<UserId>,
}

impl Item {
    /// Materialise a new item with store-assigned identity and timestamp.
    pub fn create(id: ItemId, new_item: NewItem, date_added: DateTime<Utc>) -> Self {
        let NewItem {
            name,
            item_type,
            condition,
            description,
            cover_image,
            additional_images,
        } = new_item;
        Self {
            id,
            name,
            item_type,
            condition,
            description,
            cover_image,
            additional_images,
            date_added,
            user_id: None,
        }
    }

    /// Shallow-merge `changes` over this item.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use inventory_backend::domain::{Item, ItemChanges, ItemId, ItemType, NewItem};
    ///
    /// let mut item = Item::create(ItemId::new(1), NewItem::new("Cap", ItemType::Accessories), Utc::now());
    /// item.apply(ItemChanges {
    ///     description: Some("Wool".to_owned()),
    ///     ..ItemChanges::default()
    /// });
    /// assert_eq!(item.name, "Cap");
    /// assert_eq!(item.description.as_deref(), Some("Wool"));
    /// ```
    pub fn apply(&mut self, changes: ItemChanges) {
        let ItemChanges {
            name,
            item_type,
            condition,
            description,
            cover_image,
            additional_images,
        } = changes;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(item_type) = item_type {
            self.item_type = item_type;
        }
        if let Some(condition) = condition {
            self.condition = condition;
        }
        if description.is_some() {
            self.description = description;
        }
        if cover_image.is_some() {
            self.cover_image = cover_image;
        }
        if additional_images.is_some() {
            self.additional_images = additional_images;
        }
    }

    /// Case-insensitive substring match on name, description or category.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(needle))
            || self.item_type.as_str().contains(needle)
    }
}
