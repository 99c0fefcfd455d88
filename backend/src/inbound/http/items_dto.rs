//! Item request/response DTOs and parsing helpers.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::ItemFilter;
use crate::domain::{Error, Item, ItemChanges, ItemCondition, ItemId, ItemType, NewItem};
use crate::inbound::http::validation::{FieldErrors, FieldName};

const NAME: FieldName = FieldName::new("name");
const TYPE: FieldName = FieldName::new("type");
const CONDITION: FieldName = FieldName::new("condition");
const DESCRIPTION: FieldName = FieldName::new("description");
const COVER_IMAGE: FieldName = FieldName::new("coverImage");
const ADDITIONAL_IMAGES: FieldName = FieldName::new("additionalImages");

const NAME_REQUIRED: &str = "Item name is required";
const TYPE_REQUIRED: &str = "Item type is required";

/// Request payload for creating or updating an item.
///
/// Every field is optional at the wire level; [`validate_new_item`] enforces
/// the fields a create needs. `id`, `dateAdded` and `userId` are not part of
/// the payload and are ignored when a client sends them. A JSON `null` is
/// treated like an absent field.
///
/// Fields hold raw JSON so a value of the wrong type is reported against
/// its field instead of failing the whole body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    #[schema(value_type = Option<String>, example = "Premium Running Shoes")]
    pub name: Option<Value>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>, example = "shoes")]
    pub item_type: Option<Value>,
    #[schema(value_type = Option<String>, example = "like-new")]
    pub condition: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    /// Image URL or `data:` URL.
    #[schema(value_type = Option<String>)]
    pub cover_image: Option<Value>,
    #[schema(value_type = Option<Vec<String>>)]
    pub additional_images: Option<Value>,
}

/// Stored item as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "shoes")]
    pub item_type: String,
    #[schema(example = "new")]
    pub condition: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub additional_images: Option<Vec<String>>,
    #[schema(format = "date-time")]
    pub date_added: String,
    pub user_id: Option<i64>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.get(),
            name: item.name,
            item_type: item.item_type.as_str().to_owned(),
            condition: item.condition.as_str().to_owned(),
            description: item.description,
            cover_image: item.cover_image,
            additional_images: item.additional_images,
            date_added: item
                .date_added
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            user_id: item.user_id.map(|user| user.get()),
        }
    }
}

/// Query string accepted by the item listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemListQuery {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

impl ItemListQuery {
    /// Resolve the listing filter. Empty parameters count as absent and a
    /// search wins over a category.
    ///
    /// Returns `None` when the category is unknown: no stored item can match
    /// it.
    pub(crate) fn into_filter(self) -> Option<ItemFilter> {
        let search = self.search.filter(|text| !text.is_empty());
        let item_type = self.item_type.filter(|text| !text.is_empty());
        match (search, item_type) {
            (Some(query), _) => Some(ItemFilter::Search(query)),
            (None, Some(raw)) => raw.parse::<ItemType>().ok().map(ItemFilter::Type),
            (None, None) => Some(ItemFilter::All),
        }
    }
}

/// Confirmation returned by the delete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn parse_item_type(errors: &mut FieldErrors, raw: Option<String>) -> Option<ItemType> {
    raw.and_then(|raw| errors.vocabulary(TYPE, &raw, ItemType::ALL))
}

fn parse_condition(errors: &mut FieldErrors, raw: Option<Value>) -> Option<ItemCondition> {
    errors
        .optional_text(CONDITION, raw)
        .and_then(|raw| errors.vocabulary(CONDITION, &raw, ItemCondition::ALL))
}

/// Validate a create payload.
///
/// Empty `description` and `coverImage` strings are stored as absent.
pub(crate) fn validate_new_item(payload: ItemRequest) -> Result<NewItem, Error> {
    let ItemRequest {
        name,
        item_type,
        condition,
        description,
        cover_image,
        additional_images,
    } = payload;

    let mut errors = FieldErrors::new();
    let name = errors.required_text(NAME, name, NAME_REQUIRED);
    let item_type = errors.required_text(TYPE, item_type, TYPE_REQUIRED);
    let item_type = parse_item_type(&mut errors, item_type);
    let condition = parse_condition(&mut errors, condition);
    let description = errors.optional_text(DESCRIPTION, description);
    let cover_image = errors.optional_text(COVER_IMAGE, cover_image);
    let additional_images = errors.optional_text_list(ADDITIONAL_IMAGES, additional_images);

    match (name, item_type) {
        (Some(name), Some(item_type)) => errors.finish(NewItem {
            name,
            item_type,
            condition: condition.unwrap_or_default(),
            description: non_empty(description),
            cover_image: non_empty(cover_image),
            additional_images,
        }),
        _ => Err(errors.into_error()),
    }
}

/// Validate a partial update payload. Absent fields stay unchanged.
pub(crate) fn validate_item_changes(payload: ItemRequest) -> Result<ItemChanges, Error> {
    let ItemRequest {
        name,
        item_type,
        condition,
        description,
        cover_image,
        additional_images,
    } = payload;

    let mut errors = FieldErrors::new();
    let name = errors.optional_non_blank_text(NAME, name, NAME_REQUIRED);
    let item_type = errors.optional_non_blank_text(TYPE, item_type, TYPE_REQUIRED);
    let item_type = parse_item_type(&mut errors, item_type);
    let condition = parse_condition(&mut errors, condition);
    let description = errors.optional_text(DESCRIPTION, description);
    let cover_image = errors.optional_text(COVER_IMAGE, cover_image);
    let additional_images = errors.optional_text_list(ADDITIONAL_IMAGES, additional_images);

    errors.finish(ItemChanges {
        name,
        item_type,
        condition,
        description,
        cover_image,
        additional_images,
    })
}

/// Parse a path identifier. Anything that is not an integer cannot name a
/// stored item.
pub(crate) fn parse_item_id(raw: &str) -> Option<ItemId> {
    raw.parse::<i64>().ok().map(ItemId::new)
}
