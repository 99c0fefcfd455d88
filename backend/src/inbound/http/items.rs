//! Item HTTP handlers.
//!
//! ```text
//! GET /api/items?search=&type=
//! GET /api/items/{id}
//! POST /api/items
//! PUT /api/items/{id}
//! DELETE /api/items/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::debug;

use crate::domain::{Error, ITEM_NOT_FOUND_MESSAGE, ItemId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::items_dto::{
    ItemListQuery, ItemRequest, ItemResponse, MessageResponse, parse_item_id,
    validate_item_changes, validate_new_item,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Confirmation message returned after a delete.
pub const ITEM_DELETED_MESSAGE: &str = "Item deleted successfully";

fn item_id_from_path(raw: &str) -> Result<ItemId, Error> {
    parse_item_id(raw).ok_or_else(|| {
        debug!(raw_id = raw, "unparsable item id");
        Error::not_found(ITEM_NOT_FOUND_MESSAGE)
    })
}

/// List items, newest first.
///
/// A non-empty `search` runs a case-insensitive match over name, description
/// and category; otherwise a non-empty `type` filters by category.
#[utoipa::path(
    get,
    path = "/api/items",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive text to match"),
        ("type" = Option<String>, Query, description = "Category to filter by; ignored when search is set")
    ),
    responses(
        (status = 200, description = "Matching items", body = [ItemResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(
    state: web::Data<HttpState>,
    query: web::Query<ItemListQuery>,
) -> ApiResult<web::Json<Vec<ItemResponse>>> {
    let Some(filter) = query.into_inner().into_filter() else {
        return Ok(web::Json(Vec::new()));
    };
    let items = state.items.list_items(filter).await?;
    Ok(web::Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Fetch one item.
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = item_id_from_path(&path)?;
    let item = state.items.fetch_item(id).await?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Create an item.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<ItemRequest>,
) -> ApiResult<HttpResponse> {
    let new_item = validate_new_item(payload.into_inner())?;
    let item = state.items_command.create_item(new_item).await?;
    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

/// Apply a partial update to an item.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Updated item", body = ItemResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ItemRequest>,
) -> ApiResult<web::Json<ItemResponse>> {
    let changes = validate_item_changes(payload.into_inner())?;
    let id = item_id_from_path(&path)?;
    let item = state.items_command.update_item(id, changes).await?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = item_id_from_path(&path)?;
    state.items_command.delete_item(id).await?;
    Ok(web::Json(MessageResponse::new(ITEM_DELETED_MESSAGE)))
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
