//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (items,
//! stats, health) together with the request/response DTO schemas and the
//! domain error wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]).
//!
//! The generated document backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::items_dto::{ItemRequest, ItemResponse, MessageResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::stats::StatsResponse;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory backend API",
        description = "CRUD access to inventory items, dashboard statistics and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::stats::get_stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ItemRequest,
        ItemResponse,
        MessageResponse,
        StatsResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "items", description = "Inventory item records"),
        (name = "stats", description = "Aggregate inventory counts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
