//! Inventory statistics endpoint.
//!
//! ```text
//! GET /api/stats
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ItemStats;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Dashboard counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[schema(example = 4)]
    pub total_items: usize,
    /// Number of distinct categories in use.
    #[schema(example = 3)]
    pub categories: usize,
    /// Items added during the last seven days.
    #[schema(example = 2)]
    pub recent_additions: usize,
}

impl From<ItemStats> for StatsResponse {
    fn from(stats: ItemStats) -> Self {
        Self {
            total_items: stats.total_items,
            categories: stats.categories,
            recent_additions: stats.recent_additions,
        }
    }
}

/// Summarise the current inventory.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Inventory statistics", body = StatsResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "getStats"
)]
#[get("/stats")]
pub async fn get_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<StatsResponse>> {
    let stats = state.stats.fetch_stats().await?;
    Ok(web::Json(StatsResponse::from(stats)))
}
