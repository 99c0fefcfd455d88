//! Shared helpers for the HTTP integration suites.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module assembles the same application the binary serves, backed by a fresh
//! in-memory store per test.
#![allow(dead_code, reason = "each suite uses a subset of the helpers")]

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::test::TestRequest;
use actix_web::{App, web};
use inventory_backend::Trace;
use inventory_backend::domain::InventoryService;
use inventory_backend::inbound::http::error::json_error_handler;
use inventory_backend::inbound::http::items::{
    create_item, delete_item, get_item, list_items, update_item,
};
use inventory_backend::inbound::http::state::HttpState;
use inventory_backend::inbound::http::stats::get_stats;
use inventory_backend::outbound::memory::MemoryStore;
use mockable::Clock;
use serde_json::Value;

/// Build handler state over an empty store stamped by `clock`.
pub fn memory_state(clock: Arc<dyn Clock>) -> HttpState {
    let store = Arc::new(MemoryStore::new(clock.clone()));
    HttpState::from_service(Arc::new(InventoryService::new(store, clock)))
}

/// Assemble the `/api` routes with request tracing and the JSON error
/// envelope, as the server does.
pub fn inventory_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(
            web::scope("/api")
                .service(list_items)
                .service(get_item)
                .service(create_item)
                .service(update_item)
                .service(delete_item)
                .service(get_stats),
        )
}

pub fn post_item(body: Value) -> TestRequest {
    TestRequest::post().uri("/api/items").set_json(body)
}

pub fn put_item(id: i64, body: Value) -> TestRequest {
    TestRequest::put()
        .uri(&format!("/api/items/{id}"))
        .set_json(body)
}

pub fn delete_item_request(id: i64) -> TestRequest {
    TestRequest::delete().uri(&format!("/api/items/{id}"))
}

pub fn list_request(query: &str) -> TestRequest {
    TestRequest::get().uri(&format!("/api/items{query}"))
}
