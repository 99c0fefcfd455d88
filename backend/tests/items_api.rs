//! End-to-end behaviour of the `/api/items` endpoints over the in-memory
//! store.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::{DateTime, TimeDelta, Utc};
use inventory_backend::domain::TRACE_ID_HEADER;
use inventory_backend::inbound::http::items_dto::ItemResponse;
use inventory_backend::test_support::FixtureClock;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use support::{delete_item_request, inventory_app, list_request, memory_state, post_item, put_item};

#[fixture]
fn clock() -> Arc<FixtureClock> {
    Arc::new(FixtureClock::default())
}

fn names(items: &[ItemResponse]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[actix_web::test]
async fn created_items_get_increasing_ids_and_current_timestamps() {
    let app = test::init_service(inventory_app(memory_state(Arc::new(DefaultClock)))).await;

    let started = Utc::now();
    let mut last_id = 0;
    for name in ["Wool Scarf", "Rain Jacket", "Hiking Boots"] {
        let res = test::call_service(
            &app,
            post_item(json!({"name": name, "type": "outerwear"})).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let item: ItemResponse = test::read_body_json(res).await;
        assert!(item.id > last_id, "{} should exceed {last_id}", item.id);
        last_id = item.id;

        let added = DateTime::parse_from_rfc3339(&item.date_added)
            .expect("rfc3339 timestamp")
            .with_timezone(&Utc);
        // dateAdded is serialised with millisecond precision.
        assert!(added >= started - TimeDelta::milliseconds(1));
        assert!(added <= Utc::now());
    }
}

#[rstest]
#[case(json!({"name": "", "type": "shoes"}), "Item name is required")]
#[case(json!({"name": "Loafers", "type": ""}), "Item type is required")]
#[case(json!({"type": "shoes"}), "Item name is required")]
#[case(json!({"name": 5, "type": "shoes"}), "name must be a string")]
#[case(
    json!({"name": "Loafers", "type": "shoes", "additionalImages": "x"}),
    "additionalImages must be an array of strings"
)]
#[actix_web::test]
async fn invalid_creates_are_rejected_and_not_stored(
    clock: Arc<FixtureClock>,
    #[case] body: Value,
    #[case] expected_message: &str,
) {
    let app = test::init_service(inventory_app(memory_state(clock))).await;

    let res = test::call_service(&app, post_item(body).to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(res).await;
    assert_eq!(error["code"], "invalid_request");
    let messages: Vec<&str> = error["details"]["errors"]
        .as_array()
        .expect("field errors")
        .iter()
        .filter_map(|entry| entry["message"].as_str())
        .collect();
    assert!(messages.contains(&expected_message), "{messages:?}");

    let items: Vec<ItemResponse> =
        test::call_and_read_body_json(&app, list_request("").to_request()).await;
    assert!(items.is_empty());
}

#[rstest]
#[actix_web::test]
async fn listing_returns_newest_first(clock: Arc<FixtureClock>) {
    let app = test::init_service(inventory_app(memory_state(clock.clone()))).await;

    test::call_service(&app, post_item(json!({"name": "A", "type": "shirt"})).to_request()).await;
    clock.advance(TimeDelta::minutes(1));
    test::call_service(&app, post_item(json!({"name": "B", "type": "pant"})).to_request()).await;

    let items: Vec<ItemResponse> =
        test::call_and_read_body_json(&app, list_request("").to_request()).await;
    assert_eq!(names(&items), ["B", "A"]);
}

#[rstest]
#[actix_web::test]
async fn updating_unknown_item_is_not_found_and_creates_nothing(clock: Arc<FixtureClock>) {
    let app = test::init_service(inventory_app(memory_state(clock))).await;

    let res = test::call_service(
        &app,
        put_item(42, json!({"name": "Ghost", "type": "other"})).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let error: Value = test::read_body_json(res).await;
    assert_eq!(error["code"], "not_found");
    assert_eq!(error["message"], "Item not found");

    let items: Vec<ItemResponse> =
        test::call_and_read_body_json(&app, list_request("").to_request()).await;
    assert!(items.is_empty());
}

#[rstest]
#[actix_web::test]
async fn partial_update_changes_only_the_sent_fields(clock: Arc<FixtureClock>) {
    let app = test::init_service(inventory_app(memory_state(clock.clone()))).await;

    let created: ItemResponse = test::call_and_read_body_json(
        &app,
        post_item(json!({
            "name": "Classic Denim Shirt",
            "type": "shirt",
            "condition": "good",
            "description": "old text"
        }))
        .to_request(),
    )
    .await;

    clock.advance(TimeDelta::days(3));
    let res = test::call_service(
        &app,
        put_item(
            created.id,
            json!({
                "id": 999,
                "dateAdded": "2001-01-01T00:00:00.000Z",
                "description": "new text"
            }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: ItemResponse = test::read_body_json(res).await;

    assert_eq!(
        updated,
        ItemResponse {
            description: Some("new text".to_owned()),
            ..created.clone()
        }
    );

    let fetched: ItemResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/items/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, updated);
}

#[rstest]
#[actix_web::test]
async fn deleting_twice_reports_not_found_the_second_time(clock: Arc<FixtureClock>) {
    let app = test::init_service(inventory_app(memory_state(clock))).await;

    let created: ItemResponse = test::call_and_read_body_json(
        &app,
        post_item(json!({"name": "Tennis Racket", "type": "sports-gear"})).to_request(),
    )
    .await;

    let first = test::call_service(&app, delete_item_request(created.id).to_request()).await;
    assert_eq!(first.status(), StatusCode::OK);
    let body: Value = test::read_body_json(first).await;
    assert_eq!(body["message"], "Item deleted successfully");

    let second = test::call_service(&app, delete_item_request(created.id).to_request()).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn search_matches_names_and_types(clock: Arc<FixtureClock>) {
    let app = test::init_service(inventory_app(memory_state(clock.clone()))).await;

    for (name, item_type) in [
        ("Running Shoes", "other"),
        ("Loafers", "shoes"),
        ("Denim Shirt", "shirt"),
    ] {
        test::call_service(
            &app,
            post_item(json!({"name": name, "type": item_type})).to_request(),
        )
        .await;
        clock.advance(TimeDelta::seconds(1));
    }

    let found: Vec<ItemResponse> =
        test::call_and_read_body_json(&app, list_request("?search=shoe").to_request()).await;
    assert_eq!(names(&found), ["Loafers", "Running Shoes"]);

    let shirts: Vec<ItemResponse> =
        test::call_and_read_body_json(&app, list_request("?type=shirt").to_request()).await;
    assert_eq!(names(&shirts), ["Denim Shirt"]);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_reported_with_trace_id(clock: Arc<FixtureClock>) {
    let app = test::init_service(inventory_app(memory_state(clock))).await;

    let req = test::TestRequest::post()
        .uri("/api/items")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": \"Scarf\",")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");

    let error: Value = test::read_body_json(res).await;
    assert_eq!(error["code"], "invalid_request");
    assert_eq!(error["message"], "Malformed request body");
    assert_eq!(error["traceId"], trace_id.as_str());
}
