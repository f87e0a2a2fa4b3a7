/// Burger endpoint tests against the in-memory backend
///
/// Tests cover:
/// - Derived price on every read
/// - Topping attach/detach semantics
/// - Cascade when a topping is deleted
/// - Health endpoint
mod utils;

use axum::http::StatusCode;
use futures::future::join_all;
use serde_json::json;
use utils::factories::{BurgerFactory, ToppingFactory};
use utils::helpers::{delete, get, in_memory_app, post, post_empty, put};

#[tokio::test]
async fn deleting_topping_lowers_burger_price() {
    let app = in_memory_app();

    let bacon = post(&app, "/toppings", ToppingFactory::new("Bacon").price(4.0).build()).await;
    assert_eq!(bacon.json()["id"], 1);

    let created = post(
        &app,
        "/burgers",
        BurgerFactory::new("Duplo").base_price(15.0).toppings(&[1]).build(),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.location(), Some("/burgers/1"));

    let body = created.json();
    assert_eq!(body["calculatedPrice"], json!(19.0));
    assert_eq!(body["basePrice"], json!(15.0));
    assert_eq!(body["toppings"][0]["name"], "Bacon");

    assert_eq!(delete(&app, "/toppings/1").await.status, StatusCode::NO_CONTENT);

    let burger = get(&app, "/burgers/1").await.json();
    assert_eq!(burger["toppings"], json!([]));
    assert_eq!(burger["calculatedPrice"], json!(15.0));
}

#[tokio::test]
async fn burger_without_toppings_costs_base_price() {
    let app = in_memory_app();

    let body = post(&app, "/burgers", BurgerFactory::new("Simples").base_price(9.9).build())
        .await
        .json();
    assert_eq!(body["calculatedPrice"], json!(9.9));
    assert_eq!(body["toppings"], json!([]));
}

#[tokio::test]
async fn null_topping_ids_create_plain_burger() {
    let app = in_memory_app();

    let response = post(
        &app,
        "/burgers",
        json!({ "name": "X", "basePrice": 1.0, "toppingIds": null }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let body = response.json();
    assert_eq!(body["toppings"], json!([]));
    assert_eq!(body["calculatedPrice"], json!(1.0));
}

#[tokio::test]
async fn create_ignores_unknown_and_duplicate_topping_ids() {
    let app = in_memory_app();
    post(&app, "/toppings", ToppingFactory::new("Queijo").price(3.0).build()).await;
    post(&app, "/toppings", ToppingFactory::new("Bacon").price(4.5).build()).await;

    let body = post(
        &app,
        "/burgers",
        BurgerFactory::new("Duplo").base_price(15.0).toppings(&[2, 999, 1, 2]).build(),
    )
    .await
    .json();

    let ids: Vec<i64> = body["toppings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(body["calculatedPrice"], json!(22.5));
}

#[tokio::test]
async fn attach_is_idempotent() {
    let app = in_memory_app();
    post(&app, "/toppings", ToppingFactory::new("Bacon").price(4.0).build()).await;
    post(&app, "/burgers", BurgerFactory::new("Duplo").base_price(15.0).build()).await;

    assert_eq!(
        post_empty(&app, "/burgers/1/toppings/1").await.status,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        post_empty(&app, "/burgers/1/toppings/1").await.status,
        StatusCode::NO_CONTENT
    );

    let burger = get(&app, "/burgers/1").await.json();
    assert_eq!(burger["toppings"].as_array().unwrap().len(), 1);
    assert_eq!(burger["calculatedPrice"], json!(19.0));
}

#[tokio::test]
async fn concurrent_attach_yields_one_relation() {
    let app = in_memory_app();
    post(&app, "/toppings", ToppingFactory::new("Bacon").price(4.0).build()).await;
    post(&app, "/burgers", BurgerFactory::new("Duplo").base_price(15.0).build()).await;

    let responses = join_all((0..10).map(|_| post_empty(&app, "/burgers/1/toppings/1"))).await;
    assert!(responses.iter().all(|r| r.status == StatusCode::NO_CONTENT));

    let burger = get(&app, "/burgers/1").await.json();
    assert_eq!(burger["toppings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn attach_unknown_ids_is_404() {
    let app = in_memory_app();
    post(&app, "/toppings", ToppingFactory::new("Bacon").build()).await;
    post(&app, "/burgers", BurgerFactory::new("Duplo").build()).await;

    let missing_topping = post_empty(&app, "/burgers/1/toppings/999").await;
    assert_eq!(missing_topping.status, StatusCode::NOT_FOUND);
    assert!(missing_topping.body.is_empty());

    assert_eq!(
        post_empty(&app, "/burgers/999/toppings/1").await.status,
        StatusCode::NOT_FOUND
    );

    let burger = get(&app, "/burgers/1").await.json();
    assert_eq!(burger["toppings"], json!([]));
}

#[tokio::test]
async fn detach_missing_relation_is_404_repeatedly() {
    let app = in_memory_app();
    post(&app, "/toppings", ToppingFactory::new("Bacon").build()).await;
    post(&app, "/burgers", BurgerFactory::new("Duplo").toppings(&[1]).build()).await;

    assert_eq!(
        delete(&app, "/burgers/1/toppings/1").await.status,
        StatusCode::NO_CONTENT
    );
    for _ in 0..2 {
        assert_eq!(
            delete(&app, "/burgers/1/toppings/1").await.status,
            StatusCode::NOT_FOUND
        );
    }
    assert_eq!(
        delete(&app, "/burgers/999/toppings/1").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn update_changes_name_and_price_only() {
    let app = in_memory_app();
    post(&app, "/toppings", ToppingFactory::new("Bacon").price(4.0).build()).await;
    post(&app, "/burgers", BurgerFactory::new("Duplo").base_price(15.0).toppings(&[1]).build()).await;

    let response = put(
        &app,
        "/burgers/1",
        json!({ "id": 1, "name": "Duplo Especial", "basePrice": 17.5 }),
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let burger = get(&app, "/burgers/1").await.json();
    assert_eq!(burger["name"], "Duplo Especial");
    assert_eq!(burger["toppings"].as_array().unwrap().len(), 1);
    assert_eq!(burger["calculatedPrice"], json!(21.5));

    let mismatch = put(&app, "/burgers/1", json!({ "id": 9, "name": "X", "basePrice": 1.0 })).await;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);

    let missing = put(&app, "/burgers/9", json!({ "name": "X", "basePrice": 1.0 })).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_burger_is_rejected() {
    let app = in_memory_app();

    let response = post(&app, "/burgers", json!({ "name": " ", "basePrice": 10000.0 })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body = response.json();
    assert!(body["errors"]["name"].is_array());
    assert!(body["errors"]["basePrice"].is_array());
    assert_eq!(get(&app, "/burgers").await.json(), json!([]));
}

#[tokio::test]
async fn null_burger_name_is_reported_as_required() {
    let app = in_memory_app();

    let response = post(&app, "/burgers", json!({ "name": null, "basePrice": 10.0 })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"]["name"], json!(["This field is required"]));
}

#[tokio::test]
async fn delete_burger_then_404() {
    let app = in_memory_app();
    post(&app, "/toppings", ToppingFactory::new("Bacon").build()).await;
    post(&app, "/burgers", BurgerFactory::new("Duplo").toppings(&[1]).build()).await;

    assert_eq!(delete(&app, "/burgers/1").await.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, "/burgers/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, "/burgers/1").await.status, StatusCode::NOT_FOUND);

    // The topping itself survives
    assert_eq!(get(&app, "/toppings/1").await.status, StatusCode::OK);
}

#[tokio::test]
async fn listing_includes_derived_prices() {
    let app = in_memory_app();
    post(&app, "/toppings", ToppingFactory::new("Bacon").price(4.0).build()).await;
    post(&app, "/burgers", BurgerFactory::new("A").base_price(10.0).build()).await;
    post(&app, "/burgers", BurgerFactory::new("B").base_price(12.0).toppings(&[1]).build()).await;

    let burgers = get(&app, "/burgers").await.json();
    let prices: Vec<f64> = burgers
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["calculatedPrice"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![10.0, 16.0]);
}

#[tokio::test]
async fn health_reports_storage_backend() {
    let app = in_memory_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "status": "ok", "storage": "in-memory" }));
}
