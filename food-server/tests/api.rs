use axum::Router;
use axum::body::Body;
use food_server::db::DbService;
use food_server::{
    Config, ConfigGreeter, InMemoryStore, RestaurantStore, ServerState, SqliteStore, StoreBackend,
    build_app,
};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::{CuisineType, Restaurant};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with_store(store: Arc<dyn RestaurantStore>) -> Router {
    let config = Config::with_overrides(0, StoreBackend::Memory, None);
    let greeter = Arc::new(ConfigGreeter::new(&config));
    build_app(ServerState::new(config, store, greeter))
}

async fn sqlite_store() -> Arc<SqliteStore> {
    let db = DbService::new("sqlite::memory:").await.unwrap();
    Arc::new(SqliteStore::new(db.pool))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_returns_seed_in_insertion_order() {
    let app = app_with_store(Arc::new(InMemoryStore::new()));
    let (status, body) = send(&app, get("/api/restaurants")).await;
    assert_eq!(status, StatusCode::OK);

    let restaurants: Vec<Restaurant> = serde_json::from_value(body).unwrap();
    assert_eq!(restaurants.len(), 5);
    assert_eq!(restaurants[0].id, 1);
    assert_eq!(restaurants[4].name, "Guido's Authentic Italian");
}

#[tokio::test]
async fn test_get_missing_is_404_error_body() {
    let app = app_with_store(Arc::new(InMemoryStore::new()));
    let (status, body) = send(&app, get("/api/restaurants/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
    assert_eq!(body["message"], "Restaurant 999 not found");
}

#[tokio::test]
async fn test_create_then_get() {
    let app = app_with_store(Arc::new(InMemoryStore::new()));

    let (status, body) = send(
        &app,
        post_json("/api/restaurants", json!({"name": "Test Cafe", "cuisine": "NONE"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created: Restaurant = serde_json::from_value(body).unwrap();
    assert_eq!(created.id, 6);

    let (status, body) = send(&app, get("/api/restaurants/6")).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Restaurant = serde_json::from_value(body).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = app_with_store(Arc::new(InMemoryStore::new()));
    let (status, body) = send(
        &app,
        post_json("/api/restaurants", json!({"id": 1, "name": "Copycat"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 6);
    assert_eq!(body["cuisine"], "NONE");
}

#[tokio::test]
async fn test_create_validation_error() {
    let store = Arc::new(InMemoryStore::new());
    let app = app_with_store(store.clone());

    let (status, body) = send(
        &app,
        post_json("/api/restaurants", json!({"name": "", "cuisine": "ITALIAN"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert_eq!(store.len(), 5);
}

#[tokio::test]
async fn test_sqlite_backend_orders_by_name() {
    let store = sqlite_store().await;
    let app = app_with_store(store.clone());

    for name in ["Zucca", "Aroma", "Kebab House"] {
        let (status, _) = send(
            &app,
            post_json("/api/restaurants", json!({"name": name, "cuisine": "AMERICAN"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, get("/api/restaurants")).await;
    let names: Vec<String> = serde_json::from_value::<Vec<Restaurant>>(body)
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Aroma", "Kebab House", "Zucca"]);

    let all = store.get_all().await.unwrap();
    assert!(all.iter().all(|r| r.cuisine == CuisineType::American));
}

#[tokio::test]
async fn test_sqlite_concurrent_creates_get_distinct_ids() {
    let store = sqlite_store().await;
    let app = app_with_store(store.clone());

    let requests = (0..20).map(|i| {
        let app = app.clone();
        async move {
            send(
                &app,
                post_json("/api/restaurants", json!({"name": format!("Stall {i}")})),
            )
            .await
        }
    });
    let results = futures::future::join_all(requests).await;

    let mut ids: Vec<i64> = results
        .into_iter()
        .map(|(status, body)| {
            assert_eq!(status, StatusCode::OK);
            body["id"].as_i64().unwrap()
        })
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_health_reports_store_kind() {
    let app = app_with_store(sqlite_store().await);

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "sqlite");

    let (status, body) = send(&app, get("/health/detailed")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["store"]["records"], 0);
}

#[tokio::test]
async fn test_health_degraded_when_store_fails() {
    let store = sqlite_store().await;
    store.pool().close().await;
    let app = app_with_store(store);

    let (_, body) = send(&app, get("/health/detailed")).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");

    let (status, body) = send(&app, get("/api/restaurants")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "E9002");
    assert_eq!(body["message"], "Database error");
}
