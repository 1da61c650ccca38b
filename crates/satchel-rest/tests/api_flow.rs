//! End-to-end tests for the HTTP surface, driven through the router with
//! in-memory repositories and cache.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use satchel_config::{SecurityConfig, ServerConfig};
use satchel_core::{ItemId, SatchelResult, UserId};
use satchel_domain::{Item, User};
use satchel_repository::{ItemRepository, UserRepository};
use satchel_rest::{create_router, middleware::AuthGateState, AppState};
use satchel_security::{PasswordHasher, TokenProvider};
use satchel_service::{AuthServiceImpl, CacheInterface, ItemServiceImpl};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    save_calls: Mutex<u32>,
}

impl InMemoryUserRepository {
    fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            save_calls: Mutex::new(0),
        }
    }

    fn save_calls(&self) -> u32 {
        *self.save_calls.lock().unwrap()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> SatchelResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> SatchelResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> SatchelResult<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.username == username))
    }

    async fn save(&self, user: &User) -> SatchelResult<User> {
        *self.save_calls.lock().unwrap() += 1;
        self.users.lock().unwrap().push(user.clone());
        Ok(user.clone())
    }
}

struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
    save_calls: Mutex<u32>,
}

impl InMemoryItemRepository {
    fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            save_calls: Mutex::new(0),
        }
    }

    fn save_calls(&self) -> u32 {
        *self.save_calls.lock().unwrap()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_by_id(&self, id: ItemId) -> SatchelResult<Option<Item>> {
        Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn find_all(&self) -> SatchelResult<Vec<Item>> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn save(&self, item: &Item) -> SatchelResult<Item> {
        *self.save_calls.lock().unwrap() += 1;
        self.items.lock().unwrap().push(item.clone());
        Ok(item.clone())
    }

    async fn update(&self, item: &Item) -> SatchelResult<bool> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ItemId) -> SatchelResult<bool> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() < before)
    }
}

struct InMemoryCache {
    store: Mutex<HashMap<String, String>>,
}

impl InMemoryCache {
    fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    async fn get_raw(&self, key: &str) -> SatchelResult<Option<String>> {
        Ok(self.store.lock().unwrap().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str, _ttl: Duration) -> SatchelResult<()> {
        self.store
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> SatchelResult<bool> {
        Ok(self.store.lock().unwrap().remove(key).is_some())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

struct TestApp {
    router: Router,
    user_repo: Arc<InMemoryUserRepository>,
    item_repo: Arc<InMemoryItemRepository>,
}

fn test_app() -> TestApp {
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let item_repo = Arc::new(InMemoryItemRepository::new());
    let cache: Arc<dyn CacheInterface> = Arc::new(InMemoryCache::new());

    let hasher = Arc::new(PasswordHasher::new());
    let token_provider = Arc::new(TokenProvider::new(Arc::new(SecurityConfig {
        jwt_secret: "test-secret-key-for-testing-only".to_string(),
        jwt_expiration_secs: 3600,
    })));

    let auth_service = Arc::new(AuthServiceImpl::new(
        user_repo.clone(),
        hasher,
        token_provider.clone(),
    ));
    let item_service = Arc::new(ItemServiceImpl::new(
        item_repo.clone(),
        cache,
        Duration::from_secs(3600),
    ));

    let state = AppState::new(auth_service, item_service);
    let auth_state = AuthGateState::new(token_provider);
    let router = create_router(state, auth_state, &ServerConfig::default());

    TestApp {
        router,
        user_repo,
        item_repo,
    }
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register_and_login(router: &Router, username: &str, password: &str) -> String {
    let (status, _) = send(
        router,
        request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"username": username, "password": password})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        router,
        request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"username": username, "password": password})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], username);

    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_full_crud_flow() {
    let app = test_app();
    let token = register_and_login(&app.router, "ash01", "pikachu").await;

    // Create
    let (status, created) = send(
        &app.router,
        request(
            Method::POST,
            "/api/items",
            Some(&token),
            Some(json!({"name": "Potion", "category": "Item"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Potion");
    assert_eq!(created["category"], "Item");
    let id = created["id"].as_str().unwrap().to_string();
    assert!(created["created_at"].is_string());

    // List includes the new item
    let (status, listed) = send(
        &app.router,
        request(Method::GET, "/api/items", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Get by id returns the created payload
    let uri = format!("/api/items/{}", id);
    let (status, fetched) = send(&app.router, request(Method::GET, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Partial update changes category, keeps name
    let (status, updated) = send(
        &app.router,
        request(
            Method::PUT,
            &uri,
            Some(&token),
            Some(json!({"category": "Consumable"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Potion");
    assert_eq!(updated["category"], "Consumable");

    // Subsequent reads reflect the update, never the stale cached value
    let (_, refetched) = send(&app.router, request(Method::GET, &uri, Some(&token), None)).await;
    assert_eq!(refetched["category"], "Consumable");

    let (_, relisted) = send(
        &app.router,
        request(Method::GET, "/api/items", Some(&token), None),
    )
    .await;
    assert_eq!(relisted[0]["category"], "Consumable");

    // Delete, then reads miss
    let (status, deleted) =
        send(&app.router, request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(deleted["message"].is_string());

    let (status, _) = send(&app.router, request(Method::GET, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, empty) = send(
        &app.router,
        request(Method::GET, "/api/items", Some(&token), None),
    )
    .await;
    assert!(empty.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_validation_failure_touches_no_store() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"username": "ash01", "password": "pika"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "password"));
    assert_eq!(app.user_repo.save_calls(), 0);
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let app = test_app();

    let payload = json!({"username": "ash01", "password": "pikachu"});
    let (status, _) = send(
        &app.router,
        request(Method::POST, "/api/auth/register", None, Some(payload.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app.router,
        request(Method::POST, "/api/auth/register", None, Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_USER");
    assert_eq!(app.user_repo.save_calls(), 1);
}

#[tokio::test]
async fn test_login_failures_share_one_shape() {
    let app = test_app();
    register_and_login(&app.router, "ash01", "pikachu").await;

    let (wrong_status, wrong_body) = send(
        &app.router,
        request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"username": "ash01", "password": "raichu"})),
        ),
    )
    .await;

    let (unknown_status, unknown_body) = send(
        &app.router,
        request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"username": "gary02", "password": "pikachu"})),
        ),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    // Identical bodies: the response does not reveal which accounts exist.
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_protected_routes_reject_unauthenticated_requests() {
    let app = test_app();

    for (method, uri) in [
        (Method::POST, "/api/items"),
        (Method::GET, "/api/items"),
        (Method::GET, "/api/items/some-id"),
        (Method::PUT, "/api/items/some-id"),
        (Method::DELETE, "/api/items/some-id"),
    ] {
        let body = (method == Method::POST || method == Method::PUT)
            .then(|| json!({"name": "Potion", "category": "Item"}));
        let (status, _) = send(&app.router, request(method, uri, None, body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    // No mutation ever reached the store.
    assert_eq!(app.item_repo.save_calls(), 0);
}

#[tokio::test]
async fn test_create_item_validation_failure() {
    let app = test_app();
    let token = register_and_login(&app.router, "ash01", "pikachu").await;

    let (status, body) = send(
        &app.router,
        request(
            Method::POST,
            "/api/items",
            Some(&token),
            Some(json!({"name": "", "category": ""})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(app.item_repo.save_calls(), 0);
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_return_not_found() {
    let app = test_app();
    let token = register_and_login(&app.router, "ash01", "pikachu").await;

    let missing = format!("/api/items/{}", ItemId::new());
    let (status, _) = send(&app.router, request(Method::GET, &missing, Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app.router,
        request(Method::GET, "/api/items/not-a-uuid", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoints_are_open() {
    let app = test_app();

    let (status, body) = send(&app.router, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = send(&app.router, request(Method::GET, "/live", None, None)).await;
    assert_eq!(status, StatusCode::OK);
}
