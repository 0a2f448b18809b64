//! In-memory stand-in for the Books REST API.
//!
//! Serves the same four routes as the deployed gateway so the browser front
//! end and the HTTP client can be exercised locally.

use anyhow::Context;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
};
use serde::Serialize;
use shelf_api_types::{Book, BookId, DeleteBookRequest, ErrorResponse, NewBook, routes};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub const ADDR_ENV: &str = "BOOKSHELF_DEV_ADDR";
pub const TOKEN_ENV: &str = "BOOKSHELF_DEV_TOKEN";

pub type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

#[derive(Debug, Clone)]
pub struct DevConfig {
    pub addr: SocketAddr,
    pub token: Option<String>,
}

impl DevConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = match std::env::var(ADDR_ENV) {
            Ok(value) if !value.trim().is_empty() => value
                .trim()
                .parse()
                .with_context(|| format!("invalid {ADDR_ENV} '{value}'"))?,
            _ => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());
        Ok(Self { addr, token })
    }
}

#[derive(Debug, Default)]
struct Shelf {
    last_id: i64,
    books: Vec<Book>,
}

#[derive(Clone, Default)]
pub struct DevState {
    shelf: Arc<Mutex<Shelf>>,
    token: Option<String>,
}

impl DevState {
    /// With `token` set, `Authorization` must match it exactly; otherwise any
    /// non-empty value is accepted.
    pub fn new(token: Option<String>) -> Self {
        Self {
            shelf: Arc::default(),
            token,
        }
    }

    pub fn books(&self) -> anyhow::Result<Vec<Book>> {
        let shelf = self
            .shelf
            .lock()
            .map_err(|err| anyhow::anyhow!("shelf lock poisoned: {err}"))?;
        Ok(shelf.books.clone())
    }

    pub fn insert(&self, book: NewBook) -> anyhow::Result<Book> {
        let mut shelf = self
            .shelf
            .lock()
            .map_err(|err| anyhow::anyhow!("shelf lock poisoned: {err}"))?;
        shelf.last_id += 1;
        let book = book.with_id(BookId::Number(shelf.last_id));
        shelf.books.push(book.clone());
        Ok(book)
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

pub fn router(state: DevState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(routes::LIST, get(list_books))
        .route(routes::CREATE, post(create_book))
        .route(routes::UPDATE, put(update_book))
        .route(routes::DELETE, delete(delete_book))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "shelf-dev-api",
        status: "ok",
    })
}

async fn list_books(State(state): State<DevState>, headers: HeaderMap) -> ApiResult<Vec<Book>> {
    authorize(&state, &headers)?;
    let books = state.books().map_err(internal_error)?;
    Ok(Json(books))
}

async fn create_book(
    State(state): State<DevState>,
    headers: HeaderMap,
    Json(request): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), (StatusCode, Json<ErrorResponse>)> {
    authorize(&state, &headers)?;
    require_fields(&request.name, &request.author)?;

    let book = state.insert(request).map_err(internal_error)?;
    info!("created book {}: {}", book.id, book.summary());
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book(
    State(state): State<DevState>,
    headers: HeaderMap,
    Json(request): Json<Book>,
) -> ApiResult<Book> {
    authorize(&state, &headers)?;
    require_fields(&request.name, &request.author)?;

    let mut shelf = state.shelf.lock().map_err(internal_error)?;
    let slot = shelf
        .books
        .iter_mut()
        .find(|book| book.id == request.id)
        .ok_or_else(|| not_found("book not found"))?;
    *slot = request.clone();

    info!("updated book {}: {}", request.id, request.summary());
    Ok(Json(request))
}

async fn delete_book(
    State(state): State<DevState>,
    headers: HeaderMap,
    Json(request): Json<DeleteBookRequest>,
) -> ApiResult<DeleteBookRequest> {
    authorize(&state, &headers)?;

    let mut shelf = state.shelf.lock().map_err(internal_error)?;
    let before = shelf.books.len();
    shelf.books.retain(|book| book.id != request.id);
    if shelf.books.len() == before {
        return Err(not_found("book not found"));
    }

    info!("deleted book {}", request.id);
    Ok(Json(request))
}

fn authorize(state: &DevState, headers: &HeaderMap) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    let value = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "null")
        .ok_or_else(|| unauthorized("missing Authorization header"))?;

    if let Some(expected) = &state.token {
        if value != expected {
            warn!("rejected request with unexpected token");
            return Err(unauthorized("invalid token"));
        }
    }

    Ok(())
}

fn require_fields(name: &str, author: &str) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    if name.is_empty() {
        return Err(bad_request("Name is required"));
    }
    if author.is_empty() {
        return Err(bad_request("Author is required"));
    }
    Ok(())
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

fn not_found(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

fn internal_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_token_is_rejected() {
        let app = router(DevState::default());
        let response = app
            .oneshot(request("GET", routes::LIST, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn configured_token_must_match() {
        let app = router(DevState::new(Some("good".to_owned())));
        let response = app
            .clone()
            .oneshot(request("GET", routes::LIST, Some("bad"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(request("GET", routes::LIST, Some("good"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn created_books_are_listed_with_sequential_ids() {
        let app = router(DevState::default());

        for (name, author) in [("Dune", "Herbert"), ("Emma", "Austen")] {
            let response = app
                .clone()
                .oneshot(request(
                    "POST",
                    routes::CREATE,
                    Some("tok"),
                    Some(json!({ "Name": name, "Author": author })),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(request("GET", routes::LIST, Some("tok"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!([
                { "ID": 1, "Name": "Dune", "Author": "Herbert" },
                { "ID": 2, "Name": "Emma", "Author": "Austen" },
            ])
        );
    }

    #[tokio::test]
    async fn empty_fields_are_bad_requests() {
        let app = router(DevState::default());
        let response = app
            .oneshot(request(
                "POST",
                routes::CREATE,
                Some("tok"),
                Some(json!({ "Name": "", "Author": "Herbert" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn whitespace_fields_are_stored_as_sent() {
        let state = DevState::default();
        let app = router(state.clone());
        let response = app
            .oneshot(request(
                "POST",
                routes::CREATE,
                Some("tok"),
                Some(json!({ "Name": " ", "Author": "Herbert" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.books().unwrap(), vec![Book::new(1, " ", "Herbert")]);
    }

    #[tokio::test]
    async fn poisoned_shelf_lists_as_internal_error() {
        let state = DevState::default();
        let shelf = state.shelf.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shelf.lock().unwrap();
            panic!("poison the shelf lock");
        })
        .join();

        assert!(state.books().is_err());
        let response = router(state)
            .oneshot(request("GET", routes::LIST, Some("tok"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert!(
            body["error"].as_str().unwrap().contains("poisoned"),
            "{body}"
        );
    }

    #[tokio::test]
    async fn update_and_delete_by_id() {
        let state = DevState::default();
        state
            .insert(NewBook {
                name: "Dune".to_owned(),
                author: "Herbert".to_owned(),
            })
            .unwrap();
        let app = router(state.clone());

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                routes::UPDATE,
                Some("tok"),
                Some(json!({ "ID": 1, "Name": "Dune Messiah", "Author": "Frank Herbert" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.books().unwrap(), vec![Book::new(1, "Dune Messiah", "Frank Herbert")]);

        let response = app
            .clone()
            .oneshot(request("DELETE", routes::DELETE, Some("tok"), Some(json!({ "ID": 1 }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.books().unwrap().is_empty());

        let response = app
            .oneshot(request("DELETE", routes::DELETE, Some("tok"), Some(json!({ "ID": 1 }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
