// tests/support/helpers.rs
use axum::body::Body;
use axum::extract::{Path, Query};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use restdocs_dsl::application::dto::Exchange;
use restdocs_dsl::infrastructure::capture::capture;
use serde::Deserialize;
use serde_json::{Value, json};

pub const BEARER: &str = "Bearer test-token";

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub role: String,
}

async fn get_user(Path(id): Path<u64>) -> impl IntoResponse {
    if id == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": "USER_NOT_FOUND", "message": "no such user" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": id,
            "name": "kim",
            "role": "ADMIN",
            "joinedAt": "2024-01-01",
            "tags": [{ "label": "beer" }]
        })),
    )
}

async fn list_users(Query(params): Query<ListParams>) -> Json<Value> {
    Json(json!({
        "page": params.page.unwrap_or(0),
        "size": params.size.unwrap_or(20),
        "items": [{ "id": 1, "name": "kim" }]
    }))
}

async fn create_user(Json(body): Json<CreateUser>) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(json!({ "id": 7, "name": body.name, "role": body.role })),
    )
}

/// Small users API used as the documented service.
pub fn users_router() -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::HOST, "localhost:8080")
        .header(header::AUTHORIZATION, BEARER)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost:8080")
        .header(header::AUTHORIZATION, BEARER)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Capture one exchange against [`users_router`].
pub async fn exchange(request: Request<Body>, template: &str) -> Exchange {
    capture(users_router(), request)
        .await
        .expect("capture exchange")
        .with_url_template(template)
}
