//! axum server answering with the JSON helpers.
//!
//! ```bash
//! RUST_LOG=respond=debug cargo run --example json_server
//! curl -i localhost:8080/users/1
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use respond::axum_ext::Json;
use respond::{HttpError, Renderer, Response, logging};
use serde::Serialize;

#[derive(Serialize)]
struct User {
    id: u32,
    name: &'static str,
}

static USERS: [User; 2] = [
    User { id: 1, name: "Ada" },
    User { id: 2, name: "Grace" },
];

// --- Handlers ---

async fn health(State(renderer): State<Renderer>) -> Response {
    let mut res = Response::new();
    renderer.ok(&mut res);
    res
}

async fn list_users(State(renderer): State<Renderer>) -> Response {
    let mut res = Response::new();
    renderer.okay(&mut res, &USERS);
    res
}

async fn get_user(Path(id): Path<String>) -> Result<Json<&'static User>, HttpError> {
    let id: u32 = id
        .parse()
        .map_err(|_| HttpError::BadRequest("user id must be a number".into()))?;
    USERS
        .iter()
        .find(|u| u.id == id)
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("User {id} not found")))
}

async fn create_user() -> (StatusCode, Json<User>) {
    (StatusCode::CREATED, Json(User { id: 3, name: "Linus" }))
}

async fn delete_user() -> HttpError {
    HttpError::Forbidden(String::new())
}

async fn fallback() -> HttpError {
    HttpError::NotFound(String::new())
}

fn app(renderer: Renderer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .fallback(fallback)
        .with_state(renderer)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    logging::init_logging();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(Renderer::from_env())).await
}
