//! Hello-world and item echo endpoints

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{Json, Path, Query};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloResponse {
    #[serde(rename = "Hello")]
    pub hello: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item_id: i64,
    pub q: Option<String>,
}

pub fn create_hello_router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_root))
        .route("/items/{item_id}", get(read_item))
}

/// GET /
pub async fn read_root() -> Json<HelloResponse> {
    Json(HelloResponse {
        hello: "World".to_string(),
    })
}

/// GET /items/{item_id}
pub async fn read_item(
    Path(item_id): Path<i64>,
    Query(query): Query<ItemQuery>,
) -> Json<ItemResponse> {
    Json(ItemResponse {
        item_id,
        q: query.q,
    })
}
