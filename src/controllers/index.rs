use axum::Json;
use serde_json::{json, Value};

pub async fn get_index() -> Json<Value> {
    Json(json!({ "message": "Welcome to the GitHub relay server" }))
}
