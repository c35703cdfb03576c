use axum::response::Json;
use serde_json::{Value, json};

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Chart Bridge API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/auth",
            "callback": "/callback",
            "charts": "/api/charts",
            "create_playlist": "/api/create_playlist",
            "status": "/api/status",
            "search_track": "/api/search_track"
        }
    }))
}
