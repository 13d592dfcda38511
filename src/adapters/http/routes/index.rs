use axum::{Router, extract::State, routing::get};

use crate::adapters::http::app_state::AppState;

/// GET /
async fn greeting(State(app_state): State<AppState>) -> &'static str {
    if app_state.config.excited {
        "Hello!!!!!"
    } else {
        "Hello"
    }
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}
