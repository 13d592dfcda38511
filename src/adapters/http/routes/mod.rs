pub mod categories;
pub mod index;
pub mod menu_items;

use std::collections::HashMap;

use axum::{
    Router,
    extract::{
        Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    pagination::page_or_default,
};

pub fn router(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(menu_items::router(app_state))
        .merge(categories::router(app_state))
        .fallback(unknown_route)
}

async fn unknown_route() -> AppError {
    AppError::NotFound
}

/// A non-integer id can never name a row, so it is reported as not found.
pub(crate) fn resource_id(path: Result<Path<i32>, PathRejection>) -> AppResult<i32> {
    path.map(|Path(id)| id).map_err(|_| AppError::NotFound)
}

/// Missing, unparsable or undecodable `page` values fall back to page 1.
pub(crate) fn requested_page(query: Result<Query<HashMap<String, String>>, QueryRejection>) -> i64 {
    match query {
        Ok(Query(params)) => page_or_default(params.get("page").map(String::as_str)),
        Err(_) => 1,
    }
}
