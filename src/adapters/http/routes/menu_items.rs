use std::collections::HashMap;

use axum::{
    Extension, Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use super::{requested_page, resource_id};
use crate::{
    adapters::http::{
        app_state::AppState,
        middleware::{PermissionGuard, authorize},
    },
    app_error::{AppError, AppResult},
    entities::menu_item::{MenuItem, NewMenuItem},
    jwt::Claims,
};

const PLACEHOLDER_TEXT: &str = "Test";
const DEFAULT_CATEGORY_ID: i32 = 2;

fn placeholder_text() -> String {
    PLACEHOLDER_TEXT.to_string()
}

fn default_category() -> Option<i32> {
    Some(DEFAULT_CATEGORY_ID)
}

fn default_active() -> Option<bool> {
    Some(true)
}

/// Every field is optional; an explicit `null` for `category` or `active`
/// stores NULL rather than the default.
#[derive(Deserialize)]
struct AddMenuItemPayload {
    item_id: Option<i32>,
    #[serde(default = "placeholder_text")]
    name: String,
    #[serde(default = "default_category")]
    category: Option<i32>,
    #[serde(default = "placeholder_text")]
    description: String,
    #[serde(default = "placeholder_text")]
    ingredients: String,
    #[serde(default = "default_active")]
    active: Option<bool>,
}

impl From<AddMenuItemPayload> for NewMenuItem {
    fn from(payload: AddMenuItemPayload) -> Self {
        NewMenuItem {
            id: payload.item_id,
            name: payload.name,
            category_id: payload.category,
            description: payload.description,
            ingredients: payload.ingredients,
            active: payload.active,
        }
    }
}

#[derive(Serialize)]
struct MenuItemsResponse {
    success: bool,
    menu_items: Vec<MenuItem>,
    total_items: usize,
}

#[derive(Serialize)]
struct MenuItemResponse {
    success: bool,
    menu_item: MenuItem,
}

#[derive(Serialize)]
struct NewItemResponse {
    success: bool,
    new_item: MenuItem,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i32,
    message: &'static str,
}

/// GET /menuitems?page=N
async fn list_menu_items(
    Extension(_claims): Extension<Claims>,
    State(app_state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let page = app_state
        .menu_item_use_cases
        .list_page(requested_page(query))
        .await?;

    Ok(Json(MenuItemsResponse {
        success: true,
        menu_items: page.items,
        total_items: page.total,
    }))
}

/// GET /menuitems/{id}
async fn get_item_details(
    Extension(_claims): Extension<Claims>,
    State(app_state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let item = app_state
        .menu_item_use_cases
        .get(resource_id(path)?)
        .await?;

    Ok(Json(MenuItemResponse {
        success: true,
        menu_item: item,
    }))
}

/// POST /menuitems
async fn add_menu_item(
    Extension(_claims): Extension<Claims>,
    State(app_state): State<AppState>,
    payload: Result<Json<AddMenuItemPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let item = app_state
        .menu_item_use_cases
        .create(payload.into())
        .await?;

    Ok(Json(NewItemResponse {
        success: true,
        new_item: item,
    }))
}

/// DELETE /menuitems/{id}
async fn delete_menu_item(
    Extension(_claims): Extension<Claims>,
    State(app_state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let deleted = app_state
        .menu_item_use_cases
        .delete(resource_id(path)?)
        .await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
        message: "Question Deleted",
    }))
}

pub(crate) fn router(app_state: &AppState) -> Router<AppState> {
    let guard = |permission| {
        middleware::from_fn_with_state(PermissionGuard::new(app_state, permission), authorize)
    };

    Router::new()
        .route(
            "/menuitems",
            get(list_menu_items)
                .route_layer(guard("get:menu_items"))
                .merge(post(add_menu_item).route_layer(guard("post:menu_item"))),
        )
        .route(
            "/menuitems/{id}",
            get(get_item_details)
                .route_layer(guard("get:item_details"))
                .merge(
                    delete(delete_menu_item).route_layer(guard("delete:menu_item")),
                ),
        )
}
