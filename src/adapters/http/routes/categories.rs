use std::collections::HashMap;

use axum::{
    Extension, Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::{Deserialize, Serialize};

use super::{requested_page, resource_id};
use crate::{
    adapters::http::{
        app_state::AppState,
        middleware::{PermissionGuard, authorize},
    },
    app_error::{AppError, AppResult},
    entities::category::{Category, CategoryPatch, NewCategory},
    jwt::Claims,
};

fn default_name() -> String {
    "TestCategoryName".to_string()
}

fn default_description() -> Option<String> {
    Some("TestCategoryDesc".to_string())
}

#[derive(Deserialize)]
struct AddCategoryPayload {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default = "default_description")]
    description: Option<String>,
}

/// `name: null` is ignored since the column is required; `description: null`
/// clears the description.
#[derive(Deserialize)]
struct EditCategoryPayload {
    name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    description: Option<Option<String>>,
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: Vec<Category>,
    total_categories: usize,
}

#[derive(Serialize)]
struct CategoryAddedResponse {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
struct EditedCategoryResponse {
    success: bool,
    edited_category: Category,
}

/// GET /categories?page=N
async fn list_categories(
    State(app_state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let page = app_state
        .category_use_cases
        .list_page(requested_page(query))
        .await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: page.items,
        total_categories: page.total,
    }))
}

/// POST /categories
async fn add_category(
    Extension(claims): Extension<Claims>,
    State(app_state): State<AppState>,
    payload: Result<Json<AddCategoryPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let category = app_state
        .category_use_cases
        .create(NewCategory {
            name: payload.name,
            description: payload.description,
        })
        .await?;

    tracing::info!(category_id = category.id, sub = %claims.sub, "Category added");

    Ok(Json(CategoryAddedResponse {
        success: true,
        message: "Category Added",
    }))
}

/// PATCH /categories/{id}
async fn edit_category(
    Extension(_claims): Extension<Claims>,
    State(app_state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<EditCategoryPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = resource_id(path)?;
    let Json(payload) = payload.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let category = app_state
        .category_use_cases
        .update(
            id,
            CategoryPatch {
                name: payload.name,
                description: payload.description,
            },
        )
        .await?;

    Ok(Json(EditedCategoryResponse {
        success: true,
        edited_category: category,
    }))
}

pub(crate) fn router(app_state: &AppState) -> Router<AppState> {
    let guard = |permission| {
        middleware::from_fn_with_state(PermissionGuard::new(app_state, permission), authorize)
    };

    Router::new()
        .route(
            "/categories",
            get(list_categories)
                .merge(post(add_category).route_layer(guard("post:category"))),
        )
        .route(
            "/categories/{id}",
            patch(edit_category).route_layer(guard("patch:category")),
        )
}
