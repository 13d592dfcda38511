use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    jwt::TokenVerifier,
    use_cases::{category::CategoryUseCases, menu_item::MenuItemUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub token_verifier: Arc<TokenVerifier>,
    pub menu_item_use_cases: Arc<MenuItemUseCases>,
    pub category_use_cases: Arc<CategoryUseCases>,
}
