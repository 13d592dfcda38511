//! Test data factories for creating valid test fixtures.
//!
//! Each factory returns a complete object with sensible defaults. Use the
//! closure parameter to override specific fields as needed.

use crate::domain::entities::{category::Category, menu_item::MenuItem};

/// Create a test menu item with sensible defaults.
pub fn create_test_menu_item(overrides: impl FnOnce(&mut MenuItem)) -> MenuItem {
    let mut item = MenuItem {
        id: 1,
        name: "Classic Burger".to_string(),
        category_id: Some(1),
        description: "Quarter pound patty on a brioche bun".to_string(),
        ingredients: "beef, cheddar, lettuce, tomato".to_string(),
        active: Some(true),
    };
    overrides(&mut item);
    item
}

/// Create a test category with sensible defaults.
pub fn create_test_category(overrides: impl FnOnce(&mut Category)) -> Category {
    let mut category = Category {
        id: 1,
        name: "Burgers".to_string(),
        description: Some("Grilled to order".to_string()),
    };
    overrides(&mut category);
    category
}
