use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    #[serde(rename = "category")]
    pub category_id: Option<i32>,
    pub description: String,
    pub ingredients: String,
    pub active: Option<bool>,
}

/// Fields for a new menu item. `id` requests a specific primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub id: Option<i32>,
    pub name: String,
    pub category_id: Option<i32>,
    pub description: String,
    pub ingredients: String,
    pub active: Option<bool>,
}
