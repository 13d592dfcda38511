pub mod app_error;
pub mod jwt;
pub mod pagination;
pub mod ports;
pub mod use_cases;
