pub mod http;
pub mod jwks;
pub mod persistence;
