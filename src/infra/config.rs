use std::net::SocketAddr;

use env_helpers::{get_env, get_env_default, get_env_opt};
use secrecy::SecretString;
use url::Url;

pub const DEFAULT_AUTH0_DOMAIN: &str = "superburger.us.auth0.com";
pub const DEFAULT_API_AUDIENCE: &str = "superapi";

pub struct AppConfig {
    /// Auth0 tenant host; issuer and JWKS URL are derived from it.
    pub auth0_domain: String,
    pub api_audience: String,
    pub database_url: SecretString,
    pub bind_addr: SocketAddr,
    /// Landing page flavor flag.
    pub excited: bool,
    /// 0 disables JWKS caching, so every authorized request refetches the key set.
    pub jwks_cache_ttl_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let auth0_domain: String =
            get_env_default("AUTH0_DOMAIN", DEFAULT_AUTH0_DOMAIN.to_string());
        let api_audience: String =
            get_env_default("API_AUDIENCE", DEFAULT_API_AUDIENCE.to_string());
        let database_url = SecretString::new(get_env::<String>("DATABASE_URL").into());
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 5000)));
        let excited = is_excited(get_env_opt("EXCITED").as_deref());
        let jwks_cache_ttl_secs: u64 = get_env_default("JWKS_CACHE_TTL_SECS", 0);

        Self {
            auth0_domain,
            api_audience,
            database_url,
            bind_addr,
            excited,
            jwks_cache_ttl_secs,
        }
    }

    /// Expected `iss` claim, including the trailing slash Auth0 emits.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain)
    }

    pub fn jwks_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "https://{}/.well-known/jwks.json",
            self.auth0_domain
        ))
    }
}

/// Only the exact value `true` turns the greeting up; anything else is plain.
fn is_excited(raw: Option<&str>) -> bool {
    raw == Some("true")
}
