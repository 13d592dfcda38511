use crate::{
    adapters::{
        http::app_state::AppState,
        jwks::{CachingJwksProvider, RemoteJwksProvider},
    },
    infra::{config::AppConfig, http_client::try_build_client, postgres_persistence},
    jwt::TokenVerifier,
    ports::jwks::JwksProvider,
    use_cases::{
        category::{CategoryRepo, CategoryUseCases},
        menu_item::{MenuItemRepo, MenuItemUseCases},
    },
};
use secrecy::ExposeSecret;
use std::fs::File;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(postgres_persistence(config.database_url.expose_secret()).await?);

    let remote_jwks: Arc<dyn JwksProvider> = Arc::new(RemoteJwksProvider::new(
        try_build_client()?,
        config.jwks_url()?,
    ));
    let jwks: Arc<dyn JwksProvider> = if config.jwks_cache_ttl_secs > 0 {
        info!(ttl_secs = config.jwks_cache_ttl_secs, "JWKS caching enabled");
        Arc::new(CachingJwksProvider::new(
            remote_jwks,
            Duration::from_secs(config.jwks_cache_ttl_secs),
        ))
    } else {
        remote_jwks
    };

    let token_verifier = TokenVerifier::new(jwks, config.api_audience.clone(), config.issuer());

    let menu_item_use_cases =
        MenuItemUseCases::new(postgres_arc.clone() as Arc<dyn MenuItemRepo>);
    let category_use_cases = CategoryUseCases::new(postgres_arc.clone() as Arc<dyn CategoryRepo>);

    Ok(AppState {
        config: Arc::new(config),
        token_verifier: Arc::new(token_verifier),
        menu_item_use_cases: Arc::new(menu_item_use_cases),
        category_use_cases: Arc::new(category_use_cases),
    })
}

pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "superburger_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let file = File::create("app.log")?;
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
