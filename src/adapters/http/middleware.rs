use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AuthError},
    jwt::{TokenVerifier, check_permission},
};

/// State for one protected route: the verifier plus the permission that
/// route demands.
#[derive(Clone)]
pub struct PermissionGuard {
    verifier: Arc<TokenVerifier>,
    permission: &'static str,
}

impl PermissionGuard {
    pub fn new(app_state: &AppState, permission: &'static str) -> Self {
        Self {
            verifier: app_state.token_verifier.clone(),
            permission,
        }
    }
}

/// Route-level guard, installed with
/// `route_layer(middleware::from_fn_with_state(PermissionGuard::new(..), authorize))`.
///
/// On success the verified [`crate::jwt::Claims`] are placed in the request
/// extensions for the handler. On failure the handler never runs.
pub async fn authorize(
    State(guard): State<PermissionGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map(str::to_owned))
        .transpose()
        .map_err(|_| AuthError::MalformedHeader)?;

    let claims = guard.verifier.verify(authorization.as_deref()).await?;
    check_permission(guard.permission, &claims)?;

    tracing::debug!(
        sub = %claims.sub,
        permission = guard.permission,
        "Request authorized"
    );

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
