use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::app_error::{AppResult, AuthError};
use crate::ports::jwks::JwksProvider;

// ============================================================================
// Claims
// ============================================================================

/// `aud` is a string for single-API tokens and a list when Auth0 also
/// grants the userinfo audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Audience::Single(aud) => aud == audience,
            Audience::Multiple(auds) => auds.iter().any(|a| a == audience),
        }
    }
}

/// Verified body of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub aud: Audience,
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Absent means no permissions were granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// Wire form of the token body. Every registered claim is optional here so a
/// missing one reaches `Validation` and is reported as a claim failure instead
/// of a deserialization failure.
#[derive(Deserialize)]
struct RawClaims {
    iss: Option<String>,
    aud: Option<Audience>,
    #[serde(default)]
    sub: String,
    exp: Option<i64>,
    iat: Option<i64>,
    permissions: Option<Vec<String>>,
}

impl TryFrom<RawClaims> for Claims {
    type Error = AuthError;

    fn try_from(raw: RawClaims) -> Result<Self, Self::Error> {
        Ok(Claims {
            iss: raw.iss.ok_or(AuthError::InvalidClaims)?,
            aud: raw.aud.ok_or(AuthError::InvalidClaims)?,
            sub: raw.sub,
            exp: raw.exp.ok_or(AuthError::InvalidClaims)?,
            iat: raw.iat,
            permissions: raw.permissions,
        })
    }
}

// ============================================================================
// Token Verification
// ============================================================================

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let header = match authorization {
        Some(h) if !h.is_empty() => h,
        _ => return Err(AuthError::MissingToken),
    };

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Verifies RS256 access tokens against the key set served by a [`JwksProvider`].
pub struct TokenVerifier {
    jwks: Arc<dyn JwksProvider>,
    audience: String,
    issuer: String,
}

impl TokenVerifier {
    pub fn new(jwks: Arc<dyn JwksProvider>, audience: String, issuer: String) -> Self {
        Self {
            jwks,
            audience,
            issuer,
        }
    }

    /// Verify the raw `Authorization` header value and return the token's claims.
    ///
    /// The key set is fetched before the token is inspected, so every call
    /// that gets past header parsing costs one provider fetch.
    pub async fn verify(&self, authorization: Option<&str>) -> AppResult<Claims> {
        let token = bearer_token(authorization)?;

        let jwks = self.jwks.fetch().await?;

        let header = decode_header(token).map_err(|e| {
            debug!(error = %e, "Failed to decode token header");
            AuthError::InvalidHeader
        })?;

        let kid = header.kid.ok_or(AuthError::InvalidHeader)?;
        let jwk = jwks.find(&kid).ok_or_else(|| {
            warn!(kid = %kid, "Key ID not found in JWKS");
            AuthError::InvalidHeader
        })?;

        let (modulus, exponent) = jwk.rsa_components().ok_or_else(|| {
            warn!(kid = %kid, kty = %jwk.kty, "Key is not an RSA signing key");
            AuthError::InvalidHeader
        })?;
        let decoding_key = DecodingKey::from_rsa_components(modulus, exponent).map_err(|e| {
            warn!(kid = %kid, error = %e, "Failed to build decoding key from JWK");
            AuthError::InvalidHeader
        })?;

        let token_data = decode::<RawClaims>(token, &decoding_key, &self.validation())
            .map_err(|e| classify(e.kind()))?;

        Ok(Claims::try_from(token_data.claims)?)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        validation
    }
}

fn classify(kind: &ErrorKind) -> AuthError {
    match kind {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidAudience
        | ErrorKind::InvalidIssuer
        | ErrorKind::ImmatureSignature
        | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
        _ => AuthError::InvalidHeader,
    }
}

// ============================================================================
// Permissions
// ============================================================================

/// An empty `required` permission only demands a verified token.
pub fn check_permission(required: &str, claims: &Claims) -> Result<(), AuthError> {
    if required.is_empty() {
        return Ok(());
    }

    match &claims.permissions {
        Some(granted) if granted.iter().any(|p| p == required) => Ok(()),
        _ => Err(AuthError::InsufficientPermission),
    }
}
