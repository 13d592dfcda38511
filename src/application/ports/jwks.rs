//! Source of the public keys used to verify bearer tokens.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app_error::AppResult;

/// JSON Web Key Set as published at `/.well-known/jwks.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwk {
    pub kid: String,
    pub kty: String,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// RSA modulus and exponent; absent on EC and symmetric keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
}

impl Jwks {
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|k| k.kid == kid)
    }
}

impl Jwk {
    /// `(n, e)` when this is an RSA key carrying both components.
    pub fn rsa_components(&self) -> Option<(&str, &str)> {
        if self.kty != "RSA" {
            return None;
        }
        Some((self.n.as_deref()?, self.e.as_deref()?))
    }
}

/// Fetches the current key set.
///
/// Implementations decide whether to hit the network on every call. A
/// failure here is a server fault, not an authorization failure.
#[async_trait]
pub trait JwksProvider: Send + Sync {
    async fn fetch(&self) -> AppResult<Jwks>;
}
