use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Which user pool a login is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Doctor,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact lower-case names are accepted. Callers that take free-form
/// input normalise it before parsing.
impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            other => Err(AuthError::InvalidRole(other.to_string())),
        }
    }
}

/// App client settings for one user pool.
#[derive(Debug)]
pub struct RoleConfig {
    pub client_id: String,
    pub user_pool_id: String,
    pub client_secret: SecretString,
}

impl RoleConfig {
    pub fn new(
        client_id: impl Into<String>,
        user_pool_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            user_pool_id: user_pool_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Secret hash for `username` against this app client.
    pub fn secret_hash(&self, username: &str) -> String {
        secret_hash(
            username,
            &self.client_id,
            self.client_secret.expose_secret(),
        )
    }
}

/// Tokens issued after a successful password authentication.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthResult {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Access token lifetime in seconds, when the provider reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

impl AuthResult {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            id_token: None,
            token_type: None,
            expires_in: None,
        }
    }
}

/// Computes the `SECRET_HASH` parameter: base64(HMAC-SHA256(client_secret, username || client_id)).
pub fn secret_hash(username: &str, client_id: &str, client_secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(client_secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(username.as_bytes());
    mac.update(client_id.as_bytes());
    general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid role. Use 'doctor' or 'patient'.")]
    InvalidRole(String),
    #[error("{message}")]
    Provider { code: Option<String>, message: String },
    #[error("additional challenge required: {0}")]
    ChallengeRequired(String),
    #[error("authentication result is missing the {0}")]
    MissingToken(&'static str),
    #[error("request to identity provider failed: {0}")]
    Transport(String),
}

impl AuthError {
    /// Errors the login flow reports to the user and recovers from. Anything
    /// else aborts the process.
    pub fn is_login_failure(&self) -> bool {
        !matches!(self, AuthError::Transport(_))
    }
}
