use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, info, warn};

use crate::config::LoginConfig;

pub use hot_auth_common::{secret_hash, AuthError, AuthResult, Role, RoleConfig};

/// A `USER_PASSWORD_AUTH` request, ready to send.
#[derive(Debug)]
pub struct PasswordAuthRequest {
    pub client_id: String,
    pub username: String,
    pub password: SecretString,
    pub secret_hash: String,
}

/// The hosted identity service the login is delegated to.
#[async_trait]
pub trait IdentityProvider {
    async fn initiate_password_auth(
        &self,
        request: PasswordAuthRequest,
    ) -> Result<AuthResult, AuthError>;
}

/// Authenticates `username` against the pool for `role`.
///
/// An unknown role is rejected before anything is sent.
pub async fn login<P>(
    config: &LoginConfig,
    provider: &P,
    role: &str,
    username: &str,
    password: &str,
) -> Result<AuthResult, AuthError>
where
    P: IdentityProvider + ?Sized,
{
    let role: Role = role.parse()?;
    login_as(config, provider, role, username, password).await
}

/// Authenticates `username` against the pool for an already parsed `role`.
/// Provider failures are returned as-is, with no retry.
pub async fn login_as<P>(
    config: &LoginConfig,
    provider: &P,
    role: Role,
    username: &str,
    password: &str,
) -> Result<AuthResult, AuthError>
where
    P: IdentityProvider + ?Sized,
{
    let pool = config.role(role);
    debug!(%role, user_pool_id = %pool.user_pool_id, "selected user pool");

    let request = PasswordAuthRequest {
        client_id: pool.client_id.clone(),
        username: username.to_string(),
        password: SecretString::from(password.to_string()),
        secret_hash: pool.secret_hash(username),
    };

    info!(%role, username, user_pool_id = %pool.user_pool_id, "sending password authentication");
    match provider.initiate_password_auth(request).await {
        Ok(result) => Ok(result),
        Err(e) => {
            if e.is_login_failure() {
                warn!(%role, username, "login rejected: {e}");
            }
            Err(e)
        }
    }
}
