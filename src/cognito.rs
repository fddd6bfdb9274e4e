//! Amazon Cognito Identity Provider backend.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cognitoidentityprovider::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::initiate_auth::{InitiateAuthError, InitiateAuthOutput},
    types::AuthFlowType,
    Client,
};
use secrecy::ExposeSecret;
use tracing::error;

use crate::auth::{AuthError, AuthResult, IdentityProvider, PasswordAuthRequest};

#[derive(Debug, Clone)]
pub struct CognitoProvider {
    client: Client,
}

impl CognitoProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client for `region` using the default credential chain.
    pub async fn from_region(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl IdentityProvider for CognitoProvider {
    async fn initiate_password_auth(
        &self,
        request: PasswordAuthRequest,
    ) -> Result<AuthResult, AuthError> {
        let output = self
            .client
            .initiate_auth()
            .auth_flow(AuthFlowType::UserPasswordAuth)
            .client_id(request.client_id)
            .auth_parameters("USERNAME", request.username)
            .auth_parameters("PASSWORD", request.password.expose_secret())
            .auth_parameters("SECRET_HASH", request.secret_hash)
            .send()
            .await
            .map_err(map_sdk_error)?;

        into_auth_result(output)
    }
}

fn map_sdk_error<R>(err: SdkError<InitiateAuthError, R>) -> AuthError
where
    R: std::fmt::Debug,
{
    match err.as_service_error() {
        Some(service) => AuthError::Provider {
            code: service.code().map(str::to_string),
            message: service
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| service.to_string()),
        },
        None => {
            let detail = DisplayErrorContext(&err).to_string();
            error!("initiate_auth failed: {detail}");
            AuthError::Transport(detail)
        }
    }
}

fn into_auth_result(output: InitiateAuthOutput) -> Result<AuthResult, AuthError> {
    let Some(result) = output.authentication_result() else {
        let challenge = output
            .challenge_name()
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| "none".to_string());
        return Err(AuthError::ChallengeRequired(challenge));
    };

    let access_token = result
        .access_token()
        .ok_or(AuthError::MissingToken("access token"))?;
    let refresh_token = result
        .refresh_token()
        .ok_or(AuthError::MissingToken("refresh token"))?;

    Ok(AuthResult {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
        id_token: result.id_token().map(str::to_string),
        token_type: result.token_type().map(str::to_string),
        expires_in: Some(i64::from(result.expires_in())).filter(|s| *s > 0),
    })
}
