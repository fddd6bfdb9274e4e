use async_trait::async_trait;
use hot_login::auth::{AuthError, AuthResult, IdentityProvider, PasswordAuthRequest};
use hot_login::config::LoginConfig;
use std::collections::HashMap;
use std::sync::Mutex;

pub const DOCTOR_CLIENT_ID: &str = "doctor-client";
pub const DOCTOR_SECRET: &str = "doctor-secret";
pub const PATIENT_CLIENT_ID: &str = "patient-client";
pub const PATIENT_SECRET: &str = "patient-secret";

pub fn test_env() -> HashMap<String, String> {
    [
        ("HOT_DOCTOR_CLIENT_ID", DOCTOR_CLIENT_ID),
        ("HOT_DOCTOR_USER_POOL_ID", "us-east-1_doctors"),
        ("HOT_DOCTOR_CLIENT_SECRET", DOCTOR_SECRET),
        ("HOT_PATIENT_CLIENT_ID", PATIENT_CLIENT_ID),
        ("HOT_PATIENT_USER_POOL_ID", "us-east-1_patients"),
        ("HOT_PATIENT_CLIENT_SECRET", PATIENT_SECRET),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn test_config() -> LoginConfig {
    let env = test_env();
    LoginConfig::from_lookup(|k| env.get(k).cloned()).unwrap()
}

/// Records every request and answers from a fixed script.
pub struct RecordingProvider {
    pub requests: Mutex<Vec<PasswordAuthRequest>>,
    respond: Box<dyn Fn(&PasswordAuthRequest) -> Result<AuthResult, AuthError> + Send + Sync>,
}

impl RecordingProvider {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&PasswordAuthRequest) -> Result<AuthResult, AuthError> + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    pub fn accepting() -> Self {
        Self::new(|req| {
            Ok(AuthResult::new(
                format!("access-{}", req.username),
                format!("refresh-{}", req.username),
            ))
        })
    }

    pub fn rejecting(code: &str, message: &str) -> Self {
        let code = code.to_string();
        let message = message.to_string();
        Self::new(move |_| {
            Err(AuthError::Provider {
                code: Some(code.clone()),
                message: message.clone(),
            })
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityProvider for RecordingProvider {
    async fn initiate_password_auth(
        &self,
        request: PasswordAuthRequest,
    ) -> Result<AuthResult, AuthError> {
        let response = (self.respond)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}
