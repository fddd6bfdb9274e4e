use chrono::{DateTime, Duration, Utc};
use hot_auth_common::{AuthResult, Role};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LoginReport<'a> {
    username: &'a str,
    role: Role,
    #[serde(flatten)]
    tokens: &'a AuthResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

pub fn render_text(username: &str, role: Role, result: &AuthResult) -> String {
    format!(
        "Login successful for {username} ({role})!\nAccess Token: {}\nRefresh Token: {}",
        result.access_token, result.refresh_token
    )
}

pub fn render_json(
    username: &str,
    role: Role,
    result: &AuthResult,
    now: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let report = LoginReport {
        username,
        role,
        tokens: result,
        expires_at: result
            .expires_in
            .and_then(|secs| now.checked_add_signed(Duration::seconds(secs))),
    };
    serde_json::to_string_pretty(&report)
}
