pub mod args;
pub mod auth;
pub mod cognito;
pub mod config;
pub mod helpers;
pub mod output;

use crate::{
    args::{Args, OutputFormat},
    auth::IdentityProvider,
    cognito::CognitoProvider,
    config::LoginConfig,
};
use std::io::Write;
use tracing::info;
use tracing_subscriber::prelude::*;

pub fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hot_login=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(false)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// How a login attempt ended, as far as the user is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    LoggedIn,
    Rejected,
}

pub async fn run(args: Args) -> anyhow::Result<Outcome> {
    let config = LoginConfig::from_env()?.with_region(args.region);
    let (role, username, password) =
        helpers::resolve_credentials(args.role, args.username, args.password)?;

    let provider = CognitoProvider::from_region(&config.region).await;
    info!(region = %config.region, "identity provider ready");

    let mut stdout = std::io::stdout();
    execute(
        &config,
        &provider,
        &role,
        &username,
        &password,
        args.output,
        &mut stdout,
    )
    .await
}

/// Runs one login and writes the result for the user to `out`.
///
/// Rejections (bad role, bad credentials, challenges) are printed and reported
/// as [`Outcome::Rejected`]. Transport failures are returned as errors.
pub async fn execute<P, W>(
    config: &LoginConfig,
    provider: &P,
    role: &str,
    username: &str,
    password: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<Outcome>
where
    P: IdentityProvider + ?Sized,
    W: Write,
{
    let role: auth::Role = match role.parse() {
        Ok(role) => role,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(Outcome::Rejected);
        }
    };

    match auth::login_as(config, provider, role, username, password).await {
        Ok(result) => {
            let rendered = match format {
                OutputFormat::Text => output::render_text(username, role, &result),
                OutputFormat::Json => {
                    output::render_json(username, role, &result, chrono::Utc::now())?
                }
            };
            writeln!(out, "{rendered}")?;
            Ok(Outcome::LoggedIn)
        }
        Err(err) if err.is_login_failure() => {
            writeln!(out, "Login failed: {err}")?;
            Ok(Outcome::Rejected)
        }
        Err(err) => Err(err.into()),
    }
}
