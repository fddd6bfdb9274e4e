use hot_auth_common::{Role, RoleConfig};
use thiserror::Error;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const REGION_VAR: &str = "HOT_AWS_REGION";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),
}

/// User pool settings for both roles, built once at startup.
#[derive(Debug)]
pub struct LoginConfig {
    pub region: String,
    pub doctor: RoleConfig,
    pub patient: RoleConfig,
}

impl LoginConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = lookup(REGION_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self {
            region,
            doctor: role_from_lookup(Role::Doctor, &lookup)?,
            patient: role_from_lookup(Role::Patient, &lookup)?,
        })
    }

    pub fn role(&self, role: Role) -> &RoleConfig {
        match role {
            Role::Doctor => &self.doctor,
            Role::Patient => &self.patient,
        }
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        if let Some(region) = region.filter(|r| !r.trim().is_empty()) {
            self.region = region;
        }
        self
    }
}

/// Name of the variable holding `field` for `role`, e.g. `HOT_DOCTOR_CLIENT_ID`.
pub fn role_var(role: Role, field: &str) -> String {
    format!("HOT_{}_{}", role.as_str().to_uppercase(), field)
}

fn role_from_lookup<F>(role: Role, lookup: &F) -> Result<RoleConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |field: &str| {
        let key = role_var(role, field);
        lookup(&key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(key))
    };

    Ok(RoleConfig::new(
        required("CLIENT_ID")?,
        required("USER_POOL_ID")?,
        required("CLIENT_SECRET")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn full_env() -> HashMap<String, String> {
        [
            ("HOT_DOCTOR_CLIENT_ID", "doc-client"),
            ("HOT_DOCTOR_USER_POOL_ID", "us-east-1_doc"),
            ("HOT_DOCTOR_CLIENT_SECRET", "doc-secret"),
            ("HOT_PATIENT_CLIENT_ID", "pat-client"),
            ("HOT_PATIENT_USER_POOL_ID", "us-east-1_pat"),
            ("HOT_PATIENT_CLIENT_SECRET", "pat-secret"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn loads_both_roles() {
        let env = full_env();
        let config = LoginConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.region, DEFAULT_REGION);
        assert_eq!(config.role(Role::Doctor).client_id, "doc-client");
        assert_eq!(config.role(Role::Patient).user_pool_id, "us-east-1_pat");
        assert_eq!(
            config.role(Role::Patient).client_secret.expose_secret(),
            "pat-secret"
        );
    }

    #[test]
    fn missing_secret_is_reported_by_name() {
        let mut env = full_env();
        env.remove("HOT_PATIENT_CLIENT_SECRET");
        let err = LoginConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("HOT_PATIENT_CLIENT_SECRET".into()));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut env = full_env();
        env.insert("HOT_DOCTOR_CLIENT_ID".into(), "   ".into());
        let err = LoginConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert_eq!(err.to_string(), "HOT_DOCTOR_CLIENT_ID must be set");
    }

    #[test]
    fn region_from_env_and_override() {
        let mut env = full_env();
        env.insert(REGION_VAR.into(), "eu-west-1".into());
        let config = LoginConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.region, "eu-west-1");

        let config = config.with_region(Some("ap-south-1".into()));
        assert_eq!(config.region, "ap-south-1");
        let config = config.with_region(None);
        assert_eq!(config.region, "ap-south-1");
    }
}
