use std::env;

use cloudrider_schema::credentials::{CredentialOrigin, CredentialRecord};

use crate::credentials::{
    ENV_ACCESS_KEY_ID, ENV_REGION, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN,
};

/// Reads credentials from the process environment. This source is optional:
/// an incomplete set yields no result rather than an error.
#[derive(Debug, Default)]
pub struct EnvironmentSource;

impl EnvironmentSource {
    pub fn load(&self) -> Option<CredentialRecord> {
        let access_key_id = non_empty_var(ENV_ACCESS_KEY_ID)?;
        let secret_access_key = non_empty_var(ENV_SECRET_ACCESS_KEY)?;

        Some(CredentialRecord {
            access_key_id,
            secret_access_key,
            session_token: non_empty_var(ENV_SESSION_TOKEN),
            region: non_empty_var(ENV_REGION),
            profile_name: None,
            origin: CredentialOrigin::Environment,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
