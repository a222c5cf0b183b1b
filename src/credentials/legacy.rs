use std::fs;
use std::path::PathBuf;

use cloudrider_schema::credentials::{CredentialOrigin, CredentialRecord};

use crate::credentials::{
    CredentialError, ENV_ACCESS_KEY_ID, ENV_REGION, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN,
};

pub const LEGACY_FILE_NAME: &str = ".env";

/// Reads the flat `.env` file written by the `cred` subcommand. Kept for
/// compatibility with the credential convention that predates profile
/// support; the resolver consults it last.
#[derive(Debug, Clone)]
pub struct LegacyFileSource {
    path: PathBuf,
}

impl Default for LegacyFileSource {
    fn default() -> Self {
        LegacyFileSource {
            path: PathBuf::from(LEGACY_FILE_NAME),
        }
    }
}

impl LegacyFileSource {
    /// Points at `.env` in the current working directory.
    pub fn new() -> Self {
        LegacyFileSource::default()
    }

    /// Uses an explicit file path instead of `./.env`.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        LegacyFileSource { path: path.into() }
    }

    pub fn load(&self) -> Result<CredentialRecord, CredentialError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|source| CredentialError::EnvFileUnavailable { source })?;

        let mut access_key_id = None;
        let mut secret_access_key = None;
        let mut session_token = None;
        let mut region = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                ENV_ACCESS_KEY_ID => access_key_id = Some(value.to_string()),
                ENV_SECRET_ACCESS_KEY => secret_access_key = Some(value.to_string()),
                ENV_SESSION_TOKEN => session_token = Some(value.to_string()),
                ENV_REGION => region = Some(value.to_string()),
                _ => {}
            }
        }

        let (Some(access_key_id), Some(secret_access_key)) = (access_key_id, secret_access_key)
        else {
            return Err(CredentialError::IncompleteCredentials);
        };

        Ok(CredentialRecord {
            access_key_id,
            secret_access_key,
            session_token,
            region,
            profile_name: None,
            origin: CredentialOrigin::LegacyFile,
        })
    }
}
