use std::fs;
use std::path::PathBuf;

use cloudrider_schema::credentials::{CredentialOrigin, CredentialRecord};

use crate::config_file;
use crate::credentials::CredentialError;

pub const DEFAULT_PROFILE: &str = "default";

const CREDENTIALS_FILE: &str = "credentials";
const CONFIG_FILE: &str = "config";

const ACCESS_KEY_ID: &str = "aws_access_key_id";
const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
const SESSION_TOKEN: &str = "aws_session_token";
const REGION: &str = "region";

/// Reads named profiles from the shared credentials file, with region
/// fallback to the companion config file.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    aws_dir: PathBuf,
}

impl ProfileStore {
    /// Points at `~/.aws`.
    pub fn new() -> Result<Self, CredentialError> {
        let home = dirs::home_dir().ok_or(CredentialError::HomeDirectoryUnavailable)?;
        Ok(ProfileStore {
            aws_dir: home.join(".aws"),
        })
    }

    /// Uses an explicit directory instead of `~/.aws`.
    pub fn with_dir<P: Into<PathBuf>>(aws_dir: P) -> Self {
        ProfileStore {
            aws_dir: aws_dir.into(),
        }
    }

    /// Resolves a full credential record for the named profile.
    pub fn load(&self, profile: &str) -> Result<CredentialRecord, CredentialError> {
        let not_found = || CredentialError::ProfileNotFound {
            profile: profile.to_string(),
        };

        let content =
            fs::read_to_string(self.aws_dir.join(CREDENTIALS_FILE)).map_err(|_| not_found())?;
        let mut values = config_file::section_values(&content, profile);

        let access_key_id = values.remove(ACCESS_KEY_ID).filter(|v| !v.is_empty());
        let secret_access_key = values.remove(SECRET_ACCESS_KEY).filter(|v| !v.is_empty());
        let (Some(access_key_id), Some(secret_access_key)) = (access_key_id, secret_access_key)
        else {
            return Err(not_found());
        };

        let region = values
            .remove(REGION)
            .filter(|v| !v.is_empty())
            .or_else(|| self.region_from_config(profile));

        Ok(CredentialRecord {
            access_key_id,
            secret_access_key,
            session_token: values.remove(SESSION_TOKEN).filter(|v| !v.is_empty()),
            region,
            profile_name: Some(profile.to_string()),
            origin: CredentialOrigin::Profile,
        })
    }

    /// Region lookup in the config file. The config file keys non-default
    /// profiles as `profile <name>`, unlike the credentials file. An
    /// unreadable file or absent key is not an error; region stays empty.
    fn region_from_config(&self, profile: &str) -> Option<String> {
        let content = fs::read_to_string(self.aws_dir.join(CONFIG_FILE)).ok()?;
        let section = if profile == DEFAULT_PROFILE {
            DEFAULT_PROFILE.to_string()
        } else {
            format!("profile {profile}")
        };
        config_file::section_values(&content, &section)
            .remove(REGION)
            .filter(|v| !v.is_empty())
    }

    /// Every profile name declared in the credentials file, in file order.
    pub fn profile_names(&self) -> Result<Vec<String>, CredentialError> {
        let content = fs::read_to_string(self.aws_dir.join(CREDENTIALS_FILE))
            .map_err(|source| CredentialError::CredentialsFileUnavailable { source })?;
        Ok(config_file::section_names(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CREDENTIALS: &str = "\
[default]
aws_access_key_id = AKIAEXAMPLE
aws_secret_access_key = secret123

[prod]
aws_access_key_id = AKIAPROD
aws_secret_access_key = secretprod
region = us-east-1

[partial]
aws_access_key_id = AKIAONLY
";

    fn store_with(credentials: Option<&str>, config: Option<&str>) -> (TempDir, ProfileStore) {
        let dir = TempDir::new().unwrap();
        if let Some(content) = credentials {
            fs::write(dir.path().join(CREDENTIALS_FILE), content).unwrap();
        }
        if let Some(content) = config {
            fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
        }
        let store = ProfileStore::with_dir(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_profile_with_region() {
        let (_dir, store) = store_with(Some(CREDENTIALS), None);
        let record = store.load("prod").unwrap();
        assert_eq!(record.access_key_id(), "AKIAPROD");
        assert_eq!(record.secret_access_key(), "secretprod");
        assert_eq!(record.session_token(), None);
        assert_eq!(record.region(), Some("us-east-1"));
        assert_eq!(record.profile_name(), Some("prod"));
        assert_eq!(record.origin(), CredentialOrigin::Profile);
    }

    #[test]
    fn test_load_session_token_when_present() {
        let credentials = "\
[mfa]
aws_access_key_id = AKIAMFA
aws_secret_access_key = secretmfa
aws_session_token = tok123
";
        let (_dir, store) = store_with(Some(credentials), None);
        let record = store.load("mfa").unwrap();
        assert_eq!(record.session_token(), Some("tok123"));
    }

    #[test]
    fn test_missing_profile_is_not_found() {
        let (_dir, store) = store_with(Some(CREDENTIALS), None);
        let err = store.load("staging").unwrap_err();
        assert!(matches!(
            err,
            CredentialError::ProfileNotFound { profile } if profile == "staging"
        ));
    }

    #[test]
    fn test_missing_credentials_file_is_not_found() {
        let (_dir, store) = store_with(None, None);
        assert!(matches!(
            store.load("default"),
            Err(CredentialError::ProfileNotFound { .. })
        ));
    }

    #[test]
    fn test_profile_missing_secret_key_is_not_found() {
        let (_dir, store) = store_with(Some(CREDENTIALS), None);
        assert!(matches!(
            store.load("partial"),
            Err(CredentialError::ProfileNotFound { .. })
        ));
    }

    #[test]
    fn test_region_falls_back_to_config_file() {
        let config = "[profile default2]\nregion = ap-northeast-1\n\n[profile prod2]\nregion = eu-west-1\n";
        let credentials = "\
[prod2]
aws_access_key_id = AKIAPROD2
aws_secret_access_key = secretprod2
";
        let (_dir, store) = store_with(Some(credentials), Some(config));
        let record = store.load("prod2").unwrap();
        assert_eq!(record.region(), Some("eu-west-1"));
    }

    #[test]
    fn test_default_profile_reads_unprefixed_config_section() {
        let config = "[default]\nregion = us-west-2\n\n[profile default]\nregion = wrong\n";
        let (_dir, store) = store_with(Some(CREDENTIALS), Some(config));
        let record = store.load("default").unwrap();
        assert_eq!(record.region(), Some("us-west-2"));
    }

    #[test]
    fn test_credentials_file_region_wins_over_config() {
        let config = "[profile prod]\nregion = eu-central-1\n";
        let (_dir, store) = store_with(Some(CREDENTIALS), Some(config));
        let record = store.load("prod").unwrap();
        assert_eq!(record.region(), Some("us-east-1"));
    }

    #[test]
    fn test_region_stays_empty_without_config_file() {
        let (_dir, store) = store_with(Some(CREDENTIALS), None);
        let record = store.load("default").unwrap();
        assert_eq!(record.region(), None);
    }

    #[test]
    fn test_profile_names_in_file_order() {
        let (_dir, store) = store_with(Some(CREDENTIALS), None);
        assert_eq!(
            store.profile_names().unwrap(),
            vec!["default", "prod", "partial"]
        );
    }

    #[test]
    fn test_profile_names_without_file() {
        let (_dir, store) = store_with(None, None);
        assert!(matches!(
            store.profile_names(),
            Err(CredentialError::CredentialsFileUnavailable { .. })
        ));
    }

    #[test]
    fn test_profile_names_empty_file() {
        let (_dir, store) = store_with(Some("# nothing here\n"), None);
        assert!(store.profile_names().unwrap().is_empty());
    }
}
