use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_types::region::Region;
use aws_types::SdkConfig;

use cloudrider_schema::credentials::{CredentialOrigin, CredentialRecord};

use crate::credentials::CredentialError;

/// Ready-to-use AWS client configuration handed to the enumeration engine.
/// Never mutated after creation.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    config: SdkConfig,
    region: Option<String>,
}

impl SessionHandle {
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Turns a resolved credential record into a session handle.
///
/// Profile-origin records carry their profile name, so the SDK's own
/// named-profile provider handles them; every other origin supplies the
/// resolved secrets as a static triple.
#[derive(Debug, Default)]
pub struct SessionFactory;

impl SessionFactory {
    pub async fn create(&self, record: &CredentialRecord) -> Result<SessionHandle, CredentialError> {
        let mut loader = aws_config::defaults(BehaviorVersion::v2024_03_28());

        if let Some(region) = record.region() {
            loader = loader.region(Region::new(region.to_string()));
        }

        loader = match (record.origin(), record.profile_name()) {
            (CredentialOrigin::Profile, Some(name)) => loader.profile_name(name),
            _ => loader.credentials_provider(Credentials::new(
                record.access_key_id().to_string(),
                record.secret_access_key().to_string(),
                record.session_token().map(|t| t.to_string()),
                None,
                "cloudrider",
            )),
        };

        let config = loader.load().await;
        if config.credentials_provider().is_none() {
            return Err(CredentialError::SessionCreationFailed {
                message: "the loaded SDK configuration has no credentials provider".to_string(),
            });
        }

        Ok(SessionHandle {
            config,
            region: record.region().map(|r| r.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_record() -> CredentialRecord {
        CredentialRecord {
            access_key_id: "AKIAENV".to_string(),
            secret_access_key: "secretenv".to_string(),
            session_token: Some("tokenv".to_string()),
            region: Some("us-west-2".to_string()),
            profile_name: None,
            origin: CredentialOrigin::Environment,
        }
    }

    #[tokio::test]
    async fn test_static_session_carries_region() {
        let session = SessionFactory.create(&static_record()).await.unwrap();
        assert_eq!(session.region(), Some("us-west-2"));
        assert_eq!(
            session.config().region().map(|r| r.to_string()),
            Some("us-west-2".to_string())
        );
    }

    #[tokio::test]
    async fn test_static_session_has_credentials_provider() {
        let session = SessionFactory.create(&static_record()).await.unwrap();
        assert!(session.config().credentials_provider().is_some());
    }
}
