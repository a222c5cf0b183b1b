use cloudrider_schema::credentials::CredentialRecord;
use tracing::debug;

use crate::credentials::environment::EnvironmentSource;
use crate::credentials::legacy::LegacyFileSource;
use crate::credentials::profile::ProfileStore;
use crate::credentials::CredentialError;

/// Fixed-precedence credential resolution.
///
/// An explicitly requested profile is authoritative: its result, success or
/// failure, is final and never falls back to another source. Without a
/// profile the ambient environment is preferred over the persisted `.env`
/// file, since it more likely reflects the current shell session.
pub struct CredentialResolver {
    profiles: ProfileStore,
    environment: EnvironmentSource,
    legacy: LegacyFileSource,
}

impl CredentialResolver {
    pub fn new(
        profiles: ProfileStore,
        environment: EnvironmentSource,
        legacy: LegacyFileSource,
    ) -> Self {
        CredentialResolver {
            profiles,
            environment,
            legacy,
        }
    }

    pub fn resolve(&self, profile: Option<&str>) -> Result<CredentialRecord, CredentialError> {
        if let Some(profile) = profile.filter(|p| !p.is_empty()) {
            debug!("resolving credentials from profile \"{}\"", profile);
            return self.profiles.load(profile);
        }

        if let Some(record) = self.environment.load() {
            debug!("resolved credentials from the environment");
            return Ok(record);
        }

        debug!("falling back to the legacy .env file");
        self.legacy.load()
    }
}
