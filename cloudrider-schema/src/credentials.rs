use std::fmt;

use serde::{Deserialize, Serialize};

/// Which source a resolved credential record came from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialOrigin {
    Profile,
    Environment,
    LegacyFile,
}

impl fmt::Display for CredentialOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CredentialOrigin::Profile => "profile",
            CredentialOrigin::Environment => "environment",
            CredentialOrigin::LegacyFile => "legacy .env file",
        };
        f.write_str(name)
    }
}

/// A normalized set of AWS credentials produced by exactly one resolution
/// path. Both `access_key_id` and `secret_access_key` are non-empty; a record
/// missing either is never surfaced.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: Option<String>,
    pub profile_name: Option<String>,
    pub origin: CredentialOrigin,
}

impl CredentialRecord {
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn profile_name(&self) -> Option<&str> {
        self.profile_name.as_deref()
    }

    pub fn origin(&self) -> CredentialOrigin {
        self.origin
    }
}
