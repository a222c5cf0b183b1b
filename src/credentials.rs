//! Credential resolution: named profiles, environment variables and the
//! legacy `.env` file, combined under a fixed precedence order.

use std::io;

use thiserror::Error;

pub mod environment;
pub mod legacy;
pub mod profile;
pub mod resolve;

/// Environment-style key names, shared by the environment source, the legacy
/// `.env` reader and the `cred` writer.
pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const ENV_REGION: &str = "AWS_REGION";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("could not determine the user home directory")]
    HomeDirectoryUnavailable,

    #[error("profile \"{profile}\" not found or incomplete")]
    ProfileNotFound { profile: String },

    #[error("could not open the shared credentials file")]
    CredentialsFileUnavailable {
        #[source]
        source: io::Error,
    },

    #[error("could not open the .env credentials file")]
    EnvFileUnavailable {
        #[source]
        source: io::Error,
    },

    #[error("the .env credentials file is missing an access key or secret key")]
    IncompleteCredentials,

    #[error("failed to build an AWS session: {message}")]
    SessionCreationFailed { message: String },
}
