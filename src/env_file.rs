//! Writer for the legacy `.env` credentials file produced by the `cred`
//! subcommand. The companion reader lives in `credentials::legacy`.

use std::fs;
use std::io;
use std::path::Path;

use crate::credentials::{
    ENV_ACCESS_KEY_ID, ENV_REGION, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN,
};

/// Credential values collected from the `cred` subcommand flags.
#[derive(Debug, Clone, Default)]
pub struct EnvFileValues {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

/// Renders the file content; only non-empty values are emitted.
pub fn render(values: &EnvFileValues) -> String {
    let entries = [
        (ENV_REGION, values.region.as_deref()),
        (ENV_ACCESS_KEY_ID, values.access_key_id.as_deref()),
        (ENV_SECRET_ACCESS_KEY, values.secret_access_key.as_deref()),
        (ENV_SESSION_TOKEN, values.session_token.as_deref()),
    ];

    let mut content = String::new();
    for (key, value) in entries {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }
    }
    content
}

pub fn write<P: AsRef<Path>>(path: P, values: &EnvFileValues) -> io::Result<()> {
    fs::write(path, render(values))
}
