use indexmap::IndexMap;
use strum_macros::{Display, EnumIter};

use crate::{Error, Result};

/// Ordered env fragment, as stored in both documents.
pub type EnvMap = IndexMap<String, String>;

pub const BASE_URL_KEY: &str = "ANTHROPIC_BASE_URL";
pub const MODEL_KEY: &str = "ANTHROPIC_MODEL";
pub const SMALL_FAST_MODEL_KEY: &str = "ANTHROPIC_SMALL_FAST_MODEL";

/// The two mutually exclusive credential forms a profile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Credential {
    #[strum(to_string = "API key")]
    ApiKey,
    #[strum(to_string = "Auth token")]
    AuthToken,
}

impl Credential {
    pub fn env_key(&self) -> &'static str {
        match self {
            Credential::ApiKey => "ANTHROPIC_API_KEY",
            Credential::AuthToken => "ANTHROPIC_AUTH_TOKEN",
        }
    }

    /// Returns the first credential present in `env` with its value.
    /// API keys take precedence when both are set.
    pub fn find(env: &EnvMap) -> Option<(Credential, &str)> {
        use strum::IntoEnumIterator;

        Credential::iter()
            .find_map(|kind| env.get(kind.env_key()).map(|value| (kind, value.as_str())))
    }
}

/// Splits a `KEY=VALUE` argument on the first `=`. The value is kept
/// verbatim, including quotes and further `=` characters.
pub fn parse_env_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidEnvPair(pair.to_string())),
    }
}
