use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Credential, EnvMap, Profile, effective_model};

/// The live settings document consumed by the API client.
///
/// Only `env` and `model` are owned by this tool. Every other top-level field
/// is kept in `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub env: EnvMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// Merges the profile's env over the live env and adopts its model when
    /// the profile defines one. Live keys the profile does not mention are
    /// kept.
    pub fn apply(&mut self, profile: &Profile) {
        for (key, value) in &profile.env {
            self.env.insert(key.clone(), value.clone());
        }
        if let Some(model) = &profile.model {
            self.model = Some(model.clone());
        }
    }

    pub fn effective_model(&self) -> Option<&str> {
        effective_model(&self.env, self.model.as_deref())
    }

    pub fn credential(&self) -> Option<(Credential, &str)> {
        Credential::find(&self.env)
    }
}
