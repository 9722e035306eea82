use derive_setters::Setters;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    BASE_URL_KEY, Credential, EnvMap, Error, MODEL_KEY, Result, SMALL_FAST_MODEL_KEY, Settings,
    effective_model, parse_env_pair,
};

/// A named, reusable bundle of endpoint, credential and model settings.
/// The name is the catalog key and is not stored on the profile itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default)]
    #[setters(skip)]
    pub env: EnvMap,
}

impl Profile {
    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Snapshot of the live settings, used to seed a fresh catalog.
    pub fn from_settings(settings: &Settings) -> Self {
        Self { model: settings.model.clone(), env: settings.env.clone() }
    }

    /// True when every key of this profile's env is present in `env` with an
    /// identical value. Extra keys in `env` are ignored, and so is `model`.
    pub fn matches(&self, env: &EnvMap) -> bool {
        self.env
            .iter()
            .all(|(key, value)| env.get(key) == Some(value))
    }

    pub fn effective_model(&self) -> Option<&str> {
        effective_model(&self.env, self.model.as_deref())
    }
}

/// Ordered collection of profiles keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCatalog {
    #[serde(default)]
    profiles: IndexMap<String, Profile>,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Result<&Profile> {
        self.profiles.get(name).ok_or_else(|| self.unknown(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, profile: Profile) -> Result<()> {
        let name = name.into();
        if self.profiles.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }
        self.profiles.insert(name, profile);
        Ok(())
    }

    /// Removes a profile while keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Result<Profile> {
        match self.profiles.shift_remove(name) {
            Some(profile) => Ok(profile),
            None => Err(self.unknown(name)),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.profiles.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Name of the first profile, in catalog order, whose env is a subset of
    /// the live env. Identical fragments resolve to the earliest entry.
    pub fn find_current(&self, settings: &Settings) -> Option<&str> {
        self.iter()
            .find(|(_, profile)| profile.matches(&settings.env))
            .map(|(name, _)| name)
    }

    fn unknown(&self, name: &str) -> Error {
        Error::UnknownProfile { name: name.to_string(), available: self.names() }
    }
}

/// Inputs of the `add` command before validation.
#[derive(Debug, Clone, Default, Setters)]
#[setters(strip_option, into)]
pub struct AddProfile {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub auth_token: Option<String>,
    pub model: Option<String>,
    pub anthropic_model: Option<String>,
    pub small_fast_model: Option<String>,
    /// Raw `KEY=VALUE` pairs, applied after the derived keys
    #[setters(skip)]
    pub env: Vec<String>,
}

impl AddProfile {
    pub fn env_pair(mut self, pair: impl Into<String>) -> Self {
        self.env.push(pair.into());
        self
    }

    /// Validates the inputs and assembles the profile. Nothing is persisted.
    pub fn build(&self) -> Result<Profile> {
        if self.api_key.is_some() && self.auth_token.is_some() {
            return Err(Error::Conflict(
                "--key and --auth-token cannot be used together".to_string(),
            ));
        }

        let mut env = EnvMap::new();
        if let Some(base_url) = &self.base_url {
            env.insert(BASE_URL_KEY.to_string(), base_url.clone());
        }
        if let Some(key) = &self.api_key {
            env.insert(Credential::ApiKey.env_key().to_string(), key.clone());
        }
        if let Some(token) = &self.auth_token {
            env.insert(Credential::AuthToken.env_key().to_string(), token.clone());
        }
        if let Some(model) = &self.anthropic_model {
            env.insert(MODEL_KEY.to_string(), model.clone());
        }
        if let Some(model) = &self.small_fast_model {
            env.insert(SMALL_FAST_MODEL_KEY.to_string(), model.clone());
        }
        for pair in &self.env {
            let (key, value) = parse_env_pair(pair)?;
            env.insert(key, value);
        }

        Ok(Profile { model: self.model.clone(), env })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn prod() -> Profile {
        Profile::default()
            .env_var("ANTHROPIC_BASE_URL", "https://api.example.com")
            .env_var("ANTHROPIC_API_KEY", "sk-test-key-12345678")
            .model("opus")
    }

    fn dev() -> Profile {
        Profile::default()
            .env_var("ANTHROPIC_BASE_URL", "https://dev.example.com")
            .env_var("ANTHROPIC_API_KEY", "sk-dev-key-99999999")
            .model("sonnet")
    }

    fn catalog() -> ProfileCatalog {
        let mut catalog = ProfileCatalog::new();
        catalog.insert("prod", prod()).unwrap();
        catalog.insert("dev", dev()).unwrap();
        catalog
    }

    fn settings_from(profile: &Profile) -> Settings {
        let mut settings = Settings::default();
        settings.apply(profile);
        settings
    }

    #[test]
    fn test_find_current_matches_subset() {
        let mut settings = settings_from(&prod());
        settings.env.insert("EXTRA".to_string(), "ignored".to_string());

        let catalog = catalog();
        let actual = catalog.find_current(&settings);
        let expected = Some("prod");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_find_current_breaks_on_changed_value() {
        let mut settings = settings_from(&prod());
        settings
            .env
            .insert("ANTHROPIC_BASE_URL".to_string(), "https://unknown.com".to_string());

        let catalog = catalog();
        let actual = catalog.find_current(&settings);
        assert_eq!(actual, None);
    }

    #[test]
    fn test_find_current_breaks_on_missing_key() {
        let mut settings = settings_from(&dev());
        settings.env.shift_remove("ANTHROPIC_API_KEY");

        let catalog = catalog();
        let actual = catalog.find_current(&settings);
        assert_eq!(actual, None);
    }

    #[test]
    fn test_find_current_ignores_model() {
        let mut settings = settings_from(&dev());
        settings.model = Some("haiku".to_string());

        let catalog = catalog();
        let actual = catalog.find_current(&settings);
        let expected = Some("dev");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_find_current_tie_resolves_to_insertion_order() {
        let mut fixture = ProfileCatalog::new();
        fixture.insert("first", prod()).unwrap();
        fixture.insert("second", prod().model("haiku")).unwrap();

        let actual = fixture.find_current(&settings_from(&prod()));
        let expected = Some("first");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_empty_env_profile_matches_anything() {
        let mut fixture = ProfileCatalog::new();
        fixture.insert("blank", Profile::default()).unwrap();

        let actual = fixture.find_current(&settings_from(&dev()));
        let expected = Some("blank");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_insert_duplicate_fails() {
        let mut fixture = catalog();
        let actual = fixture.insert("prod", dev());
        assert!(matches!(actual, Err(Error::DuplicateName(name)) if name == "prod"));
        assert_eq!(fixture.get("prod").unwrap(), &prod());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut fixture = catalog();
        fixture.insert("Prod", dev()).unwrap();
        let actual = fixture.names();
        let expected = vec!["prod".to_string(), "dev".to_string(), "Prod".to_string()];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut fixture = catalog();
        fixture.insert("staging", Profile::default()).unwrap();

        fixture.remove("prod").unwrap();

        let actual = fixture.names();
        let expected = vec!["dev".to_string(), "staging".to_string()];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_remove_unknown() {
        let mut fixture = catalog();
        let actual = fixture.remove("nope");
        assert!(matches!(
            actual,
            Err(Error::UnknownProfile { name, available })
                if name == "nope" && available == vec!["prod".to_string(), "dev".to_string()]
        ));
        assert_eq!(fixture.len(), 2);
    }

    #[test]
    fn test_add_profile_build() {
        let fixture = AddProfile::default()
            .base_url("https://staging.example.com")
            .api_key("sk-staging-key")
            .model("haiku")
            .env_pair("CUSTOM_VAR=hello");

        let actual = fixture.build().unwrap();
        let expected = Profile::default()
            .env_var("ANTHROPIC_BASE_URL", "https://staging.example.com")
            .env_var("ANTHROPIC_API_KEY", "sk-staging-key")
            .env_var("CUSTOM_VAR", "hello")
            .model("haiku");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_add_profile_auth_token_only() {
        let fixture = AddProfile::default()
            .base_url("https://token.example.com")
            .auth_token("tok-abc123");

        let actual = fixture.build().unwrap();
        assert_eq!(actual.env.get("ANTHROPIC_AUTH_TOKEN").map(String::as_str), Some("tok-abc123"));
        assert!(!actual.env.contains_key("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_add_profile_credential_conflict() {
        let fixture = AddProfile::default().api_key("sk-x").auth_token("tok-x");
        let actual = fixture.build();
        assert!(matches!(actual, Err(Error::Conflict(_))));
    }

    #[test]
    fn test_add_profile_extra_pairs_override_derived_keys() {
        let fixture = AddProfile::default()
            .base_url("https://api.example.com")
            .env_pair("ANTHROPIC_BASE_URL=https://override.example.com");

        let actual = fixture.build().unwrap();
        assert_eq!(
            actual.env.get("ANTHROPIC_BASE_URL").map(String::as_str),
            Some("https://override.example.com")
        );
    }

    #[test]
    fn test_add_profile_model_env_keys() {
        let fixture = AddProfile::default()
            .anthropic_model("claude-3-5-sonnet-20241022")
            .small_fast_model("claude-3-5-haiku-20241022");

        let actual = fixture.build().unwrap();
        let expected = Profile::default()
            .env_var("ANTHROPIC_MODEL", "claude-3-5-sonnet-20241022")
            .env_var("ANTHROPIC_SMALL_FAST_MODEL", "claude-3-5-haiku-20241022");
        assert_eq!(actual, expected);
        assert_eq!(actual.effective_model(), Some("claude-3-5-sonnet-20241022"));
    }

    #[test]
    fn test_add_profile_invalid_pair() {
        let fixture = AddProfile::default().env_pair("BROKEN");
        let actual = fixture.build();
        assert!(matches!(actual, Err(Error::InvalidEnvPair(_))));
    }
}
