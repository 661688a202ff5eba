use std::env::VarError;

use anyhow::{anyhow, bail};

use crate::constants::*;
use crate::provider::ProviderKey;

/// Provider API keys and access tokens interpolated into rendered markup.
///
/// Every slot falls back to its `YOUR_...` placeholder, so a default
/// instance renders exactly the markup a deployer is expected to fill in.
/// Values only enter through [`Credentials::set`], which rejects anything
/// that could break out of the surrounding script or URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    google_key: String,
    cedarmaps_token: String,
    neshan_key: String,
    mapir_token: String,
    parsimap_key: String,
    mapbox_token: String,
    bing_key: String,
    yandex_key: String,
}

/// (provider, variable, placeholder) for each credential
pub const CREDENTIAL_VARIABLES: [(ProviderKey, &str, &str); 8] = [
    (ProviderKey::Google, GOOGLE_KEY_VAR, GOOGLE_KEY_PLACEHOLDER),
    (ProviderKey::CedarMaps, CEDARMAPS_TOKEN_VAR, CEDARMAPS_TOKEN_PLACEHOLDER),
    (ProviderKey::Neshan, NESHAN_KEY_VAR, NESHAN_KEY_PLACEHOLDER),
    (ProviderKey::MapIr, MAPIR_TOKEN_VAR, MAPIR_TOKEN_PLACEHOLDER),
    (ProviderKey::ParsiMap, PARSIMAP_KEY_VAR, PARSIMAP_KEY_PLACEHOLDER),
    (ProviderKey::Mapbox, MAPBOX_TOKEN_VAR, MAPBOX_TOKEN_PLACEHOLDER),
    (ProviderKey::Bing, BING_KEY_VAR, BING_KEY_PLACEHOLDER),
    (ProviderKey::Yandex, YANDEX_KEY_VAR, YANDEX_KEY_PLACEHOLDER),
];

impl Default for Credentials {
    fn default() -> Self {
        Self {
            google_key: GOOGLE_KEY_PLACEHOLDER.to_string(),
            cedarmaps_token: CEDARMAPS_TOKEN_PLACEHOLDER.to_string(),
            neshan_key: NESHAN_KEY_PLACEHOLDER.to_string(),
            mapir_token: MAPIR_TOKEN_PLACEHOLDER.to_string(),
            parsimap_key: PARSIMAP_KEY_PLACEHOLDER.to_string(),
            mapbox_token: MAPBOX_TOKEN_PLACEHOLDER.to_string(),
            bing_key: BING_KEY_PLACEHOLDER.to_string(),
            yandex_key: YANDEX_KEY_PLACEHOLDER.to_string(),
        }
    }
}

impl Credentials {
    /// Reads credentials from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Reads credentials through `lookup`, keeping placeholders for unset or empty values
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut credentials = Self::default();

        for (provider, name, _) in CREDENTIAL_VARIABLES {
            match lookup(name) {
                Ok(value) if value.is_empty() => {}
                Ok(value) => credentials
                    .set(provider, value)
                    .map_err(|e| anyhow!("{name}: {e}"))?,
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => bail!("{name} value is not valid unicode"),
            }
        }

        Ok(credentials)
    }

    /// Builder form of [`Credentials::set`]
    pub fn with(mut self, provider: ProviderKey, value: impl Into<String>) -> anyhow::Result<Self> {
        self.set(provider, value)?;
        Ok(self)
    }

    /// Replaces a provider's credential after checking it is safe to interpolate
    pub fn set(&mut self, provider: ProviderKey, value: impl Into<String>) -> anyhow::Result<()> {
        let value = value.into();
        validate(&value)?;

        let slot = self
            .slot_mut(provider)
            .ok_or_else(|| anyhow!("{provider} takes no credential"))?;
        *slot = value;
        Ok(())
    }

    /// The credential rendered for `provider`, or `None` if it needs none
    pub fn get(&self, provider: ProviderKey) -> Option<&str> {
        let value: &str = match provider {
            ProviderKey::Google => &self.google_key,
            ProviderKey::CedarMaps => &self.cedarmaps_token,
            ProviderKey::Neshan => &self.neshan_key,
            ProviderKey::MapIr => &self.mapir_token,
            ProviderKey::ParsiMap => &self.parsimap_key,
            ProviderKey::Mapbox => &self.mapbox_token,
            ProviderKey::Bing => &self.bing_key,
            ProviderKey::Yandex => &self.yandex_key,
            ProviderKey::Osm => return None,
        };
        Some(value)
    }

    fn slot_mut(&mut self, provider: ProviderKey) -> Option<&mut String> {
        match provider {
            ProviderKey::Google => Some(&mut self.google_key),
            ProviderKey::CedarMaps => Some(&mut self.cedarmaps_token),
            ProviderKey::Neshan => Some(&mut self.neshan_key),
            ProviderKey::MapIr => Some(&mut self.mapir_token),
            ProviderKey::ParsiMap => Some(&mut self.parsimap_key),
            ProviderKey::Mapbox => Some(&mut self.mapbox_token),
            ProviderKey::Bing => Some(&mut self.bing_key),
            ProviderKey::Yandex => Some(&mut self.yandex_key),
            ProviderKey::Osm => None,
        }
    }

    /// Names of the variables still using their placeholder
    pub fn placeholders_in_use(&self) -> Vec<&'static str> {
        CREDENTIAL_VARIABLES
            .into_iter()
            .filter(|(provider, _, placeholder)| self.get(*provider) == Some(*placeholder))
            .map(|(_, name, _)| name)
            .collect()
    }

    /// Logs which credentials are configured. Values are never logged.
    pub fn log(&self) {
        let placeholders = self.placeholders_in_use();
        if !placeholders.is_empty() {
            tracing::warn!(
                "Rendering placeholder credentials for unset variables: {}",
                placeholders.join(", ")
            );
        }
        tracing::info!(
            "{} of {} map credentials configured",
            CREDENTIAL_VARIABLES.len() - placeholders.len(),
            CREDENTIAL_VARIABLES.len()
        );
    }
}

// Credentials land unescaped inside JS string literals and query strings.
fn validate(value: &str) -> anyhow::Result<()> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');

    if value.is_empty() {
        bail!("credential is empty");
    }
    if let Some(bad) = value.chars().find(|c| !allowed(*c)) {
        bail!("credential contains unsupported character {bad:?}");
    }

    Ok(())
}
