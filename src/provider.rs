use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A map provider the renderer knows how to embed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKey {
    Google,
    CedarMaps,
    Neshan,
    MapIr,
    ParsiMap,
    Mapbox,
    Osm,
    Bing,
    Yandex,
}

/// Returned by `ProviderKey::from_str` for keys outside the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("map provider '{0}' is not supported")]
pub struct UnsupportedProvider(pub String);

/// One row of the provider catalog, e.g. for a selection dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderCatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
}

impl ProviderKey {
    pub const ALL: [ProviderKey; 9] = [
        ProviderKey::Google,
        ProviderKey::CedarMaps,
        ProviderKey::Neshan,
        ProviderKey::MapIr,
        ProviderKey::ParsiMap,
        ProviderKey::Mapbox,
        ProviderKey::Osm,
        ProviderKey::Bing,
        ProviderKey::Yandex,
    ];

    /// Resolves a user-supplied key. Empty selects Google; matching ignores ASCII case.
    pub fn parse(key: &str) -> Option<Self> {
        if key.is_empty() {
            return Some(ProviderKey::Google);
        }

        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(key))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::CedarMaps => "cedarmaps",
            Self::Neshan => "neshan",
            Self::MapIr => "mapir",
            Self::ParsiMap => "parsimap",
            Self::Mapbox => "mapbox",
            Self::Osm => "osm",
            Self::Bing => "bing",
            Self::Yandex => "yandex",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Google Maps",
            Self::CedarMaps => "CedarMaps (Iran)",
            Self::Neshan => "Neshan (Iran)",
            Self::MapIr => "Map.ir (Iran)",
            Self::ParsiMap => "ParsiMap (Iran)",
            Self::Mapbox => "Mapbox",
            Self::Osm => "OpenStreetMap",
            Self::Bing => "Bing Maps",
            Self::Yandex => "Yandex Maps",
        }
    }

    /// Whether the provider's SDK takes `[lng, lat]` rather than `[lat, lng]`
    pub fn is_lng_lat(&self) -> bool {
        matches!(self, Self::MapIr | Self::Mapbox)
    }

    const fn catalog_entry(self) -> ProviderCatalogEntry {
        ProviderCatalogEntry {
            key: self.as_str(),
            name: self.display_name(),
        }
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKey {
    type Err = UnsupportedProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnsupportedProvider(s.to_string()))
    }
}

static CATALOG: [ProviderCatalogEntry; 9] = [
    ProviderKey::Google.catalog_entry(),
    ProviderKey::CedarMaps.catalog_entry(),
    ProviderKey::Neshan.catalog_entry(),
    ProviderKey::MapIr.catalog_entry(),
    ProviderKey::ParsiMap.catalog_entry(),
    ProviderKey::Mapbox.catalog_entry(),
    ProviderKey::Osm.catalog_entry(),
    ProviderKey::Bing.catalog_entry(),
    ProviderKey::Yandex.catalog_entry(),
];

/// Lists every supported provider key with its human-readable name
pub fn list_providers() -> &'static [ProviderCatalogEntry] {
    &CATALOG
}
