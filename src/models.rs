use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geography
// ============================================================================

/// A latitude/longitude pair. Values are carried verbatim, never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether both components are finite and inside the usual WGS84 bounds
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

// ============================================================================
// Rendered output
// ============================================================================

/// Markup that is already safe to embed and must not be escaped again
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub(crate) fn new(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrustedHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TrustedHtml> for String {
    fn from(html: TrustedHtml) -> Self {
        html.0
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RenderMapRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Provider key such as "google", "osm" or "mapir". Defaults to "google".
    #[serde(default)]
    pub provider: Option<String>,
}

impl RenderMapRequest {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    pub fn provider(&self) -> &str {
        self.provider.as_deref().unwrap_or_default()
    }
}
