//! Embeddable map markup for Google Maps, Bing, Yandex, OpenStreetMap,
//! Mapbox and the Iranian providers CedarMaps, Neshan, Map.ir and ParsiMap.
//!
//! ```
//! let html = mcp_map_embed::render(35.7, 51.4, "osm");
//! assert!(html.as_str().contains("L.marker([35.7, 51.4])"));
//! ```

pub mod config;
pub mod constants;
pub mod formatters;
pub mod models;
pub mod provider;
pub mod renderer;
pub mod service;

pub use config::Credentials;
pub use models::{Coordinate, TrustedHtml};
pub use provider::{list_providers, ProviderCatalogEntry, ProviderKey, UnsupportedProvider};
pub use renderer::{render, render_with};
