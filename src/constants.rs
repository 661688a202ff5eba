/// Placeholder element every rendered fragment starts with
pub const MAP_CONTAINER: &str = "<div id='map' style='width: 100%; height: 400px;'></div>";

/// Appended instead of a provider block when the provider key is not recognized
pub const UNSUPPORTED_PROVIDER: &str = "<p>Provider not supported.</p>";

/// Zoom level used by every provider except Neshan
pub const DEFAULT_ZOOM: u8 = 15;

/// Neshan's SDK renders one level further out
pub const NESHAN_ZOOM: u8 = 14;

// ============================================================================
// Provider SDK assets
// ============================================================================

pub const GOOGLE_MAPS_JS: &str = "https://maps.googleapis.com/maps/api/js";

pub const CEDARMAPS_SDK_BASE: &str = "https://api.cedarmaps.com/cedarmaps.js/v1.8.1";
pub const CEDARMAPS_TILES: &str = "https://api.cedarmaps.com/v1/tiles/cedarmaps.streets.json";

pub const NESHAN_SDK_BASE: &str = "https://static.neshan.org/sdk/leaflet/1.4.0";

pub const MAPIR_SDK_BASE: &str = "https://cdn.map.ir/web-sdk/1.4.2";
pub const MAPIR_STYLE: &str = "https://map.ir/vector/styles/main/mapir-xyz-light-style.json";

pub const PARSIMAP_SDK: &str = "https://api.parsimap.com/web/v1/js/main.js";
pub const PARSIMAP_TILES: &str = "https://api.parsimap.com/tile/parsimap-streets-v1/{z}/{x}/{y}.png";

pub const MAPBOX_SDK_BASE: &str = "https://api.mapbox.com/mapbox-gl-js/v2.5.0";
pub const MAPBOX_STYLE: &str = "mapbox://styles/mapbox/streets-v11";

pub const LEAFLET_SDK_BASE: &str = "https://unpkg.com/leaflet@1.7.1/dist";
pub const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const BING_MAP_CONTROL: &str = "https://www.bing.com/api/maps/mapcontrol";

pub const YANDEX_MAPS_API: &str = "https://api-maps.yandex.ru/2.1/";

// ============================================================================
// Credential environment variables and their placeholders
// ============================================================================

pub const GOOGLE_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const CEDARMAPS_TOKEN_VAR: &str = "CEDARMAPS_TOKEN";
pub const NESHAN_KEY_VAR: &str = "NESHAN_API_KEY";
pub const MAPIR_TOKEN_VAR: &str = "MAPIR_TOKEN";
pub const PARSIMAP_KEY_VAR: &str = "PARSIMAP_KEY";
pub const MAPBOX_TOKEN_VAR: &str = "MAPBOX_TOKEN";
pub const BING_KEY_VAR: &str = "BING_MAPS_KEY";
pub const YANDEX_KEY_VAR: &str = "YANDEX_API_KEY";

pub const GOOGLE_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_API_KEY";
pub const CEDARMAPS_TOKEN_PLACEHOLDER: &str = "YOUR_CEDAR_ACCESS_TOKEN";
pub const NESHAN_KEY_PLACEHOLDER: &str = "YOUR_NESHAN_API_KEY";
pub const MAPIR_TOKEN_PLACEHOLDER: &str = "YOUR_MAPIR_ACCESS_TOKEN";
pub const PARSIMAP_KEY_PLACEHOLDER: &str = "YOUR_PARSIMAP_KEY";
pub const MAPBOX_TOKEN_PLACEHOLDER: &str = "YOUR_MAPBOX_ACCESS_TOKEN";
pub const BING_KEY_PLACEHOLDER: &str = "YOUR_BING_MAPS_KEY";
pub const YANDEX_KEY_PLACEHOLDER: &str = "YOUR_YANDEX_API_KEY";
