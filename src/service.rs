use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::Credentials;
use crate::formatters::{format_provider_catalog, format_provider_catalog_json};
use crate::models::RenderMapRequest;
use crate::provider::{list_providers, ProviderKey};
use crate::renderer::render_with;

/// MCP service that hands out embeddable map markup
#[derive(Clone)]
pub struct MapEmbed {
    credentials: Arc<Credentials>,
    tool_router: ToolRouter<Self>,
}

impl MapEmbed {
    /// Creates a new MapEmbed service rendering with the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for MapEmbed {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-map-embed".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Produces HTML fragments that embed an interactive map centered on a coordinate. \
                Supports Google Maps, Bing, Yandex, OpenStreetMap, Mapbox and the Iranian \
                providers CedarMaps, Neshan, Map.ir and ParsiMap."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl MapEmbed {
    /// Lists the map providers render_map accepts
    #[tool(description = "List the supported map providers. Returns each provider key (to pass to render_map) with its display name, as text and as JSON.")]
    async fn list_map_providers(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Listing map providers");

        let entries = list_providers();
        let json = format_provider_catalog_json(entries).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize provider catalog: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![
            Content::text(format_provider_catalog(entries)),
            Content::text(json),
        ]))
    }

    /// Renders map markup for a coordinate
    #[tool(description = "Render an HTML fragment embedding a map centered on a location with a single marker. Provide latitude and longitude (e.g., latitude: 35.6892, longitude: 51.3890 for Tehran) and optionally a provider key from list_map_providers (defaults to 'google'). The fragment is trusted markup and should be embedded without escaping.")]
    async fn render_map(
        &self,
        Parameters(request): Parameters<RenderMapRequest>,
    ) -> Result<CallToolResult, McpError> {
        let coordinate = request.coordinate();
        let provider = request.provider();

        tracing::info!(
            "Rendering {} map for coordinates: {}, {}",
            if provider.is_empty() { "default" } else { provider },
            coordinate.latitude,
            coordinate.longitude
        );

        if !coordinate.is_in_range() {
            tracing::warn!(
                "Coordinates {}, {} are outside WGS84 bounds, rendering as given",
                coordinate.latitude,
                coordinate.longitude
            );
        }

        if ProviderKey::parse(provider).is_none() {
            tracing::warn!("Unsupported map provider: {}", provider);
        }

        let html = render_with(
            &self.credentials,
            coordinate.latitude,
            coordinate.longitude,
            provider,
        );

        Ok(CallToolResult::success(vec![Content::text(html.into_string())]))
    }
}
