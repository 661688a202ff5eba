use crate::provider::ProviderCatalogEntry;

/// Formats the provider catalog into a human-readable listing
pub fn format_provider_catalog(entries: &[ProviderCatalogEntry]) -> String {
    if entries.is_empty() {
        return "No map providers available.".to_string();
    }

    let mut output = String::from("Available map providers:\n\n");
    for entry in entries {
        output.push_str(&format!("  {}: {}\n", entry.key, entry.name));
    }
    output
}

/// Formats the provider catalog as a pretty-printed JSON array
pub fn format_provider_catalog_json(
    entries: &[ProviderCatalogEntry],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
