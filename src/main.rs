use anyhow::Result;
use mcp_map_embed::{config::CREDENTIAL_VARIABLES, service::MapEmbed, Credentials};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_map_embed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP map embed server");

    let credentials = Credentials::from_env().inspect_err(|e| {
        let names: Vec<_> = CREDENTIAL_VARIABLES.iter().map(|(_, name, _)| *name).collect();
        tracing::error!("config: {e}. Check the credential variables ({}).", names.join(", "));
    })?;
    credentials.log();

    let server = MapEmbed::new(credentials).serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
