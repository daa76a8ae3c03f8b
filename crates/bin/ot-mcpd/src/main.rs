//! Daemon entry point for the Open Targets MCP server.
//!
//! Loads configuration from the environment, builds the platform control
//! plane, and serves the MCP protocol over stdio or streamable HTTP.

mod config;

use ot_core::control::PlatformControlPlane;
use ot_mcp::server::{self, McpHttpServerConfig};
use tracing_subscriber::EnvFilter;

use crate::config::OtConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logging goes to stderr only; stdout is reserved for the MCP stdio
    // transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = OtConfig::from_args()?;
    let control = PlatformControlPlane::from_config(config.platform.clone())?;

    if config.serve_http {
        let server_config = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_stateful_mode(config.stateful_sessions)
            .with_sse_keep_alive(config.sse_keep_alive);
        tracing::info!(addr = %config.mcp_http_addr, "serving MCP over streamable HTTP");
        server::serve_streamable_http(control, server_config).await?;
    } else {
        tracing::info!("serving MCP over stdio");
        server::serve_stdio(control).await?;
    }
    Ok(())
}
