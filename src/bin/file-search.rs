//! file-search -- standalone MCP keyword search server.
//!
//! Usage: file-search [--workspace <path>]

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let workspace = std::env::args()
        .skip_while(|a| a != "--workspace")
        .nth(1)
        .unwrap_or_else(|| ".".to_string());

    let workspace = std::path::Path::new(&workspace).canonicalize()?;

    file_search::run_mcp_server(file_search::McpServerConfig { workspace })
}
