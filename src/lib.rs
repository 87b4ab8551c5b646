//! `file-search` — keyword search tools served over MCP.
//!
//! Exposes two tools via the Model Context Protocol over stdio (JSON-RPC
//! 2.0, newline-delimited):
//!
//! - `search_keyword_in_file` — every line of one file containing a keyword,
//!   each shown with a window of surrounding lines
//! - `search_keyword_in_directory` — every matching line in every text file
//!   under a directory, grouped by relative path
//!
//! Both do a plain substring scan over the whole file per request. There is
//! no index and no state between calls.
//!
//! # Architecture
//!
//! ```text
//! stdin (JSON-RPC) → server::serve → ToolRouter → tools::* → search::*
//! stdout (JSON-RPC) ←──────────────── text report ┘
//! ```

pub mod error;
pub mod search;
pub mod server;
pub mod tools;

pub use error::{SearchError, SearchResult};
pub use server::{McpServerConfig, run_mcp_server};
