//! Tool router — static tool table and MCP tool-call dispatch.
//!
//! Tools are listed once in [`TOOL_TABLE`]; the router reads that table to
//! answer `tools/list` and to route `tools/call`.

pub mod search_directory;
pub mod search_file;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::server::{ToolCallResult, ToolDefinition};

/// Signature shared by every tool executor.
type ToolExecutor = fn(&Path, serde_json::Value) -> Result<ToolCallResult>;

struct ToolEntry {
    name: &'static str,
    definition: fn() -> ToolDefinition,
    execute: ToolExecutor,
}

const TOOL_TABLE: &[ToolEntry] = &[
    ToolEntry {
        name: search_file::TOOL_NAME,
        definition: search_file::tool_definition,
        execute: search_file::execute,
    },
    ToolEntry {
        name: search_directory::TOOL_NAME,
        definition: search_directory::tool_definition,
        execute: search_directory::execute,
    },
];

/// Resolve a caller-supplied path. Relative paths are taken from `workspace`.
pub fn resolve_path(workspace: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}

/// Tool router that dispatches MCP tool calls to implementations.
pub struct ToolRouter {
    /// Base directory for relative paths.
    workspace: PathBuf,
}

impl ToolRouter {
    pub const fn new(workspace: PathBuf) -> Self {
        Self { workspace }
    }

    /// List all available tools with their JSON Schema definitions.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        TOOL_TABLE.iter().map(|t| (t.definition)()).collect()
    }

    /// Call a tool by name with the given JSON arguments.
    ///
    /// Search failures come back as `Ok` results flagged `is_error`. `Err`
    /// is reserved for arguments that do not fit the tool's schema.
    pub fn call_tool(&self, name: &str, arguments: serde_json::Value) -> Result<ToolCallResult> {
        debug!(tool = name, "dispatching tool call");

        match TOOL_TABLE.iter().find(|t| t.name == name) {
            Some(tool) => (tool.execute)(&self.workspace, arguments),
            None => Ok(ToolCallResult::error(format!("Unknown tool: {name}"))),
        }
    }
}
