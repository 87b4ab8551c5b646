//! `search_keyword_in_file` — keyword search in one file with context lines.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::search::{self, KeywordMatcher, Match};
use crate::server::{ToolCallResult, ToolDefinition};

pub const TOOL_NAME: &str = "search_keyword_in_file";

#[derive(Debug, Deserialize)]
pub struct SearchFileParams {
    /// File to search, relative to the workspace or absolute.
    pub file_path: String,
    pub keyword: String,
    #[serde(default)]
    pub case_sensitive: bool,
    /// Lines of context on each side of a match. Default: 2.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
}

const fn default_context_lines() -> usize { 2 }

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_NAME.to_owned(),
        description: "Search for a keyword within a file and return matching lines with \
            their line numbers and surrounding context."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "Path to the file to search (relative or absolute)"
                },
                "keyword": {
                    "type": "string",
                    "description": "Keyword or phrase to search for"
                },
                "case_sensitive": {
                    "type": "boolean",
                    "description": "Whether the search is case-sensitive (default: false)",
                    "default": false
                },
                "context_lines": {
                    "type": "integer",
                    "description": "Lines of context before and after each match (default: 2)",
                    "default": 2,
                    "minimum": 0
                }
            },
            "required": ["file_path", "keyword"]
        }),
    }
}

pub fn execute(workspace: &Path, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: SearchFileParams =
        serde_json::from_value(arguments).context("invalid search_keyword_in_file parameters")?;

    let path = super::resolve_path(workspace, &params.file_path);
    let matcher = KeywordMatcher::new(&params.keyword, params.case_sensitive);

    debug!(
        path = %path.display(),
        case_sensitive = params.case_sensitive,
        context_lines = params.context_lines,
        "searching file"
    );

    match search::search_file(&path, &params.file_path, &matcher, params.context_lines) {
        Ok(matches) => Ok(ToolCallResult::text(format_report(
            &params.keyword,
            &params.file_path,
            &matches,
        ))),
        Err(e) => Ok(ToolCallResult::error(e.to_string())),
    }
}

/// Render matches as the human-readable report.
pub fn format_report(keyword: &str, file_path: &str, matches: &[Match]) -> String {
    if matches.is_empty() {
        return format!("No matches found for '{keyword}' in file '{file_path}'.");
    }

    let mut out = format!(
        "Found {} match(es) for '{keyword}' in '{file_path}':\n\n",
        matches.len()
    );
    for (i, m) in matches.iter().enumerate() {
        let _ = writeln!(out, "--- Match {} (Line {}) ---", i + 1, m.line_number);
        for line in &m.context {
            let marker = if line.is_match { ">>>" } else { "   " };
            let _ = writeln!(out, "{marker} {:4}: {}", line.line_number, line.text);
        }
        out.push('\n');
    }
    out
}
