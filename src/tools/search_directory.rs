//! `search_keyword_in_directory` — recursive keyword search across a tree.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::search::{self, FileFilter, FileMatches, KeywordMatcher};
use crate::server::{ToolCallResult, ToolDefinition};

pub const TOOL_NAME: &str = "search_keyword_in_directory";

#[derive(Debug, Deserialize)]
pub struct SearchDirectoryParams {
    /// Directory to search, relative to the workspace or absolute.
    pub directory_path: String,
    pub keyword: String,
    /// Raw file-name suffix, e.g. ".py". Absent or empty: text allow-list.
    #[serde(default)]
    pub file_pattern: Option<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_NAME.to_owned(),
        description: "Search for a keyword across all files in a directory, recursively. \
            Without a file pattern only common text file types are searched."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "directory_path": {
                    "type": "string",
                    "description": "Path to the directory to search in"
                },
                "keyword": {
                    "type": "string",
                    "description": "Keyword or phrase to search for"
                },
                "file_pattern": {
                    "type": ["string", "null"],
                    "description": "File name suffix to filter by (e.g. \".py\", \".txt\"); \
                        omit to search all common text files",
                    "default": null
                },
                "case_sensitive": {
                    "type": "boolean",
                    "description": "Whether the search is case-sensitive (default: false)",
                    "default": false
                }
            },
            "required": ["directory_path", "keyword"]
        }),
    }
}

pub fn execute(workspace: &Path, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: SearchDirectoryParams = serde_json::from_value(arguments)
        .context("invalid search_keyword_in_directory parameters")?;

    let root = super::resolve_path(workspace, &params.directory_path);
    let matcher = KeywordMatcher::new(&params.keyword, params.case_sensitive);
    let filter = FileFilter::from_pattern(params.file_pattern.as_deref());

    debug!(
        root = %root.display(),
        filter = ?filter,
        case_sensitive = params.case_sensitive,
        "searching directory"
    );

    match search::search_directory(&root, &params.directory_path, &matcher, &filter) {
        Ok(results) => Ok(ToolCallResult::text(format_report(
            &params.keyword,
            &params.directory_path,
            &results,
        ))),
        Err(e) => Ok(ToolCallResult::error(e.to_string())),
    }
}

/// Render per-file matches as the human-readable report.
pub fn format_report(keyword: &str, directory_path: &str, results: &[FileMatches]) -> String {
    if results.is_empty() {
        return format!("No matches found for '{keyword}' in directory '{directory_path}'.");
    }

    let mut out = format!(
        "Found matches for '{keyword}' in {} file(s):\n\n",
        results.len()
    );
    for file in results {
        let _ = writeln!(
            out,
            "📄 {} ({} match(es))",
            file.relative_path.display(),
            file.matches.len()
        );
        for m in &file.matches {
            let _ = writeln!(out, "   Line {}: {}", m.line_number, m.line_text);
        }
        out.push('\n');
    }
    out
}
