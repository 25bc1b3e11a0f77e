//! Export formatter: a pure transformation from a prompt list to a
//! downloadable payload in one of three encodings.
//!
//! Given the same prompt list, format, and export timestamp, the output is
//! fully deterministic. Nothing here touches storage.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// A prompt record as it appears in an export, with the folder reference
/// already resolved to its name.
#[derive(Debug, Clone, Serialize)]
pub struct ExportPrompt {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub folder: Option<String>,
    pub is_favorite: bool,
    pub created_at: Timestamp,
}

/// Supported export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    /// Parse a format tag from the `?format=` query parameter.
    ///
    /// Accepts `json`, `csv`, `markdown`, and the `md` alias. Anything else
    /// is a validation error, raised before any data is read.
    pub fn parse(tag: &str) -> Result<Self, CoreError> {
        match tag {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(CoreError::Validation(
                "Invalid format. Use json, csv, or md".into(),
            )),
        }
    }

    /// MIME type for the HTTP `Content-Type` header.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Markdown => "text/markdown",
        }
    }

    /// File extension used in the download filename.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }
}

/// A rendered export: body text plus the HTTP metadata to serve it with.
#[derive(Debug)]
pub struct ExportPayload {
    pub body: String,
    pub content_type: &'static str,
    pub filename: String,
}

/// Render a prompt list into the requested format.
///
/// `exported_at` is embedded in the filename and the markdown header; it is
/// the only non-input-derived value in the output.
pub fn render(
    prompts: &[ExportPrompt],
    format: ExportFormat,
    exported_at: Timestamp,
) -> Result<ExportPayload, CoreError> {
    let body = match format {
        ExportFormat::Json => serde_json::to_string_pretty(prompts)
            .map_err(|e| CoreError::Internal(format!("Export serialization failed: {e}")))?,
        ExportFormat::Csv => render_csv(prompts),
        ExportFormat::Markdown => render_markdown(prompts, exported_at),
    };

    Ok(ExportPayload {
        body,
        content_type: format.content_type(),
        filename: format!(
            "prompt-vault-export-{}.{}",
            exported_at.format("%Y-%m-%d"),
            format.extension()
        ),
    })
}

/// Wrap a CSV field in double quotes, doubling any embedded double quotes.
fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn render_csv(prompts: &[ExportPrompt]) -> String {
    let mut lines = vec!["Title,Content,Tags,Folder,Favorite,Created At".to_string()];
    for prompt in prompts {
        let row = [
            csv_quote(&prompt.title),
            csv_quote(&prompt.content),
            csv_quote(&prompt.tags.join(", ")),
            csv_quote(prompt.folder.as_deref().unwrap_or("")),
            if prompt.is_favorite { "Yes" } else { "No" }.to_string(),
            prompt
                .created_at
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn render_markdown(prompts: &[ExportPrompt], exported_at: Timestamp) -> String {
    let mut out = format!(
        "# Prompt Vault Export\n\nExported on {}\n\n",
        exported_at.format("%Y-%m-%d")
    );
    out.push_str(&format!("Total Prompts: {}\n\n---\n\n", prompts.len()));

    for prompt in prompts {
        out.push_str(&format!("## {}\n\n", prompt.title));
        out.push_str(&format!("{}\n\n", prompt.content));

        if !prompt.tags.is_empty() {
            let tags: Vec<String> = prompt.tags.iter().map(|t| format!("`{t}`")).collect();
            out.push_str(&format!("**Tags:** {}\n\n", tags.join(", ")));
        }

        if let Some(folder) = &prompt.folder {
            out.push_str(&format!("**Folder:** {folder}\n\n"));
        }

        if prompt.is_favorite {
            out.push_str("⭐ **Favorite**\n\n");
        }

        out.push_str(&format!(
            "*Created: {}*\n\n---\n\n",
            prompt.created_at.format("%Y-%m-%d")
        ));
    }

    out
}
