//! Document CLI commands.
//!
//! Each invocation runs the service against local storage with a fresh cache.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use crate::cli::load_config;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Document;
use crate::infrastructure::logging::LoggerImpl;
use crate::infrastructure::setup::build_document_service;

#[derive(Args, Debug)]
pub struct DocumentArgs {
    #[command(subcommand)]
    pub command: DocumentCommands,
}

#[derive(Subcommand, Debug)]
pub enum DocumentCommands {
    /// Show a document
    Get {
        /// Document ID
        id: String,
    },
    /// Create a document from a JSON file (`-` reads stdin)
    Create {
        /// Path to the document JSON
        file: PathBuf,
    },
    /// Replace an existing document from a JSON file (`-` reads stdin)
    Update {
        /// Path to the document JSON
        file: PathBuf,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct DocumentOutput {
    pub document: Document,
}

impl CommandOutput for DocumentOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("ID:    {}", self.document.id),
            format!(
                "Tags:  {}",
                if self.document.tags.is_empty() {
                    "-".to_string()
                } else {
                    self.document.tags.join(", ")
                }
            ),
            "Data:".to_string(),
        ];
        lines.push(serde_json::to_string_pretty(&self.document.data).unwrap_or_default());
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.document).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct DocumentActionOutput {
    pub success: bool,
    pub id: String,
    pub message: String,
}

impl CommandOutput for DocumentActionOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: DocumentArgs, config_path: Option<&Path>, json_mode: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let _logger = LoggerImpl::init(&config.logging)?;
    let service = build_document_service(&config).await?;

    match args.command {
        DocumentCommands::Get { id } => {
            let document = service.get_document(&id).await?.ok_or_else(|| {
                anyhow::anyhow!("Document was not found. Document with id ({id}) does not exist.")
            })?;
            output(&DocumentOutput { document }, json_mode);
        }
        DocumentCommands::Create { file } => {
            let document = read_document(&file).await?;
            let id = document.id.clone();
            service.persist(document).await?;
            let out = DocumentActionOutput {
                success: true,
                message: format!("Document {id} created"),
                id,
            };
            output(&out, json_mode);
        }
        DocumentCommands::Update { file } => {
            let document = read_document(&file).await?;
            let id = document.id.clone();
            service.update(document).await?;
            let out = DocumentActionOutput {
                success: true,
                message: format!("Document {id} updated"),
                id,
            };
            output(&out, json_mode);
        }
    }

    Ok(())
}

/// Read and parse a document from a file, or stdin for `-`.
async fn read_document(path: &Path) -> Result<Document> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read document from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid document JSON in {}", path.display()))
}
