use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::tags::{GeneralTags, TagCatalog, TagKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "hubtags")]
#[command(about = "Browse hub tag catalogs by category", long_about = None)]
pub struct Args {
    /// Tag catalog file (JSON or YAML)
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Which category set to build
    #[arg(short, long, default_value = "general")]
    pub kind: TagKind,

    /// Keep only this category. Can be specified multiple times.
    #[arg(long, value_name = "NAME")]
    pub category: Vec<String>,

    /// Print a single category instead of the whole index
    #[arg(long, value_name = "CATEGORY")]
    pub show: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_file(&self.file)?;
        if !self.category.is_empty() && self.kind != TagKind::General {
            anyhow::bail!(
                "--category only applies to --kind general (got {})",
                self.kind.as_str()
            );
        }
        Ok(())
    }

    pub fn build_tags(&self, catalog: &TagCatalog) -> GeneralTags {
        if self.category.is_empty() {
            return self.kind.build(catalog);
        }
        let keys: Vec<&str> = self.category.iter().map(String::as_str).collect();
        GeneralTags::new(catalog, Some(keys.as_slice()))
    }
}

pub fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Catalog file does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Catalog path is not a file: {}", path.display());
    }
    std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    Ok(())
}

/// Renders the index, or one category of it, in the requested format.
pub fn render(tags: &GeneralTags, show: Option<&str>, format: OutputFormat) -> Result<String> {
    if let Some(name) = show {
        let category = tags.category(name)?;
        return match format {
            OutputFormat::Text => Ok(category.render()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(category)?),
        };
    }

    match format {
        OutputFormat::Text => Ok(tags
            .iter()
            .map(|(name, category)| format!("{name}\n{category}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tags)?),
    }
}
