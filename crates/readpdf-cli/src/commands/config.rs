//! Config command - inspect and edit the JSON configuration file.
//!
//! Keys are dotted paths over the JSON form of [`ReadPdfConfig`], for
//! example `toc.max_pages` or `toc.thresholds.hinted_min_nav`.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use tracing::debug;

use readpdf_core::models::config::ReadPdfConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default values
    Init(InitArgs),

    /// Print one value (e.g., "toc.thresholds.hinted_min_nav")
    Get {
        /// Dotted configuration key
        key: String,
    },

    /// Change one value; unknown keys and mistyped values are rejected
    Set {
        /// Dotted configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show the configuration file location
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Write to this path instead of the configuration file location
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let file = ConfigFile::new(config_path);

    match args.command {
        ConfigCommand::Show => {
            if !file.exists() {
                eprintln!("{} No config file found, showing defaults.", style("ℹ").blue());
            }
            println!("{}", serde_json::to_string_pretty(&file.load_or_default()?)?);
        }
        ConfigCommand::Init(init) => {
            let target = ConfigFile {
                path: init.output.unwrap_or(file.path),
            };
            if target.exists() && !init.force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    target.path.display()
                );
            }
            target.save(&ReadPdfConfig::default())?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                target.path.display()
            );
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(file.load_or_default()?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&json, &key)?)?);
        }
        ConfigCommand::Set { key, value } => {
            let (config, new_value) = assign(&file.load_or_default()?, &key, &value)?;
            file.save(&config)?;
            println!("{} Set {} = {}", style("✓").green(), key, new_value);
        }
        ConfigCommand::Path => {
            println!("Configuration file: {}", file.path.display());
            if file.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
                println!();
                println!("Run 'read-pdf config init' to create a configuration file.");
            }
        }
    }

    Ok(())
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("read-pdf")
        .join("config.json")
}

/// Load the configuration used by the document commands.
///
/// An explicit path must exist; the default path is optional.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ReadPdfConfig> {
    let file = ConfigFile::new(config_path);
    if config_path.is_some() {
        file.load()
    } else {
        file.load_or_default()
    }
}

/// The configuration file on disk.
struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    fn new(config_path: Option<&str>) -> Self {
        Self {
            path: config_path.map_or_else(default_config_path, PathBuf::from),
        }
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> anyhow::Result<ReadPdfConfig> {
        ReadPdfConfig::from_file(&self.path)
            .with_context(|| format!("Failed to load config {}", self.path.display()))
    }

    fn load_or_default(&self) -> anyhow::Result<ReadPdfConfig> {
        if self.exists() {
            self.load()
        } else {
            debug!("No config at {}, using defaults", self.path.display());
            Ok(ReadPdfConfig::default())
        }
    }

    fn save(&self, config: &ReadPdfConfig) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        config
            .save(&self.path)
            .with_context(|| format!("Failed to write config {}", self.path.display()))
    }
}

fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(json, |node, part| {
        node.get(part)
            .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))
    })
}

fn lookup_mut<'a>(json: &'a mut Value, key: &str) -> anyhow::Result<&'a mut Value> {
    key.split('.').try_fold(json, |node, part| {
        node.get_mut(part)
            .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))
    })
}

/// Apply `key = raw` to a copy of `config`.
///
/// The key must name an existing leaf and the value must have the same JSON
/// type as the current one. Returns the new config and the parsed value.
fn assign(config: &ReadPdfConfig, key: &str, raw: &str) -> anyhow::Result<(ReadPdfConfig, Value)> {
    let mut json = serde_json::to_value(config)?;
    let slot = lookup_mut(&mut json, key)?;

    let value = match &*slot {
        Value::Object(_) => anyhow::bail!("{} is a section, set one of its keys instead", key),
        Value::String(_) => Value::String(raw.to_string()),
        current => {
            let parsed: Value = serde_json::from_str(raw)
                .map_err(|_| anyhow::anyhow!("Invalid value for {}: {}", key, raw))?;
            if json_kind(&parsed) != json_kind(current) {
                anyhow::bail!(
                    "Invalid value for {}: expected a {}, got {}",
                    key,
                    json_kind(current),
                    raw
                );
            }
            parsed
        }
    };
    *slot = value.clone();

    let config = serde_json::from_value(json)
        .with_context(|| format!("Invalid value for {}: {}", key, raw))?;
    Ok((config, value))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "section",
    }
}
