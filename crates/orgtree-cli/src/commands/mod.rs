//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;
pub mod seed;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::output::OutputFormat;
use orgtree_core::config::AppConfig;
use orgtree_core::error::AppError;
use orgtree_service::{FolderService, seed as sample};

/// OrgTree: multi-organization folder hierarchy tool
#[derive(Debug, Parser)]
#[command(name = "orgtree", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/<env>`
    #[arg(short, long, env = "ORGTREE_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// JSON folder file to load instead of generated sample data
    #[arg(short, long)]
    pub data: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder queries and moves
    Folder(folder::FolderArgs),
    /// Sample data management
    Seed(seed::SeedArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => {
                let service = load_service(config, self.data.as_deref()).await?;
                folder::execute(args, &service, self.format).await
            }
            Commands::Seed(args) => seed::execute(args, config).await,
            Commands::Config(args) => config::execute(args, config, self.format),
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path, env)
        .map_err(|e| AppError::configuration(format!("Failed to load config: {}", e)))
}

/// Helper: build the folder service from a data file or generated samples
pub async fn load_service(
    config: &AppConfig,
    data_path: Option<&str>,
) -> Result<FolderService, AppError> {
    let folders = match data_path {
        Some(path) => sample::load_from_file(path).await?,
        None => {
            let folders = sample::generate(&config.seed);
            debug!(
                rng_seed = config.seed.rng_seed,
                count = folders.len(),
                "Generated sample folders"
            );
            folders
        }
    };
    Ok(FolderService::from_folders(folders))
}

/// Helper: parse an organization id argument
pub fn parse_org_id(raw: &str) -> Result<orgtree_core::types::OrgId, AppError> {
    raw.parse()
        .map_err(|e| AppError::validation(format!("Invalid organization UUID '{}': {}", raw, e)))
}
