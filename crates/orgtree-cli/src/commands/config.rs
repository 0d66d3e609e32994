//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use orgtree_core::config::AppConfig;
use orgtree_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_item(config, format),
            OutputFormat::Table => {
                output::print_kv("Log level", &config.logging.level);
                output::print_kv("Log format", &config.logging.format);
                output::print_kv("Seed", &config.seed.rng_seed.to_string());
                output::print_kv("Organizations", &config.seed.org_count.to_string());
                output::print_kv("Roots per org", &config.seed.roots_per_org.to_string());
                output::print_kv("Max depth", &config.seed.max_depth.to_string());
                output::print_kv("Max children", &config.seed.max_children.to_string());
                output::print_kv("Default org", &config.seed.default_org_id.to_string());
            }
        },
    }

    Ok(())
}
