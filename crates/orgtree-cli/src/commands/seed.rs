//! Sample data commands.

use clap::{Args, Subcommand};

use crate::output;
use orgtree_core::config::AppConfig;
use orgtree_core::error::AppError;
use orgtree_service::seed as sample;

/// Arguments for seed commands
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Seed subcommand
    #[command(subcommand)]
    pub command: SeedCommand,
}

/// Seed subcommands
#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Generate sample folders and write them as JSON
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "data/folders.json")]
        output: String,
        /// Override the configured RNG seed
        #[arg(long)]
        rng_seed: Option<u64>,
    },
}

/// Execute seed commands
pub async fn execute(args: &SeedArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        SeedCommand::Generate { output: out_path, rng_seed } => {
            let mut seed_config = config.seed.clone();
            if let Some(seed) = rng_seed {
                seed_config.rng_seed = *seed;
            }

            let folders = sample::generate(&seed_config);
            sample::write_to_file(out_path, &folders).await?;

            output::print_success(&format!(
                "{} folders written to '{}'",
                folders.len(),
                out_path
            ));
        }
    }

    Ok(())
}
