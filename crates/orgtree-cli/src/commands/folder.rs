//! Folder query and move commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use orgtree_core::error::AppError;
use orgtree_service::FolderService;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List folders, optionally for one organization
    List {
        /// Organization ID
        #[arg(short, long)]
        org: Option<String>,
    },
    /// Check whether an organization owns any folder
    Exists {
        /// Organization ID
        #[arg(short, long)]
        org: String,
    },
    /// List every descendant of a folder
    Children {
        /// Organization ID
        #[arg(short, long)]
        org: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Move a folder and its subtree under another folder
    Move {
        /// Name of the folder to move
        #[arg(short, long)]
        name: String,
        /// Name of the new parent folder
        #[arg(short, long)]
        to: String,
    },
    /// Show an organization's folder tree
    Tree {
        /// Organization ID
        #[arg(short, long)]
        org: String,
    },
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    service: &FolderService,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FolderCommand::List { org } => {
            let folders = match org {
                Some(raw) => service.list_by_org(super::parse_org_id(raw)?).await,
                None => service.list_all().await,
            };
            output::print_folders(&folders, format);
        }
        FolderCommand::Exists { org } => {
            let org_id = super::parse_org_id(org)?;
            let exists = service.org_exists(org_id).await;
            match format {
                OutputFormat::Json => output::print_item(&exists, format),
                OutputFormat::Table => {
                    output::print_kv("Organization", &org_id.to_string());
                    output::print_kv("Has folders", if exists { "yes" } else { "no" });
                }
            }
        }
        FolderCommand::Children { org, name } => {
            let org_id = super::parse_org_id(org)?;
            let folders = service.descendants(org_id, name).await?;
            output::print_folders(&folders, format);
        }
        FolderCommand::Move { name, to } => {
            let folders = service.move_folder(name, to).await?;
            if format == OutputFormat::Table {
                output::print_success(&format!("Moved '{}' under '{}'", name, to));
            }
            output::print_folders(&folders, format);
        }
        FolderCommand::Tree { org } => {
            let tree = service.tree_for_org(super::parse_org_id(org)?).await?;
            match format {
                OutputFormat::Json => output::print_item(&tree, format),
                OutputFormat::Table => print!("{}", tree.render()),
            }
        }
    }

    Ok(())
}
