//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use orgtree_entity::folder::Folder;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
pub struct FolderRow {
    /// Name
    name: String,
    /// Path
    path: String,
    /// Depth
    depth: usize,
    /// Organization
    org_id: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            name: f.name.clone(),
            path: f.path.clone(),
            depth: f.depth(),
            org_id: f.org_id.to_string(),
        }
    }
}

/// Print folders in the selected format.
///
/// JSON keeps the entity's own field names so the output can be fed back
/// through `--data`.
pub fn print_folders(folders: &[Folder], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            print_list(&rows, format);
        }
        OutputFormat::Json => print_item(&folders, format),
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("Error: {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
