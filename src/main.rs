//! OrgTree demo: generates sample organizations, then walks through listing,
//! descendant lookup, and a subtree move.

use tracing_subscriber::{EnvFilter, fmt};

use orgtree_core::config::AppConfig;
use orgtree_core::error::AppError;
use orgtree_entity::folder::{Folder, path};
use orgtree_service::{FolderService, seed};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Demo failed: {}", e);
        eprintln!("\n Error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("ORGTREE_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("ORGTREE_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
        .map_err(|e| AppError::configuration(format!("Config load error: {}", e)))
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(config.logging.filter_directive(rust_log.as_deref()));

    if config.logging.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Demo run
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting OrgTree demo v{}", env!("CARGO_PKG_VERSION"));

    let org_id = config.seed.default_org_id;
    let service = FolderService::from_folders(seed::generate(&config.seed));

    let all = service.list_all().await;
    pretty_print(&all)?;

    let org_folders = service.list_by_org(org_id).await;
    println!("\n Folders for orgID: {}", org_id);
    pretty_print(&org_folders)?;

    let roots: Vec<&Folder> = org_folders.iter().filter(|f| f.is_root()).collect();
    let Some(first_root) = roots.first() else {
        println!("\n Organization {} has no folders to explore", org_id);
        return Ok(());
    };

    println!("\n Get all child folders of {}", first_root.name);
    let children = service.descendants(org_id, &first_root.name).await?;
    pretty_print(&children)?;

    // Move the first child of the second root under the first root.
    let candidate = roots.get(1).and_then(|second| {
        org_folders
            .iter()
            .find(|f| path::parent_path(&f.path) == Some(second.path.as_str()))
    });

    match candidate {
        Some(source) => {
            println!("\n Move {} under {}", source.name, first_root.name);
            let moved = service.move_folder(&source.name, &first_root.name).await?;
            pretty_print(&moved)?;
        }
        None => println!("\n No folder available to move in organization {}", org_id),
    }

    Ok(())
}

/// Print folders as indented JSON
fn pretty_print(folders: &[Folder]) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(folders)?;
    println!("{}", json);
    Ok(())
}
