//! Sample folder data: deterministic generation and JSON files.

use std::collections::HashSet;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use uuid::Builder;

use orgtree_core::config::seed::SeedConfig;
use orgtree_core::error::{AppError, ErrorKind};
use orgtree_core::result::AppResult;
use orgtree_core::types::OrgId;
use orgtree_entity::folder::Folder;

const ADJECTIVES: &[&str] = &[
    "stunning", "magnetic", "hip", "noble", "golden", "quiet", "rapid", "steady", "clever",
    "fancy", "brave", "sharp", "vivid", "lucky", "proud", "gentle", "bold", "calm", "eager",
    "fierce", "witty", "polite", "sunny", "crisp",
];

const NOUNS: &[&str] = &[
    "horridus", "stingray", "sinister-six", "cobra", "falcon", "otter", "badger", "mantis",
    "raven", "lynx", "gecko", "heron", "marlin", "viper", "condor", "bison", "ibis", "jackal",
    "kestrel", "lemur", "narwhal", "osprey", "puffin", "quokka",
];

/// Attempts at a fresh `adjective-noun` pair before falling back to a suffix.
const NAME_ATTEMPTS: usize = 32;

/// Generates sample folder hierarchies.
///
/// Output depends only on the [`SeedConfig`]; folder names are unique across
/// the whole generated set, so they can be used with global name lookup.
#[derive(Debug)]
pub struct SampleGenerator {
    config: SeedConfig,
    rng: StdRng,
    used_names: HashSet<String>,
}

impl SampleGenerator {
    /// Creates a generator seeded from `config.rng_seed`.
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            config: config.clone(),
            rng: StdRng::seed_from_u64(config.rng_seed),
            used_names: HashSet::new(),
        }
    }

    /// Generates the full folder set.
    ///
    /// Folders are emitted organization by organization, each parent before
    /// its children.
    pub fn generate(mut self) -> Vec<Folder> {
        let mut folders = Vec::new();

        for org_index in 0..self.config.org_count {
            let org_id = if org_index == 0 {
                self.config.default_org_id
            } else {
                OrgId::from_uuid(Builder::from_random_bytes(self.rng.r#gen()).into_uuid())
            };

            for _ in 0..self.config.roots_per_org {
                let root = Folder::root(self.fresh_name(), org_id);
                self.grow(&root, 0, &mut folders);
            }
            debug!(org_id = %org_id, "Generated sample organization");
        }

        info!(
            orgs = self.config.org_count,
            folders = folders.len(),
            "Generated sample folders"
        );
        folders
    }

    fn grow(&mut self, folder: &Folder, depth: usize, out: &mut Vec<Folder>) {
        out.push(folder.clone());
        if depth >= self.config.max_depth {
            return;
        }
        let child_count = self.rng.gen_range(0..=self.config.max_children);
        for _ in 0..child_count {
            let child = Folder::child_of(folder, self.fresh_name());
            self.grow(&child, depth + 1, out);
        }
    }

    fn fresh_name(&mut self) -> String {
        for _ in 0..NAME_ATTEMPTS {
            let candidate = self.random_pair();
            if self.used_names.insert(candidate.clone()) {
                return candidate;
            }
        }
        let base = self.random_pair();
        let mut suffix = 2;
        loop {
            let candidate = format!("{base}-{suffix}");
            if self.used_names.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }

    fn random_pair(&mut self) -> String {
        let adjective = ADJECTIVES.choose(&mut self.rng).copied().unwrap_or("plain");
        let noun = NOUNS.choose(&mut self.rng).copied().unwrap_or("folder");
        format!("{adjective}-{noun}")
    }
}

/// Generates sample folders according to `config`.
pub fn generate(config: &SeedConfig) -> Vec<Folder> {
    SampleGenerator::new(config).generate()
}

/// Reads a JSON array of folders.
pub async fn load_from_file(path: impl AsRef<Path>) -> AppResult<Vec<Folder>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read folder data '{}'", path.display()),
            e,
        )
    })?;
    let folders: Vec<Folder> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), count = folders.len(), "Loaded folder data");
    Ok(folders)
}

/// Writes folders as a pretty-printed JSON array, creating parent directories.
pub async fn write_to_file(path: impl AsRef<Path>, folders: &[Folder]) -> AppResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(folders)?;
    tokio::fs::write(path, json).await?;
    info!(path = %path.display(), count = folders.len(), "Wrote folder data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgtree_entity::folder::path;

    fn small_config() -> SeedConfig {
        SeedConfig {
            rng_seed: 7,
            org_count: 2,
            roots_per_org: 2,
            max_depth: 2,
            max_children: 3,
            ..SeedConfig::default()
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = small_config();
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn test_generated_names_are_unique_and_match_paths() {
        let folders = generate(&SeedConfig::default());
        let mut names = HashSet::new();
        for folder in &folders {
            assert!(names.insert(folder.name.as_str()), "duplicate {}", folder.name);
            assert_eq!(path::last_segment(&folder.path), folder.name);
            assert!(folder.depth() <= SeedConfig::default().max_depth);
        }
    }

    #[test]
    fn test_parents_precede_children_within_org() {
        let folders = generate(&small_config());
        for (i, folder) in folders.iter().enumerate() {
            if let Some(parent) = path::parent_path(&folder.path) {
                assert!(
                    folders[..i]
                        .iter()
                        .any(|f| f.path == parent && f.org_id == folder.org_id),
                    "parent of {} missing",
                    folder.path
                );
            }
        }
    }

    #[test]
    fn test_first_org_is_default() {
        let config = small_config();
        let folders = generate(&config);
        assert_eq!(folders[0].org_id, config.default_org_id);
        let orgs: HashSet<_> = folders.iter().map(|f| f.org_id).collect();
        assert_eq!(orgs.len(), 2);
    }

    #[test]
    fn test_roots_only_when_depth_zero() {
        let config = SeedConfig {
            max_depth: 0,
            ..small_config()
        };
        let folders = generate(&config);
        assert_eq!(folders.len(), 4);
        assert!(folders.iter().all(Folder::is_root));
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("nested").join("folders.json");
        let folders = generate(&small_config());

        write_to_file(&file, &folders).await.expect("write");
        let loaded = load_from_file(&file).await.expect("load");
        assert_eq!(loaded, folders);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_from_file(dir.path().join("absent.json"))
            .await
            .expect_err("missing file");
        assert_eq!(err.kind, ErrorKind::Io);
    }
}
