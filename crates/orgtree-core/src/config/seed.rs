//! Sample data generation configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::OrgId;

/// Organization that always receives generated folders, so demos and docs
/// can refer to it by a stable id.
pub const DEFAULT_ORG_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

/// Settings for the deterministic sample folder generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// RNG seed; the same seed always yields the same folder set.
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
    /// Number of organizations to generate.
    #[serde(default = "default_org_count")]
    pub org_count: usize,
    /// Root folders per organization.
    #[serde(default = "default_roots_per_org")]
    pub roots_per_org: usize,
    /// Maximum depth below a root (0 = roots only).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Maximum children per folder.
    #[serde(default = "default_max_children")]
    pub max_children: usize,
    /// Id of the first generated organization.
    #[serde(default = "default_org_id")]
    pub default_org_id: OrgId,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: default_rng_seed(),
            org_count: default_org_count(),
            roots_per_org: default_roots_per_org(),
            max_depth: default_max_depth(),
            max_children: default_max_children(),
            default_org_id: default_org_id(),
        }
    }
}

fn default_rng_seed() -> u64 {
    42
}

fn default_org_count() -> usize {
    3
}

fn default_roots_per_org() -> usize {
    3
}

fn default_max_depth() -> usize {
    3
}

fn default_max_children() -> usize {
    3
}

fn default_org_id() -> OrgId {
    Uuid::parse_str(DEFAULT_ORG_ID)
        .map(OrgId::from_uuid)
        .unwrap_or_else(|_| OrgId::nil())
}
