//! Core type definitions used across the OrgTree workspace.

pub mod id;

pub use id::*;
