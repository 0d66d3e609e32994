//! Integration tests for the OrgTree workspace.

mod folder_test;
mod helpers;
mod seed_test;
