// ABOUTME: Library root for dumpinfo - exposes the reporter and snapshots.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod inventory;
pub mod output;
pub mod report;
pub mod snapshot;
