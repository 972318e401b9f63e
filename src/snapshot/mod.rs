// ABOUTME: Sorted key/value snapshots of process and directory state.
// ABOUTME: Standalone helpers; the console report does not include them.

mod directory;
mod environment;

pub use directory::{
    Binding, DEFAULT_ROOT_CONTEXT, DirectorySnapshot, FsNamingService, NamingError, NamingService,
};
pub use environment::{EnvironmentSnapshot, SystemPropertiesSnapshot};

use std::collections::BTreeMap;

/// Key/value pairs ordered ascending by key.
pub type KeyValueSnapshot = BTreeMap<String, String>;

/// A source that can be read into a fresh snapshot.
pub trait Snapshot {
    fn capture(&self) -> KeyValueSnapshot;
}
