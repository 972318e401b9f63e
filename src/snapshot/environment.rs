// ABOUTME: Environment variable and system property snapshots.
// ABOUTME: Read live from the process on every capture; nothing is cached.

use super::{KeyValueSnapshot, Snapshot};
use std::ffi::OsString;

/// Process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentSnapshot;

impl EnvironmentSnapshot {
    /// Build a snapshot from arbitrary OS string pairs. Later duplicates win.
    pub fn from_pairs<I>(pairs: I) -> KeyValueSnapshot
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

impl Snapshot for EnvironmentSnapshot {
    fn capture(&self) -> KeyValueSnapshot {
        // vars_os: std::env::vars panics on non-UTF-8 entries
        Self::from_pairs(std::env::vars_os())
    }
}

/// Process-level properties: platform, paths, identity of this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPropertiesSnapshot;

impl Snapshot for SystemPropertiesSnapshot {
    fn capture(&self) -> KeyValueSnapshot {
        let mut map = KeyValueSnapshot::new();

        map.insert("crate.version".into(), env!("CARGO_PKG_VERSION").into());
        map.insert(
            "file.separator".into(),
            std::path::MAIN_SEPARATOR.to_string(),
        );
        map.insert(
            "host.name".into(),
            gethostname::gethostname().to_string_lossy().into_owned(),
        );
        map.insert("os.arch".into(), std::env::consts::ARCH.into());
        map.insert("os.family".into(), std::env::consts::FAMILY.into());
        map.insert("os.name".into(), std::env::consts::OS.into());
        map.insert("path.separator".into(), path_separator().into());
        map.insert("process.id".into(), std::process::id().to_string());
        map.insert(
            "tmp.dir".into(),
            std::env::temp_dir().to_string_lossy().into_owned(),
        );

        if let Ok(exe) = std::env::current_exe() {
            map.insert(
                "process.executable".into(),
                exe.to_string_lossy().into_owned(),
            );
        }

        if let Ok(cwd) = std::env::current_dir() {
            map.insert("user.dir".into(), cwd.to_string_lossy().into_owned());
        }

        map
    }
}

fn path_separator() -> &'static str {
    if cfg!(windows) { ";" } else { ":" }
}
