// ABOUTME: Naming-service bindings snapshot under a fixed root context.
// ABOUTME: Lookup failures are logged and degrade to an empty snapshot.

use super::{KeyValueSnapshot, Snapshot};
use std::io;
use std::path::{Path, PathBuf};

/// Context the directory snapshot lists when none is configured.
pub const DEFAULT_ROOT_CONTEXT: &str = "comp/env";

/// One name bound in a naming context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub class_name: String,
}

impl Binding {
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
        }
    }
}

/// Errors from naming-service lookups.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    #[error("naming service unreachable: {0}")]
    Unreachable(String),

    #[error("naming context not found: {0}")]
    ContextNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A hierarchical lookup service binding names to objects.
pub trait NamingService {
    /// List the bindings directly under `context`.
    fn list_bindings(&self, context: &str) -> Result<Vec<Binding>, NamingError>;
}

impl<T: NamingService + ?Sized> NamingService for &T {
    fn list_bindings(&self, context: &str) -> Result<Vec<Binding>, NamingError> {
        (**self).list_bindings(context)
    }
}

/// Naming service backed by a directory tree.
///
/// Contexts are `/`-separated paths under `base`. Sub-directories are bound
/// as `"context"`, every other entry as `"entry"`.
#[derive(Debug, Clone)]
pub struct FsNamingService {
    base: PathBuf,
}

impl FsNamingService {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn resolve(&self, context: &str) -> PathBuf {
        context
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.base.clone(), |path, part| path.join(part))
    }
}

impl NamingService for FsNamingService {
    fn list_bindings(&self, context: &str) -> Result<Vec<Binding>, NamingError> {
        if !self.base.is_dir() {
            return Err(NamingError::Unreachable(self.base.display().to_string()));
        }

        let dir = self.resolve(context);
        if !dir.is_dir() {
            return Err(NamingError::ContextNotFound(context.to_string()));
        }

        let mut bindings = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let class_name = if entry.file_type()?.is_dir() {
                "context"
            } else {
                "entry"
            };
            bindings.push(Binding::new(
                entry.file_name().to_string_lossy(),
                class_name,
            ));
        }
        Ok(bindings)
    }
}

/// Bindings under one root context of a naming service, keyed by name.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot<N> {
    service: N,
    root: String,
}

impl<N: NamingService> DirectorySnapshot<N> {
    /// Snapshot of [`DEFAULT_ROOT_CONTEXT`].
    pub fn new(service: N) -> Self {
        Self::with_root(service, DEFAULT_ROOT_CONTEXT)
    }

    pub fn with_root(service: N, root: impl Into<String>) -> Self {
        Self {
            service,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }
}

impl<N: NamingService> Snapshot for DirectorySnapshot<N> {
    fn capture(&self) -> KeyValueSnapshot {
        match self.service.list_bindings(&self.root) {
            Ok(bindings) => bindings
                .into_iter()
                .map(|b| (b.name, b.class_name))
                .collect(),
            Err(e) => {
                tracing::warn!(context = %self.root, "directory lookup failed: {e}");
                KeyValueSnapshot::new()
            }
        }
    }
}
