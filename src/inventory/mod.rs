// ABOUTME: Host inventory accessors injected into the reporter.
// ABOUTME: Provides the HostInventory trait and a YAML-backed implementation.

mod types;

pub use types::{Node, PluginDescriptor, ServerIdentity, ToolInstallation};

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Read-only access to the host's model of itself.
///
/// Every collection accessor returns `None` when the host has no such
/// collection at all, which the reporter treats the same as an empty one.
pub trait HostInventory {
    /// Server identity, if the host exposes one.
    fn server(&self) -> Option<&ServerIdentity>;

    /// Externally configured root URL of the server.
    fn root_url(&self) -> &str;

    fn nodes(&self) -> Option<&[Node]>;

    fn jdks(&self) -> Option<&[ToolInstallation]>;

    fn plugins(&self) -> Option<&[PluginDescriptor]>;
}

/// Host data materialized from a YAML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub root_url: String,

    #[serde(default)]
    pub server: Option<ServerIdentity>,

    #[serde(default)]
    pub nodes: Option<Vec<Node>>,

    #[serde(default)]
    pub jdks: Option<Vec<ToolInstallation>>,

    #[serde(default)]
    pub plugins: Option<Vec<PluginDescriptor>>,
}

impl Inventory {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

impl HostInventory for Inventory {
    fn server(&self) -> Option<&ServerIdentity> {
        self.server.as_ref()
    }

    fn root_url(&self) -> &str {
        &self.root_url
    }

    fn nodes(&self) -> Option<&[Node]> {
        self.nodes.as_deref()
    }

    fn jdks(&self) -> Option<&[ToolInstallation]> {
        self.jdks.as_deref()
    }

    fn plugins(&self) -> Option<&[PluginDescriptor]> {
        self.plugins.as_deref()
    }
}
