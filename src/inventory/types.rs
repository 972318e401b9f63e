// ABOUTME: Read-only views of host data: server, nodes, JDK tools, plugins.
// ABOUTME: Constructed by the host before a report runs; never mutated here.

use serde::Deserialize;

/// Identity of the CI server a job runs on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerIdentity {
    pub display_name: String,
    pub version: String,
}

impl ServerIdentity {
    pub fn new(display_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            version: version.into(),
        }
    }
}

/// A worker node registered with the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Node {
    pub display_name: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub executors: u32,
    /// Path relative to the server's root URL, e.g. `computer/agent-1`.
    pub url: String,
}

impl Node {
    pub fn online(display_name: impl Into<String>, executors: u32, url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            online: true,
            executors,
            url: url.into(),
        }
    }

    pub fn offline(
        display_name: impl Into<String>,
        executors: u32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            online: false,
            ..Self::online(display_name, executors, url)
        }
    }
}

/// A JDK configured centrally on the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolInstallation {
    pub name: String,
    pub home: String,
}

impl ToolInstallation {
    pub fn new(name: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home: home.into(),
        }
    }
}

/// Metadata about an installed server plugin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginDescriptor {
    pub long_name: String,
    pub version: String,
    #[serde(default)]
    pub url: String,
}

impl PluginDescriptor {
    pub fn new(
        long_name: impl Into<String>,
        version: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            long_name: long_name.into(),
            version: version.into(),
            url: url.into(),
        }
    }
}
