// ABOUTME: Diagnostic report written to a job's console log at setup time.
// ABOUTME: Server line first, then optional node, tool, and plugin sections.

mod format;
mod messages;

pub use format::{
    dump_nodes, dump_plugins, dump_server, dump_tools, format_node, format_node_url,
    format_plugin, format_server, format_tool,
};
pub use messages::{MessageId, render};

use crate::config::Config;
use crate::inventory::HostInventory;
use std::io::{self, Write};

/// Which optional sections a report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub include_nodes: bool,
    pub include_tools: bool,
    pub include_plugins: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_nodes: true,
            include_tools: true,
            include_plugins: true,
        }
    }
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        Self {
            include_nodes: config.dump_nodes,
            include_tools: config.dump_tools,
            include_plugins: config.dump_plugins,
        }
    }
}

/// Writes host facts to a console sink.
pub struct DiagnosticReporter<'a, H: HostInventory + ?Sized> {
    host: &'a H,
}

impl<'a, H: HostInventory + ?Sized> DiagnosticReporter<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self { host }
    }

    /// Run one report pass. Does nothing when `sink` is `None`.
    pub fn run<W: Write + ?Sized>(
        &self,
        sink: Option<&mut W>,
        options: &ReportOptions,
    ) -> io::Result<()> {
        let Some(sink) = sink else {
            return Ok(());
        };

        dump_server(Some(&mut *sink), self.host.server())?;

        if options.include_nodes {
            tracing::debug!("dumping nodes");
            dump_nodes(Some(&mut *sink), self.host.root_url(), self.host.nodes())?;
        }

        if options.include_tools {
            tracing::debug!("dumping JDK tools");
            dump_tools(Some(&mut *sink), self.host.jdks())?;
        }

        if options.include_plugins {
            tracing::debug!("dumping plugins");
            dump_plugins(Some(&mut *sink), self.host.plugins())?;
        }

        Ok(())
    }
}
