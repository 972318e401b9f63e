// ABOUTME: Per-entity line formatters and the section writers built on them.
// ABOUTME: Absent sinks and absent collections produce no output.

use super::messages::{MessageId, render};
use crate::inventory::{Node, PluginDescriptor, ServerIdentity, ToolInstallation};
use std::io::{self, Write};

/// `"<display_name> v<version>"`
pub fn format_server(identity: &ServerIdentity) -> String {
    render(MessageId::Server, &[&identity.display_name, &identity.version])
}

/// Join a node's relative URL onto the server root URL.
///
/// Plain concatenation: the path is not encoded and slashes are not
/// normalized, so `"a b"` stays `"a b"`.
pub fn format_node_url(base_url: &str, relative_url: &str) -> String {
    format!("{base_url}/{relative_url}")
}

pub fn format_node(base_url: &str, node: &Node) -> String {
    let id = if node.online {
        MessageId::NodeOnline
    } else {
        MessageId::NodeOffline
    };
    let url = format_node_url(base_url, &node.url);
    render(id, &[&node.display_name, &node.executors, &url])
}

/// `"<name> at <home>"`
pub fn format_tool(tool: &ToolInstallation) -> String {
    render(MessageId::ToolJdk, &[&tool.name, &tool.home])
}

/// `"<long_name> v<version> - <url>"`
pub fn format_plugin(plugin: &PluginDescriptor) -> String {
    render(
        MessageId::Plugin,
        &[&plugin.long_name, &plugin.version, &plugin.url],
    )
}

/// Write the server identity line.
pub fn dump_server<W: Write + ?Sized>(
    sink: Option<&mut W>,
    identity: Option<&ServerIdentity>,
) -> io::Result<()> {
    let (Some(sink), Some(identity)) = (sink, identity) else {
        return Ok(());
    };
    writeln!(sink, "{}", format_server(identity))
}

/// Write one line per node, in the order given.
pub fn dump_nodes<W: Write + ?Sized>(
    sink: Option<&mut W>,
    base_url: &str,
    nodes: Option<&[Node]>,
) -> io::Result<()> {
    let (Some(sink), Some(nodes)) = (sink, nodes) else {
        return Ok(());
    };
    for node in nodes {
        writeln!(sink, "{}", format_node(base_url, node))?;
    }
    Ok(())
}

/// Write one line per JDK, in the order given.
pub fn dump_tools<W: Write + ?Sized>(
    sink: Option<&mut W>,
    tools: Option<&[ToolInstallation]>,
) -> io::Result<()> {
    let (Some(sink), Some(tools)) = (sink, tools) else {
        return Ok(());
    };
    for tool in tools {
        writeln!(sink, "{}", format_tool(tool))?;
    }
    Ok(())
}

/// Write one line per plugin, in the order given.
pub fn dump_plugins<W: Write + ?Sized>(
    sink: Option<&mut W>,
    plugins: Option<&[PluginDescriptor]>,
) -> io::Result<()> {
    let (Some(sink), Some(plugins)) = (sink, plugins) else {
        return Ok(());
    };
    for plugin in plugins {
        writeln!(sink, "{}", format_plugin(plugin))?;
    }
    Ok(())
}
