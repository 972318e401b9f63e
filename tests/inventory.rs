// ABOUTME: Integration tests for inventory file parsing.
// ABOUTME: Tests YAML sections, defaults, and host-order preservation.

use dumpinfo::inventory::*;

#[test]
fn parse_full_inventory() {
    let yaml = r#"
root_url: http://ci.example.com
server:
  display_name: Jenkins
  version: "2.440.1"
nodes:
  - display_name: built-in
    online: true
    executors: 2
    url: computer/(built-in)
  - display_name: linux-agent
    executors: 4
    url: computer/linux-agent
jdks:
  - name: jdk17
    home: /opt/java/jdk17
plugins:
  - long_name: Git plugin
    version: "5.2.1"
    url: https://plugins.jenkins.io/git
  - long_name: Ant Plugin
    version: "1.0"
"#;
    let inventory = Inventory::from_yaml(yaml).unwrap();

    assert_eq!(inventory.root_url(), "http://ci.example.com");
    assert_eq!(
        inventory.server(),
        Some(&ServerIdentity::new("Jenkins", "2.440.1"))
    );

    let nodes = inventory.nodes().unwrap();
    assert_eq!(nodes.len(), 2);
    assert!(nodes[0].online);
    assert!(!nodes[1].online, "online defaults to false");
    assert_eq!(nodes[1].executors, 4);

    assert_eq!(
        inventory.jdks(),
        Some(&[ToolInstallation::new("jdk17", "/opt/java/jdk17")][..])
    );

    let plugins = inventory.plugins().unwrap();
    let names: Vec<_> = plugins.iter().map(|p| p.long_name.as_str()).collect();
    assert_eq!(names, ["Git plugin", "Ant Plugin"], "host order is kept");
    assert_eq!(plugins[1].url, "");
}

#[test]
fn missing_required_node_field_returns_error() {
    let yaml = r#"
nodes:
  - display_name: agent
"#;
    let err = Inventory::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("url"));
}

#[test]
fn load_reads_from_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("inventory.yml");
    std::fs::write(&path, "root_url: http://ci\n").unwrap();

    let inventory = Inventory::load(&path).unwrap();
    assert_eq!(inventory.root_url(), "http://ci");
}
