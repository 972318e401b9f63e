// ABOUTME: Config scaffolding for new jobs.
// ABOUTME: Creates dumpinfo.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = generate_template_yaml(&Config::default());
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"# Sections written to the console log at job setup.
# The server identity line is always written.
dump_nodes: {}
dump_tools: {}
dump_plugins: {}
"#,
        config.dump_nodes, config.dump_tools, config.dump_plugins
    )
}
