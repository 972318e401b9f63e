// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dumpinfo")]
#[command(about = "Dump CI server, node, JDK, and plugin information to a job log")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new dumpinfo.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Write the diagnostic report for a host inventory
    Report {
        /// Inventory file describing the server, nodes, JDKs, and plugins
        inventory: PathBuf,

        /// Configuration file (default: discovered in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the node section
        #[arg(long)]
        no_nodes: bool,

        /// Skip the JDK section
        #[arg(long)]
        no_tools: bool,

        /// Skip the plugin section
        #[arg(long)]
        no_plugins: bool,
    },

    /// Print environment variables, sorted by name
    Env {
        #[arg(long)]
        json: bool,
    },

    /// Print process properties, sorted by name
    Props {
        #[arg(long)]
        json: bool,
    },

    /// Print naming-directory bindings, sorted by name
    Bindings {
        /// Directory acting as the naming service (default: current directory)
        #[arg(long)]
        base: Option<PathBuf>,

        /// Root context to list
        #[arg(long, default_value = dumpinfo::snapshot::DEFAULT_ROOT_CONTEXT)]
        context: String,

        #[arg(long)]
        json: bool,
    },
}
