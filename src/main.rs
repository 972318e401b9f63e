// ABOUTME: Entry point for the dumpinfo CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use dumpinfo::config::{self, Config};
use dumpinfo::error::Result;
use dumpinfo::inventory::Inventory;
use dumpinfo::output::{Output, OutputMode};
use dumpinfo::report::{DiagnosticReporter, ReportOptions};
use dumpinfo::snapshot::{
    DirectorySnapshot, EnvironmentSnapshot, FsNamingService, Snapshot, SystemPropertiesSnapshot,
};
use std::env;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)
        }
        Commands::Report {
            inventory,
            config,
            no_nodes,
            no_tools,
            no_plugins,
        } => {
            let config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::discover_or_default(&env::current_dir()?)?,
            };

            let mut options = ReportOptions::from(&config);
            options.include_nodes &= !no_nodes;
            options.include_tools &= !no_tools;
            options.include_plugins &= !no_plugins;

            let inventory = Inventory::load(&inventory)?;
            DiagnosticReporter::new(&inventory).run(Some(&mut out), &options)?;
            out.flush()?;
            Ok(())
        }
        Commands::Env { json } => print_snapshot(&mut out, &EnvironmentSnapshot, json),
        Commands::Props { json } => print_snapshot(&mut out, &SystemPropertiesSnapshot, json),
        Commands::Bindings {
            base,
            context,
            json,
        } => {
            let base = match base {
                Some(base) => base,
                None => env::current_dir()?,
            };
            let snapshot = DirectorySnapshot::with_root(FsNamingService::new(base), context);
            print_snapshot(&mut out, &snapshot, json)
        }
    }
}

fn print_snapshot(out: &mut impl Write, source: &impl Snapshot, json: bool) -> Result<()> {
    Output::new(OutputMode::from_json_flag(json)).snapshot(out, &source.capture())?;
    out.flush()?;
    Ok(())
}
