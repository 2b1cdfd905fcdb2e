//! `mrt init` command - workspace initialization
//!
//! Storage initialization is the one operation whose failure is fatal: the
//! error propagates out and the process exits before anything else runs.

use console::style;
use std::path::PathBuf;

use miette::Result;

use crate::core::Store;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    pub path: Option<PathBuf>,
}

pub fn run(args: InitArgs) -> Result<()> {
    let target = match args.path {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| miette::miette!("{}", e))?,
    };

    if !target.exists() {
        std::fs::create_dir_all(&target).map_err(|e| miette::miette!("{}", e))?;
    }

    let store = Store::init(&target).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Initialized research workspace",
        style("✓").green()
    );
    println!("   {}", style(store.data_dir().display()).dim());
    println!();
    println!("Create a project with: {}", style("mrt project new --title \"...\"").yellow());

    Ok(())
}
