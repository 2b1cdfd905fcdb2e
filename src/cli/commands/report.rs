//! `mrt report` command - assemble and list research reports

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::open_store;
use crate::cli::GlobalOpts;
use crate::report::assemble;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Assemble a report for a project and save it under data/reports/
    Generate(GenerateArgs),

    /// List previously generated reports
    List,
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Project title to report on
    #[arg(long, short = 'p')]
    pub project: String,

    /// Results text for the report (default: the project's results field)
    #[arg(long)]
    pub results: Option<String>,

    /// Write to this path instead of data/reports/
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the report without saving it
    #[arg(long)]
    pub no_save: bool,
}

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ReportCommands::Generate(args) => run_generate(args, global),
        ReportCommands::List => run_list(global),
    }
}

fn run_generate(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    let project = store
        .find_project(&args.project)
        .map_err(|e| miette::miette!("{}", e))?
        .ok_or_else(|| miette::miette!("no project found with title '{}'", args.project))?;

    let citations: Vec<_> = store
        .load_citations()
        .map_err(|e| miette::miette!("{}", e))?
        .into_iter()
        .filter(|c| c.project == project.title)
        .collect();

    // Analysis results are a single summary entry, either passed on the
    // command line or taken from the project's results field.
    let results_text = args
        .results
        .or_else(|| project.results.clone())
        .unwrap_or_default();
    let analysis_results: Vec<(String, String)> = if results_text.is_empty() {
        Vec::new()
    } else {
        vec![("summary".to_string(), results_text)]
    };

    let today = chrono::Local::now().date_naive();
    let report = assemble(&project, &analysis_results, &citations, today);

    if !args.no_save {
        let path = match args.output {
            Some(path) => path,
            None => store
                .reports_dir()
                .join(format!("research_report_{}.txt", today.format("%Y%m%d"))),
        };
        std::fs::write(&path, &report).into_diagnostic()?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            style(path.display()).dim()
        );
        println!();
    }

    if !global.quiet {
        println!("{}", report);
    }

    Ok(())
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let dir = store.reports_dir();

    let mut names: Vec<String> = Vec::new();
    if dir.exists() {
        for entry in std::fs::read_dir(&dir).into_diagnostic()? {
            let entry = entry.into_diagnostic()?;
            if entry.path().extension().is_some_and(|e| e == "txt") {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
    }
    names.sort();

    if names.is_empty() {
        println!("No saved reports found");
        return Ok(());
    }

    for name in &names {
        println!("{}", name);
    }
    println!();
    println!("{} report(s) found", style(names.len()).cyan());

    Ok(())
}
