//! `mrt citation` command - citation management
//!
//! Citations are append-only rows; there is no update or delete path.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{escape_csv, open_store, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::citation::{Citation, UNLINKED};

#[derive(Subcommand, Debug)]
pub enum CitationCommands {
    /// List citations with filtering
    List(ListArgs),

    /// Add a new citation
    Add(AddArgs),

    /// Export citations as formatted references
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by publication year (exact match)
    #[arg(long, short = 'y')]
    pub year: Option<String>,

    /// Filter by associated project title
    #[arg(long, short = 'p')]
    pub project: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Publication title
    #[arg(long)]
    pub title: String,

    /// Authors (comma-separated)
    #[arg(long)]
    pub authors: String,

    /// Publication year
    #[arg(long)]
    pub year: String,

    /// Journal or conference
    #[arg(long, default_value = "")]
    pub journal: String,

    /// DOI (if available)
    #[arg(long)]
    pub doi: Option<String>,

    /// Associate with a project by title
    #[arg(long, default_value = UNLINKED)]
    pub project: String,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Citation style (default: workspace setting)
    #[arg(long, short = 's')]
    pub style: Option<String>,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(cmd: CitationCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CitationCommands::List(args) => run_list(args, global),
        CitationCommands::Add(args) => run_add(args, global),
        CitationCommands::Export(args) => run_export(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let mut citations = store
        .load_citations()
        .map_err(|e| miette::miette!("{}", e))?;

    if let Some(ref year) = args.year {
        citations.retain(|c| &c.year == year);
    }
    if let Some(ref project) = args.project {
        citations.retain(|c| &c.project == project);
    }

    if citations.is_empty() {
        match global.format {
            OutputFormat::Json => println!("[]"),
            _ => println!("No citations found."),
        }
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&citations).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            println!("title,authors,year,journal,doi,project");
            for c in &citations {
                println!(
                    "{},{},{},{},{},{}",
                    escape_csv(&c.title),
                    escape_csv(&c.authors),
                    c.year,
                    escape_csv(&c.journal),
                    c.doi.as_deref().unwrap_or(""),
                    escape_csv(&c.project)
                );
            }
        }
        OutputFormat::Md => {
            println!("| Title | Authors | Year | Journal | Project |");
            println!("|---|---|---|---|---|");
            for c in &citations {
                println!(
                    "| {} | {} | {} | {} | {} |",
                    c.title.replace('|', "\\|"),
                    c.authors.replace('|', "\\|"),
                    c.year,
                    c.journal.replace('|', "\\|"),
                    c.project
                );
            }
        }
        _ => {
            println!(
                "{:<34} {:<24} {:<6} {:<22} {:<18}",
                style("TITLE").bold(),
                style("AUTHORS").bold(),
                style("YEAR").bold(),
                style("JOURNAL").bold(),
                style("PROJECT").bold()
            );
            println!("{}", "-".repeat(106));
            for c in &citations {
                println!(
                    "{:<34} {:<24} {:<6} {:<22} {:<18}",
                    truncate_str(&c.title, 32),
                    truncate_str(&c.authors, 22),
                    c.year,
                    truncate_str(&c.journal, 20),
                    truncate_str(&c.project, 16)
                );
            }
            println!();
            println!("{} citation(s) found", style(citations.len()).cyan());
        }
    }

    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    let citation = Citation::new(
        args.title,
        args.authors,
        args.year,
        args.journal,
        args.doi,
        args.project,
    )
    .map_err(|e| miette::miette!("{}", e))?;

    // Soft reference only: warn about an unknown project but append anyway.
    if citation.is_linked() {
        let known = store
            .find_project(&citation.project)
            .map_err(|e| miette::miette!("{}", e))?
            .is_some();
        if !known && !global.quiet {
            eprintln!(
                "{} No project titled '{}'; the citation is stored with the reference as given",
                style("!").yellow(),
                citation.project
            );
        }
    }

    store
        .append_citation(&citation)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added citation {}",
        style("✓").green(),
        style(&citation.title).cyan()
    );

    Ok(())
}

fn run_export(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let citations = store
        .load_citations()
        .map_err(|e| miette::miette!("{}", e))?;

    if citations.is_empty() {
        println!("No citations to export.");
        return Ok(());
    }

    let settings = store.load_settings().map_err(|e| miette::miette!("{}", e))?;
    let style_name = args.style.unwrap_or(settings.citation_style);

    if !style_name.eq_ignore_ascii_case("apa") {
        return Err(miette::miette!(
            "unsupported citation style: '{}'. Only APA export is implemented",
            style_name
        ));
    }

    let formatted: Vec<String> = citations.iter().map(Citation::export_line).collect();
    let body = formatted.join("\n\n");

    match args.output {
        Some(path) => {
            std::fs::write(&path, &body).into_diagnostic()?;
            println!(
                "{} Exported {} citation(s) to {}",
                style("✓").green(),
                citations.len(),
                style(path.display()).dim()
            );
        }
        None => println!("{}", body),
    }

    Ok(())
}
