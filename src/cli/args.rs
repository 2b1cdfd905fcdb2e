//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    analyze::AnalyzeCommands,
    chat::ChatArgs,
    citation::CitationCommands,
    init::InitArgs,
    profile::ProfileCommands,
    project::ProjectCommands,
    report::ReportCommands,
    settings::SettingsCommands,
};

#[derive(Parser)]
#[command(name = "mrt")]
#[command(author, version, about = "Meridian Research Toolkit")]
#[command(
    long_about = "A Unix-style toolkit for managing research projects, citations, dataset statistics, and plain-text research reports stored as flat files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Workspace root (default: auto-detect by finding data/projects.csv)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a research workspace
    Init(InitArgs),

    /// Research project management
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Citation management
    #[command(subcommand)]
    Citation(CitationCommands),

    /// Statistical analysis of an uploaded CSV dataset
    #[command(subcommand)]
    Analyze(AnalyzeCommands),

    /// Generate and list research reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Researcher profile management
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Workspace settings management
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Chat with the research assistant
    Chat(ChatArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for list, human for show)
    #[default]
    Auto,
    /// Tab-separated columns (for terminals and piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
