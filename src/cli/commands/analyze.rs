//! `mrt analyze` command - statistics over an uploaded CSV dataset

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::analysis::{correlate, describe, hypothesis_test, Dataset, TestKind};
use crate::cli::helpers::format_stat;
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum AnalyzeCommands {
    /// Summary statistics, skewness, and kurtosis per numeric column
    Describe(DescribeArgs),

    /// Pairwise Pearson correlation matrix
    Correlate(CorrelateArgs),

    /// Two-sample hypothesis test over a grouped numeric column
    Test(TestArgs),
}

#[derive(clap::Args, Debug)]
pub struct DescribeArgs {
    /// CSV dataset with a header row
    pub file: PathBuf,

    /// Columns to analyze (default: all numeric columns)
    #[arg(long, short = 'c', value_delimiter = ',')]
    pub columns: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct CorrelateArgs {
    /// CSV dataset with a header row
    pub file: PathBuf,

    /// Columns to correlate (default: all numeric columns)
    #[arg(long, short = 'c', value_delimiter = ',')]
    pub columns: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct TestArgs {
    /// CSV dataset with a header row
    pub file: PathBuf,

    /// Numeric column holding the dependent variable
    #[arg(long, short = 'd')]
    pub dependent: String,

    /// Categorical column with exactly two groups
    #[arg(long, short = 'g')]
    pub group: String,

    /// Test kind: t-test or mann-whitney
    #[arg(long, short = 'k', default_value = "t-test")]
    pub kind: String,
}

pub fn run(cmd: AnalyzeCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        AnalyzeCommands::Describe(args) => run_describe(args, global),
        AnalyzeCommands::Correlate(args) => run_correlate(args, global),
        AnalyzeCommands::Test(args) => run_test(args, global),
    }
}

fn load_dataset(path: &PathBuf) -> Result<Dataset> {
    Dataset::from_path(path).map_err(|e| miette::miette!("{}", e))
}

fn selected_columns(dataset: &Dataset, requested: Vec<String>) -> Vec<String> {
    if requested.is_empty() {
        dataset.numeric_columns()
    } else {
        requested
    }
}

fn run_describe(args: DescribeArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = load_dataset(&args.file)?;
    let columns = selected_columns(&dataset, args.columns);
    let summaries = describe(&dataset, &columns).map_err(|e| miette::miette!("{}", e))?;

    if global.format == OutputFormat::Json {
        let rows: Vec<serde_json::Value> = summaries
            .iter()
            .map(|s| {
                serde_json::json!({
                    "column": s.column,
                    "count": s.count,
                    "mean": s.mean,
                    "std": s.std,
                    "min": s.min,
                    "q1": s.q1,
                    "median": s.median,
                    "q3": s.q3,
                    "max": s.max,
                    "skewness": s.skewness,
                    "kurtosis": s.kurtosis,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
        return Ok(());
    }

    println!(
        "{:<16} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>9} {:>9}",
        style("COLUMN").bold(),
        style("COUNT").bold(),
        style("MEAN").bold(),
        style("STD").bold(),
        style("MIN").bold(),
        style("25%").bold(),
        style("50%").bold(),
        style("75%").bold(),
        style("MAX").bold(),
        style("SKEW").bold(),
        style("KURT").bold()
    );
    println!("{}", "-".repeat(128));
    for s in &summaries {
        println!(
            "{:<16} {:>6} {:>10.4} {:>10} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>9} {:>9}",
            s.column,
            s.count,
            s.mean,
            format_stat(s.std),
            s.min,
            s.q1,
            s.median,
            s.q3,
            s.max,
            format_stat(s.skewness),
            format_stat(s.kurtosis)
        );
    }

    Ok(())
}

fn run_correlate(args: CorrelateArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = load_dataset(&args.file)?;
    let columns = selected_columns(&dataset, args.columns);
    let matrix = correlate(&dataset, &columns).map_err(|e| miette::miette!("{}", e))?;

    if global.format == OutputFormat::Json {
        let json = serde_json::json!({
            "columns": matrix.columns,
            "values": matrix.values,
        });
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
        return Ok(());
    }

    print!("{:<16}", "");
    for column in &matrix.columns {
        print!(" {:>10}", style(column).bold());
    }
    println!();
    for (i, column) in matrix.columns.iter().enumerate() {
        print!("{:<16}", style(column).bold());
        for value in &matrix.values[i] {
            print!(" {:>10.4}", value);
        }
        println!();
    }

    Ok(())
}

fn run_test(args: TestArgs, global: &GlobalOpts) -> Result<()> {
    // An unknown kind is a validation failure: reported before any work.
    let kind: TestKind = args.kind.parse().map_err(|e| miette::miette!("{}", e))?;

    let dataset = load_dataset(&args.file)?;
    let [(label_a, group_a), (label_b, group_b)] = dataset
        .split_groups(&args.dependent, &args.group)
        .map_err(|e| miette::miette!("{}", e))?;

    let outcome =
        hypothesis_test(&group_a, &group_b, kind).map_err(|e| miette::miette!("{}", e))?;

    if global.format == OutputFormat::Json {
        let json = serde_json::json!({
            "kind": kind.to_string(),
            "groups": [label_a, label_b],
            "statistic": outcome.statistic,
            "p_value": outcome.p_value,
            "significant": outcome.significant,
        });
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
        return Ok(());
    }

    println!("{} ({} vs {})", style(kind.to_string()).bold(), label_a, label_b);
    println!("Test statistic: {:.4}", outcome.statistic);
    println!("P-value: {:.4}", outcome.p_value);
    if outcome.significant {
        println!("Conclusion: {}", style("Significant difference found").green());
    } else {
        println!("Conclusion: No significant difference found");
    }

    Ok(())
}
