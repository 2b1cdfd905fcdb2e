//! `mrt project` command - research project management

use clap::Subcommand;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{escape_csv, open_store, progress_bar, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::project::{Project, STAGES};
use crate::report::{compose_problem_statement, suggest_research_questions};

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects
    List(ListArgs),

    /// Create a new project
    New(NewArgs),

    /// Show a project's details
    Show(ShowArgs),

    /// Update a project's status, progress, or report fields
    Update(UpdateArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by status (exact match)
    #[arg(long, short = 's')]
    pub status: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Project title
    #[arg(long)]
    pub title: Option<String>,

    /// Project description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Research context for the problem-statement builder
    #[arg(long)]
    pub context: Option<String>,

    /// Research focus for the problem-statement builder
    #[arg(long)]
    pub focus: Option<String>,

    /// Research significance for the problem-statement builder
    #[arg(long)]
    pub significance: Option<String>,

    /// Research question (can be given multiple times)
    #[arg(long = "question")]
    pub questions: Vec<String>,

    /// Seed the project with the suggested starter questions
    #[arg(long)]
    pub suggest_questions: bool,

    /// Fill in fields interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Project title
    pub title: String,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Project title
    pub title: String,

    /// New status label
    #[arg(long)]
    pub status: Option<String>,

    /// Stage progress as STAGE=FRACTION (can be given multiple times)
    #[arg(long = "progress", value_name = "STAGE=FRACTION")]
    pub progress: Vec<String>,

    /// Methodology text for the report
    #[arg(long)]
    pub methodology: Option<String>,

    /// Results text for the report
    #[arg(long)]
    pub results: Option<String>,

    /// Add a research question (can be given multiple times)
    #[arg(long = "add-question")]
    pub add_questions: Vec<String>,
}

pub fn run(cmd: ProjectCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProjectCommands::List(args) => run_list(args, global),
        ProjectCommands::New(args) => run_new(args, global),
        ProjectCommands::Show(args) => run_show(args, global),
        ProjectCommands::Update(args) => run_update(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let mut projects = store.load_projects().map_err(|e| miette::miette!("{}", e))?;

    if let Some(ref status) = args.status {
        projects.retain(|p| &p.status == status);
    }

    if projects.is_empty() {
        match global.format {
            OutputFormat::Json => println!("[]"),
            _ => {
                println!("No projects found.");
                println!();
                println!("Create one with: {}", style("mrt project new --title \"...\"").yellow());
            }
        }
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&projects).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            println!("title,status,created_date,progress");
            for project in &projects {
                println!(
                    "{},{},{},{:.2}",
                    escape_csv(&project.title),
                    escape_csv(&project.status),
                    project.created_date,
                    project.overall_progress()
                );
            }
        }
        OutputFormat::Md => {
            println!("| Title | Status | Created | Progress |");
            println!("|---|---|---|---|");
            for project in &projects {
                println!(
                    "| {} | {} | {} | {:.0}% |",
                    project.title.replace('|', "\\|"),
                    project.status,
                    project.created_date,
                    project.overall_progress() * 100.0
                );
            }
        }
        _ => {
            println!(
                "{:<36} {:<10} {:<12} {:<18}",
                style("TITLE").bold(),
                style("STATUS").bold(),
                style("CREATED").bold(),
                style("PROGRESS").bold()
            );
            println!("{}", "-".repeat(78));
            for project in &projects {
                println!(
                    "{:<36} {:<10} {:<12} {}",
                    truncate_str(&project.title, 34),
                    project.status,
                    project.created_date.to_string(),
                    progress_bar(project.overall_progress())
                );
            }
            println!();
            println!("{} project(s) found", style(projects.len()).cyan());
        }
    }

    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    let (title, description, statement_fields, questions) = if args.interactive {
        prompt_new_project()?
    } else {
        let title = args
            .title
            .ok_or_else(|| miette::miette!("missing required option: --title"))?;
        let statement_fields = match (args.context, args.focus, args.significance) {
            (Some(c), Some(f), Some(s)) => Some((c, f, s)),
            (None, None, None) => None,
            _ => {
                return Err(miette::miette!(
                    "problem-statement builder needs all of --context, --focus, and --significance"
                ))
            }
        };
        let mut questions = args.questions;
        if args.suggest_questions {
            questions.extend(suggest_research_questions(3));
        }
        (title, args.description, statement_fields, questions)
    };

    let mut project =
        Project::new(title, description).map_err(|e| miette::miette!("{}", e))?;

    if let Some((context, focus, significance)) = statement_fields {
        project.problem_statement =
            Some(compose_problem_statement(&context, &focus, &significance));
    }
    project.research_questions = questions;

    store
        .append_project(&project)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Created project {}",
        style("✓").green(),
        style(&project.title).cyan()
    );
    if let Some(ref statement) = project.problem_statement {
        if !global.quiet {
            println!();
            println!("{}", statement);
        }
    }

    Ok(())
}

fn prompt_new_project() -> Result<(String, String, Option<(String, String, String)>, Vec<String>)> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("Project title")
        .interact_text()
        .into_diagnostic()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    let build_statement = Confirm::with_theme(&theme)
        .with_prompt("Build a problem statement?")
        .default(true)
        .interact()
        .into_diagnostic()?;

    let statement_fields = if build_statement {
        let context: String = Input::with_theme(&theme)
            .with_prompt("Research context")
            .interact_text()
            .into_diagnostic()?;
        let focus: String = Input::with_theme(&theme)
            .with_prompt("Research focus")
            .interact_text()
            .into_diagnostic()?;
        let significance: String = Input::with_theme(&theme)
            .with_prompt("Research significance")
            .interact_text()
            .into_diagnostic()?;
        Some((context, focus, significance))
    } else {
        None
    };

    let mut questions = Vec::new();
    for suggestion in suggest_research_questions(3) {
        let keep = Confirm::with_theme(&theme)
            .with_prompt(format!("Include question: {}", suggestion))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if keep {
            questions.push(suggestion);
        }
    }

    Ok((title, description, statement_fields, questions))
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    let mut project = store
        .find_project(&args.title)
        .map_err(|e| miette::miette!("{}", e))?
        .ok_or_else(|| miette::miette!("no project found with title '{}'", args.title))?;

    // All validation happens on the loaded copy before anything is written.
    if let Some(status) = args.status {
        project.status = status;
    }
    for pair in &args.progress {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            miette::miette!("invalid --progress '{}': expected STAGE=FRACTION", pair)
        })?;
        let fraction: f64 = value
            .parse()
            .map_err(|_| miette::miette!("invalid progress fraction: '{}'", value))?;
        project
            .set_progress(key, fraction)
            .map_err(|e| miette::miette!("{}", e))?;
    }
    if let Some(methodology) = args.methodology {
        project.methodology = Some(methodology);
    }
    if let Some(results) = args.results {
        project.results = Some(results);
    }
    project.research_questions.extend(args.add_questions);

    store
        .update_project(&args.title, |p| *p = project.clone())
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Updated project {}",
        style("✓").green(),
        style(&project.title).cyan()
    );

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let project = store
        .find_project(&args.title)
        .map_err(|e| miette::miette!("{}", e))?
        .ok_or_else(|| miette::miette!("no project found with title '{}'", args.title))?;

    if global.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&project).into_diagnostic()?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("Title").bold(), style(&project.title).yellow());
    println!("{}: {}", style("Status").bold(), project.status);
    println!("{}: {}", style("Created").bold(), project.created_date);
    if !project.description.is_empty() {
        println!("{}: {}", style("Description").bold(), project.description);
    }
    println!("{}", style("─".repeat(60)).dim());

    println!();
    println!("{}", style("Progress:").bold());
    for (stage, fraction) in STAGES.iter().zip(project.progress()) {
        println!("  {:<20} {}", stage, progress_bar(fraction));
    }

    if let Some(ref statement) = project.problem_statement {
        println!();
        println!("{}", style("Problem Statement:").bold());
        println!("{}", statement);
    }

    if !project.research_questions.is_empty() {
        println!();
        println!("{}", style("Research Questions:").bold());
        for (i, question) in project.research_questions.iter().enumerate() {
            println!("  {}. {}", i + 1, question);
        }
    }

    if let Some(ref methodology) = project.methodology {
        println!();
        println!("{}", style("Methodology:").bold());
        println!("{}", methodology);
    }

    if let Some(ref results) = project.results {
        println!();
        println!("{}", style("Results:").bold());
        println!("{}", results);
    }

    Ok(())
}
