//! `mrt settings` command - workspace settings document

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open_store;
use crate::cli::{GlobalOpts, OutputFormat};

const CITATION_STYLES: [&str; 3] = ["APA", "MLA", "Chicago"];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Update settings
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Default citation style (APA, MLA, Chicago)
    #[arg(long)]
    pub citation_style: Option<String>,

    /// Default date format
    #[arg(long)]
    pub date_format: Option<String>,

    /// Auto-save projects
    #[arg(long)]
    pub auto_save: Option<bool>,

    /// Enable notifications
    #[arg(long)]
    pub notifications: Option<bool>,
}

pub fn run(cmd: SettingsCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SettingsCommands::Show => run_show(global),
        SettingsCommands::Set(args) => run_set(args, global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let settings = store.load_settings().map_err(|e| miette::miette!("{}", e))?;

    if global.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&settings).into_diagnostic()?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}: {}", style("Citation style").bold(), settings.citation_style);
    println!("{}: {}", style("Date format").bold(), settings.date_format);
    println!("{}: {}", style("Auto-save").bold(), settings.auto_save);
    println!("{}: {}", style("Notifications").bold(), settings.notifications);

    Ok(())
}

fn run_set(args: SetArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let mut settings = store.load_settings().map_err(|e| miette::miette!("{}", e))?;

    if let Some(citation_style) = args.citation_style {
        if !CITATION_STYLES.iter().any(|s| s.eq_ignore_ascii_case(&citation_style)) {
            return Err(miette::miette!(
                "invalid citation style: '{}'. Use one of: {}",
                citation_style,
                CITATION_STYLES.join(", ")
            ));
        }
        settings.citation_style = citation_style;
    }
    if let Some(date_format) = args.date_format {
        if !DATE_FORMATS.contains(&date_format.as_str()) {
            return Err(miette::miette!(
                "invalid date format: '{}'. Use one of: {}",
                date_format,
                DATE_FORMATS.join(", ")
            ));
        }
        settings.date_format = date_format;
    }
    if let Some(auto_save) = args.auto_save {
        settings.auto_save = auto_save;
    }
    if let Some(notifications) = args.notifications {
        settings.notifications = notifications;
    }

    store
        .save_settings(&settings)
        .map_err(|e| miette::miette!("{}", e))?;

    println!("{} Settings updated", style("✓").green());
    Ok(())
}
