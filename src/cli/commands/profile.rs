//! `mrt profile` command - researcher profile document

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open_store;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::profile::Education;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the profile
    Show,

    /// Update profile fields
    Edit(EditArgs),
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Institution
    #[arg(long)]
    pub institution: Option<String>,

    /// Research interests (comma-separated, replaces the list)
    #[arg(long, value_delimiter = ',')]
    pub interests: Vec<String>,

    /// Areas of expertise (comma-separated, replaces the list)
    #[arg(long, value_delimiter = ',')]
    pub expertise: Vec<String>,

    /// Add an education entry as "institution:degree:year"
    #[arg(long = "add-education")]
    pub add_education: Option<String>,

    /// Add a publication
    #[arg(long = "add-publication")]
    pub add_publication: Option<String>,
}

pub fn run(cmd: ProfileCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProfileCommands::Show => run_show(global),
        ProfileCommands::Edit(args) => run_edit(args, global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let profile = store.load_profile().map_err(|e| miette::miette!("{}", e))?;

    if global.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&profile).into_diagnostic()?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}: {}", style("Name").bold(), profile.name);
    println!("{}: {}", style("Email").bold(), profile.email);
    println!("{}: {}", style("Institution").bold(), profile.institution);

    if !profile.research_interests.is_empty() {
        println!("{}: {}", style("Interests").bold(), profile.research_interests.join(", "));
    }
    if !profile.expertise.is_empty() {
        println!("{}: {}", style("Expertise").bold(), profile.expertise.join(", "));
    }
    if !profile.education.is_empty() {
        println!("{}", style("Education:").bold());
        for edu in &profile.education {
            println!("  {} - {} ({})", edu.institution, edu.degree, edu.year);
        }
    }
    if !profile.publications.is_empty() {
        println!("{}", style("Publications:").bold());
        for publication in &profile.publications {
            println!("  {}", publication);
        }
    }

    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let mut profile = store.load_profile().map_err(|e| miette::miette!("{}", e))?;

    if let Some(name) = args.name {
        profile.name = name;
    }
    if let Some(email) = args.email {
        profile.email = email;
    }
    if let Some(institution) = args.institution {
        profile.institution = institution;
    }
    if !args.interests.is_empty() {
        profile.research_interests = args.interests;
    }
    if !args.expertise.is_empty() {
        profile.expertise = args.expertise;
    }
    if let Some(entry) = args.add_education {
        let mut parts = entry.splitn(3, ':');
        profile.education.push(Education {
            institution: parts.next().unwrap_or("").to_string(),
            degree: parts.next().unwrap_or("").to_string(),
            year: parts.next().unwrap_or("").to_string(),
        });
    }
    if let Some(publication) = args.add_publication {
        profile.publications.push(publication);
    }

    store
        .save_profile(&profile)
        .map_err(|e| miette::miette!("{}", e))?;

    println!("{} Profile updated", style("✓").green());
    Ok(())
}
