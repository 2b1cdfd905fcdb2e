//! `mrt chat` command - research-assistant conversation

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use miette::Result;

use crate::chat::{ChatClient, ChatError};
use crate::cli::helpers::open_store;
use crate::cli::GlobalOpts;
use crate::core::{Config, Session};

#[derive(clap::Args, Debug)]
pub struct ChatArgs {
    /// Send one message and print the reply instead of starting a session
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Discuss a specific project
    #[arg(long, short = 'p')]
    pub project: Option<String>,
}

pub fn run(args: ChatArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    // The chat works outside a workspace too; the store only supplies the
    // display name for the banner when one is available.
    let user_name = open_store(global)
        .ok()
        .and_then(|store| store.load_profile().ok())
        .map(|profile| profile.name)
        .filter(|name| !name.is_empty());

    let mut session = Session::new(user_name, args.project);

    let client = match ChatClient::from_config(&config) {
        Ok(client) => client,
        Err(ChatError::MissingCredential) => {
            eprintln!(
                "{} {}",
                style("!").yellow(),
                ChatError::MissingCredential
            );
            return Ok(());
        }
        Err(e) => return Err(miette::miette!("{}", e)),
    };

    if let Some(message) = args.message {
        exchange(&client, &mut session, &message);
        return Ok(());
    }

    print_banner(&session);
    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| miette::miette!("{}", e))?;
        let line = line.trim();

        match line {
            "" => continue,
            "exit" | "quit" => break,
            "clear" => {
                session.clear();
                println!("{}", style(&session.messages[0].content).cyan());
            }
            _ => exchange(&client, &mut session, line),
        }
    }

    Ok(())
}

/// Send one user message and print the reply, recording both in the session.
/// Service failures degrade to the fallback reply rather than aborting.
fn exchange(client: &ChatClient, session: &mut Session, message: &str) {
    session.push_user(message);
    let reply = match client.complete(&session.messages) {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("{} {}", style("!").yellow(), e);
            crate::chat::FALLBACK_REPLY.to_string()
        }
    };
    println!("{}", reply);
    session.push_assistant(&reply);
}

fn print_banner(session: &Session) {
    match &session.user_name {
        Some(name) => println!("{}", style(format!("Research assistant ({})", name)).bold()),
        None => println!("{}", style("Research assistant").bold()),
    }
    if let Some(project) = &session.active_project {
        println!("Active project: {}", style(project).cyan());
    }
    println!("{}", style(&session.messages[0].content).cyan());
    println!("{}", style("Type 'exit' to leave, 'clear' to start over.").dim());
    println!();
}
