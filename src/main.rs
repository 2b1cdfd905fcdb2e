use clap::Parser;
use miette::Result;
use mrt::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => mrt::cli::commands::init::run(args),
        Commands::Project(cmd) => mrt::cli::commands::project::run(cmd, &global),
        Commands::Citation(cmd) => mrt::cli::commands::citation::run(cmd, &global),
        Commands::Analyze(cmd) => mrt::cli::commands::analyze::run(cmd, &global),
        Commands::Report(cmd) => mrt::cli::commands::report::run(cmd, &global),
        Commands::Profile(cmd) => mrt::cli::commands::profile::run(cmd, &global),
        Commands::Settings(cmd) => mrt::cli::commands::settings::run(cmd, &global),
        Commands::Chat(args) => mrt::cli::commands::chat::run(args, &global),
    }
}
