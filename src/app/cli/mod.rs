//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, LiftoffOptions};
use crate::domain::{AppError, LaunchOptions};

#[derive(Parser, Debug)]
#[command(name = "launch-control")]
#[command(version)]
#[command(about = "Generate Devin AI sessions.", long_about = None)]
struct Cli {
    /// The GitHub stack to launch the session for
    #[arg(short = 's', long, value_parser = ["asg", "p2d", "cle"])]
    stack: String,
    /// The Jira ticket to launch the session for (defaults to the stack's ticket)
    #[arg(short = 'j', long)]
    jira: Option<String>,
    /// The type of session to launch
    #[arg(
        short = 't',
        long = "type",
        value_parser = ["unit", "integration", "prompt"],
        default_value = "unit"
    )]
    session_type: String,
    /// The target type to launch sessions for, if the type is unit
    #[arg(
        long,
        visible_alias = "tt",
        value_parser = ["module", "class", "function", "scenario"],
        default_value = "class"
    )]
    target_type: String,
    /// The prompt to send if the type is prompt
    #[arg(short = 'p', long)]
    prompt: Option<String>,
    /// The number of sessions to launch
    #[arg(short = 'l', long, default_value_t = 5)]
    limit: usize,
    /// Enable debug output
    #[arg(short = 'd', long)]
    debug: bool,
    /// Project root holding prompts/ and targets/ (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,
    /// Show compiled prompts without launching sessions
    #[arg(long)]
    prompt_preview: bool,
}

impl Cli {
    fn into_options(self) -> LiftoffOptions {
        LiftoffOptions {
            launch: LaunchOptions {
                stack: self.stack,
                ticket: self.jira,
                session_kind: self.session_type,
                target_type: self.target_type,
                prompt: self.prompt,
                limit: Some(self.limit),
                debug: self.debug,
            },
            root: self.root,
            prompt_preview: self.prompt_preview,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result: Result<(), AppError> = api::liftoff(cli.into_options()).map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let default_directive = if debug { "launch_control=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
