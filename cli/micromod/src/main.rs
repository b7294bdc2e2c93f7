//! micromod CLI: resolves a MicroMod board selection into driver
//! requirements and native build variables.

mod commands;
mod profile;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use profile::Overrides;

#[derive(Parser)]
#[command(name = "micromod", version, about = "libhal MicroMod configuration resolver")]
struct Cli {
    /// Log pipeline phases to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a micromod.toml profile in the current directory
    Init {
        /// MicroMod board identifier
        board: String,
    },
    /// Validate a selection and print the requirement and build variables
    Configure {
        /// Platform discriminator (must be "micromod")
        #[arg(long)]
        platform: Option<String>,
        /// MicroMod board identifier (e.g., mod-lpc40-v5)
        #[arg(long)]
        board: Option<String>,
        /// Compiler language standard (e.g., 20, gnu23)
        #[arg(long)]
        cppstd: Option<String>,
        /// Profile file (default: nearest micromod.toml)
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Output format (human, json, toml, cmake)
        #[arg(long)]
        format: Option<String>,
    },
    /// Check that the current profile configures
    Check {
        /// Profile file (default: nearest micromod.toml)
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// Browse supported boards
    Boards {
        #[command(subcommand)]
        action: BoardsAction,
    },
    /// Show the metadata exported to package consumers
    Info {
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show configure arguments for the demo applications
    Demos {
        /// Platform profile name used for the build folder
        #[arg(long, default_value = "micromod")]
        platform: String,
        /// Only this demo
        #[arg(long)]
        demo: Option<String>,
    },
}

#[derive(Subcommand)]
enum BoardsAction {
    /// List supported boards
    List,
    /// Show details of a board
    Describe {
        /// Board identifier
        board: String,
        /// Output format (human, json, toml)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { board } => commands::init::run(&cwd, &board),

        Commands::Configure {
            platform,
            board,
            cppstd,
            profile,
            format,
        } => {
            let overrides = Overrides {
                platform: platform.as_deref(),
                board: board.as_deref(),
                cppstd: cppstd.as_deref(),
            };
            let selection = profile::selection(&cwd, profile.as_deref(), &overrides)?;
            commands::configure::run(selection, format.as_deref())
        }

        Commands::Check { profile } => commands::configure::check(&cwd, profile.as_deref()),

        Commands::Boards { action } => match action {
            BoardsAction::List => commands::boards::list(),
            BoardsAction::Describe { board, format } => {
                commands::boards::describe(&board, format.as_deref())
            }
        },

        Commands::Info { format } => commands::info::run(format.as_deref()),

        Commands::Demos { platform, demo } => commands::demos::run(&platform, demo.as_deref()),
    }
}
