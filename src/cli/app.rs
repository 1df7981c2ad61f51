//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use globrx::output::OutputMode;

/// globrx - Translate globs to regular expressions
#[derive(Parser, Debug)]
#[command(
    name = "globrx",
    version,
    about = "Translate globs to regular expressions",
    long_about = "Translate shell-style globs into regular expressions.\n\n\
                  Globs support *, **, ?, [a-z], [!a-z], {a,b} and \\ escapes.\n\
                  Use them to match paths or to list files under a directory."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./.globrx.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the regular expression for each glob
    Translate {
        /// Globs to translate
        #[arg(required = true)]
        globs: Vec<String>,

        /// Maximum alternation nesting depth (0 = unlimited)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Test paths against a glob
    Match {
        /// The glob
        glob: String,

        /// Paths to test
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List files under a directory accepted by include/exclude globs
    Find {
        /// Directory to walk
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Include glob (repeatable, replaces config includes)
        #[arg(short, long)]
        include: Vec<String>,

        /// Exclude glob (repeatable, replaces config excludes)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Descend into hidden entries
        #[arg(long)]
        hidden: bool,
    },

    /// Validate every glob in the config file
    Check,

    /// Create a config file (.globrx.toml unless --config is given)
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Translate { globs, max_depth }) => {
            commands::translate(&globs, max_depth, config, output_mode)
        },
        Some(Command::Match { glob, paths }) => {
            commands::match_paths(&glob, &paths, config, output_mode)
        },
        Some(Command::Find {
            dir,
            include,
            exclude,
            hidden,
        }) => commands::find(&dir, include, exclude, hidden, config, output_mode),
        Some(Command::Check) => commands::check(config, output_mode),
        Some(Command::Init { force }) => commands::init(force, config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": globrx::VERSION
                    })
                );
            } else {
                println!("globrx v{}", globrx::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": globrx::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("globrx v{}", globrx::VERSION);
                println!("\nRun 'globrx --help' for usage");
                println!("Run 'globrx translate <glob>' to get started");
            }
            Ok(())
        },
    }
}
