mod app;
mod commands;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quizbook", about = "Local quiz notebook and spaced review", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List quizzes in the local history
    List,

    /// Show a quiz and its questions
    Show {
        /// Quiz title or id (case-insensitive prefix match)
        quiz: String,
        /// Reveal correct answers and explanations
        #[arg(long)]
        answers: bool,
    },

    /// Import a generated quiz from a JSON file (use "-" for stdin)
    Import {
        file: PathBuf,
    },

    /// Delete a quiz from the history
    Delete {
        /// Quiz title or id (case-insensitive prefix match)
        quiz: String,
    },

    /// Take a quiz interactively
    #[cfg(feature = "tui")]
    Take {
        /// Quiz title or id (case-insensitive prefix match)
        quiz: String,
    },

    /// Recall deck management
    #[command(subcommand)]
    Recall(RecallCommand),

    /// Review due recall items interactively
    #[cfg(feature = "tui")]
    Review,

    /// Show study statistics
    Stats,

    /// Backup management
    #[command(subcommand)]
    Backup(BackupCommand),
}

#[derive(Subcommand)]
enum RecallCommand {
    /// List recall items
    List {
        /// Only items due now
        #[arg(long)]
        due: bool,
    },

    /// Add a question from a quiz to the recall deck
    Add {
        /// Quiz title or id (case-insensitive prefix match)
        quiz: String,
        /// Question number within the quiz (1-based)
        number: usize,
    },

    /// Remove an item from the recall deck
    Remove {
        /// Item id prefix
        id: String,
    },
}

#[derive(Subcommand)]
enum BackupCommand {
    /// Create a ZIP backup of the data directory
    Create {
        /// Output path (default: timestamped file in the backups dir)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List existing backups
    List,

    /// Restore a backup ZIP over the data directory
    Restore {
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        None => {
            // No subcommand → review what's due
            #[cfg(feature = "tui")]
            {
                let app = app::App::new(data_dir)?;
                tui::run_review(app)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("Interactive review not available (built without 'tui' feature).");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::List) => {
            let app = app::App::new(data_dir)?;
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Show { quiz, answers }) => {
            let app = app::App::new(data_dir)?;
            commands::show::run(&app, &quiz, answers, &cli.format, use_color)?;
        }
        Some(Command::Import { file }) => {
            let app = app::App::new(data_dir)?;
            commands::import::run(&app, &file, &cli.format, use_color)?;
        }
        Some(Command::Delete { quiz }) => {
            let app = app::App::new(data_dir)?;
            commands::delete::run(&app, &quiz, use_color)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Take { quiz }) => {
            let app = app::App::new(data_dir)?;
            tui::run_take(app, &quiz)?;
        }
        Some(Command::Recall(subcmd)) => {
            let app = app::App::new(data_dir)?;
            match subcmd {
                RecallCommand::List { due } => {
                    commands::recall::run_list(&app, due, &cli.format, use_color)?;
                }
                RecallCommand::Add { quiz, number } => {
                    commands::recall::run_add(&app, &quiz, number, use_color)?;
                }
                RecallCommand::Remove { id } => {
                    commands::recall::run_remove(&app, &id, use_color)?;
                }
            }
        }
        #[cfg(feature = "tui")]
        Some(Command::Review) => {
            let app = app::App::new(data_dir)?;
            tui::run_review(app)?;
        }
        Some(Command::Stats) => {
            let app = app::App::new(data_dir)?;
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Backup(subcmd)) => {
            let app = app::App::new(data_dir)?;
            match subcmd {
                BackupCommand::Create { output } => {
                    commands::backup::run_create(&app, output.as_deref(), use_color)?;
                }
                BackupCommand::List => {
                    commands::backup::run_list(&app, &cli.format, use_color)?;
                }
                BackupCommand::Restore { file } => {
                    commands::backup::run_restore(&app, &file, use_color)?;
                }
            }
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
