mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::config::ConfigUpdate;
use commands::edit::TaskEdit;

#[derive(Parser)]
#[command(name = "scheduler")]
#[command(about = "Manage dated, optionally recurring tasks")]
struct Cli {
    /// Use this database file instead of the configured one
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log database and service activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the next occurrence of a recurrence rule
    NextDate {
        /// Anchor date (YYYYMMDD)
        date: String,

        /// Recurrence rule ("y" or "d <n>")
        repeat: String,

        /// Reference date (YYYYMMDD), defaults to today
        #[arg(long)]
        now: Option<String>,
    },
    /// Create a task
    Add {
        title: String,

        /// Date (YYYYMMDD or "today"); past dates are moved forward
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        comment: Option<String>,

        /// Recurrence rule ("y" or "d <n>")
        #[arg(short, long)]
        repeat: Option<String>,
    },
    /// List tasks by date
    List {
        /// Filter by text, or by date as DD.MM.YYYY
        search: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a single task
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },
    /// Change fields of a task
    Edit {
        id: String,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        comment: Option<String>,

        /// New recurrence rule (pass "" to remove it)
        #[arg(short, long)]
        repeat: Option<String>,
    },
    /// Mark a task done: one-off tasks are removed, recurring ones move to their next date
    Done { id: String },
    /// Delete a task
    Delete { id: String },
    /// Show configuration paths and values, optionally storing new ones
    Config {
        /// HTTP port for the server
        #[arg(long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(long)]
        dbfile: Option<PathBuf>,

        /// Directory with the web frontend
        #[arg(long)]
        webdir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let db = cli.db;

    match cli.command {
        Commands::NextDate { date, repeat, now } => commands::next_date::run(now, date, repeat),
        Commands::Add {
            title,
            date,
            comment,
            repeat,
        } => commands::add::run(&commands::open_service(db)?, title, date, comment, repeat),
        Commands::List { search, json } => {
            commands::list::run(&commands::open_service(db)?, search, json)
        }
        Commands::Show { id, json } => commands::show::run(&commands::open_service(db)?, &id, json),
        Commands::Edit {
            id,
            date,
            title,
            comment,
            repeat,
        } => commands::edit::run(
            &commands::open_service(db)?,
            &id,
            TaskEdit {
                date,
                title,
                comment,
                repeat,
            },
        ),
        Commands::Done { id } => commands::done::run(&commands::open_service(db)?, &id),
        Commands::Delete { id } => commands::delete::run(&commands::open_service(db)?, &id),
        Commands::Config {
            port,
            dbfile,
            webdir,
        } => commands::config::run(ConfigUpdate {
            port,
            db_file: dbfile,
            web_dir: webdir,
        }),
    }
}
