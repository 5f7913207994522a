mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use tango_lib::app::App;
use tango_lib::config::Config;
use tango_lib::notebook::NotebookStorage;
use tango_lib::quiz::QuizOrder;

#[derive(Parser)]
#[command(name = "tango", about = "Vocabulary notebook flashcard trainer", version)]
struct Cli {
    /// Use a specific data directory (default: the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OrderArg {
    Sequential,
    Random,
}

#[derive(Subcommand)]
enum Command {
    /// List notebooks with their mastery statistics
    List,

    /// Import a word list from a CSV or Excel file into a new notebook
    Import {
        /// Spreadsheet file (.csv, .xlsx, .xls, .ods)
        file: PathBuf,
        /// Notebook name (defaults to the file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Rename a notebook
    Rename {
        /// Notebook name (case-insensitive prefix match)
        notebook: String,
        /// New name
        name: String,
    },

    /// Delete a notebook and all of its learning records
    Delete {
        /// Notebook name
        notebook: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Run an interactive quiz session
    Quiz {
        /// Notebook name
        notebook: String,
        /// First word number of the range (default 1)
        #[arg(long)]
        start: Option<u32>,
        /// Last word number of the range (default: highest in the notebook)
        #[arg(long)]
        end: Option<u32>,
        /// Number of questions (default 10)
        #[arg(long)]
        count: Option<usize>,
        /// Presentation order
        #[arg(long, value_enum, default_value = "random")]
        order: OrderArg,
    },

    /// Show the per-word mastery ledger of a notebook
    Stats {
        /// Notebook name
        notebook: String,
    },
}

fn open_app(data_dir: Option<PathBuf>) -> anyhow::Result<App> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => NotebookStorage::default_data_dir().context("Failed to get data directory")?,
    };
    let config = Config::load(&data_dir);
    let storage = NotebookStorage::new(data_dir);
    App::new(storage, &config).context("Failed to load notebooks")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut app = open_app(cli.data_dir)?;

    match cli.command {
        Command::List => commands::list::run(&app, &cli.format),
        Command::Import { file, name } => {
            commands::import::run(&mut app, &file, name, &cli.format)
        }
        Command::Rename { notebook, name } => commands::rename::run(&mut app, &notebook, &name),
        Command::Delete { notebook, yes } => commands::delete::run(&mut app, &notebook, yes),
        Command::Quiz {
            notebook,
            start,
            end,
            count,
            order,
        } => {
            let order = match order {
                OrderArg::Sequential => QuizOrder::Sequential,
                OrderArg::Random => QuizOrder::Random,
            };
            commands::quiz::run(&mut app, &notebook, start, end, count, order)
        }
        Command::Stats { notebook } => commands::stats::run(&app, &notebook, &cli.format),
    }
}
