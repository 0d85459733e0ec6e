use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use linestore_service::{LineQueryService, DEFAULT_LATEST_LIMIT, DEFAULT_POOLED_LIMIT};
use linestore_store::{FileStore, InMemoryFileStore};
use std::path::{Path, PathBuf};

mod output;

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "linestore")]
#[command(about = "Store text files and query their line content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the backing store file
    #[arg(long, global = true, default_value = "linestore.json")]
    store: PathBuf,

    /// Output format for query results
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a text file and print its assigned id
    Upload {
        /// File to upload
        path: PathBuf,

        /// Name to store the file under (defaults to its file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Print one random line of a stored file
    RandomLine {
        /// Id of the stored file
        #[arg(long)]
        id: u64,

        /// Append line number, file name and most used letter
        #[arg(long)]
        detail: bool,
    },

    /// Print one reversed random line per stored file
    RandomLineBackward,

    /// Print the longest lines of the most recently uploaded file
    LongestLines {
        /// How many lines to return
        #[arg(short, long, default_value_t = DEFAULT_LATEST_LIMIT)]
        n: usize,
    },

    /// Print the longest lines across all stored files
    LongestLinesAll {
        /// How many lines to return
        #[arg(short, long, default_value_t = DEFAULT_POOLED_LIMIT)]
        n: usize,
    },

    /// List stored files
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let service = LineQueryService::new(load_store(&cli.store)?);
    let format = cli.format;

    match cli.command {
        Commands::Upload { path, name } => {
            let content = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = match name {
                Some(name) => name,
                None => path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .context("Upload path has no file name; pass --name")?,
            };

            let mut service = service;
            let id = service.upload(&name, content);
            service
                .into_store()
                .save(&cli.store)
                .with_context(|| format!("Failed to save store to {}", cli.store.display()))?;
            output::print_id(format, id);
        }
        Commands::RandomLine { id, detail } => {
            let line = service.random_line(id, detail)?;
            output::print_line(format, &line);
        }
        Commands::RandomLineBackward => {
            let lines = service.random_lines_reversed()?;
            output::print_lines(format, &lines);
        }
        Commands::LongestLines { n } => {
            let lines = service.longest_lines_latest(n)?;
            output::print_lines(format, &lines);
        }
        Commands::LongestLinesAll { n } => {
            let lines = service.longest_lines_all(n)?;
            output::print_lines(format, &lines);
        }
        Commands::List => {
            output::print_files(format, service.store().list());
        }
    }

    Ok(())
}

/// Load the store file if it exists, otherwise start empty
fn load_store(path: &Path) -> Result<InMemoryFileStore> {
    if path.exists() {
        InMemoryFileStore::load(path)
            .with_context(|| format!("Failed to load store from {}", path.display()))
    } else {
        log::debug!("No store at {}, starting empty", path.display());
        Ok(InMemoryFileStore::new())
    }
}
