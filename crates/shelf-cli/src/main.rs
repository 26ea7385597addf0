//! Shelf CLI
//!
//! Command-line interface for shelf - folder-scoped JSON book catalogs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shelf_core::Config;

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Shelf - folder-scoped JSON book catalogs")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the catalog folder and an empty store file
    Init,
    /// Add a book to the catalog
    #[command(alias = "append")]
    Add {
        /// Book id (must be unique within the catalog)
        id: u64,
        /// Book name
        name: String,
        /// Price
        price: f64,
        /// Author
        author: String,
    },
    /// Show a book by id
    Get {
        /// Book id
        id: u64,
    },
    /// List the catalog
    #[command(alias = "ls")]
    List,
    /// Rename a book
    UpdateName {
        /// Book id
        id: u64,
        /// New name
        name: String,
    },
    /// Delete a book by id
    #[command(alias = "rm")]
    Delete {
        /// Book id
        id: u64,
    },
    /// Empty the catalog
    Clear,
    /// Rename the catalog folder
    RenameFolder {
        /// New folder path
        new_path: PathBuf,
    },
    /// Rename a file inside the catalog folder
    RenameFile {
        /// Current file name
        old_name: String,
        /// New file name
        new_name: String,
    },
    /// List the files inside the catalog folder
    ListFiles,
    /// Delete the catalog folder and all its contents
    DeleteFolder,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show catalog status
    Status,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, store_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands read and write the config file themselves
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let config = Config::load()?;
    debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Init => commands::book::init(&config, &output),
        Commands::Add {
            id,
            name,
            price,
            author,
        } => commands::book::add(&config, id, name, price, author, &output),
        Commands::Get { id } => commands::book::get(&config, id, &output),
        Commands::List => commands::book::list(&config, &output),
        Commands::UpdateName { id, name } => {
            commands::book::update_name(&config, id, name, &output)
        }
        Commands::Delete { id } => commands::book::delete(&config, id, &output),
        Commands::Clear => commands::book::clear(&config, &output),
        Commands::RenameFolder { new_path } => {
            commands::folder::rename_folder(&config, new_path, &output)
        }
        Commands::RenameFile { old_name, new_name } => {
            commands::folder::rename_file(&config, old_name, new_name, &output)
        }
        Commands::ListFiles => commands::folder::list_files(&config, &output),
        Commands::DeleteFolder => commands::folder::delete_folder(&config, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Status => commands::status::show(&config, &output),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize stderr logging, filtered by the SHELF_LOG environment variable
fn init_logging() {
    let env_filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
