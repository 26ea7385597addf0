//! Folder command handlers
//!
//! Folder lifecycle (rename, recursive delete) plus the file-level
//! operations that work on paths inside the folder.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use shelf_core::{store, Config};

use crate::output::{Output, OutputFormat};

/// Rename the catalog folder and point the saved config at the new path
pub fn rename_folder(config: &Config, new_path: PathBuf, output: &Output) -> Result<()> {
    store::rename_path(&config.data_dir, &new_path).context("Failed to rename folder")?;

    // The store keeps no path state, so the reference we hold (the config
    // file) has to be updated here.
    let mut updated = config.clone();
    updated.data_dir = new_path.clone();
    updated.save().context("Failed to update config with new folder path")?;

    output.success(&format!("Folder renamed to {}", new_path.display()));
    Ok(())
}

/// Rename a file inside the catalog folder
pub fn rename_file(
    config: &Config,
    old_name: String,
    new_name: String,
    output: &Output,
) -> Result<()> {
    let old = config.data_dir.join(&old_name);
    let new = config.data_dir.join(&new_name);

    store::rename_path(&old, &new).context("Failed to rename file")?;

    output.success(&format!("File renamed to {}", new.display()));
    Ok(())
}

/// List the files inside the catalog folder
pub fn list_files(config: &Config, output: &Output) -> Result<()> {
    let entries = fs::read_dir(&config.data_dir)
        .with_context(|| format!("Failed to read folder {:?}", config.data_dir))?;

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    match output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&names).unwrap());
        }
        OutputFormat::Quiet => {
            for name in &names {
                println!("{}", name);
            }
        }
        OutputFormat::Human => {
            if names.is_empty() {
                println!("Folder is empty.");
                return Ok(());
            }
            println!("Files in {}:", config.data_dir.display());
            for name in &names {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}

/// Recursively delete the catalog folder
pub fn delete_folder(config: &Config, output: &Output) -> Result<()> {
    if output.should_prompt() {
        println!(
            "Delete folder and all its contents: {}",
            config.data_dir.display()
        );
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store::delete_folder(&config.data_dir).context("Failed to delete folder")?;

    output.success(&format!("Deleted folder: {}", config.data_dir.display()));
    Ok(())
}

/// Ask a yes/no question on stdin
fn confirm(prompt: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim(), "y" | "Y" | "yes" | "Yes"))
}
