//! Status command handler

use anyhow::Result;

use shelf_core::{store, Config};

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(config: &Config, output: &Output) -> Result<()> {
    let store_path = config.store_path();
    let folder_exists = config.data_dir.is_dir();
    let store_exists = store_path.is_file();
    let store_size = store_path.metadata().map(|m| m.len()).unwrap_or(0);
    let book_count = store::list_all(&store_path).map(|b| b.len()).unwrap_or(0);

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "store_path": store_path,
                    "folder_exists": folder_exists,
                    "store_exists": store_exists,
                    "store_size": store_size,
                    "book_count": book_count
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", book_count);
        }
        OutputFormat::Human => {
            println!("Shelf Status");
            println!("============");
            println!();
            println!("Folder:");
            println!("  Path:   {}", config.data_dir.display());
            println!("  Exists: {}", if folder_exists { "yes" } else { "no" });
            println!();
            println!("Store file:");
            println!("  Path:   {}", store_path.display());
            println!("  Exists: {}", if store_exists { "yes" } else { "no" });
            println!("  Size:   {} bytes", store_size);
            println!();
            println!("Contents:");
            println!("  Books: {}", book_count);
        }
    }

    Ok(())
}
