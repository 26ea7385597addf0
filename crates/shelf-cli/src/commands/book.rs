//! Book command handlers

use anyhow::{Context, Result};

use shelf_core::{store, Book, Config};

use crate::output::Output;

/// Create the folder and write an empty catalog
pub fn init(config: &Config, output: &Output) -> Result<()> {
    let created = store::ensure_folder(&config.data_dir)
        .context("Failed to create catalog folder")?;

    if created {
        output.success(&format!("Folder created: {}", config.data_dir.display()));
    } else {
        output.message(&format!(
            "Folder already exists: {}",
            config.data_dir.display()
        ));
    }

    let path = config.store_path();
    store::init_store(&path, &[]).context("Failed to initialize store")?;
    output.success(&format!("Store initialized: {}", path.display()));

    Ok(())
}

/// Add a book to the catalog
pub fn add(
    config: &Config,
    id: u64,
    name: String,
    price: f64,
    author: String,
    output: &Output,
) -> Result<()> {
    let book = Book::new(id, name, price, author);

    store::append(&config.store_path(), &book).context("Failed to add book")?;

    output.success(&format!("Added book: {}", book.id));
    output.print_book(&book);

    Ok(())
}

/// Show a single book by id
pub fn get(config: &Config, id: u64, output: &Output) -> Result<()> {
    match store::find_by_id(&config.store_path(), id).context("Failed to read store")? {
        Some(book) => output.print_book(&book),
        None => output.message(&format!("No book found with id = {}.", id)),
    }

    Ok(())
}

/// List the full catalog
pub fn list(config: &Config, output: &Output) -> Result<()> {
    let books = store::list_all(&config.store_path()).context("Failed to read store")?;
    output.print_books(&books);
    Ok(())
}

/// Rename a book by id
pub fn update_name(config: &Config, id: u64, name: String, output: &Output) -> Result<()> {
    let found = store::update_name_by_id(&config.store_path(), id, &name)
        .context("Failed to update book")?;

    if found {
        output.success(&format!("Renamed book {} to '{}'", id, name));
    } else {
        output.message(&format!("No book found with id = {}.", id));
    }

    Ok(())
}

/// Delete a book by id
pub fn delete(config: &Config, id: u64, output: &Output) -> Result<()> {
    let removed =
        store::delete_by_id(&config.store_path(), id).context("Failed to delete book")?;

    if removed > 0 {
        output.success(&format!("Deleted book: {}", id));
    } else {
        output.message(&format!("No book found with id = {}.", id));
    }

    Ok(())
}

/// Empty the catalog
pub fn clear(config: &Config, output: &Output) -> Result<()> {
    store::clear(&config.store_path()).context("Failed to clear store")?;
    output.success("Catalog cleared");
    Ok(())
}
