//! Folder-scoped JSON record store
//!
//! Every operation is stateless: the target path is passed explicitly and
//! each call independently loads the current on-disk state. Mutations
//! serialize the full record sequence and replace the store file using an
//! atomic write (write to temp file, then rename), so the file is never
//! left in a partially-written state.
//!
//! The folder must exist before any file operation targeting it; directory
//! creation happens only through [`ensure_folder`].
//!
//! Not safe against concurrent writers: two overlapping read-modify-write
//! sequences on the same path can lose updates. Acceptable for the small
//! catalogs this serves.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::Book;

/// Create the folder if it does not exist
///
/// Returns `true` if the folder was created, `false` if it already
/// existed. The parent directory must exist.
pub fn ensure_folder(path: &Path) -> StoreResult<bool> {
    if path.exists() {
        debug!(path = %path.display(), "folder already exists");
        return Ok(false);
    }

    fs::create_dir(path).map_err(|e| StoreError::CreateFolder {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), "folder created");
    Ok(true)
}

/// Write an initial catalog to `path`, overwriting any existing content
pub fn init_store(path: &Path, initial: &[Book]) -> StoreResult<()> {
    write_books(path, initial)?;
    debug!(path = %path.display(), count = initial.len(), "store initialized");
    Ok(())
}

/// Append a book to the catalog
///
/// A missing store file is treated as an empty catalog. Appending an id
/// that is already present is rejected with [`StoreError::DuplicateId`].
pub fn append(path: &Path, book: &Book) -> StoreResult<()> {
    let mut books = read_books(path)?;

    if books.iter().any(|b| b.id == book.id) {
        return Err(StoreError::DuplicateId {
            path: path.to_path_buf(),
            id: book.id,
        });
    }

    books.push(book.clone());
    write_books(path, &books)?;
    debug!(path = %path.display(), id = book.id, "book appended");
    Ok(())
}

/// Find the first book with the given id
///
/// Returns `None` if no book matches; a missing store file reads as empty.
pub fn find_by_id(path: &Path, id: u64) -> StoreResult<Option<Book>> {
    let books = read_books(path)?;
    Ok(books.into_iter().find(|b| b.id == id))
}

/// Return the full ordered catalog
///
/// A missing store file reads as an empty catalog.
pub fn list_all(path: &Path) -> StoreResult<Vec<Book>> {
    read_books(path)
}

/// Rename the first book with the given id
///
/// Returns whether a match was found. When nothing matches, the store
/// file is left untouched.
pub fn update_name_by_id(path: &Path, id: u64, new_name: &str) -> StoreResult<bool> {
    let mut books = read_books(path)?;

    match books.iter_mut().find(|b| b.id == id) {
        Some(book) => {
            book.set_name(new_name);
            write_books(path, &books)?;
            debug!(path = %path.display(), id, "book renamed");
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Remove every book with the given id
///
/// Returns the number of books removed. The store file is rewritten only
/// when something was actually removed; ids are unique for catalogs
/// written through [`append`], but files produced elsewhere may carry
/// duplicates and all of them are dropped.
pub fn delete_by_id(path: &Path, id: u64) -> StoreResult<usize> {
    let mut books = read_books(path)?;
    let before = books.len();
    books.retain(|b| b.id != id);
    let removed = before - books.len();

    if removed > 0 {
        write_books(path, &books)?;
        debug!(path = %path.display(), id, removed, "books deleted");
    }

    Ok(removed)
}

/// Overwrite the store file with an empty catalog
pub fn clear(path: &Path) -> StoreResult<()> {
    write_books(path, &[])?;
    debug!(path = %path.display(), "store cleared");
    Ok(())
}

/// Rename a file or folder
///
/// Fails if `old` does not exist or the parent of `new` is missing. The
/// store keeps no path state; callers update their own references.
pub fn rename_path(old: &Path, new: &Path) -> StoreResult<()> {
    if !old.exists() {
        return Err(StoreError::NotFound {
            path: old.to_path_buf(),
        });
    }

    fs::rename(old, new).map_err(|e| StoreError::Rename {
        from: old.to_path_buf(),
        to: new.to_path_buf(),
        source: e,
    })?;

    debug!(from = %old.display(), to = %new.display(), "path renamed");
    Ok(())
}

/// Recursively remove the folder and all its contents
///
/// Idempotent: an already-absent path is a no-op.
pub fn delete_folder(path: &Path) -> StoreResult<()> {
    if !path.exists() {
        debug!(path = %path.display(), "folder already absent");
        return Ok(());
    }

    fs::remove_dir_all(path).map_err(|e| StoreError::RemoveFolder {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), "folder deleted");
    Ok(())
}

/// Load the catalog from disk, treating a missing file as empty
fn read_books(path: &Path) -> StoreResult<Vec<Book>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content =
        fs::read_to_string(path).map_err(|e| StoreError::read_io(e, path.to_path_buf()))?;

    serde_json::from_str(&content).map_err(|e| StoreError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serialize the full catalog and atomically replace the store file
fn write_books(path: &Path, books: &[Book]) -> StoreResult<()> {
    // Pretty-printed with 2-space indentation, top-level array
    let content = serde_json::to_string_pretty(&books).map_err(|e| StoreError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    atomic_write(path, content.as_bytes())
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// The parent directory is not created here: a missing folder fails the
/// write, keeping directory creation an explicit operation.
fn atomic_write(path: &Path, data: &[u8]) -> StoreResult<()> {
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StoreError::write_io(e, path.to_path_buf()))?;

    file.write_all(data)
        .map_err(|e| StoreError::write_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StoreError::write_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| StoreError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new(1, "ABC", 20.99, "F. Scott Fitzgerald"),
            Book::new(2, "XYZ", 15.75, "Harper Lee"),
            Book::new(3, "1984", 18.50, "George Orwell"),
        ]
    }

    fn store_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("books.json")
    }

    #[test]
    fn test_ensure_folder_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("myFolder");

        assert!(ensure_folder(&folder).unwrap());
        assert!(folder.is_dir());

        // Second call succeeds without error and reports "already there"
        assert!(!ensure_folder(&folder).unwrap());
    }

    #[test]
    fn test_ensure_folder_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("a").join("b");

        let err = ensure_folder(&folder).unwrap_err();
        assert!(matches!(err, StoreError::CreateFolder { .. }));
    }

    #[test]
    fn test_init_store_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);

        init_store(&path, &sample_books()).unwrap();
        assert_eq!(list_all(&path).unwrap().len(), 3);

        init_store(&path, &[]).unwrap();
        assert!(list_all(&path).unwrap().is_empty());
    }

    #[test]
    fn test_init_store_missing_folder_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("books.json");

        assert!(init_store(&path, &[]).is_err());
    }

    #[test]
    fn test_append_then_list_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);

        let book = Book::new(1, "ABC", 20.99, "F. Scott Fitzgerald");
        append(&path, &book).unwrap();

        let books = list_all(&path).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].name, "ABC");
        assert_eq!(books[0].price, 20.99);
        assert_eq!(books[0].author, "F. Scott Fitzgerald");
    }

    #[test]
    fn test_append_missing_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);

        // No init_store call; the absent file reads as an empty catalog
        assert!(list_all(&path).unwrap().is_empty());
        append(&path, &Book::new(5, "Dune", 9.99, "Frank Herbert")).unwrap();
        assert_eq!(list_all(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_append_duplicate_id_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);

        append(&path, &Book::new(1, "ABC", 20.99, "F. Scott Fitzgerald")).unwrap();
        let err = append(&path, &Book::new(1, "Other", 1.0, "Someone")).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateId { id: 1, .. }));
        // The store is unchanged
        assert_eq!(list_all(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        init_store(&path, &sample_books()).unwrap();

        let found = find_by_id(&path, 2).unwrap().unwrap();
        assert_eq!(found.name, "XYZ");
        assert_eq!(found.author, "Harper Lee");

        assert!(find_by_id(&path, 42).unwrap().is_none());
    }

    #[test]
    fn test_update_name_changes_only_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        init_store(&path, &sample_books()).unwrap();

        let before = list_all(&path).unwrap();
        assert!(update_name_by_id(&path, 2, "NewName").unwrap());
        let after = list_all(&path).unwrap();

        assert_eq!(after[1].name, "NewName");
        assert_eq!(after[1].id, before[1].id);
        assert_eq!(after[1].price, before[1].price);
        assert_eq!(after[1].author, before[1].author);
        // Other records untouched
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn test_update_name_no_match_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        init_store(&path, &sample_books()).unwrap();

        let before = fs::read(&path).unwrap();
        assert!(!update_name_by_id(&path, 99, "Nope").unwrap());
        let after = fs::read(&path).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        init_store(&path, &sample_books()).unwrap();

        assert_eq!(delete_by_id(&path, 1).unwrap(), 1);

        let books = list_all(&path).unwrap();
        assert_eq!(books.len(), 2);
        assert!(books.iter().all(|b| b.id != 1));
    }

    #[test]
    fn test_delete_by_id_no_match_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        init_store(&path, &sample_books()).unwrap();

        let before = fs::read(&path).unwrap();
        assert_eq!(delete_by_id(&path, 99).unwrap(), 0);
        let after = fs::read(&path).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_by_id_drops_all_matches() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);

        // Files written by other tools may carry duplicate ids
        let books = vec![
            Book::new(1, "ABC", 20.99, "F. Scott Fitzgerald"),
            Book::new(1, "ABC again", 5.00, "Unknown"),
            Book::new(2, "XYZ", 15.75, "Harper Lee"),
        ];
        init_store(&path, &books).unwrap();

        assert_eq!(delete_by_id(&path, 1).unwrap(), 2);
        assert_eq!(list_all(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        init_store(&path, &sample_books()).unwrap();

        clear(&path).unwrap();
        assert!(list_all(&path).unwrap().is_empty());

        // Clearing an already-empty store keeps it empty
        clear(&path).unwrap();
        assert!(list_all(&path).unwrap().is_empty());
    }

    #[test]
    fn test_full_catalog_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);

        init_store(&path, &[]).unwrap();
        append(&path, &Book::new(1, "ABC", 20.99, "F. Scott Fitzgerald")).unwrap();
        append(&path, &Book::new(2, "XYZ", 15.75, "Harper Lee")).unwrap();

        let found = find_by_id(&path, 1).unwrap().unwrap();
        assert_eq!(found.name, "ABC");
        assert_eq!(found.price, 20.99);

        assert!(update_name_by_id(&path, 2, "NewName").unwrap());
        let books = list_all(&path).unwrap();
        assert_eq!(books[0].name, "ABC");
        assert_eq!(books[1].name, "NewName");

        assert_eq!(delete_by_id(&path, 1).unwrap(), 1);
        let books = list_all(&path).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 2);
        assert_eq!(books[0].name, "NewName");
    }

    #[test]
    fn test_corrupt_file_reports_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        fs::write(&path, "not json at all").unwrap();

        let err = list_all(&path).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
        assert!(err.to_string().contains("books.json"));
    }

    #[test]
    fn test_non_array_content_reports_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        let err = list_all(&path).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[test]
    fn test_stored_file_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        init_store(&path, &sample_books()[..1]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("  {\n"));
        assert!(content.contains("\"name\": \"ABC\""));
    }

    #[test]
    fn test_rename_path_file() {
        let temp_dir = TempDir::new().unwrap();
        let old = store_path(&temp_dir);
        let new = temp_dir.path().join("catalog.json");
        init_store(&old, &sample_books()).unwrap();

        rename_path(&old, &new).unwrap();

        assert!(!old.exists());
        assert_eq!(list_all(&new).unwrap().len(), 3);
    }

    #[test]
    fn test_rename_path_folder_then_operate() {
        let temp_dir = TempDir::new().unwrap();
        let old_folder = temp_dir.path().join("myFolder");
        let new_folder = temp_dir.path().join("updatedFolder");

        ensure_folder(&old_folder).unwrap();
        init_store(&old_folder.join("books.json"), &sample_books()).unwrap();

        rename_path(&old_folder, &new_folder).unwrap();

        // All further operations go through the new path
        let path = new_folder.join("books.json");
        assert_eq!(list_all(&path).unwrap().len(), 3);
        append(&path, &Book::new(4, "Emma", 12.00, "Jane Austen")).unwrap();
        assert_eq!(list_all(&path).unwrap().len(), 4);
    }

    #[test]
    fn test_rename_path_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let old = temp_dir.path().join("nope");
        let new = temp_dir.path().join("other");

        let err = rename_path(&old, &new).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_delete_folder_recursive_and_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let folder = temp_dir.path().join("myFolder");

        ensure_folder(&folder).unwrap();
        init_store(&folder.join("books.json"), &sample_books()).unwrap();

        delete_folder(&folder).unwrap();
        assert!(!folder.exists());

        // Deleting again is a no-op
        delete_folder(&folder).unwrap();
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = store_path(&temp_dir);
        init_store(&path, &sample_books()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("books.tmp").exists());
    }
}
