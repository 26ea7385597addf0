//! Store error handling
//!
//! Provides typed errors for store operations with descriptive messages
//! that always name the path involved.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create the folder
    #[error("Failed to create folder '{path}': {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read file
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write file
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Store file content is not a valid JSON array of books
    #[error("Store file '{path}' is not a valid book catalog: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Path not found (when expected to exist)
    #[error("Path not found: '{path}'")]
    NotFound { path: PathBuf },

    /// A book with this id is already in the store
    #[error("A book with id {id} already exists in '{path}'")]
    DuplicateId { path: PathBuf, id: u64 },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to rename a file or folder
    #[error("Failed to rename '{from}' to '{to}': {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to remove the folder
    #[error("Failed to delete folder '{path}': {source}")]
    RemoveFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Create an error from an I/O error raised while writing `path`
    ///
    /// Classifies the error based on its kind (permission, missing path).
    pub fn write_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied {
                path,
                source: error,
            },
            io::ErrorKind::NotFound => StoreError::NotFound { path },
            _ => StoreError::Write {
                path,
                source: error,
            },
        }
    }

    /// Create an error from an I/O error raised while reading `path`
    pub fn read_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied {
                path,
                source: error,
            },
            io::ErrorKind::NotFound => StoreError::NotFound { path },
            _ => StoreError::Read {
                path,
                source: error,
            },
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
