//! Data models for shelf
//!
//! Defines the core data structure: Book. Books are stored as a JSON array
//! on disk, so the struct derives serde traits and keeps its fields in the
//! on-disk key order.

use serde::{Deserialize, Serialize};

/// One catalog entry
///
/// The `id` is caller-assigned and must be unique within a single store
/// file; the store rejects duplicate ids at append time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Caller-assigned identifier
    pub id: u64,
    /// Display name (title)
    pub name: String,
    /// Price
    pub price: f64,
    /// Author
    pub author: String,
}

impl Book {
    /// Create a new book
    pub fn new(id: u64, name: impl Into<String>, price: f64, author: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            author: author.into(),
        }
    }

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
