use serde::{Deserialize, Serialize};

use super::Time;
use crate::blob::ExternalBlob;

/// A catalog entry as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub description: String,
    pub total_copies: u64,
    pub available_copies: u64,
    pub added_at: Time,
    #[serde(default)]
    pub file: Option<ExternalBlob>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// `"3/5 available"`, or `"Not available"` when every copy is out.
    pub fn availability_label(&self) -> String {
        if self.is_available() {
            format!("{}/{} available", self.available_copies, self.total_copies)
        } else {
            "Not available".to_string()
        }
    }

    /// Case-insensitive match against title, author, and ISBN.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.title.to_lowercase().contains(&q)
            || self.author.to_lowercase().contains(&q)
            || self.isbn.to_lowercase().contains(&q)
    }
}

/// Payload for `addBook` / `editBook`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreateData {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub description: String,
    pub total_copies: u64,
    #[serde(default)]
    pub file: Option<ExternalBlob>,
}

impl From<&Book> for BookCreateData {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            category: book.category.clone(),
            description: book.description.clone(),
            total_copies: book.total_copies,
            file: book.file.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_book(id: &str, title: &str, available: u64) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Steve Klabnik".to_string(),
        isbn: "9781593278281".to_string(),
        category: "Programming".to_string(),
        description: String::new(),
        total_copies: 5,
        available_copies: available,
        added_at: Time(0),
        file: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_label() {
        assert_eq!(sample_book("1", "Rust", 3).availability_label(), "3/5 available");
        assert_eq!(sample_book("1", "Rust", 0).availability_label(), "Not available");
        assert!(!sample_book("1", "Rust", 0).is_available());
    }

    #[test]
    fn test_matches() {
        let book = sample_book("1", "The Rust Programming Language", 1);
        assert!(book.matches(""));
        assert!(book.matches("rust"));
        assert!(book.matches("KLABNIK"));
        assert!(book.matches("978159"));
        assert!(!book.matches("python"));
    }

    #[test]
    fn test_decode_backend_book() {
        let json = r#"{
            "id": "b1", "title": "Dune", "author": "Frank Herbert", "isbn": "123",
            "category": "Fiction", "description": "", "totalCopies": 2,
            "availableCopies": 1, "addedAt": 1000
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.total_copies, 2);
        assert_eq!(book.available_copies, 1);
        assert!(book.file.is_none());
    }
}
