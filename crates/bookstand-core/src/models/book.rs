use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single record in the bookstore collection.
///
/// `category` and `price` are optional on the wire; the server omits or
/// nulls them for records created before those columns existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Book {
    /// Decode and validate a single record from a server response.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let book: Book = serde_json::from_value(value).map_err(|err| err.to_string())?;
        book.validate()?;
        Ok(book)
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is empty".to_string());
        }
        if self.author.trim().is_empty() {
            return Err("author is empty".to_string());
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("price {price} is not a valid amount"));
            }
        }
        Ok(())
    }

    /// Table label for the category column.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("—")
    }

    /// Table label for the price column, two decimals like the storefront.
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("{price:.2}"),
            None => "-".to_string(),
        }
    }
}

/// Why a record pulled from the server was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBook {
    /// Position of the record in the server response.
    pub index: usize,
    pub reason: String,
}

/// A decoded collection response: the records that passed validation, in
/// server order, plus a note for every record that did not.
#[derive(Debug, Clone, Default)]
pub struct BookListing {
    pub books: Vec<Book>,
    pub rejected: Vec<InvalidBook>,
}

impl BookListing {
    /// Validate each record independently so one malformed row cannot take
    /// down the whole listing.
    pub fn from_values(values: Vec<Value>) -> Self {
        let mut books = Vec::with_capacity(values.len());
        let mut rejected = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            match Book::from_value(value) {
                Ok(book) => books.push(book),
                Err(reason) => {
                    tracing::warn!(index, %reason, "dropping malformed book record");
                    rejected.push(InvalidBook { index, reason });
                }
            }
        }
        Self { books, rejected }
    }
}

/// Fields the operator can submit when creating or updating a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl BookDraft {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            price: book.price,
        }
    }

    /// Check the draft the way the server will before sending it.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.author.trim().is_empty() {
            return Err("Author is required".to_string());
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err("Price must be zero or more".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_from_value_accepts_full_record() {
        let book = Book::from_value(json!({
            "id": 3,
            "title": "The Pragmatic Programmer",
            "author": "Hunt & Thomas",
            "category": "Software",
            "price": 950.0,
        }))
        .unwrap();
        assert_eq!(book.id, 3);
        assert_eq!(book.category.as_deref(), Some("Software"));
    }

    #[test]
    fn test_from_value_tolerates_missing_optionals() {
        let book = Book::from_value(json!({
            "id": 1,
            "title": "Walden",
            "author": "Thoreau",
        }))
        .unwrap();
        assert!(book.category.is_none());
        assert!(book.price.is_none());
        assert_eq!(book.category_label(), "—");
        assert_eq!(book.price_label(), "-");
    }

    #[test]
    fn test_from_value_rejects_missing_title() {
        let err = Book::from_value(json!({"id": 1, "author": "Nobody"})).unwrap_err();
        assert!(err.contains("title"), "unexpected reason: {err}");
    }

    #[test]
    fn test_from_value_rejects_blank_author() {
        let err =
            Book::from_value(json!({"id": 1, "title": "T", "author": "   "})).unwrap_err();
        assert_eq!(err, "author is empty");
    }

    #[test]
    fn test_from_value_rejects_negative_price() {
        let err = Book::from_value(json!({
            "id": 1,
            "title": "T",
            "author": "A",
            "price": -5.0,
        }))
        .unwrap_err();
        assert!(err.contains("price"), "unexpected reason: {err}");
    }

    #[test]
    fn test_listing_keeps_server_order_and_reports_rejects() {
        let listing = BookListing::from_values(vec![
            json!({"id": 9, "title": "Third", "author": "C"}),
            json!({"id": 4, "title": "", "author": "broken"}),
            json!({"id": 2, "title": "First", "author": "A"}),
            json!("not an object"),
        ]);
        let ids: Vec<i64> = listing.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![9, 2]);
        assert_eq!(listing.rejected.len(), 2);
        assert_eq!(listing.rejected[0].index, 1);
        assert_eq!(listing.rejected[1].index, 3);
    }

    #[test]
    fn test_price_label_formats_two_decimals() {
        let book = Book {
            id: 1,
            title: "T".to_string(),
            author: "A".to_string(),
            category: None,
            price: Some(199.5),
        };
        assert_eq!(book.price_label(), "199.50");
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = BookDraft {
            title: "T".to_string(),
            author: "A".to_string(),
            category: None,
            price: Some(10.0),
        };
        assert!(draft.validate().is_ok());

        draft.title = "  ".to_string();
        assert_eq!(draft.validate().unwrap_err(), "Title is required");

        draft.title = "T".to_string();
        draft.price = Some(-1.0);
        assert_eq!(draft.validate().unwrap_err(), "Price must be zero or more");
    }

    #[test]
    fn test_draft_serializes_without_empty_optionals() {
        let draft = BookDraft {
            title: "T".to_string(),
            author: "A".to_string(),
            category: None,
            price: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, json!({"title": "T", "author": "A"}));
    }

    #[test]
    fn test_draft_from_book_round_trips_fields() {
        let book = Book {
            id: 8,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            category: Some("Sci-fi".to_string()),
            price: Some(420.0),
        };
        let draft = BookDraft::from_book(&book);
        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.category.as_deref(), Some("Sci-fi"));
        assert_eq!(draft.price, Some(420.0));
    }
}
