use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A stored book row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    /// Identifier generated by the store; never changes
    pub id: i64,
    /// Title of the book
    pub name: String,
    /// Author of the book
    pub author: String,
    /// Publisher of the book
    pub publication: String,
    /// Set once when the row is inserted
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRequest {
    pub name: String,
    pub author: String,
    pub publication: String,
}

/// Request body for replacing a book's fields.
///
/// `updated_at` is accepted for symmetry with the response shape but the
/// stored timestamp is always taken from the clock at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdateRequest {
    pub name: String,
    pub author: String,
    pub publication: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Book as returned by create, read and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub publication: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author: book.author,
            publication: book.publication,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// Current instant at microsecond resolution, matching `timestamptz`.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_request_requires_every_field() {
        let err = serde_json::from_value::<BookRequest>(json!({
            "name": "Dune",
            "author": "Herbert"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("publication"));
    }

    #[test]
    fn update_request_timestamp_is_optional() {
        let request: BookUpdateRequest = serde_json::from_value(json!({
            "name": "Dune Messiah",
            "author": "Herbert",
            "publication": "Putnam"
        }))
        .unwrap();
        assert!(request.updated_at.is_none());

        let request: BookUpdateRequest = serde_json::from_value(json!({
            "name": "Dune Messiah",
            "author": "Herbert",
            "publication": "Putnam",
            "updated_at": "1999-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(request.updated_at.is_some());
    }

    #[test]
    fn response_uses_snake_case_fields() {
        let stamp = now();
        let response = BookResponse::from(Book {
            id: 7,
            name: "Dune".to_string(),
            author: "Herbert".to_string(),
            publication: "Chilton".to_string(),
            created_at: stamp,
            updated_at: stamp,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Dune");
        assert!(value["created_at"].is_string());
        assert!(value["updated_at"].is_string());
    }

    #[test]
    fn now_has_microsecond_resolution() {
        assert_eq!(now().timestamp_subsec_nanos() % 1_000, 0);
    }
}
