//! HTTP client for the bookstore REST API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::BOOKS_PATH;
use crate::error::ApiError;
use crate::models::{Book, BookDraft, BookListing};

/// Thin client over the `/api/v1/books` endpoints.
///
/// Requests carry no timeout. A slow server keeps a request pending until
/// it answers; abandoned reads are aborted by the caller instead.
#[derive(Debug, Clone)]
pub struct BookstoreApi {
    client: Client,
    base_url: String,
}

impl BookstoreApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn books_url(&self) -> String {
        format!("{}{}", self.base_url, BOOKS_PATH)
    }

    fn book_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, BOOKS_PATH, id)
    }

    /// GET the full collection. Records that fail validation are dropped
    /// from the listing and reported alongside it.
    pub async fn list_books(&self) -> Result<BookListing, ApiError> {
        let resp = self.client.get(self.books_url()).send().await?;
        let resp = check_status(resp).await?;
        let values: Vec<Value> = decode(resp).await?;
        Ok(BookListing::from_values(values))
    }

    /// GET a single record, used to prefill the edit form.
    pub async fn fetch_book(&self, id: i64) -> Result<Book, ApiError> {
        let resp = self.client.get(self.book_url(id)).send().await?;
        let resp = check_status(resp).await?;
        let value: Value = decode(resp).await?;
        Book::from_value(value).map_err(ApiError::InvalidBody)
    }

    pub async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        let resp = self
            .client
            .post(self.books_url())
            .json(draft)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        decode(resp).await
    }

    pub async fn update_book(&self, id: i64, draft: &BookDraft) -> Result<Book, ApiError> {
        let resp = self
            .client
            .put(self.book_url(id))
            .json(draft)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        decode(resp).await
    }

    /// DELETE one record. The success body is ignored.
    pub async fn delete_book(&self, id: i64) -> Result<(), ApiError> {
        let resp = self.client.delete(self.book_url(id)).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

/// Turn non-2xx responses into [`ApiError::Status`], keeping the body text
/// for the log.
async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %message, "api request rejected");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|err| ApiError::InvalidBody(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{delete, get, post, put};
    use axum::{Json, Router};
    use serde_json::json;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_list_books_preserves_server_order() {
        let app = Router::new().route(
            "/api/v1/books",
            get(|| async {
                Json(json!([
                    {"id": 5, "title": "Later", "author": "B", "category": "Essays", "price": 120.0},
                    {"id": 1, "title": "Earlier", "author": "A"},
                ]))
            }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let listing = api.list_books().await.unwrap();
        let ids: Vec<i64> = listing.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![5, 1]);
        assert!(listing.rejected.is_empty());
    }

    #[tokio::test]
    async fn test_list_books_drops_malformed_records() {
        let app = Router::new().route(
            "/api/v1/books",
            get(|| async {
                Json(json!([
                    {"id": 1, "title": "Good", "author": "A"},
                    {"id": 2, "title": "", "author": "B"},
                    {"id": 3, "title": "Also good", "author": "C"},
                ]))
            }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let listing = api.list_books().await.unwrap();
        assert_eq!(listing.books.len(), 2);
        assert_eq!(listing.rejected.len(), 1);
        assert_eq!(listing.rejected[0].index, 1);
    }

    #[tokio::test]
    async fn test_list_books_surfaces_server_error() {
        let app = Router::new().route(
            "/api/v1/books",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let err = api.list_books().await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_books_rejects_non_array_body() {
        let app = Router::new().route(
            "/api/v1/books",
            get(|| async { Json(json!({"error": "wrong shape"})) }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let err = api.list_books().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_fetch_book_by_id() {
        let app = Router::new().route(
            "/api/v1/books/:id",
            get(|Path(id): Path<i64>| async move {
                Json(json!({"id": id, "title": "Found", "author": "A", "price": 99.0}))
            }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let book = api.fetch_book(7).await.unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.title, "Found");
    }

    #[tokio::test]
    async fn test_fetch_missing_book_is_a_status_error() {
        let app = Router::new().route(
            "/api/v1/books/:id",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "Book not found"}))) }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let err = api.fetch_book(99).await.unwrap_err();
        assert!(
            matches!(err, ApiError::Status { status: 404, .. }),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_create_book_posts_draft() {
        let app = Router::new().route(
            "/api/v1/books",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["title"], "New");
                assert_eq!(body["author"], "N");
                assert!(body.get("category").is_none());
                (
                    StatusCode::CREATED,
                    Json(json!({"id": 11, "title": "New", "author": "N"})),
                )
            }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let draft = BookDraft {
            title: "New".to_string(),
            author: "N".to_string(),
            category: None,
            price: None,
        };
        let created = api.create_book(&draft).await.unwrap();
        assert_eq!(created.id, 11);
    }

    #[tokio::test]
    async fn test_update_book_puts_draft() {
        let app = Router::new().route(
            "/api/v1/books/:id",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                Json(json!({
                    "id": id,
                    "title": body["title"],
                    "author": body["author"],
                    "price": 50.0,
                }))
            }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let draft = BookDraft {
            title: "Edited".to_string(),
            author: "E".to_string(),
            category: None,
            price: Some(50.0),
        };
        let updated = api.update_book(4, &draft).await.unwrap();
        assert_eq!(updated.id, 4);
        assert_eq!(updated.title, "Edited");
    }

    #[tokio::test]
    async fn test_delete_book_ignores_success_body() {
        let app = Router::new().route(
            "/api/v1/books/:id",
            delete(|| async { Json(json!({"message": "Book deleted successfully"})) }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        api.delete_book(2).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_book_surfaces_failure() {
        let app = Router::new().route(
            "/api/v1/books/:id",
            delete(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db locked") }),
        );
        let api = BookstoreApi::new(serve(app).await).unwrap();

        let err = api.delete_book(2).await.unwrap_err();
        assert!(
            matches!(err, ApiError::Status { status: 500, .. }),
            "got {err:?}"
        );
    }
}
