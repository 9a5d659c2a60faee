//! Application-wide constants
//!
//! Central home for defaults shared between the core crate and the TUI.

/// Default bookstore API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Collection endpoint under the API base.
pub const BOOKS_PATH: &str = "/api/v1/books";

// Back-office gate defaults. Deployments can override them through the
// environment; the stock install ships with these.
pub const DEFAULT_ADMIN_USER: &str = "bookstoreadmin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "ManageBook68";

/// File inside the data directory holding the session marker.
pub const SESSION_FILE: &str = "session.json";

/// Env var consumed by the log filter, `RUST_LOG` syntax.
pub const LOG_FILTER_ENV: &str = "BOOKSTAND_LOG";
