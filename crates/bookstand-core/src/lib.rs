pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod runtime;
pub mod session;

// Re-export the types the TUI touches constantly.
pub use api::BookstoreApi;
pub use auth::GateCredentials;
pub use config::CoreConfig;
pub use error::ApiError;
pub use events::ApiEvent;
pub use models::{Book, BookDraft, BookListing, InvalidBook};
pub use runtime::{ApiCommand, CoreHandle, CoreRuntime};
pub use session::SessionStore;
