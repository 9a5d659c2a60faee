use crate::error::ApiError;
use crate::models::{Book, BookListing};

/// Results the API worker sends back to the UI task.
///
/// Every variant names the operation it concludes; mutating operations
/// also carry enough identity for the UI to reconcile its state.
#[derive(Debug)]
pub enum ApiEvent {
    /// Outcome of a collection load. Tagged with the generation of the
    /// originating request so results from an abandoned mount are dropped.
    BooksLoaded {
        generation: u64,
        result: Result<BookListing, ApiError>,
    },
    /// Outcome of the single-record fetch behind the edit form prefill.
    BookFetched {
        id: i64,
        result: Result<Book, ApiError>,
    },
    BookCreated {
        result: Result<Book, ApiError>,
    },
    BookUpdated {
        id: i64,
        result: Result<Book, ApiError>,
    },
    BookDeleted {
        id: i64,
        result: Result<(), ApiError>,
    },
}
