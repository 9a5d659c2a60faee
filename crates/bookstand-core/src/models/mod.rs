mod book;

pub use book::{Book, BookDraft, BookListing, InvalidBook};
