pub mod book_form;
pub mod books;
pub mod confirm;
pub mod login;

pub use book_form::render_book_form;
pub use books::render_books;
pub use confirm::render_modal;
pub use login::render_login;
