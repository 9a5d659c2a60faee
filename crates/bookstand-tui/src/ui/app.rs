//! Application state.
//!
//! `App` owns everything the render pass reads: the active view, per-view
//! state, the modal, the notification queue and the session marker. Input
//! handlers mutate it; worker events are applied through [`App::apply_event`],
//! which drops anything stale.

use std::collections::HashSet;
use std::mem;

use bookstand_core::runtime::ApiCommand;
use bookstand_core::{
    ApiError, ApiEvent, Book, BookListing, CoreHandle, GateCredentials, SessionStore,
};

use crate::ui::modal::{ConfirmDeleteState, ConfirmLogoutState, ErrorModalState, ModalState};
use crate::ui::notifications::{Notification, NotificationQueue};
use crate::ui::state::{
    BookFormState, BooksViewState, FormMode, LoadState, LoginState, PrefillState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Books,
    BookForm,
}

pub struct App {
    pub running: bool,
    /// First Ctrl+C arms this; the second one quits.
    pub pending_quit: bool,
    pub view: View,
    core: CoreHandle,
    pub session: SessionStore,
    credentials: GateCredentials,
    pub books: BooksViewState,
    pub login: LoginState,
    pub form: Option<BookFormState>,
    pub modal: ModalState,
    notifications: NotificationQueue,
    /// Rows with a delete in flight. Kept visible but inert until the
    /// server confirms.
    pub pending_deletes: HashSet<i64>,
    /// Bumped on every books-view mount so late results identify themselves.
    load_generation: u64,
    frame: u64,
}

impl App {
    pub fn new(core: CoreHandle, session: SessionStore, credentials: GateCredentials) -> Self {
        Self {
            running: true,
            pending_quit: false,
            view: View::Login,
            core,
            session,
            credentials,
            books: BooksViewState::default(),
            login: LoginState::default(),
            form: None,
            modal: ModalState::None,
            notifications: NotificationQueue::new(),
            pending_deletes: HashSet::new(),
            load_generation: 0,
            frame: 0,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        self.notifications.tick();
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    fn send(&self, command: ApiCommand) {
        if self.core.send(command).is_err() {
            tracing::warn!("api worker is gone, command dropped");
        }
    }

    /// Mount the books view and start a fresh load.
    pub fn enter_books(&mut self) {
        self.view = View::Books;
        self.form = None;
        self.load_generation += 1;
        self.books = BooksViewState::loading();
        self.send(ApiCommand::LoadBooks {
            generation: self.load_generation,
        });
    }

    fn enter_login(&mut self) {
        self.view = View::Login;
        self.books = BooksViewState::default();
        self.login = LoginState::default();
        self.form = None;
    }

    pub fn enter_create_form(&mut self) {
        if self.view == View::Books {
            self.send(ApiCommand::CancelLoad);
        }
        self.view = View::BookForm;
        self.form = Some(BookFormState::create());
    }

    pub fn enter_edit_form(&mut self) {
        let Some(book) = self.books.selected_book() else {
            return;
        };
        let id = book.id;
        if self.pending_deletes.contains(&id) {
            self.notify(Notification::info("This book is being deleted"));
            return;
        }
        self.view = View::BookForm;
        self.form = Some(BookFormState::edit(id));
        self.send(ApiCommand::FetchBook { id });
    }

    /// Esc from the form. Remounting the list reloads it.
    pub fn leave_form_to_books(&mut self) {
        self.form = None;
        self.enter_books();
    }

    /// Check the typed credentials against the configured pair.
    pub fn submit_login(&mut self) {
        if self
            .credentials
            .matches(&self.login.username, &self.login.password)
        {
            tracing::info!("sign-in accepted");
            self.session.establish();
            if let Some(warning) = self.session.take_error() {
                self.notify(Notification::warning(warning));
            }
            self.login = LoginState::default();
            self.enter_books();
        } else {
            tracing::info!("sign-in rejected");
            self.login.error = Some("Invalid username or password".to_string());
        }
    }

    /// Validate the form and hand the draft to the worker. Repeat submits
    /// while a save is in flight are ignored.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if form.submitting || form.prefill != PrefillState::Ready {
            return;
        }
        match form.draft() {
            Ok(draft) => {
                form.submitting = true;
                form.error = None;
                let command = match form.mode {
                    FormMode::Create => ApiCommand::CreateBook { draft },
                    FormMode::Edit { id } => ApiCommand::UpdateBook { id, draft },
                };
                self.send(command);
            }
            Err(message) => form.error = Some(message),
        }
    }

    /// Open the delete confirmation for the selected row.
    pub fn request_delete_selected(&mut self) {
        if !self.modal.is_none() {
            return;
        }
        let Some(book) = self.books.selected_book() else {
            return;
        };
        let (book_id, title) = (book.id, book.title.clone());
        if self.pending_deletes.contains(&book_id) {
            self.notify(Notification::info("Delete already in progress for this book"));
            return;
        }
        self.modal = ModalState::ConfirmDelete(ConfirmDeleteState {
            book_id,
            title,
            confirm_selected: false,
        });
    }

    pub fn request_logout(&mut self) {
        if !self.modal.is_none() {
            return;
        }
        self.modal = ModalState::ConfirmLogout(ConfirmLogoutState::default());
    }

    pub fn toggle_modal_choice(&mut self) {
        match &mut self.modal {
            ModalState::ConfirmDelete(state) => state.confirm_selected = !state.confirm_selected,
            ModalState::ConfirmLogout(state) => state.confirm_selected = !state.confirm_selected,
            _ => {}
        }
    }

    /// Enter on a modal runs the highlighted choice.
    pub fn apply_modal_choice(&mut self) {
        let confirmed = match &self.modal {
            ModalState::ConfirmDelete(state) => state.confirm_selected,
            ModalState::ConfirmLogout(state) => state.confirm_selected,
            ModalState::Error(_) => false,
            ModalState::None => return,
        };
        if confirmed {
            self.confirm_modal();
        } else {
            self.cancel_modal();
        }
    }

    /// Run the open modal's action.
    pub fn confirm_modal(&mut self) {
        match mem::take(&mut self.modal) {
            ModalState::ConfirmDelete(state) => {
                self.pending_deletes.insert(state.book_id);
                self.send(ApiCommand::DeleteBook { id: state.book_id });
            }
            ModalState::ConfirmLogout(_) => {
                self.session.clear();
                if let Some(warning) = self.session.take_error() {
                    self.notify(Notification::warning(warning));
                }
                self.send(ApiCommand::CancelLoad);
                self.enter_login();
            }
            ModalState::Error(_) | ModalState::None => {}
        }
    }

    pub fn cancel_modal(&mut self) {
        self.modal = ModalState::None;
    }

    /// Bracketed paste goes into whichever text field has focus.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.modal.is_none() {
            return;
        }
        match self.view {
            View::Login => {
                for c in text.chars() {
                    self.login.insert_char(c);
                }
            }
            View::BookForm => {
                if let Some(form) = self.form.as_mut() {
                    if form.submitting || form.prefill_pending() {
                        return;
                    }
                    for c in text.chars() {
                        form.insert_char(c);
                    }
                }
            }
            View::Books => {}
        }
    }

    /// Apply a worker event. Results that no longer match the screen the
    /// operator is on are dropped.
    pub fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::BooksLoaded { generation, result } => {
                self.apply_books_loaded(generation, result)
            }
            ApiEvent::BookFetched { id, result } => self.apply_book_fetched(id, result),
            ApiEvent::BookCreated { result } => self.apply_saved(None, result),
            ApiEvent::BookUpdated { id, result } => self.apply_saved(Some(id), result),
            ApiEvent::BookDeleted { id, result } => self.apply_book_deleted(id, result),
        }
    }

    fn apply_books_loaded(&mut self, generation: u64, result: Result<BookListing, ApiError>) {
        if self.view != View::Books || generation != self.load_generation {
            tracing::debug!(generation, "dropping stale book list");
            return;
        }
        match result {
            Ok(listing) => {
                if !listing.rejected.is_empty() {
                    let count = listing.rejected.len();
                    let message = if count == 1 {
                        "1 invalid record hidden from the list".to_string()
                    } else {
                        format!("{count} invalid records hidden from the list")
                    };
                    self.notify(Notification::warning(message));
                }
                self.books.load = LoadState::Loaded(listing.books);
            }
            Err(err) => {
                self.books.load = LoadState::Failed(format!("Could not load books: {err}"));
            }
        }
    }

    fn apply_book_fetched(&mut self, id: i64, result: Result<Book, ApiError>) {
        if self.view != View::BookForm {
            return;
        }
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let expected = FormMode::Edit { id };
        if form.mode != expected || !form.prefill_pending() {
            return;
        }
        match result {
            Ok(book) => form.load_book(&book),
            Err(err) => {
                form.prefill = PrefillState::Failed(format!("Could not load book: {err}"));
            }
        }
    }

    fn apply_saved(&mut self, id: Option<i64>, result: Result<Book, ApiError>) {
        if self.view != View::BookForm {
            return;
        }
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let mode_matches = match (id, form.mode) {
            (None, FormMode::Create) => true,
            (Some(saved), FormMode::Edit { id: editing }) => saved == editing,
            _ => false,
        };
        if !form.submitting || !mode_matches {
            return;
        }
        match result {
            Ok(book) => {
                let verb = if id.is_none() { "Added" } else { "Updated" };
                self.notify(Notification::success(format!("{verb} \"{}\"", book.title)));
                self.form = None;
                self.enter_books();
            }
            Err(err) => {
                if let Some(form) = self.form.as_mut() {
                    form.submitting = false;
                    form.error = Some(format!("Save failed: {err}"));
                }
            }
        }
    }

    fn apply_book_deleted(&mut self, id: i64, result: Result<(), ApiError>) {
        self.pending_deletes.remove(&id);
        match result {
            Ok(()) => {
                if let LoadState::Loaded(books) = &mut self.books.load {
                    books.retain(|book| book.id != id);
                }
                self.books.clamp_selection();
                self.notify(Notification::success("Book deleted"));
            }
            Err(err) => {
                self.modal = ModalState::Error(ErrorModalState {
                    title: "Delete failed".to_string(),
                    message: err.to_string(),
                });
            }
        }
    }
}
