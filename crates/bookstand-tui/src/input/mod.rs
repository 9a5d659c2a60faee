//! Keyboard dispatch.
//!
//! An open modal captures every key; otherwise keys go to the active view.

mod modal_handlers;
mod view_handlers;

use crossterm::event::KeyEvent;

use crate::ui::{App, View};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if !app.modal.is_none() {
        modal_handlers::handle_key(app, key);
        return;
    }
    match app.view {
        View::Login => view_handlers::handle_login_key(app, key),
        View::Books => view_handlers::handle_books_key(app, key),
        View::BookForm => view_handlers::handle_form_key(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ui::modal::ModalState;
    use crate::ui::state::LoadState;
    use bookstand_core::runtime::{command_channel, ApiCommand};
    use bookstand_core::{Book, GateCredentials, SessionStore};
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn book(id: i64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Author".to_string(),
            category: None,
            price: None,
        }
    }

    fn books_app(books: Vec<Book>) -> (App, UnboundedReceiver<ApiCommand>, TempDir) {
        let dir = TempDir::new().unwrap();
        let (handle, commands) = command_channel();
        let session = SessionStore::load(dir.path());
        let mut app = App::new(handle, session, GateCredentials::default());
        app.view = View::Books;
        app.books.load = LoadState::Loaded(books);
        (app, commands, dir)
    }

    #[test]
    fn test_delete_key_opens_the_confirmation() {
        let (mut app, mut commands, _dir) = books_app(vec![book(1, "Dune")]);

        handle_key(&mut app, key(KeyCode::Char('d')));
        assert!(matches!(app.modal, ModalState::ConfirmDelete(_)));
        assert!(commands.try_recv().is_err());

        handle_key(&mut app, key(KeyCode::Char('y')));
        assert!(app.modal.is_none());
        assert!(matches!(
            commands.try_recv().unwrap(),
            ApiCommand::DeleteBook { id: 1 }
        ));
    }

    #[test]
    fn test_esc_backs_out_of_the_confirmation() {
        let (mut app, mut commands, _dir) = books_app(vec![book(1, "Dune")]);

        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.modal.is_none());
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn test_sign_out_needs_the_capital() {
        let (mut app, _commands, _dir) = books_app(vec![]);

        handle_key(&mut app, key(KeyCode::Char('l')));
        assert!(app.modal.is_none());

        handle_key(&mut app, key(KeyCode::Char('L')));
        assert!(matches!(app.modal, ModalState::ConfirmLogout(_)));
    }

    #[test]
    fn test_list_navigation() {
        let (mut app, _commands, _dir) =
            books_app(vec![book(1, "a"), book(2, "b"), book(3, "c")]);

        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.books.selected, 1);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.books.selected, 0);
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.books.selected, 2);
        handle_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.books.selected, 0);
    }

    #[test]
    fn test_an_open_modal_swallows_view_keys() {
        let (mut app, mut commands, _dir) = books_app(vec![book(1, "Dune")]);

        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.running, "q must not quit through a modal");
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert!(app.form.is_none());
        assert!(commands.try_recv().is_err());
    }

    #[test]
    fn test_login_typing_and_submit() {
        let (mut app, mut commands, _dir) = {
            let dir = TempDir::new().unwrap();
            let (handle, commands) = command_channel();
            let session = SessionStore::load(dir.path());
            (
                App::new(handle, session, GateCredentials::default()),
                commands,
                dir,
            )
        };

        for c in "nope".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Tab));
        for c in "wrong".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.login.username, "nope");
        assert_eq!(app.login.password, "wrong");
        assert_eq!(app.view, View::Login);
        assert!(app.login.error.is_some());
        assert!(commands.try_recv().is_err());
    }
}
