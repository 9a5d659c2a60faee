use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::state::PrefillState;
use crate::ui::App;

pub(super) fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.login.focus_next(),
        KeyCode::Backspace => app.login.backspace(),
        KeyCode::Char(c) => app.login.insert_char(c),
        _ => {}
    }
}

pub(super) fn handle_books_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.books.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.books.select_next(),
        KeyCode::Home | KeyCode::Char('g') => app.books.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.books.select_last(),
        KeyCode::Char('a') => app.enter_create_form(),
        KeyCode::Enter | KeyCode::Char('e') => app.enter_edit_form(),
        KeyCode::Delete | KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('L') => app.request_logout(),
        _ => {}
    }
}

pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    if form.submitting {
        return;
    }
    if form.prefill != PrefillState::Ready {
        // Esc is the only way out of a pending or failed prefill.
        if key.code == KeyCode::Esc {
            app.leave_form_to_books();
        }
        return;
    }
    match key.code {
        KeyCode::Esc => app.leave_form_to_books(),
        KeyCode::Enter => app.submit_form(),
        _ => {
            if let Some(form) = app.form.as_mut() {
                match key.code {
                    KeyCode::Tab | KeyCode::Down => form.focus_next(),
                    KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Char(c) => form.insert_char(c),
                    _ => {}
                }
            }
        }
    }
}
