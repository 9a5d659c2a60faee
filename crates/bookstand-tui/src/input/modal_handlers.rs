use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::modal::ModalState;
use crate::ui::App;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    match &app.modal {
        ModalState::Error(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.cancel_modal(),
            _ => {}
        },
        ModalState::ConfirmDelete(_) => match key.code {
            KeyCode::Esc | KeyCode::Char('n') => app.cancel_modal(),
            KeyCode::Char('y') | KeyCode::Char('d') => app.confirm_modal(),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.toggle_modal_choice(),
            KeyCode::Enter => app.apply_modal_choice(),
            _ => {}
        },
        ModalState::ConfirmLogout(_) => match key.code {
            KeyCode::Esc | KeyCode::Char('n') => app.cancel_modal(),
            KeyCode::Char('y') => app.confirm_modal(),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.toggle_modal_choice(),
            KeyCode::Enter => app.apply_modal_choice(),
            _ => {}
        },
        ModalState::None => {}
    }
}
