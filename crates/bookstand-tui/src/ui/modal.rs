//! Modal dialog state.
//!
//! One modal at a time; each variant owns the state of its interaction.
//! Confirmation modals default to the cancel choice.

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    None,
    ConfirmDelete(ConfirmDeleteState),
    ConfirmLogout(ConfirmLogoutState),
    Error(ErrorModalState),
}

impl ModalState {
    pub fn is_none(&self) -> bool {
        matches!(self, ModalState::None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmDeleteState {
    pub book_id: i64,
    pub title: String,
    pub confirm_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfirmLogoutState {
    pub confirm_selected: bool,
}

/// Blocking error report. Dismissing it is the only way on.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorModalState {
    pub title: String,
    pub message: String,
}
