//! Modal dialogs: delete confirmation, logout confirmation, blocking errors.

use crate::ui::components::{render_choices, ModalFrame};
use crate::ui::format::truncate_with_ellipsis;
use crate::ui::modal::{ConfirmDeleteState, ConfirmLogoutState, ErrorModalState, ModalState};
use crate::ui::{theme, App};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App, terminal_area: Rect) {
    match &app.modal {
        ModalState::None => {}
        ModalState::ConfirmDelete(state) => render_confirm_delete(f, state, terminal_area),
        ModalState::ConfirmLogout(state) => render_confirm_logout(f, state, terminal_area),
        ModalState::Error(state) => render_error(f, state, terminal_area),
    }
}

fn render_confirm_delete(f: &mut Frame, state: &ConfirmDeleteState, terminal_area: Rect) {
    let body = ModalFrame::new("Delete Book", "esc")
        .width(50)
        .render(f, terminal_area);
    let [message_area, choices_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(body);

    let title = truncate_with_ellipsis(&state.title, 32);
    let message = Paragraph::new(vec![
        Line::styled(
            format!("Delete \"{title}\"?"),
            Style::new().fg(theme::ACCENT_WARNING),
        ),
        Line::raw(""),
        Line::styled("This cannot be undone.", theme::text_muted()),
    ])
    .wrap(Wrap { trim: false });
    f.render_widget(message, message_area);

    let selected = usize::from(state.confirm_selected);
    render_choices(
        f,
        choices_area,
        &[("Cancel", "esc"), ("Delete", "d")],
        selected,
    );
}

fn render_confirm_logout(f: &mut Frame, state: &ConfirmLogoutState, terminal_area: Rect) {
    let body = ModalFrame::new("Sign Out", "esc")
        .width(44)
        .height_ratio(0.28)
        .render(f, terminal_area);
    let [message_area, choices_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(body);

    f.render_widget(
        Paragraph::new(Line::styled(
            "Sign out of the back office?",
            theme::text_primary(),
        )),
        message_area,
    );

    let selected = usize::from(state.confirm_selected);
    render_choices(
        f,
        choices_area,
        &[("Cancel", "esc"), ("Sign out", "y")],
        selected,
    );
}

fn render_error(f: &mut Frame, state: &ErrorModalState, terminal_area: Rect) {
    let body = ModalFrame::new(&state.title, "enter")
        .width(56)
        .render(f, terminal_area);
    let [message_area, choices_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(body);

    let message = Paragraph::new(Line::styled(
        state.message.clone(),
        Style::new().fg(theme::ACCENT_ERROR),
    ))
    .wrap(Wrap { trim: false });
    f.render_widget(message, message_area);

    render_choices(f, choices_area, &[("OK", "enter")], 0);
}
