//! Top-level render pass: chrome, the active view, then the modal overlay.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::components::render_statusbar;
use crate::ui::state::{FormMode, LoadState, PrefillState};
use crate::ui::{layout, theme, views, App, View};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_APP)),
        area,
    );

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::FOOTER_HEIGHT),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(area);

    render_header(f, app, chunks[0]);

    match app.view {
        View::Login => views::render_login(f, app, chunks[1]),
        View::Books => views::render_books(f, app, chunks[1]),
        View::BookForm => {
            if let Some(form) = &app.form {
                views::render_book_form(f, form, app.frame(), chunks[1]);
            }
        }
    }

    render_footer(f, app, chunks[2]);
    render_statusbar(
        f,
        chunks[3],
        app.current_notification(),
        app.session.established_at(),
    );

    // Modals paint over everything, including the chrome.
    if !app.modal.is_none() {
        views::render_modal(f, app, area);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let chrome = if app.pending_quit {
        theme::ACCENT_ERROR
    } else {
        theme::ACCENT_PRIMARY
    };
    let title = match app.view {
        View::Login => "Bookstand - Sign in".to_string(),
        View::Books => match &app.books.load {
            LoadState::Loaded(books) => format!("Bookstand - Books ({})", books.len()),
            _ => "Bookstand - Books".to_string(),
        },
        View::BookForm => match app.form.as_ref().map(|form| form.mode) {
            Some(FormMode::Edit { .. }) => "Bookstand - Edit book".to_string(),
            _ => "Bookstand - Add book".to_string(),
        },
    };
    let header = Paragraph::new(title)
        .style(Style::default().fg(chrome).add_modifier(Modifier::BOLD));
    f.render_widget(header, layout::content_inset(area));
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::content_inset(area);
    if app.pending_quit {
        let warning = Paragraph::new("⚠ Press Ctrl+C again to quit")
            .style(Style::default().fg(theme::ACCENT_ERROR));
        f.render_widget(warning, area);
        return;
    }

    let hints = match app.view {
        View::Login => "Tab next field · Enter sign in · Ctrl+C quit",
        View::Books => {
            if app.books.selected_book().is_some() {
                "↑↓ select · a add · e edit · d delete · L sign out · q quit"
            } else {
                "a add · L sign out · q quit"
            }
        }
        View::BookForm => match app.form.as_ref() {
            Some(form) if form.submitting => "Saving...",
            Some(form) if form.prefill != PrefillState::Ready => "Esc back",
            _ => "Tab next field · Enter save · Esc back",
        },
    };
    f.render_widget(Paragraph::new(hints).style(theme::text_muted()), area);
}
