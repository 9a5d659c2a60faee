//! Book list view - the main management screen.

use crate::ui::format::spinner_frame;
use crate::ui::state::LoadState;
use crate::ui::{layout, theme, App};
use bookstand_core::Book;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

pub fn render_books(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::content_inset(area);

    match &app.books.load {
        LoadState::Idle => {}
        LoadState::Loading => {
            let message = format!("{} Loading books...", spinner_frame(app.frame()));
            render_centered_line(f, area, &message, theme::text_muted());
        }
        LoadState::Failed(message) => {
            render_centered_line(
                f,
                area,
                message,
                Style::default().fg(theme::ACCENT_ERROR),
            );
        }
        LoadState::Loaded(books) if books.is_empty() => {
            render_centered_line(
                f,
                area,
                "No books found. Press 'a' to add one.",
                theme::text_muted(),
            );
        }
        LoadState::Loaded(books) => render_table(f, app, area, books),
    }
}

fn render_centered_line(f: &mut Frame, area: Rect, message: &str, style: Style) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);
    let line = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(line, chunks[1]);
}

fn render_table(f: &mut Frame, app: &App, area: Rect, books: &[Book]) {
    let visible_height = area.height.saturating_sub(1) as usize;
    let selected = app.books.selected.min(books.len().saturating_sub(1));
    let scroll_offset = if selected >= visible_height && visible_height > 0 {
        selected - visible_height + 1
    } else {
        0
    };

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("#"),
        Cell::from("Title"),
        Cell::from("Author"),
        Cell::from("Category"),
        Cell::from(Line::from("Price (THB)").alignment(Alignment::Right)),
    ])
    .style(theme::text_muted().add_modifier(Modifier::UNDERLINED));

    let rows: Vec<Row> = books
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(idx, book)| {
            let is_selected = idx == selected;
            let is_deleting = app.pending_deletes.contains(&book.id);

            let gutter = if is_selected {
                Span::styled("▌", Style::default().fg(theme::ACCENT_PRIMARY))
            } else {
                Span::styled("│", Style::default().fg(theme::BORDER_INACTIVE))
            };

            let title_style = if is_selected {
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let title = if is_deleting {
                format!("{} · deleting...", book.title)
            } else {
                book.title.clone()
            };

            let row_style = if is_deleting {
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::ITALIC)
            } else if is_selected {
                Style::default().fg(theme::TEXT_PRIMARY).bg(theme::BG_SELECTED)
            } else {
                Style::default().fg(theme::TEXT_PRIMARY)
            };

            Row::new(vec![
                Cell::from(Line::from(gutter)),
                Cell::from(format!("{}", idx + 1)),
                Cell::from(Span::styled(title, title_style)),
                Cell::from(book.author.clone()),
                Cell::from(book.category_label().to_string()),
                Cell::from(Line::from(book.price_label()).alignment(Alignment::Right)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Min(20),
        Constraint::Percentage(26),
        Constraint::Length(14),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, area);
}
