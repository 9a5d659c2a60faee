//! Create/edit form for a single book.

use crate::ui::format::spinner_frame;
use crate::ui::state::{BookFormState, FormField, PrefillState};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 46;

pub fn render_book_form(f: &mut Frame, form: &BookFormState, frame: u64, area: Rect) {
    let columns = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(FORM_WIDTH.min(area.width.saturating_sub(4))),
        Constraint::Min(0),
    ])
    .split(area);
    let column = columns[1];

    match &form.prefill {
        PrefillState::Loading => {
            let message = format!("{} Loading book...", spinner_frame(frame));
            render_status_line(f, column, &message, theme::text_muted());
            return;
        }
        PrefillState::Failed(message) => {
            let chunks = Layout::vertical([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(column);
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(theme::ACCENT_ERROR))
                .alignment(Alignment::Center);
            f.render_widget(error, chunks[1]);
            let hint = Paragraph::new("Esc to go back")
                .style(theme::text_muted())
                .alignment(Alignment::Center);
            f.render_widget(hint, chunks[2]);
            return;
        }
        PrefillState::Ready => {}
    }

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(column);

    render_field(f, chunks[1], "Title", &form.title, form.focus == FormField::Title);
    render_field(f, chunks[2], "Author", &form.author, form.focus == FormField::Author);
    render_field(
        f,
        chunks[3],
        "Category (optional)",
        &form.category,
        form.focus == FormField::Category,
    );
    render_field(
        f,
        chunks[4],
        "Price (THB, optional)",
        &form.price,
        form.focus == FormField::Price,
    );

    if form.submitting {
        let saving = format!("{} Saving...", spinner_frame(frame));
        let line = Paragraph::new(saving)
            .style(theme::text_muted())
            .alignment(Alignment::Center);
        f.render_widget(line, chunks[5]);
    } else if let Some(error) = &form.error {
        let line = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme::ACCENT_ERROR))
            .alignment(Alignment::Center);
        f.render_widget(line, chunks[5]);
    }
}

fn render_status_line(f: &mut Frame, area: Rect, message: &str, style: Style) {
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

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(format!(" {label} "), theme::text_muted()));

    let mut spans = vec![Span::styled(value.to_string(), theme::text_primary())];
    if focused {
        spans.push(Span::styled("▏", theme::text_dim()));
    }
    let field = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(field, area);
}
