//! Sign-in view for the back-office gate.

use crate::ui::state::LoginField;
use crate::ui::{theme, App};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let form_width = 46.min(area.width.saturating_sub(4));
    let horizontal = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(form_width),
        Constraint::Min(0),
    ])
    .split(area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // top spacing
        Constraint::Length(2), // heading
        Constraint::Length(3), // username
        Constraint::Length(3), // password
        Constraint::Length(2), // error
        Constraint::Min(0),
    ])
    .split(horizontal[1]);

    let heading = Paragraph::new("Admin Login")
        .style(theme::text_bold())
        .alignment(Alignment::Center);
    f.render_widget(heading, chunks[1]);

    render_field(
        f,
        chunks[2],
        "Username",
        &app.login.username,
        app.login.focus == LoginField::Username,
    );

    let masked = "*".repeat(app.login.password.chars().count());
    render_field(
        f,
        chunks[3],
        "Password",
        &masked,
        app.login.focus == LoginField::Password,
    );

    if let Some(ref error) = app.login.error {
        let error_widget = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme::ACCENT_ERROR))
            .alignment(Alignment::Center);
        f.render_widget(error_widget, chunks[4]);
    }
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };
    let text = if focused {
        format!("{value}▏")
    } else {
        value.to_string()
    };
    let field = Paragraph::new(text).style(theme::text_primary()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label),
    );
    f.render_widget(field, area);
}
