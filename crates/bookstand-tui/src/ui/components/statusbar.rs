// Bottom strip of the screen: the active toast on the left, session
// state on the right.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::{format_clock, truncate_with_ellipsis};
use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme;

/// Who is signed in and since when. Trailing space keeps the label off
/// the screen edge.
fn session_label(established_at: Option<u64>) -> String {
    match established_at {
        Some(secs) => format!("admin · since {} ", format_clock(secs)),
        None => "signed out ".to_string(),
    }
}

fn level_color(level: NotificationLevel) -> Color {
    match level {
        NotificationLevel::Info => theme::ACCENT_PRIMARY,
        NotificationLevel::Success => theme::ACCENT_SUCCESS,
        NotificationLevel::Warning => theme::ACCENT_WARNING,
        NotificationLevel::Error => theme::ACCENT_ERROR,
    }
}

pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    notification: Option<&Notification>,
    established_at: Option<u64>,
) {
    f.render_widget(
        Block::new().style(Style::new().bg(theme::BG_STATUSBAR)),
        area,
    );

    let label = session_label(established_at);

    if let Some(toast) = notification {
        let color = level_color(toast.level);
        let icon = toast.level.icon();
        let room = (area.width as usize)
            .saturating_sub(icon.width() + 2)
            .saturating_sub(label.width() + 1);
        let message = truncate_with_ellipsis(&toast.message, room);
        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::new().fg(color)),
            Span::styled(message, Style::new().fg(color)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    let label_style = if established_at.is_some() {
        Style::new().fg(theme::ACCENT_SUCCESS)
    } else {
        theme::text_muted()
    };
    f.render_widget(
        Paragraph::new(Line::styled(label, label_style).alignment(Alignment::Right)),
        area,
    );
}
