//! Shared chrome for popup dialogs.

use crate::ui::layout;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};

/// Everything around a dialog body: the scrim over the view, the
/// cleared surface, and a one-line header with a dismiss hint.
pub struct ModalFrame<'a> {
    title: &'a str,
    dismiss_hint: &'a str,
    width: u16,
    height_ratio: f32,
}

impl<'a> ModalFrame<'a> {
    pub fn new(title: &'a str, dismiss_hint: &'a str) -> Self {
        Self {
            title,
            dismiss_hint,
            width: layout::MODAL_WIDTH,
            height_ratio: layout::MODAL_HEIGHT_RATIO,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn height_ratio(mut self, ratio: f32) -> Self {
        self.height_ratio = ratio;
        self
    }

    /// Paint the chrome and hand back the inset body area.
    pub fn render(self, f: &mut Frame, terminal_area: Rect) -> Rect {
        f.render_widget(Scrim, terminal_area);

        let area = self.placement(terminal_area);
        f.render_widget(Clear, area);
        f.render_widget(Block::new().style(Style::new().bg(theme::BG_MODAL)), area);

        let [_, header, body, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let header = layout::modal_inset(header);
        f.render_widget(
            Paragraph::new(Line::styled(self.title, theme::modal_title())),
            header,
        );
        f.render_widget(
            Paragraph::new(
                Line::styled(self.dismiss_hint, theme::modal_hint()).alignment(Alignment::Right),
            ),
            header,
        );

        layout::modal_inset(body)
    }

    /// Centered in both directions. Height never drops below what a
    /// short message plus a choice row needs.
    fn placement(&self, terminal_area: Rect) -> Rect {
        let width = self.width.min(terminal_area.width.saturating_sub(4));
        let height = ((terminal_area.height as f32 * self.height_ratio) as u16)
            .max(9)
            .min(terminal_area.height);
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(terminal_area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);
        area
    }
}

/// Dims whatever the view already drew so the dialog reads as the only
/// live surface.
struct Scrim;

impl Widget for Scrim {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let wash = Style::new()
            .add_modifier(Modifier::DIM)
            .bg(theme::BG_MODAL_OVERLAY);
        for pos in area.positions() {
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_style(wash);
            }
        }
    }
}

/// One `(label, key)` action per row, the selected row inverted onto
/// the warning accent.
pub fn render_choices(f: &mut Frame, area: Rect, choices: &[(&str, &str)], selected: usize) {
    for (row, (label, key)) in choices.iter().enumerate() {
        if row as u16 >= area.height {
            break;
        }
        let row_area = Rect {
            y: area.y + row as u16,
            height: 1,
            ..area
        };
        let picked = row == selected;
        if picked {
            f.render_widget(
                Block::new().style(Style::new().bg(theme::ACCENT_WARNING)),
                row_area,
            );
        }
        let label_style = if picked {
            theme::modal_item_selected()
        } else {
            theme::modal_item()
        };
        let key_style = if picked {
            theme::modal_item_shortcut_selected()
        } else {
            theme::modal_item_shortcut()
        };
        f.render_widget(Paragraph::new(Line::styled(*label, label_style)), row_area);
        f.render_widget(
            Paragraph::new(Line::styled(*key, key_style).alignment(Alignment::Right)),
            row_area,
        );
    }
}
