//! Palette and semantic styles shared by every view.
//!
//! Warm dark tones, ink-on-paper contrast. Raw colors live here so a
//! restyle never touches view code.

use ratatui::style::{Color, Modifier, Style};

/// Root background, a warm near-black.
pub const BG_APP: Color = Color::Rgb(16, 14, 12);

/// Background of the row under the cursor.
pub const BG_SELECTED: Color = Color::Rgb(38, 34, 30);

/// Status bar strip at the bottom of the screen.
pub const BG_STATUSBAR: Color = Color::Rgb(22, 20, 18);

/// Modal surface, lifted a step above the root background.
pub const BG_MODAL: Color = Color::Rgb(30, 27, 24);

/// Fill painted over the content while a modal is open.
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(12, 11, 10);

/// Body text.
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 222, 214);

/// Labels, captions, shortcut hints.
pub const TEXT_MUTED: Color = Color::Rgb(138, 132, 122);

/// Placeholders and rows on their way out.
pub const TEXT_DIM: Color = Color::Rgb(96, 92, 84);

/// Focus and selection accent.
pub const ACCENT_PRIMARY: Color = Color::Rgb(94, 165, 152);

/// Confirmations.
pub const ACCENT_SUCCESS: Color = Color::Rgb(128, 166, 98);

/// Destructive prompts and caution notices.
pub const ACCENT_WARNING: Color = Color::Rgb(214, 158, 96);

/// Failures.
pub const ACCENT_ERROR: Color = Color::Rgb(224, 108, 100);

/// Borders of unfocused fields and dividers.
pub const BORDER_INACTIVE: Color = Color::Rgb(68, 64, 58);

pub fn text_primary() -> Style {
    Style::new().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::new().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::new().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    text_primary().add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::new().fg(ACCENT_PRIMARY)
}

pub fn border_inactive() -> Style {
    Style::new().fg(BORDER_INACTIVE)
}

pub fn modal_title() -> Style {
    text_bold()
}

/// Key hint in a modal header corner.
pub fn modal_hint() -> Style {
    text_muted()
}

pub fn modal_item() -> Style {
    text_primary()
}

/// Highlighted modal choice, inverted onto the warning accent.
pub fn modal_item_selected() -> Style {
    Style::new()
        .fg(BG_APP)
        .bg(ACCENT_WARNING)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_item_shortcut() -> Style {
    text_muted()
}

pub fn modal_item_shortcut_selected() -> Style {
    Style::new().fg(BG_APP).bg(ACCENT_WARNING)
}
