//! Fixed chrome dimensions and the insets views share.

use ratatui::layout::{Margin, Rect};

/// Columns shaved off each side of view content.
pub const CONTENT_INSET: u16 = 2;

/// Columns shaved off each side inside a modal.
pub const MODAL_INSET: u16 = 2;

/// Title line at the top of the screen.
pub const HEADER_HEIGHT: u16 = 1;

/// Key-hint line above the status bar.
pub const FOOTER_HEIGHT: u16 = 1;

/// Bottom strip with session and notification info.
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Width of a modal unless the terminal is narrower.
pub const MODAL_WIDTH: u16 = 54;

/// Modal height as a share of the terminal height.
pub const MODAL_HEIGHT_RATIO: f32 = 0.3;

pub fn inset_horizontal(area: Rect, by: u16) -> Rect {
    area.inner(Margin::new(by, 0))
}

pub fn content_inset(area: Rect) -> Rect {
    inset_horizontal(area, CONTENT_INSET)
}

pub fn modal_inset(area: Rect) -> Rect {
    inset_horizontal(area, MODAL_INSET)
}
