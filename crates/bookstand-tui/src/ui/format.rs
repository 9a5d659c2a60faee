//! Small text formatting helpers for the views.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for the given frame counter.
pub fn spinner_frame(frame: u64) -> &'static str {
    SPINNER_FRAMES[frame as usize % SPINNER_FRAMES.len()]
}

/// HH:MM local time for a unix timestamp.
pub fn format_clock(secs: u64) -> String {
    chrono::DateTime::from_timestamp(secs as i64, 0)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Truncate a string to fit within `max_width` display columns, adding an
/// ellipsis when cut. Grapheme-aware so combining marks never split (book
/// titles here are frequently Thai).
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    // Too narrow for an ellipsis: keep whole graphemes that fit.
    if max_width <= 3 {
        return take_width(s, max_width);
    }
    format!("{}...", take_width(s, max_width - 3))
}

fn take_width(s: &str, budget: usize) -> String {
    let mut used = 0;
    s.graphemes(true)
        .take_while(|g| {
            used += g.width();
            used <= budget
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(10));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_with_ellipsis("Dune", 10), "Dune");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_with_ellipsis("The Pragmatic Programmer", 10), "The Pra...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "ab");
        assert_eq!(truncate_with_ellipsis("abcdef", 0), "");
    }

    #[test]
    fn test_truncate_is_width_aware_for_wide_glyphs() {
        // Each CJK glyph is two columns wide.
        assert_eq!(truncate_with_ellipsis("漢漢漢", 5), "漢...");
        assert_eq!(truncate_with_ellipsis("漢漢漢", 2), "漢");
    }

    #[test]
    fn test_format_clock_shape() {
        let clock = format_clock(1_700_000_000);
        assert_eq!(clock.len(), 5);
        assert!(clock.contains(':'));
    }
}
