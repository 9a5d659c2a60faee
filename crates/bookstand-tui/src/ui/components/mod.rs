pub mod modal_frame;
pub mod statusbar;

pub use modal_frame::{render_choices, ModalFrame};
pub use statusbar::render_statusbar;
