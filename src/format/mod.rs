pub mod render;
pub mod superscript;

pub use render::*;
pub use superscript::{encode_marker, to_display, to_plain, RAISED_COMMA, SENTINEL};
