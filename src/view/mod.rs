//! Terminal rendering (ratatui widgets over render descriptions).

mod screen;
pub mod wrap;

pub use screen::{buffer_to_string, render_to_string, text_lines, ScreenWidget};
pub use wrap::wrap_words;
