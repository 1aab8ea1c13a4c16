/// Color helpers for finding levels in terminal output.
use crate::models::Level;
use crate::utils::formatting::pad_right;
use ansi_term::Colour;

/// WARN → yellow, BLOCK → red
pub fn color_for_level(level: Level) -> Colour {
    match level {
        Level::Warn => Colour::Yellow,
        Level::Block => Colour::Red,
    }
}

/// Level label padded to a fixed width, then colored.
pub fn colorize_level(level: Level) -> String {
    color_for_level(level)
        .paint(pad_right(level.as_str(), 5))
        .to_string()
}
