//! Monokai theme
//! https://monokai.pro/

use ratatui::style::Color;
use crate::theme::Theme;

/// Monokai default theme
pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x27, 0x28, 0x22), // background
        bg1: Color::Rgb(0x3e, 0x3d, 0x32), // selection
        bg2: Color::Rgb(0x49, 0x48, 0x3e), // line
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2), // foreground
        fg1: Color::Rgb(0xd0, 0xd0, 0xc0),
        grey0: Color::Rgb(0x75, 0x71, 0x5e), // comment
        primary: Color::Rgb(0x66, 0xd9, 0xef),      // cyan
        primary_dark: Color::Rgb(0x90, 0x8c, 0x77),
        secondary: Color::Rgb(0xae, 0x81, 0xff),    // purple
        link: Color::Rgb(0xe6, 0xdb, 0x74),         // yellow
    }
}
