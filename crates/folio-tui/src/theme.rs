use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,

    // Accents
    pub primary: Color,
    pub primary_dark: Color,
    pub secondary: Color,
    pub link: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Midnight: deep navy with cyan and purple accents
        Self {
            bg0: Color::Rgb(0x0a, 0x0e, 0x27),
            bg1: Color::Rgb(0x1a, 0x1f, 0x3a),
            bg2: Color::Rgb(0x11, 0x18, 0x27),
            fg0: Color::Rgb(0xf3, 0xf4, 0xf6),
            fg1: Color::Rgb(0xd1, 0xd5, 0xdb),
            grey0: Color::Rgb(0x6b, 0x72, 0x80),
            primary: Color::Rgb(0x00, 0xd9, 0xff),
            primary_dark: Color::Rgb(0x00, 0x99, 0xcc),
            secondary: Color::Rgb(0xa8, 0x55, 0xf7),
            link: Color::Rgb(0x33, 0xe0, 0xff),
        }
    }
}
