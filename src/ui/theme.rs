use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOREGROUND: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const TEXT_SECONDARY: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const TEXT_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const VERDICT_FAKE: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const VERDICT_REAL: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ERROR_TEXT: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const LINK: Color = Color::Rgb(0x60, 0xa5, 0xfa);
