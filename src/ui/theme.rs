use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PRICE_TEXT: Color = Color::Rgb(0x21, 0x96, 0xf3);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ROW_STRIPE: Color = Color::Rgb(0x1c, 0x1c, 0x1c);
