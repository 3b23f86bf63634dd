//! Palette for the dark terminal theme.

use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0x7b, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x2a, 0x2a, 0x2a);
