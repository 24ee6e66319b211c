use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(122, 162, 247);
pub const BORDER_COLOR: Color = Color::Rgb(59, 66, 97);
pub const HEADER_FG: Color = Color::Rgb(192, 202, 245);
pub const HEADER_BG: Color = Color::Rgb(26, 27, 38);
pub const TEXT_DIM: Color = Color::Rgb(86, 95, 137);
pub const SELECTION_BG: Color = Color::Rgb(40, 52, 87);
pub const OVERLAY_BG: Color = Color::Rgb(22, 22, 30);
pub const STATUS_BG: Color = Color::Rgb(26, 27, 38);
pub const STATUS_FG: Color = Color::Rgb(169, 177, 214);
pub const STATUS_OK: Color = Color::Rgb(158, 206, 106);
pub const STATUS_WARN: Color = Color::Rgb(224, 175, 104);
pub const STATUS_FAILED: Color = Color::Rgb(247, 118, 142);
pub const TABLE_HEADER_FG: Color = Color::Rgb(125, 207, 255);
