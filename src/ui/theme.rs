//! Color theme constants.

use ratatui::style::Color;

/// Borders and separators
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Title and sorted column
pub const COLOR_ACCENT: Color = Color::White;

/// Column headers
pub const COLOR_HEADER: Color = Color::Gray;

/// Dim text for secondary info (paginator, help line)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Spinner and checked boxes
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Error banner
pub const COLOR_ERROR: Color = Color::LightRed;

/// Cursor row background
pub const COLOR_CURSOR_BG: Color = Color::Rgb(40, 40, 55);

/// Spinner frames shown while a page is loading
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
