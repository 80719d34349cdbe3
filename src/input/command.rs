//! Commands that keyboard input can trigger.
//!
//! Keys are mapped to a [`Command`] first and the [`crate::app::App`] acts
//! on the command, so bindings stay independent of their effects.

use crate::models::SortField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    Quit,
    /// Hide the error banner
    DismissError,
    /// Re-fetch the current page
    Reload,

    // =========================================================================
    // Cursor
    // =========================================================================
    CursorUp,
    CursorDown,

    // =========================================================================
    // Rows
    // =========================================================================
    /// Checkbox of the row under the cursor
    ToggleRow,
    /// Header checkbox
    ToggleAll,
    /// Expand or collapse the row under the cursor
    ToggleExpand,

    // =========================================================================
    // Sort and pagination
    // =========================================================================
    /// Header click on a column
    SortBy(SortField),
    NextPage,
    PreviousPage,
    LargerPageSize,
    SmallerPageSize,
}

impl Command {
    /// Short description for the help line.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::DismissError => "dismiss error",
            Command::Reload => "reload",
            Command::CursorUp => "up",
            Command::CursorDown => "down",
            Command::ToggleRow => "select",
            Command::ToggleAll => "select all",
            Command::ToggleExpand => "expand",
            Command::SortBy(_) => "sort",
            Command::NextPage => "next page",
            Command::PreviousPage => "previous page",
            Command::LargerPageSize => "more rows",
            Command::SmallerPageSize => "fewer rows",
        }
    }
}
