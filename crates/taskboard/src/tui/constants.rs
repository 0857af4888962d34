//! Shared constants for the TUI to keep layout and labels in sync.

/// Highlight symbol shown beside the selected row.
pub const TASK_TABLE_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Percentage of the screen width given to the task table.
pub const TASK_TABLE_WIDTH_PERCENT: u16 = 60;
/// Label of the per-row delete control.
pub const REMOVE_AFFORDANCE: &str = "[del]";
/// Label of the per-row edit control.
pub const EDIT_AFFORDANCE: &str = "[edit]";
/// Label of the per-row cancel control.
pub const CANCEL_AFFORDANCE: &str = "[cancel]";
/// Marker drawn after the focused input's content.
pub const INPUT_CURSOR: &str = "▏";
/// Width percentage for the confirmation popup before clamping.
pub const CONFIRM_POPUP_WIDTH_PERCENT: u16 = 50;
/// Minimum width for the confirmation popup.
pub const CONFIRM_POPUP_MIN_WIDTH: u16 = 30;
/// Height of the confirmation popup including borders.
pub const CONFIRM_POPUP_HEIGHT: u16 = 5;
/// Longest task title quoted in the confirmation popup.
pub const CONFIRM_TITLE_MAX_GRAPHEMES: usize = 40;
