//! Keyboard focus movement inside the day, month and year grids.
//!
//! Focus wraps at both ends of a grid. Vertical movement jumps one row, whose
//! width depends on the grid being navigated.
use crate::grid::GRID_COLUMNS;

/// Which grid has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    /// The 6×7 day grid.
    Days,
    /// The twelve months, three per row.
    Months,
    /// A year page, four per row.
    Years,
}

impl GridKind {
    /// Cells per row.
    pub fn row_size(self) -> usize {
        match self {
            GridKind::Days => GRID_COLUMNS,
            GridKind::Months => 3,
            GridKind::Years => 4,
        }
    }
}

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    /// Previous cell.
    ArrowLeft,
    /// Next cell.
    ArrowRight,
    /// Previous row.
    ArrowUp,
    /// Next row.
    ArrowDown,
    /// First cell.
    Home,
    /// Last cell.
    End,
    /// Previous month.
    PageUp,
    /// Next month.
    PageDown,
    /// Close the popover.
    Escape,
}

impl GridKey {
    /// Maps a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Option<Self> {
        Some(match name {
            "ArrowLeft" => GridKey::ArrowLeft,
            "ArrowRight" => GridKey::ArrowRight,
            "ArrowUp" => GridKey::ArrowUp,
            "ArrowDown" => GridKey::ArrowDown,
            "Home" => GridKey::Home,
            "End" => GridKey::End,
            "PageUp" => GridKey::PageUp,
            "PageDown" => GridKey::PageDown,
            "Escape" => GridKey::Escape,
            _ => return None,
        })
    }
}

/// What a key press should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Move focus to the cell at this index.
    Focus(usize),
    /// Show the previous month.
    PreviousMonth,
    /// Show the next month.
    NextMonth,
    /// Close the popover.
    Close,
    /// Nothing to do.
    Ignored,
}

/// Computes the effect of `key` in a grid of `len` enabled cells.
///
/// `current` is the focused cell, or `None` when focus is outside the grid.
/// Without a focused cell, the arrows behave as if focus sat just before the
/// first cell.
pub fn next_focus_index(
    kind: GridKind,
    key: GridKey,
    current: Option<usize>,
    len: usize,
) -> KeyOutcome {
    match key {
        GridKey::PageUp => return KeyOutcome::PreviousMonth,
        GridKey::PageDown => return KeyOutcome::NextMonth,
        GridKey::Escape => return KeyOutcome::Close,
        _ => {}
    }
    if len == 0 {
        return KeyOutcome::Ignored;
    }

    let len = len as i64;
    let current = current.map_or(-1, |idx| idx as i64);
    let row = kind.row_size() as i64;
    let next = match key {
        GridKey::ArrowRight => {
            if current < len - 1 {
                current + 1
            } else {
                0
            }
        }
        GridKey::ArrowLeft => {
            if current > 0 {
                current - 1
            } else {
                len - 1
            }
        }
        GridKey::ArrowDown => {
            let next = current + row;
            if next >= len { next % len } else { next }
        }
        GridKey::ArrowUp => {
            let next = current - row;
            if next < 0 { len + next } else { next }
        }
        GridKey::Home => 0,
        GridKey::End => len - 1,
        GridKey::PageUp | GridKey::PageDown | GridKey::Escape => return KeyOutcome::Ignored,
    };

    usize::try_from(next)
        .map(KeyOutcome::Focus)
        .unwrap_or(KeyOutcome::Ignored)
}
