//! Calendar engine behind the Atomix date pickers.
//!
//! The crate knows nothing about rendering. [`state::DatePickerState`] holds
//! navigation and selection, [`controller::DatePickerController`] layers input
//! text, popover visibility and change handlers on top, and the DOM adapter in
//! `atomix-dom` drives the same state against a document.
//!
//! # Usage
//!
//! ```
//! use atomix_calendar::{
//!     controller::{DatePickerArgs, DatePickerController},
//!     date::CalendarDate,
//! };
//!
//! let start = CalendarDate::new(2024, 3, 1).expect("valid date");
//! let mut picker = DatePickerController::new(
//!     DatePickerArgs::default()
//!         .value(start)
//!         .on_change(|date| println!("picked {date:?}")),
//! );
//!
//! picker.handle_input_focus();
//! picker.handle_next_month();
//! picker.handle_date_select(15);
//! assert_eq!(picker.input_value(), "04/15/2024");
//! assert!(!picker.is_open());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod controller;
pub mod date;
pub mod format;
pub mod grid;
pub mod keyboard;
pub mod state;

pub use callback::ChangeHandler;
pub use controller::{DatePickerArgs, DatePickerController};
pub use date::{CalendarDate, Weekday, YearMonth};
pub use state::{
    DateBounds, DatePickerState, DateRange, RangePhase, SelectionMode, SelectionOutcome, ViewMode,
};
