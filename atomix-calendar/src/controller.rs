//! Popover-level date picker behavior on top of [`DatePickerState`].
//!
//! [`DatePickerController`] is what a component binds to: it keeps the input
//! text in sync with the selection, tracks whether the popover is open,
//! notifies change handlers and decides when the outside-click listener is
//! needed. It performs no rendering.
use derive_setters::Setters;
use tracing::debug;

use crate::{
    callback::ChangeHandler,
    date::{CalendarDate, Weekday},
    format::{self, DEFAULT_FORMAT},
    keyboard::{self, GridKey, GridKind, KeyOutcome},
    state::{
        DateBounds, DatePickerState, DateRange, RangePhase, SelectionMode, SelectionOutcome,
        ViewMode,
    },
};

/// Configuration options for [`DatePickerController`].
#[derive(Clone, Debug, Setters)]
pub struct DatePickerArgs {
    /// Selected date in single mode.
    #[setters(strip_option)]
    pub value: Option<CalendarDate>,
    /// Single or range selection.
    pub selection_mode: SelectionMode,
    /// Range start in range mode.
    #[setters(strip_option)]
    pub start_date: Option<CalendarDate>,
    /// Range end in range mode.
    #[setters(strip_option)]
    pub end_date: Option<CalendarDate>,
    /// Display and parse format.
    #[setters(into)]
    pub format: String,
    /// Earliest selectable date.
    #[setters(strip_option)]
    pub min_date: Option<CalendarDate>,
    /// Latest selectable date.
    #[setters(strip_option)]
    pub max_date: Option<CalendarDate>,
    /// Inline pickers are always open and never close on selection.
    pub inline: bool,
    /// First column of the day grid.
    pub first_day_of_week: Weekday,
    /// Called with the new single value.
    #[setters(skip)]
    pub on_change: Option<ChangeHandler<Option<CalendarDate>>>,
    /// Called with the new range.
    #[setters(skip)]
    pub on_range_change: Option<ChangeHandler<DateRange>>,
}

impl DatePickerArgs {
    /// Sets the single-value change handler.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<CalendarDate>) + Send + Sync + 'static,
    {
        self.on_change = Some(ChangeHandler::new(f));
        self
    }

    /// Sets the range change handler.
    pub fn on_range_change<F>(mut self, f: F) -> Self
    where
        F: Fn(DateRange) + Send + Sync + 'static,
    {
        self.on_range_change = Some(ChangeHandler::new(f));
        self
    }
}

impl Default for DatePickerArgs {
    fn default() -> Self {
        Self {
            value: None,
            selection_mode: SelectionMode::Single,
            start_date: None,
            end_date: None,
            format: DEFAULT_FORMAT.to_string(),
            min_date: None,
            max_date: None,
            inline: false,
            first_day_of_week: Weekday::Sun,
            on_change: None,
            on_range_change: None,
        }
    }
}

/// Date picker behavior bound to one component instance.
pub struct DatePickerController {
    state: DatePickerState,
    is_open: bool,
    input_value: String,
    range_input_value: String,
    format: String,
    inline: bool,
    outside_listener: bool,
    on_change: Option<ChangeHandler<Option<CalendarDate>>>,
    on_range_change: Option<ChangeHandler<DateRange>>,
}

impl DatePickerController {
    /// Creates a controller. Inline pickers start open.
    pub fn new(args: impl Into<DatePickerArgs>) -> Self {
        let args: DatePickerArgs = args.into();
        let state = DatePickerState::new(
            args.selection_mode,
            args.value,
            DateRange {
                start: args.start_date,
                end: args.end_date,
            },
            DateBounds::new(args.min_date, args.max_date),
        )
        .with_first_day_of_week(args.first_day_of_week);

        let mut controller = Self {
            input_value: args
                .value
                .map(|date| format::format_date(date, &args.format))
                .unwrap_or_default(),
            range_input_value: format::format_range_text(
                args.start_date,
                args.end_date,
                &args.format,
            ),
            state,
            is_open: args.inline,
            format: args.format,
            inline: args.inline,
            outside_listener: false,
            on_change: args.on_change,
            on_range_change: args.on_range_change,
        };
        controller.sync_outside_listener();
        controller
    }

    /// The underlying state machine.
    pub fn state(&self) -> &DatePickerState {
        &self.state
    }

    /// Mutable access for adapters that drive the state directly.
    pub fn state_mut(&mut self) -> &mut DatePickerState {
        &mut self.state
    }

    /// Whether the popover is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the picker is rendered inline.
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// Input text in single mode.
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Input text in range mode.
    pub fn range_input_value(&self) -> &str {
        &self.range_input_value
    }

    /// Input text for the current selection mode.
    pub fn display_text(&self) -> &str {
        match self.state.selection_mode() {
            SelectionMode::Single => &self.input_value,
            SelectionMode::Range => &self.range_input_value,
        }
    }

    /// The configured display format.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Cursor month (1-12).
    pub fn current_month(&self) -> u8 {
        self.state.view_month().month()
    }

    /// Cursor year.
    pub fn current_year(&self) -> i32 {
        self.state.view_month().year()
    }

    /// Displayed granularity.
    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode()
    }

    /// Which range endpoint the next click sets.
    pub fn range_selection_state(&self) -> RangePhase {
        self.state.range_phase()
    }

    /// Whether a document-level outside-click listener should be attached.
    pub fn wants_outside_listener(&self) -> bool {
        self.outside_listener
    }

    /// Opens or closes the popover. Inline pickers ignore close requests.
    pub fn set_open(&mut self, open: bool) {
        if !open && self.inline {
            return;
        }
        if self.is_open != open {
            debug!(open, "date picker visibility changed");
        }
        self.is_open = open;
        self.sync_outside_listener();
    }

    /// Changes the format and rewrites the input text with it.
    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
        self.refresh_text();
    }

    /// Applies an externally controlled single value.
    pub fn sync_value(&mut self, value: Option<CalendarDate>) {
        self.state.set_value(value);
        self.refresh_text();
    }

    /// Applies externally controlled range endpoints.
    pub fn sync_range(&mut self, start: Option<CalendarDate>, end: Option<CalendarDate>) {
        self.state.set_range(start, end);
        self.refresh_text();
    }

    /// Selects `day` of the cursor month.
    ///
    /// Out-of-range days are ignored without notifying anyone.
    pub fn handle_date_select(&mut self, day: u8) -> SelectionOutcome {
        let outcome = self.state.select_day(day);
        self.apply_outcome(outcome);
        outcome
    }

    /// Moves the cursor one month back.
    pub fn handle_prev_month(&mut self) {
        self.state.prev_month();
    }

    /// Moves the cursor one month forward.
    pub fn handle_next_month(&mut self) {
        self.state.next_month();
    }

    /// Moves the cursor one year back.
    pub fn handle_prev_year(&mut self) {
        self.state.prev_year();
    }

    /// Moves the cursor one year forward.
    pub fn handle_next_year(&mut self) {
        self.state.next_year();
    }

    /// Shows the month picker.
    pub fn switch_to_month_view(&mut self) {
        self.state.switch_to_month_view();
    }

    /// Shows the year picker.
    pub fn switch_to_year_view(&mut self) {
        self.state.switch_to_year_view();
    }

    /// Picks a month (1-12) and returns to the day grid.
    pub fn select_month(&mut self, month: u8) {
        self.state.select_month(month);
    }

    /// Picks a year and shows its months.
    pub fn select_year(&mut self, year: i32) {
        self.state.select_year(year);
    }

    /// Jumps to today; in single mode also selects it.
    pub fn handle_today_click(&mut self) {
        if let Some(outcome) = self.state.go_to_today() {
            self.apply_outcome(outcome);
        }
    }

    /// Clears the selection and notifies the matching handler.
    pub fn handle_clear(&mut self) {
        self.state.clear();
        match self.state.selection_mode() {
            SelectionMode::Single => {
                self.input_value.clear();
                if let Some(handler) = &self.on_change {
                    handler.call(None);
                }
            }
            SelectionMode::Range => {
                self.range_input_value.clear();
                if let Some(handler) = &self.on_range_change {
                    handler.call(DateRange::EMPTY);
                }
            }
        }
    }

    /// Handles typed input text.
    ///
    /// The text is always kept. Dates are read with the display format, so
    /// `dd/MM/yyyy` input is never taken month first; formats without a
    /// structured parser fall back to [`format::parse_native`]. A parseable
    /// single date becomes the value; a parseable range becomes the range,
    /// ordered chronologically even when typed backwards. Anything else
    /// leaves the selection untouched.
    pub fn handle_input_change(&mut self, text: &str) {
        match self.state.selection_mode() {
            SelectionMode::Single => {
                self.input_value = text.to_string();
                if let Some(date) = format::parse_date(text, &self.format) {
                    self.state.set_value(Some(date));
                    self.state.show_date(date);
                    if let Some(handler) = &self.on_change {
                        handler.call(Some(date));
                    }
                }
            }
            SelectionMode::Range => {
                self.range_input_value = text.to_string();
                let Some((start_text, end_text)) = format::split_range_text(text) else {
                    return;
                };
                let start = format::parse_date(start_text, &self.format);
                if let Some(start) = start {
                    self.state.show_date(start);
                }
                let end = format::parse_date(end_text, &self.format);
                if let (Some(start), Some(end)) = (start, end) {
                    let range = DateRange::ordered(start, end);
                    self.state.set_range(range.start, range.end);
                    if let Some(handler) = &self.on_range_change {
                        handler.call(range);
                    }
                }
            }
        }
    }

    /// Opens the popover when the input gains focus.
    pub fn handle_input_focus(&mut self) {
        if !self.inline {
            self.set_open(true);
        }
    }

    /// Handles a pointer press somewhere in the document.
    ///
    /// Closes the popover unless the press landed inside the picker or its
    /// input.
    pub fn handle_click_outside(&mut self, inside_picker: bool, inside_input: bool) {
        if self.outside_listener && !inside_picker && !inside_input {
            self.set_open(false);
        }
    }

    /// Handles a key press inside one of the grids.
    ///
    /// Month paging and closing are applied here; focus moves are returned
    /// for the renderer to perform.
    pub fn handle_key(
        &mut self,
        kind: GridKind,
        key: GridKey,
        current: Option<usize>,
        len: usize,
    ) -> KeyOutcome {
        let outcome = keyboard::next_focus_index(kind, key, current, len);
        match outcome {
            KeyOutcome::PreviousMonth => self.handle_prev_month(),
            KeyOutcome::NextMonth => self.handle_next_month(),
            KeyOutcome::Close if self.inline => return KeyOutcome::Ignored,
            KeyOutcome::Close => self.set_open(false),
            KeyOutcome::Focus(_) | KeyOutcome::Ignored => {}
        }
        outcome
    }

    /// ISO-8601 week number of `date`.
    pub fn week_number(&self, date: CalendarDate) -> u32 {
        date.week_number()
    }

    fn apply_outcome(&mut self, outcome: SelectionOutcome) {
        match outcome {
            SelectionOutcome::Rejected => {}
            SelectionOutcome::Selected(date) => {
                if let Some(handler) = &self.on_change {
                    handler.call(Some(date));
                }
                self.input_value = format::format_date(date, &self.format);
                self.set_open(false);
            }
            SelectionOutcome::RangeStarted(start) => {
                if let Some(handler) = &self.on_range_change {
                    handler.call(DateRange {
                        start: Some(start),
                        end: None,
                    });
                }
                self.range_input_value =
                    format::format_range_text(Some(start), None, &self.format);
            }
            SelectionOutcome::RangeCompleted { start, end } => {
                if let Some(handler) = &self.on_range_change {
                    handler.call(DateRange {
                        start: Some(start),
                        end: Some(end),
                    });
                }
                self.range_input_value =
                    format::format_range_text(Some(start), Some(end), &self.format);
                self.set_open(false);
            }
        }
    }

    fn refresh_text(&mut self) {
        self.input_value = self
            .state
            .value()
            .map(|date| format::format_date(date, &self.format))
            .unwrap_or_default();
        let range = self.state.selected_range();
        self.range_input_value = format::format_range_text(range.start, range.end, &self.format);
    }

    fn sync_outside_listener(&mut self) {
        self.outside_listener = self.is_open && !self.inline;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn initial_text_follows_props() {
        let controller = DatePickerController::new(
            DatePickerArgs::default().value(date(2024, 3, 15)),
        );
        assert_eq!(controller.input_value(), "03/15/2024");
        assert!(!controller.is_open());

        let range = DatePickerController::new(
            DatePickerArgs::default()
                .selection_mode(SelectionMode::Range)
                .start_date(date(2024, 3, 1)),
        );
        assert_eq!(range.range_input_value(), "03/01/2024 - Select end date");
        assert_eq!(range.range_selection_state(), RangePhase::End);
    }

    #[test]
    fn single_select_notifies_and_closes() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut controller = DatePickerController::new(
            DatePickerArgs::default()
                .value(date(2024, 3, 1))
                .on_change(move |value| sink.lock().expect("lock").push(value)),
        );
        controller.handle_input_focus();
        assert!(controller.is_open());
        assert!(controller.wants_outside_listener());

        controller.handle_date_select(15);
        assert_eq!(*seen.lock().expect("lock"), vec![Some(date(2024, 3, 15))]);
        assert_eq!(controller.input_value(), "03/15/2024");
        assert!(!controller.is_open());
        assert!(!controller.wants_outside_listener());
    }

    #[test]
    fn out_of_bounds_select_is_silent() {
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let mut controller = DatePickerController::new(
            DatePickerArgs::default()
                .value(date(2024, 3, 1))
                .max_date(date(2024, 3, 10))
                .on_change(move |_| *counter.lock().expect("lock") += 1),
        );
        controller.set_open(true);
        assert_eq!(controller.handle_date_select(20), SelectionOutcome::Rejected);
        assert_eq!(*calls.lock().expect("lock"), 0);
        assert!(controller.is_open());
        assert_eq!(controller.input_value(), "03/01/2024");
    }

    #[test]
    fn inline_picker_stays_open() {
        let mut controller = DatePickerController::new(
            DatePickerArgs::default()
                .value(date(2024, 3, 1))
                .inline(true),
        );
        assert!(controller.is_open());
        assert!(!controller.wants_outside_listener());
        controller.handle_date_select(2);
        assert!(controller.is_open());
        controller.set_open(false);
        assert!(controller.is_open());
    }

    #[test]
    fn range_flow_reports_each_phase() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut controller = DatePickerController::new(
            DatePickerArgs::default()
                .selection_mode(SelectionMode::Range)
                .start_date(date(2024, 3, 1))
                .end_date(date(2024, 3, 2))
                .on_range_change(move |range| sink.lock().expect("lock").push(range)),
        );
        controller.set_open(true);
        controller.handle_date_select(20);
        assert!(controller.is_open());
        assert_eq!(controller.range_input_value(), "03/20/2024 - Select end date");

        controller.handle_date_select(4);
        assert!(!controller.is_open());
        assert_eq!(controller.range_input_value(), "03/04/2024 - 03/20/2024");
        assert_eq!(controller.range_selection_state(), RangePhase::Start);

        let seen = seen.lock().expect("lock");
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].end, None);
        assert_eq!(seen[1], DateRange::ordered(date(2024, 3, 4), date(2024, 3, 20)));
    }

    #[test]
    fn typed_input_updates_selection() {
        let mut controller = DatePickerController::new(DatePickerArgs::default());
        controller.handle_input_change("07/04/2025");
        assert_eq!(controller.state().value(), Some(date(2025, 7, 4)));
        assert_eq!(controller.current_month(), 7);
        assert_eq!(controller.current_year(), 2025);

        controller.handle_input_change("07/04/");
        assert_eq!(controller.input_value(), "07/04/");
        assert_eq!(controller.state().value(), Some(date(2025, 7, 4)));
    }

    #[test]
    fn typed_input_reads_the_display_format() {
        let mut controller =
            DatePickerController::new(DatePickerArgs::default().format("dd/MM/yyyy"));
        controller.handle_input_change("04/07/2025");
        assert_eq!(controller.state().value(), Some(date(2025, 7, 4)));

        let mut free_form =
            DatePickerController::new(DatePickerArgs::default().format("MMMM d, yyyy"));
        free_form.handle_input_change("July 4, 2025");
        assert_eq!(free_form.state().value(), Some(date(2025, 7, 4)));
    }

    #[test]
    fn typed_range_is_ordered() {
        let mut controller = DatePickerController::new(
            DatePickerArgs::default().selection_mode(SelectionMode::Range),
        );
        controller.handle_input_change("03/20/2024 - 03/04/2024");
        let range = controller.state().selected_range();
        assert_eq!(range.start, Some(date(2024, 3, 4)));
        assert_eq!(range.end, Some(date(2024, 3, 20)));
        assert_eq!(controller.range_input_value(), "03/20/2024 - 03/04/2024");
    }

    #[test]
    fn clear_resets_text_and_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut controller = DatePickerController::new(
            DatePickerArgs::default()
                .value(date(2024, 3, 1))
                .on_change(move |value| sink.lock().expect("lock").push(value)),
        );
        controller.handle_clear();
        assert_eq!(controller.input_value(), "");
        assert_eq!(*seen.lock().expect("lock"), vec![None]);
    }

    #[test]
    fn click_outside_only_closes_when_listening() {
        let mut controller = DatePickerController::new(DatePickerArgs::default());
        controller.handle_click_outside(false, false);
        assert!(!controller.is_open());

        controller.set_open(true);
        controller.handle_click_outside(true, false);
        assert!(controller.is_open());
        controller.handle_click_outside(false, true);
        assert!(controller.is_open());
        controller.handle_click_outside(false, false);
        assert!(!controller.is_open());
    }

    #[test]
    fn keys_page_months_and_close() {
        let mut controller = DatePickerController::new(
            DatePickerArgs::default().value(date(2024, 1, 10)),
        );
        controller.set_open(true);
        controller.handle_key(GridKind::Days, GridKey::PageUp, None, 42);
        assert_eq!((controller.current_year(), controller.current_month()), (2023, 12));
        assert_eq!(
            controller.handle_key(GridKind::Days, GridKey::ArrowDown, Some(0), 42),
            KeyOutcome::Focus(7)
        );
        controller.handle_key(GridKind::Days, GridKey::Escape, None, 42);
        assert!(!controller.is_open());

        let mut inline = DatePickerController::new(DatePickerArgs::default().inline(true));
        assert_eq!(
            inline.handle_key(GridKind::Days, GridKey::Escape, None, 42),
            KeyOutcome::Ignored
        );
        assert!(inline.is_open());
    }

    #[test]
    fn external_sync_rewrites_text() {
        let mut controller = DatePickerController::new(
            DatePickerArgs::default().selection_mode(SelectionMode::Range),
        );
        controller.sync_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 9)));
        assert_eq!(controller.range_input_value(), "01/01/2024 - 01/09/2024");
        controller.set_format("yyyy-MM-dd");
        assert_eq!(controller.display_text(), "2024-01-01 - 2024-01-09");
    }
}
