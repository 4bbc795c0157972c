//! The calendar state machine shared by the controller and the DOM widget.
//!
//! [`DatePickerState`] owns the navigation cursor, the view mode and the
//! current selection. Every transition is a plain method; adapters inspect
//! the returned [`SelectionOutcome`] to decide about callbacks, input text and
//! closing the popover.
use tracing::debug;

use crate::{
    date::{CalendarDate, Weekday, YearMonth},
    grid::{self, DateCell, MonthEntry, YEAR_PAGE_SIZE},
};

/// Calendar granularity currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Day grid of one month.
    #[default]
    Days,
    /// Twelve months of one year.
    Months,
    /// A page of twelve years.
    Years,
}

/// Whether the picker selects one date or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// A single date.
    #[default]
    Single,
    /// A start and end date.
    Range,
}

/// Which range endpoint the next click sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePhase {
    /// The next click sets the start date.
    #[default]
    Start,
    /// The next click sets the end date.
    End,
}

/// A possibly incomplete date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    /// Start of the range.
    pub start: Option<CalendarDate>,
    /// End of the range.
    pub end: Option<CalendarDate>,
}

impl DateRange {
    /// A range with no endpoints.
    pub const EMPTY: DateRange = DateRange {
        start: None,
        end: None,
    };

    /// A complete range with the endpoints in chronological order.
    pub fn ordered(a: CalendarDate, b: CalendarDate) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns true when both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Inclusive selectable bounds. Missing bounds impose no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    /// Earliest selectable date.
    pub min: Option<CalendarDate>,
    /// Latest selectable date.
    pub max: Option<CalendarDate>,
}

impl DateBounds {
    /// Creates bounds from optional endpoints.
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    /// Returns true when `date` lies within the bounds.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }
}

/// Result of a day selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The day did not exist or fell outside the bounds; nothing changed.
    Rejected,
    /// A single date was selected.
    Selected(CalendarDate),
    /// The first endpoint of a range was picked.
    RangeStarted(CalendarDate),
    /// The range was completed. Endpoints are always ordered.
    RangeCompleted {
        /// Earlier endpoint.
        start: CalendarDate,
        /// Later endpoint.
        end: CalendarDate,
    },
}

/// A grid cell together with the flags renderers need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayView {
    /// The underlying grid cell.
    pub cell: DateCell,
    /// Within the selectable bounds.
    pub selectable: bool,
    /// The selected date or one of the range endpoints.
    pub selected: bool,
    /// Strictly between the range endpoints.
    pub in_range: bool,
    /// Equal to today's date.
    pub today: bool,
}

/// Holds the navigation cursor, view mode and selection of a date picker.
#[derive(Debug, Clone)]
pub struct DatePickerState {
    view_month: YearMonth,
    view_mode: ViewMode,
    selection_mode: SelectionMode,
    value: Option<CalendarDate>,
    range: DateRange,
    range_phase: RangePhase,
    bounds: DateBounds,
    first_day_of_week: Weekday,
    today: CalendarDate,
}

impl DatePickerState {
    /// Creates a state. The cursor starts at `value`, then the range start,
    /// then today.
    pub fn new(
        selection_mode: SelectionMode,
        value: Option<CalendarDate>,
        range: DateRange,
        bounds: DateBounds,
    ) -> Self {
        let today = CalendarDate::today();
        let view_month = value.or(range.start).unwrap_or(today).year_month();
        Self {
            view_month,
            view_mode: ViewMode::Days,
            selection_mode,
            value,
            range,
            range_phase: phase_for(range),
            bounds,
            first_day_of_week: Weekday::Sun,
            today,
        }
    }

    /// A single-date state.
    pub fn single(value: Option<CalendarDate>) -> Self {
        Self::new(
            SelectionMode::Single,
            value,
            DateRange::EMPTY,
            DateBounds::default(),
        )
    }

    /// A range state.
    pub fn range(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self::new(
            SelectionMode::Range,
            None,
            DateRange { start, end },
            DateBounds::default(),
        )
    }

    /// Replaces the selectable bounds.
    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replaces the first day of the week used by [`Self::days`].
    pub fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    /// Overrides the date treated as today.
    pub fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = today;
        self
    }

    /// Month under the navigation cursor.
    pub fn view_month(&self) -> YearMonth {
        self.view_month
    }

    /// Displayed granularity.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Single or range selection.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// Selected date in single mode.
    pub fn value(&self) -> Option<CalendarDate> {
        self.value
    }

    /// Selected range in range mode.
    pub fn selected_range(&self) -> DateRange {
        self.range
    }

    /// Which endpoint the next click sets.
    pub fn range_phase(&self) -> RangePhase {
        self.range_phase
    }

    /// Selectable bounds.
    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// First day of the week in the day grid.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// The date treated as today.
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Replaces the bounds.
    pub fn set_bounds(&mut self, bounds: DateBounds) {
        self.bounds = bounds;
    }

    /// Replaces the first day of the week.
    pub fn set_first_day_of_week(&mut self, first_day_of_week: Weekday) {
        self.first_day_of_week = first_day_of_week;
    }

    /// Switches between single and range selection, dropping any half-made
    /// range.
    pub fn set_selection_mode(&mut self, selection_mode: SelectionMode) {
        if selection_mode != self.selection_mode && !self.range.is_complete() {
            self.range = DateRange::EMPTY;
        }
        self.selection_mode = selection_mode;
        self.range_phase = phase_for(self.range);
    }

    /// Moves the cursor without touching the selection.
    pub fn set_view_month(&mut self, month: YearMonth) {
        self.view_month = month;
    }

    /// Moves the cursor to the month of `date`.
    pub fn show_date(&mut self, date: CalendarDate) {
        self.view_month = date.year_month();
    }

    /// Replaces the single value without moving the cursor.
    pub fn set_value(&mut self, value: Option<CalendarDate>) {
        self.value = value;
    }

    /// Replaces the range and recomputes the selection phase.
    pub fn set_range(&mut self, start: Option<CalendarDate>, end: Option<CalendarDate>) {
        self.range = DateRange { start, end };
        self.range_phase = phase_for(self.range);
    }

    /// Shows the month picker.
    pub fn switch_to_month_view(&mut self) {
        self.view_mode = ViewMode::Months;
    }

    /// Shows the year picker.
    pub fn switch_to_year_view(&mut self) {
        self.view_mode = ViewMode::Years;
    }

    /// Widens the view one step: days to months, months to years.
    pub fn widen_view(&mut self) {
        match self.view_mode {
            ViewMode::Days => self.switch_to_month_view(),
            ViewMode::Months => self.switch_to_year_view(),
            ViewMode::Years => {}
        }
    }

    /// Sets the cursor month (1-12) and returns to the day grid.
    pub fn select_month(&mut self, month: u8) {
        if let Some(target) = self.view_month.with_month(month) {
            self.view_month = target;
            self.view_mode = ViewMode::Days;
        }
    }

    /// Sets the cursor year and drops to the month picker.
    pub fn select_year(&mut self, year: i32) {
        self.view_month = self.view_month.with_year(year);
        self.view_mode = ViewMode::Months;
    }

    /// Moves the cursor one month back.
    pub fn prev_month(&mut self) {
        self.view_month = self.view_month.add_months(-1);
    }

    /// Moves the cursor one month forward.
    pub fn next_month(&mut self) {
        self.view_month = self.view_month.add_months(1);
    }

    /// Moves the cursor one year back.
    pub fn prev_year(&mut self) {
        self.view_month = self.view_month.add_years(-1);
    }

    /// Moves the cursor one year forward.
    pub fn next_year(&mut self) {
        self.view_month = self.view_month.add_years(1);
    }

    /// Selects `day` of the cursor month.
    pub fn select_day(&mut self, day: u8) -> SelectionOutcome {
        let Some(date) = self.view_month.to_date(day) else {
            return SelectionOutcome::Rejected;
        };
        self.select_date(date)
    }

    /// Selects an explicit date, honoring the bounds and the range phase.
    pub fn select_date(&mut self, date: CalendarDate) -> SelectionOutcome {
        if !self.bounds.contains(date) {
            debug!(%date, "rejected date outside bounds");
            return SelectionOutcome::Rejected;
        }

        match self.selection_mode {
            SelectionMode::Single => {
                self.value = Some(date);
                SelectionOutcome::Selected(date)
            }
            SelectionMode::Range => match (self.range_phase, self.range.start) {
                (RangePhase::End, Some(anchor)) => {
                    let (start, end) = if date < anchor {
                        (date, anchor)
                    } else {
                        (anchor, date)
                    };
                    self.range = DateRange {
                        start: Some(start),
                        end: Some(end),
                    };
                    self.range_phase = RangePhase::Start;
                    debug!(%start, %end, "range completed");
                    SelectionOutcome::RangeCompleted { start, end }
                }
                _ => {
                    self.range = DateRange {
                        start: Some(date),
                        end: None,
                    };
                    self.range_phase = RangePhase::End;
                    SelectionOutcome::RangeStarted(date)
                }
            },
        }
    }

    /// Moves the cursor to today. In single mode today is also selected.
    ///
    /// Returns `None` in range mode, where only the cursor moves.
    pub fn go_to_today(&mut self) -> Option<SelectionOutcome> {
        self.view_month = self.today.year_month();
        match self.selection_mode {
            SelectionMode::Single => Some(self.select_day(self.today.day())),
            SelectionMode::Range => None,
        }
    }

    /// Clears the value and the range.
    pub fn clear(&mut self) {
        self.value = None;
        self.range = DateRange::EMPTY;
        self.range_phase = RangePhase::Start;
    }

    /// Returns true when `date` is within the bounds.
    pub fn is_date_selectable(&self, date: CalendarDate) -> bool {
        self.bounds.contains(date)
    }

    /// Returns true for the selected date or either range endpoint.
    pub fn is_date_selected(&self, date: CalendarDate) -> bool {
        match self.selection_mode {
            SelectionMode::Single => self.value == Some(date),
            SelectionMode::Range => {
                self.range.start == Some(date) || self.range.end == Some(date)
            }
        }
    }

    /// Returns true when `date` lies strictly between both range endpoints.
    pub fn is_date_in_selected_range(&self, date: CalendarDate) -> bool {
        if self.selection_mode != SelectionMode::Range {
            return false;
        }
        match (self.range.start, self.range.end) {
            (Some(start), Some(end)) => date > start && date < end,
            _ => false,
        }
    }

    /// Returns true when `date` is today.
    pub fn is_today(&self, date: CalendarDate) -> bool {
        self.today == date
    }

    /// The 42-cell day grid of the cursor month.
    pub fn days(&self) -> Vec<DateCell> {
        grid::month_grid(self.view_month, self.first_day_of_week)
    }

    /// The day grid with selection flags.
    pub fn day_views(&self) -> Vec<DayView> {
        self.days()
            .into_iter()
            .map(|cell| DayView {
                cell,
                selectable: self.is_date_selectable(cell.date),
                selected: self.is_date_selected(cell.date),
                in_range: self.is_date_in_selected_range(cell.date),
                today: self.is_today(cell.date),
            })
            .collect()
    }

    /// The month picker entries.
    pub fn months(&self) -> [MonthEntry; 12] {
        grid::months()
    }

    /// The year page around the cursor year.
    pub fn years(&self) -> [i32; YEAR_PAGE_SIZE] {
        grid::year_page(self.view_month.year())
    }
}

impl Default for DatePickerState {
    fn default() -> Self {
        DatePickerState::single(None)
    }
}

fn phase_for(range: DateRange) -> RangePhase {
    match (range.start, range.end) {
        (Some(_), None) => RangePhase::End,
        _ => RangePhase::Start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    fn month(year: i32, month: u8) -> YearMonth {
        YearMonth::new(year, month).expect("valid month")
    }

    #[test]
    fn cursor_starts_at_value_then_range_start() {
        let state = DatePickerState::single(Some(date(2024, 3, 15)));
        assert_eq!(state.view_month(), month(2024, 3));
        assert_eq!(state.view_mode(), ViewMode::Days);

        let state = DatePickerState::range(Some(date(2023, 7, 1)), None);
        assert_eq!(state.view_month(), month(2023, 7));
        assert_eq!(state.range_phase(), RangePhase::End);
    }

    #[test]
    fn view_mode_transitions() {
        let mut state = DatePickerState::single(Some(date(2024, 3, 15)));
        state.switch_to_month_view();
        assert_eq!(state.view_mode(), ViewMode::Months);
        assert_eq!(state.view_month(), month(2024, 3));

        state.switch_to_year_view();
        state.select_year(2030);
        assert_eq!(state.view_mode(), ViewMode::Months);
        assert_eq!(state.view_month(), month(2030, 3));

        state.select_month(11);
        assert_eq!(state.view_mode(), ViewMode::Days);
        assert_eq!(state.view_month(), month(2030, 11));

        state.select_month(13);
        assert_eq!(state.view_month(), month(2030, 11));
    }

    #[test]
    fn widen_view_stops_at_years() {
        let mut state = DatePickerState::default();
        state.widen_view();
        state.widen_view();
        state.widen_view();
        assert_eq!(state.view_mode(), ViewMode::Years);
    }

    #[test]
    fn month_navigation_rolls_over() {
        let mut state = DatePickerState::single(Some(date(2024, 1, 10)));
        state.prev_month();
        assert_eq!(state.view_month(), month(2023, 12));
        state.next_month();
        state.next_month();
        assert_eq!(state.view_month(), month(2024, 2));
        state.prev_year();
        assert_eq!(state.view_month(), month(2023, 2));
        state.next_year();
        assert_eq!(state.view_month(), month(2024, 2));

        let start = state.view_month();
        for _ in 0..12 {
            state.next_month();
        }
        assert_eq!(state.view_month(), month(start.year() + 1, start.month()));
    }

    #[test]
    fn single_selection_respects_bounds() {
        let mut state = DatePickerState::single(Some(date(2024, 3, 1))).with_bounds(
            DateBounds::new(Some(date(2024, 3, 5)), Some(date(2024, 3, 20))),
        );
        assert_eq!(state.select_day(4), SelectionOutcome::Rejected);
        assert_eq!(state.select_day(21), SelectionOutcome::Rejected);
        assert_eq!(state.value(), Some(date(2024, 3, 1)));

        assert_eq!(state.select_day(5), SelectionOutcome::Selected(date(2024, 3, 5)));
        assert_eq!(state.select_day(20), SelectionOutcome::Selected(date(2024, 3, 20)));
        assert!(state.is_date_selected(date(2024, 3, 20)));
    }

    #[test]
    fn nonexistent_day_is_rejected() {
        let mut state = DatePickerState::single(Some(date(2024, 4, 1)));
        assert_eq!(state.select_day(31), SelectionOutcome::Rejected);
        assert_eq!(state.select_day(0), SelectionOutcome::Rejected);
    }

    #[test]
    fn range_selection_in_order() {
        let mut state = DatePickerState::range(None, None);
        state.set_view_month(month(2024, 3));
        assert_eq!(state.range_phase(), RangePhase::Start);

        assert_eq!(state.select_day(5), SelectionOutcome::RangeStarted(date(2024, 3, 5)));
        assert_eq!(state.range_phase(), RangePhase::End);
        assert_eq!(state.selected_range().end, None);

        assert_eq!(
            state.select_day(12),
            SelectionOutcome::RangeCompleted {
                start: date(2024, 3, 5),
                end: date(2024, 3, 12)
            }
        );
        assert_eq!(state.range_phase(), RangePhase::Start);
    }

    #[test]
    fn range_selection_swaps_reversed_clicks() {
        let mut state = DatePickerState::range(None, None);
        state.set_view_month(month(2024, 3));
        state.select_day(20);
        state.prev_month();
        let outcome = state.select_day(10);
        assert_eq!(
            outcome,
            SelectionOutcome::RangeCompleted {
                start: date(2024, 2, 10),
                end: date(2024, 3, 20)
            }
        );
        let range = state.selected_range();
        assert!(range.start <= range.end);
    }

    #[test]
    fn every_two_click_range_is_ordered() {
        for first in 1..=28u8 {
            for second in [1u8, 9, 14, 28] {
                let mut state = DatePickerState::range(None, None);
                state.set_view_month(month(2024, 2));
                state.select_day(first);
                match state.select_day(second) {
                    SelectionOutcome::RangeCompleted { start, end } => assert!(start <= end),
                    other => panic!("unexpected outcome {other:?}"),
                }
            }
        }
    }

    #[test]
    fn range_flags_exclude_endpoints() {
        let state = DatePickerState::range(Some(date(2024, 3, 5)), Some(date(2024, 3, 8)));
        assert!(!state.is_date_in_selected_range(date(2024, 3, 5)));
        assert!(state.is_date_in_selected_range(date(2024, 3, 6)));
        assert!(state.is_date_in_selected_range(date(2024, 3, 7)));
        assert!(!state.is_date_in_selected_range(date(2024, 3, 8)));
        assert!(state.is_date_selected(date(2024, 3, 5)));
        assert!(state.is_date_selected(date(2024, 3, 8)));
        assert!(!state.is_date_selected(date(2024, 3, 6)));
    }

    #[test]
    fn set_range_keeps_phase_invariant() {
        let mut state = DatePickerState::range(None, None);
        state.set_range(Some(date(2024, 1, 1)), None);
        assert_eq!(state.range_phase(), RangePhase::End);
        state.set_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 3)));
        assert_eq!(state.range_phase(), RangePhase::Start);
        state.set_range(None, None);
        assert_eq!(state.range_phase(), RangePhase::Start);
        state.set_range(Some(date(2024, 1, 1)), None);
        state.clear();
        assert_eq!(state.range_phase(), RangePhase::Start);
        assert_eq!(state.selected_range(), DateRange::EMPTY);
    }

    #[test]
    fn today_selects_only_in_single_mode() {
        let today = date(2024, 6, 15);
        let mut single = DatePickerState::single(Some(date(2020, 1, 1))).with_today(today);
        assert_eq!(single.go_to_today(), Some(SelectionOutcome::Selected(today)));
        assert_eq!(single.view_month(), month(2024, 6));
        assert_eq!(single.value(), Some(today));

        let mut range = DatePickerState::range(None, None).with_today(today);
        range.set_view_month(month(2020, 1));
        assert_eq!(range.go_to_today(), None);
        assert_eq!(range.view_month(), month(2024, 6));
        assert_eq!(range.selected_range(), DateRange::EMPTY);
    }

    #[test]
    fn day_views_carry_flags() {
        let state = DatePickerState::range(Some(date(2024, 3, 5)), Some(date(2024, 3, 8)))
            .with_bounds(DateBounds::new(Some(date(2024, 3, 2)), None))
            .with_today(date(2024, 3, 6));
        let views = state.day_views();
        let find = |d: CalendarDate| {
            views
                .iter()
                .find(|view| view.cell.date == d)
                .copied()
                .expect("date in grid")
        };
        assert!(!find(date(2024, 3, 1)).selectable);
        assert!(find(date(2024, 3, 5)).selected);
        let sixth = find(date(2024, 3, 6));
        assert!(sixth.in_range && sixth.today && !sixth.selected);
    }

    #[test]
    fn bounds_are_inclusive_and_optional() {
        let open = DateBounds::default();
        assert!(open.contains(date(1, 1, 1)));
        let bounded = DateBounds::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        assert!(bounded.contains(date(2024, 1, 1)));
        assert!(bounded.contains(date(2024, 1, 31)));
        assert!(!bounded.contains(date(2024, 2, 1)));
    }

    #[test]
    fn switching_modes_drops_a_half_made_range() {
        let mut state = DatePickerState::range(None, None);
        assert_eq!(state.select_date(date(2024, 3, 5)), SelectionOutcome::RangeStarted(date(2024, 3, 5)));
        assert_eq!(state.range_phase(), RangePhase::End);

        state.set_selection_mode(SelectionMode::Single);
        assert_eq!(state.selected_range(), DateRange::EMPTY);
        assert_eq!(state.range_phase(), RangePhase::Start);

        let mut complete = DatePickerState::range(Some(date(2024, 3, 1)), Some(date(2024, 3, 9)));
        complete.set_selection_mode(SelectionMode::Single);
        assert!(complete.selected_range().is_complete());
    }
}
