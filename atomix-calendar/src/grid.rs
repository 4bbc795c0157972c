//! Derived calendar views: the 6×7 day grid, the month list and year pages.
use crate::date::{CalendarDate, Weekday, YearMonth};

/// Number of columns (days per week) in the day grid.
pub const GRID_COLUMNS: usize = 7;
/// Number of rows (weeks) in the day grid.
pub const GRID_ROWS: usize = 6;
/// Total number of cells in the day grid.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;
/// Number of years shown on a year page.
pub const YEAR_PAGE_SIZE: usize = 12;
/// How many years before the cursor year a year page starts.
pub const YEAR_PAGE_OFFSET: i32 = 6;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One cell of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCell {
    /// The date shown in the cell.
    pub date: CalendarDate,
    /// Whether the date belongs to the displayed month rather than padding.
    pub is_current_month: bool,
}

/// One entry of the month picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    /// Month number (1-12).
    pub month: u8,
    /// Full English month name.
    pub name: &'static str,
}

/// Builds the 42-cell grid for `month`, padded with days of the adjacent
/// months so the first row starts on `first_day_of_week`.
pub fn month_grid(month: YearMonth, first_day_of_week: Weekday) -> Vec<DateCell> {
    let first = month.first_day();
    let offset = (first.weekday().num_days_from_monday() + 7
        - first_day_of_week.num_days_from_monday())
        % 7;
    let start = first.add_days(-i64::from(offset)).unwrap_or(first);

    start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| DateCell {
            date,
            is_current_month: date.year() == month.year() && date.month() == month.month(),
        })
        .collect()
}

/// Returns the seven weekdays starting at `first_day_of_week`.
pub fn weekday_sequence(first_day_of_week: Weekday) -> [Weekday; GRID_COLUMNS] {
    let mut day = first_day_of_week;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}

/// Two-letter label used in calendar headers.
pub fn weekday_short_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Header labels in display order.
pub fn weekday_labels(first_day_of_week: Weekday) -> [&'static str; GRID_COLUMNS] {
    weekday_sequence(first_day_of_week).map(weekday_short_label)
}

/// Full English name of `month` (1-12).
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// Three-letter English abbreviation of `month` (1-12).
pub fn month_short_name(month: u8) -> &'static str {
    &month_name(month)[..3]
}

/// All twelve months in calendar order.
pub fn months() -> [MonthEntry; 12] {
    std::array::from_fn(|idx| MonthEntry {
        month: idx as u8 + 1,
        name: MONTH_NAMES[idx],
    })
}

/// The twelve years shown on the year page around `year`.
pub fn year_page(year: i32) -> [i32; YEAR_PAGE_SIZE] {
    let start = year - YEAR_PAGE_OFFSET;
    std::array::from_fn(|idx| start + idx as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u8) -> YearMonth {
        YearMonth::new(year, month).expect("valid month")
    }

    #[test]
    fn grid_always_has_six_full_weeks() {
        for year in [2023, 2024, 2025] {
            for m in 1..=12 {
                let cells = month_grid(month(year, m), Weekday::Sun);
                assert_eq!(cells.len(), GRID_CELLS);
                let rows: Vec<_> = cells.chunks(GRID_COLUMNS).collect();
                assert_eq!(rows.len(), GRID_ROWS);
                assert!(rows.iter().all(|row| row.len() == GRID_COLUMNS));

                let current = cells.iter().filter(|c| c.is_current_month).count();
                assert_eq!(current, month(year, m).days_in_month() as usize);
                for cell in &cells {
                    let inside = cell.date.year() == year && cell.date.month() == m;
                    assert_eq!(cell.is_current_month, inside);
                }
            }
        }
    }

    #[test]
    fn sunday_first_grid_pads_with_previous_month() {
        // March 2024 starts on a Friday.
        let cells = month_grid(month(2024, 3), Weekday::Sun);
        assert_eq!(cells[0].date, CalendarDate::new(2024, 2, 25).expect("valid"));
        assert!(!cells[0].is_current_month);
        assert_eq!(cells[5].date, CalendarDate::new(2024, 3, 1).expect("valid"));
        assert!(cells[5].is_current_month);
        assert_eq!(cells[41].date, CalendarDate::new(2024, 4, 6).expect("valid"));
    }

    #[test]
    fn month_starting_on_first_day_has_no_leading_padding() {
        // September 2024 starts on a Sunday.
        let cells = month_grid(month(2024, 9), Weekday::Sun);
        assert_eq!(cells[0].date, CalendarDate::new(2024, 9, 1).expect("valid"));
        let monday_first = month_grid(month(2024, 9), Weekday::Mon);
        assert_eq!(monday_first[6].date, CalendarDate::new(2024, 9, 1).expect("valid"));
    }

    #[test]
    fn january_grid_borrows_from_previous_year() {
        let cells = month_grid(month(2025, 1), Weekday::Sun);
        assert_eq!(cells[0].date, CalendarDate::new(2024, 12, 29).expect("valid"));
    }

    #[test]
    fn labels_rotate_with_first_day() {
        assert_eq!(weekday_labels(Weekday::Sun)[0], "Su");
        assert_eq!(weekday_labels(Weekday::Mon)[6], "Su");
    }

    #[test]
    fn months_and_year_pages() {
        let all = months();
        assert_eq!(all[0].name, "January");
        assert_eq!(all[11].month, 12);
        assert_eq!(month_short_name(9), "Sep");
        let page = year_page(2024);
        assert_eq!(page[0], 2018);
        assert_eq!(page[11], 2029);
    }
}
