//! HTML markup for the calendar popup.
//!
//! The class names form the contract with the stylesheet and with
//! [`crate::click::decode_click`].
use atomix_calendar::{
    DatePickerState, ViewMode,
    grid::{self, YEAR_PAGE_OFFSET},
};

/// Block class of the popup.
pub const CALENDAR_CLASS: &str = "c-datepicker__calendar";
/// Class toggled while the popup is visible.
pub const OPEN_CLASS: &str = "is-open";

const PREV_YEAR_GLYPH: &str = "&laquo;";
const PREV_GLYPH: &str = "&lsaquo;";
const NEXT_GLYPH: &str = "&rsaquo;";
const NEXT_YEAR_GLYPH: &str = "&raquo;";

/// Presentation switches read by [`render_calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Add a week number column.
    pub show_week_numbers: bool,
    /// Add the today button.
    pub show_today_button: bool,
    /// Add the clear button.
    pub clearable: bool,
    /// Inline calendars have no close button.
    pub inline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_week_numbers: false,
            show_today_button: true,
            clearable: true,
            inline: false,
        }
    }
}

/// Renders the header, body and footer of the popup for the current view.
pub fn render_calendar(state: &DatePickerState, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(8 * 1024);
    render_header(&mut out, state);

    out.push_str(r#"<div class="c-datepicker__body">"#);
    match state.view_mode() {
        ViewMode::Days => render_days(&mut out, state, options),
        ViewMode::Months => render_months(&mut out, state),
        ViewMode::Years => render_years(&mut out, state),
    }
    out.push_str("</div>");

    if state.view_mode() == ViewMode::Days {
        render_footer(&mut out, options);
    }
    out
}

fn button(out: &mut String, class: &str, label: &str, content: &str) {
    out.push_str(&format!(
        r#"<button type="button" class="{class}" aria-label="{label}">{content}</button>"#
    ));
}

fn nav_button(out: &mut String, modifier: &str, label: &str, glyph: &str) {
    button(
        out,
        &format!("c-datepicker__nav-button c-datepicker__nav-button--{modifier}"),
        label,
        glyph,
    );
}

fn render_header(out: &mut String, state: &DatePickerState) {
    let month = state.view_month();
    out.push_str(r#"<div class="c-datepicker__header">"#);
    match state.view_mode() {
        ViewMode::Days => {
            nav_button(out, "prev-year", "Previous year", PREV_YEAR_GLYPH);
            nav_button(out, "prev-month", "Previous month", PREV_GLYPH);
            button(
                out,
                "c-datepicker__view-switch",
                "Switch to month view",
                &format!("{}/{}", month.month(), month.year()),
            );
            nav_button(out, "next-month", "Next month", NEXT_GLYPH);
            nav_button(out, "next-year", "Next year", NEXT_YEAR_GLYPH);
        }
        ViewMode::Months => {
            nav_button(out, "prev-year", "Previous year", PREV_GLYPH);
            button(
                out,
                "c-datepicker__view-switch",
                "Switch to year view",
                &month.year().to_string(),
            );
            nav_button(out, "next-year", "Next year", NEXT_GLYPH);
        }
        ViewMode::Years => {
            let first = month.year() - YEAR_PAGE_OFFSET;
            let last = first + grid::YEAR_PAGE_SIZE as i32 - 1;
            nav_button(out, "prev-year", "Previous year range", PREV_GLYPH);
            button(
                out,
                "c-datepicker__view-switch",
                "Current year range",
                &format!("{first} - {last}"),
            );
            nav_button(out, "next-year", "Next year range", NEXT_GLYPH);
        }
    }
    out.push_str("</div>");
}

fn render_days(out: &mut String, state: &DatePickerState, options: &RenderOptions) {
    out.push_str(r#"<div class="c-datepicker__weekdays" role="row">"#);
    if options.show_week_numbers {
        out.push_str(
            r##"<div class="c-datepicker__weekday c-datepicker__weeknumber" role="columnheader">#</div>"##,
        );
    }
    for label in grid::weekday_labels(state.first_day_of_week()) {
        out.push_str(&format!(
            r#"<div class="c-datepicker__weekday" role="columnheader">{label}</div>"#
        ));
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="c-datepicker__days" role="grid">"#);
    for (index, view) in state.day_views().into_iter().enumerate() {
        let date = view.cell.date;
        if options.show_week_numbers && index % grid::GRID_COLUMNS == 0 {
            let week = date.week_number();
            out.push_str(&format!(
                r#"<div class="c-datepicker__weeknumber" aria-label="Week {week}">{week}</div>"#
            ));
        }

        let mut classes = String::from("c-datepicker__day");
        for (on, modifier) in [
            (!view.cell.is_current_month, "outside"),
            (view.selected, "selected"),
            (view.in_range, "in-range"),
            (view.today, "today"),
            (!view.selectable, "disabled"),
        ] {
            if on {
                classes.push_str(" c-datepicker__day--");
                classes.push_str(modifier);
            }
        }
        out.push_str(&format!(
            r#"<button type="button" class="{classes}"{disabled} tabindex="{tabindex}" aria-label="{date}" aria-selected="{selected}" role="gridcell">{day}</button>"#,
            disabled = if view.selectable { "" } else { " disabled" },
            tabindex = if view.cell.is_current_month { 0 } else { -1 },
            selected = view.selected,
            day = date.day(),
        ));
    }
    out.push_str("</div>");
}

fn render_months(out: &mut String, state: &DatePickerState) {
    let year = state.view_month().year();
    let value = state.value();
    out.push_str(r#"<div class="c-datepicker__months" role="grid">"#);
    for entry in state.months() {
        let selected =
            value.is_some_and(|date| date.year() == year && date.month() == entry.month);
        grid_button(out, "month", selected, grid::month_short_name(entry.month));
    }
    out.push_str("</div>");
}

fn render_years(out: &mut String, state: &DatePickerState) {
    let value = state.value();
    out.push_str(r#"<div class="c-datepicker__years" role="grid">"#);
    for year in state.years() {
        let selected = value.is_some_and(|date| date.year() == year);
        grid_button(out, "year", selected, &year.to_string());
    }
    out.push_str("</div>");
}

fn grid_button(out: &mut String, block: &str, selected: bool, content: &str) {
    let modifier = if selected {
        format!(" c-datepicker__{block}--selected")
    } else {
        String::new()
    };
    out.push_str(&format!(
        r#"<button type="button" class="c-datepicker__{block}{modifier}" aria-selected="{selected}" role="gridcell">{content}</button>"#
    ));
}

fn render_footer(out: &mut String, options: &RenderOptions) {
    out.push_str(r#"<div class="c-datepicker__footer">"#);
    if options.show_today_button {
        button(out, "c-datepicker__today-button", "Go to today", "Today");
    }
    if !options.inline {
        button(out, "c-datepicker__close-button", "Close calendar", "Close");
    }
    if options.clearable {
        button(out, "c-datepicker__clear-button", "Clear date", "Clear");
    }
    out.push_str("</div>");
}
