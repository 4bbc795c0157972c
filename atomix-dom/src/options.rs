//! Widget options and their `data-*` attribute form.
use std::{fmt, str::FromStr};

use atomix_calendar::{CalendarDate, DateBounds, Weekday, format};
use derive_setters::Setters;
use thiserror::Error;
use tracing::warn;

use crate::{
    host::{DomHost, NodeId},
    render::RenderOptions,
};

/// Where the calendar opens relative to the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above, left-aligned.
    TopStart,
    /// Above, right-aligned.
    TopEnd,
    /// Below, left-aligned.
    #[default]
    BottomStart,
    /// Below, right-aligned.
    BottomEnd,
}

impl Placement {
    /// The placement name used in classes and attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
        }
    }

    /// Returns true for the two `top-*` placements.
    pub fn is_top(self) -> bool {
        matches!(self, Placement::TopStart | Placement::TopEnd)
    }

    /// Returns true for the two `*-end` placements.
    pub fn is_end(self) -> bool {
        matches!(self, Placement::TopEnd | Placement::BottomEnd)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown placement name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown placement `{0}`")]
pub struct UnknownPlacement(pub String);

impl FromStr for Placement {
    type Err = UnknownPlacement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top-start" => Ok(Placement::TopStart),
            "top-end" => Ok(Placement::TopEnd),
            "bottom-start" => Ok(Placement::BottomStart),
            "bottom-end" => Ok(Placement::BottomEnd),
            other => Err(UnknownPlacement(other.to_string())),
        }
    }
}

/// Configuration of a [`crate::DatePickerWidget`].
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct DatePickerOptions {
    /// Input text format.
    #[setters(into)]
    pub format: String,
    /// Calendar placement.
    pub placement: Placement,
    /// Show the clear button.
    pub clearable: bool,
    /// Show the today button.
    pub show_today_button: bool,
    /// Prefix each week row with its ISO week number.
    pub show_week_numbers: bool,
    /// Render the calendar inside the element, always open.
    pub inline: bool,
    /// Earliest selectable date.
    #[setters(strip_option)]
    pub min_date: Option<CalendarDate>,
    /// Latest selectable date.
    #[setters(strip_option)]
    pub max_date: Option<CalendarDate>,
    /// First column of the day grid.
    pub first_day_of_week: Weekday,
    /// Focusing the input does not open the calendar.
    pub disabled: bool,
    /// The input is read-only; focus does not open the calendar either.
    pub read_only: bool,
    /// Date treated as today. Defaults to the current UTC date.
    #[setters(strip_option)]
    pub today: Option<CalendarDate>,
}

impl Default for DatePickerOptions {
    fn default() -> Self {
        Self {
            format: format::DEFAULT_FORMAT.to_string(),
            placement: Placement::default(),
            clearable: true,
            show_today_button: true,
            show_week_numbers: false,
            inline: false,
            min_date: None,
            max_date: None,
            first_day_of_week: Weekday::Sun,
            disabled: false,
            read_only: false,
            today: None,
        }
    }
}

impl DatePickerOptions {
    /// Defaults overridden by the `data-*` attributes of `element`.
    pub fn from_data_attributes(host: &impl DomHost, element: NodeId) -> Self {
        Self::default().with_data_attributes(host, element)
    }

    /// Overrides fields from the `data-*` attributes of `element`.
    ///
    /// Flags that default to on are only switched off by the literal
    /// `"false"`; flags that default to off need `"true"`. Dates use the
    /// lenient native parser. Unparseable values are logged and ignored.
    pub fn with_data_attributes(mut self, host: &impl DomHost, element: NodeId) -> Self {
        let attr = |name: &str| host.data_attribute(element, name);

        if let Some(value) = attr("format") {
            self.format = value;
        }
        if let Some(value) = attr("min-date") {
            match format::parse_native(&value) {
                Some(date) => self.min_date = Some(date),
                None => warn!(%value, "ignoring unparseable data-min-date"),
            }
        }
        if let Some(value) = attr("max-date") {
            match format::parse_native(&value) {
                Some(date) => self.max_date = Some(date),
                None => warn!(%value, "ignoring unparseable data-max-date"),
            }
        }
        if let Some(value) = attr("clearable") {
            self.clearable = value != "false";
        }
        if let Some(value) = attr("show-today-button") {
            self.show_today_button = value != "false";
        }
        if let Some(value) = attr("show-week-numbers") {
            self.show_week_numbers = value == "true";
        }
        if let Some(value) = attr("inline") {
            self.inline = value == "true";
        }
        if let Some(value) = attr("placement") {
            match value.parse() {
                Ok(placement) => self.placement = placement,
                Err(err) => warn!(%err, "ignoring data-placement"),
            }
        }
        self
    }

    /// Bounds built from `min_date` and `max_date`.
    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min_date, self.max_date)
    }

    /// The subset of options the renderer reads.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_week_numbers: self.show_week_numbers,
            show_today_button: self.show_today_button,
            clearable: self.clearable,
            inline: self.inline,
        }
    }
}
