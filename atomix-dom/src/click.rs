//! Delegated click decoding.
//!
//! The calendar has a single click listener. The host reports the clicked
//! element and its ancestors up to the calendar node, and [`decode_click`]
//! turns that path into the actions to run.
use derive_setters::Setters;
use smallvec::SmallVec;

/// One element on a click path, described by what the decoder looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
pub struct ClickedElement {
    /// Class list.
    #[setters(skip)]
    pub classes: SmallVec<[String; 4]>,
    /// Text content.
    #[setters(into)]
    pub text: String,
    /// Position among the parent's element children.
    pub sibling_index: usize,
    /// Whether a `disabled` attribute is present.
    pub disabled: bool,
}

impl ClickedElement {
    /// An element with the whitespace separated `class` attribute.
    pub fn new(class: &str) -> Self {
        Self {
            classes: class.split_whitespace().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    /// `Element.matches('.<class>')`.
    pub fn matches(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// An action triggered by a calendar click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A day button, by the day of month it shows. Padding days of the
    /// neighbouring months decode the same way.
    Day(u8),
    /// Previous month button.
    PrevMonth,
    /// Next month button.
    NextMonth,
    /// Previous year (or year page) button.
    PrevYear,
    /// Next year (or year page) button.
    NextYear,
    /// Header label widening the view.
    ViewSwitch,
    /// A month button, 1-12.
    Month(u8),
    /// A year button.
    Year(i32),
    /// Today button.
    Today,
    /// Close button.
    Close,
    /// Clear button.
    Clear,
}

const CLOSEST: [(&str, ClickTarget); 8] = [
    ("c-datepicker__nav-button--prev-month", ClickTarget::PrevMonth),
    ("c-datepicker__nav-button--next-month", ClickTarget::NextMonth),
    ("c-datepicker__nav-button--prev-year", ClickTarget::PrevYear),
    ("c-datepicker__nav-button--next-year", ClickTarget::NextYear),
    ("c-datepicker__view-switch", ClickTarget::ViewSwitch),
    ("c-datepicker__today-button", ClickTarget::Today),
    ("c-datepicker__close-button", ClickTarget::Close),
    ("c-datepicker__clear-button", ClickTarget::Clear),
];

/// Decodes a click path, target first.
///
/// Direct matches (days, months, years) look at the target only; buttons
/// match on the target or any ancestor, as `Element.closest` does.
pub fn decode_click(path: &[ClickedElement]) -> SmallVec<[ClickTarget; 2]> {
    let mut out = SmallVec::new();
    let Some(target) = path.first() else {
        return out;
    };
    let closest = |class: &str| path.iter().any(|el| el.matches(class));

    if target.matches("c-datepicker__day") && !target.disabled {
        if let Ok(day) = target.text.trim().parse::<u8>() {
            out.push(ClickTarget::Day(day));
        }
    }
    if target.matches("c-datepicker__month") && target.sibling_index < 12 {
        out.push(ClickTarget::Month(target.sibling_index as u8 + 1));
    }
    if target.matches("c-datepicker__year") {
        if let Ok(year) = target.text.trim().parse() {
            out.push(ClickTarget::Year(year));
        }
    }
    for (class, action) in CLOSEST {
        if closest(class) {
            out.push(action);
        }
    }
    out
}
