//! Custom events dispatched on the widget's root element.
use std::fmt;

use atomix_calendar::CalendarDate;

use crate::host::NodeId;

/// The `datepicker:*` event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// The widget finished initialising.
    Init,
    /// The selected date changed.
    Change,
    /// The calendar opened.
    Open,
    /// The calendar closed.
    Close,
    /// The widget was destroyed.
    Destroy,
}

impl EventName {
    /// Full event name, e.g. `datepicker:change`.
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::Init => "datepicker:init",
            EventName::Change => "datepicker:change",
            EventName::Open => "datepicker:open",
            EventName::Close => "datepicker:close",
            EventName::Destroy => "datepicker:destroy",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a [`CustomEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDetail {
    /// `{ instance }`, identified by the widget's root element.
    Instance(NodeId),
    /// `{ date }`. `None` after clearing.
    Date(Option<CalendarDate>),
}

/// A bubbling custom event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomEvent {
    /// Event name.
    pub name: EventName,
    /// Whether the event bubbles. Widget events always do.
    pub bubbles: bool,
    /// Payload.
    pub detail: EventDetail,
}

impl CustomEvent {
    /// A bubbling event carrying the widget instance.
    pub fn instance(name: EventName, element: NodeId) -> Self {
        Self {
            name,
            bubbles: true,
            detail: EventDetail::Instance(element),
        }
    }

    /// A bubbling `datepicker:change` event.
    pub fn change(date: Option<CalendarDate>) -> Self {
        Self {
            name: EventName::Change,
            bubbles: true,
            detail: EventDetail::Date(date),
        }
    }
}
