//! The document-driven date picker.
//!
//! A [`DatePickerWidget`] keeps the picker state and the ids of its nodes.
//! The host borrows itself into every call; when a registered listener fires,
//! the host calls the matching `handle_*` method.
use atomix_calendar::{
    CalendarDate, DatePickerState, SelectionOutcome, ViewMode, YearMonth, format,
    keyboard::{GridKey, GridKind, KeyOutcome, next_focus_index},
};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    click::{ClickTarget, ClickedElement, decode_click},
    events::{CustomEvent, EventName},
    host::{DomHost, EventType, Listener, ListenerTarget, NodeId},
    options::{DatePickerOptions, Placement},
    position::compute_position,
    render::{CALENDAR_CLASS, OPEN_CLASS, render_calendar},
};

/// Errors raised while attaching a widget.
#[derive(Debug, Error)]
pub enum DomError {
    /// The element to attach to is not part of the document.
    #[error("date picker element {0:?} not found")]
    ElementNotFound(NodeId),
}

fn placement_class(placement: Placement) -> String {
    format!("{CALENDAR_CLASS}--{placement}")
}

/// A date picker bound to an element of a [`DomHost`].
#[derive(Debug)]
pub struct DatePickerWidget {
    element: NodeId,
    input: Option<NodeId>,
    calendar: NodeId,
    options: DatePickerOptions,
    state: DatePickerState,
    is_open: bool,
    listeners: SmallVec<[Listener; 5]>,
    destroyed: bool,
}

impl DatePickerWidget {
    /// Attaches a picker to `element`.
    ///
    /// The initial date is parsed from the element's first input. The
    /// calendar node is created detached and only joins the body while
    /// open; inline calendars live inside `element` and start open.
    /// Dispatches `datepicker:init`.
    pub fn new<H: DomHost>(
        host: &mut H,
        element: NodeId,
        options: DatePickerOptions,
    ) -> Result<Self, DomError> {
        if !host.element_exists(element) {
            return Err(DomError::ElementNotFound(element));
        }

        let input = host.find_input(element);
        let value = input
            .map(|input| host.input_value(input))
            .filter(|text| !text.is_empty())
            .and_then(|text| format::parse_date(&text, &options.format));
        let today = options.today.unwrap_or_else(CalendarDate::today);
        let mut state = DatePickerState::single(value)
            .with_bounds(options.bounds())
            .with_first_day_of_week(options.first_day_of_week)
            .with_today(today);
        if value.is_none() {
            state.show_date(today);
        }

        let calendar = host.create_calendar_node();
        host.add_class(calendar, CALENDAR_CLASS);
        host.add_class(calendar, &placement_class(options.placement));
        if options.inline {
            host.append_to_element(element, calendar);
        }

        let mut widget = Self {
            element,
            input,
            calendar,
            is_open: options.inline,
            options,
            state,
            listeners: SmallVec::new(),
            destroyed: false,
        };
        widget.bind_events(host);
        widget.render(host);
        if widget.options.inline {
            host.add_class(calendar, OPEN_CLASS);
        }

        debug!(?element, ?value, inline = widget.options.inline, "date picker attached");
        host.dispatch(element, CustomEvent::instance(EventName::Init, element));
        Ok(widget)
    }

    fn bind_events<H: DomHost>(&mut self, host: &mut H) {
        let mut wanted: SmallVec<[(ListenerTarget, EventType); 5]> = SmallVec::new();
        wanted.push((ListenerTarget::Node(self.calendar), EventType::Click));
        wanted.push((ListenerTarget::Node(self.calendar), EventType::KeyDown));
        if !self.options.inline {
            if let Some(input) = self.input {
                wanted.push((ListenerTarget::Node(input), EventType::Focus));
                wanted.push((ListenerTarget::Node(input), EventType::Input));
            }
            wanted.push((ListenerTarget::Document, EventType::Click));
        }

        for (target, event) in wanted {
            let listener = Listener {
                target,
                event,
                owner: self.element,
            };
            if host.add_listener(listener) {
                self.listeners.push(listener);
            }
        }
    }

    /// Root element.
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The bound input, if the element has one.
    pub fn input(&self) -> Option<NodeId> {
        self.input
    }

    /// The calendar popup node.
    pub fn calendar(&self) -> NodeId {
        self.calendar
    }

    /// Current options.
    pub fn options(&self) -> &DatePickerOptions {
        &self.options
    }

    /// Picker state.
    pub fn state(&self) -> &DatePickerState {
        &self.state
    }

    /// Whether the calendar is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether [`Self::destroy`] ran.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Listeners currently registered by this widget.
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// The selected date.
    pub fn date(&self) -> Option<CalendarDate> {
        self.state.value()
    }

    /// Selects `date`, or clears the selection for `None`.
    ///
    /// Bounds are not checked. Dispatches `datepicker:change`.
    pub fn set_date<H: DomHost>(&mut self, host: &mut H, date: Option<CalendarDate>) {
        if self.destroyed {
            return;
        }
        let Some(date) = date else {
            self.clear_date(host);
            return;
        };
        self.state.set_value(Some(date));
        self.state.show_date(date);
        self.write_input(host, &format::format_date(date, &self.options.format));
        self.render(host);
        host.dispatch(self.element, CustomEvent::change(Some(date)));
    }

    /// Shows the day grid of `month` without touching the selection.
    pub fn show_month<H: DomHost>(&mut self, host: &mut H, month: YearMonth) {
        if self.destroyed {
            return;
        }
        self.state.set_view_month(month);
        if self.state.view_mode() != ViewMode::Days {
            self.state.select_month(month.month());
        }
        self.render(host);
    }

    /// Opens the calendar.
    pub fn open<H: DomHost>(&mut self, host: &mut H) {
        self.show(host);
    }

    /// Closes the calendar. Inline calendars stay open.
    pub fn close<H: DomHost>(&mut self, host: &mut H) {
        self.hide(host);
    }

    /// Clears the selection and the input.
    pub fn clear<H: DomHost>(&mut self, host: &mut H) {
        if !self.destroyed {
            self.clear_date(host);
        }
    }

    /// Applies `update` to the options and re-renders.
    ///
    /// `inline` is fixed at construction; changes to it are ignored.
    pub fn update_options<H, F>(&mut self, host: &mut H, update: F)
    where
        H: DomHost,
        F: FnOnce(DatePickerOptions) -> DatePickerOptions,
    {
        if self.destroyed {
            return;
        }
        let mut options = update(self.options.clone());
        if options.inline != self.options.inline {
            warn!(element = ?self.element, "inline cannot change after construction");
            options.inline = self.options.inline;
        }
        if options.placement != self.options.placement {
            host.remove_class(self.calendar, &placement_class(self.options.placement));
            host.add_class(self.calendar, &placement_class(options.placement));
        }

        self.state.set_bounds(options.bounds());
        self.state.set_first_day_of_week(options.first_day_of_week);
        if let Some(today) = options.today {
            self.state = self.state.clone().with_today(today);
        }
        self.options = options;
        self.render(host);
    }

    /// Removes every listener, removes the calendar node from the document
    /// and dispatches `datepicker:destroy`. Calling it again does nothing.
    pub fn destroy<H: DomHost>(&mut self, host: &mut H) {
        if self.destroyed {
            return;
        }
        for listener in self.listeners.drain(..) {
            host.remove_listener(&listener);
        }
        host.remove(self.calendar);
        self.is_open = false;
        self.destroyed = true;

        debug!(element = ?self.element, "date picker destroyed");
        host.dispatch(
            self.element,
            CustomEvent::instance(EventName::Destroy, self.element),
        );
    }

    /// Input `focus` listener.
    pub fn handle_input_focus<H: DomHost>(&mut self, host: &mut H) {
        if !self.options.disabled && !self.options.read_only {
            self.show(host);
        }
    }

    /// Input `input` listener. Text that does not parse is ignored.
    pub fn handle_input<H: DomHost>(&mut self, host: &mut H, text: &str) {
        if self.destroyed {
            return;
        }
        let Some(date) = format::parse_date(text, &self.options.format) else {
            return;
        };
        self.state.set_value(Some(date));
        self.state.show_date(date);
        self.render(host);
        host.dispatch(self.element, CustomEvent::change(Some(date)));
    }

    /// Document `click` listener. Clicks outside both the element and the
    /// calendar close the popup.
    pub fn handle_document_click<H: DomHost>(&mut self, host: &mut H, target: NodeId) {
        if self.destroyed || !self.is_open {
            return;
        }
        if !host.contains(self.element, target) && !host.contains(self.calendar, target) {
            self.hide(host);
        }
    }

    /// Delegated calendar `click` listener. `path` starts at the clicked
    /// element and walks up to the calendar.
    pub fn handle_calendar_click<H: DomHost>(&mut self, host: &mut H, path: &[ClickedElement]) {
        if self.destroyed {
            return;
        }
        for action in decode_click(path) {
            self.apply_click(host, action);
        }
    }

    /// Calendar `keydown` listener.
    ///
    /// `focused` is the index of the focused cell among the enabled cells
    /// of the current view. Month paging and closing happen here; a
    /// [`KeyOutcome::Focus`] is returned for the host to move focus.
    pub fn handle_key_down<H: DomHost>(
        &mut self,
        host: &mut H,
        key: &str,
        focused: Option<usize>,
    ) -> KeyOutcome {
        if self.destroyed {
            return KeyOutcome::Ignored;
        }
        let Some(key) = GridKey::from_key_name(key) else {
            return KeyOutcome::Ignored;
        };
        let (kind, len) = match self.state.view_mode() {
            ViewMode::Days => (
                GridKind::Days,
                self.state.day_views().iter().filter(|day| day.selectable).count(),
            ),
            ViewMode::Months => (GridKind::Months, 12),
            ViewMode::Years => (GridKind::Years, self.state.years().len()),
        };

        let outcome = next_focus_index(kind, key, focused, len);
        match outcome {
            KeyOutcome::PreviousMonth => {
                self.state.prev_month();
                self.render(host);
            }
            KeyOutcome::NextMonth => {
                self.state.next_month();
                self.render(host);
            }
            KeyOutcome::Close if self.options.inline => return KeyOutcome::Ignored,
            KeyOutcome::Close => self.hide(host),
            KeyOutcome::Focus(_) | KeyOutcome::Ignored => {}
        }
        outcome
    }

    fn apply_click<H: DomHost>(&mut self, host: &mut H, action: ClickTarget) {
        debug!(?action, "calendar click");
        match action {
            ClickTarget::Day(day) => {
                let outcome = self.state.select_day(day);
                self.apply_selection(host, outcome);
            }
            ClickTarget::PrevMonth => self.navigate(host, DatePickerState::prev_month),
            ClickTarget::NextMonth => self.navigate(host, DatePickerState::next_month),
            ClickTarget::PrevYear => self.navigate(host, DatePickerState::prev_year),
            ClickTarget::NextYear => self.navigate(host, DatePickerState::next_year),
            ClickTarget::ViewSwitch => self.navigate(host, DatePickerState::widen_view),
            ClickTarget::Month(month) => self.navigate(host, |state| state.select_month(month)),
            ClickTarget::Year(year) => self.navigate(host, |state| state.select_year(year)),
            ClickTarget::Today => {
                let outcome = self.state.go_to_today().unwrap_or(SelectionOutcome::Rejected);
                self.apply_selection(host, outcome);
            }
            ClickTarget::Close => self.hide(host),
            ClickTarget::Clear => self.clear_date(host),
        }
    }

    fn navigate<H: DomHost>(&mut self, host: &mut H, step: impl FnOnce(&mut DatePickerState)) {
        step(&mut self.state);
        self.render(host);
    }

    fn apply_selection<H: DomHost>(&mut self, host: &mut H, outcome: SelectionOutcome) {
        let SelectionOutcome::Selected(date) = outcome else {
            self.render(host);
            return;
        };
        self.write_input(host, &format::format_date(date, &self.options.format));
        self.render(host);
        if !self.options.inline {
            self.hide(host);
        }
        host.dispatch(self.element, CustomEvent::change(Some(date)));
    }

    fn clear_date<H: DomHost>(&mut self, host: &mut H) {
        self.state.clear();
        self.write_input(host, "");
        self.render(host);
        host.dispatch(self.element, CustomEvent::change(None));
    }

    fn write_input<H: DomHost>(&self, host: &mut H, text: &str) {
        if let Some(input) = self.input {
            host.set_input_value(input, text);
        }
    }

    fn show<H: DomHost>(&mut self, host: &mut H) {
        if self.destroyed || self.is_open {
            return;
        }
        self.is_open = true;
        if !self.options.inline {
            host.append_to_body(self.calendar);
            self.position(host);
        }
        host.add_class(self.calendar, OPEN_CLASS);
        host.dispatch(
            self.element,
            CustomEvent::instance(EventName::Open, self.element),
        );
    }

    fn hide<H: DomHost>(&mut self, host: &mut H) {
        if self.destroyed || !self.is_open || self.options.inline {
            return;
        }
        self.is_open = false;
        host.remove_class(self.calendar, OPEN_CLASS);
        host.detach(self.calendar);
        host.dispatch(
            self.element,
            CustomEvent::instance(EventName::Close, self.element),
        );
    }

    fn render<H: DomHost>(&self, host: &mut H) {
        let html = render_calendar(&self.state, &self.options.render_options());
        host.set_inner_html(self.calendar, &html);
        if !self.options.inline && self.is_open {
            self.position(host);
        }
    }

    fn position<H: DomHost>(&self, host: &mut H) {
        let Some(input) = self.input else {
            return;
        };
        let (top, left) = compute_position(
            self.options.placement,
            host.bounding_rect(input),
            host.bounding_rect(self.calendar),
            host.viewport(),
        );
        host.set_position(self.calendar, top, left);
    }
}

/// Attaches a widget to every element carrying `attribute`.
///
/// Each widget starts from `options` overridden by the element's `data-*`
/// attributes.
pub fn initialize_all<H: DomHost>(
    host: &mut H,
    attribute: &str,
    options: &DatePickerOptions,
) -> Result<Vec<DatePickerWidget>, DomError> {
    host.query_all(attribute)
        .into_iter()
        .map(|element| {
            let options = options.clone().with_data_attributes(&*host, element);
            DatePickerWidget::new(&mut *host, element, options)
        })
        .collect()
}
