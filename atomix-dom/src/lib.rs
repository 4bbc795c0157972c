//! A document-driven Atomix date picker.
//!
//! The widget renders its calendar as an HTML string, keeps one delegated
//! click listener on it, and talks to the page only through the
//! [`DomHost`] trait. [`MemoryDocument`] implements the trait in memory.
//!
//! # Usage
//!
//! ```
//! use atomix_calendar::CalendarDate;
//! use atomix_dom::{
//!     ClickedElement, DatePickerOptions, DatePickerWidget, DomHost, MemoryDocument,
//! };
//!
//! let mut doc = MemoryDocument::new();
//! let element = doc.create_element("div");
//! let input = doc.create_element("input");
//! doc.append_child(element, input);
//! doc.append_to_body(element);
//! doc.set_input_value(input, "03/01/2024");
//!
//! let mut picker =
//!     DatePickerWidget::new(&mut doc, element, DatePickerOptions::default()).unwrap();
//! picker.handle_input_focus(&mut doc);
//! assert!(picker.is_open());
//!
//! let day = ClickedElement::new("c-datepicker__day").text("15");
//! picker.handle_calendar_click(&mut doc, &[day]);
//! assert_eq!(picker.date(), CalendarDate::new(2024, 3, 15));
//! assert_eq!(doc.input_value(input), "03/15/2024");
//! assert!(!picker.is_open());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod click;
pub mod events;
pub mod host;
pub mod memory;
pub mod options;
pub mod position;
pub mod render;
pub mod widget;

pub use click::{ClickTarget, ClickedElement};
pub use events::{CustomEvent, EventDetail, EventName};
pub use host::{DomHost, NodeId, Rect, Viewport};
pub use memory::MemoryDocument;
pub use options::{DatePickerOptions, Placement};
pub use render::{RenderOptions, render_calendar};
pub use widget::{DatePickerWidget, DomError, initialize_all};
