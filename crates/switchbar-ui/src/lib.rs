//! # switchbar-ui
//!
//! Ratatui rendering for the switchbar widget.
//!
//! This crate turns the model in [`switchbar_core`] into terminal output:
//!
//! - [`SwitchTabsBar`] - The widget: labels, indicator, accessories,
//!   mouse and keyboard handling
//! - [`SwitchTabsState`] - Per-instance frame memory driving transitions
//! - [`layout`] - Segment geometry and hit testing
//!
//! ## Example
//!
//! ```ignore
//! use switchbar_core::Selection;
//! use switchbar_ui::{SwitchTabsBar, SwitchTabsState};
//!
//! let selection = Selection::new(0);
//! let bar = SwitchTabsBar::new(["Fleet A", "Fleet B"], selection.clone())
//!     .leading(|index| if eyes_open(index) { "◉" } else { "◌" })
//!     .on_leading_tap(toggle_eye);
//! let mut state = SwitchTabsState::new();
//!
//! loop {
//!     terminal.draw(|frame| frame.render_stateful_widget(&bar, area, &mut state))?;
//!
//!     if let Event::Mouse(mouse) = event::read()? {
//!         bar.handle_mouse(state.last_area(), mouse);
//!     }
//! }
//! ```
//!
//! ## Layout
//!
//! ```
//! use ratatui::layout::Rect;
//! use switchbar_core::Selection;
//! use switchbar_ui::{SwitchTabsBar, TabHit};
//!
//! let bar = SwitchTabsBar::new(["One", "Two"], Selection::new(0));
//! let area = Rect::new(0, 0, 20, bar.required_height());
//!
//! assert_eq!(bar.layout(area)[1].label, Rect::new(5, 0, 3, 1));
//! assert_eq!(bar.hit_test(area, 6, 1), Some(TabHit::Segment(1)));
//! ```

pub mod layout;
pub mod state;
pub mod widgets;

pub use layout::{SegmentLayout, SegmentMetrics, TabHit};
pub use state::SwitchTabsState;
pub use widgets::SwitchTabsBar;
