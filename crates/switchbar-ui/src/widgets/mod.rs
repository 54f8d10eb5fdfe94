//! Widgets of the switchbar UI crate
//!
//! - [`SwitchTabsBar`] - Segmented tab-switch bar with an animated
//!   indicator and optional leading accessories

pub mod switch_tabs_bar;

pub use switch_tabs_bar::{LeadingBuilder, LeadingTapHandler, SwitchTabsBar};
