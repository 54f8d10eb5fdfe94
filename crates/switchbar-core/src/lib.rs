//! # switchbar-core
//!
//! Framework-agnostic building blocks of the switchbar widget.
//!
//! ## Overview
//!
//! A switch bar is a row of labeled segments with a capsule indicator under
//! the selected one. This crate holds everything about it that is not
//! drawing:
//!
//! - [`Selection`] - Host-owned, observable selection index
//! - [`StyleConfig`] / [`TabFont`] - Colors, font, spacing, padding and
//!   indicator geometry, loadable from TOML
//! - [`Theme`] - Named palettes a style can be derived from
//! - [`Transition`] / [`Easing`] - Eased selection changes
//! - [`TabEvent`] - What an input did
//! - [`CoreError`] - Configuration errors
//!
//! ## Example
//!
//! ```
//! use switchbar_core::{Selection, StyleConfig, Theme};
//!
//! let selection = Selection::new(0);
//! let mut changes = selection.subscribe();
//!
//! let style = StyleConfig::themed(&Theme::nord());
//! assert!(style.validate().is_ok());
//!
//! selection.set(1);
//! assert_eq!(changes.try_recv().unwrap(), 1);
//! ```

pub mod color;
pub mod error;
pub mod event;
pub mod selection;
pub mod style;
pub mod theme;
pub mod transition;

pub use color::{lerp_color, parse_color};
pub use error::{CoreError, CoreResult};
pub use event::TabEvent;
pub use selection::Selection;
pub use style::{StyleConfig, TabFont};
pub use theme::{Theme, ThemeColors};
pub use transition::{Easing, Transition};
