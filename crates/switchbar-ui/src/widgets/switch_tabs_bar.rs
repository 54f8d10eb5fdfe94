//! Segmented tab-switch bar with an animated underline indicator
//!
//! The [`SwitchTabsBar`] widget renders a horizontal row of labeled
//! segments. The segment whose index equals the shared
//! [`Selection`] is drawn in the accent color with a capsule indicator
//! under its label; the others use the inactive color and no indicator.
//!
//! ## Features
//!
//! - Any number of segments, including none
//! - Indicator exactly as wide as the label text
//! - Eased color and indicator transition on every selection change
//! - Optional per-segment leading accessory with its own tap handler
//! - Fluent configuration on a cloneable value
//!
//! ## Example
//!
//! ```
//! use ratatui::prelude::*;
//! use switchbar_core::Selection;
//! use switchbar_ui::{SwitchTabsBar, SwitchTabsState};
//!
//! let selection = Selection::new(0);
//! let bar = SwitchTabsBar::new(["Fleet A", "Fleet B"], selection.clone())
//!     .accent_color(Color::Cyan)
//!     .spacing(3);
//!
//! let area = Rect::new(0, 0, 30, bar.required_height());
//! let mut buf = Buffer::empty(area);
//! let mut state = SwitchTabsState::new();
//! StatefulWidget::render(&bar, area, &mut buf, &mut state);
//!
//! assert_eq!(buf[(0, 0)].fg, Color::Cyan);
//! ```

use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use switchbar_core::{lerp_color, Easing, Selection, StyleConfig, TabEvent, TabFont};

use crate::layout::{self, SegmentLayout, SegmentMetrics, TabHit};
use crate::state::SwitchTabsState;

/// Builds the leading accessory for a segment index
pub type LeadingBuilder = Rc<dyn Fn(usize) -> Line<'static>>;

/// Side effect run when a segment's accessory is tapped
pub type LeadingTapHandler = Rc<dyn Fn(usize)>;

const CAP_LEFT: &str = "╺";
const CAP_RIGHT: &str = "╸";
const BAR: &str = "━";

/// Segmented tab-switch bar
///
/// Configuration methods take and return the widget by value; clone first
/// to keep the unconfigured value around.
///
/// ```
/// use ratatui::style::Color;
/// use switchbar_core::Selection;
/// use switchbar_ui::SwitchTabsBar;
///
/// let a = SwitchTabsBar::new(["One", "Two"], Selection::new(0));
/// let b = a.clone().accent_color(Color::Red);
/// assert_ne!(a.style_config().accent, b.style_config().accent);
/// ```
#[derive(Clone)]
pub struct SwitchTabsBar {
    titles: Vec<String>,
    selection: Selection,
    style: StyleConfig,
    leading: Option<LeadingBuilder>,
    on_leading_tap: LeadingTapHandler,
}

impl SwitchTabsBar {
    /// Creates a bar over `titles` bound to `selection`
    ///
    /// # Arguments
    ///
    /// * `titles` - Segment labels in display order; the order defines
    ///   each segment's index
    /// * `selection` - Shared selection the bar reads and writes
    pub fn new<I, S>(titles: I, selection: Selection) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SwitchTabsBar {
            titles: titles.into_iter().map(Into::into).collect(),
            selection,
            style: StyleConfig::default(),
            leading: None,
            on_leading_tap: Rc::new(|_| {}),
        }
    }

    /// Sets the selected label and indicator color
    pub fn accent_color(mut self, color: Color) -> Self {
        self.style.accent = color;
        self
    }

    /// Sets the unselected label color
    pub fn inactive_color(mut self, color: Color) -> Self {
        self.style.inactive = color;
        self
    }

    /// Sets a background fill for the whole bar area
    pub fn background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    /// Sets the label attributes, applied to every segment
    pub fn font(mut self, font: TabFont) -> Self {
        self.style.font = font;
        self
    }

    /// Sets the columns between adjacent segments
    pub fn spacing(mut self, columns: u16) -> Self {
        self.style.spacing = columns;
        self
    }

    /// Sets the padding around each segment's content
    pub fn padding(mut self, vertical: u16, horizontal: u16) -> Self {
        self.style.vertical_padding = vertical;
        self.style.horizontal_padding = horizontal;
        self
    }

    /// Sets indicator thickness and its distance below the label, in rows
    pub fn indicator(mut self, height: u16, offset: u16) -> Self {
        self.style.indicator_height = height;
        self.style.indicator_offset = offset;
        self
    }

    /// Trims the indicator by `columns` at each end
    pub fn indicator_inset(mut self, columns: u16) -> Self {
        self.style.indicator_inset = columns;
        self
    }

    /// Sets how long a selection change animates
    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.style.transition_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the transition timing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.style.easing = easing;
        self
    }

    /// Replaces the whole style bundle
    pub fn style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Registers a leading accessory builder
    ///
    /// The builder runs once per segment per frame. A segment whose
    /// accessory is empty gets no accessory region.
    ///
    /// # Example
    ///
    /// ```
    /// use switchbar_core::Selection;
    /// use switchbar_ui::SwitchTabsBar;
    ///
    /// let bar = SwitchTabsBar::new(["A", "B"], Selection::new(0))
    ///     .leading(|index| if index == 0 { "◉" } else { "◌" })
    ///     .on_leading_tap(|index| println!("accessory {index}"));
    /// assert!(bar.has_leading());
    /// ```
    pub fn leading<F, L>(mut self, builder: F) -> Self
    where
        F: Fn(usize) -> L + 'static,
        L: Into<Line<'static>>,
    {
        self.leading = Some(Rc::new(move |index| builder(index).into()));
        self
    }

    /// Registers the side effect run when an accessory is tapped
    pub fn on_leading_tap<F>(mut self, handler: F) -> Self
    where
        F: Fn(usize) + 'static,
    {
        self.on_leading_tap = Rc::new(handler);
        self
    }

    /// Segment titles in display order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether there are no segments
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Current style bundle
    pub fn style_config(&self) -> &StyleConfig {
        &self.style
    }

    /// The bound selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether a leading accessory builder is registered
    pub fn has_leading(&self) -> bool {
        self.leading.is_some()
    }

    /// Rows needed to show labels and indicators in full
    pub fn required_height(&self) -> u16 {
        layout::required_height(&self.style)
    }

    /// Segment regions inside `area`
    pub fn layout(&self, area: Rect) -> Vec<SegmentLayout> {
        let accessories = self.accessories();
        self.layout_with(area, &accessories)
    }

    /// Region of the bar under `(column, row)` when rendered into `area`
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<TabHit> {
        layout::hit_test(&self.layout(area), column, row)
    }

    /// Applies a click at `(column, row)`.
    ///
    /// A click on a segment writes its index to the selection, even when it
    /// is already selected. A click on an accessory runs the tap handler and
    /// leaves the selection alone.
    pub fn click(&self, area: Rect, column: u16, row: u16) -> Option<TabEvent> {
        match self.hit_test(area, column, row)? {
            TabHit::Segment(index) => {
                self.selection.set(index);
                Some(TabEvent::Selected(index))
            }
            TabHit::Leading(index) => {
                tracing::debug!(index, "leading accessory tapped");
                (self.on_leading_tap)(index);
                Some(TabEvent::LeadingTapped(index))
            }
        }
    }

    /// Handles a left-button press; other mouse events are ignored
    pub fn handle_mouse(&self, area: Rect, event: MouseEvent) -> Option<TabEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(area, event.column, event.row),
            _ => None,
        }
    }

    /// Keyboard navigation
    ///
    /// Left/Right move the selection with wrap-around, Home/End jump to the
    /// first/last segment. Other keys and non-press events are ignored.
    pub fn handle_key(&self, key: KeyEvent) -> Option<TabEvent> {
        if key.kind != KeyEventKind::Press || self.is_empty() {
            return None;
        }
        let index = match key.code {
            KeyCode::Right => self.selection.select_next(self.len())?,
            KeyCode::Left => self.selection.select_previous(self.len())?,
            KeyCode::Home => {
                self.selection.set(0);
                0
            }
            KeyCode::End => {
                let last = self.len() - 1;
                self.selection.set(last);
                last
            }
            _ => return None,
        };
        Some(TabEvent::Selected(index))
    }

    /// Renders the bar as it looks at `now`.
    ///
    /// [`StatefulWidget::render`] calls this with [`Instant::now`]; tests and
    /// recorders pass their own clock.
    pub fn render_at(
        &self,
        area: Rect,
        buf: &mut Buffer,
        state: &mut SwitchTabsState,
        now: Instant,
    ) {
        let selected = self.selection.get();
        state.observe(selected, now, &self.style);
        state.set_area(area);

        if area.is_empty() || self.is_empty() {
            return;
        }
        if let Some(background) = self.style.background {
            buf.set_style(area, Style::default().bg(background));
        }

        let accessories = self.accessories();
        for segment in self.layout_with(area, &accessories) {
            let emphasis = state.emphasis(segment.index, selected, now);

            if let (Some(rect), Some(line)) = (segment.leading, &accessories[segment.index]) {
                if !rect.is_empty() {
                    buf.set_line(rect.x, rect.y, line, rect.width);
                }
            }

            if !segment.label.is_empty() {
                let color = lerp_color(self.style.inactive, self.style.accent, emphasis);
                let style = Style::default()
                    .fg(color)
                    .add_modifier(self.style.font.modifier());
                buf.set_stringn(
                    segment.label.x,
                    segment.label.y,
                    &self.titles[segment.index],
                    usize::from(segment.label.width),
                    style,
                );
            }

            self.render_indicator(segment.indicator, emphasis, buf);
        }
    }

    /// Draws the capsule, shrunk towards its centre by `emphasis`.
    ///
    /// Terminal cells have no opacity, so the width change stands in for
    /// the indicator fading in and out. Settled indicators span the label.
    /// Nothing is drawn at zero emphasis.
    fn render_indicator(&self, rect: Rect, emphasis: f32, buf: &mut Buffer) {
        if rect.is_empty() || emphasis <= 0.0 {
            return;
        }
        let full = f32::from(rect.width);
        let width = ((full * emphasis.min(1.0)).round() as u16).clamp(1, rect.width);
        let x = rect.x + (rect.width - width) / 2;
        let capsule = capsule(width);
        let style = Style::default().fg(self.style.accent);
        for y in rect.top()..rect.bottom() {
            buf.set_stringn(x, y, &capsule, usize::from(width), style);
        }
    }

    fn accessories(&self) -> Vec<Option<Line<'static>>> {
        match &self.leading {
            Some(builder) => (0..self.titles.len()).map(|i| Some(builder(i))).collect(),
            None => vec![None; self.titles.len()],
        }
    }

    fn layout_with(&self, area: Rect, accessories: &[Option<Line<'static>>]) -> Vec<SegmentLayout> {
        let metrics: Vec<SegmentMetrics> = self
            .titles
            .iter()
            .zip(accessories)
            .map(|(title, accessory)| SegmentMetrics {
                leading_width: accessory.as_ref().map_or(0, |line| cells(line.width())),
                label_width: cells(Span::raw(title.as_str()).width()),
            })
            .collect();
        layout::layout_segments(area, &metrics, &self.style)
    }
}

fn cells(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn capsule(width: u16) -> String {
    match width {
        0 => String::new(),
        1 => BAR.to_string(),
        n => {
            let middle = BAR.repeat(usize::from(n - 2));
            format!("{CAP_LEFT}{middle}{CAP_RIGHT}")
        }
    }
}

impl StatefulWidget for &SwitchTabsBar {
    type State = SwitchTabsState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.render_at(area, buf, state, Instant::now());
    }
}

impl fmt::Debug for SwitchTabsBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchTabsBar")
            .field("titles", &self.titles)
            .field("selection", &self.selection.get())
            .field("style", &self.style)
            .field("has_leading", &self.leading.is_some())
            .finish_non_exhaustive()
    }
}
