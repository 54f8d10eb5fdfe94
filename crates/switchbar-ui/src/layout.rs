//! Segment layout and hit testing
//!
//! Segments are laid out left to right from the top-left corner of the
//! bar's area. Each one is a block:
//!
//! ```text
//!  <-h pad-><accessory> <label ><-h pad->
//! +-------------------------------------+   vertical padding
//! |         [o]         Fleet A         |   label row
//! |                                     |   indicator offset rows
//! |                     ╺━━━━━╸         |   indicator rows
//! +-------------------------------------+   vertical padding
//! ```
//!
//! Blocks are separated by the style's spacing. The indicator is as wide
//! as the label (minus the inset on each side), not as the block. Blocks
//! starting past the right edge are dropped, the rest are clipped.

use ratatui::layout::{Position, Rect};
use switchbar_core::StyleConfig;

/// Columns between an accessory and its label
pub const LEADING_GAP: u16 = 1;

/// Measured content of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentMetrics {
    /// Columns of the leading accessory; 0 means no accessory
    pub leading_width: u16,
    /// Columns of the rendered title
    pub label_width: u16,
}

/// Screen regions of one segment, already clipped to the bar's area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLayout {
    /// Position in the title list
    pub index: usize,
    /// Whole padded block; clicks here select the segment
    pub block: Rect,
    /// Accessory region, when the segment has one
    pub leading: Option<Rect>,
    /// Title text
    pub label: Rect,
    /// Capsule indicator under the title
    pub indicator: Rect,
}

/// Region a click landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabHit {
    /// The segment's block outside its accessory
    Segment(usize),
    /// The segment's leading accessory
    Leading(usize),
}

impl TabHit {
    /// Segment index of the hit
    pub fn index(self) -> usize {
        match self {
            TabHit::Segment(index) | TabHit::Leading(index) => index,
        }
    }
}

/// Lays out segments with the given measurements inside `area`.
///
/// # Example
///
/// ```
/// use ratatui::layout::Rect;
/// use switchbar_core::StyleConfig;
/// use switchbar_ui::layout::{layout_segments, SegmentMetrics};
///
/// let metrics = [
///     SegmentMetrics { leading_width: 0, label_width: 7 },
///     SegmentMetrics { leading_width: 0, label_width: 7 },
/// ];
/// let segments = layout_segments(Rect::new(0, 0, 40, 2), &metrics, &StyleConfig::default());
///
/// assert_eq!(segments[0].label, Rect::new(0, 0, 7, 1));
/// assert_eq!(segments[0].indicator, Rect::new(0, 1, 7, 1));
/// assert_eq!(segments[1].block.x, 9);
/// ```
#[must_use]
pub fn layout_segments(
    area: Rect,
    metrics: &[SegmentMetrics],
    style: &StyleConfig,
) -> Vec<SegmentLayout> {
    let mut segments = Vec::with_capacity(metrics.len());
    if area.is_empty() {
        return segments;
    }

    let block_height = style.block_height();
    let label_row = area.y.saturating_add(style.vertical_padding);
    let indicator_row = label_row
        .saturating_add(1)
        .saturating_add(style.indicator_offset);

    let mut x = area.x;
    for (index, m) in metrics.iter().enumerate() {
        if x >= area.right() {
            break;
        }

        let leading_span = if m.leading_width > 0 {
            m.leading_width.saturating_add(LEADING_GAP)
        } else {
            0
        };
        let block_width = style
            .horizontal_padding
            .saturating_mul(2)
            .saturating_add(leading_span)
            .saturating_add(m.label_width);

        let content_x = x.saturating_add(style.horizontal_padding);
        let label_x = content_x.saturating_add(leading_span);

        let leading = (m.leading_width > 0)
            .then(|| Rect::new(content_x, label_row, m.leading_width, 1).intersection(area));

        segments.push(SegmentLayout {
            index,
            block: Rect::new(x, area.y, block_width, block_height).intersection(area),
            leading,
            label: Rect::new(label_x, label_row, m.label_width, 1).intersection(area),
            indicator: indicator_rect(label_x, m.label_width, indicator_row, style)
                .intersection(area),
        });

        x = x.saturating_add(block_width).saturating_add(style.spacing);
    }

    segments
}

fn indicator_rect(label_x: u16, label_width: u16, row: u16, style: &StyleConfig) -> Rect {
    if label_width == 0 || style.indicator_height == 0 {
        return Rect::new(label_x, row, 0, 0);
    }
    let width = label_width
        .saturating_sub(style.indicator_inset.saturating_mul(2))
        .max(1);
    let x = label_x.saturating_add((label_width - width) / 2);
    Rect::new(x, row, width, style.indicator_height)
}

/// Finds the region under `(column, row)`.
///
/// The accessory takes precedence over the block that contains it.
pub fn hit_test(segments: &[SegmentLayout], column: u16, row: u16) -> Option<TabHit> {
    let position = Position::new(column, row);
    segments.iter().find_map(|segment| {
        if segment.leading.is_some_and(|rect| rect.contains(position)) {
            Some(TabHit::Leading(segment.index))
        } else if segment.block.contains(position) {
            Some(TabHit::Segment(segment.index))
        } else {
            None
        }
    })
}

/// Rows needed to show every segment in full
pub fn required_height(style: &StyleConfig) -> u16 {
    style.block_height()
}
