use alloc::string::String;

use crate::ThumbGeometry;

/// Computes where the scrollbar thumb sits for a given scroll position.
///
/// All values are whole pixels:
/// - `width = round(track * viewport / content)`, kept within `[1, track]`
/// - `left = floor((track - width) * offset / max)` with `max = content - viewport`
///
/// When the content is not wider than the viewport there is nothing to scroll and the thumb
/// fills the track. `offset` beyond `max` is treated as `max`, so at the end of the strip the
/// thumb is flush with the end of the track: `left + width == track`, with no rounding gap.
pub fn thumb_geometry(
    scroll_offset: u64,
    content_width: u64,
    viewport_width: u32,
    track_width: u32,
) -> ThumbGeometry {
    let view = viewport_width as u64;
    if content_width <= view {
        return ThumbGeometry {
            left: 0,
            width: track_width,
        };
    }
    if track_width == 0 {
        return ThumbGeometry::default();
    }

    let track = track_width as u128;
    let content = content_width as u128;
    let rounded = (track * view as u128 + content / 2) / content;
    let width = (rounded as u32).clamp(1, track_width);

    let available = (track_width - width) as u128;
    let max = (content_width - view) as u128;
    let offset = (scroll_offset as u128).min(max);
    let left = (available * offset / max) as u32;

    ThumbGeometry { left, width }
}

/// Inverse of [`thumb_geometry`]: maps a thumb left edge back to a scroll offset.
///
/// `thumb_left` is clamped to the available track travel. Returns `None` when the thumb cannot
/// move (nothing to scroll, or the thumb already fills the track).
pub fn offset_for_thumb_left(
    thumb_left: i64,
    content_width: u64,
    viewport_width: u32,
    track_width: u32,
) -> Option<u64> {
    let view = viewport_width as u64;
    if content_width <= view {
        return None;
    }
    let thumb = thumb_geometry(0, content_width, viewport_width, track_width);
    let available = track_width.saturating_sub(thumb.width) as u128;
    if available == 0 {
        return None;
    }
    let left = thumb_left.clamp(0, available as i64) as u128;
    let max = (content_width - view) as u128;
    Some(((left * max + available / 2) / available) as u64)
}

/// Interaction state of the thumb.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ThumbState {
    /// The thumb mirrors the scroll offset.
    #[default]
    Idle,
    /// The user holds the thumb; its position drives the scroll offset.
    DraggingThumb {
        /// Distance from the thumb's left edge to the press point.
        grab_x: f32,
    },
}

/// Paint and interaction state of the scrollbar. Geometry is never stored here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scrollbar {
    color: Option<String>,
    state: ThumbState,
}

impl Scrollbar {
    pub(crate) fn new(color: Option<String>) -> Self {
        Self {
            color,
            state: ThumbState::Idle,
        }
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns `true` if the color actually changed.
    pub(crate) fn set_color(&mut self, color: &str) -> bool {
        if self.color.as_deref() == Some(color) {
            return false;
        }
        self.color = Some(String::from(color));
        true
    }

    pub fn state(&self) -> ThumbState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ThumbState::DraggingThumb { .. })
    }

    /// Enters the dragging state if `x` hits `thumb`.
    pub(crate) fn press(&mut self, thumb: ThumbGeometry, x: f32) -> bool {
        if !thumb.contains(x) {
            return false;
        }
        self.state = ThumbState::DraggingThumb {
            grab_x: x - thumb.left as f32,
        };
        true
    }

    /// The new thumb left edge for a pointer at `x`, if the thumb is held.
    pub(crate) fn thumb_left_for(&self, x: f32) -> Option<i64> {
        match self.state {
            ThumbState::DraggingThumb { grab_x } => Some(round_to_i64(x - grab_x)),
            ThumbState::Idle => None,
        }
    }

    /// Returns `true` if the thumb was being dragged.
    pub(crate) fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = ThumbState::Idle;
        was_dragging
    }
}

/// Rounds half away from zero without relying on `std` float intrinsics.
pub(crate) fn round_to_i64(v: f32) -> i64 {
    let v = v as f64;
    if v >= 0.0 {
        (v + 0.5) as i64
    } else {
        (v - 0.5) as i64
    }
}
