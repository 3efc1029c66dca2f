use crate::DragSource;

/// Content-drag state of a carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Inactive,
    Active {
        /// Scroll offset when the drag started.
        origin_offset: u64,
        /// Pointer x when the drag started.
        origin_x: f32,
        source: DragSource,
    },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// A lightweight, serializable snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub is_dragging: bool,
    pub is_animating: bool,
}
