use alloc::string::String;

/// One entry of the carousel strip.
///
/// `id` must be unique within a carousel; `title` and `image` must be non-empty. These are
/// checked by [`crate::Carousel::create`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CarouselItem {
    pub id: String,
    /// Short label shown on the collapsed face.
    pub title: String,
    pub image: String,
    /// Rich content shown when the item is expanded. May be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description_html: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accent_color: String,
}

impl CarouselItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            description_html: String::new(),
            accent_color: String::new(),
        }
    }

    pub fn with_description_html(mut self, description_html: impl Into<String>) -> Self {
        self.description_html = description_html.into();
        self
    }

    pub fn with_accent_color(mut self, accent_color: impl Into<String>) -> Self {
        self.accent_color = accent_color.into();
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TitleAlign {
    #[default]
    Left,
    Right,
}

/// Where a drag gesture came from.
///
/// Only touch drags arm the post-touch resume delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragSource {
    Pointer,
    Touch,
}

/// Geometry measured by the host for one carousel container.
///
/// Hosts must read these values synchronously with the event they forward, see
/// [`crate::Carousel::handle_input`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Visible width of the scrolling strip.
    pub viewport_width: u32,
    /// Width of the scrollbar track the thumb moves in.
    pub track_width: u32,
}

impl Layout {
    pub fn new(viewport_width: u32, track_width: u32) -> Self {
        Self {
            viewport_width,
            track_width,
        }
    }
}

/// Thumb position inside the scrollbar track, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbGeometry {
    pub left: u32,
    pub width: u32,
}

impl ThumbGeometry {
    pub fn right(&self) -> u32 {
        self.left.saturating_add(self.width)
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.left as f32 && x < self.right() as f32
    }
}

/// Placement of one item on the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    pub index: usize,
    /// Start offset on the strip. In infinite mode, slots repeated after the wrap point start at
    /// or beyond the cycle width.
    pub start: u64,
    pub width: u32,
    pub expanded: bool,
}

impl ItemSlot {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.width as u64)
    }
}
