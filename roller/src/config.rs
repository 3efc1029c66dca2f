use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::carousel::Carousel;
use crate::{AutoAdvance, CarouselItem, TitleAlign};

/// A callback fired after the carousel's state changes (offset, expansion, drag, color, layout).
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the change callback is stored in an `Arc`.
pub struct CarouselConfig {
    /// Items in display order.
    pub items: Vec<CarouselItem>,
    pub title: String,
    pub title_align: TitleAlign,
    pub expand_button_label: String,
    pub collapse_button_label: String,

    /// Multiplier applied when translating horizontal drag movement into scroll movement.
    ///
    /// Must be positive and finite.
    pub scroll_speed: f32,

    /// How long auto-advance stays paused after a touch drag ends.
    pub touch_resume_delay_ms: u64,

    /// When set, the strip is circular: the last item is followed by the first.
    pub infinite_scroll: bool,

    /// Initial thumb color. Can be changed later with `Carousel::update_scrollbar_color`.
    pub scrollbar_thumb_color: Option<String>,

    /// Width assumed for every item until the host measures it.
    pub item_width: u32,

    /// Space between items. In infinite mode the same gap separates the last and first items.
    pub gap: u32,

    pub auto_advance: Option<AutoAdvance>,

    pub on_change: Option<OnChangeCallback>,
}

impl Clone for CarouselConfig {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            title: self.title.clone(),
            title_align: self.title_align,
            expand_button_label: self.expand_button_label.clone(),
            collapse_button_label: self.collapse_button_label.clone(),
            scroll_speed: self.scroll_speed,
            touch_resume_delay_ms: self.touch_resume_delay_ms,
            infinite_scroll: self.infinite_scroll,
            scrollbar_thumb_color: self.scrollbar_thumb_color.clone(),
            item_width: self.item_width,
            gap: self.gap,
            auto_advance: self.auto_advance,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselConfig {
    pub fn new(items: Vec<CarouselItem>) -> Self {
        Self {
            items,
            title: String::new(),
            title_align: TitleAlign::Left,
            expand_button_label: String::from("Read more"),
            collapse_button_label: String::from("Close"),
            scroll_speed: 1.0,
            touch_resume_delay_ms: 0,
            infinite_scroll: false,
            scrollbar_thumb_color: None,
            item_width: 300,
            gap: 0,
            auto_advance: None,
            on_change: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>, align: TitleAlign) -> Self {
        self.title = title.into();
        self.title_align = align;
        self
    }

    pub fn with_button_labels(
        mut self,
        expand_button_label: impl Into<String>,
        collapse_button_label: impl Into<String>,
    ) -> Self {
        self.expand_button_label = expand_button_label.into();
        self.collapse_button_label = collapse_button_label.into();
        self
    }

    pub fn with_scroll_speed(mut self, scroll_speed: f32) -> Self {
        self.scroll_speed = scroll_speed;
        self
    }

    pub fn with_touch_resume_delay_ms(mut self, delay_ms: u64) -> Self {
        self.touch_resume_delay_ms = delay_ms;
        self
    }

    pub fn with_infinite_scroll(mut self, infinite_scroll: bool) -> Self {
        self.infinite_scroll = infinite_scroll;
        self
    }

    pub fn with_scrollbar_thumb_color(mut self, color: Option<impl Into<String>>) -> Self {
        self.scrollbar_thumb_color = color.map(Into::into);
        self
    }

    pub fn with_item_width(mut self, item_width: u32) -> Self {
        self.item_width = item_width;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_auto_advance(mut self, auto_advance: Option<AutoAdvance>) -> Self {
        self.auto_advance = auto_advance;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselConfig")
            .field("items", &self.items.len())
            .field("title", &self.title)
            .field("title_align", &self.title_align)
            .field("scroll_speed", &self.scroll_speed)
            .field("touch_resume_delay_ms", &self.touch_resume_delay_ms)
            .field("infinite_scroll", &self.infinite_scroll)
            .field("scrollbar_thumb_color", &self.scrollbar_thumb_color)
            .field("item_width", &self.item_width)
            .field("gap", &self.gap)
            .field("auto_advance", &self.auto_advance)
            .finish_non_exhaustive()
    }
}
