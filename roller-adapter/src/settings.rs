use roller::{AutoAdvance, CarouselConfig, CarouselItem, MountTarget, TitleAlign};
use serde::{Deserialize, Serialize};

use crate::LinkLabels;

/// Page-level settings of the history roller.
///
/// Every field has a default, so a settings document only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollerSettings {
    pub container_id: String,
    pub parent_id: Option<String>,
    pub title: String,
    pub title_align: TitleAlign,
    pub expand_button_label: String,
    pub collapse_button_label: String,
    pub scroll_speed: f32,
    pub touch_resume_delay_ms: u64,
    pub infinite_scroll: bool,
    /// Applied after construction, see [`crate::try_mount_history_roller`].
    pub thumb_color: Option<String>,
    pub links: LinkLabels,
    pub item_width: u32,
    pub gap: u32,
    pub auto_advance: Option<AutoAdvance>,
}

impl Default for RollerSettings {
    fn default() -> Self {
        Self {
            container_id: String::from("history-roller"),
            parent_id: None,
            title: String::from("History"),
            title_align: TitleAlign::Left,
            expand_button_label: String::from("Read more"),
            collapse_button_label: String::from("Close"),
            scroll_speed: 1.0,
            touch_resume_delay_ms: 3_000,
            infinite_scroll: false,
            thumb_color: None,
            links: LinkLabels::default(),
            item_width: 320,
            gap: 24,
            auto_advance: None,
        }
    }
}

impl RollerSettings {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn mount_target(&self) -> MountTarget {
        let target = MountTarget::new(self.container_id.clone());
        match &self.parent_id {
            Some(parent) => target.with_parent(parent.clone()),
            None => target,
        }
    }

    /// Builds the carousel config for `items`. The thumb color is left out on purpose: it is
    /// applied to the constructed carousel instead.
    pub fn carousel_config(&self, items: Vec<CarouselItem>) -> CarouselConfig {
        CarouselConfig::new(items)
            .with_title(self.title.clone(), self.title_align)
            .with_button_labels(
                self.expand_button_label.clone(),
                self.collapse_button_label.clone(),
            )
            .with_scroll_speed(self.scroll_speed)
            .with_touch_resume_delay_ms(self.touch_resume_delay_ms)
            .with_infinite_scroll(self.infinite_scroll)
            .with_item_width(self.item_width)
            .with_gap(self.gap)
            .with_auto_advance(self.auto_advance)
    }
}
