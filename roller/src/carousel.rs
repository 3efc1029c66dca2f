use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::fenwick::Fenwick;
use crate::scrollbar::{Scrollbar, offset_for_thumb_left, round_to_i64, thumb_geometry};
use crate::{
    CarouselConfig, CarouselItem, CreateError, Detached, DragSource, DragState, Easing, Host,
    ItemSlot, Layout, MountTarget, ScrollState, ThumbGeometry, Tween,
};

/// Input forwarded by the host, see [`Carousel::handle_input`].
///
/// Content coordinates (`PointerDown`/`PointerMove`) are relative to the viewport; thumb
/// coordinates (`ThumbDown`/`ThumbMove`) are relative to the start of the scrollbar track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { source: DragSource, x: f32 },
    PointerMove { x: f32 },
    /// Release anywhere on the page. Ends a content drag or a thumb drag.
    PointerUp,
    /// Pointer/touch cancel, or the pointer leaving the carousel.
    PointerCancel,
    ThumbDown { x: f32 },
    ThumbMove { x: f32 },
    Wheel { delta: i64 },
    /// The host's scroll container reports its own scroll position.
    NativeScroll { offset: u64 },
}

/// A headless, horizontally scrolling carousel.
///
/// This type holds no UI objects. The host forwards input through [`Carousel::handle_input`]
/// (or the individual methods behind it), calls [`Carousel::tick`] from its frame loop, and
/// paints from [`Carousel::scroll_offset`], [`Carousel::thumb`] and the item slots.
///
/// The handle is owned by whoever created it; there is no global instance.
#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    container_id: String,
    parent_id: Option<String>,
    layout: Layout,

    widths: Vec<u32>,
    sums: Fenwick,

    scroll_offset: u64,
    expanded: Option<String>,
    drag: DragState,
    scrollbar: Scrollbar,

    tween: Option<Tween>,
    resume_at_ms: Option<u64>,
    last_advance_ms: Option<u64>,

    detached: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Builds a carousel bound to `target.container_id` on `host`.
    ///
    /// Fails with [`CreateError::ContainerMissing`] if the host does not know the container, and
    /// with the other variants if the config breaks an item or speed invariant.
    pub fn create(
        config: CarouselConfig,
        host: &impl Host,
        target: &MountTarget,
    ) -> Result<Self, CreateError> {
        validate(&config)?;

        let Some(layout) = host.layout(&target.container_id) else {
            rwarn!(container = %target.container_id, "Carousel::create: container not found");
            return Err(CreateError::ContainerMissing {
                id: target.container_id.clone(),
            });
        };

        if let Some(parent) = &target.parent_id {
            if host.layout(parent).is_none() {
                rwarn!(parent = %parent, "Carousel::create: parent element not found");
            }
        }

        let widths = alloc::vec![config.item_width; config.items.len()];
        let sums = Fenwick::from_widths(&widths, config.gap);
        let scrollbar = Scrollbar::new(config.scrollbar_thumb_color.clone());

        rdebug!(
            container = %target.container_id,
            items = config.items.len(),
            infinite = config.infinite_scroll,
            viewport = layout.viewport_width,
            track = layout.track_width,
            "Carousel::create"
        );

        Ok(Self {
            config,
            container_id: target.container_id.clone(),
            parent_id: target.parent_id.clone(),
            layout,
            widths,
            sums,
            scroll_offset: 0,
            expanded: None,
            drag: DragState::Inactive,
            scrollbar,
            tween: None,
            resume_at_ms: None,
            last_advance_ms: None,
            detached: false,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    /// Ends the carousel's life and hands back its config.
    pub fn detach(self) -> CarouselConfig {
        rdebug!(container = %self.container_id, "Carousel::detach");
        self.config
    }

    /// `true` once a host-driven call found the container removed. A detached carousel ignores
    /// input and ticks.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Measures the container on `host`, detaching for good if the host no longer knows it.
    fn measure_container(&mut self, host: &impl Host) -> Result<Layout, Detached> {
        if !self.detached {
            if let Some(layout) = host.layout(&self.container_id) {
                return Ok(layout);
            }
            rdebug!(container = %self.container_id, "container removed, carousel detached");
            self.detached = true;
            self.drag = DragState::Inactive;
            self.scrollbar.release();
            self.tween = None;
            self.resume_at_ms = None;
        }
        Err(Detached {
            id: self.container_id.clone(),
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.config.items
    }

    pub fn item(&self, index: usize) -> Option<&CarouselItem> {
        self.config.items.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.config.items.iter().position(|it| it.id == id)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.config.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Dispatches one input event.
    ///
    /// `layout` must be measured by the host when the event fires; it replaces the previous
    /// layout before the event is applied. Returns `true` if the event changed anything.
    pub fn handle_input(&mut self, event: InputEvent, layout: Layout, now_ms: u64) -> bool {
        rtrace!(?event, now_ms, "handle_input");
        if self.detached {
            return false;
        }
        let mut handled = false;
        self.batch_update(|c| {
            c.set_layout(layout);
            handled = match event {
                InputEvent::PointerDown { source, x } => c.begin_drag(source, x),
                InputEvent::PointerMove { x } => c.drag_to(x),
                InputEvent::PointerUp => c.end_thumb_drag() || c.end_drag(now_ms),
                InputEvent::PointerCancel => c.end_thumb_drag() || c.cancel_drag(now_ms),
                InputEvent::ThumbDown { x } => c.begin_thumb_drag(x),
                InputEvent::ThumbMove { x } => c.thumb_drag_to(x),
                InputEvent::Wheel { delta } => c.scroll_by(delta),
                InputEvent::NativeScroll { offset } => c.on_native_scroll(offset),
            };
        });
        handled
    }

    /// Like [`Carousel::handle_input`], with the layout measured on `host` at the event.
    ///
    /// Fails with [`Detached`] once the container has been removed from the host; the carousel
    /// then stays detached.
    pub fn handle_host_input(
        &mut self,
        host: &impl Host,
        event: InputEvent,
        now_ms: u64,
    ) -> Result<bool, Detached> {
        let layout = self.measure_container(host)?;
        Ok(self.handle_input(event, layout, now_ms))
    }

    /// Like [`Carousel::tick`], re-measuring the container on `host` first.
    pub fn tick_host(&mut self, host: &impl Host, now_ms: u64) -> Result<Option<u64>, Detached> {
        let layout = self.measure_container(host)?;
        let mut moved = None;
        self.batch_update(|c| {
            c.set_layout(layout);
            moved = c.tick(now_ms);
        });
        Ok(moved)
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        let offset = self.normalize_offset(self.scroll_offset as i128);
        if !self.set_offset(offset) {
            self.notify();
        }
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_dragging: self.drag.is_active() || self.scrollbar.is_dragging(),
            is_animating: self.tween.is_some(),
        }
    }

    /// Total width of the strip: all items plus the gaps between them.
    pub fn content_width(&self) -> u64 {
        self.sums.total()
    }

    /// Length of one lap in infinite mode: the content width plus the gap closing the loop.
    pub fn cycle_width(&self) -> u64 {
        if self.config.infinite_scroll && !self.widths.is_empty() {
            self.sums.total().saturating_add(self.config.gap as u64)
        } else {
            self.sums.total()
        }
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.content_width()
            .saturating_sub(self.layout.viewport_width as u64)
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_width() > self.layout.viewport_width as u64
    }

    /// Maps any offset onto the valid range: wrapped in infinite mode, clamped otherwise.
    pub fn normalize_offset(&self, offset: i128) -> u64 {
        if !self.is_scrollable() {
            return 0;
        }
        if self.config.infinite_scroll {
            let cycle = self.cycle_width() as i128;
            return offset.rem_euclid(cycle) as u64;
        }
        offset.clamp(0, self.max_scroll_offset() as i128) as u64
    }

    fn set_offset(&mut self, offset: u64) -> bool {
        if self.scroll_offset == offset {
            return false;
        }
        self.scroll_offset = offset;
        self.notify();
        true
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Starts a content drag at viewport x.
    ///
    /// Cancels any running animation. A touch start also cancels a pending auto-advance resume.
    pub fn begin_drag(&mut self, source: DragSource, x: f32) -> bool {
        if self.scrollbar.is_dragging() {
            return false;
        }
        self.tween = None;
        if source == DragSource::Touch {
            self.resume_at_ms = None;
        }
        self.drag = DragState::Active {
            origin_offset: self.scroll_offset,
            origin_x: x,
            source,
        };
        rtrace!(?source, x, offset = self.scroll_offset, "begin_drag");
        self.notify();
        true
    }

    pub fn drag_to(&mut self, x: f32) -> bool {
        let DragState::Active {
            origin_offset,
            origin_x,
            ..
        } = self.drag
        else {
            return false;
        };
        let delta = round_to_i64((origin_x - x) * self.config.scroll_speed);
        let offset = self.normalize_offset(origin_offset as i128 + delta as i128);
        self.set_offset(offset)
    }

    /// Releases a content drag, keeping the current offset.
    pub fn end_drag(&mut self, now_ms: u64) -> bool {
        self.finish_drag(now_ms)
    }

    /// Aborts a content drag. Offsets already applied by `drag_to` are kept.
    pub fn cancel_drag(&mut self, now_ms: u64) -> bool {
        self.finish_drag(now_ms)
    }

    fn finish_drag(&mut self, now_ms: u64) -> bool {
        let DragState::Active { source, .. } = self.drag else {
            return false;
        };
        self.drag = DragState::Inactive;
        self.last_advance_ms = Some(now_ms);
        if source == DragSource::Touch && self.config.touch_resume_delay_ms > 0 {
            self.resume_at_ms = Some(now_ms.saturating_add(self.config.touch_resume_delay_ms));
        }
        rtrace!(?source, offset = self.scroll_offset, now_ms, "finish_drag");
        self.notify();
        true
    }

    /// Applies a relative scroll (e.g. wheel). Ignored while a drag is active.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.tween = None;
        let offset = self.normalize_offset(self.scroll_offset as i128 + delta as i128);
        self.set_offset(offset)
    }

    /// Accepts a scroll position reported by the host's scroll container.
    ///
    /// During a drag these events come from the drag itself and are applied as-is; any running
    /// animation is cancelled.
    pub fn on_native_scroll(&mut self, offset: u64) -> bool {
        self.tween = None;
        let offset = self.normalize_offset(offset as i128);
        self.set_offset(offset)
    }

    /// Jumps to an item's start. Returns the applied offset, or `None` while dragging or when
    /// the id is unknown.
    pub fn scroll_to_item(&mut self, id: &str) -> Option<u64> {
        if self.is_dragging() {
            return None;
        }
        let start = self.item_start(self.index_of(id)?)?;
        self.tween = None;
        let offset = self.normalize_offset(start as i128);
        self.set_offset(offset);
        Some(offset)
    }

    /// Starts an animated scroll to an item's start. Returns the target offset.
    pub fn animate_to_item(
        &mut self,
        id: &str,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<u64> {
        if self.is_dragging() {
            return None;
        }
        let start = self.item_start(self.index_of(id)?)?;
        let to = self.normalize_offset(start as i128);
        self.tween = Some(Tween::new(
            self.scroll_offset,
            to,
            now_ms,
            duration_ms,
            easing,
        ));
        self.notify();
        Some(to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    fn is_dragging(&self) -> bool {
        self.drag.is_active() || self.scrollbar.is_dragging()
    }

    /// When auto-advance resumes after a touch drag, if a resume is pending.
    pub fn resume_at_ms(&self) -> Option<u64> {
        self.resume_at_ms
    }

    /// Advances animations and auto-advance.
    ///
    /// Returns the new offset when an animation moved it. Does nothing while a drag is active.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        if self.detached || self.is_dragging() {
            return None;
        }
        if self.tween.is_some() {
            return self.step_tween(now_ms);
        }

        if let Some(resume_at) = self.resume_at_ms {
            if now_ms < resume_at {
                return None;
            }
            rtrace!(now_ms, "auto-advance resumed");
            self.resume_at_ms = None;
            self.last_advance_ms = Some(now_ms);
            return None;
        }
        let auto = self.config.auto_advance?;

        let last = *self.last_advance_ms.get_or_insert(now_ms);
        if now_ms.saturating_sub(last) < auto.interval_ms {
            return None;
        }
        self.last_advance_ms = Some(now_ms);
        let to = self.next_advance_target()?;
        self.tween = Some(Tween::new(
            self.scroll_offset,
            to,
            now_ms,
            auto.duration_ms,
            auto.easing,
        ));
        self.step_tween(now_ms)
    }

    fn step_tween(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween?;
        let offset = self.normalize_offset(tween.sample(now_ms) as i128);
        self.set_offset(offset);
        if tween.is_done(now_ms) {
            self.tween = None;
            self.last_advance_ms = Some(now_ms);
            self.notify();
        }
        Some(self.scroll_offset)
    }

    fn next_advance_target(&self) -> Option<u64> {
        let count = self.widths.len();
        if count == 0 || !self.is_scrollable() {
            return None;
        }
        let next = self.index_at_offset(self.scroll_offset)? + 1;
        if self.config.infinite_scroll {
            if next >= count {
                return Some(self.cycle_width());
            }
            return self.item_start(next);
        }
        let max = self.max_scroll_offset();
        if self.scroll_offset >= max {
            return Some(0);
        }
        Some(self.item_start(next).unwrap_or(max).min(max))
    }

    /// Current thumb geometry, derived from offset, content width and layout.
    ///
    /// In infinite mode the thumb shows `min(offset, max_scroll_offset)`.
    pub fn thumb(&self) -> ThumbGeometry {
        thumb_geometry(
            self.scroll_offset,
            self.content_width(),
            self.layout.viewport_width,
            self.layout.track_width,
        )
    }

    pub fn scrollbar(&self) -> &Scrollbar {
        &self.scrollbar
    }

    pub fn thumb_color(&self) -> Option<&str> {
        self.scrollbar.color()
    }

    /// Repaints the thumb. Geometry, offset and items are untouched; calling it again with the
    /// same color is a no-op.
    pub fn update_scrollbar_color(&mut self, color: &str) {
        if self.scrollbar.set_color(color) {
            rtrace!(color, "update_scrollbar_color");
            self.notify();
        }
    }

    /// Grabs the thumb if track x hits it. Not allowed during a content drag.
    pub fn begin_thumb_drag(&mut self, x: f32) -> bool {
        if self.drag.is_active() {
            return false;
        }
        let thumb = self.thumb();
        if !self.scrollbar.press(thumb, x) {
            return false;
        }
        self.tween = None;
        rtrace!(x, left = thumb.left, width = thumb.width, "begin_thumb_drag");
        self.notify();
        true
    }

    /// Moves the held thumb so the press point follows track x, and scrolls the content to match.
    pub fn thumb_drag_to(&mut self, x: f32) -> bool {
        let Some(left) = self.scrollbar.thumb_left_for(x) else {
            return false;
        };
        let Some(offset) = offset_for_thumb_left(
            left,
            self.content_width(),
            self.layout.viewport_width,
            self.layout.track_width,
        ) else {
            return false;
        };
        let offset = self.normalize_offset(offset as i128);
        self.set_offset(offset)
    }

    pub fn end_thumb_drag(&mut self) -> bool {
        if !self.scrollbar.release() {
            return false;
        }
        self.notify();
        true
    }

    pub fn expanded_item_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.index_of(self.expanded.as_deref()?)
    }

    /// Expands `id`, collapsing whichever item was open. The scroll offset does not move.
    pub fn expand(&mut self, id: &str) -> bool {
        if self.index_of(id).is_none() {
            rwarn!(id, "expand: unknown item");
            return false;
        }
        if self.expanded.as_deref() == Some(id) {
            return false;
        }
        self.expanded = Some(String::from(id));
        self.notify();
        true
    }

    pub fn collapse(&mut self) -> bool {
        if self.expanded.take().is_none() {
            return false;
        }
        self.notify();
        true
    }

    /// Expands `id`, or collapses it if it is already the open item.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.as_deref() == Some(id) {
            return self.collapse();
        }
        self.expand(id)
    }

    /// Records the rendered width of an item (e.g. an expanded face wider than the estimate).
    ///
    /// The offset is kept where possible and re-normalized against the new content width.
    pub fn measure_item(&mut self, index: usize, width: u32) -> bool {
        let Some(cur) = self.widths.get(index).copied() else {
            return false;
        };
        if cur == width {
            return false;
        }
        self.widths[index] = width;
        self.sums.add(index, width as i64 - cur as i64);
        rtrace!(index, width, "measure_item");
        let offset = self.normalize_offset(self.scroll_offset as i128);
        self.set_offset(offset);
        self.notify();
        true
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        if index >= self.widths.len() {
            return None;
        }
        Some(self.sums.prefix_sum(index))
    }

    pub fn item_width(&self, index: usize) -> Option<u32> {
        self.widths.get(index).copied()
    }

    /// Index of the item covering `offset` (wrapped in infinite mode). Offsets inside a gap map
    /// to the item before it.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.widths.len();
        if count == 0 {
            return None;
        }
        let offset = if self.config.infinite_scroll && self.cycle_width() > 0 {
            offset % self.cycle_width()
        } else {
            offset
        };
        Some(self.sums.lower_bound(offset).min(count - 1))
    }

    fn slot(&self, index: usize, shift: u64) -> ItemSlot {
        let expanded = match (&self.expanded, self.config.items.get(index)) {
            (Some(id), Some(item)) => *id == item.id,
            _ => false,
        };
        ItemSlot {
            index,
            start: self.sums.prefix_sum(index).saturating_add(shift),
            width: self.widths[index],
            expanded,
        }
    }

    /// Iterates over every item in display order.
    pub fn for_each_slot(&self, mut f: impl FnMut(ItemSlot)) {
        for i in 0..self.widths.len() {
            f(self.slot(i, 0));
        }
    }

    pub fn item_slots(&self) -> Vec<ItemSlot> {
        let mut out = Vec::with_capacity(self.widths.len());
        self.for_each_slot(|s| out.push(s));
        out
    }

    /// Iterates over the items intersecting the viewport, left to right.
    ///
    /// In infinite mode, items after the wrap point are reported with `start` shifted by
    /// [`Carousel::cycle_width`].
    pub fn for_each_visible_slot(&self, mut f: impl FnMut(ItemSlot)) {
        let count = self.widths.len();
        let view = self.layout.viewport_width as u64;
        if count == 0 || view == 0 {
            return;
        }
        let start = self.scroll_offset;
        let end = start.saturating_add(view);
        let Some(first) = self.index_at_offset(start) else {
            return;
        };

        if !self.config.infinite_scroll || !self.is_scrollable() {
            for i in first..count {
                let slot = self.slot(i, 0);
                if slot.start >= end {
                    break;
                }
                if slot.end() > start {
                    f(slot);
                }
            }
            return;
        }

        let cycle = self.cycle_width();
        let mut shift = 0u64;
        let mut i = first;
        for _ in 0..count.saturating_mul(2) {
            let slot = self.slot(i, shift);
            if slot.start >= end {
                break;
            }
            if slot.end() > start {
                f(slot);
            }
            i += 1;
            if i == count {
                i = 0;
                shift = shift.saturating_add(cycle);
            }
        }
    }

    pub fn visible_slots(&self) -> Vec<ItemSlot> {
        let mut out = Vec::new();
        self.for_each_visible_slot(|s| out.push(s));
        out
    }
}

fn validate(config: &CarouselConfig) -> Result<(), CreateError> {
    let speed = config.scroll_speed;
    if !speed.is_finite() || speed <= 0.0 {
        return Err(CreateError::InvalidScrollSpeed);
    }
    let mut seen = BTreeSet::new();
    for item in &config.items {
        if !seen.insert(item.id.as_str()) {
            return Err(CreateError::DuplicateItemId {
                id: item.id.clone(),
            });
        }
        if item.title.is_empty() {
            return Err(CreateError::EmptyTitle {
                id: item.id.clone(),
            });
        }
        if item.image.is_empty() {
            return Err(CreateError::EmptyImage {
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}
