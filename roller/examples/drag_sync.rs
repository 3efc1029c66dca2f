use std::collections::HashMap;

use roller::{
    Carousel, CarouselConfig, CarouselItem, DragSource, Host, InputEvent, Layout, MountTarget,
};

struct Page(HashMap<&'static str, Layout>);

impl Host for Page {
    fn layout(&self, id: &str) -> Option<Layout> {
        self.0.get(id).copied()
    }
}

fn main() {
    // A host measures the container on every event and forwards input; the engine answers with
    // an offset and a thumb to paint.
    let page = Page(HashMap::from([("gallery", Layout::new(320, 320))]));
    let items = (2015..2024)
        .map(|year| CarouselItem::new(format!("year-{year}"), year.to_string(), "cover.jpg"))
        .collect();
    let config = CarouselConfig::new(items)
        .with_item_width(160)
        .with_gap(16)
        .with_scroll_speed(1.25);

    let mut c = match Carousel::create(config, &page, &MountTarget::new("gallery")) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("no carousel: {err}");
            return;
        }
    };
    let layout = page.layout("gallery").unwrap_or_default();

    c.handle_input(
        InputEvent::PointerDown {
            source: DragSource::Pointer,
            x: 300.0,
        },
        layout,
        0,
    );
    for (t, x) in [(16, 260.0), (32, 180.0), (48, 60.0)] {
        c.handle_input(InputEvent::PointerMove { x }, layout, t);
        println!(
            "t={t} offset={} thumb={:?} visible={:?}",
            c.scroll_offset(),
            c.thumb(),
            c.visible_slots().iter().map(|s| s.index).collect::<Vec<_>>()
        );
    }
    c.handle_input(InputEvent::PointerUp, layout, 64);

    c.handle_input(InputEvent::ThumbDown { x: c.thumb().left as f32 + 1.0 }, layout, 80);
    c.handle_input(InputEvent::ThumbMove { x: 10_000.0 }, layout, 96);
    c.handle_input(InputEvent::PointerUp, layout, 112);
    println!(
        "end: offset={} max={} thumb={:?}",
        c.scroll_offset(),
        c.max_scroll_offset(),
        c.thumb()
    );
}
