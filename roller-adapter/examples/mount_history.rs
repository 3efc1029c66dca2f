use roller::{InputEvent, Layout};
use roller_adapter::{PageHost, ReadySignal, RollerSettings, StaticFeed, mount_history_roller};

const YEARS: &str = r##"{
    "years": [
        {"year": 2021, "description": "The first edition.", "image": "2021.jpg", "color": "#e4572e"},
        {"year": 2022, "description": "Two stages.", "image": "2022.jpg", "color": "#29335c",
         "afterMovieUrl": "https://example.org/aftermovie-2022"},
        {"year": 2023, "description": "Sold out.", "image": "2023.jpg", "color": "#f3a712",
         "afterMovieUrl": "https://example.org/aftermovie-2023",
         "picturesUrl": "https://example.org/pictures-2023"}
    ]
}"##;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("roller=trace,roller_adapter=debug")
                }),
        )
        .init();

    let mut page = PageHost::new();
    page.register("history-roller", Layout::new(480, 440));

    let settings = RollerSettings {
        thumb_color: Some(String::from("#f3a712")),
        ..RollerSettings::default()
    };

    // Theming waits for the carousel instead of listening for a page-wide event.
    let ready = ReadySignal::new();
    ready.subscribe(|info| println!("ready: {} with {} items", info.container_id, info.items));

    let Some(mut roller) = mount_history_roller(&StaticFeed(YEARS.into()), &page, &settings, &ready)
    else {
        println!("history roller unavailable, page continues without it");
        return;
    };

    for item in roller.items() {
        println!("{} -> {}", item.id, item.description_html);
    }

    if let Err(err) = roller.handle_host_input(&page, InputEvent::Wheel { delta: 250 }, 0) {
        println!("{err}");
        return;
    }
    roller.toggle("year-2022");
    println!(
        "offset={} thumb={:?} expanded={:?}",
        roller.scroll_offset(),
        roller.thumb(),
        roller.expanded_item_id()
    );

    // Re-theme later without rebuilding the carousel.
    roller.update_scrollbar_color("#29335c");

    // Unmounting the container ends the carousel on its next host-driven call.
    page.remove("history-roller");
    match roller.tick_host(&page, 16) {
        Ok(_) => println!("still mounted"),
        Err(err) => println!("{err}; detached={}", roller.is_detached()),
    }
}
