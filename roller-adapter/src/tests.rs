use crate::*;
use crate::slides::*;

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use roller::{CreateError, Detached, InputEvent, Layout};

fn record(year: i32) -> YearRecord {
    YearRecord {
        year,
        description: format!("Edition {year}"),
        image: format!("{year}.jpg"),
        color: String::from("#123456"),
        after_movie_url: None,
        pictures_url: None,
    }
}

fn page() -> PageHost {
    let mut host = PageHost::new();
    host.register("history-roller", Layout::new(640, 600));
    host
}

const FEED: &str = r##"{
    "years": [
        {"year": 2022, "description": "Back again", "image": "2022.jpg", "color": "#f00",
         "afterMovieUrl": "https://example.org/2022.mp4", "picturesUrl": "https://example.org/2022"},
        {"year": 2023, "description": "Great year", "image": "x.jpg", "color": "#fff",
         "afterMovieUrl": "a.mp4"},
        {"year": 2024, "description": "<em>Sold out</em>", "image": "2024.jpg", "color": "#0f0"}
    ]
}"##;

#[test]
fn adapter_example_after_movie_only() {
    let mut r = record(2023);
    r.description = String::from("Great year");
    r.image = String::from("x.jpg");
    r.color = String::from("#fff");
    r.after_movie_url = Some(String::from("a.mp4"));

    let item = adapt_year(&r, &LinkLabels::default());
    assert_eq!(item.id, "year-2023");
    assert_eq!(item.title, "2023");
    assert_eq!(item.image, "x.jpg");
    assert_eq!(item.accent_color, "#fff");
    assert_eq!(
        item.description_html,
        concat!(
            r#"<div class="roller-description">Great year</div>"#,
            r#"<div class="roller-links">"#,
            r#"<a href="a.mp4" target="_blank" rel="noopener noreferrer">After movie</a>"#,
            "</div>"
        )
    );
    assert_eq!(item.description_html.matches("<a ").count(), 1);
    assert!(!item.description_html.contains("Pictures"));
}

#[test]
fn links_keep_fixed_order_and_are_omitted_when_absent() {
    let labels = LinkLabels::default();
    let mut both = record(2019);
    both.pictures_url = Some(String::from("p"));
    both.after_movie_url = Some(String::from("m"));
    let links = year_links(&both, &labels);
    assert_eq!(
        links,
        [
            ActionLink::new("After movie", "m"),
            ActionLink::new("Pictures", "p")
        ]
    );
    let html = adapt_year(&both, &labels).description_html;
    let movie = html.find("After movie").unwrap();
    let pictures = html.find("Pictures").unwrap();
    assert!(movie < pictures);

    let neither = adapt_year(&record(2018), &labels);
    assert_eq!(
        neither.description_html,
        r#"<div class="roller-description">Edition 2018</div>"#
    );
    assert!(!neither.description_html.contains("roller-links"));
}

#[test]
fn blank_urls_produce_no_links() {
    let labels = LinkLabels::default();
    let mut r = record(2020);
    r.after_movie_url = Some(String::new());
    r.pictures_url = Some(String::from("  "));
    assert!(year_links(&r, &labels).is_empty());
    assert_eq!(
        adapt_year(&r, &labels).description_html,
        r#"<div class="roller-description">Edition 2020</div>"#
    );

    r.pictures_url = Some(String::from("p"));
    assert_eq!(year_links(&r, &labels), [ActionLink::new("Pictures", "p")]);
}

#[test]
fn adapted_items_keep_order_and_unique_ids() {
    let years = [2010, 2012, 2011, 2019, 2015];
    let records: Vec<YearRecord> = years.iter().copied().map(record).collect();
    let items = adapt_years(&records, &LinkLabels::default());

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["2010", "2012", "2011", "2019", "2015"]);
    let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), items.len());
}

#[test]
fn link_urls_and_labels_are_escaped() {
    let link = ActionLink::new("Tom & Jerry", r#"https://x.org/?a=1&b="2""#);
    assert_eq!(
        link.to_html(),
        r#"<a href="https://x.org/?a=1&amp;b=&quot;2&quot;" target="_blank" rel="noopener noreferrer">Tom &amp; Jerry</a>"#
    );
}

#[test]
fn feed_parses_optional_urls() {
    let feed = parse_year_feed(FEED).unwrap();
    assert_eq!(feed.years.len(), 3);
    assert_eq!(feed.years[1].after_movie_url.as_deref(), Some("a.mp4"));
    assert_eq!(feed.years[1].pictures_url, None);
    assert_eq!(feed.years[2].after_movie_url, None);

    assert!(matches!(parse_year_feed("{"), Err(FeedError::Parse(_))));
    assert!(matches!(
        parse_year_feed(r#"{"pictures": []}"#),
        Err(FeedError::Parse(_))
    ));
}

#[test]
fn mount_builds_carousel_and_applies_thumb_color_after() {
    let settings = RollerSettings {
        thumb_color: Some(String::from("#abcdef")),
        ..RollerSettings::default()
    };
    assert_eq!(settings.carousel_config(Vec::new()).scrollbar_thumb_color, None);

    let ready = ReadySignal::new();
    let c = mount_history_roller(&StaticFeed(FEED.to_string()), &page(), &settings, &ready)
        .unwrap();

    assert_eq!(c.container_id(), "history-roller");
    let ids: Vec<&str> = c.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["year-2022", "year-2023", "year-2024"]);
    assert_eq!(c.thumb_color(), Some("#abcdef"));
    assert_eq!(
        ready.info(),
        Some(ReadyInfo {
            container_id: String::from("history-roller"),
            items: 3
        })
    );
}

#[test]
fn thumb_color_can_change_without_remounting() {
    let mut c = try_mount_history_roller(
        &StaticFeed(FEED.to_string()),
        &page(),
        &RollerSettings::default(),
    )
    .unwrap();
    assert_eq!(c.thumb_color(), None);
    c.scroll_by(100);
    let thumb = c.thumb();
    c.update_scrollbar_color("#000");
    c.update_scrollbar_color("#111");
    assert_eq!(c.thumb_color(), Some("#111"));
    assert_eq!(c.thumb(), thumb);
    assert_eq!(c.scroll_offset(), 100);
}

#[test]
fn fetch_failure_leaves_carousel_absent() {
    let ready = ReadySignal::new();
    let fired = Rc::new(Cell::new(false));
    ready.subscribe({
        let fired = Rc::clone(&fired);
        move |_| fired.set(true)
    });

    let offline = FnFeed(|| -> Result<String, FeedError> {
        Err(FeedError::Fetch(String::from("offline")))
    });
    let c = mount_history_roller(&offline, &page(), &RollerSettings::default(), &ready);
    assert!(c.is_none());
    assert!(!fired.get());
    assert!(!ready.is_fired());

    let garbage = StaticFeed(String::from("not json"));
    assert!(matches!(
        try_mount_history_roller(&garbage, &page(), &RollerSettings::default()),
        Err(MountError::Feed(FeedError::Parse(_)))
    ));

    let missing = FileFeed(std::path::PathBuf::from("/nonexistent/years.json"));
    assert!(matches!(
        try_mount_history_roller(&missing, &page(), &RollerSettings::default()),
        Err(MountError::Feed(FeedError::Io { .. }))
    ));
}

#[test]
fn missing_container_leaves_carousel_absent() {
    let ready = ReadySignal::new();
    let mut host = page();
    host.remove("history-roller");
    let feed = StaticFeed(FEED.to_string());

    assert!(mount_history_roller(&feed, &host, &RollerSettings::default(), &ready).is_none());
    assert!(!ready.is_fired());
    assert!(matches!(
        try_mount_history_roller(&feed, &host, &RollerSettings::default()),
        Err(MountError::Create(CreateError::ContainerMissing { .. }))
    ));
}

#[test]
fn removing_the_container_ends_the_mounted_carousel() {
    let mut host = page();
    let mut c = try_mount_history_roller(
        &StaticFeed(FEED.to_string()),
        &host,
        &RollerSettings::default(),
    )
    .unwrap();

    assert_eq!(
        c.handle_host_input(&host, InputEvent::Wheel { delta: 50 }, 0),
        Ok(true)
    );
    assert_eq!(c.scroll_offset(), 50);

    host.remove("history-roller");
    assert_eq!(
        c.handle_host_input(&host, InputEvent::Wheel { delta: 50 }, 16),
        Err(Detached {
            id: String::from("history-roller")
        })
    );
    assert!(c.is_detached());
    assert_eq!(c.scroll_offset(), 50);
}

#[test]
fn duplicate_years_are_rejected() {
    let feed = StaticFeed(String::from(
        r##"{"years": [
            {"year": 2020, "description": "", "image": "a.jpg", "color": "#000"},
            {"year": 2020, "description": "", "image": "b.jpg", "color": "#000"}
        ]}"##,
    ));
    assert!(matches!(
        try_mount_history_roller(&feed, &page(), &RollerSettings::default()),
        Err(MountError::Create(CreateError::DuplicateItemId { .. }))
    ));
}

#[test]
fn ready_signal_fires_once_and_serves_late_subscribers() {
    let ready = ReadySignal::new();
    let calls = Rc::new(Cell::new(0));

    ready.subscribe({
        let calls = Rc::clone(&calls);
        move |info| {
            assert_eq!(info.items, 4);
            calls.set(calls.get() + 1);
        }
    });
    let info = ReadyInfo {
        container_id: String::from("x"),
        items: 4,
    };
    assert!(ready.fire(info.clone()));
    assert_eq!(calls.get(), 1);

    ready.subscribe({
        let calls = Rc::clone(&calls);
        move |_| calls.set(calls.get() + 1)
    });
    assert_eq!(calls.get(), 2);

    assert!(!ready.fire(ReadyInfo {
        container_id: String::from("y"),
        items: 0,
    }));
    assert_eq!(ready.info(), Some(info));
    assert_eq!(calls.get(), 2);
}

#[test]
fn settings_fill_defaults() {
    let s = RollerSettings::from_json_str(
        r##"{
            "containerId": "roller",
            "parentId": "history",
            "titleAlign": "right",
            "infiniteScroll": true,
            "thumbColor": "#ff8800",
            "links": {"pictures": "Photos"},
            "autoAdvance": {"interval_ms": 5000, "duration_ms": 300, "easing": "Linear"}
        }"##,
    )
    .unwrap();
    assert_eq!(s.container_id, "roller");
    assert_eq!(s.title, "History");
    assert_eq!(s.title_align, roller::TitleAlign::Right);
    assert!(s.infinite_scroll);
    assert_eq!(s.links.after_movie, "After movie");
    assert_eq!(s.links.pictures, "Photos");
    assert_eq!(s.auto_advance.map(|a| a.interval_ms), Some(5000));
    assert_eq!(s.mount_target().parent_id.as_deref(), Some("history"));

    let config = s.carousel_config(Vec::new());
    assert!(config.infinite_scroll);
    assert_eq!(config.touch_resume_delay_ms, 3_000);

    assert!(RollerSettings::from_json_str(r#"{"scrollSpeed": "fast"}"#).is_err());
}

fn picture(filename: &str, order: i64) -> PictureRecord {
    PictureRecord {
        filename: filename.to_string(),
        description: format!("About {filename}"),
        color: String::from("#222"),
        order,
        location: String::from("Main stage"),
        photographer: String::from("J. Doe"),
    }
}

#[test]
fn slide_list_is_sorted_by_order() {
    let list = render_slide_list(
        &[picture("c.jpg", 3), picture("a.jpg", 1), picture("b.jpg", 2), picture("a2.jpg", 1)],
        "img/slides/",
    );
    let lines: Vec<&str> = list.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains(r#"src="img/slides/a.jpg""#));
    assert!(lines[1].contains(r#"src="img/slides/a2.jpg""#));
    assert!(lines[2].contains(r#"src="img/slides/b.jpg""#));
    assert!(lines[3].contains(r#"src="img/slides/c.jpg""#));
    assert!(lines[0].contains("Main stage | J. Doe"));
}

#[test]
fn slide_attributes_and_captions_are_escaped() {
    let mut p = picture("a&b.jpg", 0);
    p.description = String::from(r#"Say "hi" <now>"#);
    p.color = String::from(r#"red" onload="x"#);
    p.location = String::from("Tent & Bar");
    let list = render_slide_list(&[p], "");

    assert!(list.contains(r#"style="--slide-color: red&quot; onload=&quot;x""#));
    assert!(list.contains(r#"src="a&amp;b.jpg""#));
    assert!(list.contains(r#"alt="Say &quot;hi&quot; &lt;now&gt;""#));
    assert!(list.contains(r#"<p class="slide-caption">Say "hi" &lt;now&gt;</p>"#));
    assert!(list.contains("Tent &amp; Bar | J. Doe"));
}

#[test]
fn splice_replaces_only_the_marked_region() {
    let page = format!(
        "<ul>\n  {SLIDES_START_MARKER}\n<li>old</li>\n  {SLIDES_END_MARKER}\n</ul>\n<p>{SLIDES_END_MARKER}</p>"
    );
    let feed = PictureFeed {
        pictures: vec![picture("x.jpg", 0)],
    };
    let out = regenerate_slide_list(&page, &feed, "").unwrap();
    assert!(!out.contains("old"));
    assert!(out.starts_with(&format!("<ul>\n  {SLIDES_START_MARKER}\n<li class=\"slide\"")));
    assert!(out.contains(r#"src="x.jpg""#));
    assert!(out.ends_with(&format!(
        "</li>\n{SLIDES_END_MARKER}\n</ul>\n<p>{SLIDES_END_MARKER}</p>"
    )));

    // Regenerating twice gives the same page.
    assert_eq!(regenerate_slide_list(&out, &feed, "").unwrap(), out);
}

#[test]
fn splice_reports_missing_markers() {
    assert_eq!(
        splice_between_markers("<ul></ul>", "<!--a-->", "<!--b-->", ""),
        Err(SpliceError::MissingStartMarker(String::from("<!--a-->")))
    );
    assert_eq!(
        splice_between_markers("<!--b--><!--a-->", "<!--a-->", "<!--b-->", ""),
        Err(SpliceError::MissingEndMarker(String::from("<!--b-->")))
    );
}

#[test]
fn picture_feed_parses() {
    let feed = parse_picture_feed(
        r##"{"pictures": [{"filename": "a.jpg", "description": "Crowd", "color": "#111",
             "order": 2, "location": "Tent", "photographer": "Ann"}]}"##,
    )
    .unwrap();
    assert_eq!(feed.pictures[0].order, 2);
    assert!(parse_picture_feed(r#"{"pictures": [{"filename": "a.jpg"}]}"#).is_err());
}
