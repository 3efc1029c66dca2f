use roller_adapter::slides::{
    SLIDES_END_MARKER, SLIDES_START_MARKER, parse_picture_feed, regenerate_slide_list,
};

const PICTURES: &str = r##"{
    "pictures": [
        {"filename": "crowd.jpg", "description": "Crowd at dusk", "color": "#29335c",
         "order": 2, "location": "Main stage", "photographer": "A. Jansen"},
        {"filename": "gate.jpg", "description": "Opening the gates", "color": "#e4572e",
         "order": 1, "location": "Entrance", "photographer": "B. Peeters"}
    ]
}"##;

fn main() {
    let page = format!(
        "<section class=\"slides\">\n  <ul>\n    {SLIDES_START_MARKER}\n    {SLIDES_END_MARKER}\n  </ul>\n</section>\n"
    );
    let feed = match parse_picture_feed(PICTURES) {
        Ok(feed) => feed,
        Err(err) => {
            eprintln!("pictures feed: {err}");
            return;
        }
    };
    match regenerate_slide_list(&page, &feed, "assets/slides") {
        Ok(out) => print!("{out}"),
        Err(err) => eprintln!("slide list not written: {err}"),
    }
}
