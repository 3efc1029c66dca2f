//! Slide-list generation for the static gallery page.
//!
//! The gallery page carries a region delimited by two literal comment markers. Regenerating the
//! page replaces whatever sits between the markers with one `<li>` per picture, in `order`.
use serde::{Deserialize, Serialize};

use crate::{FeedError, SpliceError};

pub const SLIDES_START_MARKER: &str = "<!-- SLIDES:START -->";
pub const SLIDES_END_MARKER: &str = "<!-- SLIDES:END -->";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureRecord {
    pub filename: String,
    pub description: String,
    pub color: String,
    pub order: i64,
    pub location: String,
    pub photographer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureFeed {
    pub pictures: Vec<PictureRecord>,
}

pub fn parse_picture_feed(json: &str) -> Result<PictureFeed, FeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Renders one line per picture, sorted by `order` (ties keep feed order).
pub fn render_slide_list(pictures: &[PictureRecord], image_dir: &str) -> String {
    let mut sorted: Vec<&PictureRecord> = pictures.iter().collect();
    sorted.sort_by_key(|p| p.order);

    let dir = image_dir.trim_end_matches('/');
    let mut out = String::new();
    for p in sorted {
        let src = if dir.is_empty() {
            p.filename.clone()
        } else {
            format!("{dir}/{}", p.filename)
        };
        out.push_str(&format!(
            concat!(
                r#"<li class="slide" style="--slide-color: {color}">"#,
                r#"<img src="{src}" alt="{alt}">"#,
                r#"<p class="slide-caption">{caption}</p>"#,
                r#"<p class="slide-credit">{location} | {photographer}</p>"#,
                "</li>\n"
            ),
            color = html_escape::encode_double_quoted_attribute(&p.color),
            src = html_escape::encode_double_quoted_attribute(&src),
            alt = html_escape::encode_double_quoted_attribute(&p.description),
            caption = html_escape::encode_text(&p.description),
            location = html_escape::encode_text(&p.location),
            photographer = html_escape::encode_text(&p.photographer),
        ));
    }
    out
}

/// Replaces everything strictly between the first `start` marker and the next `end` marker.
///
/// The markers themselves are kept; `content` is placed on its own lines between them.
pub fn splice_between_markers(
    page: &str,
    start: &str,
    end: &str,
    content: &str,
) -> Result<String, SpliceError> {
    let Some(start_at) = page.find(start) else {
        return Err(SpliceError::MissingStartMarker(start.to_string()));
    };
    let body_at = start_at + start.len();
    let Some(end_rel) = page[body_at..].find(end) else {
        return Err(SpliceError::MissingEndMarker(end.to_string()));
    };
    let end_at = body_at + end_rel;

    let mut out = String::with_capacity(page.len() + content.len());
    out.push_str(&page[..body_at]);
    out.push('\n');
    out.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&page[end_at..]);
    Ok(out)
}

/// Rewrites the slide region of `page` from `feed`, using the default markers.
pub fn regenerate_slide_list(
    page: &str,
    feed: &PictureFeed,
    image_dir: &str,
) -> Result<String, SpliceError> {
    let list = render_slide_list(&feed.pictures, image_dir);
    splice_between_markers(page, SLIDES_START_MARKER, SLIDES_END_MARKER, &list)
}
