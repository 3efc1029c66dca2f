use roller::CarouselItem;
use serde::{Deserialize, Serialize};

use crate::{ActionLink, YearRecord, description_html};

/// Labels of the action links appended to a year's description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkLabels {
    pub after_movie: String,
    pub pictures: String,
}

impl Default for LinkLabels {
    fn default() -> Self {
        Self {
            after_movie: String::from("After movie"),
            pictures: String::from("Pictures"),
        }
    }
}

/// The action links of a year: the after-movie first, then the pictures, each only if present.
///
/// Empty or blank URLs count as absent.
pub fn year_links(record: &YearRecord, labels: &LinkLabels) -> Vec<ActionLink> {
    [
        (&labels.after_movie, &record.after_movie_url),
        (&labels.pictures, &record.pictures_url),
    ]
    .into_iter()
    .filter_map(|(label, url)| {
        let url = url.as_deref().filter(|u| !u.trim().is_empty())?;
        Some(ActionLink::new(label.clone(), url))
    })
    .collect()
}

pub fn adapt_year(record: &YearRecord, labels: &LinkLabels) -> CarouselItem {
    let links = year_links(record, labels);
    CarouselItem::new(
        format!("year-{}", record.year),
        record.year.to_string(),
        record.image.clone(),
    )
    .with_description_html(description_html(&record.description, &links))
    .with_accent_color(record.color.clone())
}

/// Maps year records to carousel items, one per record, in input order.
pub fn adapt_years(records: &[YearRecord], labels: &LinkLabels) -> Vec<CarouselItem> {
    records.iter().map(|r| adapt_year(r, labels)).collect()
}
