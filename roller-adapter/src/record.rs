use serde::{Deserialize, Serialize};

use crate::FeedError;

/// One year of festival history, as published in the `years` feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: i32,
    /// Plain text or simple markup.
    pub description: String,
    pub image: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_movie_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pictures_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearFeed {
    pub years: Vec<YearRecord>,
}

pub fn parse_year_feed(json: &str) -> Result<YearFeed, FeedError> {
    Ok(serde_json::from_str(json)?)
}
