use std::path::PathBuf;

use crate::FeedError;

/// Where a JSON feed comes from.
pub trait FeedSource {
    fn fetch(&self) -> Result<String, FeedError>;
}

/// A feed produced by a host-supplied function, e.g. a network fetch.
#[derive(Clone, Debug)]
pub struct FnFeed<F>(pub F);

impl<F> FeedSource for FnFeed<F>
where
    F: Fn() -> Result<String, FeedError>,
{
    fn fetch(&self) -> Result<String, FeedError> {
        (self.0)()
    }
}

/// A feed already held in memory.
#[derive(Clone, Debug)]
pub struct StaticFeed(pub String);

impl FeedSource for StaticFeed {
    fn fetch(&self) -> Result<String, FeedError> {
        Ok(self.0.clone())
    }
}

/// A feed read from disk on every fetch.
#[derive(Clone, Debug)]
pub struct FileFeed(pub PathBuf);

impl FeedSource for FileFeed {
    fn fetch(&self) -> Result<String, FeedError> {
        std::fs::read_to_string(&self.0).map_err(|source| FeedError::Io {
            path: self.0.clone(),
            source,
        })
    }
}
