//! Feed adapter and mounting helpers for the `roller` carousel.
//!
//! The `roller` crate is UI-agnostic and knows nothing about where its items come from. This
//! crate connects it to a festival site:
//!
//! - Year-record feed parsing and mapping into carousel items (with action links)
//! - Mounting a carousel onto a host page, with failures logged instead of propagated
//! - An explicit ready signal for collaborators that style the page once the carousel exists
//! - The slide-list generator contract for the static gallery page
#![forbid(unsafe_code)]

mod adapt;
mod error;
mod host;
mod html;
mod mount;
mod ready;
mod record;
mod settings;
mod source;

pub mod slides;

#[cfg(test)]
mod tests;

pub use adapt::{LinkLabels, adapt_year, adapt_years, year_links};
pub use error::{FeedError, MountError, SpliceError};
pub use host::PageHost;
pub use html::{ActionLink, description_html};
pub use mount::{mount_history_roller, try_mount_history_roller};
pub use ready::{ReadyInfo, ReadySignal};
pub use record::{YearFeed, YearRecord, parse_year_feed};
pub use settings::RollerSettings;
pub use source::{FeedSource, FileFeed, FnFeed, StaticFeed};
