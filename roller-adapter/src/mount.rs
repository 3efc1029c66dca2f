use roller::{Carousel, Host};
use tracing::{debug, warn};

use crate::{
    FeedSource, MountError, ReadyInfo, ReadySignal, RollerSettings, adapt_years, parse_year_feed,
};

/// Fetches the years feed, builds the carousel on `host` and applies the thumb color.
///
/// The thumb color is set with a separate `update_scrollbar_color` call after construction, so
/// it can be changed again later the same way.
pub fn try_mount_history_roller(
    source: &impl FeedSource,
    host: &impl Host,
    settings: &RollerSettings,
) -> Result<Carousel, MountError> {
    let raw = source.fetch()?;
    let feed = parse_year_feed(&raw)?;
    let items = adapt_years(&feed.years, &settings.links);

    let mut carousel = Carousel::create(
        settings.carousel_config(items),
        host,
        &settings.mount_target(),
    )?;
    if let Some(color) = &settings.thumb_color {
        carousel.update_scrollbar_color(color);
    }
    Ok(carousel)
}

/// Mounts the history roller, or logs why it could not and returns `None`.
///
/// Never fails the caller: without a carousel the page stays usable. On success `ready` fires.
pub fn mount_history_roller(
    source: &impl FeedSource,
    host: &impl Host,
    settings: &RollerSettings,
    ready: &ReadySignal,
) -> Option<Carousel> {
    match try_mount_history_roller(source, host, settings) {
        Ok(carousel) => {
            debug!(
                container = %settings.container_id,
                items = carousel.items().len(),
                "history roller mounted"
            );
            ready.fire(ReadyInfo {
                container_id: settings.container_id.clone(),
                items: carousel.items().len(),
            });
            Some(carousel)
        }
        Err(MountError::Feed(err)) => {
            warn!(error = %err, "history roller feed unavailable; carousel skipped");
            None
        }
        Err(MountError::Create(err)) => {
            warn!(
                container = %settings.container_id,
                error = %err,
                "history roller not created"
            );
            None
        }
    }
}
