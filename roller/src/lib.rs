//! A headless, drag/scroll-synced carousel engine.
//!
//! For feed adapters and page mounting helpers, see the `roller-adapter` crate.
//!
//! The engine owns a horizontal strip of items, a proportional scrollbar thumb and the
//! bidirectional sync between pointer/touch drags, programmatic scrolling and thumb dragging.
//! It can wrap the strip for infinite scrolling and keeps at most one item expanded.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - container geometry (viewport width, scrollbar track width), measured per event
//! - pointer/touch/wheel input
//! - a clock for animations and the post-touch resume delay
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod config;
mod error;
mod fenwick;
mod host;
mod scrollbar;
mod state;
mod tween;
mod types;


pub use carousel::{Carousel, InputEvent};
pub use config::{CarouselConfig, OnChangeCallback};
pub use error::{CreateError, Detached};
pub use host::{Host, MountTarget};
pub use scrollbar::{Scrollbar, ThumbState, offset_for_thumb_left, thumb_geometry};
pub use state::{DragState, ScrollState};
pub use tween::{AutoAdvance, Easing, Tween};
pub use types::{CarouselItem, DragSource, ItemSlot, Layout, ThumbGeometry, TitleAlign};
