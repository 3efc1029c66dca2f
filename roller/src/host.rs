use alloc::string::String;

use crate::Layout;

/// The page (or any UI surface) a carousel is mounted on.
///
/// Containers are registered with the host under stable ids and handed to the engine by id.
/// The engine never searches the page for elements on its own.
pub trait Host {
    /// Measures the container registered under `id`, or `None` if it does not exist.
    fn layout(&self, id: &str) -> Option<Layout>;
}

impl<H: Host + ?Sized> Host for &H {
    fn layout(&self, id: &str) -> Option<Layout> {
        (**self).layout(id)
    }
}

/// Identifies the element a carousel is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountTarget {
    pub container_id: String,
    /// Optional parent element the host places the carousel in. A missing parent is logged, not
    /// an error.
    pub parent_id: Option<String>,
}

impl MountTarget {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}
