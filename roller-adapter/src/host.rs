use std::collections::HashMap;

use roller::{Host, Layout};

/// An in-memory page: containers registered by stable id with their measured layout.
#[derive(Clone, Debug, Default)]
pub struct PageHost {
    containers: HashMap<String, Layout>,
}

impl PageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or re-measures) a container.
    pub fn register(&mut self, id: impl Into<String>, layout: Layout) {
        self.containers.insert(id.into(), layout);
    }

    pub fn remove(&mut self, id: &str) -> Option<Layout> {
        self.containers.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }
}

impl Host for PageHost {
    fn layout(&self, id: &str) -> Option<Layout> {
        self.containers.get(id).copied()
    }
}
