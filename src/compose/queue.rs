use std::sync::Arc;

use crate::assets::image::PartImage;
use crate::foundation::matrix::Matrix;
use crate::registry::depth::DepthOrder;
use crate::registry::ids::{BodyPartType, Character};
use crate::rig::bounds::PartBounds;

/// One placed part: artwork plus the stack top captured when it was placed.
#[derive(Clone, Debug)]
pub struct DrawQueueEntry {
    /// Layer kind.
    pub part: BodyPartType,
    /// Source character.
    pub character: Character,
    /// Artwork drawn at the origin of `transform`.
    pub image: Arc<PartImage>,
    /// Native pixels → figure space.
    pub transform: Matrix,
    /// Opaque bounds of the part's main image, if any.
    pub bounds: Option<PartBounds>,
}

/// Entries in placement order until [`sort_by_depth`](DrawQueue::sort_by_depth) runs.
#[derive(Clone, Debug, Default)]
pub struct DrawQueue {
    entries: Vec<DrawQueueEntry>,
}

impl DrawQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: DrawQueueEntry) {
        self.entries.push(entry);
    }

    /// Stable sort back-to-front by `order`; equal ranks keep placement order.
    pub fn sort_by_depth(&mut self, order: DepthOrder) {
        self.entries.sort_by_key(|e| order.rank(e.part));
    }

    /// Entries in current order.
    pub fn entries(&self) -> &[DrawQueueEntry] {
        &self.entries
    }

    /// Consume into the entry list.
    pub fn into_entries(self) -> Vec<DrawQueueEntry> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/queue.rs"]
mod tests;
