use super::{EntryId, WordRegistry};
use crate::domain::entities::WordFrequency;

/// Borrowing traversal over a [`WordRegistry`] in chain order.
///
/// Walks `next` links from the head; `next_back` walks `prev` links from
/// the tail. The two ends stop when they meet.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    registry: &'a WordRegistry,
    front: Option<EntryId>,
    back: Option<EntryId>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(registry: &'a WordRegistry) -> Self {
        Self {
            registry,
            front: registry.head,
            back: registry.tail,
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = WordFrequency<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.front?;
        let node = self.registry.node(id);
        if self.back == Some(id) {
            self.finish();
        } else {
            self.front = node.next;
        }
        Some(node.entry.as_view())
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.back?;
        let node = self.registry.node(id);
        if self.front == Some(id) {
            self.finish();
        } else {
            self.back = node.prev;
        }
        Some(node.entry.as_view())
    }
}

impl std::iter::FusedIterator for Iter<'_> {}
