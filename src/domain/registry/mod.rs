//! Sorted doubly-linked word registry.
//!
//! Entries live in an arena of slots addressed by [`EntryId`]. Each node
//! carries a `next` link (the chain order) and a `prev` back-reference, both
//! as indices, so unlinking or dropping the registry can never dangle or
//! release a node twice. Released slots go to a free list and are reused by
//! later inserts.
//!
//! # Ordering
//!
//! [`WordRegistry::insert`] keeps the chain in ordinal (byte-wise) word order.
//! [`WordRegistry::frequency_sort`] reorders the chain by frequency, after
//! which alphabetical order holds again only once
//! [`WordRegistry::merge_sort`] has run.
//!
//! # Example
//!
//! ```
//! use word_frequency::domain::registry::{Upsert, WordRegistry};
//!
//! let mut registry = WordRegistry::new();
//! assert_eq!(registry.insert("the").unwrap(), Upsert::Inserted);
//! registry.insert("fox").unwrap();
//! assert_eq!(registry.increment_frequency("the").unwrap(), 2);
//!
//! let words: Vec<_> = registry.iter().map(|e| e.word).collect();
//! assert_eq!(words, ["fox", "the"]);
//! ```

mod frequency_sort;
mod iter;
mod merge_sort;

pub use iter::Iter;

use crate::domain::entities::{Entry, WordFrequency};
use crate::error::RegistryError;
use tracing::trace;

/// Stable index of a slot in the registry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryId(usize);

#[derive(Debug)]
struct Node {
    entry: Entry,
    next: Option<EntryId>,
    prev: Option<EntryId>,
}

/// Outcome of [`WordRegistry::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new entry was created with a count of 1.
    Inserted,
    /// The word already existed; carries its new count.
    Incremented(u64),
}

/// Outcome of [`WordRegistry::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The entry was unlinked and released; its final state is returned.
    Removed(Entry),
    /// The registry held no entries, so there was nothing to remove.
    AlreadyEmpty,
}

/// Where a new word is spliced into the chain.
enum Placement {
    Only,
    Front,
    Back,
    Before(EntryId),
}

/// Ordered collection of distinct words and their frequencies.
#[derive(Debug, Default)]
pub struct WordRegistry {
    slots: Vec<Option<Node>>,
    free: Vec<EntryId>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    #[cfg(test)]
    allocations_denied: bool,
}

impl WordRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an entry for `word` exists.
    pub fn find(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Increments the count of an existing entry and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if `word` is absent. The caller is
    /// expected to [`insert`](Self::insert) it instead.
    pub fn increment_frequency(&mut self, word: &str) -> Result<u64, RegistryError> {
        let id = self
            .position(word)
            .ok_or_else(|| RegistryError::not_found(word))?;

        let entry = &mut self.node_mut(id).entry;
        entry.frequency_count += 1;
        trace!(word, count = entry.frequency_count, "incremented");
        Ok(entry.frequency_count)
    }

    /// Inserts `word` with a count of 1 at its alphabetical position, or
    /// increments it if it is already registered.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AllocationFailure`] if the arena or the word
    ///   buffer cannot grow. The registry is unchanged.
    /// - [`RegistryError::InsertionPoint`] if no splice point is found.
    ///   Unreachable while the chain is sorted, and reported without any
    ///   partial splice.
    pub fn insert(&mut self, word: &str) -> Result<Upsert, RegistryError> {
        if self.find(word) {
            return self.increment_frequency(word).map(Upsert::Incremented);
        }

        let placement = self.placement(word)?;
        let id = self.allocate(word)?;

        match placement {
            Placement::Only => {
                self.head = Some(id);
                self.tail = Some(id);
            }
            Placement::Front => {
                if let Some(head) = self.head {
                    self.node_mut(id).next = Some(head);
                    self.node_mut(head).prev = Some(id);
                }
                self.head = Some(id);
            }
            Placement::Back => {
                if let Some(tail) = self.tail {
                    self.node_mut(id).prev = Some(tail);
                    self.node_mut(tail).next = Some(id);
                }
                self.tail = Some(id);
            }
            Placement::Before(at) => {
                let prev = self.node(at).prev;
                {
                    let node = self.node_mut(id);
                    node.prev = prev;
                    node.next = Some(at);
                }
                self.node_mut(at).prev = Some(id);
                match prev {
                    Some(prev) => self.node_mut(prev).next = Some(id),
                    None => self.head = Some(id),
                }
            }
        }

        trace!(word, "inserted");
        Ok(Upsert::Inserted)
    }

    /// Unlinks and releases the entry for `word`, whatever its count.
    ///
    /// Removing from an empty registry succeeds as a no-op
    /// ([`Removal::AlreadyEmpty`]).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the registry is non-empty and
    /// holds no entry for `word`.
    pub fn remove(&mut self, word: &str) -> Result<Removal, RegistryError> {
        if self.is_empty() {
            return Ok(Removal::AlreadyEmpty);
        }

        let id = self
            .position(word)
            .ok_or_else(|| RegistryError::not_found(word))?;

        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }

        let entry = self.release(id);
        trace!(word, "removed");
        Ok(Removal::Removed(entry))
    }

    /// Counts the entries by walking the chain.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first entry of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyRegistry`] if there are no entries.
    pub fn front(&self) -> Result<WordFrequency<'_>, RegistryError> {
        self.head
            .map(|id| self.node(id).entry.as_view())
            .ok_or(RegistryError::EmptyRegistry)
    }

    /// Returns the last entry of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyRegistry`] if there are no entries.
    pub fn back(&self) -> Result<WordFrequency<'_>, RegistryError> {
        self.tail
            .map(|id| self.node(id).entry.as_view())
            .ok_or(RegistryError::EmptyRegistry)
    }

    /// Highest frequency across all entries, or 0 when empty.
    pub fn max_frequency(&self) -> u64 {
        self.iter()
            .map(|entry| entry.frequency_count)
            .max()
            .unwrap_or(0)
    }

    /// Traverses the chain from head to tail, or from tail with `.rev()`.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Releases every entry in one pass over the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    /// Checks the doubly-linked invariants: `head.prev` and `tail.next` are
    /// absent, every `next` has a matching `prev`, the tail is reached after
    /// walking every live entry, and head and tail are empty together.
    pub fn is_consistent(&self) -> bool {
        let live = self.slots.len() - self.free.len();

        let (head, tail) = match (self.head, self.tail) {
            (None, None) => return live == 0,
            (Some(head), Some(tail)) => (head, tail),
            _ => return false,
        };
        if self.slot(head).is_none_or(|node| node.prev.is_some()) {
            return false;
        }

        let mut walked = 1;
        let mut current = head;
        loop {
            let Some(node) = self.slot(current) else {
                return false;
            };
            match node.next {
                Some(next) => {
                    if self.slot(next).is_none_or(|n| n.prev != Some(current)) || walked > live {
                        return false;
                    }
                    walked += 1;
                    current = next;
                }
                None => break,
            }
        }

        current == tail && walked == live
    }

    fn position(&self, word: &str) -> Option<EntryId> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id);
            if node.entry.word == word {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }

    fn placement(&self, word: &str) -> Result<Placement, RegistryError> {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return Ok(Placement::Only);
        };

        if word <= self.word(head) {
            return Ok(Placement::Front);
        }
        if word >= self.word(tail) {
            return Ok(Placement::Back);
        }

        let mut cursor = self.node(head).next;
        while let Some(id) = cursor {
            if self.word(id) >= word {
                return Ok(Placement::Before(id));
            }
            cursor = self.node(id).next;
        }

        Err(RegistryError::InsertionPoint {
            word: word.to_string(),
        })
    }

    /// Claims a slot for a new, unlinked entry with a count of 1.
    ///
    /// Reserves room in the free list at the same time so that a later
    /// [`release`](Self::release) never has to grow it.
    fn allocate(&mut self, word: &str) -> Result<EntryId, RegistryError> {
        #[cfg(test)]
        if self.allocations_denied {
            return Err(RegistryError::allocation_failure(word));
        }

        let mut owned = String::new();
        owned
            .try_reserve_exact(word.len())
            .map_err(|_| RegistryError::allocation_failure(word))?;
        owned.push_str(word);

        let node = Node {
            entry: Entry::new(owned),
            next: None,
            prev: None,
        };

        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Some(node);
            return Ok(id);
        }

        let wanted = self.slots.len() + 1 - self.free.len();
        self.slots
            .try_reserve(1)
            .and_then(|()| self.free.try_reserve(wanted))
            .map_err(|_| RegistryError::allocation_failure(word))?;

        self.slots.push(Some(node));
        Ok(EntryId(self.slots.len() - 1))
    }

    fn release(&mut self, id: EntryId) -> Entry {
        let node = self.slots[id.0]
            .take()
            .unwrap_or_else(|| unreachable!("entry {} released twice", id.0));
        self.free.push(id);
        node.entry
    }

    /// Rebuilds every `prev` link along the `next` chain starting at `head`
    /// and recomputes `tail`. Run once after a whole-chain permutation.
    fn relink(&mut self, head: Option<EntryId>) {
        self.head = head;
        self.tail = None;

        let mut prev = None;
        let mut cursor = head;
        while let Some(id) = cursor {
            let node = self.node_mut(id);
            node.prev = prev;
            prev = Some(id);
            cursor = node.next;
        }
        self.tail = prev;
    }

    fn slot(&self, id: EntryId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node(&self, id: EntryId) -> &Node {
        self.slot(id)
            .unwrap_or_else(|| unreachable!("dangling entry id {}", id.0))
    }

    fn node_mut(&mut self, id: EntryId) -> &mut Node {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| unreachable!("dangling entry id {}", id.0))
    }

    fn word(&self, id: EntryId) -> &str {
        &self.node(id).entry.word
    }

    fn next_of(&self, id: EntryId) -> Option<EntryId> {
        self.node(id).next
    }

    fn set_next(&mut self, id: EntryId, next: Option<EntryId>) {
        self.node_mut(id).next = next;
    }
}

#[cfg(test)]
impl WordRegistry {
    /// Makes every following allocation fail until called with `false`.
    pub(crate) fn deny_allocations(&mut self, denied: bool) {
        self.allocations_denied = denied;
    }
}

impl<'a> IntoIterator for &'a WordRegistry {
    type Item = WordFrequency<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(registry: &WordRegistry) -> Vec<&str> {
        registry.iter().map(|e| e.word).collect()
    }

    fn registry_of(input: &[&str]) -> WordRegistry {
        let mut registry = WordRegistry::new();
        for word in input {
            registry.insert(word).unwrap();
        }
        registry
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = WordRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.size(), 0);
        assert_eq!(registry.max_frequency(), 0);
        assert_eq!(registry.front(), Err(RegistryError::EmptyRegistry));
        assert_eq!(registry.back(), Err(RegistryError::EmptyRegistry));
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_insert_into_empty_sets_head_and_tail() {
        let registry = registry_of(&["fox"]);
        assert_eq!(registry.front().unwrap().word, "fox");
        assert_eq!(registry.back().unwrap().word, "fox");
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_insert_front_back_and_middle() {
        let registry = registry_of(&["m", "z", "a", "q", "c"]);
        assert_eq!(words(&registry), ["a", "c", "m", "q", "z"]);
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_insert_existing_word_increments() {
        let mut registry = registry_of(&["the"]);
        assert_eq!(registry.insert("the").unwrap(), Upsert::Incremented(2));
        assert_eq!(registry.size(), 1);
        assert_eq!(registry.front().unwrap().frequency_count, 2);
    }

    #[test]
    fn test_increment_absent_word_fails() {
        let mut registry = registry_of(&["the"]);
        assert_eq!(
            registry.increment_frequency("fox"),
            Err(RegistryError::not_found("fox"))
        );
        assert_eq!(registry.size(), 1);
    }

    #[test]
    fn test_ordinal_ordering_is_byte_wise() {
        let registry = registry_of(&["b", "B", "a", "10", "9", "don't", "don"]);
        assert_eq!(words(&registry), ["10", "9", "B", "a", "b", "don", "don't"]);
    }

    #[test]
    fn test_remove_from_empty_is_noop() {
        let mut registry = WordRegistry::new();
        assert_eq!(registry.remove("fox"), Ok(Removal::AlreadyEmpty));
    }

    #[test]
    fn test_remove_absent_from_non_empty_fails() {
        let mut registry = registry_of(&["the"]);
        assert_eq!(registry.remove("fox"), Err(RegistryError::not_found("fox")));
        assert_eq!(registry.size(), 1);
    }

    #[test]
    fn test_remove_sole_entry_empties_registry() {
        let mut registry = registry_of(&["the", "the"]);
        let removed = registry.remove("the").unwrap();
        assert_eq!(
            removed,
            Removal::Removed(Entry {
                word: "the".to_string(),
                frequency_count: 2
            })
        );
        assert!(registry.is_empty());
        assert!(registry.back().is_err());
        assert_eq!(registry.free.len(), 1);
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_remove_head_tail_and_middle() {
        let mut registry = registry_of(&["a", "b", "c", "d", "e"]);

        registry.remove("a").unwrap();
        assert_eq!(registry.front().unwrap().word, "b");
        registry.remove("e").unwrap();
        assert_eq!(registry.back().unwrap().word, "d");
        registry.remove("c").unwrap();

        assert_eq!(words(&registry), ["b", "d"]);
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_released_slots_are_reused() {
        let mut registry = registry_of(&["a", "b"]);
        registry.remove("a").unwrap();
        registry.insert("c").unwrap();

        assert_eq!(registry.slots.len(), 2);
        assert!(registry.free.is_empty());
        assert_eq!(words(&registry), ["b", "c"]);
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut registry = registry_of(&["a", "b", "c"]);
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.is_consistent());
        registry.insert("z").unwrap();
        assert_eq!(words(&registry), ["z"]);
    }

    #[test]
    fn test_max_frequency() {
        let registry = registry_of(&["the", "fox", "the", "runs", "fox", "the"]);
        assert_eq!(registry.max_frequency(), 3);
    }

    #[test]
    fn test_insertion_point_missing_is_reported_without_splice() {
        // Cut the chain after "b" so the tail is no longer reachable and the
        // forward scan runs off the end.
        let mut registry = registry_of(&["a", "b", "c"]);
        let head = registry.head.unwrap();
        let middle = registry.next_of(head).unwrap();
        registry.set_next(middle, None);

        let result = registry.insert("bb");
        assert_eq!(
            result,
            Err(RegistryError::InsertionPoint {
                word: "bb".to_string()
            })
        );
        assert_eq!(registry.slots.len(), 3);
        assert!(registry.free.is_empty());
        assert_eq!(words(&registry), ["a", "b"]);
    }

    #[test]
    fn test_allocation_failure_leaves_registry_unchanged() {
        let mut registry = registry_of(&["a", "c"]);
        registry.deny_allocations(true);

        assert_eq!(
            registry.insert("b"),
            Err(RegistryError::allocation_failure("b"))
        );
        assert_eq!(registry.insert("a"), Ok(Upsert::Incremented(2)));
        assert_eq!(words(&registry), ["a", "c"]);
        assert_eq!(registry.slots.len(), 2);
        assert!(registry.is_consistent());

        registry.deny_allocations(false);
        registry.insert("b").unwrap();
        assert_eq!(words(&registry), ["a", "b", "c"]);
    }

    #[test]
    fn test_allocation_failure_reuses_no_free_slot() {
        let mut registry = registry_of(&["a", "b"]);
        registry.remove("a").unwrap();
        registry.deny_allocations(true);

        assert!(registry.insert("z").is_err());
        assert_eq!(registry.free.len(), 1);
        assert_eq!(words(&registry), ["b"]);
    }

    #[test]
    fn test_is_consistent_detects_broken_back_link() {
        let mut registry = registry_of(&["a", "b", "c"]);
        let tail = registry.tail.unwrap();
        registry.node_mut(tail).prev = None;
        assert!(!registry.is_consistent());
    }
}
