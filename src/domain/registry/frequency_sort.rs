//! Quicksort over the registry chain, ordering entries by frequency.
//!
//! The sort works on `next` links only and on ranges delimited by a head and
//! an end entry. `prev` links and the registry tail are rebuilt by one
//! [`WordRegistry::relink`] pass once the whole chain has been permuted.

use std::cmp::Ordering;

use super::{EntryId, WordRegistry};
use tracing::debug;

/// A detached run of entries linked by `next`; `tail.next` is `None`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Chain {
    pub(super) head: EntryId,
    pub(super) tail: EntryId,
}

impl Chain {
    pub(super) fn single(id: EntryId) -> Self {
        Self { head: id, tail: id }
    }
}

/// Result of partitioning a range around its last entry.
struct Partition {
    pivot: EntryId,
    less: Option<Chain>,
    less_len: usize,
    rest: Option<Chain>,
    rest_len: usize,
}

impl WordRegistry {
    /// Reorders the chain by ascending `frequency_count`.
    ///
    /// Entries with the same count keep ordinal word order among themselves.
    /// Alphabetical order of the whole chain is not restored afterwards; call
    /// [`merge_sort`](Self::merge_sort) for that.
    pub fn frequency_sort(&mut self) {
        let range = match (self.head, self.tail) {
            (Some(head), Some(tail)) => Some(Chain { head, tail }),
            _ => None,
        };

        let sorted = self.quick_sort(range);
        self.relink(sorted.map(|chain| chain.head));
        debug!(entries = self.size(), "chain reordered by frequency");
    }

    /// Frequency first, then word. Words are unique, so two distinct
    /// entries never compare equal.
    fn frequency_order(&self, a: EntryId, b: EntryId) -> Ordering {
        let (a, b) = (&self.node(a).entry, &self.node(b).entry);
        a.frequency_count
            .cmp(&b.frequency_count)
            .then_with(|| a.word.cmp(&b.word))
    }

    /// Sorts a detached range and returns its new head and tail.
    ///
    /// The smaller side of each partition is sorted recursively and the
    /// larger side is handled by the loop, so recursion depth stays
    /// logarithmic even on already ordered input. Time is still quadratic
    /// there, since the last entry is always the pivot: a chain of equal
    /// counts in word order is such an input. Sorted pieces accumulate
    /// in `prefix` (everything left of the range still being sorted) and
    /// `suffix` (everything right of it).
    fn quick_sort(&mut self, range: Option<Chain>) -> Option<Chain> {
        let mut prefix: Option<Chain> = None;
        let mut suffix: Option<Chain> = None;
        let mut pending = range;

        while let Some(current) = pending {
            if current.head == current.tail {
                prefix = self.join(prefix, Some(current));
                break;
            }

            let partition = self.partition(current);
            let pivot = Some(Chain::single(partition.pivot));

            if partition.less_len <= partition.rest_len {
                let less = self.quick_sort(partition.less);
                let left = self.join(prefix, less);
                prefix = self.join(left, pivot);
                pending = partition.rest;
            } else {
                let rest = self.quick_sort(partition.rest);
                let right = self.join(pivot, rest);
                suffix = self.join(right, suffix);
                pending = partition.less;
            }
        }

        self.join(prefix, suffix)
    }

    /// Splits `range` around its last entry.
    ///
    /// Entries ordered before the pivot keep their relative order in `less`.
    /// All others are unlinked and appended, in the order met, to `rest`,
    /// which follows the pivot. The pivot is returned detached.
    fn partition(&mut self, range: Chain) -> Partition {
        let pivot = range.tail;
        let mut partition = Partition {
            pivot,
            less: None,
            less_len: 0,
            rest: None,
            rest_len: 0,
        };

        let mut cursor = Some(range.head);
        while let Some(id) = cursor {
            if id == pivot {
                break;
            }
            cursor = self.next_of(id);
            self.set_next(id, None);

            if self.frequency_order(id, pivot) == Ordering::Less {
                partition.less = self.join(partition.less, Some(Chain::single(id)));
                partition.less_len += 1;
            } else {
                partition.rest = self.join(partition.rest, Some(Chain::single(id)));
                partition.rest_len += 1;
            }
        }
        self.set_next(pivot, None);

        partition
    }

    /// Links `b` after `a`.
    pub(super) fn join(&mut self, a: Option<Chain>, b: Option<Chain>) -> Option<Chain> {
        match (a, b) {
            (None, chain) | (chain, None) => chain,
            (Some(a), Some(b)) => {
                self.set_next(a.tail, Some(b.head));
                Some(Chain {
                    head: a.head,
                    tail: b.tail,
                })
            }
        }
    }
}
