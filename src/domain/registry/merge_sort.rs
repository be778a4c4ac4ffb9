//! Top-down mergesort over the registry chain, ordering entries by word.

use super::frequency_sort::Chain;
use super::{EntryId, WordRegistry};
use tracing::debug;

impl WordRegistry {
    /// Reorders the chain into ordinal word order.
    ///
    /// Restores the order [`insert`](Self::insert) maintains, typically
    /// after a [`frequency_sort`](Self::frequency_sort). On a chain that is
    /// already alphabetical this leaves the observable order unchanged.
    pub fn merge_sort(&mut self) {
        let sorted = self.merge_sort_chain(self.head);
        self.relink(sorted);
        debug!(entries = self.size(), "chain reordered alphabetically");
    }

    fn merge_sort_chain(&mut self, head: Option<EntryId>) -> Option<EntryId> {
        let head = head?;
        if self.next_of(head).is_none() {
            return Some(head);
        }

        let second = self.split(head);
        let first = self.merge_sort_chain(Some(head));
        let second = self.merge_sort_chain(second);
        self.merge(first, second)
    }

    /// Detaches and returns the second half of the chain starting at `head`.
    ///
    /// `slow` advances one entry for every two `fast` covers, so it stops on
    /// the last entry of the first half.
    fn split(&mut self, head: EntryId) -> Option<EntryId> {
        let mut slow = head;
        let mut fast = self.next_of(head);

        while let Some(step) = fast.and_then(|id| self.next_of(id)) {
            match self.next_of(slow) {
                Some(next) => slow = next,
                None => break,
            }
            fast = self.next_of(step);
        }

        let second = self.next_of(slow);
        self.set_next(slow, None);
        second
    }

    /// Merges two word-ordered chains, taking from `a` on equal words.
    ///
    /// `prev` links are set as entries are appended to the merged chain.
    fn merge(&mut self, mut a: Option<EntryId>, mut b: Option<EntryId>) -> Option<EntryId> {
        let mut merged: Option<Chain> = None;

        loop {
            let take = match (a, b) {
                (Some(x), Some(y)) if self.word(y) < self.word(x) => {
                    b = self.next_of(y);
                    y
                }
                (Some(x), _) => {
                    a = self.next_of(x);
                    x
                }
                (None, Some(y)) => {
                    b = self.next_of(y);
                    y
                }
                (None, None) => break,
            };

            self.set_next(take, None);
            self.node_mut(take).prev = merged.map(|chain| chain.tail);
            merged = self.join(merged, Some(Chain::single(take)));
        }

        merged.map(|chain| chain.head)
    }
}
