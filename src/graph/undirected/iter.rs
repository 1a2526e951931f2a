use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::slice;
use std::collections::{btree_map, btree_set, BTreeMap};

/// Iterator over the vertices of a [`UGraph`](super::UGraph), in ascending order.
#[derive(Debug, Clone)]
pub struct VertexIter<'a, V> {
    inner: btree_set::Iter<'a, V>,
}

impl<'a, V> VertexIter<'a, V> {
    #[inline]
    pub(super) fn new(inner: btree_set::Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for VertexIter<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for VertexIter<'_, V> {}
impl<V> FusedIterator for VertexIter<'_, V> {}

/// Self-loop merging state, scoped to one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    /// The first stored copy of a loop was seen; the next loop entry confirms it.
    Pending,
}

/// Deduplicating iterator over the edges of a [`UGraph`](super::UGraph).
///
/// Walks the doubled adjacency multimap in key order (and, for equal keys, in
/// insertion order) and yields one borrowed `(first, second)` view per undirected
/// edge:
/// - `first < second`: yielded.
/// - `first > second`: the mirror entry of an edge yielded under the smaller key; skipped.
/// - `first == second`: a self-loop, stored twice. The first copy arms the
///   pending state and is skipped, the second copy is yielded.
///
/// The yielded pair borrows the stored entry; for non-loops it reads as
/// `(smaller, larger)`, for loops as `(v, v)`.
#[derive(Debug, Clone)]
pub struct EdgeIter<'a, V> {
    keys: btree_map::Iter<'a, V, Vec<V>>,
    current: Option<(&'a V, slice::Iter<'a, V>)>,
    state: LoopState,
    remaining: usize,
}

impl<'a, V> EdgeIter<'a, V> {
    pub(super) fn new(adjacency: &'a BTreeMap<V, Vec<V>>, entries: usize) -> Self {
        Self {
            keys: adjacency.iter(),
            current: None,
            state: LoopState::Idle,
            remaining: entries,
        }
    }

    /// Advances to the next stored directed entry.
    fn next_entry(&mut self) -> Option<(&'a V, &'a V)> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    self.remaining -= 1;
                    return Some((*key, value));
                }
            }
            let (key, values) = self.keys.next()?;
            self.current = Some((key, values.iter()));
        }
    }
}

impl<'a, V: Ord> Iterator for EdgeIter<'a, V> {
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (first, second) = self.next_entry()?;
            match first.cmp(second) {
                Ordering::Less => return Some((first, second)),
                Ordering::Greater => {}
                Ordering::Equal => match self.state {
                    LoopState::Idle => self.state = LoopState::Pending,
                    LoopState::Pending => {
                        self.state = LoopState::Idle;
                        return Some((first, second));
                    }
                },
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Each yielded edge consumes at least one stored entry.
        (0, Some(self.remaining))
    }
}

impl<V: Ord> FusedIterator for EdgeIter<'_, V> {}
