//! Indexed binary min-heap keyed by vertex priority.
//!
//! Alongside the usual array-backed heap, `positions[v]` records which slot
//! holds vertex `v` (or `None` once it has been removed), so membership tests
//! are O(1) and [`IndexedMinHeap::decrease_priority`] can sift a vertex up in
//! place instead of rebuilding the heap.
//!
//! Equal priorities are ordered by vertex id, which keeps extraction order
//! deterministic.

use crate::error::HeapError;

/// Priority assigned to vertices no edge has reached yet.
pub const INFINITE_PRIORITY: u32 = u32::MAX;

/// Min-heap of vertex ids with an id → slot index.
///
/// # Examples
/// ```
/// use tsunagi_core::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new(3);
/// heap.insert(0, 9)?;
/// heap.insert(1, 4)?;
/// heap.insert(2, 7)?;
/// heap.decrease_priority(0, 1)?;
/// assert_eq!(heap.delete_min(), Some((0, 1)));
/// assert!(!heap.contains(0));
/// assert_eq!(heap.delete_min(), Some((1, 4)));
/// # Ok::<(), tsunagi_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots: Vec<usize>,
    positions: Vec<Option<usize>>,
    priorities: Vec<u32>,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to index the ids `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            priorities: vec![INFINITE_PRIORITY; capacity],
        }
    }

    /// Returns the number of ids the heap can index.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of live vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no vertices are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` when `vertex` is live in the heap.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        matches!(self.positions.get(vertex), Some(Some(_)))
    }

    /// Returns the priority of a live vertex.
    #[must_use]
    pub fn priority(&self, vertex: usize) -> Option<u32> {
        self.contains(vertex).then(|| self.priorities[vertex])
    }

    /// Returns the minimum live vertex and its priority without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<(usize, u32)> {
        self.slots
            .first()
            .map(|&vertex| (vertex, self.priorities[vertex]))
    }

    /// Adds `vertex` with the given priority.
    ///
    /// # Errors
    /// Returns [`HeapError::VertexOutOfRange`] for an id beyond the capacity
    /// and [`HeapError::AlreadyPresent`] for a live vertex.
    pub fn insert(&mut self, vertex: usize, priority: u32) -> Result<(), HeapError> {
        self.check_range(vertex)?;
        if self.contains(vertex) {
            return Err(HeapError::AlreadyPresent { vertex });
        }
        let slot = self.slots.len();
        self.slots.push(vertex);
        self.positions[vertex] = Some(slot);
        self.priorities[vertex] = priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the live vertex with the smallest priority.
    ///
    /// The root swaps with the last live slot, the live region shrinks by
    /// one and the new root sifts down.
    pub fn delete_min(&mut self) -> Option<(usize, u32)> {
        let last = self.slots.len().checked_sub(1)?;
        self.swap_slots(0, last);
        let vertex = self.slots.pop()?;
        self.positions[vertex] = None;
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some((vertex, self.priorities[vertex]))
    }

    /// Lowers the priority of a live vertex and restores heap order.
    ///
    /// Requesting the current priority is accepted and changes nothing.
    ///
    /// # Errors
    /// Returns [`HeapError::VertexOutOfRange`], [`HeapError::NotPresent`] for
    /// a removed or never-inserted vertex, and
    /// [`HeapError::PriorityIncrease`] when `priority` exceeds the current
    /// one.
    pub fn decrease_priority(&mut self, vertex: usize, priority: u32) -> Result<(), HeapError> {
        self.check_range(vertex)?;
        let slot = self.positions[vertex].ok_or(HeapError::NotPresent { vertex })?;
        let current = self.priorities[vertex];
        if priority > current {
            return Err(HeapError::PriorityIncrease {
                vertex,
                current,
                requested: priority,
            });
        }
        self.priorities[vertex] = priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes every live vertex, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.positions.fill(None);
        self.priorities.fill(INFINITE_PRIORITY);
    }

    fn check_range(&self, vertex: usize) -> Result<(), HeapError> {
        if vertex < self.capacity() {
            Ok(())
        } else {
            Err(HeapError::VertexOutOfRange {
                vertex,
                capacity: self.capacity(),
            })
        }
    }

    fn key(&self, slot: usize) -> (u32, usize) {
        let vertex = self.slots[slot];
        (self.priorities[vertex], vertex)
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.positions[self.slots[a]] = Some(a);
        self.positions[self.slots[b]] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.key(slot) >= self.key(parent) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.key(right) < self.key(left) {
                right
            } else {
                left
            };
            if self.key(slot) <= self.key(child) {
                break;
            }
            self.swap_slots(slot, child);
            slot = child;
        }
    }
}
