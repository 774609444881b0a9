use std::fmt::Debug;
use std::sync::Arc;

use crate::data_structures::VertexIndex;
use crate::graph::VertexId;
use crate::{Error, Result};

/// An entry handed out by the priority map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityEntry<K> {
    pub key: K,
    pub payload: VertexId,
}

/// Heap cell; stores the payload's slot so swaps never touch the index
#[derive(Debug, Clone, Copy)]
struct HeapCell<K> {
    key: K,
    slot: usize,
}

/// Binary min-heap over vertex ids with decrease-key located by payload
///
/// Alongside the heap array the map keeps `positions`, the current heap
/// position of every payload, addressed through the run's [`VertexIndex`].
/// Every swap updates both sides, so finding a payload is O(1) and
/// decrease-key is O(log n). Ties between equal keys are broken by heap
/// position only.
#[derive(Debug, Clone)]
pub struct PriorityMap<K>
where
    K: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: Vec<HeapCell<K>>,

    /// slot -> heap position, `None` when the payload is not queued
    positions: Vec<Option<usize>>,

    index: Arc<VertexIndex>,
}

impl<K> PriorityMap<K>
where
    K: Ord + Copy + Debug,
{
    /// Creates an empty map able to hold every id of `index`
    pub fn with_index(index: Arc<VertexIndex>) -> Self {
        PriorityMap {
            heap: Vec::with_capacity(index.len()),
            positions: vec![None; index.len()],
            index,
        }
    }

    /// Returns true if the priority map is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `payload` with `key`
    ///
    /// Fails with [`Error::DuplicatePayload`] if the payload is already queued.
    pub fn insert(&mut self, key: K, payload: VertexId) -> Result<()> {
        let slot = self.index.slot(payload)?;
        if self.positions[slot].is_some() {
            return Err(Error::DuplicatePayload(payload));
        }

        let position = self.heap.len();
        self.heap.push(HeapCell { key, slot });
        self.positions[slot] = Some(position);
        self.sift_up(position);
        Ok(())
    }

    /// Removes and returns the entry with the smallest key
    pub fn extract_min(&mut self) -> Result<PriorityEntry<K>> {
        let last = self.heap.len().checked_sub(1).ok_or(Error::EmptyQueue)?;
        self.swap(0, last);

        let cell = self.heap.pop().ok_or(Error::EmptyQueue)?;
        self.positions[cell.slot] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok(PriorityEntry {
            key: cell.key,
            payload: self.index.id_at(cell.slot),
        })
    }

    /// Returns the entry with the smallest key without removing it
    pub fn peek(&self) -> Option<PriorityEntry<K>> {
        self.heap.first().map(|cell| PriorityEntry {
            key: cell.key,
            payload: self.index.id_at(cell.slot),
        })
    }

    /// Returns the heap position currently holding `payload`
    pub fn find_by_payload(&self, payload: VertexId) -> Option<usize> {
        self.index
            .slot_of(payload)
            .and_then(|slot| self.positions[slot])
    }

    /// Returns true if `payload` is queued
    pub fn contains(&self, payload: VertexId) -> bool {
        self.find_by_payload(payload).is_some()
    }

    /// Returns the key of a queued payload
    pub fn key_of(&self, payload: VertexId) -> Option<K> {
        self.find_by_payload(payload)
            .map(|position| self.heap[position].key)
    }

    /// Lowers the key stored at `position` and restores heap order
    ///
    /// An equal key is accepted and leaves the heap unchanged; a larger key
    /// fails with [`Error::InvalidDecrease`].
    pub fn decrease_key(&mut self, position: usize, new_key: K) -> Result<()> {
        let cell = self
            .heap
            .get_mut(position)
            .ok_or(Error::InvalidPosition(position))?;
        if new_key > cell.key {
            return Err(Error::InvalidDecrease {
                position,
                current: format!("{:?}", cell.key),
                requested: format!("{:?}", new_key),
            });
        }

        cell.key = new_key;
        self.sift_up(position);
        Ok(())
    }

    /// Finds `payload` and lowers its key
    ///
    /// Returns false if the payload is known but no longer queued.
    pub fn decrease_key_of(&mut self, payload: VertexId, new_key: K) -> Result<bool> {
        let slot = self.index.slot(payload)?;
        match self.positions[slot] {
            Some(position) => self.decrease_key(position, new_key).map(|_| true),
            None => Ok(false),
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].slot] = Some(a);
        self.positions[self.heap[b].slot] = Some(b);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.heap[position].key >= self.heap[parent].key {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < len && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }
            if smallest == position {
                break;
            }

            self.swap(position, smallest);
            position = smallest;
        }
    }
}
