use std::sync::Arc;

use crate::data_structures::VertexIndex;
use crate::graph::{VertexId, Weight};
use crate::Result;

/// Tentative or final distance of a vertex
///
/// `Infinite` sorts above every finite value, so it doubles as the "not
/// reached yet" key in the priority map without reserving a weight value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    /// Returns the finite value, or `None` for `Infinite`
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

/// Working state of one vertex during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRecord<W> {
    /// Best distance found so far
    pub distance: Distance<W>,

    /// Previous vertex on the best known path; `None` for the source and
    /// for vertices not reached
    pub predecessor: Option<VertexId>,
}

impl<W> VertexRecord<W> {
    fn unreached() -> Self {
        VertexRecord {
            distance: Distance::Infinite,
            predecessor: None,
        }
    }
}

/// Per-vertex distance and predecessor table for one run
///
/// The table is sized once to the id set of its [`VertexIndex`]; afterwards
/// only values change. Reads and writes cost one index lookup plus one array
/// access.
#[derive(Debug, Clone)]
pub struct VertexState<W> {
    index: Arc<VertexIndex>,
    records: Vec<VertexRecord<W>>,
}

impl<W> VertexState<W>
where
    W: Weight,
{
    /// Builds the state over `vertex_ids` with `source` at distance zero
    pub fn build<I>(vertex_ids: I, source: VertexId) -> Result<Self>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let index = Arc::new(VertexIndex::build(vertex_ids)?);
        Self::with_index(index, source)
    }

    /// Builds the state over an existing index, sharing it
    pub fn with_index(index: Arc<VertexIndex>, source: VertexId) -> Result<Self> {
        let source_slot = index.slot(source)?;
        let mut records = vec![VertexRecord::unreached(); index.len()];
        records[source_slot].distance = Distance::Finite(W::zero());

        Ok(VertexState { index, records })
    }

    /// Returns the record of `id`
    pub fn get(&self, id: VertexId) -> Result<VertexRecord<W>> {
        let slot = self.index.slot(id)?;
        Ok(self.records[slot])
    }

    /// Overwrites the record of `id`
    pub fn set(
        &mut self,
        id: VertexId,
        distance: Distance<W>,
        predecessor: Option<VertexId>,
    ) -> Result<()> {
        let slot = self.index.slot(id)?;
        self.records[slot] = VertexRecord {
            distance,
            predecessor,
        };
        Ok(())
    }

    pub fn distance(&self, id: VertexId) -> Result<Distance<W>> {
        self.get(id).map(|record| record.distance)
    }

    pub fn predecessor(&self, id: VertexId) -> Result<Option<VertexId>> {
        self.get(id).map(|record| record.predecessor)
    }

    /// Number of vertices covered
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if `id` is part of the fixed id set
    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains(id)
    }

    /// Ids covered by this state, in slot order
    pub fn vertex_ids(&self) -> &[VertexId] {
        self.index.ids()
    }

    /// Iterates over `(id, record)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &VertexRecord<W>)> + '_ {
        self.index.ids().iter().copied().zip(self.records.iter())
    }

    /// The index this state is keyed by
    pub fn index(&self) -> &Arc<VertexIndex> {
        &self.index
    }
}
