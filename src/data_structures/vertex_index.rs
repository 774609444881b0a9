use std::collections::HashSet;

use log::debug;

use crate::graph::VertexId;
use crate::{Error, Result};

/// Marks an unused table cell
const EMPTY: usize = usize::MAX;

/// Ids spanning at most this many times the vertex count use a direct table
const DIRECT_SPAN_FACTOR: usize = 4;

/// Upper bound on the total secondary table size, as a multiple of the vertex count
const SECONDARY_SPACE_FACTOR: usize = 4;

/// Seeds tried per level before giving up
const MAX_SEED_ATTEMPTS: u64 = 256;

/// Secondary table of one first-level bucket
#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    /// Start of this bucket's cells in the shared table
    offset: usize,

    /// Number of cells (square of the bucket population)
    size: usize,

    /// Seed that makes the bucket's keys collision-free
    seed: u64,
}

#[derive(Debug, Clone)]
enum Layout {
    /// `table[id - base]` holds the slot
    Direct { base: VertexId, table: Vec<usize> },

    /// Two-level perfect hash over scattered ids
    PerfectHash {
        seed: u64,
        buckets: Vec<Bucket>,
        table: Vec<usize>,
    },
}

/// Fixed-key-set map from vertex ids to dense slots `0..n`
///
/// Built once from a known id set and never modified afterwards. Dense id
/// ranges are addressed directly; scattered ids go through a two-level (FKS)
/// perfect hash, so every lookup is a constant number of array reads with no
/// probing. Slots follow the order in which ids were supplied.
#[derive(Debug, Clone)]
pub struct VertexIndex {
    /// slot -> vertex id
    keys: Vec<VertexId>,

    layout: Layout,
}

impl VertexIndex {
    /// Builds the index over `ids`
    ///
    /// Fails with [`Error::DuplicateVertex`] if an id repeats.
    pub fn build<I>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let keys: Vec<VertexId> = ids.into_iter().collect();

        let (min, max) = match (keys.iter().copied().min(), keys.iter().copied().max()) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                return Ok(VertexIndex {
                    keys,
                    layout: Layout::Direct {
                        base: 0,
                        table: Vec::new(),
                    },
                })
            }
        };

        let n = keys.len();
        let span = (max - min).saturating_add(1);
        let layout = if span <= n.saturating_mul(DIRECT_SPAN_FACTOR) {
            debug!("vertex index: direct table over {} ids, span {}", n, span);
            Self::direct_layout(&keys, min, span)?
        } else {
            debug!("vertex index: perfect hash over {} ids, span {}", n, span);
            Self::perfect_hash_layout(&keys)?
        };

        Ok(VertexIndex { keys, layout })
    }

    fn direct_layout(keys: &[VertexId], base: VertexId, span: usize) -> Result<Layout> {
        let mut table = vec![EMPTY; span];
        for (slot, &id) in keys.iter().enumerate() {
            let cell = &mut table[id - base];
            if *cell != EMPTY {
                return Err(Error::DuplicateVertex(id));
            }
            *cell = slot;
        }
        Ok(Layout::Direct { base, table })
    }

    fn perfect_hash_layout(keys: &[VertexId]) -> Result<Layout> {
        let n = keys.len();
        let space_limit = n.saturating_mul(SECONDARY_SPACE_FACTOR);

        // A repeated id lands in one bucket for every seed and would exhaust the search
        let mut seen = HashSet::with_capacity(n);
        if let Some(&id) = keys.iter().find(|&&id| !seen.insert(id)) {
            return Err(Error::DuplicateVertex(id));
        }

        // First level: spread keys over n buckets with small total squared size
        let (seed, members) = (0..MAX_SEED_ATTEMPTS)
            .find_map(|seed| {
                let mut members: Vec<Vec<usize>> = vec![Vec::new(); n];
                for (slot, &id) in keys.iter().enumerate() {
                    members[reduce(mix(id, seed), n)].push(slot);
                }
                let space: usize = members.iter().map(|m| m.len() * m.len()).sum();
                (space <= space_limit).then_some((seed, members))
            })
            .ok_or(Error::IndexConstruction(n))?;

        // Second level: a collision-free table of size b^2 per bucket
        let mut buckets = vec![Bucket::default(); n];
        let mut table = Vec::with_capacity(space_limit);
        for (bucket, slots) in buckets.iter_mut().zip(&members) {
            if slots.is_empty() {
                continue;
            }
            let size = slots.len() * slots.len();
            let (bucket_seed, cells) = Self::place_bucket(keys, slots, size)?;
            *bucket = Bucket {
                offset: table.len(),
                size,
                seed: bucket_seed,
            };
            table.extend(cells);
        }

        Ok(Layout::PerfectHash {
            seed,
            buckets,
            table,
        })
    }

    fn place_bucket(keys: &[VertexId], slots: &[usize], size: usize) -> Result<(u64, Vec<usize>)> {
        'seeds: for seed in 0..MAX_SEED_ATTEMPTS {
            let mut cells = vec![EMPTY; size];
            for &slot in slots {
                let id = keys[slot];
                let cell = &mut cells[reduce(mix(id, seed), size)];
                if *cell != EMPTY {
                    continue 'seeds;
                }
                *cell = slot;
            }
            return Ok((seed, cells));
        }
        Err(Error::IndexConstruction(keys.len()))
    }

    /// Returns the slot of `id`, or `None` if it is not in the key set
    pub fn slot_of(&self, id: VertexId) -> Option<usize> {
        let slot = match &self.layout {
            Layout::Direct { base, table } => *table.get(id.checked_sub(*base)?)?,
            Layout::PerfectHash {
                seed,
                buckets,
                table,
            } => {
                let bucket = buckets[reduce(mix(id, *seed), buckets.len())];
                if bucket.size == 0 {
                    return None;
                }
                table[bucket.offset + reduce(mix(id, bucket.seed), bucket.size)]
            }
        };

        // Unknown ids can hash onto an occupied cell
        (slot != EMPTY && self.keys[slot] == id).then_some(slot)
    }

    /// Returns the slot of `id`, failing with [`Error::UnknownVertex`]
    pub fn slot(&self, id: VertexId) -> Result<usize> {
        self.slot_of(id).ok_or(Error::UnknownVertex(id))
    }

    /// Returns the id stored at `slot`; `slot` must come from this index
    pub(crate) fn id_at(&self, slot: usize) -> VertexId {
        self.keys[slot]
    }

    /// Returns true if `id` belongs to the key set
    pub fn contains(&self, id: VertexId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Number of ids in the key set
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All ids, in slot order
    pub fn ids(&self) -> &[VertexId] {
        &self.keys
    }

    /// Returns true when the index fell back to perfect hashing
    pub fn is_hashed(&self) -> bool {
        matches!(self.layout, Layout::PerfectHash { .. })
    }
}

/// SplitMix64 finalizer over a seeded key
fn mix(id: VertexId, seed: u64) -> u64 {
    let mut z = (id as u64).wrapping_add(seed.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn reduce(hash: u64, size: usize) -> usize {
    (hash % size as u64) as usize
}
