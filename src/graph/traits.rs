use std::fmt::Debug;

use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

use crate::{Error, Result};

/// Identifier of a vertex. Ids are unique within a graph but need not be
/// contiguous or start at zero.
pub type VertexId = usize;

/// Edge weight and accumulated distance type.
///
/// Every weight of a graph shares one fixed-width type. The trait only asks
/// for what relaxation needs: a zero, a total order and an addition that
/// reports overflow instead of wrapping.
pub trait Weight: Copy + Ord + Debug + Send + Sync {
    /// The additive identity, used as the source distance
    fn zero() -> Self;

    /// Adds two weights, returning `None` if the sum is not representable
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Returns true for weights below zero
    fn is_negative(self) -> bool;

    /// Returns false for values that are not a usable weight at all
    fn is_finite(self) -> bool {
        true
    }
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn zero() -> Self {
                <$t as Zero>::zero()
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }

            fn is_negative(self) -> bool {
                false
            }
        }
    )*};
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn zero() -> Self {
                <$t as Zero>::zero()
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }

            fn is_negative(self) -> bool {
                self < <$t as Zero>::zero()
            }
        }
    )*};
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {$(
        impl Weight for OrderedFloat<$t> {
            fn zero() -> Self {
                OrderedFloat(0.0)
            }

            // Finite floats overflow to infinity rather than wrapping
            fn checked_add(self, rhs: Self) -> Option<Self> {
                let sum = self.0 + rhs.0;
                if sum.is_finite() {
                    Some(OrderedFloat(sum))
                } else {
                    None
                }
            }

            fn is_negative(self) -> bool {
                self.0 < 0.0
            }

            // NaN and both infinities
            fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }
    )*};
}

impl_unsigned_weight!(u8, u16, u32, u64, u128, usize);
impl_signed_weight!(i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// Rejects a weight Dijkstra cannot relax over
pub(crate) fn check_edge_weight<W: Weight>(from: VertexId, to: VertexId, weight: W) -> Result<()> {
    if !weight.is_finite() {
        return Err(Error::InvalidWeight {
            from,
            to,
            weight: format!("{:?}", weight),
        });
    }
    if weight.is_negative() {
        return Err(Error::NegativeWeight {
            from,
            to,
            weight: format!("{:?}", weight),
        });
    }
    Ok(())
}

/// Trait representing a weighted directed graph
///
/// The core treats a graph as read-only input. Implementations must look up
/// a vertex's adjacency in O(1) or O(log n).
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the ids of all vertices, in a stable order
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// Fails with [`crate::Error::UnknownVertex`] if the vertex is not registered.
    fn outgoing_edges(
        &self,
        vertex: VertexId,
    ) -> Result<Box<dyn Iterator<Item = (VertexId, W)> + '_>>;

    /// Gets the smallest weight among the edges `from -> to`, if any
    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.outgoing_edges(from)
            .ok()?
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge_weight(from, to).is_some()
    }
}

/// Trait for building a graph before handing it to the core
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Registers a vertex id. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: VertexId) -> bool;

    /// Adds a directed edge between registered vertices
    ///
    /// Parallel edges and self-loops are kept as given.
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()>;
}
