pub mod priority_map;
pub mod vertex_index;
pub mod vertex_state;

pub use priority_map::{PriorityEntry, PriorityMap};
pub use vertex_index::VertexIndex;
pub use vertex_state::{Distance, VertexRecord, VertexState};
