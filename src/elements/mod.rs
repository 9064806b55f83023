mod edge;
mod node;

pub use edge::{Edge, EdgeGeometry, EDGE_UNIT_LENGTH};
pub use node::{Node, NodeVisualState};
