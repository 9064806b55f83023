//! Touch-first sketching widget for small undirected graphs.
//!
//! Tap empty space to place a node, press several nodes at once to toggle
//! the edges between them, drag nodes around, drop a node on the trash
//! zone to delete it, hold the trash zone to clear the whole graph, and
//! export the sketch to the clipboard as a `TikZ` picture or Python lists.

pub mod controller;
mod draw;
mod elements;
mod events;
mod export;
mod graph;
mod layout;
mod metadata;
mod settings;
mod trash;
mod view;

pub use self::elements::{Edge, EdgeGeometry, Node, NodeVisualState, EDGE_UNIT_LENGTH};
pub use self::events::{
    Event, PayloadCanvasResized, PayloadEdgeAdded, PayloadEdgeRemoved, PayloadExported,
    PayloadGraphCleared, PayloadNodeDeleted, PayloadNodeMoved, PayloadNodePlaced,
    PayloadSoundToggled, PayloadZoomChanged,
};
pub use self::export::{to_listing, to_tikz, ExportFormat};
pub use self::graph::{EdgeToggle, Graph};
pub use self::layout::CanvasLayout;
pub use self::metadata::Metadata;
pub use self::settings::{SettingsInteraction, SettingsNavigation, SettingsStyle};
pub use self::trash::{TrashControl, HOLD_CLEAR_DURATION};
pub use self::view::GraphSketchView;
