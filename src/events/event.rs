use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadNodePlaced {
    pub id: usize,
    pub pos: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadNodeDeleted {
    pub id: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadNodeMoved {
    pub id: usize,
    pub pos: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadEdgeAdded {
    pub ends: [usize; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadEdgeRemoved {
    pub ends: [usize; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadGraphCleared {
    pub nodes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadCanvasResized {
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadZoomChanged {
    pub new_magnification: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadSoundToggled {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadExported {
    pub format: String,
    pub chars: usize,
}

/// Feedback cues published by the widget. All cues are fire-and-forget;
/// the widget behaves identically whether or not anyone listens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    NodePlaced(PayloadNodePlaced),
    NodeDeleted(PayloadNodeDeleted),
    NodeMoved(PayloadNodeMoved),
    EdgeAdded(PayloadEdgeAdded),
    EdgeRemoved(PayloadEdgeRemoved),
    GraphCleared(PayloadGraphCleared),
    CanvasResized(PayloadCanvasResized),
    ZoomChanged(PayloadZoomChanged),
    SoundToggled(PayloadSoundToggled),
    Exported(PayloadExported),
}
