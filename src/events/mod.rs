mod event;

pub use event::{
    Event, PayloadCanvasResized, PayloadEdgeAdded, PayloadEdgeRemoved, PayloadExported,
    PayloadGraphCleared, PayloadNodeDeleted, PayloadNodeMoved, PayloadNodePlaced,
    PayloadSoundToggled, PayloadZoomChanged,
};
