use egui::{Pos2, TouchId};

/// Visual state of a node. The drawing side maps states to concrete
/// colors and scales; the model never stores style data itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeVisualState {
    Normal,
    Held,
}

/// Stores properties of a node.
///
/// A node that is pressed is held by the corresponding touch until that
/// touch ends. At most one touch can hold a node at a time.
#[derive(Clone, Debug, Default)]
pub struct Node {
    location: Pos2,
    held_by: Option<TouchId>,
}

impl Node {
    pub fn new(location: Pos2) -> Self {
        Self {
            location,
            held_by: None,
        }
    }

    pub fn location(&self) -> Pos2 {
        self.location
    }

    pub fn set_location(&mut self, loc: Pos2) {
        self.location = loc;
    }

    /// Identifier of the touch currently holding this node pressed, if any.
    pub fn held_by(&self) -> Option<TouchId> {
        self.held_by
    }

    pub fn set_held_by(&mut self, touch: Option<TouchId>) {
        self.held_by = touch;
    }

    pub fn held(&self) -> bool {
        self.held_by.is_some()
    }

    pub fn visual_state(&self) -> NodeVisualState {
        if self.held() {
            NodeVisualState::Held
        } else {
            NodeVisualState::Normal
        }
    }
}
