//! The touch state machine: maps raw touch begin/move/end events to graph
//! mutations.
//!
//! Per-touch state lives on the nodes themselves ([`crate::Node::held_by`])
//! and in the [`TrashControl`], so the machine is a set of free functions
//! over the model and can be driven directly in tests without any egui
//! plumbing. Each touch holds at most one node, and a node is held by at
//! most one touch.

use egui::{Pos2, TouchId};
use instant::Instant;
use petgraph::stable_graph::NodeIndex;

use crate::events::{
    Event, PayloadEdgeAdded, PayloadEdgeRemoved, PayloadNodeDeleted, PayloadNodeMoved,
    PayloadNodePlaced,
};
use crate::graph::EdgeToggle;
use crate::layout::CanvasLayout;
use crate::settings::{SettingsInteraction, SettingsStyle};
use crate::trash::TrashControl;
use crate::{Graph, Node};

/// Nearest node not currently held by any touch, with its distance to
/// `pos`. Exact ties resolve to the first node in iteration order.
fn nearest_free_node(g: &Graph, pos: Pos2) -> Option<(NodeIndex, f32)> {
    let mut best: Option<(NodeIndex, f32)> = None;
    for (idx, n) in g.nodes() {
        if n.held() {
            continue;
        }
        let d = (n.location() - pos).length();
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((idx, d));
        }
    }
    best
}

fn node_held_by(g: &Graph, id: TouchId) -> Option<NodeIndex> {
    g.nodes()
        .find(|(_, n)| n.held_by() == Some(id))
        .map(|(idx, _)| idx)
}

/// A touch began.
///
/// Inside the trash zone the touch arms the clear countdown. Inside the
/// draw area it either picks the nearest free node within the pick radius
/// (toggling edges to every node held by a different touch) or places a
/// new node at the press point. The new node is not auto-held. Presses in
/// the menu strip or outside the canvas are ignored.
pub fn touch_start(
    g: &mut Graph,
    trash: &mut TrashControl,
    layout: &CanvasLayout,
    interaction: &SettingsInteraction,
    id: TouchId,
    pos: Pos2,
    now: Instant,
    cues: &mut Vec<Event>,
) {
    if layout.trash_zone.contains(pos) {
        trash.press(id, now);
        return;
    }
    if !layout.draw_area.contains(pos) {
        return;
    }
    if node_held_by(g, id).is_some() {
        // stale begin for a touch we already track
        return;
    }

    let picked = match nearest_free_node(g, pos) {
        Some((idx, d)) if d <= interaction.node_pick_radius => idx,
        _ => {
            let idx = g.add_node(pos);
            cues.push(Event::NodePlaced(PayloadNodePlaced {
                id: idx.index(),
                pos: [pos.x, pos.y],
            }));
            return;
        }
    };

    if let Some(n) = g.node_mut(picked) {
        n.set_held_by(Some(id));
    }

    // toggle the edge between the newly picked node and every node held by
    // another touch
    let others: Vec<NodeIndex> = g
        .nodes()
        .filter(|(idx, n)| *idx != picked && n.held())
        .map(|(idx, _)| idx)
        .collect();
    for other in others {
        let ends = [picked.index(), other.index()];
        match g.toggle_edge(picked, other) {
            Some(EdgeToggle::Added) => cues.push(Event::EdgeAdded(PayloadEdgeAdded { ends })),
            Some(EdgeToggle::Removed) => cues.push(Event::EdgeRemoved(PayloadEdgeRemoved { ends })),
            None => {}
        }
    }
}

/// A touch moved. If it holds a node, the node follows the touch and the
/// geometry of its incident edges is recomputed.
pub fn touch_move(
    g: &mut Graph,
    interaction: &SettingsInteraction,
    id: TouchId,
    pos: Pos2,
    cues: &mut Vec<Event>,
) {
    if !interaction.node_drag {
        return;
    }
    let Some(idx) = node_held_by(g, id) else {
        return;
    };

    if let Some(n) = g.node_mut(idx) {
        n.set_location(pos);
    }
    g.sync_edges_of(idx);
    cues.push(Event::NodeMoved(PayloadNodeMoved {
        id: idx.index(),
        pos: [pos.x, pos.y],
    }));
}

/// A touch ended.
///
/// Releasing the trash zone before the deadline cancels the armed clear.
/// A held node dropped on the trash zone is deleted together with its
/// incident edges; otherwise it is released in place, clamped into the
/// draw area. Per-touch state is cleared regardless of outcome.
pub fn touch_end(
    g: &mut Graph,
    trash: &mut TrashControl,
    layout: &CanvasLayout,
    style: &SettingsStyle,
    id: TouchId,
    cues: &mut Vec<Event>,
) {
    if trash.release(id) {
        return;
    }
    let Some(idx) = node_held_by(g, id) else {
        return;
    };

    let Some(dropped_at) = g.node(idx).map(Node::location) else {
        return;
    };
    if layout.trash_zone.contains(dropped_at) {
        g.remove_node(idx);
        cues.push(Event::NodeDeleted(PayloadNodeDeleted { id: idx.index() }));
        return;
    }

    let clamped = layout.clamp_into_draw_area(dropped_at, style.node_radius);
    if let Some(n) = g.node_mut(idx) {
        n.set_held_by(None);
        n.set_location(clamped);
    }
    g.sync_edges_of(idx);
}
