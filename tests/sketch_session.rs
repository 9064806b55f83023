//! Drives a full sketching session through the public API: placing nodes,
//! toggling edges with simultaneous touches, dragging, deleting via the
//! trash zone, rescaling and exporting.

use egui::{Pos2, Rect, TouchId};
use instant::Instant;

use egui_graph_sketch::controller::{touch_end, touch_move, touch_start};
use egui_graph_sketch::{
    to_listing, to_tikz, CanvasLayout, Event, Graph, Metadata, SettingsInteraction, SettingsStyle,
    TrashControl, HOLD_CLEAR_DURATION,
};

struct Session {
    g: Graph,
    trash: TrashControl,
    layout: CanvasLayout,
    interaction: SettingsInteraction,
    style: SettingsStyle,
    cues: Vec<Event>,
    now: Instant,
}

impl Session {
    fn new() -> Self {
        let style = SettingsStyle::default();
        let canvas = Rect::from_min_max(Pos2::ZERO, Pos2::new(1024., 768.));
        Self {
            g: Graph::new(),
            trash: TrashControl::new(),
            layout: CanvasLayout::new(canvas, &style),
            interaction: SettingsInteraction::default(),
            style,
            cues: Vec::new(),
            now: Instant::now(),
        }
    }

    fn tap(&mut self, id: u64, pos: Pos2) {
        self.press(id, pos);
        self.lift(id);
    }

    fn press(&mut self, id: u64, pos: Pos2) {
        touch_start(
            &mut self.g,
            &mut self.trash,
            &self.layout,
            &self.interaction,
            TouchId(id),
            pos,
            self.now,
            &mut self.cues,
        );
    }

    fn drag(&mut self, id: u64, pos: Pos2) {
        touch_move(
            &mut self.g,
            &self.interaction,
            TouchId(id),
            pos,
            &mut self.cues,
        );
    }

    fn lift(&mut self, id: u64) {
        touch_end(
            &mut self.g,
            &mut self.trash,
            &self.layout,
            &self.style,
            TouchId(id),
            &mut self.cues,
        );
    }
}

#[test]
fn sketch_triangle_and_export() {
    let mut s = Session::new();

    // place three nodes on empty canvas
    s.tap(1, Pos2::new(100., 200.));
    s.tap(1, Pos2::new(300., 200.));
    s.tap(1, Pos2::new(300., 400.));
    assert_eq!(s.g.node_count(), 3);
    assert_eq!(s.g.edge_count(), 0);

    // connect them pairwise with two-finger presses
    s.press(1, Pos2::new(100., 200.));
    s.press(2, Pos2::new(300., 200.));
    s.lift(2);
    s.press(2, Pos2::new(300., 400.));
    s.lift(1);
    s.press(1, Pos2::new(300., 200.));
    s.lift(1);
    s.lift(2);
    assert_eq!(s.g.edge_count(), 3);

    let listing = to_listing(&s.g);
    assert_eq!(
        listing,
        "GraphNodes = [[100, 200], [300, 200], [300, 400]];  \
         GraphEdges = [[0, 1], [0, 2], [1, 2]]"
    );

    let tikz = to_tikz(&s.g);
    assert_eq!(tikz.matches("\\draw[very thick]").count(), 3);
    assert_eq!(tikz.matches("circle [radius = 2pt]").count(), 3);
}

#[test]
fn second_two_finger_press_disconnects() {
    let mut s = Session::new();
    let x = s.g.add_node(Pos2::new(200., 300.));
    let y = s.g.add_node(Pos2::new(600., 300.));

    s.press(1, Pos2::new(200., 300.));
    s.press(2, Pos2::new(600., 300.));
    assert!(s.g.edge_between(x, y).is_some());

    s.lift(2);
    s.press(2, Pos2::new(600., 300.));
    assert!(s.g.edge_between(x, y).is_none());

    s.lift(1);
    s.lift(2);
}

#[test]
fn drag_to_trash_deletes() {
    let mut s = Session::new();
    let a = s.g.add_node(Pos2::new(200., 300.));
    let b = s.g.add_node(Pos2::new(600., 300.));
    s.g.add_edge(a, b);

    s.press(1, Pos2::new(200., 300.));
    s.drag(1, s.layout.trash_zone.center());
    s.lift(1);

    assert_eq!(s.g.node_count(), 1);
    assert_eq!(s.g.edge_count(), 0);
    assert!(s
        .cues
        .iter()
        .any(|c| matches!(c, Event::NodeDeleted(_))));
}

#[test]
fn held_trash_clears_graph_after_deadline() {
    let mut s = Session::new();
    s.tap(1, Pos2::new(200., 300.));
    s.tap(1, Pos2::new(600., 300.));

    s.press(1, s.layout.trash_zone.center());
    assert!(s.trash.armed());

    // deadline not reached yet
    assert!(!s.trash.poll(s.now + HOLD_CLEAR_DURATION / 2));
    assert!(s.trash.poll(s.now + HOLD_CLEAR_DURATION));
    s.g.clear();
    assert_eq!(s.g.node_count(), 0);
}

#[test]
fn rescale_roundtrip_preserves_export() {
    let mut s = Session::new();
    s.tap(1, Pos2::new(100., 200.));
    s.tap(1, Pos2::new(300., 400.));

    let mut meta = Metadata {
        canvas: s.layout.canvas,
        ..Default::default()
    };
    let before = to_listing(&s.g);

    meta.rescale(&mut s.g, 1.2);
    meta.rescale(&mut s.g, 1. / 1.2);

    assert_eq!(to_listing(&s.g), before);
}
