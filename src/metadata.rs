use egui::{Id, Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::Graph;

const KEY: &str = "egui_graph_sketch_metadata";

/// View state persisted between frames in the egui `Ui` data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Whether the frame is the first one
    pub first_frame: bool,
    /// Current magnification factor; 1.0 means 100%. Unbounded in both
    /// directions.
    pub magnification: f32,
    /// Canvas rect of the widget in screen coordinates
    pub canvas: Rect,
    /// Whether feedback sound cues are enabled
    pub sound_enabled: bool,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            first_frame: true,
            magnification: 1.,
            canvas: Rect::from_min_max(Pos2::ZERO, Pos2::ZERO),
            sound_enabled: false,
        }
    }
}

impl Metadata {
    pub fn load(ui: &egui::Ui) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<Metadata>(Id::new(KEY))
                .unwrap_or_default()
        })
    }

    pub fn save(self, ui: &mut egui::Ui) {
        ui.data_mut(|data| {
            data.insert_persisted(Id::new(KEY), self);
        });
    }

    /// Multiplies the magnification by `factor` and repositions every node
    /// so that scaling is anchored at the canvas center, then recomputes
    /// all edge geometry.
    pub fn rescale(&mut self, g: &mut Graph, factor: f32) {
        self.magnification *= factor;

        let center = self.canvas.center();
        let moved: Vec<_> = g
            .nodes()
            .map(|(idx, n)| (idx, center + (n.location() - center) * factor))
            .collect();
        for (idx, pos) in moved {
            if let Some(n) = g.node_mut(idx) {
                n.set_location(pos);
            }
        }

        g.sync_all_edges();
    }

    /// Magnification in percent, for display next to the zoom controls.
    pub fn magnification_percent(&self) -> i32 {
        (self.magnification * 100.) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_with_canvas() -> Metadata {
        Metadata {
            canvas: Rect::from_min_max(Pos2::ZERO, Pos2::new(800., 600.)),
            ..Default::default()
        }
    }

    #[test]
    fn rescale_anchored_at_center() {
        let mut meta = meta_with_canvas();
        let mut g = Graph::new();
        let center = g.add_node(meta.canvas.center());
        let off = g.add_node(Pos2::new(500., 400.));

        meta.rescale(&mut g, 2.);

        assert_eq!(meta.magnification, 2.);
        // the center node does not move
        assert_eq!(g.node(center).unwrap().location(), meta.canvas.center());
        // (500, 400) is (100, 100) off center, doubled to (200, 200)
        assert_eq!(g.node(off).unwrap().location(), Pos2::new(600., 500.));
    }

    #[test]
    fn rescale_invertible() {
        let mut meta = meta_with_canvas();
        let mut g = Graph::new();
        let idx = g.add_node(Pos2::new(123.4, 567.8));
        let original = g.node(idx).unwrap().location();

        let factor = 1.2;
        meta.rescale(&mut g, factor);
        meta.rescale(&mut g, 1. / factor);

        let restored = g.node(idx).unwrap().location();
        assert!((restored - original).length() < 1e-3);
        assert!((meta.magnification - 1.).abs() < 1e-6);
    }

    #[test]
    fn rescale_updates_edge_geometry() {
        let mut meta = meta_with_canvas();
        let mut g = Graph::new();
        let a = g.add_node(Pos2::new(400., 300.));
        let b = g.add_node(Pos2::new(464., 300.));
        let e = g.add_edge(a, b).unwrap();

        meta.rescale(&mut g, 2.);

        let geom = g.edge(e).unwrap().geometry();
        assert_eq!(geom.scale, 2.);
        assert_eq!(geom.origin, g.node(a).unwrap().location());
    }
}
