use egui::{CornerRadius, Painter, Rect, Stroke, Vec2};

use crate::elements::NodeVisualState;
use crate::settings::SettingsStyle;
use crate::Graph;

/// Draws edges as oriented segments derived from their stored geometry,
/// then nodes on top as filled circles.
pub(crate) fn draw_graph(p: &Painter, g: &Graph, style: &SettingsStyle) {
    let stroke = Stroke::new(style.edge_width, style.color_edge);
    for (_, e) in g.edges() {
        let geom = e.geometry();
        p.line_segment([geom.origin, geom.end()], stroke);
    }

    for (_, n) in g.nodes() {
        let (radius, color) = match n.visual_state() {
            NodeVisualState::Normal => (style.node_radius, style.color_node),
            NodeVisualState::Held => (style.node_radius_held, style.color_node_held),
        };
        p.circle_filled(n.location(), radius, color);
    }
}

/// Draws the trash drop zone. While the clear countdown is armed the zone
/// grows with the countdown progress, mirroring the arming animation of
/// the original control.
pub(crate) fn draw_trash_zone(p: &Painter, zone: Rect, progress: f32, style: &SettingsStyle) {
    let color = if progress > 0. {
        style.color_trash_armed
    } else {
        style.color_trash_zone
    };

    let rect = zone.expand(progress * zone.width());
    p.rect_filled(rect, CornerRadius::same(4), color);

    // lid cross
    let cross = rect.shrink(rect.width() * 0.3);
    let stroke = Stroke::new(2., style.color_node);
    p.line_segment([cross.min, cross.max], stroke);
    p.line_segment(
        [
            cross.min + Vec2::new(cross.width(), 0.),
            cross.max - Vec2::new(cross.width(), 0.),
        ],
        stroke,
    );
}
