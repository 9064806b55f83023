use egui::{Pos2, Rect, Vec2};

use crate::settings::SettingsStyle;

const TRASH_MARGIN: f32 = 8.;

/// Screen regions of the widget, derived each frame from the allocated
/// canvas rect.
///
/// The menu strip is reserved at the top of the canvas for the host's menu
/// bar; the trash drop zone sits at its left edge. Graph presses are only
/// accepted inside the draw area below the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    pub canvas: Rect,
    pub menu_strip: Rect,
    pub draw_area: Rect,
    pub trash_zone: Rect,
}

impl CanvasLayout {
    pub fn new(canvas: Rect, style: &SettingsStyle) -> Self {
        let strip_height = style.menu_strip_height.min(canvas.height());
        let menu_strip = Rect::from_min_size(canvas.min, Vec2::new(canvas.width(), strip_height));
        let draw_area = Rect::from_min_max(
            Pos2::new(canvas.min.x, canvas.min.y + strip_height),
            canvas.max,
        );

        let side = style.trash_zone_side.min(strip_height);
        let trash_zone = Rect::from_min_size(
            Pos2::new(
                canvas.min.x + TRASH_MARGIN,
                canvas.min.y + (strip_height - side) / 2.,
            ),
            Vec2::splat(side),
        );

        Self {
            canvas,
            menu_strip,
            draw_area,
            trash_zone,
        }
    }

    /// Clamps a node position into the draw area, inset by the node radius,
    /// so a released node cannot be stranded under the menu strip or
    /// off-screen.
    pub fn clamp_into_draw_area(&self, pos: Pos2, node_radius: f32) -> Pos2 {
        self.draw_area.shrink(node_radius).clamp(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CanvasLayout {
        let canvas = Rect::from_min_max(Pos2::ZERO, Pos2::new(800., 600.));
        CanvasLayout::new(canvas, &SettingsStyle::default())
    }

    #[test]
    fn regions_partition_canvas() {
        let l = layout();

        assert_eq!(l.menu_strip.height(), 64.);
        assert_eq!(l.draw_area.min.y, 64.);
        assert_eq!(l.draw_area.max, l.canvas.max);
        assert!(l.menu_strip.contains_rect(l.trash_zone));
        assert!(!l.draw_area.contains(l.trash_zone.center()));
    }

    #[test]
    fn clamp_keeps_node_out_of_menu_strip() {
        let l = layout();

        let clamped = l.clamp_into_draw_area(Pos2::new(-50., 10.), 10.);

        assert_eq!(clamped, Pos2::new(10., 74.));
        assert!(l.draw_area.contains(clamped));
    }

    #[test]
    fn clamp_is_identity_inside() {
        let l = layout();
        let pos = Pos2::new(400., 300.);

        assert_eq!(l.clamp_into_draw_area(pos, 10.), pos);
    }
}
