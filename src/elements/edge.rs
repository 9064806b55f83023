use egui::Pos2;

/// Reference length of the edge drawable. The derived `scale` stretches a
/// drawable of this length so that it exactly spans the two endpoints.
pub const EDGE_UNIT_LENGTH: f32 = 64.;

/// Drawable geometry of an edge derived from its endpoint positions.
///
/// The drawable is anchored at `origin` (the start of the segment, at the
/// midpoint of its thickness), stretched by `scale` along its length and
/// rotated by `angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
    pub origin: Pos2,
    pub scale: f32,
    pub angle: f32,
}

impl EdgeGeometry {
    /// Computes the geometry of a segment spanning `a -> b`.
    pub fn between(a: Pos2, b: Pos2) -> Self {
        let d = b - a;
        Self {
            origin: a,
            scale: d.length() / EDGE_UNIT_LENGTH,
            angle: d.y.atan2(d.x),
        }
    }

    /// End point of the segment, `origin` displaced by the scaled length.
    pub fn end(&self) -> Pos2 {
        self.origin + egui::Vec2::angled(self.angle) * (self.scale * EDGE_UNIT_LENGTH)
    }
}

/// Stores properties of an edge.
#[derive(Clone, Debug)]
pub struct Edge {
    geometry: EdgeGeometry,
}

impl Edge {
    pub fn new(a: Pos2, b: Pos2) -> Self {
        Self {
            geometry: EdgeGeometry::between(a, b),
        }
    }

    pub fn geometry(&self) -> &EdgeGeometry {
        &self.geometry
    }

    /// Recomputes the drawable geometry from the endpoints' current
    /// positions. Must be called whenever either endpoint moves.
    pub fn sync(&mut self, a: Pos2, b: Pos2) {
        self.geometry = EdgeGeometry::between(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_spans_endpoints() {
        let a = Pos2::new(10., 20.);
        let b = Pos2::new(74., 20.);

        let geom = EdgeGeometry::between(a, b);

        assert_eq!(geom.origin, a);
        assert_eq!(geom.scale, 1.);
        assert_eq!(geom.angle, 0.);
        assert!((geom.end() - b).length() < 1e-4);
    }

    #[test]
    fn geometry_rotation() {
        let a = Pos2::new(0., 0.);
        let b = Pos2::new(0., 128.);

        let geom = EdgeGeometry::between(a, b);

        assert_eq!(geom.scale, 2.);
        assert!((geom.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((geom.end() - b).length() < 1e-4);
    }
}
