use egui::Color32;

#[derive(Debug, Clone)]
pub struct SettingsInteraction {
    /// Maximum distance from a press point for it to pick the nearest node
    pub node_pick_radius: f32,

    /// Node dragging
    pub node_drag: bool,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            node_pick_radius: 40.,
            node_drag: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsNavigation {
    /// Zoom step applied by the zoom-in/zoom-out entry points; a step of
    /// 0.2 means multiplicative steps of x1.2 and /1.2
    pub zoom_step: f32,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self { zoom_step: 0.2 }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Height of the strip reserved at the top of the canvas for the host's
    /// menu bar; presses there never reach the graph
    pub menu_strip_height: f32,

    /// Side of the square trash drop zone inside the menu strip
    pub trash_zone_side: f32,

    pub node_radius: f32,
    pub node_radius_held: f32,
    pub edge_width: f32,

    pub color_node: Color32,
    pub color_node_held: Color32,
    pub color_edge: Color32,
    pub color_trash_zone: Color32,
    pub color_trash_armed: Color32,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            menu_strip_height: 64.,
            trash_zone_side: 48.,
            node_radius: 10.,
            node_radius_held: 16.,
            edge_width: 4.,
            color_node: Color32::LIGHT_GRAY,
            color_node_held: Color32::from_rgb(0xd4, 0x0c, 0x0c),
            color_edge: Color32::from_rgb(0x2e, 0x7d, 0x32),
            color_trash_zone: Color32::DARK_GRAY,
            color_trash_armed: Color32::RED,
        }
    }
}
