use egui::{Pos2, Response, Sense, TouchId, TouchPhase, Ui, Widget};
use instant::Instant;

#[cfg(feature = "events")]
use crossbeam::channel::Sender;

use crate::controller;
use crate::draw;
use crate::events::{
    Event, PayloadCanvasResized, PayloadExported, PayloadGraphCleared, PayloadSoundToggled,
    PayloadZoomChanged,
};
use crate::export::{self, ExportFormat};
use crate::layout::CanvasLayout;
use crate::metadata::Metadata;
use crate::settings::{SettingsInteraction, SettingsNavigation, SettingsStyle};
use crate::trash::TrashControl;
use crate::Graph;

/// Touch identifier used for the synthesized begin/move/end sequence when
/// the device has a pointer instead of a touch screen.
const POINTER_TOUCH_ID: TouchId = TouchId(u64::MAX);

const MSG_EXPORTED_TIKZ: &str = "A TikZ picture of your graph has been copied to the clipboard!";
const MSG_EXPORTED_LISTING: &str =
    "Your graph has been copied to the clipboard in the form of Python lists.";

/// The graph sketching widget.
///
/// Owns no state itself; the graph model and the trash control live with
/// the host, view state is persisted in the `Ui` data between frames.
pub struct GraphSketchView<'a> {
    g: &'a mut Graph,
    trash: &'a mut TrashControl,

    settings_interaction: SettingsInteraction,
    settings_navigation: SettingsNavigation,
    settings_style: SettingsStyle,

    #[cfg(feature = "events")]
    events_publisher: Option<&'a Sender<Event>>,
}

impl<'a> GraphSketchView<'a> {
    pub fn new(g: &'a mut Graph, trash: &'a mut TrashControl) -> Self {
        Self {
            g,
            trash,

            settings_interaction: SettingsInteraction::default(),
            settings_navigation: SettingsNavigation::default(),
            settings_style: SettingsStyle::default(),

            #[cfg(feature = "events")]
            events_publisher: Option::default(),
        }
    }

    /// Makes widget interactive according to the provided settings.
    pub fn with_interactions(mut self, settings_interaction: &SettingsInteraction) -> Self {
        self.settings_interaction = settings_interaction.clone();
        self
    }

    /// Modifies navigation settings.
    pub fn with_navigations(mut self, settings_navigation: &SettingsNavigation) -> Self {
        self.settings_navigation = settings_navigation.clone();
        self
    }

    /// Modifies default style settings.
    pub fn with_styles(mut self, settings_style: &SettingsStyle) -> Self {
        self.settings_style = settings_style.clone();
        self
    }

    #[cfg(feature = "events")]
    /// Allows to supply a channel where feedback cues from the widget
    /// will be sent.
    pub fn with_events(mut self, events_publisher: &'a Sender<Event>) -> Self {
        self.events_publisher = Some(events_publisher);
        self
    }

    /// Resets navigation metadata.
    pub fn reset_metadata(ui: &mut Ui) {
        Metadata::default().save(ui);
    }

    /// Magnifies all node positions by one zoom step, anchored at the
    /// canvas center.
    pub fn zoom_in(&mut self, ui: &mut Ui) {
        self.apply_zoom(ui, 1. + self.settings_navigation.zoom_step);
    }

    /// Shrinks all node positions by one zoom step.
    pub fn zoom_out(&mut self, ui: &mut Ui) {
        self.apply_zoom(ui, 1. / (1. + self.settings_navigation.zoom_step));
    }

    /// Returns the magnification to exactly 100%.
    pub fn zoom_reset(&mut self, ui: &mut Ui) {
        let magnification = Metadata::load(ui).magnification;
        self.apply_zoom(ui, 1. / magnification);
    }

    fn apply_zoom(&mut self, ui: &mut Ui, factor: f32) {
        let mut meta = Metadata::load(ui);
        meta.rescale(self.g, factor);
        let new_magnification = meta.magnification;
        meta.save(ui);

        self.publish_event(Event::ZoomChanged(PayloadZoomChanged { new_magnification }));
    }

    /// Toggles the sound cue flag and returns the new value. The flag is
    /// surfaced to the host; playback is entirely the host's concern.
    pub fn toggle_sound(&mut self, ui: &mut Ui) -> bool {
        let mut meta = Metadata::load(ui);
        meta.sound_enabled = !meta.sound_enabled;
        let enabled = meta.sound_enabled;
        meta.save(ui);

        self.publish_event(Event::SoundToggled(PayloadSoundToggled { enabled }));
        enabled
    }

    /// Serializes the current graph in the requested format, places the
    /// text on the system clipboard and returns a confirmation message for
    /// the host to display.
    pub fn export_to_clipboard(&self, ctx: &egui::Context, format: ExportFormat) -> &'static str {
        let text = match format {
            ExportFormat::Tikz => export::to_tikz(self.g),
            ExportFormat::Listing => export::to_listing(self.g),
        };
        let chars = text.chars().count();
        ctx.copy_text(text);

        self.publish_event(Event::Exported(PayloadExported {
            format: format!("{format:?}"),
            chars,
        }));

        match format {
            ExportFormat::Tikz => MSG_EXPORTED_TIKZ,
            ExportFormat::Listing => MSG_EXPORTED_LISTING,
        }
    }

    fn handle_touches(
        &mut self,
        ui: &Ui,
        layout: &CanvasLayout,
        now: Instant,
        cues: &mut Vec<Event>,
    ) {
        let touches: Vec<(TouchId, TouchPhase, Pos2)> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Touch { id, phase, pos, .. } => Some((*id, *phase, *pos)),
                    _ => None,
                })
                .collect()
        });

        if touches.is_empty() && !ui.input(egui::InputState::any_touches) {
            self.handle_pointer(ui, layout, now, cues);
            return;
        }

        for (id, phase, pos) in touches {
            match phase {
                TouchPhase::Start => controller::touch_start(
                    self.g,
                    self.trash,
                    layout,
                    &self.settings_interaction,
                    id,
                    pos,
                    now,
                    cues,
                ),
                TouchPhase::Move => {
                    controller::touch_move(self.g, &self.settings_interaction, id, pos, cues);
                }
                TouchPhase::End | TouchPhase::Cancel => controller::touch_end(
                    self.g,
                    self.trash,
                    layout,
                    &self.settings_style,
                    id,
                    cues,
                ),
            }
        }
    }

    /// Mouse fallback: the primary pointer acts as a single touch.
    fn handle_pointer(
        &mut self,
        ui: &Ui,
        layout: &CanvasLayout,
        now: Instant,
        cues: &mut Vec<Event>,
    ) {
        let (pressed, down, released, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });

        if pressed {
            if let Some(pos) = pos {
                controller::touch_start(
                    self.g,
                    self.trash,
                    layout,
                    &self.settings_interaction,
                    POINTER_TOUCH_ID,
                    pos,
                    now,
                    cues,
                );
            }
        } else if down {
            if let Some(pos) = pos {
                controller::touch_move(
                    self.g,
                    &self.settings_interaction,
                    POINTER_TOUCH_ID,
                    pos,
                    cues,
                );
            }
        }

        if released {
            controller::touch_end(
                self.g,
                self.trash,
                layout,
                &self.settings_style,
                POINTER_TOUCH_ID,
                cues,
            );
        }
    }

    #[allow(unused_variables, clippy::unused_self)]
    fn publish_event(&self, event: Event) {
        #[cfg(feature = "events")]
        if let Some(sender) = self.events_publisher {
            // fire-and-forget; a gone listener must not break the widget
            sender.send(event).ok();
        }
    }
}

impl Widget for &mut GraphSketchView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

        let mut meta = Metadata::load(ui);
        let layout = CanvasLayout::new(response.rect, &self.settings_style);
        let now = Instant::now();
        let mut cues = Vec::new();

        if !meta.first_frame && meta.canvas.size() != response.rect.size() {
            cues.push(Event::CanvasResized(PayloadCanvasResized {
                size: [response.rect.width(), response.rect.height()],
            }));
        }
        meta.first_frame = false;
        meta.canvas = response.rect;

        self.handle_touches(ui, &layout, now, &mut cues);

        // armed clear deadline fires at most once
        if self.trash.poll(now) {
            let nodes = self.g.node_count();
            self.g.clear();
            cues.push(Event::GraphCleared(PayloadGraphCleared { nodes }));
        }

        draw::draw_graph(&painter, self.g, &self.settings_style);
        draw::draw_trash_zone(
            &painter,
            layout.trash_zone,
            self.trash.progress(now),
            &self.settings_style,
        );

        if self.trash.armed() {
            ui.ctx().request_repaint();
        }

        meta.save(ui);

        for cue in cues {
            self.publish_event(cue);
        }

        response
    }
}
