//! Demo UI: a gallery of rating controls and a live change-event log.

use egui::{Color32, Context, CornerRadius, Frame, Margin, RichText, Stroke, Ui};
use starink_core::RatingChange;
use starink_widgets::StarRating;

/// How many change events the log keeps.
const EVENT_LOG_CAPACITY: usize = 8;

/// State backing the demo UI between frames.
pub struct UiState {
    /// Star count for the playground control.
    pub playground_stars: u32,
    /// Preset rating for the playground control.
    pub playground_rating: u32,
    /// Glyph size for the playground control.
    pub playground_size: f32,
    /// Whether the playground control is disabled.
    pub playground_disabled: bool,
    /// Most recent change events, newest last.
    pub event_log: Vec<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            playground_stars: 5,
            playground_rating: 0,
            playground_size: 32.0,
            playground_disabled: false,
            event_log: Vec::new(),
        }
    }
}

impl UiState {
    /// Append a change event to the bounded log.
    fn record(&mut self, change: &RatingChange) {
        if self.event_log.len() == EVENT_LOG_CAPACITY {
            self.event_log.remove(0);
        }
        let name = change.name.as_deref().unwrap_or("(unnamed)");
        self.event_log.push(format!("{name}: rated {}", change.rating));
    }
}

/// Render the demo: gallery sections, the playground, and the event log.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) {
    egui::SidePanel::right("event_log")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            render_event_log(ui, ui_state);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        ui.heading("StarInk");
        ui.label(
            RichText::new("Hover to preview, click to rate.")
                .color(Color32::from_gray(120)),
        );
        ui.add_space(12.0);

        render_gallery(ui, ui_state);
        ui.add_space(12.0);
        render_playground(ui, ui_state);
    });
}

fn render_gallery(ui: &mut Ui, ui_state: &mut UiState) {
    section_frame().show(ui, |ui| {
        section_label(ui, "GALLERY");
        ui.add_space(6.0);

        let mut changes = Vec::new();

        ui.horizontal(|ui| {
            ui.label("Fresh:");
            if let Some(change) = StarRating::new().name("fresh").show(ui).changed {
                changes.push(change);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Preset 3/5:");
            if let Some(change) = StarRating::new().name("preset").rating(3).show(ui).changed {
                changes.push(change);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Large:");
            if let Some(change) = StarRating::new()
                .name("large")
                .total_stars(7)
                .size(36.0)
                .show(ui)
                .changed
            {
                changes.push(change);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Disabled 2/3:");
            StarRating::new()
                .name("disabled")
                .total_stars(3)
                .rating(2)
                .disabled(true)
                .show(ui);
        });

        for change in &changes {
            ui_state.record(change);
        }
    });
}

fn render_playground(ui: &mut Ui, ui_state: &mut UiState) {
    section_frame().show(ui, |ui| {
        section_label(ui, "PLAYGROUND");
        ui.add_space(6.0);

        ui.add(egui::Slider::new(&mut ui_state.playground_stars, 1..=10).text("stars"));
        ui.add(
            egui::Slider::new(&mut ui_state.playground_rating, 0..=ui_state.playground_stars)
                .text("preset rating"),
        );
        ui.add(egui::Slider::new(&mut ui_state.playground_size, 12.0..=64.0).text("size"));
        ui.checkbox(&mut ui_state.playground_disabled, "disabled");
        ui_state.playground_rating = ui_state.playground_rating.min(ui_state.playground_stars);

        ui.add_space(10.0);

        // Exercise the callback flavor of the API here; the gallery above
        // consumes the returned change instead.
        let mut fired = None;
        StarRating::new()
            .name("playground")
            .total_stars(ui_state.playground_stars)
            .rating(ui_state.playground_rating)
            .size(ui_state.playground_size)
            .disabled(ui_state.playground_disabled)
            .on_rating_change(|change| fired = Some(change.clone()))
            .show(ui);
        if let Some(change) = fired {
            ui_state.record(&change);
        }
    });
}

fn render_event_log(ui: &mut Ui, ui_state: &UiState) {
    ui.add_space(8.0);
    section_label(ui, "CHANGE EVENTS");
    ui.add_space(6.0);

    if ui_state.event_log.is_empty() {
        ui.label(RichText::new("none yet").color(Color32::from_gray(160)).italics());
        return;
    }
    for line in ui_state.event_log.iter().rev() {
        ui.label(RichText::new(line).monospace().size(12.0));
    }
}

/// Frame used for the demo sections.
fn section_frame() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, Color32::from_gray(220)))
        .inner_margin(Margin::same(12))
}

/// Small, muted section label.
fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .size(10.0)
            .color(Color32::from_gray(120)),
    );
}
