//! The star rating widget.

use egui::{vec2, Color32, CursorIcon, Id, Painter, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2};
use starink_core::{star_visual, InteractionState, PointerEvent, RatingChange, RatingConfig};

use crate::{glyph, sizing, theme};

/// Style configuration for [`StarRating`].
#[derive(Clone)]
pub struct StarRatingStyle {
    /// Fill for stars above the effective rating.
    pub inactive_color: Color32,
    /// Fill for active stars.
    pub active_color: Color32,
    /// Peak fill of the selection pulse.
    pub pulse_color: Color32,
    /// Horizontal gap between glyphs.
    pub spacing: f32,
    /// Scale factor the selection pulse peaks at.
    pub pulse_scale: f32,
    /// Selection pulse duration in seconds.
    pub pulse_time: f32,
}

impl Default for StarRatingStyle {
    fn default() -> Self {
        Self {
            inactive_color: theme::STAR_INACTIVE,
            active_color: theme::STAR_ACTIVE,
            pulse_color: theme::STAR_PULSE,
            spacing: sizing::STAR_GAP,
            pulse_scale: 1.5,
            pulse_time: 0.3,
        }
    }
}

/// What [`StarRating::show`] reports back to the caller.
pub struct StarRatingResponse {
    /// Union of the star responses, covering the whole control.
    pub response: Response,
    /// The committed rating, when a star was clicked this frame.
    pub changed: Option<RatingChange>,
}

/// A row of star glyphs for picking a rating.
///
/// Hovering previews a rating by highlighting every star up to the pointer;
/// clicking commits it, plays a short pulse on the picked star, and reports
/// a [`RatingChange`]. Once a star was clicked, the picked value shadows the
/// externally supplied `rating` for as long as the control's memory lives.
///
/// Interaction state is kept in egui's widget memory under an id derived
/// from `name` and `id_salt`; give at least one of them when several
/// unnamed controls share a `Ui`.
pub struct StarRating<'a> {
    config: RatingConfig,
    style: StarRatingStyle,
    id_salt: Option<Id>,
    on_rating_change: Option<Box<dyn FnMut(&RatingChange) + 'a>>,
}

impl Default for StarRating<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> StarRating<'a> {
    /// Create a rating control with the default configuration
    /// (five stars, nothing rated).
    pub fn new() -> Self {
        Self::from_config(RatingConfig::default())
    }

    /// Create a rating control from an existing configuration.
    pub fn from_config(config: RatingConfig) -> Self {
        Self {
            config,
            style: StarRatingStyle::default(),
            id_salt: None,
            on_rating_change: None,
        }
    }

    /// Set the number of stars to display.
    pub fn total_stars(mut self, total_stars: u32) -> Self {
        self.config.total_stars = total_stars;
        self
    }

    /// Set the externally controlled committed rating.
    pub fn rating(mut self, rating: u32) -> Self {
        self.config.rating = rating;
        self
    }

    /// Set the star glyph edge length in points.
    pub fn size(mut self, size: f32) -> Self {
        self.config.size = Some(size);
        self
    }

    /// Suppress all interaction.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Label this instance; the label is passed through to the change
    /// payload and keys the control's memory.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Set the visual style.
    pub fn style(mut self, style: StarRatingStyle) -> Self {
        self.style = style;
        self
    }

    /// Extra salt for the control's memory id, for distinguishing several
    /// instances with the same (or no) name in one `Ui`.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    /// Notify the given callback when a rating is committed.
    ///
    /// Notification is best-effort: it is invoked synchronously at most once
    /// per click, and the rendering path never depends on it.
    pub fn on_rating_change(mut self, callback: impl FnMut(&RatingChange) + 'a) -> Self {
        self.on_rating_change = Some(Box::new(callback));
        self
    }

    /// Show the control and report what happened.
    pub fn show(mut self, ui: &mut Ui) -> StarRatingResponse {
        let size = self.config.size.unwrap_or(sizing::STAR);
        let star_size = vec2(size, size);
        let sense = if self.config.disabled {
            Sense::hover()
        } else {
            Sense::click()
        };

        let state_id = ui.make_persistent_id((
            "star_rating",
            self.id_salt,
            self.config.name.as_deref(),
        ));
        let pulse_id = state_id.with("pulse");
        let mut state = ui
            .data_mut(|data| data.get_temp::<InteractionState>(state_id))
            .unwrap_or_default();

        // Allocate every star slot before painting anything, so the whole
        // row renders from one consistent (config, state) pair.
        let (slots, mut response) = ui
            .horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = self.style.spacing;
                let mut slots: Vec<(Rect, Response)> = Vec::new();
                let mut union: Option<Response> = None;
                for _ in 0..self.config.total_stars {
                    let (rect, response) = ui.allocate_exact_size(star_size, sense);
                    union = Some(match union {
                        Some(union) => union.union(response.clone()),
                        None => response.clone(),
                    });
                    slots.push((rect, response));
                }
                let union = union
                    .unwrap_or_else(|| ui.allocate_exact_size(Vec2::ZERO, Sense::hover()).1);
                (slots, union)
            })
            .inner;

        // Translate this frame's star responses into pointer events.
        let hovered_star = slots
            .iter()
            .position(|(_, response)| response.hovered())
            .map(|i| i as u32 + 1)
            .unwrap_or(0);
        let clicked_star = if self.config.disabled {
            0
        } else {
            slots
                .iter()
                .position(|(_, response)| response.clicked())
                .map(|i| i as u32 + 1)
                .unwrap_or(0)
        };

        if hovered_star != 0 {
            if hovered_star != state.hover {
                state.apply(&self.config, PointerEvent::Enter(hovered_star));
            }
        } else if state.hover != 0 {
            state.apply(&self.config, PointerEvent::Leave);
        }

        let mut changed = None;
        if clicked_star != 0 {
            changed = state.apply(&self.config, PointerEvent::Click(clicked_star));
            if changed.is_some() {
                // Restart the pulse from the beginning for the picked star.
                ui.ctx().animate_value_with_time(pulse_id, 0.0, 0.0);
            }
        }

        // Drive the one-shot pulse; it settles at 1.0 and stays there.
        let pulse_t = if state.selected != 0 {
            ui.ctx()
                .animate_value_with_time(pulse_id, 1.0, self.style.pulse_time)
                .clamp(0.0, 1.0)
        } else {
            1.0
        };

        let painter = ui.painter();
        for (i, (rect, _)) in slots.iter().enumerate() {
            if !ui.is_rect_visible(*rect) {
                continue;
            }
            let visual = star_visual(&self.config, &state, i as u32 + 1);
            let mut fill = if visual.active {
                self.style.active_color
            } else {
                self.style.inactive_color
            };
            let mut radius = size * 0.5;
            if visual.selected && pulse_t < 1.0 {
                // Ease-out, growing and brightening toward the peak; on the
                // final frame the star snaps back to the plain active style.
                let eased = 1.0 - (1.0 - pulse_t) * (1.0 - pulse_t);
                fill = lerp_color(self.style.active_color, self.style.pulse_color, eased);
                radius *= 1.0 + (self.style.pulse_scale - 1.0) * eased;
            }
            paint_star(painter, rect.center(), radius, fill);
        }

        if let Some(change) = &changed {
            response.mark_changed();
            if let Some(callback) = self.on_rating_change.as_mut() {
                callback(change);
            }
        }

        ui.data_mut(|data| data.insert_temp(state_id, state));

        let response = if self.config.disabled {
            response
        } else {
            response.on_hover_cursor(CursorIcon::PointingHand)
        };

        StarRatingResponse { response, changed }
    }
}

/// Fill a star glyph from its convex decomposition.
fn paint_star(painter: &Painter, center: Pos2, outer_radius: f32, fill: Color32) {
    let (pentagon, triangles) = glyph::star_polygons(center, outer_radius);
    painter.add(Shape::convex_polygon(pentagon, fill, Stroke::NONE));
    for triangle in triangles {
        painter.add(Shape::convex_polygon(triangle.to_vec(), fill, Stroke::NONE));
    }
}

/// Linear interpolation between two opaque colors in gamma space.
fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color32::from_rgb(
        lerp(from.r(), to.r()),
        lerp(from.g(), to.g()),
        lerp(from.b(), to.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{CentralPanel, Context, Event, Modifiers, PointerButton, RawInput};

    fn run_frame(
        ctx: &Context,
        events: Vec<Event>,
        mut build: impl FnMut(&mut Ui) -> StarRatingResponse,
    ) -> StarRatingResponse {
        let input = RawInput {
            events,
            ..RawInput::default()
        };
        let mut result = None;
        let _ = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                result = Some(build(ui));
            });
        });
        result.expect("frame should build the widget")
    }

    fn press(pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::default(),
        }
    }

    fn release(pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::default(),
        }
    }

    /// Center of the 1-based star `index` in a default-size row.
    fn star_center(row: Rect, index: u32) -> Pos2 {
        let offset = (index as f32 - 0.5) * sizing::STAR + (index as f32 - 1.0) * sizing::STAR_GAP;
        Pos2::new(row.left() + offset, row.center().y)
    }

    #[test]
    fn test_row_spans_all_stars() {
        let ctx = Context::default();

        let shown = run_frame(&ctx, vec![], |ui| StarRating::new().show(ui));

        let expected = 5.0 * sizing::STAR + 4.0 * sizing::STAR_GAP;
        assert!((shown.response.rect.width() - expected).abs() < 0.5);
        assert!((shown.response.rect.height() - sizing::STAR).abs() < 0.5);
        assert!(shown.changed.is_none());
    }

    #[test]
    fn test_custom_size_and_count() {
        let ctx = Context::default();

        let shown = run_frame(&ctx, vec![], |ui| {
            StarRating::new().total_stars(3).size(40.0).show(ui)
        });

        let expected = 3.0 * 40.0 + 2.0 * sizing::STAR_GAP;
        assert!((shown.response.rect.width() - expected).abs() < 0.5);
        assert!((shown.response.rect.height() - 40.0).abs() < 0.5);
    }

    #[test]
    fn test_click_commits_and_reports() {
        let ctx = Context::default();
        let mut fired = Vec::new();

        let first = run_frame(&ctx, vec![], |ui| StarRating::new().name("foo").show(ui));
        let target = star_center(first.response.rect, 3);

        let hovered = run_frame(&ctx, vec![Event::PointerMoved(target)], |ui| {
            StarRating::new().name("foo").show(ui)
        });
        assert!(hovered.changed.is_none());

        run_frame(&ctx, vec![press(target)], |ui| {
            StarRating::new().name("foo").show(ui)
        });
        let released = run_frame(&ctx, vec![release(target)], |ui| {
            StarRating::new()
                .name("foo")
                .on_rating_change(|change| fired.push(change.clone()))
                .show(ui)
        });

        let change = released.changed.expect("click should commit a rating");
        assert_eq!(change.rating, 3);
        assert_eq!(change.name.as_deref(), Some("foo"));
        assert_eq!(fired, vec![change]);
    }

    #[test]
    fn test_disabled_click_is_inert() {
        let ctx = Context::default();
        let mut fired = 0u32;

        fn build(fired: &mut u32, ui: &mut Ui) -> StarRatingResponse {
            StarRating::new()
                .rating(2)
                .disabled(true)
                .on_rating_change(|_| *fired += 1)
                .show(ui)
        }

        let first = run_frame(&ctx, vec![], |ui| build(&mut fired, ui));
        let target = star_center(first.response.rect, 3);

        run_frame(&ctx, vec![Event::PointerMoved(target)], |ui| {
            build(&mut fired, ui)
        });
        run_frame(&ctx, vec![press(target)], |ui| build(&mut fired, ui));
        let released = run_frame(&ctx, vec![release(target)], |ui| build(&mut fired, ui));

        assert!(released.changed.is_none());
        assert_eq!(fired, 0);
    }

    #[test]
    fn test_later_click_overrides_earlier_one() {
        let ctx = Context::default();

        let first = run_frame(&ctx, vec![], |ui| StarRating::new().show(ui));
        let high = star_center(first.response.rect, 5);
        let low = star_center(first.response.rect, 2);

        run_frame(&ctx, vec![Event::PointerMoved(high)], |ui| {
            StarRating::new().show(ui)
        });
        run_frame(&ctx, vec![press(high)], |ui| StarRating::new().show(ui));
        let fifth = run_frame(&ctx, vec![release(high)], |ui| StarRating::new().show(ui));
        assert_eq!(fifth.changed.map(|c| c.rating), Some(5));

        run_frame(&ctx, vec![Event::PointerMoved(low)], |ui| {
            StarRating::new().show(ui)
        });
        run_frame(&ctx, vec![press(low)], |ui| StarRating::new().show(ui));
        let second = run_frame(&ctx, vec![release(low)], |ui| StarRating::new().show(ui));
        assert_eq!(second.changed.map(|c| c.rating), Some(2));
    }
}
