//! Reusable egui rating components.
//!
//! This crate provides the [`StarRating`] widget: a row of star glyphs that
//! previews the hovered rating, commits a rating on click, plays a short
//! pulse on the star that was picked, and reports a
//! [`RatingChange`](starink_core::RatingChange) to the caller.

pub mod glyph;
pub mod star_rating;

pub use star_rating::{StarRating, StarRatingResponse, StarRatingStyle};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default star glyph edge length in points.
    pub const STAR: f32 = 24.0;
    /// Horizontal gap between star glyphs.
    pub const STAR_GAP: f32 = 2.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Fill for stars at or below the effective rating.
    pub const STAR_ACTIVE: Color32 = Color32::from_rgb(0xff, 0xc9, 0x55);
    /// Fill for stars above the effective rating.
    pub const STAR_INACTIVE: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
    /// Peak fill of the selection pulse.
    pub const STAR_PULSE: Color32 = Color32::from_rgb(0xff, 0xda, 0x66);
}
