//! Per-star visual computation.
//!
//! Rendering is a pure function of `(configuration, interaction state)`;
//! these helpers compute the visual flags the widget layer paints from.

use crate::config::RatingConfig;
use crate::state::InteractionState;

/// Visual flags for a single star glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarVisual {
    /// Star renders in the highlighted (filled) style.
    pub active: bool,
    /// Star carries the one-shot selection emphasis. At most one star per
    /// control has this set: the exact star last clicked.
    pub selected: bool,
}

/// The rating currently in effect.
///
/// The last clicked star shadows the externally supplied `rating` once any
/// click occurred; the override only resets when the state is dropped.
pub fn effective_rating(config: &RatingConfig, state: &InteractionState) -> u32 {
    if state.selected != 0 {
        state.selected
    } else {
        config.rating
    }
}

/// Compute the visual flags for the 1-based star `index`.
///
/// While hovering, the active run previews up to the hovered star and
/// overrides the committed rating; otherwise it reflects the effective
/// rating. The selected emphasis applies to the boundary star only, never
/// to the active run below it.
pub fn star_visual(config: &RatingConfig, state: &InteractionState, index: u32) -> StarVisual {
    let active = if state.hover != 0 {
        index <= state.hover
    } else {
        index <= effective_rating(config, state)
    };
    StarVisual {
        active,
        selected: index == state.selected && state.selected != 0,
    }
}

/// Visual flags for every star in display order.
pub fn star_visuals<'a>(
    config: &'a RatingConfig,
    state: &'a InteractionState,
) -> impl Iterator<Item = StarVisual> + 'a {
    (1..=config.total_stars).map(move |index| star_visual(config, state, index))
}
