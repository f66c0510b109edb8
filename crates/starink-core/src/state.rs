//! Interaction state and its transitions.

use log::debug;

use crate::config::RatingConfig;
use crate::event::{PointerEvent, RatingChange};

/// Transient interaction state of a rating control.
///
/// Both fields are 1-based star indices with 0 meaning "none". The state is
/// created when the control is first shown and discarded with it; nothing
/// here outlives the control instance. For every event sequence the widget
/// layer can produce, both fields stay within `[0, total_stars]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Star currently under the pointer, or 0 when the pointer is elsewhere.
    pub hover: u32,
    /// Star last clicked this session, or 0 when nothing was clicked yet.
    pub selected: u32,
}

impl InteractionState {
    /// Fresh state: no hover, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pointer event, returning the change payload when a rating
    /// was committed.
    ///
    /// Hover-enter is ignored while the configuration is disabled. Clicks
    /// are rejected as well; the widget layer never forwards them for a
    /// disabled control, and the transition guards against it regardless.
    /// Once any click occurs, `selected` shadows the external rating until
    /// this state is dropped.
    pub fn apply(
        &mut self,
        config: &RatingConfig,
        event: PointerEvent,
    ) -> Option<RatingChange> {
        match event {
            PointerEvent::Enter(index) => {
                if !config.disabled {
                    self.hover = index;
                }
                None
            }
            PointerEvent::Leave => {
                // A disabled control never reports a hovered star to leave
                // from; clearing unconditionally is always safe.
                self.hover = 0;
                None
            }
            PointerEvent::Click(index) => {
                if config.disabled {
                    return None;
                }
                self.selected = index;
                debug!("rating committed: {index}");
                Some(RatingChange {
                    name: config.name.clone(),
                    rating: index,
                })
            }
        }
    }
}
