//! Pointer events and the outbound change payload.

use serde::{Deserialize, Serialize};

/// A pointer input the rating control understands.
///
/// Star indices are 1-based. The widget layer translates raw framework
/// events into these before applying them to the interaction state, so the
/// transitions stay testable without a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// The pointer entered the star at the given index.
    Enter(u32),
    /// The pointer left the control entirely.
    Leave,
    /// The star at the given index was clicked.
    Click(u32),
}

/// Payload delivered to the caller when a rating is committed.
///
/// Emitted exactly once per click, synchronously, on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    /// Label identifying which rating instance fired, if one was configured.
    pub name: Option<String>,
    /// The committed rating: the 1-based index of the clicked star.
    pub rating: u32,
}
