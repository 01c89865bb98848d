/// Stable address of a piece inside a [`crate::Stage`]: group position, then piece position.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PieceId {
    /// Index of the containing group in stage order.
    pub group: usize,
    /// Index of the piece within its group.
    pub index: usize,
}

impl PieceId {
    /// Build a piece address.
    pub fn new(group: usize, index: usize) -> Self {
        Self { group, index }
    }
}

/// Global motion state published to styling hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MotionState {
    /// A scene change is in flight.
    Moving,
    /// No scene change is in flight.
    Stopped,
}

/// The two navigation affordances a slider may have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum NavButton {
    /// Moves to `current - 1`.
    Prev,
    /// Moves to `current + 1`.
    Next,
}

/// Class-style label for a scene, e.g. `scene-2`.
pub fn scene_label(scene: usize) -> String {
    format!("scene-{scene}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
