use crate::{
    foundation::core::{MotionState, NavButton, PieceId},
    layout::geometry::PiecePlacement,
};

/// Property that carries piece movement.
pub const MOVEMENT_PROPERTY: &str = "transform";
/// Property that carries background tracking.
pub const BACKGROUND_PROPERTY: &str = "background-position";

/// Reports what the rendering environment can do. Queried once when a slider is built.
pub trait CapabilityAdapter {
    /// Whether declarative (style-driven) animated transitions are available.
    fn supports_animated_transitions(&self) -> bool;
}

/// A fixed capability answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticCapability(pub bool);

impl CapabilityAdapter for StaticCapability {
    fn supports_animated_transitions(&self) -> bool {
        self.0
    }
}

/// Transition timing applied to a piece before its new placement.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionStyle {
    /// Movement duration in milliseconds.
    pub duration_ms: f64,
    /// Extra directives merged after the movement entry.
    pub custom: Option<String>,
    /// Whether a background-position entry with the same duration is appended.
    pub background: bool,
}

impl TransitionStyle {
    /// Render as a transition declaration list, e.g.
    /// `transform 400ms,opacity 1s, background-position 400ms`.
    pub fn to_css(&self) -> String {
        let mut css = format!("{MOVEMENT_PROPERTY} {}ms", self.duration_ms);
        if let Some(custom) = self.custom.as_deref().filter(|c| !c.is_empty()) {
            css.push(',');
            css.push_str(custom);
        }
        if self.background {
            css.push_str(&format!(", {BACKGROUND_PROPERTY} {}ms", self.duration_ms));
        }
        css
    }
}

/// Progress of the fallback animation primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// At least one piece is still moving.
    Running,
    /// Every piece reached its target.
    Finished,
}

/// Applies computed placements to the display layer.
///
/// With animated-transition capability the slider calls [`Renderer::set_transition`] then
/// [`Renderer::place`] and lets the display layer animate. Without it the slider drives the
/// progressive primitive: [`Renderer::animate`], [`Renderer::snap`] and
/// [`Renderer::poll_animation`].
pub trait Renderer {
    /// Set transition timing for a piece. Always called before the matching `place`.
    fn set_transition(&mut self, piece: PieceId, style: &TransitionStyle);

    /// Move a piece to its placement; the display layer animates per its transition timing.
    fn place(&mut self, piece: PieceId, placement: &PiecePlacement);

    /// Start progressively animating a piece from wherever it is now to `target`.
    ///
    /// Any animation already running on the piece is stopped first.
    fn animate(&mut self, piece: PieceId, target: &PiecePlacement, duration_ms: f64, now_ms: f64);

    /// Stop any animation on a piece and set `target` immediately.
    fn snap(&mut self, piece: PieceId, target: &PiecePlacement);

    /// Advance progressive animations to `now_ms` and report whether all have finished.
    fn poll_animation(&mut self, now_ms: f64) -> AnimationStatus;
}

/// Auxiliary UI and styling hooks. Every method defaults to doing nothing, so hosts without a
/// pager or nav buttons implement only what they have.
pub trait Chrome {
    /// Mark pager entry `scene` active and every other entry inactive.
    fn activate_pager(&mut self, _scene: usize) {}

    /// Enable or disable a nav button.
    fn set_nav_disabled(&mut self, _button: NavButton, _disabled: bool) {}

    /// Reflect the scene name into the bookmark (URL fragment).
    fn set_bookmark(&mut self, _name: &str) {}

    /// Swap the scene class label (`scene-N`).
    fn scene_label_changed(&mut self, _old: Option<usize>, _new: usize) {}

    /// Expose the duration of the latest move.
    fn set_last_duration(&mut self, _duration_ms: f64) {}

    /// Global moving/stopped toggle.
    fn motion_changed(&mut self, _state: MotionState) {}

    /// Resizing toggle.
    fn resizing_changed(&mut self, _resizing: bool) {}
}

impl Chrome for () {}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
