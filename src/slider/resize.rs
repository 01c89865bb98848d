use tracing::{debug, warn};

use crate::{
    render::backend::{Chrome, Renderer},
    slider::{controller::Slider, events::SceneObserver},
};

/// Quiet period after the last resize event before transitions are re-enabled.
pub const RESIZE_SETTLE_MS: f64 = 10.0;

impl<R: Renderer, C: Chrome, O: SceneObserver> Slider<R, C, O> {
    /// The viewport changed size.
    ///
    /// Suspends transitions, snaps any in-flight transition to done (canceled, then stopped),
    /// re-lays the active scene out instantly for the new width, and restarts the settle timer.
    #[tracing::instrument(skip(self))]
    pub fn viewport_resized(&mut self, viewport_width: f64, now_ms: f64) {
        if !self.state.resizing {
            self.state.resizing = true;
            self.chrome.resizing_changed(true);
        }

        if self.state.transitioning {
            self.cancel_transition();
            self.finish_transition();
        }

        if viewport_width.is_finite() && viewport_width >= 0.0 {
            self.viewport_width = viewport_width;
        } else {
            warn!(viewport_width, "ignoring invalid viewport width");
        }

        if self.state.current_scene.is_some() {
            if self.animated {
                self.set_transitions(0.0);
            }
            self.apply_layout(0.0, now_ms);
        }

        self.state.resize_settle.schedule(now_ms, RESIZE_SETTLE_MS);
    }

    pub(super) fn settle_resize(&mut self, now_ms: f64) {
        if self.state.resize_settle.fire_if_due(now_ms) {
            debug!("resize settled");
            self.state.resizing = false;
            self.chrome.resizing_changed(false);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slider/resize.rs"]
mod tests;
