use tracing::{debug, trace};

use crate::{
    config::{model::SliderConfig, stage::Stage},
    foundation::{
        core::{MotionState, NavButton},
        error::{SliderError, SliderResult},
    },
    layout::geometry::{StageLayout, compute_layout},
    render::backend::{AnimationStatus, CapabilityAdapter, Chrome, Renderer, TransitionStyle},
    slider::events::SceneObserver,
    timing::{duration::compute_duration, timer::TimerSlot},
};

/// Mutable slider state. Only the owning [`Slider`] writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderState {
    pub(super) current_scene: Option<usize>,
    pub(super) transitioning: bool,
    pub(super) resizing: bool,
    pub(super) completion: TimerSlot,
    pub(super) resize_settle: TimerSlot,
}

impl SliderState {
    /// Active scene; `None` until the first placement.
    pub fn current_scene(&self) -> Option<usize> {
        self.current_scene
    }

    /// Whether a scene change is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Whether the viewport is being resized (transitions suspended).
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Deadline of the pending completion timer.
    pub fn completion_deadline_ms(&self) -> Option<f64> {
        self.completion.deadline_ms()
    }

    /// Deadline of the pending resize-settle timer.
    pub fn resize_settle_deadline_ms(&self) -> Option<f64> {
        self.resize_settle.deadline_ms()
    }
}

/// A parallax scene slider.
///
/// The slider owns its state and drives three host-supplied collaborators: a [`Renderer`] for
/// piece placement, a [`Chrome`] for pager/nav/bookmark/styling hooks, and a [`SceneObserver`]
/// for lifecycle callbacks. Time never advances on its own: every entry point takes the host's
/// current time in milliseconds and the host calls [`Slider::tick`] from its event loop so
/// pending timers can fire.
pub struct Slider<R, C = (), O = ()> {
    pub(super) config: SliderConfig,
    pub(super) stage: Stage,
    pub(super) animated: bool,
    pub(super) viewport_width: f64,
    pub(super) last_duration_ms: f64,
    pub(super) state: SliderState,
    pub(super) renderer: R,
    pub(super) chrome: C,
    pub(super) observer: O,
}

impl<R: Renderer, C: Chrome, O: SceneObserver> Slider<R, C, O> {
    /// Build an uninitialized slider. Call [`Slider::start`] to place the first scene.
    ///
    /// The capability adapter is consulted exactly once, here.
    pub fn new(
        config: SliderConfig,
        stage: Stage,
        capability: &dyn CapabilityAdapter,
        viewport_width: f64,
        renderer: R,
        chrome: C,
        observer: O,
    ) -> SliderResult<Self> {
        config.validate()?;
        stage.validate(config.scene_count())?;
        if !viewport_width.is_finite() || viewport_width < 0.0 {
            return Err(SliderError::validation(
                "viewport width must be finite and >= 0",
            ));
        }
        Ok(Self {
            config,
            stage,
            animated: capability.supports_animated_transitions(),
            viewport_width,
            last_duration_ms: 0.0,
            state: SliderState::default(),
            renderer,
            chrome,
            observer,
        })
    }

    /// Slider configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Stage description.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// Active scene; `None` until the first placement.
    pub fn current_scene(&self) -> Option<usize> {
        self.state.current_scene
    }

    /// Duration of the latest scene change in milliseconds.
    pub fn last_duration_ms(&self) -> f64 {
        self.last_duration_ms
    }

    /// Viewport width used by the latest layout.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Whether declarative animated transitions are in use.
    pub fn uses_animated_transitions(&self) -> bool {
        self.animated
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The chrome hooks.
    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    /// The lifecycle observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the lifecycle observer, e.g. to drain a recorder.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Layout of every piece at the active scene and current viewport width.
    pub fn layout(&self) -> Option<StageLayout> {
        self.state.current_scene.map(|current| {
            compute_layout(
                current,
                &self.stage,
                &self.config.scene_points,
                self.viewport_width,
            )
        })
    }

    /// Initial load: place the scene named by `bookmark`, or scene 0 if it names none.
    pub fn start(&mut self, bookmark: Option<&str>, now_ms: f64) -> bool {
        let scene = self.config.resolve_bookmark(bookmark);
        self.request_scene_change(scene, now_ms)
    }

    /// Pager entry `index` was clicked.
    pub fn pager_clicked(&mut self, index: usize, now_ms: f64) -> bool {
        if self.state.current_scene == Some(index) {
            return false;
        }
        self.request_scene_change(index, now_ms)
    }

    /// The next button was clicked.
    pub fn next_clicked(&mut self, now_ms: f64) -> bool {
        let target = self.state.current_scene.map_or(0, |c| c + 1);
        self.request_scene_change(target, now_ms)
    }

    /// The previous button was clicked. Ignored at the first scene.
    pub fn prev_clicked(&mut self, now_ms: f64) -> bool {
        match self.state.current_scene.and_then(|c| c.checked_sub(1)) {
            Some(target) => self.request_scene_change(target, now_ms),
            None => false,
        }
    }

    /// Move to `target`. Returns `false` (and does nothing) when `target` is the active scene
    /// or out of range.
    ///
    /// A transition already in flight is canceled, never queued.
    #[tracing::instrument(skip(self))]
    pub fn request_scene_change(&mut self, target: usize, now_ms: f64) -> bool {
        let past = self.state.current_scene;
        if past == Some(target) || target >= self.config.scene_count() {
            trace!("scene change ignored");
            return false;
        }

        let duration_ms = compute_duration(past, target, &self.config.scene_times);
        self.last_duration_ms = duration_ms;

        if self.animated {
            self.set_transitions(duration_ms);
        }

        self.update_chrome(past, target, duration_ms);

        if self.state.transitioning {
            self.cancel_transition();
        }

        debug!(?past, target, duration_ms, "scene moved");
        self.observer.scene_moved(past, target);
        self.state.current_scene = Some(target);

        self.apply_layout(duration_ms, now_ms);

        if !self.state.resizing {
            self.state.transitioning = true;
            self.chrome.motion_changed(MotionState::Moving);
            if self.animated {
                self.state.completion.schedule(now_ms, duration_ms);
            }
        }
        true
    }

    /// Advance host time: fire due timers and poll the fallback animation.
    pub fn tick(&mut self, now_ms: f64) {
        if self.state.completion.fire_if_due(now_ms) {
            self.finish_transition();
        }
        if !self.animated
            && self.renderer.poll_animation(now_ms) == AnimationStatus::Finished
            && self.state.transitioning
        {
            self.finish_transition();
        }
        self.settle_resize(now_ms);
    }

    fn update_chrome(&mut self, past: Option<usize>, target: usize, duration_ms: f64) {
        if self.config.pager_count.is_some() {
            self.chrome.activate_pager(target);
        }
        if self.config.has_prev_button {
            self.chrome.set_nav_disabled(NavButton::Prev, target == 0);
        }
        if self.config.has_next_button {
            self.chrome
                .set_nav_disabled(NavButton::Next, Some(target) == self.config.last_scene());
        }
        if let Some(name) = self.config.scene_name(target) {
            self.chrome.set_bookmark(name);
        }
        self.chrome.scene_label_changed(past, target);
        self.chrome.set_last_duration(duration_ms);
    }

    /// Set every piece's transition timing.
    pub(super) fn set_transitions(&mut self, duration_ms: f64) {
        for (id, piece) in self.stage.pieces() {
            let style = TransitionStyle {
                duration_ms,
                custom: piece.transition.clone(),
                background: piece.has_background_tracking(),
            };
            self.renderer.set_transition(id, &style);
        }
    }

    /// Push the layout for the active scene to the renderer.
    pub(super) fn apply_layout(&mut self, duration_ms: f64, now_ms: f64) {
        let Some(layout) = self.layout() else {
            return;
        };
        for (id, placement) in layout.iter() {
            if self.animated {
                self.renderer.place(id, placement);
            } else if self.state.resizing {
                self.renderer.snap(id, placement);
            } else {
                self.renderer.animate(id, placement, duration_ms, now_ms);
            }
        }
    }

    /// Drop the pending completion and report the interrupted scene.
    pub(super) fn cancel_transition(&mut self) {
        self.state.completion.clear();
        self.state.transitioning = false;
        if let Some(current) = self.state.current_scene {
            debug!(current, "scene canceled");
            self.observer.scene_canceled(current);
        }
    }

    /// Leave the transitioning state and report the active scene as stopped.
    pub(super) fn finish_transition(&mut self) {
        self.state.completion.clear();
        self.state.transitioning = false;
        self.chrome.motion_changed(MotionState::Stopped);
        if let Some(current) = self.state.current_scene {
            debug!(current, "scene stopped");
            self.observer.scene_stopped(current);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slider/controller.rs"]
mod tests;
