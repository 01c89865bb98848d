/// Lifecycle callbacks of a slider.
///
/// All methods default to doing nothing.
pub trait SceneObserver {
    /// A scene change started. `past` is `None` for the initial placement.
    fn scene_moved(&mut self, _past: Option<usize>, _new: usize) {}

    /// The transition into `current` completed.
    fn scene_stopped(&mut self, _current: usize) {}

    /// The transition into `current` was interrupted before completing.
    fn scene_canceled(&mut self, _current: usize) {}
}

impl SceneObserver for () {}

/// One recorded lifecycle callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SceneEvent {
    /// See [`SceneObserver::scene_moved`].
    Moved {
        /// Scene before the change.
        past: Option<usize>,
        /// Scene after the change.
        new: usize,
    },
    /// See [`SceneObserver::scene_stopped`].
    Stopped {
        /// Scene that finished.
        current: usize,
    },
    /// See [`SceneObserver::scene_canceled`].
    Canceled {
        /// Scene whose transition was interrupted.
        current: usize,
    },
}

/// Observer that records every callback in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<SceneEvent>,
}

impl EventLog {
    /// Recorded events, oldest first.
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SceneObserver for EventLog {
    fn scene_moved(&mut self, past: Option<usize>, new: usize) {
        self.events.push(SceneEvent::Moved { past, new });
    }

    fn scene_stopped(&mut self, current: usize) {
        self.events.push(SceneEvent::Stopped { current });
    }

    fn scene_canceled(&mut self, current: usize) {
        self.events.push(SceneEvent::Canceled { current });
    }
}
