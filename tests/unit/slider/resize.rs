use super::*;
use crate::{
    config::{
        model::SliderConfig,
        stage::{Piece, PieceGroup, Stage},
    },
    foundation::core::PieceId,
    layout::geometry::PiecePlacement,
    render::backend::{AnimationStatus, StaticCapability, TransitionStyle},
    slider::events::{EventLog, SceneEvent},
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Transition(f64),
    Place(f64),
    Animate(f64),
    Snap(f64),
}

#[derive(Default)]
struct CallRenderer {
    calls: Vec<Call>,
}

impl Renderer for CallRenderer {
    fn set_transition(&mut self, _piece: PieceId, style: &TransitionStyle) {
        self.calls.push(Call::Transition(style.duration_ms));
    }

    fn place(&mut self, _piece: PieceId, placement: &PiecePlacement) {
        self.calls.push(Call::Place(placement.offset_px));
    }

    fn animate(&mut self, _piece: PieceId, target: &PiecePlacement, _duration_ms: f64, _now: f64) {
        self.calls.push(Call::Animate(target.offset_px));
    }

    fn snap(&mut self, _piece: PieceId, target: &PiecePlacement) {
        self.calls.push(Call::Snap(target.offset_px));
    }

    fn poll_animation(&mut self, _now_ms: f64) -> AnimationStatus {
        AnimationStatus::Running
    }
}

#[derive(Default)]
struct ResizeFlags {
    toggles: Vec<bool>,
}

impl Chrome for ResizeFlags {
    fn resizing_changed(&mut self, resizing: bool) {
        self.toggles.push(resizing);
    }
}

fn slider(animated: bool) -> Slider<CallRenderer, ResizeFlags, EventLog> {
    let config = SliderConfig {
        scene_points: vec![0.0, 500.0, 1200.0],
        scene_times: vec![400.0, 600.0],
        ..SliderConfig::default()
    };
    let stage = Stage {
        groups: vec![PieceGroup {
            scene: Some(1),
            pieces: vec![Piece::with_layer(1.0)],
        }],
    };
    Slider::new(
        config,
        stage,
        &StaticCapability(animated),
        1000.0,
        CallRenderer::default(),
        ResizeFlags::default(),
        EventLog::default(),
    )
    .unwrap()
}

#[test]
fn resize_mid_transition_cancels_stops_then_relayouts_once() {
    let mut s = slider(true);
    s.start(None, 0.0);
    s.tick(0.0);
    s.request_scene_change(1, 0.0);
    s.observer_mut().drain();
    s.renderer.calls.clear();

    s.viewport_resized(800.0, 100.0);

    assert_eq!(
        s.observer().events(),
        &[
            SceneEvent::Canceled { current: 1 },
            SceneEvent::Stopped { current: 1 },
        ]
    );
    assert_eq!(
        s.renderer().calls,
        vec![Call::Transition(0.0), Call::Place(-100.0)]
    );
    assert!(!s.state().is_transitioning());
    assert_eq!(s.state().completion_deadline_ms(), None);
    assert_eq!(s.viewport_width(), 800.0);
}

#[test]
fn resize_when_idle_only_relayouts() {
    let mut s = slider(true);
    s.start(Some("missing"), 0.0);
    s.tick(0.0);
    s.observer_mut().drain();
    s.viewport_resized(640.0, 50.0);
    assert!(s.observer().events().is_empty());
    assert_eq!(s.renderer().calls.last(), Some(&Call::Place(820.0)));
}

#[test]
fn resize_before_start_skips_layout() {
    let mut s = slider(true);
    s.viewport_resized(640.0, 0.0);
    assert!(s.renderer().calls.is_empty());
    assert!(s.state().is_resizing());
}

#[test]
fn settle_timer_restarts_on_every_resize() {
    let mut s = slider(true);
    s.start(None, 0.0);
    s.viewport_resized(900.0, 0.0);
    s.viewport_resized(950.0, 8.0);
    s.tick(10.0);
    assert!(s.state().is_resizing());
    assert_eq!(s.state().resize_settle_deadline_ms(), Some(8.0 + RESIZE_SETTLE_MS));
    s.tick(18.0);
    assert!(!s.state().is_resizing());
    assert_eq!(s.chrome().toggles, vec![true, false]);
}

#[test]
fn scene_changes_while_resizing_do_not_schedule_completion() {
    let mut s = slider(true);
    s.start(None, 0.0);
    s.tick(0.0);
    s.viewport_resized(900.0, 0.0);
    s.observer_mut().drain();

    assert!(s.request_scene_change(2, 1.0));
    assert!(!s.state().is_transitioning());
    assert_eq!(s.state().completion_deadline_ms(), None);
    assert_eq!(
        s.observer().events(),
        &[SceneEvent::Moved {
            past: Some(0),
            new: 2
        }]
    );
}

#[test]
fn fallback_resize_snaps_pieces() {
    let mut s = slider(false);
    s.start(None, 0.0);
    assert_eq!(s.renderer().calls, vec![Call::Animate(1000.0)]);
    s.viewport_resized(600.0, 5.0);
    assert_eq!(s.renderer().calls.last(), Some(&Call::Snap(800.0)));
    assert_eq!(
        s.observer().events(),
        &[
            SceneEvent::Moved { past: None, new: 0 },
            SceneEvent::Canceled { current: 0 },
            SceneEvent::Stopped { current: 0 },
        ]
    );

    s.request_scene_change(1, 6.0);
    assert_eq!(s.renderer().calls.last(), Some(&Call::Snap(-200.0)));
}
