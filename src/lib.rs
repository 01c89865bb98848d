//! A parallax scene slider engine.
//!
//! A slider is a horizontal sequence of scenes. Each scene has a pixel anchor, and the stage is
//! made of pieces that belong to scenes and drift at their own rate (their layer factor) as the
//! active scene changes. This crate computes where every piece goes and drives the timed
//! transition between scenes; drawing is left to a host-supplied [`Renderer`].
//!
//! # Moving parts
//!
//! 1. **Duration**: [`compute_duration`] sums the gap times between two scenes, discounting
//!    multi-scene jumps by [`SKIP_DISCOUNT`].
//! 2. **Geometry**: [`compute_layout`] maps the active scene and viewport width to a
//!    [`StageLayout`] of per-piece offsets and background positions.
//! 3. **Control**: [`Slider`] owns the active scene, cancels overlapping transitions, reports
//!    lifecycle callbacks to a [`SceneObserver`] and UI state to a [`Chrome`].
//! 4. **Resize**: [`Slider::viewport_resized`] snaps in-flight transitions to done, re-lays the
//!    stage out instantly and debounces re-enabling transitions.
//!
//! The engine is single-threaded and host-driven: nothing sleeps or spawns. Every entry point
//! takes the host's clock in milliseconds and [`Slider::tick`] fires due timers.
//!
//! ```
//! use scene_slider::{
//!     EventLog, InlineStyleRenderer, Piece, PieceGroup, SceneEvent, Slider, SliderConfig, Stage,
//!     StaticCapability,
//! };
//!
//! let config = SliderConfig {
//!     scene_points: vec![0.0, 500.0, 1200.0],
//!     scene_times: vec![400.0, 600.0],
//!     ..SliderConfig::default()
//! };
//! let stage = Stage {
//!     groups: vec![PieceGroup {
//!         scene: Some(1),
//!         pieces: vec![Piece::with_layer(2.0)],
//!     }],
//! };
//! let mut slider = Slider::new(
//!     config,
//!     stage,
//!     &StaticCapability(true),
//!     1000.0,
//!     InlineStyleRenderer::default(),
//!     (),
//!     EventLog::default(),
//! )?;
//!
//! slider.start(None, 0.0);
//! slider.tick(0.0);
//! slider.request_scene_change(2, 100.0);
//! assert_eq!(slider.last_duration_ms(), 400.0);
//! slider.tick(500.0);
//! assert_eq!(
//!     slider.observer().events().last(),
//!     Some(&SceneEvent::Stopped { current: 2 })
//! );
//! # Ok::<(), scene_slider::SliderError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod layout;
mod render;
mod slider;
mod timing;

pub use config::model::SliderConfig;
pub use config::stage::{
    ATTR_BG_X, ATTR_BG_Y, ATTR_INNER, ATTR_LAYER, ATTR_SCENE, ATTR_TRANSITION, Piece, PieceGroup,
    Stage,
};
pub use foundation::core::{MotionState, NavButton, PieceId, scene_label};
pub use foundation::error::{SliderError, SliderResult};
pub use layout::geometry::{BackgroundPosition, PiecePlacement, StageLayout, compute_layout};
pub use render::backend::{
    AnimationStatus, BACKGROUND_PROPERTY, CapabilityAdapter, Chrome, MOVEMENT_PROPERTY, Renderer,
    StaticCapability, TransitionStyle,
};
pub use render::ease::Ease;
pub use render::inline::{InlineStyle, InlineStyleRenderer};
pub use slider::controller::{Slider, SliderState};
pub use slider::events::{EventLog, SceneEvent, SceneObserver};
pub use slider::resize::RESIZE_SETTLE_MS;
pub use timing::duration::{SKIP_DISCOUNT, compute_duration};
pub use timing::timer::TimerSlot;
