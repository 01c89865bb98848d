use std::collections::BTreeMap;

use crate::{
    foundation::core::PieceId,
    layout::geometry::PiecePlacement,
    render::{
        backend::{AnimationStatus, Renderer, TransitionStyle},
        ease::Ease,
    },
};

/// Inline style of one piece as a style-attribute-driven display layer would hold it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct InlineStyle {
    /// Transition declaration list.
    pub transition: Option<String>,
    /// Transform, e.g. `translateX(-700px)`. Set by declarative placement.
    pub transform: Option<String>,
    /// Left margin in pixels. Set by the fallback animation.
    pub margin_left_px: Option<f64>,
    /// Background-x in pixels.
    pub background_x_px: Option<f64>,
    /// Background-y in pixels.
    pub background_y_px: Option<f64>,
}

impl InlineStyle {
    /// `background-position` value; axes never set keep the initial `0%`.
    pub fn background_position(&self) -> Option<String> {
        if self.background_x_px.is_none() && self.background_y_px.is_none() {
            return None;
        }
        let axis = |v: Option<f64>| v.map_or_else(|| "0%".to_string(), |px| format!("{px}px"));
        Some(format!(
            "{} {}",
            axis(self.background_x_px),
            axis(self.background_y_px)
        ))
    }
}

#[derive(Clone, Copy, Debug)]
struct AxisTween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl AxisTween {
    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn sample(&self, now_ms: f64, ease: Ease) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease.apply(t)
    }

    fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[derive(Clone, Copy, Debug)]
struct PieceTween {
    margin: AxisTween,
    bg_x: Option<AxisTween>,
    bg_y: Option<AxisTween>,
}

impl PieceTween {
    fn apply(&self, style: &mut InlineStyle, now_ms: f64, ease: Ease) {
        style.margin_left_px = Some(self.margin.sample(now_ms, ease));
        if let Some(t) = &self.bg_x {
            style.background_x_px = Some(t.sample(now_ms, ease));
        }
        if let Some(t) = &self.bg_y {
            style.background_y_px = Some(t.sample(now_ms, ease));
        }
    }

    fn is_done(&self, now_ms: f64) -> bool {
        self.margin.is_done(now_ms)
    }
}

/// In-memory [`Renderer`] that keeps one [`InlineStyle`] per piece.
///
/// Declarative placement writes `transition`, `transform` and `background-position`.
/// The fallback primitive tweens `margin-left` and the tracked background axes, sampled on
/// every [`Renderer::poll_animation`].
#[derive(Clone, Debug, Default)]
pub struct InlineStyleRenderer {
    styles: BTreeMap<PieceId, InlineStyle>,
    tweens: BTreeMap<PieceId, PieceTween>,
    ease: Ease,
}

impl InlineStyleRenderer {
    /// Renderer whose fallback animation uses `ease`.
    pub fn with_ease(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::default()
        }
    }

    /// Current style of a piece, if anything was ever written to it.
    pub fn style(&self, piece: PieceId) -> Option<&InlineStyle> {
        self.styles.get(&piece)
    }

    /// All styles in stage order.
    pub fn styles(&self) -> &BTreeMap<PieceId, InlineStyle> {
        &self.styles
    }

    /// Whether a fallback animation is running on `piece`.
    pub fn is_animating(&self, piece: PieceId) -> bool {
        self.tweens.contains_key(&piece)
    }

    fn write_background(style: &mut InlineStyle, placement: &PiecePlacement) {
        if let Some(x) = placement.background.x {
            style.background_x_px = Some(x);
        }
        if let Some(y) = placement.background.y {
            style.background_y_px = Some(y);
        }
    }
}

impl Renderer for InlineStyleRenderer {
    fn set_transition(&mut self, piece: PieceId, style: &TransitionStyle) {
        self.styles.entry(piece).or_default().transition = Some(style.to_css());
    }

    fn place(&mut self, piece: PieceId, placement: &PiecePlacement) {
        let style = self.styles.entry(piece).or_default();
        style.transform = Some(format!("translateX({}px)", placement.offset_px));
        Self::write_background(style, placement);
    }

    fn animate(&mut self, piece: PieceId, target: &PiecePlacement, duration_ms: f64, now_ms: f64) {
        let ease = self.ease;
        let style = self.styles.entry(piece).or_default();
        if let Some(running) = self.tweens.remove(&piece) {
            running.apply(style, now_ms, ease);
        }

        let axis = |from: Option<f64>, to: f64| AxisTween {
            from: from.unwrap_or(0.0),
            to,
            start_ms: now_ms,
            duration_ms: duration_ms.max(0.0),
        };
        let tween = PieceTween {
            margin: axis(style.margin_left_px, target.offset_px),
            bg_x: target.background.x.map(|x| axis(style.background_x_px, x)),
            bg_y: target.background.y.map(|y| axis(style.background_y_px, y)),
        };
        self.tweens.insert(piece, tween);
    }

    fn snap(&mut self, piece: PieceId, target: &PiecePlacement) {
        self.tweens.remove(&piece);
        let style = self.styles.entry(piece).or_default();
        style.margin_left_px = Some(target.offset_px);
        Self::write_background(style, target);
    }

    fn poll_animation(&mut self, now_ms: f64) -> AnimationStatus {
        let ease = self.ease;
        let styles = &mut self.styles;
        self.tweens.retain(|piece, tween| {
            tween.apply(styles.entry(*piece).or_default(), now_ms, ease);
            !tween.is_done(now_ms)
        });
        if self.tweens.is_empty() {
            AnimationStatus::Finished
        } else {
            AnimationStatus::Running
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/inline.rs"]
mod tests;
