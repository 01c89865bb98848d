use std::f64::consts::PI;

/// Easing curves for the progressive fallback animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Half-cosine ease-in-out, the classic default for scripted page animations.
    #[default]
    Swing,
    /// Cubic ease-in-out.
    InOutCubic,
}

impl Ease {
    /// Map linear progress `t` to eased progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Swing => 0.5 - (t * PI).cos() / 2.0,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/ease.rs"]
mod tests;
