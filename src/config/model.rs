use crate::foundation::error::{SliderError, SliderResult};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Immutable slider configuration.
///
/// A configuration can be built programmatically or loaded from JSON with
/// [`SliderConfig::from_json_str`]. Either way it is validated before a [`crate::Slider`]
/// accepts it.
pub struct SliderConfig {
    /// Pixel anchor of each scene. Its length is the number of scenes.
    pub scene_points: Vec<f64>,
    /// Transition time in milliseconds between scene `i` and `i + 1`.
    #[serde(default)]
    pub scene_times: Vec<f64>,
    /// Bookmark name for each scene, or empty when scenes are unnamed.
    #[serde(default)]
    pub scene_names: Vec<String>,
    /// Number of pager entries, if a pager is present.
    #[serde(default)]
    pub pager_count: Option<usize>,
    /// Whether a "next scene" affordance is present.
    #[serde(default)]
    pub has_next_button: bool,
    /// Whether a "previous scene" affordance is present.
    #[serde(default)]
    pub has_prev_button: bool,
}

impl SliderConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> SliderResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of scenes.
    pub fn scene_count(&self) -> usize {
        self.scene_points.len()
    }

    /// Index of the last scene, if any.
    pub fn last_scene(&self) -> Option<usize> {
        self.scene_points.len().checked_sub(1)
    }

    /// Bookmark name of `scene`, when scenes are named.
    pub fn scene_name(&self, scene: usize) -> Option<&str> {
        self.scene_names.get(scene).map(String::as_str)
    }

    /// Resolve a bookmark (with or without a leading `#`) to a scene index.
    ///
    /// Unknown, empty, or missing bookmarks resolve to scene 0.
    pub fn resolve_bookmark(&self, bookmark: Option<&str>) -> usize {
        let Some(raw) = bookmark else {
            return 0;
        };
        let name = match raw.split_once('#') {
            Some((_, after)) => after,
            None => raw,
        };
        if name.is_empty() {
            return 0;
        }
        self.scene_names
            .iter()
            .position(|n| n == name)
            .unwrap_or(0)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> SliderResult<()> {
        let n = self.scene_points.len();
        if n == 0 {
            return Err(SliderError::validation(
                "scene_points must contain at least one scene",
            ));
        }
        if let Some(idx) = self.scene_points.iter().position(|p| !p.is_finite()) {
            return Err(SliderError::validation(format!(
                "scene_points[{idx}] must be finite"
            )));
        }
        if self.scene_times.len() != n - 1 {
            return Err(SliderError::validation(format!(
                "scene_times must have {} entries (one per gap), got {}",
                n - 1,
                self.scene_times.len()
            )));
        }
        for (idx, t) in self.scene_times.iter().enumerate() {
            if !t.is_finite() || *t < 0.0 {
                return Err(SliderError::validation(format!(
                    "scene_times[{idx}] must be finite and >= 0"
                )));
            }
        }
        if !self.scene_names.is_empty() && self.scene_names.len() != n {
            return Err(SliderError::validation(format!(
                "scene_names must be empty or have {n} entries, got {}",
                self.scene_names.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
