use std::collections::BTreeMap;

use crate::foundation::{
    core::PieceId,
    error::{SliderError, SliderResult},
};

/// Attribute holding a piece's parallax layer factor.
pub const ATTR_LAYER: &str = "data-layer";
/// Attribute holding an explicit scene index (on a piece or a group).
pub const ATTR_SCENE: &str = "data-scene";
/// Presence attribute exempting a piece from the stage-centering offset.
pub const ATTR_INNER: &str = "data-inner";
/// Attribute holding the background-x tracking factor.
pub const ATTR_BG_X: &str = "data-bg-x";
/// Attribute holding the background-y tracking factor.
pub const ATTR_BG_Y: &str = "data-bg-y";
/// Attribute holding extra transition directives.
pub const ATTR_TRANSITION: &str = "data-transition";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One visual layer that moves when the active scene changes.
pub struct Piece {
    /// Parallax factor. Must be finite and non-zero; negative values use the reciprocal.
    pub layer: f64,
    /// Owning scene. Falls back to the containing group's scene when absent.
    #[serde(default)]
    pub scene: Option<usize>,
    /// Nested inside an already-offset container, so the stage offset is not added.
    #[serde(default)]
    pub inner: bool,
    /// Background-x tracking factor; absent or zero leaves the axis untouched.
    #[serde(default)]
    pub bg_x: Option<f64>,
    /// Background-y tracking factor; absent or zero leaves the axis untouched.
    #[serde(default)]
    pub bg_y: Option<f64>,
    /// Extra transition directives merged with the computed movement transition.
    #[serde(default)]
    pub transition: Option<String>,
}

impl Piece {
    /// A plain outer piece with the given layer factor and no scene of its own.
    pub fn with_layer(layer: f64) -> Self {
        Self {
            layer,
            scene: None,
            inner: false,
            bg_x: None,
            bg_y: None,
            transition: None,
        }
    }

    /// Read a piece from `data-*` style attributes.
    ///
    /// `data-layer` is required; every other attribute is optional. `data-inner` is a presence
    /// flag and its value is ignored. An empty `data-transition` counts as absent.
    pub fn from_attributes(attrs: &BTreeMap<String, String>) -> SliderResult<Self> {
        let layer = attrs
            .get(ATTR_LAYER)
            .ok_or_else(|| SliderError::attribute(format!("piece is missing '{ATTR_LAYER}'")))
            .and_then(|v| parse_f64(ATTR_LAYER, v))?;
        let scene = attrs
            .get(ATTR_SCENE)
            .map(|v| parse_scene(v))
            .transpose()?;
        let bg_x = attrs
            .get(ATTR_BG_X)
            .map(|v| parse_f64(ATTR_BG_X, v))
            .transpose()?;
        let bg_y = attrs
            .get(ATTR_BG_Y)
            .map(|v| parse_f64(ATTR_BG_Y, v))
            .transpose()?;
        let transition = attrs
            .get(ATTR_TRANSITION)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        Ok(Self {
            layer,
            scene,
            inner: attrs.contains_key(ATTR_INNER),
            bg_x,
            bg_y,
            transition,
        })
    }

    /// Layer factor actually applied to the scene distance.
    pub fn effective_factor(&self) -> f64 {
        if self.layer > 0.0 {
            self.layer
        } else {
            1.0 / self.layer
        }
    }

    /// Whether the piece tracks its background on at least one axis.
    pub fn has_background_tracking(&self) -> bool {
        self.bg_x.is_some() || self.bg_y.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A container of pieces that may carry a scene index for its children.
pub struct PieceGroup {
    /// Scene inherited by pieces without their own `scene`.
    #[serde(default)]
    pub scene: Option<usize>,
    /// Pieces in document order.
    pub pieces: Vec<Piece>,
}

impl PieceGroup {
    /// Read a group's scene from attributes; the pieces are supplied by the caller.
    pub fn from_attributes(
        attrs: &BTreeMap<String, String>,
        pieces: Vec<Piece>,
    ) -> SliderResult<Self> {
        let scene = attrs
            .get(ATTR_SCENE)
            .map(|v| parse_scene(v))
            .transpose()?;
        Ok(Self { scene, pieces })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Every piece of a slider, grouped the way the host lays them out.
pub struct Stage {
    /// Groups in stage order.
    pub groups: Vec<PieceGroup>,
}

impl Stage {
    /// Parse a stage from JSON. Scene ranges are checked later against a config.
    pub fn from_json_str(s: &str) -> SliderResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Total number of pieces.
    pub fn piece_count(&self) -> usize {
        self.groups.iter().map(|g| g.pieces.len()).sum()
    }

    /// Look up a piece.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.groups.get(id.group)?.pieces.get(id.index)
    }

    /// Iterate pieces in stage order together with their address.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.groups.iter().enumerate().flat_map(|(g, group)| {
            group
                .pieces
                .iter()
                .enumerate()
                .map(move |(i, piece)| (PieceId::new(g, i), piece))
        })
    }

    /// Scene a piece belongs to: its own scene, else its group's.
    pub fn resolved_scene(&self, id: PieceId) -> Option<usize> {
        let group = self.groups.get(id.group)?;
        group.pieces.get(id.index)?.scene.or(group.scene)
    }

    /// Check every piece against a slider with `scene_count` scenes.
    pub fn validate(&self, scene_count: usize) -> SliderResult<()> {
        for (g, group) in self.groups.iter().enumerate() {
            if let Some(scene) = group.scene
                && scene >= scene_count
            {
                return Err(SliderError::validation(format!(
                    "group {g} scene {scene} is out of range (scenes: {scene_count})"
                )));
            }
            for (i, piece) in group.pieces.iter().enumerate() {
                if !piece.layer.is_finite() || piece.layer == 0.0 {
                    return Err(SliderError::validation(format!(
                        "piece {g}/{i} layer factor must be finite and non-zero"
                    )));
                }
                match piece.scene.or(group.scene) {
                    None => {
                        return Err(SliderError::validation(format!(
                            "piece {g}/{i} has no scene and its group has none to inherit"
                        )));
                    }
                    Some(scene) if scene >= scene_count => {
                        return Err(SliderError::validation(format!(
                            "piece {g}/{i} scene {scene} is out of range (scenes: {scene_count})"
                        )));
                    }
                    Some(_) => {}
                }
                for (name, factor) in [("bg_x", piece.bg_x), ("bg_y", piece.bg_y)] {
                    if let Some(f) = factor
                        && !f.is_finite()
                    {
                        return Err(SliderError::validation(format!(
                            "piece {g}/{i} {name} must be finite when set"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

fn parse_f64(attr: &str, value: &str) -> SliderResult<f64> {
    let v = value.trim().parse::<f64>().map_err(|_| {
        SliderError::attribute(format!("'{attr}' must be a number, got '{value}'"))
    })?;
    if !v.is_finite() {
        return Err(SliderError::attribute(format!("'{attr}' must be finite")));
    }
    Ok(v)
}

fn parse_scene(value: &str) -> SliderResult<usize> {
    value.trim().parse::<usize>().map_err(|_| {
        SliderError::attribute(format!(
            "'{ATTR_SCENE}' must be a scene index, got '{value}'"
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/stage.rs"]
mod tests;
