use crate::{config::stage::Stage, foundation::core::PieceId};

/// Target background position of a piece. `None` on an axis means "leave it as rendered".
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundPosition {
    /// New background-x in pixels, if the piece tracks x.
    pub x: Option<f64>,
    /// New background-y in pixels, if the piece tracks y.
    pub y: Option<f64>,
}

impl BackgroundPosition {
    /// Whether neither axis changes.
    pub fn is_unchanged(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Where a single piece should be for the active scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PiecePlacement {
    /// Horizontal offset in pixels.
    pub offset_px: f64,
    /// Background position target.
    pub background: BackgroundPosition,
}

/// Placements for every piece of a stage at one scene and viewport width.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StageLayout {
    /// Offset of the whole stage relative to the viewport.
    pub stage_left: f64,
    per_group: Vec<Vec<PiecePlacement>>,
}

impl StageLayout {
    /// Placement of one piece, if it exists.
    pub fn placement_for(&self, id: PieceId) -> Option<&PiecePlacement> {
        self.per_group.get(id.group)?.get(id.index)
    }

    /// Placements in stage order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &PiecePlacement)> + '_ {
        self.per_group.iter().enumerate().flat_map(|(g, group)| {
            group
                .iter()
                .enumerate()
                .map(move |(i, p)| (PieceId::new(g, i), p))
        })
    }

    /// Number of placed pieces.
    pub fn len(&self) -> usize {
        self.per_group.iter().map(Vec::len).sum()
    }

    /// Whether no piece was placed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute every piece's offset and background position with `current` as the active scene.
///
/// The stage is centered so that the active scene's anchor sits in the middle of the viewport.
/// Each piece then drifts by its distance from the active scene scaled by its layer factor.
///
/// Callers guarantee `current` indexes `scene_points`, every piece resolves to a valid scene,
/// and no layer factor is zero (see [`Stage::validate`]). A piece that fails to resolve is
/// treated as belonging to the active scene.
pub fn compute_layout(
    current: usize,
    stage: &Stage,
    scene_points: &[f64],
    viewport_width: f64,
) -> StageLayout {
    let current_point = scene_points.get(current).copied().unwrap_or(0.0);
    let stage_left = viewport_width / 2.0 - current_point;

    let per_group = stage
        .groups
        .iter()
        .map(|group| {
            group
                .pieces
                .iter()
                .map(|piece| {
                    debug_assert!(piece.layer != 0.0, "layer factor must be non-zero");
                    let piece_point = piece
                        .scene
                        .or(group.scene)
                        .and_then(|s| scene_points.get(s).copied())
                        .unwrap_or(current_point);
                    let mut offset_px = (piece_point - current_point) * piece.effective_factor();
                    if !piece.inner {
                        offset_px += stage_left;
                    }
                    PiecePlacement {
                        offset_px,
                        background: BackgroundPosition {
                            x: track_background(piece.bg_x, current_point),
                            y: track_background(piece.bg_y, current_point),
                        },
                    }
                })
                .collect()
        })
        .collect();

    StageLayout {
        stage_left,
        per_group,
    }
}

fn track_background(factor: Option<f64>, current_point: f64) -> Option<f64> {
    factor.filter(|f| *f != 0.0).map(|f| f * current_point)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
