use super::*;
use crate::config::stage::{Piece, PieceGroup};

const POINTS: [f64; 3] = [0.0, 500.0, 1200.0];

fn stage_of(pieces: Vec<Piece>) -> Stage {
    Stage {
        groups: vec![PieceGroup {
            scene: None,
            pieces,
        }],
    }
}

fn scene_piece(layer: f64, scene: usize) -> Piece {
    Piece {
        scene: Some(scene),
        ..Piece::with_layer(layer)
    }
}

#[test]
fn stage_centers_the_active_scene() {
    let layout = compute_layout(2, &Stage::default(), &POINTS, 1000.0);
    assert_eq!(layout.stage_left, -700.0);
    assert!(layout.is_empty());
}

#[test]
fn layered_piece_drifts_by_its_factor() {
    let stage = stage_of(vec![scene_piece(2.0, 1)]);
    let layout = compute_layout(2, &stage, &POINTS, 1000.0);
    let p = layout.placement_for(PieceId::new(0, 0)).unwrap();
    assert_eq!(p.offset_px, -2100.0);
}

#[test]
fn piece_at_its_own_scene_has_no_drift() {
    for k in 0..POINTS.len() {
        let stage = stage_of(vec![scene_piece(1.0, k)]);
        let layout = compute_layout(k, &stage, &POINTS, 1000.0);
        let p = layout.placement_for(PieceId::new(0, 0)).unwrap();
        assert_eq!(p.offset_px, 1000.0 / 2.0 - POINTS[k]);
        assert_eq!(p.offset_px, layout.stage_left);
    }
}

#[test]
fn negative_layers_drift_by_the_reciprocal() {
    let stage = stage_of(vec![Piece {
        inner: true,
        ..scene_piece(-4.0, 1)
    }]);
    let layout = compute_layout(0, &stage, &POINTS, 1000.0);
    let p = layout.placement_for(PieceId::new(0, 0)).unwrap();
    assert_eq!(p.offset_px, 500.0 * -0.25);
}

#[test]
fn inner_pieces_skip_the_stage_offset() {
    let stage = stage_of(vec![Piece {
        inner: true,
        ..scene_piece(1.0, 0)
    }]);
    let layout = compute_layout(1, &stage, &POINTS, 800.0);
    assert_eq!(
        layout.placement_for(PieceId::new(0, 0)).unwrap().offset_px,
        -500.0
    );
}

#[test]
fn pieces_inherit_their_group_scene() {
    let stage = Stage {
        groups: vec![PieceGroup {
            scene: Some(2),
            pieces: vec![Piece::with_layer(1.0)],
        }],
    };
    let layout = compute_layout(0, &stage, &POINTS, 0.0);
    assert_eq!(
        layout.placement_for(PieceId::new(0, 0)).unwrap().offset_px,
        1200.0
    );
}

#[test]
fn background_tracks_only_configured_axes() {
    let stage = stage_of(vec![
        Piece {
            bg_x: Some(0.5),
            bg_y: Some(0.0),
            ..scene_piece(1.0, 0)
        },
        scene_piece(1.0, 0),
    ]);
    let layout = compute_layout(1, &stage, &POINTS, 1000.0);
    let tracked = layout.placement_for(PieceId::new(0, 0)).unwrap();
    assert_eq!(tracked.background.x, Some(250.0));
    assert_eq!(tracked.background.y, None);
    assert!(
        layout
            .placement_for(PieceId::new(0, 1))
            .unwrap()
            .background
            .is_unchanged()
    );
}

#[test]
fn layout_is_deterministic() {
    let stage = stage_of(vec![
        scene_piece(0.3, 0),
        Piece {
            bg_x: Some(-1.5),
            ..scene_piece(-2.0, 2)
        },
    ]);
    let a = compute_layout(1, &stage, &POINTS, 1333.0);
    let b = compute_layout(1, &stage, &POINTS, 1333.0);
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}
