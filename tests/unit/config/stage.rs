use super::*;

fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn piece_attributes_parse() {
    let piece = Piece::from_attributes(&attrs(&[
        ("data-layer", "-2"),
        ("data-scene", "1"),
        ("data-inner", ""),
        ("data-bg-x", "0.5"),
        ("data-transition", " opacity 200ms "),
    ]))
    .unwrap();
    assert_eq!(piece.layer, -2.0);
    assert_eq!(piece.scene, Some(1));
    assert!(piece.inner);
    assert_eq!(piece.bg_x, Some(0.5));
    assert_eq!(piece.bg_y, None);
    assert_eq!(piece.transition.as_deref(), Some("opacity 200ms"));
}

#[test]
fn missing_layer_is_an_attribute_error() {
    let err = Piece::from_attributes(&attrs(&[("data-scene", "0")])).unwrap_err();
    assert!(matches!(err, SliderError::Attribute(_)));
}

#[test]
fn malformed_scene_is_an_attribute_error() {
    let err = Piece::from_attributes(&attrs(&[("data-layer", "1"), ("data-scene", "two")]))
        .unwrap_err();
    assert!(err.to_string().contains("data-scene"));
}

#[test]
fn empty_transition_counts_as_absent() {
    let piece =
        Piece::from_attributes(&attrs(&[("data-layer", "1"), ("data-transition", "")])).unwrap();
    assert_eq!(piece.transition, None);
}

#[test]
fn negative_layers_use_the_reciprocal() {
    assert_eq!(Piece::with_layer(2.0).effective_factor(), 2.0);
    assert_eq!(Piece::with_layer(-4.0).effective_factor(), -0.25);
}

#[test]
fn pieces_inherit_the_group_scene() {
    let group = PieceGroup::from_attributes(
        &attrs(&[("data-scene", "2")]),
        vec![Piece::with_layer(1.0), Piece {
            scene: Some(0),
            ..Piece::with_layer(1.0)
        }],
    )
    .unwrap();
    let stage = Stage {
        groups: vec![group],
    };
    assert_eq!(stage.resolved_scene(PieceId::new(0, 0)), Some(2));
    assert_eq!(stage.resolved_scene(PieceId::new(0, 1)), Some(0));
    assert_eq!(stage.resolved_scene(PieceId::new(0, 2)), None);
    stage.validate(3).unwrap();
}

#[test]
fn validation_rejects_zero_layers() {
    let stage = Stage {
        groups: vec![PieceGroup {
            scene: Some(0),
            pieces: vec![Piece::with_layer(0.0)],
        }],
    };
    let err = stage.validate(1).unwrap_err();
    assert!(err.to_string().contains("non-zero"));
}

#[test]
fn validation_rejects_orphan_and_out_of_range_pieces() {
    let orphan = Stage {
        groups: vec![PieceGroup {
            scene: None,
            pieces: vec![Piece::with_layer(1.0)],
        }],
    };
    assert!(orphan.validate(2).is_err());

    let out_of_range = Stage {
        groups: vec![PieceGroup {
            scene: Some(5),
            pieces: vec![],
        }],
    };
    assert!(out_of_range.validate(2).is_err());
}

#[test]
fn pieces_iterate_in_stage_order() {
    let stage = Stage {
        groups: vec![
            PieceGroup {
                scene: Some(0),
                pieces: vec![Piece::with_layer(1.0), Piece::with_layer(2.0)],
            },
            PieceGroup {
                scene: Some(1),
                pieces: vec![Piece::with_layer(3.0)],
            },
        ],
    };
    let ids: Vec<PieceId> = stage.pieces().map(|(id, _)| id).collect();
    assert_eq!(
        ids,
        vec![PieceId::new(0, 0), PieceId::new(0, 1), PieceId::new(1, 0)]
    );
    assert_eq!(stage.piece_count(), 3);
    assert_eq!(stage.piece(PieceId::new(1, 0)).unwrap().layer, 3.0);
}

#[test]
fn stage_json_defaults_optional_fields() {
    let stage = Stage::from_json_str(
        r#"{ "groups": [ { "scene": 1, "pieces": [ { "layer": 1.5 }, { "layer": -2, "inner": true } ] } ] }"#,
    )
    .unwrap();
    assert_eq!(stage.piece_count(), 2);
    let second = stage.piece(PieceId::new(0, 1)).unwrap();
    assert!(second.inner);
    assert_eq!(second.scene, None);
    assert_eq!(second.bg_x, None);
}
