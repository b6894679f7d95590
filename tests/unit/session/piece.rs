use super::*;
use crate::assets::artwork::parse_artwork;
use crate::foundation::error::RevealError;

const ART: &str = r#"<svg>
  <path d="M0 0 L40 0 L40 40 L0 40 Z"/>
  <g><path d="M0 0 C10 -10 20 10 30 0"/></g>
</svg>"#;

fn piece() -> Piece {
    Piece::new(&parse_artwork(ART).unwrap(), PieceConfig::default()).unwrap()
}

#[test]
fn frame_lays_out_visible_rows_only() {
    let mut p = piece();
    let scene = p.frame(0.0);
    assert_eq!(scene.slots.len(), 9 * 2);
    assert!(scene.slots.iter().all(|s| s.row < 9));
    assert_eq!(scene.slots[2].slot, 5);
    assert_eq!(scene.slots[3].slot, 6);
}

#[test]
fn cut_windows_follow_time_and_phase() {
    let mut p = piece();
    let scene = p.frame(2000.0);
    let s = scene
        .slots
        .iter()
        .find(|s| s.row == 3 && s.shape == 1)
        .unwrap();
    let expected = 2.0 * 0.1 + 3.0 * 0.1 + 0.2;
    assert!((s.windows[0].start - expected).abs() < 1e-12);
    assert!((s.windows[0].end - s.windows[0].start - s.length).abs() < 1e-12);
}

#[test]
fn lengths_come_from_the_orchestrator() {
    let mut p = piece();
    p.frame(0.0);
    let scene = p.frame(1000.0);
    // Slot 0 has fully grown one second into the cascade.
    assert_eq!(scene.slots[0].length, 1.0);
    assert_eq!(p.orchestrator().length(0), 1.0);
    let items = p.stroke_items(&scene);
    assert!(!items.is_empty());
}

#[test]
fn extra_shapes_are_not_drawn() {
    let art = parse_artwork(
        r#"<svg><path d="M0 0 L1 0"/><path d="M0 0 L1 0"/><path d="M0 0 L1 0"/></svg>"#,
    )
    .unwrap();
    let cfg = PieceConfig {
        shapes_per_row: 2,
        ..PieceConfig::default()
    };
    let mut p = Piece::new(&art, cfg).unwrap();
    assert_eq!(p.shape_count(), 3);
    assert!(p.frame(0.0).slots.iter().all(|s| s.shape < 2));
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = PieceConfig {
        fps: 0,
        ..PieceConfig::default()
    };
    let err = Piece::new(&parse_artwork(ART).unwrap(), cfg).unwrap_err();
    assert!(matches!(err, RevealError::Validation(_)));
}

#[test]
fn frame_times_use_fps() {
    let p = piece();
    assert_eq!(p.frame_time_ms(0), 0.0);
    assert_eq!(p.frame_time_ms(60), 1000.0);
}
