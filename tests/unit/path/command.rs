use super::*;

fn ops(cmds: &[Command]) -> Vec<(Operator, bool)> {
    cmds.iter().map(|c| (c.operator, c.relative)).collect()
}

#[test]
fn simple_closed_path() {
    let cmds = parse_path("M0,0 L10,0 L10,10 Z").unwrap();
    assert_eq!(
        ops(&cmds),
        vec![
            (Operator::Move, false),
            (Operator::Line, false),
            (Operator::Line, false),
            (Operator::Close, false),
        ]
    );
    assert_eq!(cmds[2].operands.as_slice(), &[10.0, 10.0]);
    assert!(cmds[3].operands.is_empty());
}

#[test]
fn relative_letters_are_flagged() {
    let cmds = parse_path("m1 2l3 4h5v6c1 2 3 4 5 6s1 2 3 4q1 2 3 4t1 2a1 1 0 0 1 2 2z").unwrap();
    assert!(cmds.iter().all(|c| c.relative));
    assert_eq!(cmds.len(), 10);
}

#[test]
fn repeated_groups_expand_except_move() {
    let cmds = parse_path("M0 0 1 1 2 2 L3 3 4 4 H1 2 3").unwrap();
    assert_eq!(cmds[0].operator, Operator::Move);
    assert_eq!(cmds[0].operands.len(), 6);
    assert_eq!(cmds[0].points().count(), 3);

    let lines: Vec<_> = cmds.iter().filter(|c| c.operator == Operator::Line).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].point(0), Point::new(4.0, 4.0));

    let horiz = cmds
        .iter()
        .filter(|c| c.operator == Operator::Horizontal)
        .count();
    assert_eq!(horiz, 3);
}

#[test]
fn compact_number_forms() {
    let cmds = parse_path("M-1.5-2.5.5.5L1e2,2E-1").unwrap();
    assert_eq!(cmds[0].operands.as_slice(), &[-1.5, -2.5, 0.5, 0.5]);
    assert_eq!(cmds[1].operands.as_slice(), &[100.0, 0.2]);
}

#[test]
fn arc_flags_may_touch_numbers() {
    let cmds = parse_path("M0 0 A25 25 0 1150 0").unwrap();
    assert_eq!(cmds[1].operator, Operator::Arc);
    assert_eq!(
        cmds[1].operands.as_slice(),
        &[25.0, 25.0, 0.0, 1.0, 1.0, 50.0, 0.0]
    );
}

#[test]
fn arc_groups_repeat() {
    let cmds = parse_path("M0 0 a10,10,0,0,1,20,0 10 10 0 0 0 -20 0").unwrap();
    let arcs: Vec<_> = cmds.iter().filter(|c| c.operator == Operator::Arc).collect();
    assert_eq!(arcs.len(), 2);
    assert_eq!(arcs[1].operands[4], 0.0);
    assert_eq!(arcs[1].operands[5], -20.0);
}

#[test]
fn arc_rejects_bad_flag() {
    let err = parse_path("M0 0 A1 1 0 2 0 5 5").unwrap_err();
    assert!(matches!(err, RevealError::Parse(_)));
}

#[test]
fn missing_operands_fail() {
    assert!(matches!(parse_path("M0 0 L"), Err(RevealError::Parse(_))));
    assert!(matches!(parse_path("M0 0 C1 2 3"), Err(RevealError::Parse(_))));
}

#[test]
fn odd_quad_operands_fail() {
    let err = parse_path("M0 0 Q1 2 3 4 5 6").unwrap_err();
    assert!(err.to_string().contains("multiple of 4"));
}

#[test]
fn unsupported_operator_is_named() {
    let err = parse_path("M0 0 X 1 1").unwrap_err();
    assert!(err.to_string().contains("'X'"));
}

#[test]
fn garbage_token_fails() {
    assert!(parse_path("M0 0 L1 #").is_err());
    assert!(parse_path("M0 0 L1 .").is_err());
}

#[test]
fn close_takes_no_operands() {
    assert!(parse_path("M0 0 L1 1 Z 4").is_err());
}

#[test]
fn leading_numbers_without_command_fail() {
    assert!(parse_path("1 2 M0 0").is_err());
    assert!(parse_path("3 4").is_err());
}

#[test]
fn empty_data_is_empty() {
    assert!(parse_path("").unwrap().is_empty());
    assert!(parse_path("  ,  ").unwrap().is_empty());
}

#[test]
fn letters_round_trip() {
    for c in "MLHVCSQTAZmlhvcsqtaz".chars() {
        let (op, rel) = Operator::from_letter(c).unwrap();
        assert_eq!(op.letter(rel), c);
    }
    assert!(Operator::from_letter('x').is_none());
}

#[test]
fn overflowing_numbers_fail() {
    for d in ["M0 0 L1e400 0", "M0 0 L0 -1e309", "M0 0 A1e999 1 0 0 1 5 5"] {
        let err = parse_path(d).unwrap_err();
        assert!(matches!(err, RevealError::Parse(ref m) if m.contains("out of range")), "{d}");
    }
    assert!(parse_path("M0 0 L1e300 0").is_ok());
}
