use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    let a = Rgba::from_hex("#dda9e1").unwrap();
    let b = Rgba::from_hex("dda9e1").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_rgba8(), [0xdd, 0xa9, 0xe1, 0xff]);

    let c = Rgba::from_hex("#00000080").unwrap();
    assert_eq!(c.to_rgba8()[3], 0x80);
}

#[test]
fn hex_rejects_garbage() {
    assert!(Rgba::from_hex("#abc").is_err());
    assert!(Rgba::from_hex("zzzzzz").is_err());
    assert!(Rgba::from_hex("").is_err());
}

#[test]
fn mix_and_opacify() {
    let base = Rgba::from_hex("#000000").unwrap();
    assert_eq!(base.mix(Rgba::WHITE, 0.0), base);
    assert_eq!(base.mix(Rgba::WHITE, 1.0), Rgba::WHITE);
    let half = base.mix(Rgba::WHITE, 0.5);
    assert!((half.r - 0.5).abs() < 1e-12);

    let faded = Rgba::WHITE.opacify(0.95);
    assert!((faded.a - 0.95).abs() < 1e-12);
    assert_eq!(faded.r, 1.0);
}

#[test]
fn serde_uses_hex_strings() {
    let c = Rgba::from_hex("#dda9e1").unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#dda9e1\"");
    let back: Rgba = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_rgba8(), c.to_rgba8());
    assert!(serde_json::from_str::<Rgba>("\"nope\"").is_err());
}
