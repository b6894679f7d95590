use super::*;

fn cfg(width: u32, height: u32, fps: u32) -> EncodeConfig {
    EncodeConfig {
        width,
        height,
        fps,
        out_path: PathBuf::from("target/encode/out.mp4"),
        overwrite: true,
    }
}

#[test]
fn config_validation_catches_bad_values() {
    assert!(cfg(0, 10, 30).validate().is_err());
    assert!(cfg(11, 10, 30).validate().is_err());
    assert!(cfg(10, 10, 0).validate().is_err());
    assert!(cfg(1280, 720, 60).validate().is_ok());
}

#[test]
fn piece_settings_carry_over() {
    let c = EncodeConfig::for_piece(&PieceConfig::default(), "out.mp4");
    assert_eq!((c.width, c.height, c.fps), (1280, 720, 60));
    c.validate().unwrap();
}

#[test]
fn flatten_premultiplied_over_background() {
    let src = [128u8, 0, 0, 128];
    let mut dst = [0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, [128, 0, 0, 255]);

    flatten_to_opaque_rgba8(&mut dst, &[0, 0, 0, 0], true, [18, 20, 28, 255]).unwrap();
    assert_eq!(dst, [18, 20, 28, 255]);
}

#[test]
fn flatten_straight_alpha() {
    let src = [255u8, 0, 0, 128];
    let mut dst = [0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, [128, 0, 0, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = [0u8; 8];
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 4], true, [0; 4]).is_err());
}
