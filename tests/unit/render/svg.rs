use super::*;
use crate::foundation::core::BezPath;

#[test]
fn document_has_one_path_per_item() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((10.0, 0.0));
    let item = StrokeItem {
        path,
        stroke: Rgba::new(1.0, 0.0, 0.0, 0.95),
        width: 3.0,
    };
    let doc = write_svg_document(
        Canvas {
            width: 64,
            height: 32,
        },
        [18, 20, 28, 255],
        &[item.clone(), item],
    );

    assert!(doc.starts_with("<svg "));
    assert!(doc.contains("viewBox=\"0 0 64 32\""));
    assert!(doc.contains("fill=\"rgba(18,20,28,1)\""));
    assert_eq!(doc.matches("<path ").count(), 2);
    assert!(doc.contains("d=\"M0"));
    assert!(doc.contains("L10"));
    assert!(doc.contains("stroke=\"rgba(255,0,0,0.95)\""));
    assert!(doc.contains("stroke-width=\"3\""));
    assert!(doc.trim_end().ends_with("</svg>"));
}

#[test]
fn empty_frame_is_background_only() {
    let doc = write_svg_document(
        Canvas {
            width: 8,
            height: 8,
        },
        [0, 0, 0, 255],
        &[],
    );
    assert_eq!(doc.matches("<path").count(), 0);
    assert!(roxmltree::Document::parse(&doc).is_ok());
}
