use crate::foundation::core::{Affine, BezPath, Rgba};
use crate::geometry::rectify::RectifiedContour;

/// Fractional window `[start, end]` over one contour of a slot's shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutWindow {
    /// Index into the shape's contours.
    pub contour: usize,
    pub start: f64,
    pub end: f64,
}

/// Draw request for one visible slot.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotDraw {
    pub slot: usize,
    pub row: usize,
    /// Index into the artwork's shapes.
    pub shape: usize,
    pub length: f64,
    pub transform: Affine,
    pub stroke: Rgba,
    pub stroke_width: f64,
    pub windows: Vec<CutWindow>,
}

/// Everything drawn at one instant, before any geometry is cut.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScene {
    pub time_ms: f64,
    pub slots: Vec<SlotDraw>,
}

/// A sliced, placed contour ready to stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeItem {
    pub path: BezPath,
    pub stroke: Rgba,
    pub width: f64,
}

impl FrameScene {
    /// Cuts every window out of `shapes` (rectified contours per shape) and places it.
    ///
    /// Windows that resolve to nothing, or that point past the available geometry, are
    /// dropped.
    pub fn resolve(&self, shapes: &[Vec<RectifiedContour>]) -> Vec<StrokeItem> {
        let mut items = Vec::new();
        for draw in &self.slots {
            let Some(contours) = shapes.get(draw.shape) else {
                continue;
            };
            for window in &draw.windows {
                let Some(rectified) = contours.get(window.contour) else {
                    continue;
                };
                let cut = rectified.sub(window.start, window.end);
                if cut.is_empty() {
                    continue;
                }
                items.push(StrokeItem {
                    path: cut.transform(draw.transform).to_bez_path(),
                    stroke: draw.stroke,
                    width: draw.stroke_width,
                });
            }
        }
        items
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/frame.rs"]
mod tests;
