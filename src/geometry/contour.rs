use kurbo::{ParamCurve, ParamCurveArclen};

use crate::foundation::core::{Affine, BezPath, PathSeg, Point};

/// Accuracy passed to kurbo's arc length routines.
pub(crate) const ARCLEN_ACCURACY: f64 = 1e-6;

/// One continuous run of line, quadratic and cubic segments.
///
/// Coordinates are screen space (y grows downward), so a positive-area winding reads
/// clockwise on screen. Contours are values: transforming or slicing returns a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    pub segments: Vec<PathSeg>,
    pub closed: bool,
}

impl Contour {
    pub fn new(segments: Vec<PathSeg>, closed: bool) -> Self {
        Self { segments, closed }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|s| s.start())
    }

    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|s| s.end())
    }

    pub fn length(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.arclen(ARCLEN_ACCURACY))
            .sum()
    }

    pub fn transform(&self, affine: Affine) -> Self {
        Self {
            segments: self.segments.iter().map(|&s| affine * s).collect(),
            closed: self.closed,
        }
    }

    /// Same curve traversed end to start.
    pub fn reversed(&self) -> Self {
        Self {
            segments: self.segments.iter().rev().map(|s| s.reverse()).collect(),
            closed: self.closed,
        }
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.start() else {
            return path;
        };
        path.move_to(first);
        for seg in &self.segments {
            match *seg {
                PathSeg::Line(l) => path.line_to(l.p1),
                PathSeg::Quad(q) => path.quad_to(q.p1, q.p2),
                PathSeg::Cubic(c) => path.curve_to(c.p1, c.p2, c.p3),
            }
        }
        if self.closed {
            path.close_path();
        }
        path
    }

    /// Path data string (`M … L/Q/C … Z`); empty for an empty contour.
    pub fn to_svg_path_data(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        self.to_bez_path().to_svg()
    }
}

/// Ordered contours of one path; the first is the outer boundary by convention.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub contours: Vec<Contour>,
}

impl Shape {
    pub fn new(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(Contour::is_empty)
    }

    pub fn transform(&self, affine: Affine) -> Self {
        Self {
            contours: self.contours.iter().map(|c| c.transform(affine)).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/contour.rs"]
mod tests;
