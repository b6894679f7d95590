use kurbo::ParamCurve;

use crate::foundation::core::PathSeg;
use crate::geometry::{contour::Contour, rectify::RectifiedContour};

impl RectifiedContour {
    /// Extract the part between two length fractions as a new open contour.
    ///
    /// Closed contours wrap: both ends are taken modulo 1, `end < start` runs through the seam,
    /// and a span of at least 1 yields the whole loop starting at `start`. Open contours clamp
    /// to `[0, 1]` and are walked backwards when `end < start`. Boundary segments are split at
    /// the exact fractional parameter. `start == end` yields an empty contour.
    pub fn sub(&self, start: f64, end: f64) -> Contour {
        if self.contour().is_empty() || !start.is_finite() || !end.is_finite() || start == end {
            return Contour::empty();
        }

        let mut out = Vec::new();
        if self.contour().closed {
            let a = start.rem_euclid(1.0);
            if end - start >= 1.0 {
                self.push_range(a, 1.0, &mut out);
                self.push_range(0.0, a, &mut out);
            } else {
                let b = end.rem_euclid(1.0);
                if a < b {
                    self.push_range(a, b, &mut out);
                } else if a > b {
                    self.push_range(a, 1.0, &mut out);
                    self.push_range(0.0, b, &mut out);
                }
            }
        } else {
            let a = start.clamp(0.0, 1.0);
            let b = end.clamp(0.0, 1.0);
            if a < b {
                self.push_range(a, b, &mut out);
            } else if a > b {
                self.push_range(b, a, &mut out);
                return Contour::new(out, false).reversed();
            }
        }
        Contour::new(out, false)
    }

    /// Append the pieces covering `a..b` (`0 <= a`, `b <= 1`); nothing when `a >= b`.
    fn push_range(&self, a: f64, b: f64, out: &mut Vec<PathSeg>) {
        if a >= b {
            return;
        }
        let (i0, t0) = self.map(a);
        let (i1, t1) = self.map(b);
        let segments = &self.contour().segments;

        for (i, seg) in segments.iter().enumerate().take(i1 + 1).skip(i0) {
            let lo = if i == i0 { t0 } else { 0.0 };
            let hi = if i == i1 { t1 } else { 1.0 };
            if lo >= hi {
                continue;
            }
            if lo == 0.0 && hi == 1.0 {
                out.push(*seg);
            } else {
                out.push(seg.subsegment(lo..hi));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/slice.rs"]
mod tests;
