use kurbo::{ParamCurve, ParamCurveArclen};

use crate::geometry::contour::{ARCLEN_ACCURACY, Contour};
use crate::foundation::core::{PathSeg, Point};

/// Chord samples per curved segment when measuring arc length.
const CURVE_SAMPLES: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    length: f64, // cumulative from contour start
    segment: usize,
    t: f64,
}

/// A contour with an arc-length parametrization.
///
/// `u` in `[0, 1]` addresses the point at that fraction of the total length. Built once at
/// load time; read-only afterwards.
#[derive(Clone, Debug)]
pub struct RectifiedContour {
    contour: Contour,
    samples: Vec<Sample>,
    total: f64,
}

impl RectifiedContour {
    pub fn new(contour: Contour) -> Self {
        let mut samples = Vec::new();
        let mut acc = 0.0;

        for (segment, seg) in contour.segments.iter().enumerate() {
            match seg {
                PathSeg::Line(line) => {
                    samples.push(Sample {
                        length: acc,
                        segment,
                        t: 0.0,
                    });
                    acc += line.p0.distance(line.p1);
                    samples.push(Sample {
                        length: acc,
                        segment,
                        t: 1.0,
                    });
                }
                PathSeg::Quad(_) | PathSeg::Cubic(_) => {
                    // Chords place the samples; their spacing is rescaled so the segment
                    // totals the same arc length `Contour::length` reports.
                    let mut chords = Vec::with_capacity(CURVE_SAMPLES + 1);
                    let mut chord = 0.0;
                    let mut prev = seg.start();
                    for i in 0..=CURVE_SAMPLES {
                        let t = i as f64 / CURVE_SAMPLES as f64;
                        let p = seg.eval(t);
                        chord += prev.distance(p);
                        prev = p;
                        chords.push((chord, t));
                    }

                    let arclen = seg.arclen(ARCLEN_ACCURACY);
                    let scale = if chord > 0.0 { arclen / chord } else { 0.0 };
                    for (i, (c, t)) in chords.into_iter().enumerate() {
                        let length = if i == CURVE_SAMPLES {
                            acc + arclen
                        } else {
                            (acc + c * scale).min(acc + arclen)
                        };
                        samples.push(Sample {
                            length,
                            segment,
                            t,
                        });
                    }
                    acc += arclen;
                }
            }
        }

        Self {
            contour,
            samples,
            total: acc,
        }
    }

    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    /// Total arc length; matches [`Contour::length`].
    pub fn length(&self) -> f64 {
        self.total
    }

    /// Map a length fraction to `(segment index, local t)`.
    ///
    /// Monotonic in `u`; `u <= 0` is exactly the first point and `u >= 1` exactly the last.
    pub fn map(&self, u: f64) -> (usize, f64) {
        let Some(last) = self.contour.segments.len().checked_sub(1) else {
            return (0, 0.0);
        };
        if u.is_nan() || u <= 0.0 {
            return (0, 0.0);
        }
        if u >= 1.0 {
            return (last, 1.0);
        }

        let d = u * self.total;
        let k = self.samples.partition_point(|s| s.length < d);
        if k == 0 {
            return (0, 0.0);
        }
        if k >= self.samples.len() {
            return (last, 1.0);
        }

        let a = self.samples[k - 1];
        let b = self.samples[k];
        if a.segment != b.segment {
            return (b.segment, b.t);
        }
        let span = b.length - a.length;
        let f = if span > 0.0 {
            (d - a.length) / span
        } else {
            1.0
        };
        (b.segment, a.t + (b.t - a.t) * f)
    }

    /// Point at length fraction `u`.
    pub fn position(&self, u: f64) -> Option<Point> {
        let (segment, t) = self.map(u);
        self.contour.segments.get(segment).map(|s| s.eval(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rectify.rs"]
mod tests;
