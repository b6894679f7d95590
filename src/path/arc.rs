use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{CubicBez, Line};

use crate::foundation::core::{PathSeg, Point, Vec2};

/// Sweeps below this (radians) are treated as straight.
const SWEEP_EPSILON: f64 = 1e-9;

/// Elliptical arc in endpoint form, as written in path data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipticalArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vec2,
    /// Rotation of the ellipse's x-axis, in degrees.
    pub x_rotation_deg: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Same arc in center form; angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CenterArc {
    pub center: Point,
    pub radii: Vec2,
    pub phi: f64,
    pub theta1: f64,
    pub delta_theta: f64,
}

impl EllipticalArc {
    /// Cubic approximation, one cubic per started quarter turn.
    ///
    /// Zero radii, coincident endpoints, vanishing sweeps and other unsolvable inputs degrade
    /// to a single line.
    pub fn to_segments(&self) -> Vec<PathSeg> {
        let Some(arc) = self.center_parameterization() else {
            return vec![PathSeg::Line(Line::new(self.from, self.to))];
        };

        let n = (arc.delta_theta.abs() / FRAC_PI_2 - 1e-9).ceil().max(1.0) as usize;
        let step = arc.delta_theta / n as f64;

        let mut out = Vec::with_capacity(n);
        let mut start = self.from;
        for i in 0..n {
            let th0 = arc.theta1 + step * i as f64;
            let th1 = th0 + step;
            let (c0, c1, mut end) = arc.segment(th0, th1);
            if i + 1 == n {
                end = self.to;
            }
            out.push(PathSeg::Cubic(CubicBez::new(start, c0, c1, end)));
            start = end;
        }
        out
    }

    /// Endpoint to center conversion (SVG implementation notes, B.2.4).
    pub(crate) fn center_parameterization(&self) -> Option<CenterArc> {
        let (x1, y1) = (self.from.x, self.from.y);
        let (x2, y2) = (self.to.x, self.to.y);
        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();

        if rx * rx < f64::EPSILON || ry * ry < f64::EPSILON || self.from == self.to {
            return None;
        }

        let phi = self.x_rotation_deg.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        let mid_x = (x1 - x2) / 2.0;
        let mid_y = (y1 - y2) / 2.0;
        let x1_ = cos_phi * mid_x + sin_phi * mid_y;
        let y1_ = -sin_phi * mid_x + cos_phi * mid_y;

        let lambda = (x1_ / rx).powi(2) + (y1_ / ry).powi(2);
        if lambda > 1.0 {
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        let d = (rx * y1_).powi(2) + (ry * x1_).powi(2);
        if d == 0.0 {
            return None;
        }
        let mut k = ((rx * ry).powi(2) / d - 1.0).abs().sqrt();
        if self.sweep == self.large_arc {
            k = -k;
        }
        let cx_ = k * rx * y1_ / ry;
        let cy_ = -k * ry * x1_ / rx;

        let cx = cos_phi * cx_ - sin_phi * cy_ + (x1 + x2) / 2.0;
        let cy = sin_phi * cx_ + cos_phi * cy_ + (y1 + y2) / 2.0;

        let u = Vec2::new((x1_ - cx_) / rx, (y1_ - cy_) / ry);
        let v = Vec2::new((-x1_ - cx_) / rx, (-y1_ - cy_) / ry);
        if u.hypot() == 0.0 || v.hypot() == 0.0 {
            return None;
        }

        let mut theta1 = (u.x / u.hypot()).clamp(-1.0, 1.0).acos();
        if u.y < 0.0 {
            theta1 = -theta1;
        }

        let cos_delta = (u.dot(v) / (u.hypot() * v.hypot())).clamp(-1.0, 1.0);
        let mut delta_theta = cos_delta.acos();
        if u.cross(v) < 0.0 {
            delta_theta = -delta_theta;
        }
        if self.sweep && delta_theta < 0.0 {
            delta_theta += TAU;
        } else if !self.sweep && delta_theta > 0.0 {
            delta_theta -= TAU;
        }
        if !delta_theta.is_finite() || delta_theta.abs() < SWEEP_EPSILON {
            return None;
        }

        Some(CenterArc {
            center: Point::new(cx, cy),
            radii: Vec2::new(rx, ry),
            phi,
            theta1,
            delta_theta,
        })
    }
}

impl CenterArc {
    fn point(&self, x: f64, y: f64) -> Point {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Point::new(
            self.center.x + cos_phi * x - sin_phi * y,
            self.center.y + sin_phi * x + cos_phi * y,
        )
    }

    /// Control points and end point of the cubic spanning `th0..th1` (|th1 - th0| <= pi/2).
    fn segment(&self, th0: f64, th1: f64) -> (Point, Point, Point) {
        let (rx, ry) = (self.radii.x, self.radii.y);
        let (sin_th0, cos_th0) = th0.sin_cos();
        let (sin_th1, cos_th1) = th1.sin_cos();

        let th_half = 0.5 * (th1 - th0);
        let t = (8.0 / 3.0) * (th_half * 0.5).sin().powi(2) / th_half.sin();

        let x1 = rx * (cos_th0 - t * sin_th0);
        let y1 = ry * (sin_th0 + t * cos_th0);
        let x3 = rx * cos_th1;
        let y3 = ry * sin_th1;
        let x2 = x3 + rx * (t * sin_th1);
        let y2 = y3 + ry * (-t * cos_th1);

        (self.point(x1, y1), self.point(x2, y2), self.point(x3, y3))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/arc.rs"]
mod tests;
