use kurbo::{CubicBez, Line, QuadBez};

use crate::foundation::{
    core::{PathSeg, Point, Vec2},
    error::{RevealError, RevealResult},
};
use crate::geometry::contour::{Contour, Shape};
use crate::path::{
    arc::EllipticalArc,
    command::{Command, Operator, parse_path},
};

/// Closing segments shorter than this are not emitted.
pub(crate) const CLOSE_EPSILON: f64 = 0.001;

/// Last control point, kept only while the next command may be its smooth continuation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Reflection {
    #[default]
    None,
    Cubic(Point),
    Quad(Point),
}

/// Fold state carried across the whole command list (subpaths share it).
#[derive(Clone, Copy, Debug, Default)]
struct CurveBuilder {
    cursor: Point,
    anchor: Point,
    reflection: Reflection,
}

/// Parse path data straight into a [`Shape`].
pub fn parse_shape(d: &str) -> RevealResult<Shape> {
    build_shape(&parse_path(d)?)
}

/// Build one contour per move-started run of commands.
pub fn build_shape(commands: &[Command]) -> RevealResult<Shape> {
    if let Some(first) = commands.first()
        && first.operator != Operator::Move
    {
        return Err(RevealError::parse(format!(
            "path data must begin with a move, found '{}'",
            first.operator.letter(first.relative)
        )));
    }

    let mut builder = CurveBuilder::default();
    let contours = compounds(commands)
        .map(|run| builder.contour(run))
        .collect();
    Ok(Shape::new(contours))
}

fn compounds(commands: &[Command]) -> impl Iterator<Item = &[Command]> {
    let starts: Vec<usize> = commands
        .iter()
        .enumerate()
        .filter(|(_, c)| c.operator == Operator::Move)
        .map(|(i, _)| i)
        .collect();
    let ends: Vec<usize> = starts
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(commands.len()))
        .collect();
    starts
        .into_iter()
        .zip(ends)
        .map(move |(s, e)| &commands[s..e])
}

impl CurveBuilder {
    fn contour(&mut self, run: &[Command]) -> Contour {
        let mut segments = Vec::new();
        let mut closed = false;
        for cmd in run {
            self.apply(cmd, &mut segments, &mut closed);
        }
        Contour::new(segments, closed)
    }

    fn resolve(&self, cmd: &Command, i: usize) -> Point {
        let p = cmd.point(i);
        if cmd.relative {
            p + self.cursor.to_vec2()
        } else {
            p
        }
    }

    fn line_to(&mut self, target: Point, out: &mut Vec<PathSeg>) {
        out.push(PathSeg::Line(Line::new(self.cursor, target)));
        self.cursor = target;
    }

    fn apply(&mut self, cmd: &Command, out: &mut Vec<PathSeg>, closed: &mut bool) {
        let ops = &cmd.operands;
        match cmd.operator {
            Operator::Move => {
                self.cursor = self.resolve(cmd, 0);
                self.anchor = self.cursor;
                for i in 1..ops.len() / 2 {
                    let target = self.resolve(cmd, i);
                    self.line_to(target, out);
                }
                self.reflection = Reflection::None;
            }
            Operator::Line => {
                let target = self.resolve(cmd, 0);
                self.line_to(target, out);
                self.reflection = Reflection::None;
            }
            Operator::Horizontal => {
                let x = if cmd.relative { self.cursor.x + ops[0] } else { ops[0] };
                self.line_to(Point::new(x, self.cursor.y), out);
                self.reflection = Reflection::None;
            }
            Operator::Vertical => {
                let y = if cmd.relative { self.cursor.y + ops[0] } else { ops[0] };
                self.line_to(Point::new(self.cursor.x, y), out);
                self.reflection = Reflection::None;
            }
            Operator::Cubic => {
                let c0 = self.resolve(cmd, 0);
                let c1 = self.resolve(cmd, 1);
                let end = self.resolve(cmd, 2);
                out.push(PathSeg::Cubic(CubicBez::new(self.cursor, c0, c1, end)));
                self.cursor = end;
                self.reflection = Reflection::Cubic(c1);
            }
            Operator::SmoothCubic => {
                let c0 = match self.reflection {
                    Reflection::Cubic(prev) => self.reflect(prev),
                    _ => self.cursor,
                };
                let c1 = self.resolve(cmd, 0);
                let end = self.resolve(cmd, 1);
                out.push(PathSeg::Cubic(CubicBez::new(self.cursor, c0, c1, end)));
                self.cursor = end;
                self.reflection = Reflection::Cubic(c1);
            }
            Operator::Quad => {
                let c = self.resolve(cmd, 0);
                let end = self.resolve(cmd, 1);
                out.push(PathSeg::Quad(QuadBez::new(self.cursor, c, end)));
                self.cursor = end;
                self.reflection = Reflection::Quad(c);
            }
            Operator::SmoothQuad => {
                let c = match self.reflection {
                    Reflection::Quad(prev) => self.reflect(prev),
                    _ => self.cursor,
                };
                let end = self.resolve(cmd, 0);
                out.push(PathSeg::Quad(QuadBez::new(self.cursor, c, end)));
                self.cursor = end;
                self.reflection = Reflection::Quad(c);
            }
            Operator::Arc => {
                let mut end = Point::new(ops[5], ops[6]);
                if cmd.relative {
                    end += self.cursor.to_vec2();
                }
                let arc = EllipticalArc {
                    from: self.cursor,
                    to: end,
                    radii: Vec2::new(ops[0], ops[1]),
                    x_rotation_deg: ops[2],
                    large_arc: ops[3] == 1.0,
                    sweep: ops[4] == 1.0,
                };
                out.extend(arc.to_segments());
                self.cursor = end;
                self.reflection = Reflection::None;
            }
            Operator::Close => {
                if self.cursor.distance(self.anchor) > CLOSE_EPSILON {
                    out.push(PathSeg::Line(Line::new(self.cursor, self.anchor)));
                }
                *closed = true;
                self.reflection = Reflection::None;
            }
        }
    }

    /// Mirror `control` through the cursor.
    fn reflect(&self, control: Point) -> Point {
        self.cursor + (self.cursor - control)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/builder.rs"]
mod tests;
