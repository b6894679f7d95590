use crate::foundation::core::{BezPath, Canvas, Point};
use crate::foundation::error::{RevealError, RevealResult};
use crate::scene::frame::StrokeItem;

/// Rendered frame pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// Strokes frame items into an RGBA8 pixmap with `vello_cpu`.
pub struct CpuRenderer {
    width: u16,
    height: u16,
    background: [u8; 4],
    pixmap: vello_cpu::Pixmap,
}

impl CpuRenderer {
    pub fn new(canvas: Canvas, background: [u8; 4]) -> RevealResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| RevealError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| RevealError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(RevealError::validation("canvas width/height must be non-zero"));
        }
        Ok(Self {
            width,
            height,
            background,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub fn background(&self) -> [u8; 4] {
        self.background
    }

    /// Renders `items` over the background. Output is premultiplied.
    pub fn render(&mut self, items: &[StrokeItem]) -> RevealResult<FrameRGBA> {
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 0]);

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let [r, g, b, a] = self.background;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        for item in items {
            if item.width <= 0.0 || !item.width.is_finite() {
                continue;
            }
            let [r, g, b, a] = item.stroke.to_rgba8();
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(item.width));
            ctx.stroke_path(&bezpath_to_cpu(&item.path));
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
