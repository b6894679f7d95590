use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Affine, Canvas, Rgba};
use crate::foundation::error::{RevealError, RevealResult};

/// Layout, choreography and style settings for a piece.
///
/// Every field has a default, so a partial JSON document only overrides what it names.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PieceConfig {
    /// Rows of animated slots.
    pub rows: usize,
    pub shapes_per_row: usize,
    /// Rows actually drawn; the remaining rows still animate.
    pub visible_rows: usize,
    pub row_spacing: f64,
    pub row_offset: f64,
    pub x_offset: f64,
    pub scale: f64,
    /// Resting reveal length of every slot, as a fraction of the contour.
    pub base_length: f64,
    /// Advance of every cut window, in contour fractions per second.
    pub cut_speed: f64,
    pub row_phase: f64,
    pub shape_phase: f64,
    pub stroke: Rgba,
    /// Row `i` is tinted toward white by `i / tint_divisor`.
    pub tint_divisor: f64,
    pub stroke_opacity: f64,
    pub stroke_width: f64,
    pub canvas: Canvas,
    /// Opaque RGBA8 clear colour.
    pub background: [u8; 4],
    pub fps: u32,
}

impl Default for PieceConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            shapes_per_row: 5,
            visible_rows: 9,
            row_spacing: 75.0,
            row_offset: 30.0,
            x_offset: 210.0,
            scale: 0.975,
            base_length: 0.05,
            cut_speed: 0.1,
            row_phase: 0.1,
            shape_phase: 0.2,
            stroke: Rgba::new(221.0 / 255.0, 169.0 / 255.0, 225.0 / 255.0, 1.0),
            tint_divisor: 15.0,
            stroke_opacity: 0.95,
            stroke_width: 3.0,
            canvas: Canvas {
                width: 1280,
                height: 720,
            },
            background: [18, 20, 28, 255],
            fps: 60,
        }
    }
}

impl PieceConfig {
    pub fn from_path(path: &Path) -> RevealResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> RevealResult<()> {
        if self.rows == 0 || self.shapes_per_row == 0 {
            return Err(RevealError::validation(
                "rows and shapes_per_row must be non-zero",
            ));
        }
        if self.visible_rows > self.rows {
            return Err(RevealError::validation(format!(
                "visible_rows ({}) exceeds rows ({})",
                self.visible_rows, self.rows
            )));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(RevealError::validation("canvas width/height must be non-zero"));
        }
        if self.fps == 0 {
            return Err(RevealError::validation("fps must be non-zero"));
        }
        // Frames are written as straight RGBA8 and flattened for yuv420p.
        if self.background[3] != 255 {
            return Err(RevealError::validation(format!(
                "background must be opaque, got alpha {}",
                self.background[3]
            )));
        }

        let numbers = [
            ("row_spacing", self.row_spacing),
            ("row_offset", self.row_offset),
            ("x_offset", self.x_offset),
            ("scale", self.scale),
            ("base_length", self.base_length),
            ("cut_speed", self.cut_speed),
            ("row_phase", self.row_phase),
            ("shape_phase", self.shape_phase),
            ("tint_divisor", self.tint_divisor),
            ("stroke_opacity", self.stroke_opacity),
            ("stroke_width", self.stroke_width),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RevealError::validation(format!("{name} must be finite")));
        }
        if self.scale <= 0.0 {
            return Err(RevealError::validation("scale must be positive"));
        }
        if self.tint_divisor <= 0.0 {
            return Err(RevealError::validation("tint_divisor must be positive"));
        }
        if self.stroke_width < 0.0 {
            return Err(RevealError::validation("stroke_width must be non-negative"));
        }
        Ok(())
    }

    pub fn slot_count(&self) -> usize {
        self.rows * self.shapes_per_row
    }

    /// Placement of row `row`: translate to the row origin, then scale.
    pub fn row_transform(&self, row: usize) -> Affine {
        let y = row as f64 * self.row_spacing + self.row_offset;
        Affine::translate((self.x_offset, y)) * Affine::scale(self.scale)
    }

    pub fn stroke_for_row(&self, row: usize) -> Rgba {
        self.stroke
            .mix(Rgba::WHITE, row as f64 / self.tint_divisor)
            .opacify(self.stroke_opacity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
