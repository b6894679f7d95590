use std::path::Path;

use crate::animation::orchestrator::Orchestrator;
use crate::assets::artwork::{Artwork, load_artwork};
use crate::foundation::error::RevealResult;
use crate::geometry::rectify::RectifiedContour;
use crate::scene::config::PieceConfig;
use crate::scene::frame::{CutWindow, FrameScene, SlotDraw, StrokeItem};

/// A loaded artwork bound to a layout and its choreography.
///
/// All fallible work (parsing, validation, rectification) happens at construction;
/// [`Piece::frame`] is total.
#[derive(Clone, Debug)]
pub struct Piece {
    config: PieceConfig,
    shapes: Vec<Vec<RectifiedContour>>,
    orchestrator: Orchestrator,
}

impl Piece {
    #[tracing::instrument(skip_all)]
    pub fn new(artwork: &Artwork, config: PieceConfig) -> RevealResult<Self> {
        config.validate()?;

        let shapes: Vec<Vec<RectifiedContour>> = artwork
            .shapes()
            .into_iter()
            .map(|shape| {
                shape
                    .contours
                    .iter()
                    .cloned()
                    .map(RectifiedContour::new)
                    .collect()
            })
            .collect();

        for (idx, contours) in shapes.iter().enumerate() {
            for (c, r) in contours.iter().enumerate() {
                tracing::debug!(shape = idx, contour = c, length = r.length(), "rectified");
            }
        }
        if shapes.len() > config.shapes_per_row {
            tracing::warn!(
                shapes = shapes.len(),
                drawn = config.shapes_per_row,
                "artwork has more shapes than a row holds; extra shapes are not drawn"
            );
        }

        let orchestrator =
            Orchestrator::new(config.rows, config.shapes_per_row, config.base_length);
        Ok(Self {
            config,
            shapes,
            orchestrator,
        })
    }

    pub fn load(path: &Path, config: PieceConfig) -> RevealResult<Self> {
        let artwork = load_artwork(path)?;
        Self::new(&artwork, config)
    }

    pub fn config(&self) -> &PieceConfig {
        &self.config
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Advances the choreography to `time_ms` and lays out every visible slot.
    ///
    /// Timestamps are expected to be non-decreasing across calls.
    pub fn frame(&mut self, time_ms: f64) -> FrameScene {
        self.orchestrator.update(time_ms);

        let cfg = &self.config;
        let seconds = time_ms / 1000.0;
        let drawn = self.shapes.len().min(cfg.shapes_per_row);
        let mut slots = Vec::with_capacity(cfg.visible_rows * drawn);

        for row in 0..cfg.visible_rows {
            let transform = cfg.row_transform(row);
            let stroke = cfg.stroke_for_row(row);
            for (shape, contours) in self.shapes.iter().take(drawn).enumerate() {
                let slot = row * cfg.shapes_per_row + shape;
                let length = self.orchestrator.length(slot);
                let start = seconds * cfg.cut_speed
                    + row as f64 * cfg.row_phase
                    + shape as f64 * cfg.shape_phase;
                let windows = (0..contours.len())
                    .map(|contour| CutWindow {
                        contour,
                        start,
                        end: start + length,
                    })
                    .collect();
                slots.push(SlotDraw {
                    slot,
                    row,
                    shape,
                    length,
                    transform,
                    stroke,
                    stroke_width: cfg.stroke_width,
                    windows,
                });
            }
        }

        FrameScene { time_ms, slots }
    }

    pub fn stroke_items(&self, scene: &FrameScene) -> Vec<StrokeItem> {
        scene.resolve(&self.shapes)
    }

    /// Time of frame `index` at the configured frame rate.
    pub fn frame_time_ms(&self, index: u64) -> f64 {
        index as f64 * 1000.0 / f64::from(self.config.fps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/piece.rs"]
mod tests;
