//! Reveal draws generative "outline reveal" animations: the outlines of a vector artwork are
//! cut into moving windows whose lengths swell and shrink on a cycling choreography.
//!
//! # Pipeline overview
//!
//! 1. **Load**: artwork document -> `Shape`s (path mini-language parsed into curve segments,
//!    elliptical arcs expanded into cubics).
//! 2. **Rectify**: every contour gets an arc-length table so fractions of its length map to
//!    positions at constant speed.
//! 3. **Animate**: an [`Orchestrator`] drives one [`Timeline`] per slot and cycles through
//!    three choreographies.
//! 4. **Compose**: [`Piece::frame`] turns the current slot lengths into cut windows; resolving
//!    them slices each contour and yields stroked paths.
//! 5. **Render**: SVG text or `vello_cpu` pixels, optionally streamed to `ffmpeg`.
//!
//! Every fallible step happens during loading; advancing and slicing never fail.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod encode;
mod foundation;
mod geometry;
mod path;
mod render;
mod scene;
mod session;

pub use animation::ease::Easing;
pub use animation::orchestrator::{Choreography, HOLD_MS, Orchestrator, RAMP_MS};
pub use animation::timeline::{Step, Timeline};
pub use assets::artwork::{Artwork, ArtworkNode, load_artwork, parse_artwork};
pub use encode::ffmpeg::{EncodeConfig, FfmpegEncoder, ensure_parent_dir, is_ffmpeg_on_path};
pub use foundation::core::{Affine, BezPath, Canvas, PathSeg, Point, Rgba, Vec2};
pub use foundation::error::{RevealError, RevealResult};
pub use geometry::contour::{Contour, Shape};
pub use geometry::rectify::RectifiedContour;
pub use path::arc::EllipticalArc;
pub use path::builder::{build_shape, parse_shape};
pub use path::command::{Command, Operator, parse_path};
pub use render::cpu::{CpuRenderer, FrameRGBA};
pub use render::svg::write_svg_document;
pub use scene::config::PieceConfig;
pub use scene::frame::{CutWindow, FrameScene, SlotDraw, StrokeItem};
pub use session::piece::Piece;
