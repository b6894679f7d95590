use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use anyhow::Context as _;

use crate::foundation::error::{RevealError, RevealResult};
use crate::render::cpu::FrameRGBA;
use crate::scene::config::PieceConfig;

/// Output settings for an MP4 stream.
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub out_path: PathBuf,
    pub overwrite: bool,
}

impl EncodeConfig {
    /// Canvas size and frame rate taken from `piece`.
    pub fn for_piece(piece: &PieceConfig, out_path: impl Into<PathBuf>) -> Self {
        Self {
            width: piece.canvas.width,
            height: piece.canvas.height,
            fps: piece.fps,
            out_path: out_path.into(),
            overwrite: true,
        }
    }

    pub fn validate(&self) -> RevealResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RevealError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if self.fps == 0 {
            return Err(RevealError::validation("encode fps must be non-zero"));
        }
        // yuv420p needs even dimensions.
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(RevealError::validation(format!(
                "encode width/height must be even, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> RevealResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Streams frames as raw RGBA into a system `ffmpeg` process producing H.264 MP4.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    background: [u8; 4],
    child: Child,
    stdin: Option<ChildStdin>,
    scratch: Vec<u8>,
    frames: u64,
}

impl FfmpegEncoder {
    pub fn new(cfg: EncodeConfig, background: [u8; 4]) -> RevealResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(RevealError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(RevealError::render(
                "ffmpeg is required for MP4 output but was not found on PATH",
            ));
        }

        let size = format!("{}x{}", cfg.width, cfg.height);
        let rate = cfg.fps.to_string();
        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .arg(if cfg.overwrite { "-y" } else { "-n" })
            .args(["-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba"])
            .args(["-s", size.as_str(), "-r", rate.as_str(), "-i", "pipe:0"])
            .args(["-an", "-c:v", "libx264", "-pix_fmt", "yuv420p"])
            .args(["-movflags", "+faststart"])
            .arg(&cfg.out_path);

        let mut child = cmd
            .spawn()
            .map_err(|e| RevealError::render(format!("failed to spawn ffmpeg: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| RevealError::render("ffmpeg stdin unavailable"))?;

        tracing::debug!(out = %cfg.out_path.display(), %size, fps = cfg.fps, "ffmpeg started");
        Ok(Self {
            scratch: vec![0u8; cfg.width as usize * cfg.height as usize * 4],
            cfg,
            background,
            child,
            stdin: Some(stdin),
            frames: 0,
        })
    }

    pub fn encode_frame(&mut self, frame: &FrameRGBA) -> RevealResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(RevealError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        flatten_to_opaque_rgba8(
            &mut self.scratch,
            &frame.data,
            frame.premultiplied,
            self.background,
        )?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(RevealError::render("ffmpeg encoder already finished"));
        };
        stdin
            .write_all(&self.scratch)
            .map_err(|e| RevealError::render(format!("write frame to ffmpeg: {e}")))?;
        self.frames += 1;
        Ok(())
    }

    /// Closes the pipe and waits for ffmpeg; returns the number of frames written.
    pub fn finish(mut self) -> RevealResult<u64> {
        drop(self.stdin.take());
        let output = self
            .child
            .wait_with_output()
            .map_err(|e| RevealError::render(format!("wait for ffmpeg: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RevealError::render(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(self.frames)
    }
}

/// Composites `src` over an opaque `background`, writing alpha 255 everywhere.
pub(crate) fn flatten_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    premultiplied: bool,
    background: [u8; 4],
) -> RevealResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(RevealError::validation(format!(
            "frame buffer holds {} bytes, expected {}",
            src.len(),
            dst.len()
        )));
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        let inv = 255 - a;
        for c in 0..3 {
            let fg = if premultiplied {
                u16::from(s[c])
            } else {
                mul_div255(u16::from(s[c]), a)
            };
            d[c] = (fg + mul_div255(u16::from(background[c]), inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u16 {
    ((u32::from(x) * u32::from(y) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
