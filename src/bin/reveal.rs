use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reveal", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Render the frame at a given time as PNG or SVG (chosen by the output extension).
    Frame(FrameArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input artwork (SVG restricted to svg/g/path).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional piece configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time of the frame in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,

    /// Output path ending in `.png` or `.svg`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input artwork (SVG restricted to svg/g/path).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional piece configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Video length in seconds.
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Cmd::Frame(args) => cmd_frame(args),
        Cmd::Render(args) => cmd_render(args),
    }
}

fn load_piece(in_path: &Path, config: Option<&Path>) -> anyhow::Result<reveal::Piece> {
    let cfg = match config {
        Some(path) => reveal::PieceConfig::from_path(path)?,
        None => reveal::PieceConfig::default(),
    };
    Ok(reveal::Piece::load(in_path, cfg)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !args.time_ms.is_finite() || args.time_ms < 0.0 {
        anyhow::bail!("--time-ms must be a non-negative number");
    }
    let mut piece = load_piece(&args.in_path, args.config.as_deref())?;

    // The choreography is stateful: replay every frame up to the requested time.
    let mut index = 0u64;
    while piece.frame_time_ms(index) < args.time_ms {
        piece.frame(piece.frame_time_ms(index));
        index += 1;
    }
    let scene = piece.frame(args.time_ms);
    let items = piece.stroke_items(&scene);
    tracing::debug!(slots = scene.slots.len(), items = items.len(), "frame composed");

    reveal::ensure_parent_dir(&args.out)?;
    let cfg = piece.config();
    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            let doc = reveal::write_svg_document(cfg.canvas, cfg.background, &items);
            std::fs::write(&args.out, doc)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        Some("png") => {
            let mut renderer = reveal::CpuRenderer::new(cfg.canvas, cfg.background)?;
            let frame = renderer.render(&items)?;
            image::save_buffer_with_format(
                &args.out,
                &frame.data,
                frame.width,
                frame.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", args.out.display()))?;
        }
        _ => anyhow::bail!(
            "unsupported output '{}': expected .png or .svg",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        anyhow::bail!("--seconds must be positive");
    }
    let mut piece = load_piece(&args.in_path, args.config.as_deref())?;
    let cfg = piece.config().clone();

    let frames = (args.seconds * f64::from(cfg.fps)).round() as u64;
    let mut renderer = reveal::CpuRenderer::new(cfg.canvas, cfg.background)?;
    let mut encoder = reveal::FfmpegEncoder::new(
        reveal::EncodeConfig::for_piece(&cfg, &args.out),
        renderer.background(),
    )?;

    for index in 0..frames {
        let scene = piece.frame(piece.frame_time_ms(index));
        let items = piece.stroke_items(&scene);
        let frame = renderer.render(&items)?;
        encoder.encode_frame(&frame)?;
    }
    let written = encoder.finish()?;

    tracing::info!(frames = written, modes = piece.orchestrator().mode(), "render finished");
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
