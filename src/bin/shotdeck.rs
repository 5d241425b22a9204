use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{event, terminal};
use shotdeck::{
    DeckConfig, Frame, InputAdapter, Key, MotionConfig, NavOutcome, Presentation, Rasterizer,
    RenderSettings, Scene, ShotIndex, catalog, save_png, to_svg,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shotdeck", version)]
struct Cli {
    /// Deck config JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Play transitions 5x faster.
    #[arg(long, global = true, default_value_t = false)]
    dev: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List scenes in deck order with their shot counts.
    List,
    /// Render one shot of one scene (.svg, .png or .json by extension).
    Shot(ShotArgs),
    /// Render every shot of every scene into a directory.
    Export(ExportArgs),
    /// Render the transition into a shot as a PNG sequence.
    Frames(FramesArgs),
    /// Navigate the deck from the keyboard, rewriting an SVG after each step.
    Present(PresentArgs),
}

#[derive(Parser, Debug)]
struct ShotArgs {
    /// Scene name (see `list`).
    #[arg(long)]
    scene: String,

    /// Shot index (0-based).
    #[arg(long)]
    shot: u64,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Image format.
    #[arg(long, value_enum, default_value_t = ImageFormat::Svg)]
    format: ImageFormat,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Scene name (see `list`).
    #[arg(long)]
    scene: String,

    /// Target shot; the sequence starts from the previous shot.
    #[arg(long)]
    shot: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct PresentArgs {
    /// SVG file rewritten after every navigation event.
    #[arg(long, default_value = "live.svg")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.dev)?;
    match cli.cmd {
        Command::List => cmd_list(&config),
        Command::Shot(args) => cmd_shot(&config, args),
        Command::Export(args) => cmd_export(&config, args),
        Command::Frames(args) => cmd_frames(&config, args),
        Command::Present(args) => cmd_present(&config, args),
    }
}

fn load_config(path: Option<&Path>, dev: bool) -> anyhow::Result<DeckConfig> {
    let mut config = match path {
        Some(path) => DeckConfig::from_path(path)?,
        None => DeckConfig::default(),
    };
    if dev {
        config.motion.speed = MotionConfig::DEV_SPEED;
    }
    Ok(config)
}

fn cmd_list(config: &DeckConfig) -> anyhow::Result<()> {
    for (idx, scene) in config.build_deck()?.iter().enumerate() {
        println!("{idx}\t{}\t{} shots", scene.name(), scene.terminal_shot());
    }
    Ok(())
}

fn cmd_shot(config: &DeckConfig, args: ShotArgs) -> anyhow::Result<()> {
    let scene = catalog::scene_by_name(&args.scene)?;
    let state = scene.render(ShotIndex(args.shot));
    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("svg") => write_svg(&Frame::settled(&state), &config.render_settings(), &args.out)?,
        Some("png") => {
            let svg = to_svg(&Frame::settled(&state), &config.render_settings());
            let frame = Rasterizer::with_system_fonts().rasterize(&svg)?;
            save_png(&frame, &args.out)?;
        }
        Some("json") => {
            write_file(&args.out, state.to_json()?.as_bytes())?;
        }
        _ => bail!(
            "unsupported output extension for '{}' (expected .svg, .png or .json)",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(config: &DeckConfig, args: ExportArgs) -> anyhow::Result<()> {
    let settings = config.render_settings();
    let rasterizer = matches!(args.format, ImageFormat::Png).then(Rasterizer::with_system_fonts);
    let mut written = 0usize;

    for (idx, scene) in config.build_deck()?.iter().enumerate() {
        for shot in 0..=scene.terminal_shot().0 {
            let frame = Frame::settled(&scene.render(ShotIndex(shot)));
            let path = args.out_dir.join(format!(
                "{idx}-{}-{shot}.{}",
                scene.name(),
                args.format.extension()
            ));
            match &rasterizer {
                Some(r) => save_png(&r.rasterize(&to_svg(&frame, &settings))?, &path)?,
                None => write_svg(&frame, &settings, &path)?,
            }
            written += 1;
        }
    }

    eprintln!("wrote {written} files to {}", args.out_dir.display());
    Ok(())
}

const MAX_FPS: f64 = 240.0;
const MAX_FRAMES: u64 = 10_000;

fn cmd_frames(config: &DeckConfig, args: FramesArgs) -> anyhow::Result<()> {
    if !args.fps.is_finite() || args.fps <= 0.0 || args.fps > MAX_FPS {
        bail!("fps must be in (0, {MAX_FPS}] (got {})", args.fps);
    }
    let scene = catalog::scene_by_name(&args.scene)?;
    let shot = ShotIndex(args.shot);
    let prev = shot.prev().map(|p| scene.render(p));
    let next = scene.render(shot);

    let secs = Frame::transition_secs(&next, &config.motion);
    let span = (secs * args.fps).ceil();
    if span >= MAX_FRAMES as f64 {
        bail!("transition into shot {shot} needs {span} frames (max {MAX_FRAMES})");
    }
    let last = span as u64;
    let settings = config.render_settings();
    let rasterizer = Rasterizer::with_system_fonts();

    for i in 0..=last {
        let elapsed = i as f64 / args.fps;
        let frame = Frame::sample(prev.as_ref(), &next, elapsed, &config.motion);
        let rgba = rasterizer.rasterize(&to_svg(&frame, &settings))?;
        save_png(&rgba, &args.out_dir.join(format!("frame-{i:04}.png")))?;
    }

    eprintln!("wrote {} frames to {}", last + 1, args.out_dir.display());
    Ok(())
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(%err, "failed to restore terminal mode");
        }
    }
}

fn cmd_present(config: &DeckConfig, args: PresentArgs) -> anyhow::Result<()> {
    let settings = config.render_settings();
    let mut presentation = Presentation::new(config.build_deck()?)?;
    let mut input = InputAdapter::new();

    write_svg(&Frame::settled(&presentation.render()), &settings, &args.out)?;
    eprintln!(
        "presenting to {} (arrows step, digits + Enter jump, q quits)",
        args.out.display()
    );

    let _raw = RawModeGuard::enable()?;
    print_status(&presentation, &input, None)?;
    loop {
        let event::Event::Key(key_event) = event::read().context("read terminal event")? else {
            continue;
        };
        let Some(key) = Key::from_key_event(&key_event) else {
            continue;
        };
        let Some(command) = input.handle(key) else {
            print_status(&presentation, &input, None)?;
            continue;
        };
        let Some(outcome) = command.apply(&mut presentation) else {
            break;
        };
        write_svg(&Frame::settled(&presentation.render()), &settings, &args.out)?;
        print_status(&presentation, &input, Some(outcome))?;
    }
    print!("\r\n");
    Ok(())
}

fn print_status(
    presentation: &Presentation,
    input: &InputAdapter,
    outcome: Option<NavOutcome>,
) -> anyhow::Result<()> {
    let (scene_idx, shot) = presentation.position();
    let scene = presentation.current_scene();
    let note = match outcome {
        Some(NavOutcome::SceneChanged { .. }) => "  (new scene)",
        Some(NavOutcome::PresentationOver { .. }) => "  (end of deck)",
        _ => "",
    };
    let mut out = std::io::stdout().lock();
    write!(
        out,
        "\r\x1b[2K[{}/{}] {} shot {}/{}{}  > {}",
        scene_idx.0 + 1,
        presentation.scene_count(),
        scene.name(),
        shot,
        scene.terminal_shot(),
        note,
        input.pending_entry()
    )?;
    out.flush()?;
    Ok(())
}

fn write_svg(frame: &Frame, settings: &RenderSettings, path: &Path) -> anyhow::Result<()> {
    write_file(path, to_svg(frame, settings).as_bytes())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
