use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brenfusion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one composited frame as a PNG.
    Frame(FrameArgs),
    /// List the registered characters.
    Characters,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Asset root holding `char/<part>_<character>.png` files.
    #[arg(long)]
    assets: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Scene JSON (picks, dance toggle, animation state). Defaults to an all-Heather figure.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Stage settings JSON (canvas, margin, outline, background, debug overlays).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Head pick.
    #[arg(long, value_parser = parse_character)]
    head: Option<brenfusion::Character>,

    /// Hair pick, or `none`.
    #[arg(long, value_parser = parse_pick)]
    hair: Option<Pick>,

    /// Torso pick.
    #[arg(long, value_parser = parse_character)]
    torso: Option<brenfusion::Character>,

    /// Arms pick, or `none`.
    #[arg(long, value_parser = parse_pick)]
    arms: Option<Pick>,

    /// Legs pick, or `none`.
    #[arg(long, value_parser = parse_pick)]
    legs: Option<Pick>,

    /// Replace the picks with a seeded random selection.
    #[arg(long)]
    random: Option<u64>,

    /// Number of randomizes to roll with `--random`; only the last one is rendered.
    #[arg(long, default_value_t = 1, requires = "random")]
    rolls: u32,

    /// Number of ticks to simulate before rendering.
    #[arg(long, default_value_t = 1)]
    ticks: u32,

    /// Turn the dance on.
    #[arg(long)]
    dance: bool,

    /// Skip the outline/shadow post-filter.
    #[arg(long)]
    no_outline: bool,

    /// Draw attach-point markers.
    #[arg(long)]
    show_attach_points: bool,

    /// Draw part bounding boxes.
    #[arg(long)]
    show_part_bounds: bool,
}

#[derive(Clone, Copy, Debug)]
struct Pick(Option<brenfusion::Character>);

fn parse_character(s: &str) -> Result<brenfusion::Character, String> {
    s.parse().map_err(|e: brenfusion::BrenError| e.to_string())
}

fn parse_pick(s: &str) -> Result<Pick, String> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(Pick(None));
    }
    parse_character(s).map(|c| Pick(Some(c)))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Characters => cmd_characters(),
    }
}

fn read_settings(path: Option<&Path>) -> anyhow::Result<brenfusion::StageSettings> {
    let Some(path) = path else {
        return Ok(brenfusion::StageSettings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read settings '{}'", path.display()))?;
    Ok(brenfusion::StageSettings::from_json_str(&text)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut settings = read_settings(args.settings.as_deref())?;
    if args.no_outline {
        settings.outline = false;
    }
    settings.debug.attach_points |= args.show_attach_points;
    settings.debug.part_bounds |= args.show_part_bounds;

    let mut scene = match &args.scene {
        Some(path) => brenfusion::SceneState::from_path(path)?,
        None => brenfusion::SceneState::settled(brenfusion::Selection::default()),
    };

    if let Some(seed) = args.random {
        let mut rng = brenfusion::Rng64::new(seed);
        for _ in 0..args.rolls {
            scene.randomize(&mut rng);
        }
    }

    let mut selection = scene.selection;
    if let Some(c) = args.head {
        selection.head = c;
    }
    if let Some(c) = args.torso {
        selection.torso = c;
    }
    if let Some(Pick(c)) = args.hair {
        selection.hair = c;
    }
    if let Some(Pick(c)) = args.arms {
        selection.arms = c;
    }
    if let Some(Pick(c)) = args.legs {
        selection.legs = c;
    }
    if args.random.is_none() || selection != scene.selection {
        scene.set_selection(selection);
    }
    scene.dancing |= args.dance;

    let store = brenfusion::DirectoryStore::new(&args.assets)
        .load()
        .with_context(|| format!("load assets from '{}'", args.assets.display()))?;
    if store.is_empty() {
        anyhow::bail!("no part artwork found under '{}'", args.assets.display());
    }

    let mut renderer = brenfusion::CpuRenderer::new(
        settings.canvas,
        brenfusion::RenderSettings::from(&settings),
    )?;
    let mut stage = brenfusion::Stage::new(settings, store, scene)?;
    let mut frame = stage.render_after(args.ticks, &mut renderer)?;
    brenfusion::unpremultiply_frame(&mut frame);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_characters() -> anyhow::Result<()> {
    for c in brenfusion::Character::ALL {
        let note = if c.is_selectable() { "" } else { " (calibration)" };
        println!("{:<10} {}{note}", c.display_name(), c.asset_name());
    }
    Ok(())
}
