use std::{
    collections::BTreeSet,
    io::Read as _,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use kurbo::Point;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "codeshot", version)]
struct Cli {
    /// Raise log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render source files onto background photographs.
    Render(RenderArgs),
    /// Print the supported language ids, sorted.
    Languages,
    /// Write a sidecar descriptor mapping a canvas rectangle onto a background quad.
    Calibrate(CalibrateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Source file to render (`-` reads stdin). Repeat to render a batch.
    #[arg(long, required = true)]
    code: Vec<PathBuf>,

    /// Language id, name or alias. Guessed from the source when omitted or unknown.
    #[arg(long)]
    lang: Option<String>,

    /// Background photograph with a `.json` sidecar next to it.
    #[arg(long, conflicts_with = "backgrounds", required_unless_present = "backgrounds")]
    background: Option<PathBuf>,

    /// Directory of calibrated backgrounds; one is picked at random per file.
    #[arg(long)]
    backgrounds: Option<PathBuf>,

    /// Use the dark theme.
    #[arg(long)]
    dark: bool,

    /// 1-based lines to highlight, e.g. `1,3,5-7`.
    #[arg(long, value_parser = parse_highlight)]
    highlight: Option<HighlightRanges>,

    /// Lines every canvas shows.
    #[arg(long, default_value_t = codeshot::DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// JSON theme replacing the selected variant.
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Output image path (single `--code` only).
    #[arg(long, conflicts_with = "out_dir", required_unless_present = "out_dir")]
    out: Option<PathBuf>,

    /// Output directory; files get random 12-hex-digit names.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Worker threads for batches.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct CalibrateArgs {
    /// Canvas width in pixels.
    #[arg(long)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long)]
    height: u32,

    /// Background corners `x0,y0,x1,y1,x2,y2,x3,y3` for the canvas's
    /// top-left, top-right, bottom-right and bottom-left.
    #[arg(long, value_parser = parse_quad, allow_hyphen_values = true)]
    quad: [Point; 4],

    /// Sidecar path to write.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Languages => cmd_languages(),
        Command::Calibrate(args) => cmd_calibrate(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if args.out.is_some() && args.code.len() > 1 {
        anyhow::bail!("--out takes a single --code; use --out-dir for batches");
    }

    let mut opts = codeshot::PipelineOpts {
        max_lines: args.max_lines,
        threads: args.threads,
        ..codeshot::PipelineOpts::default()
    };
    let variant = if args.dark {
        codeshot::ThemeVariant::Dark
    } else {
        codeshot::ThemeVariant::Light
    };
    if let Some(path) = &args.theme_file {
        let theme = codeshot::Theme::from_json_path(path)?;
        match variant {
            codeshot::ThemeVariant::Light => opts.light = theme,
            codeshot::ThemeVariant::Dark => opts.dark = theme,
        }
    }

    let pipeline = codeshot::RenderPipeline::new(opts)?;
    let pool = match &args.backgrounds {
        Some(dir) => {
            let pool = codeshot::BackgroundPool::scan(dir, pipeline.cache())?;
            if pool.is_empty() {
                anyhow::bail!("no calibrated backgrounds in '{}'", dir.display());
            }
            Some(pool)
        }
        None => None,
    };
    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
    }

    let highlighted = args
        .highlight
        .as_ref()
        .map(|h| h.lines(args.max_lines))
        .unwrap_or_default();
    let mut rng = rand::rng();
    let mut requests = Vec::with_capacity(args.code.len());
    for code in &args.code {
        let source = read_source(code)?;
        let background = match (&pool, &args.background) {
            (Some(pool), _) => pool
                .choose(&mut rng)
                .map(Path::to_path_buf)
                .context("background pool is empty")?,
            (None, Some(bg)) => bg.clone(),
            (None, None) => anyhow::bail!("one of --background or --backgrounds is required"),
        };
        let output = match (&args.out, &args.out_dir) {
            (Some(out), _) => out.clone(),
            (None, Some(dir)) => dir.join(format!("{}.png", random_name(&mut rng))),
            (None, None) => anyhow::bail!("one of --out or --out-dir is required"),
        };
        requests.push(codeshot::RenderRequest {
            source,
            language: args.lang.clone(),
            background,
            variant,
            highlighted_lines: highlighted.clone(),
            matrix: None,
            output,
        });
    }

    let results = pipeline.render_batch(&requests, None)?;
    let mut failed = 0usize;
    for (req, result) in requests.iter().zip(results) {
        match result {
            Ok(outcome) => {
                if outcome.truncated {
                    eprintln!("note: source truncated to {} lines", args.max_lines);
                }
                println!("{}", outcome.output.display());
            }
            Err(e) => {
                failed += 1;
                tracing::error!(output = %req.output.display(), "render failed: {e}");
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} renders failed", requests.len());
    }
    Ok(())
}

fn cmd_languages() -> anyhow::Result<()> {
    let registry = codeshot::LexerRegistry::builtin();
    for lang in registry.list_supported_languages() {
        println!("{lang}");
    }
    Ok(())
}

fn cmd_calibrate(args: CalibrateArgs) -> anyhow::Result<()> {
    let (w, h) = (f64::from(args.width), f64::from(args.height));
    let canvas = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ];
    let matrix = codeshot::ProjectiveMatrix::from_quad(canvas, args.quad)?;
    let quad = args.quad.map(|p| [p.x, p.y]);
    codeshot::SidecarDescriptor::new(&matrix, Some(quad)).write(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read source from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("read source '{}'", path.display()))
}

fn random_name<R: rand::Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:012x}", rng.random::<u64>() & 0xffff_ffff_ffff)
}

/// Highlighted line ranges as given on the command line, materialized once the line
/// count is known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct HighlightRanges(Vec<RangeInclusive<usize>>);

impl HighlightRanges {
    /// Lines inside the ranges, capped at `max_lines`.
    fn lines(&self, max_lines: usize) -> BTreeSet<usize> {
        self.0
            .iter()
            .flat_map(|r| *r.start()..=(*r.end()).min(max_lines))
            .collect()
    }
}

fn parse_highlight(s: &str) -> Result<HighlightRanges, String> {
    let mut ranges = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (lo, hi) = match part.split_once('-') {
            Some((a, b)) => (parse_line(a)?, parse_line(b)?),
            None => {
                let n = parse_line(part)?;
                (n, n)
            }
        };
        if lo > hi {
            return Err(format!("range '{part}' is reversed"));
        }
        ranges.push(lo..=hi);
    }
    Ok(HighlightRanges(ranges))
}

fn parse_line(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("line numbers start at 1".to_owned()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("bad line number '{s}': {e}")),
    }
}

fn parse_quad(s: &str) -> Result<[Point; 4], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad quad value: {e}"))?;
    if values.len() != 8 {
        return Err(format!("quad needs 8 numbers, got {}", values.len()));
    }
    Ok([
        Point::new(values[0], values[1]),
        Point::new(values[2], values[3]),
        Point::new(values[4], values[5]),
        Point::new(values[6], values[7]),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/bin/codeshot.rs"]
mod tests;
