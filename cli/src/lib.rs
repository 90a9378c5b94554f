//! fontopt CLI (made by FontLab https://www.fontlab.com/)

use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use log::debug;

use fontopt_core::config::load_config;
use fontopt_core::options::FontOptions;
use fontopt_core::output::{plain_rows, write_json_pretty, write_ndjson};
use fontopt_core::style::{parse_style_flags, FontStyleFlags};
use fontopt_core::tags::AxisTag;
use fontopt_core::typeface::MetricsKind;
use fontopt_core::variation::parse_axis_settings;

/// CLI entrypoint for fontopt.
#[derive(Debug, Parser)]
#[command(
    name = "fontopt",
    about = "Build, inspect and compare font options (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build an option set from flags (optionally on top of a JSON base)
    Build(BuildArgs),
    /// Compare two JSON option sets and print less, equal or greater
    Compare(CompareArgs),
    /// Show axis tags as padded strings and hex values
    Tag(TagArgs),
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// JSON options to start from ("-" reads STDIN)
    #[arg(long = "base", value_hint = ValueHint::FilePath)]
    base: Option<PathBuf>,

    /// Family name
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Style name within the family
    #[arg(short = 's', long = "style")]
    style: Option<String>,

    /// Style flags (plain, bold, italic, underlined); sets style and underline
    #[arg(long = "flags", value_delimiter = ',', value_hint = ValueHint::Other)]
    flags: Vec<String>,

    /// Height in pixels
    #[arg(long = "height", conflicts_with = "point_height")]
    height: Option<f32>,

    /// Height in points
    #[arg(short = 'p', long = "point-height")]
    point_height: Option<f32>,

    /// Extra tracking between glyphs
    #[arg(short = 'k', long = "kerning", allow_negative_numbers = true)]
    kerning: Option<f32>,

    /// Horizontal scale factor
    #[arg(long = "horizontal-scale")]
    horizontal_scale: Option<f32>,

    /// Underline text
    #[arg(short = 'u', long = "underline", action = ArgAction::SetTrue)]
    underline: bool,

    /// Preferred fallback families, in order
    #[arg(short = 'F', long = "fallbacks", value_delimiter = ',')]
    fallbacks: Vec<String>,

    /// Disable font fallback
    #[arg(long = "no-fallback", action = ArgAction::SetTrue)]
    no_fallback: bool,

    /// Which metrics the typeface should report
    #[arg(short = 'm', long = "metrics", value_enum)]
    metrics: Option<MetricsArg>,

    /// Ascent override as a multiple of the point size
    #[arg(long = "ascent-override")]
    ascent_override: Option<f32>,

    /// Descent override as a multiple of the point size
    #[arg(long = "descent-override")]
    descent_override: Option<f32>,

    /// Variable-font axis settings (e.g. wght=700,wdth=80)
    #[arg(short = 'a', long = "variation", value_delimiter = ',')]
    variations: Vec<String>,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// First JSON options file ("-" reads STDIN)
    #[arg(value_hint = ValueHint::FilePath)]
    left: PathBuf,

    /// Second JSON options file
    #[arg(value_hint = ValueHint::FilePath)]
    right: PathBuf,
}

#[derive(Debug, Args)]
struct TagArgs {
    /// Tags of 1-4 printable ASCII characters
    #[arg(required = true)]
    tags: Vec<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum MetricsArg {
    Legacy,
    Portable,
}

impl From<MetricsArg> for MetricsKind {
    fn from(arg: MetricsArg) -> Self {
        match arg {
            MetricsArg::Legacy => MetricsKind::Legacy,
            MetricsArg::Portable => MetricsKind::Portable,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => run_build(args),
        Command::Compare(args) => run_compare(args),
        Command::Tag(args) => run_tag(args),
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    let stdin = io::stdin();
    let base = match &args.base {
        Some(path) => read_options(path, stdin.lock())?,
        None => FontOptions::new(),
    };
    let options = build_options(base, &args)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if args.ndjson {
        write_ndjson(std::slice::from_ref(&options), &mut handle)?;
    } else if args.json {
        write_json_pretty(std::slice::from_ref(&options), &mut handle)?;
    } else {
        write_rows(&options, &mut handle, use_color)?;
    }

    Ok(())
}

fn build_options(base: FontOptions, args: &BuildArgs) -> Result<FontOptions> {
    let mut opts = base;

    if !args.flags.is_empty() {
        let flags = parse_style_flags(&args.flags)?;
        opts = opts
            .with_style(flags.style_name())
            .with_underline(flags.contains(FontStyleFlags::UNDERLINED));
    }

    if let Some(name) = &args.name {
        opts = opts.with_name(name.as_str());
    }
    if let Some(style) = &args.style {
        opts = opts.with_style(style.as_str());
    }
    if let Some(height) = args.height {
        opts = opts.with_height(height);
    }
    if let Some(points) = args.point_height {
        opts = opts.with_point_height(points);
    }
    if let Some(kerning) = args.kerning {
        opts = opts.with_kerning_factor(kerning);
    }
    if let Some(scale) = args.horizontal_scale {
        opts = opts.with_horizontal_scale(scale);
    }
    if args.underline {
        opts = opts.with_underline(true);
    }
    if !args.fallbacks.is_empty() {
        opts = opts.with_fallbacks(args.fallbacks.clone());
    }
    if args.no_fallback {
        opts = opts.with_fallback_enabled(false);
    }
    if let Some(metrics) = args.metrics {
        opts = opts.with_metrics_kind(metrics.into());
    }
    if args.ascent_override.is_some() {
        opts = opts.with_ascent_override(args.ascent_override);
    }
    if args.descent_override.is_some() {
        opts = opts.with_descent_override(args.descent_override);
    }
    for setting in parse_axis_settings(&args.variations)? {
        opts = opts.with_variation(setting.tag, setting.value);
    }

    Ok(opts)
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let stdin = io::stdin();
    let (left, right) = read_pair(&args.left, &args.right, stdin.lock())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", describe_ordering(left.cmp(&right)))?;
    Ok(())
}

fn describe_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

fn run_tag(args: TagArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_tags(&args.tags, &mut handle)
}

fn write_tags(raw: &[String], mut w: impl Write) -> Result<()> {
    for text in raw {
        let tag = AxisTag::parse(text)?;
        writeln!(w, "{:?}\t0x{:08X}", tag.to_string(), tag.to_u32())?;
    }
    Ok(())
}

fn read_options(path: &Path, stdin: impl Read) -> Result<FontOptions> {
    if path == Path::new("-") {
        debug!("reading font options from stdin");
        return load_config(stdin).context("reading options from stdin");
    }

    debug!("reading font options from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_config(file).with_context(|| format!("loading {}", path.display()))
}

/// Read both sides of a comparison; at most one of them may be stdin.
fn read_pair(
    left: &Path,
    right: &Path,
    mut stdin: impl Read,
) -> Result<(FontOptions, FontOptions)> {
    let dash = Path::new("-");
    if left == dash && right == dash {
        bail!("only one of the compared inputs can be read from stdin (\"-\")");
    }
    let left = read_options(left, &mut stdin)?;
    let right = read_options(right, &mut stdin)?;
    Ok((left, right))
}

fn write_rows(options: &FontOptions, mut w: impl Write, color: bool) -> Result<()> {
    let rows = plain_rows(options);
    let key_width = rows
        .iter()
        .map(|(key, _)| key.len() + 1)
        .max()
        .unwrap_or(0);

    for (key, value) in rows {
        let padded_key = format!("{:<key_width$}", format!("{key}:"));
        let rendered_key = apply_color(&padded_key, color, AnsiColor::Cyan);
        let rendered_value = if value == "-" {
            apply_color(&value, color, AnsiColor::Yellow)
        } else {
            apply_color(&value, color, AnsiColor::Green)
        };

        writeln!(w, "{rendered_key} {rendered_value}")?;
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
