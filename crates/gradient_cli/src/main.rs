mod config;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use hex_gradient::{Gradient, Rgb, ScoreScale, SectionSplit};
use log::{info, warn};
use serde::Serialize;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate hex color gradients and percentile score scales")]
struct Cli {
    /// TOML file with named gradients and defaults
    #[arg(long, global = true, env = "HEX_GRADIENT_CONFIG")]
    config: Option<PathBuf>,
    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Disable logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the interpolated color sequence
    Generate(GenerateArgs),
    /// Print the color assigned to a score between 0 and 100
    Score(ScoreArgs),
    /// Draw the sequence in the terminal using 24-bit colors
    Preview(PreviewArgs),
    /// Write the sequence to an image file
    Swatch(SwatchArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct AnchorArgs {
    /// Anchor colors such as "#c00" or "00cc00"; overrides --preset
    anchors: Vec<String>,
    /// Named gradient from the config file or a built-in preset
    #[arg(long)]
    preset: Option<String>,
    /// Distribute leftover steps the way the first table renderer did
    #[arg(long, default_value_t = false)]
    legacy_split: bool,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Number of colors to produce [default: config length or 101]
    #[arg(short, long)]
    length: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    format: OutputFormat,
    #[command(flatten)]
    anchors: AnchorArgs,
}

#[derive(Parser, Debug)]
struct ScoreArgs {
    /// Percentile score
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    score: u8,
    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    format: OutputFormat,
    #[command(flatten)]
    anchors: AnchorArgs,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Number of colors to draw [default: config length or 101]
    #[arg(short, long)]
    length: Option<usize>,
    /// Print one labelled line per color instead of a single bar
    #[arg(long, default_value_t = false)]
    list: bool,
    #[command(flatten)]
    anchors: AnchorArgs,
}

#[derive(Parser, Debug)]
struct SwatchArgs {
    /// Output image path; the format follows the extension
    #[arg(short, long)]
    output: PathBuf,
    /// Number of colors to draw [default: config length or 101]
    #[arg(short, long)]
    length: Option<usize>,
    /// Pixel width of each color band
    #[arg(long, default_value_t = 4)]
    cell_width: u32,
    /// Pixel height of the image
    #[arg(long, default_value_t = 32)]
    height: u32,
    #[command(flatten)]
    anchors: AnchorArgs,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Serialize, Debug)]
struct ScoreReport {
    score: u8,
    color: Rgb,
    extreme: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Generate(args) => generate(&config, args, &mut out),
        Commands::Score(args) => score(&config, args, &mut out),
        Commands::Preview(args) => preview(&config, args, &mut out),
        Commands::Swatch(args) => swatch(&config, args),
    }
}

fn generate(config: &Config, args: GenerateArgs, out: &mut impl Write) -> Result<()> {
    let gradient = resolve_gradient(config, &args.anchors)?;
    let length = args.length.unwrap_or(config.length);
    let colors = gradient
        .hex_sequence(length)
        .with_context(|| format!("failed to generate {} colors", length))?;

    match args.format {
        OutputFormat::Plain => {
            for color in &colors {
                writeln!(out, "{}", color)?;
            }
        },
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&colors)?)?,
    }
    Ok(())
}

fn score(config: &Config, args: ScoreArgs, out: &mut impl Write) -> Result<()> {
    let gradient = resolve_gradient(config, &args.anchors)?;
    let scale = ScoreScale::new(&gradient).context("failed to build score scale")?;
    let report = ScoreReport {
        score: args.score,
        color: scale.color_for(args.score),
        extreme: ScoreScale::is_extreme(args.score),
    };

    match args.format {
        OutputFormat::Plain => {
            let marker = if report.extreme { " (extreme)" } else { "" };
            writeln!(out, "{}{}", report.color, marker)?;
        },
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
    }
    Ok(())
}

fn preview(config: &Config, args: PreviewArgs, out: &mut impl Write) -> Result<()> {
    let gradient = resolve_gradient(config, &args.anchors)?;
    let length = args.length.unwrap_or(config.length);
    let colors = gradient
        .colors(length)
        .with_context(|| format!("failed to generate {} colors", length))?;

    if args.list {
        let last = colors.len() - 1;
        for (index, color) in colors.iter().enumerate() {
            let bold = if index == 0 || index == last { "\x1b[1m" } else { "" };
            writeln!(out, "{}  {bold}{:>3} {}\x1b[0m", ansi_block(*color), index, color)?;
        }
    } else {
        let bar: String = colors.iter().map(|color| ansi_block(*color)).collect();
        writeln!(out, "{}", bar)?;
    }
    Ok(())
}

fn swatch(config: &Config, args: SwatchArgs) -> Result<()> {
    let gradient = resolve_gradient(config, &args.anchors)?;
    let length = args.length.unwrap_or(config.length);
    let colors = gradient
        .colors(length)
        .with_context(|| format!("failed to generate {} colors", length))?;

    hex_gradient::save_swatch(&colors, &args.output, args.cell_width, args.height)
        .with_context(|| format!("failed to write swatch {:?}", args.output))?;
    info!("Swatch of {} colors written to {:?}", colors.len(), args.output);
    Ok(())
}

fn ansi_block(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m \x1b[0m", color.r, color.g, color.b)
}

fn resolve_gradient(config: &Config, args: &AnchorArgs) -> Result<Gradient> {
    let gradient = if args.anchors.is_empty() {
        let name = args.preset.as_deref().unwrap_or(&config.default);
        config.gradient(name).with_context(|| format!("unknown gradient {:?}", name))?
    } else {
        if let Some(preset) = &args.preset {
            warn!("Ignoring --preset {:?} because anchors were given", preset);
        }
        Gradient::parse(&args.anchors).context("invalid anchors")?
    };

    let split = if args.legacy_split { SectionSplit::Legacy } else { config.split };
    Ok(gradient.with_split(split))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let config = Config::default();
        let mut out = Vec::new();
        match cli.command {
            Commands::Generate(args) => generate(&config, args, &mut out)?,
            Commands::Score(args) => score(&config, args, &mut out)?,
            Commands::Preview(args) => preview(&config, args, &mut out)?,
            Commands::Swatch(args) => swatch(&config, args)?,
        }
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn generate_plain() {
        let out = run(&["hex-gradient", "generate", "-l", "2", "#000", "#fff"]).unwrap();
        assert_eq!(out, "#000000\n#ffffff\n");
    }

    #[test]
    fn generate_json_from_preset() {
        let args = ["hex-gradient", "generate", "--preset", "traffic", "-l", "11", "--format", "json"];
        let out = run(&args).unwrap();
        let colors: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(colors.len(), 11);
        assert_eq!(colors[5], "#ffffff");
        assert_eq!(colors[10], "#008800");
    }

    #[test]
    fn generate_defaults_to_ranking_scale() {
        let out = run(&["hex-gradient", "generate"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 101);
        assert_eq!(lines[0], "#cc0000");
        assert_eq!(lines[100], "#00cc00");
    }

    #[test]
    fn legacy_split_flag_reports_bad_layouts() {
        let args = ["hex-gradient", "generate", "--legacy-split", "-l", "15"];
        let args: Vec<&str> =
            args.into_iter().chain(["#000", "#111", "#222", "#333", "#444", "#555"]).collect();
        let err = run(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("legacy section split"));
    }

    #[test]
    fn score_lookup() {
        assert_eq!(run(&["hex-gradient", "score", "50"]).unwrap(), "#222222\n");
        assert_eq!(run(&["hex-gradient", "score", "100"]).unwrap(), "#00cc00 (extreme)\n");

        let json = run(&["hex-gradient", "score", "0", "--format", "json"]).unwrap();
        assert_eq!(json.trim(), r##"{"score":0,"color":"#cc0000","extreme":true}"##);
    }

    #[test]
    fn score_out_of_range_is_rejected() {
        assert!(run(&["hex-gradient", "score", "101"]).is_err());
    }

    #[test]
    fn preview_bar_has_one_block_per_color() {
        let out = run(&["hex-gradient", "preview", "-l", "3", "#000", "#fff"]).unwrap();
        assert_eq!(out.matches("\x1b[48;2;").count(), 3);
        assert!(out.contains("\x1b[48;2;127;127;127m"));
    }

    #[test]
    fn preview_list_labels_entries() {
        let out = run(&["hex-gradient", "preview", "--list", "-l", "2", "#000", "#fff"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("  1 #ffffff\x1b[0m"));
    }

    #[test]
    fn swatch_writes_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.png");
        let path_arg = path.to_string_lossy().into_owned();
        run(&["hex-gradient", "swatch", "-o", &path_arg, "--cell-width", "1", "--height", "2"])
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unknown_preset_and_bad_anchor() {
        let err = run(&["hex-gradient", "generate", "--preset", "sunset"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown gradient \"sunset\"");

        let err = run(&["hex-gradient", "generate", "#000", "#ggg"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid anchors");
    }

    #[test]
    fn resolve_prefers_explicit_anchors() {
        let args = AnchorArgs {
            anchors: vec!["#000".into(), "#fff".into()],
            preset: Some("traffic".into()),
            legacy_split: true,
        };
        let gradient = resolve_gradient(&Config::default(), &args).unwrap();
        assert_eq!(gradient.anchors(), [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
        assert_eq!(gradient.split(), SectionSplit::Legacy);
    }
}
