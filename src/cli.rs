use crate::config::{RenderConfig, RenderOptions};
use crate::parser::parse_garden;
use crate::render::{render_garden_svg, write_output_svg};
use crate::summary::summarize;
use crate::theme::Theme;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gsvg", version, about = "Garden plan snapshot renderer (SVG/PNG)")]
pub struct Args {
    /// Input snapshot JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Raster width for PNG output
    #[arg(short = 'w', long = "width", default_value_t = 800.0)]
    pub width: f32,

    /// Raster height for PNG output
    #[arg(short = 'H', long = "height", default_value_t = 600.0)]
    pub height: f32,

    /// Print a JSON plan summary instead of rendering
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let input = read_input(args.input.as_deref())?;
    let garden = parse_garden(&input)?;

    if args.summary {
        println!("{}", serde_json::to_string_pretty(&summarize(&garden))?);
        return Ok(());
    }

    let svg = render_garden_svg(&garden, &Theme::garden_default(), &RenderOptions::default());

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let render_cfg = RenderConfig {
                width: args.width,
                height: args.height,
            };
            write_png(&svg, &output, &render_cfg)?;
        }
    }

    Ok(())
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    crate::render::write_output_png(svg, output, render_cfg)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG output requires the 'png' feature"
    ))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
