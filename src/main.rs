#![warn(clippy::pedantic)]

use std::{
    fs::{self, File},
    path::PathBuf,
    process,
};

use clap::{Parser, ValueEnum};
use stipple::spec::SceneSpec;
use stipple_json::Json;
use stipple_plaintext::Plaintext;
use stipple_svg::Svg;

#[derive(Debug, Parser)]
#[command(name = "stipple")]
#[command(version)]
#[command(author)]
#[command(about = "Tool for constructing and rendering parametric dot figures.", long_about = None)]
struct Args {
    /// The input figure-spec file (JSON).
    input: PathBuf,
    /// The output target.
    output: PathBuf,
    /// Renderer to use.
    #[arg(long, short, default_value_t = Renderer::Svg, value_enum)]
    renderer: Renderer,
    /// Canvas width
    #[arg(long, default_value_t = 500)]
    width: usize,
    /// Canvas height
    #[arg(long, default_value_t = 500)]
    height: usize,
    /// Color theme, overriding the spec file's choice.
    #[arg(long, short)]
    theme: Option<String>,
    #[arg(long, hide = true)]
    markdown_help: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Renderer {
    /// The SVG format renderer.
    Svg,
    /// The JSON (machine-readable) format renderer.
    Json,
    /// The plaintext (human-readable) format renderer.
    Plaintext,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = args.markdown_help {
        fs::write(path, clap_markdown::help_markdown::<Args>()).unwrap();
    }

    let raw = match fs::read_to_string(&args.input) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("failed to read {}: {err}", args.input.display());
            process::exit(1);
        }
    };

    let spec: SceneSpec = match serde_json::from_str(&raw) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("invalid figure spec {}: {err}", args.input.display());
            process::exit(1);
        }
    };

    #[allow(clippy::cast_precision_loss)]
    let canvas = match spec.to_canvas(args.width as f64, args.height as f64, args.theme.as_deref())
    {
        Ok(canvas) => canvas,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let scene = match canvas.project() {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let result = match args.renderer {
        Renderer::Svg => {
            File::create(&args.output).and_then(|file| Svg::draw(&scene, file))
        }
        Renderer::Json => fs::write(&args.output, Json::draw(&scene)),
        Renderer::Plaintext => {
            File::create(&args.output).and_then(|file| Plaintext::draw(&scene, file))
        }
    };

    if let Err(err) = result {
        eprintln!("failed to write {}: {err}", args.output.display());
        process::exit(1);
    }

    println!(
        "Rendered {} figure(s) to {}.",
        canvas.len(),
        args.output.display()
    );
}
