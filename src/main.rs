use anyhow::{bail, Context as _, Result};
use clap::Parser;
use comic_dialogue::actors::{ActorIdentifier, TemplateActors, UnknownActor};
use comic_dialogue::config::{load_config, RuntimeConfig};
use comic_dialogue::diagnostics::render::render_trace;
use comic_dialogue::image::io::{
    load_grayscale_image, save_rgb_image, write_json_file, GrayImageU8,
};
use comic_dialogue::{PageDialogue, PageReader, PageReport, TemplateSet};
use log::{error, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "comic_dialogue",
    version,
    about = "Read the dialogue off scanned comic-strip pages"
)]
struct Cli {
    /// JSON runtime configuration; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of glyph templates (`A.png`, `dot.png`, ...).
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Directory of actor templates used to name speakers.
    #[arg(long)]
    actors: Option<PathBuf>,

    /// Write the dialogue of every page as one JSON array.
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Write per-page trace JSON and a debug rendering here.
    #[arg(long)]
    debug_dir: Option<PathBuf>,

    /// Read pages as they are instead of snapping them to black and white.
    #[arg(long)]
    no_binarize: bool,

    /// Page images to read.
    inputs: Vec<PathBuf>,
}

#[derive(Serialize)]
struct PageEntry<'a> {
    input: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    dialogue: Option<PageDialogue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli)?;
    if config.inputs.is_empty() {
        bail!("no input pages given");
    }

    let templates = TemplateSet::load_glyphs(&config.templates_dir).with_context(|| {
        format!(
            "loading glyph templates from {}",
            config.templates_dir.display()
        )
    })?;
    info!("{} glyph templates", templates.len());
    let actors: Box<dyn ActorIdentifier> = match &config.actors_dir {
        Some(dir) => {
            let set = TemplateSet::load_dir(dir)
                .with_context(|| format!("loading actor templates from {}", dir.display()))?;
            info!("{} actor templates", set.len());
            Box::new(TemplateActors::new(set, config.actors))
        }
        None => Box::new(UnknownActor),
    };

    let reader = PageReader::new(config.params.clone());
    let mut entries = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let entry = match read_page(&reader, &config, input, &templates, actors.as_ref()) {
            Ok(report) => {
                print_dialogue(input, &report);
                PageEntry {
                    input,
                    dialogue: Some(report.page),
                    error: None,
                }
            }
            Err(err) => {
                // A bad page must not stop the batch.
                error!("{}: {err:#}", input.display());
                PageEntry {
                    input,
                    dialogue: None,
                    error: Some(format!("{err:#}")),
                }
            }
        };
        entries.push(entry);
    }

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &entries)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(dir) = cli.templates {
        config.templates_dir = dir;
    }
    if cli.actors.is_some() {
        config.actors_dir = cli.actors;
    }
    if cli.json_out.is_some() {
        config.output.json_out = cli.json_out;
    }
    if cli.debug_dir.is_some() {
        config.output.debug_dir = cli.debug_dir;
    }
    if cli.no_binarize {
        config.binarize = false;
    }
    if !cli.inputs.is_empty() {
        config.inputs = cli.inputs;
    }
    Ok(config)
}

fn read_page(
    reader: &PageReader,
    config: &RuntimeConfig,
    input: &Path,
    templates: &TemplateSet,
    actors: &dyn ActorIdentifier,
) -> Result<PageReport> {
    let mut gray = load_grayscale_image(input)?;
    if config.binarize {
        gray.binarize();
    }
    let report = reader.process(gray.as_view(), templates, actors)?;

    if let Some(dir) = &config.output.debug_dir {
        // The dialogue is already read; losing debug output must not drop it.
        if let Err(err) = save_debug_artifacts(dir, input, &gray, &report) {
            warn!("{}: debug output failed: {err}", input.display());
        }
    }
    Ok(report)
}

fn save_debug_artifacts(
    dir: &Path,
    input: &Path,
    gray: &GrayImageU8,
    report: &PageReport,
) -> comic_dialogue::Result<()> {
    let stem = debug_stem(input);
    write_json_file(&dir.join(format!("{stem}.trace.json")), &report.trace)?;
    let canvas = render_trace(gray.as_view(), &report.trace);
    save_rgb_image(&canvas, &dir.join(format!("{stem}.debug.png")))
}

fn debug_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string())
}

fn print_dialogue(input: &Path, report: &PageReport) {
    println!("== {}", input.display());
    for (i, panel) in report.page.panels.iter().enumerate() {
        if panel.bubbles.is_empty() {
            continue;
        }
        println!("-- panel {}", i + 1);
        for (speaker, text) in panel.dialogue() {
            println!("{}: {text}", speaker.unwrap_or("unknown"));
        }
    }
}
