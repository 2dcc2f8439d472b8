use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sketchpad::config::Config;
use sketchpad::export::{ExportSink, FileExportSink};
use sketchpad::input::{StrokeEngine, parse_script};
use sketchpad::palette::{RandomPalette, seed_palette};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Multi-touch freehand sketch surface with SVG export")]
struct Cli {
    /// Replay a JSON-lines event script ('-' reads stdin) and export the result
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<String>,

    /// Print the exported document instead of saving it
    #[arg(long, action = ArgAction::SetTrue, requires = "script")]
    stdout: bool,

    /// Directory to save exported documents to (overrides the config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Use this config file instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the startup palette (one hex color per line) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    palette: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.script.is_none() && !cli.palette {
        print_usage();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start runtime")?;
    let palette = runtime.block_on(seed_palette(
        &RandomPalette::default(),
        config.drawing.palette_size,
    ))?;

    if cli.palette {
        for color in &palette {
            println!("{}", color.to_hex());
        }
        return Ok(());
    }

    let Some(script) = cli.script.as_deref() else {
        return Ok(());
    };
    let events = if script == "-" {
        parse_script(io::stdin().lock())?
    } else {
        let file = File::open(script).with_context(|| format!("Failed to open {script}"))?;
        parse_script(BufReader::new(file))
            .with_context(|| format!("Failed to read {script}"))?
    };

    let initial_color = palette.first().copied().unwrap_or_default();
    let mut engine = StrokeEngine::from_config(&config, initial_color);
    engine.replay(&events);
    log::info!(
        "Replayed {} events into {} strokes",
        events.len(),
        engine.surface().len()
    );

    if cli.stdout {
        print!("{}", engine.export_document());
        return Ok(());
    }

    let directory = cli.output_dir.unwrap_or_else(|| config.save_directory());
    let sink = FileExportSink::new(directory);
    let path = export_with(&engine, &sink)?;
    println!("Saved {}", path.display());

    Ok(())
}

fn export_with(engine: &StrokeEngine, sink: &dyn ExportSink) -> Result<PathBuf> {
    engine.export_to(sink).context("Export failed")
}

fn print_usage() {
    println!("sketchpad: Multi-touch freehand sketch surface with SVG export");
    println!();
    println!("Usage:");
    println!("  sketchpad --script events.jsonl            Replay events and save an SVG");
    println!("  sketchpad --script events.jsonl --stdout   Replay events and print the SVG");
    println!("  sketchpad --palette                        Print the startup palette");
    println!("  sketchpad --help                           Show help");
    println!();
    println!("Event script (one JSON object per line):");
    println!("  {{\"op\":\"begin\",\"id\":1,\"x\":0,\"y\":0}}");
    println!("  {{\"op\":\"update\",\"id\":1,\"x\":10,\"y\":0}}");
    println!("  {{\"op\":\"end\",\"id\":1}}");
    println!("  {{\"op\":\"color\",\"color\":\"ff8000\"}}  {{\"op\":\"undo\"}}  {{\"op\":\"clear\"}}");
}
