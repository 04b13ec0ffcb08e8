use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use transit_catalogue::prelude::*;

mod requests;
mod responses;
mod svg;
mod text;

use requests::Document;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON request document with base, render and stat requests
    Json,
    /// Counted blocks of `Stop`/`Bus` lines followed by queries
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "catalogue-cli",
    author,
    version,
    about = "Answer route, stop and map queries against a transit catalogue",
    long_about = "Builds an in-memory catalogue of stops, routes and road distances \
                  from a request document, then answers every stat request in order.\n\n\
                  JSON input produces a JSON array of responses. Text input produces \
                  one line per query."
)]
struct Args {
    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Also write the rendered map as an SVG file (JSON input only)
    #[arg(long)]
    render: Option<PathBuf>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .without_time()
        .init();

    let input = read_input(args.input.as_deref())?;

    let output = match args.format {
        Format::Json => run_json(&input, args.render.as_deref())?,
        Format::Text => {
            if args.render.is_some() {
                tracing::warn!("--render is ignored for text input");
            }
            text::run(&input).context("Failed to answer text queries")?
        }
    };

    write_output(args.output.as_deref(), &output)
}

fn run_json(input: &str, render_path: Option<&Path>) -> Result<String> {
    let document: Document = serde_json::from_str(input).context("Failed to parse request document")?;
    tracing::debug!(
        base_requests = document.base_requests.len(),
        stat_requests = document.stat_requests.len(),
        "decoded request document"
    );

    let catalogue = TransportCatalogue::from_batch(document.batch());
    tracing::debug!(
        stops = catalogue.stop_count(),
        routes = catalogue.route_count(),
        "built catalogue"
    );
    let renderer = document
        .render_settings
        .clone()
        .map(|settings| MapRenderer::new(settings.into()));

    let responses = document
        .stat_requests
        .iter()
        .map(|request| responses::answer(&catalogue, renderer.as_ref(), request))
        .collect::<Result<Vec<_>>>()?;
    tracing::info!("Answered {} stat requests", responses.len());

    if let Some(path) = render_path {
        let renderer = renderer
            .as_ref()
            .context("--render needs render_settings in the request document")?;
        let document = svg::render_document(&renderer.render(&catalogue)?)?;
        fs::write(path, document).with_context(|| format!("Failed to write map to {}", path.display()))?;
        tracing::info!("Wrote map to {}", path.display());
    }

    let mut output = serde_json::to_string_pretty(&responses).context("Failed to serialize responses")?;
    output.push('\n');
    Ok(output)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::info!("Input: {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Output: {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes()).context("Failed to write stdout")
        }
    }
}
