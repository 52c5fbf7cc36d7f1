//! Tether CLI - element geometry and placement inspector
//!
//! Usage:
//!   tether <scene.json>                                 Offset and position of every element
//!   tether <scene.json> --host a --target b             Place `b` against `a` (bottom-left)
//!   tether <scene.json> --host a --target b -p right    Use another placement
//!   tether <scene.json> --host a --target b --all       Every placement
//!   tether <scene.json> --json                          Machine-readable output
//!
//! Examples:
//!   tether res/tooltip.json --host button --target tooltip -p top --in-container
//!   tether res/tooltip.json --scroll-top 400

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::json;
use strum::IntoEnumIterator;
use tether_common::warning::clear_warnings;
use tether_dom::{Document, NodeId, Scene};
use tether_position::{
    BoundingBox, DEFAULT_MAX_ANCESTOR_DEPTH, Placement, PositionEngine, PositionOptions,
};

#[derive(Parser, Debug)]
#[command(name = "tether", version, about = "Inspect element geometry and anchored placements")]
struct Cli {
    /// Scene description (JSON)
    scene: PathBuf,

    /// Id of the host element to anchor to
    #[arg(long, requires = "target")]
    host: Option<String>,

    /// Id of the element being placed
    #[arg(long, requires = "host")]
    target: Option<String>,

    /// Placement name, e.g. `top-left`, `right`, `bottom-right`
    #[arg(long, short, default_value = "bottom-left")]
    placement: String,

    /// Compute every placement instead of one
    #[arg(long, conflicts_with = "placement")]
    all: bool,

    /// Measure the host relative to its positioned container instead of the
    /// document (target inserted next to the host)
    #[arg(long)]
    in_container: bool,

    /// Override the scene's document scroll (vertical)
    #[arg(long)]
    scroll_top: Option<f32>,

    /// Override the scene's document scroll (horizontal)
    #[arg(long)]
    scroll_left: Option<f32>,

    /// Maximum offset-parent chain length before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ANCESTOR_DEPTH)]
    max_depth: usize,

    /// Output JSON instead of text
    #[arg(long, short)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.scene)
        .with_context(|| format!("failed to read {}", cli.scene.display()))?;
    let scene = Scene::from_json(&text)
        .with_context(|| format!("failed to load {}", cli.scene.display()))?;
    let mut document = scene.build()?;
    clear_warnings();

    if cli.scroll_top.is_some() || cli.scroll_left.is_some() {
        let current = document.scroll();
        document.scroll_to(
            cli.scroll_top.unwrap_or(current.scroll_top),
            cli.scroll_left.unwrap_or(current.scroll_left),
        );
    }

    let options = PositionOptions {
        max_ancestor_depth: cli.max_depth,
    };
    let engine = PositionEngine::with_options(&document, options);

    match (&cli.host, &cli.target) {
        (Some(host), Some(target)) => {
            let host = lookup(&document, host)?;
            let target = lookup(&document, target)?;
            report_placements(&cli, &engine, host, target)
        }
        _ => report_geometry(&cli, &scene, &document, &engine),
    }
}

fn lookup(document: &Document, element_id: &str) -> Result<NodeId> {
    match document.element_by_id(element_id) {
        Some(id) => Ok(id),
        None => bail!("no element with id '{element_id}' in scene"),
    }
}

fn report_placements(
    cli: &Cli,
    engine: &PositionEngine<'_, Document>,
    host: NodeId,
    target: NodeId,
) -> Result<()> {
    let names: Vec<String> = if cli.all {
        Placement::iter().map(|p| p.to_string()).collect()
    } else {
        vec![cli.placement.clone()]
    };

    let mut results = Vec::with_capacity(names.len());
    for name in &names {
        let coordinates = if cli.in_container {
            engine.position_elements_in_container(host, target, name)?
        } else {
            engine.position_elements(host, target, name)?
        };
        results.push((name, coordinates));
    }

    if cli.json {
        let out: Vec<_> = results
            .iter()
            .map(|(name, c)| json!({ "placement": name, "top": c.top, "left": c.left }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let space = if cli.in_container {
        "container"
    } else {
        "document"
    };
    println!("{} ({space} coordinates)", "=== Placements ===".bold());
    for (name, c) in &results {
        println!("{:>14}  top {:>9.2}  left {:>9.2}", name.cyan(), c.top, c.left);
    }
    Ok(())
}

fn report_geometry(
    cli: &Cli,
    scene: &Scene,
    document: &Document,
    engine: &PositionEngine<'_, Document>,
) -> Result<()> {
    let mut rows = Vec::with_capacity(scene.elements.len());
    for element in &scene.elements {
        let id = lookup(document, &element.id)?;
        let offset = engine.offset(id);
        let position = engine
            .position(id)
            .with_context(|| format!("failed to position '{}'", element.id))?;
        rows.push((element.id.as_str(), offset, position));
    }

    if cli.json {
        let out: Vec<_> = rows
            .iter()
            .map(|(id, offset, position)| {
                json!({ "id": id, "offset": offset, "position": position })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let scroll = document.scroll();
    let (width, height) = document.viewport_size();
    println!(
        "{} (viewport {width} x {height}, scroll top {}, left {})",
        "=== Geometry ===".bold(),
        scroll.scroll_top,
        scroll.scroll_left
    );
    for (id, offset, position) in &rows {
        println!("{}", id.cyan());
        println!("  offset   {}", describe(offset));
        println!("  position {}", describe(position));
    }
    Ok(())
}

fn describe(bbox: &BoundingBox) -> String {
    format!(
        "top {:.2} left {:.2} bottom {:.2} right {:.2} ({:.2} x {:.2})",
        bbox.top(),
        bbox.left(),
        bbox.bottom(),
        bbox.right(),
        bbox.width(),
        bbox.height()
    )
}
