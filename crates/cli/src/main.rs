mod input;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dchull::grid::{order_polygon, to_drawing_frame};
use dchull::{convex_hull, svg, ConvexPolygon};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::input::load_points;
use crate::provenance::{current_git_rev, write_sidecar, RenderRecord};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls and polygon outlines of grid-sampled point sets")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log debug details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw points, polygon outline and convex hull as SVG files
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        /// Grid unit; required for CSV input, overrides the grid file's unit
        #[arg(long)]
        grid: Option<i64>,
    },
    /// Print the convex hull of the input coordinates as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        grid: Option<i64>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct HullReport {
    input_points: usize,
    degenerate: bool,
    vertices: Vec<[i64; 2]>,
}

impl HullReport {
    fn new(input_points: usize, hull: &ConvexPolygon) -> Self {
        Self {
            input_points,
            degenerate: hull.is_segment(),
            vertices: hull.iter().map(|&p| p.into()).collect(),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Render {
            input,
            out_dir,
            grid,
        } => render(&input, &out_dir, grid, cmd.tag),
        Action::Hull { input, grid } => hull(&input, grid, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn render(input: &Path, out_dir: &Path, grid: Option<i64>, tag: Option<String>) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out_dir = %out_dir.display(),
        tag = ?tag,
        "render"
    );
    let loaded = load_points(input, grid)?;
    let g = loaded.unit;
    let framed = to_drawing_frame(&loaded.points, g)
        .with_context(|| format!("framing {}", input.display()))?;
    let outline = match order_polygon(&framed, g) {
        Ok(outline) => Some(outline),
        Err(e) => {
            tracing::warn!(error = %e, "skipping polygon outline");
            None
        }
    };
    let hull = convex_hull(&framed).with_context(|| format!("hulling {}", input.display()))?;
    tracing::info!(
        vertices = hull.len(),
        degenerate = hull.is_segment(),
        "hull"
    );
    let record = RenderRecord::new(input, g, framed.len(), outline.is_some(), &hull);

    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "points".to_string());
    let tag = tag.as_deref();
    let points_path = out_dir.join(format!("{stem}_points.svg"));
    write_artifact(&points_path, svg::points(&framed, g), &record, tag)?;
    if let Some(outline) = &outline {
        let polygon_path = out_dir.join(format!("{stem}_polygon.svg"));
        write_artifact(&polygon_path, svg::polygon(outline, g), &record, tag)?;
    }
    let hull_path = out_dir.join(format!("{stem}_hull.svg"));
    let doc = svg::hull(hull.vertices(), outline.as_deref().unwrap_or_default(), g);
    write_artifact(&hull_path, doc, &record, tag)
}

fn write_artifact(
    path: &Path,
    doc: String,
    record: &RenderRecord,
    tag: Option<&str>,
) -> Result<()> {
    fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
    write_sidecar(path, record, tag)?;
    tracing::debug!(path = %path.display(), "wrote");
    Ok(())
}

fn hull(input: &Path, grid: Option<i64>, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), tag = ?tag, "hull");
    let loaded = load_points(input, grid)?;
    let hull = convex_hull(&loaded.points)
        .with_context(|| format!("hulling {}", input.display()))?;
    let report = HullReport::new(loaded.points.len(), &hull);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "lib_version": dchull::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dchull::Point;
    use tempfile::tempdir;

    const SQUARE: &str = "2\n8\n0 0\n2 0\n4 0\n4 2\n4 4\n2 4\n0 4\n0 2\n";

    #[test]
    fn render_writes_three_pictures_with_sidecars() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.txt");
        fs::write(&input, SQUARE).unwrap();
        let out = dir.path().join("out");
        render(&input, &out, None, Some("t".into())).unwrap();
        for name in ["square_points", "square_polygon", "square_hull"] {
            assert!(out.join(format!("{name}.svg")).exists(), "{name}");
            assert!(out.join(format!("{name}.provenance.json")).exists(), "{name}");
        }
        let hull_svg = fs::read_to_string(out.join("square_hull.svg")).unwrap();
        // frame shifted by one unit: hull corners at 2 and 6
        assert!(hull_svg.contains("points=\"2,2 2,6 6,6 6,2\" fill=\"#66CDAA\""));
        let sidecar: serde_json::Value =
            serde_json::from_slice(&fs::read(out.join("square_hull.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(sidecar["tag"], "t");
        assert_eq!(sidecar["render"]["unit"], 2);
        assert_eq!(sidecar["render"]["input_points"], 8);
        assert_eq!(sidecar["render"]["outline"], true);
        assert_eq!(sidecar["render"]["hull_vertices"], 4);
    }

    #[test]
    fn render_without_outline_still_draws_hull() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("scatter.txt");
        fs::write(&input, "1\n3\n0 0\n9 0\n4 7\n").unwrap();
        let out = dir.path().join("out");
        render(&input, &out, None, None).unwrap();
        assert!(!out.join("scatter_polygon.svg").exists());
        assert!(out.join("scatter_hull.svg").exists());
        let sidecar: serde_json::Value =
            serde_json::from_slice(&fs::read(out.join("scatter_hull.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(sidecar["render"]["outline"], false);
        assert_eq!(sidecar["render"]["hull_vertices"], 3);
    }

    #[test]
    fn render_refuses_out_of_range_grid_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("far.txt");
        fs::write(&input, "1\n2\n0 -9223372036854775808\n5 9223372036854775807\n").unwrap();
        let out = dir.path().join("out");
        assert!(render(&input, &out, None, None).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn hull_report_shape() {
        let hull = convex_hull(&[
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
        ])
        .unwrap();
        let report = serde_json::to_value(HullReport::new(3, &hull)).unwrap();
        assert_eq!(report["degenerate"], true);
        assert_eq!(report["vertices"], serde_json::json!([[0, 0], [2, 0]]));
    }
}
