use anyhow::{bail, Context, Result};
use dchull::grid::{in_range, read_grid, COORD_LIMIT};
use dchull::Point;
use polars::prelude::*;
use std::path::Path;

/// Points plus the grid unit they were sampled on.
#[derive(Debug)]
pub struct Loaded {
    pub unit: i64,
    pub points: Vec<Point>,
}

/// Load a grid file, or a CSV with integer `x` and `y` columns.
///
/// Grid files carry their own unit; `grid` overrides it. CSV input requires it.
pub fn load_points(input: &Path, grid: Option<i64>) -> Result<Loaded> {
    let is_csv = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        let Some(unit) = grid else {
            bail!("{}: CSV input needs --grid", input.display());
        };
        if !(1..=COORD_LIMIT).contains(&unit) {
            bail!("--grid must be in 1..={COORD_LIMIT}, got {unit}");
        }
        let points = read_points_csv(input)?;
        tracing::debug!(rows = points.len(), unit, "csv_points");
        return Ok(Loaded { unit, points });
    }
    let parsed = read_grid(input).with_context(|| format!("reading {}", input.display()))?;
    let unit = match grid {
        Some(g) if !(1..=COORD_LIMIT).contains(&g) => {
            bail!("--grid must be in 1..={COORD_LIMIT}, got {g}")
        }
        Some(g) => g,
        None => parsed.unit,
    };
    tracing::debug!(points = parsed.points.len(), unit, "grid_points");
    Ok(Loaded {
        unit,
        points: parsed.points,
    })
}

fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Int64),
            col("y").cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns of {}", path.display()))?;
    let xs = df.column("x")?.i64()?;
    let ys = df.column("y")?.i64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) if in_range(Point::new(x, y)) => Ok(Point::new(x, y)),
            (Some(x), Some(y)) => bail!(
                "{}: row {row} ({x}, {y}) is outside ±{COORD_LIMIT}",
                path.display()
            ),
            _ => bail!("{}: row {row} has an empty coordinate", path.display()),
        })
        .collect()
}
