use anyhow::{Context, Result};
use dchull::ConvexPolygon;
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What one `render` run drew; shared by the sidecars of all its pictures.
#[derive(Clone, Debug, Serialize)]
pub struct RenderRecord {
    pub input: String,
    pub unit: i64,
    pub input_points: usize,
    /// False when the polygon walk got stuck and no outline was drawn.
    pub outline: bool,
    pub hull_vertices: usize,
    pub degenerate: bool,
}

impl RenderRecord {
    pub fn new(
        input: &Path,
        unit: i64,
        input_points: usize,
        outline: bool,
        hull: &ConvexPolygon,
    ) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            unit,
            input_points,
            outline,
            hull_vertices: hull.len(),
            degenerate: hull.is_segment(),
        }
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    lib_version: &'static str,
    tag: Option<&'a str>,
    output: Cow<'a, str>,
    render: &'a RenderRecord,
}

/// Write `<stem>.provenance.json` beside a rendered picture.
pub fn write_sidecar(artifact: &Path, record: &RenderRecord, tag: Option<&str>) -> Result<PathBuf> {
    let path = artifact.with_extension("provenance.json");
    let doc = Sidecar {
        code_rev: current_git_rev(),
        lib_version: dchull::VERSION,
        tag,
        output: artifact.to_string_lossy(),
        render: record,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `$GIT_COMMIT` if set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dchull::{convex_hull, Point};
    use serde_json::Value;
    use tempfile::tempdir;

    fn triangle() -> ConvexPolygon {
        convex_hull(&[Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), Point::new(1, 1)])
            .unwrap()
    }

    #[test]
    fn sidecar_sits_beside_the_picture() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("car_hull.svg");
        let record = RenderRecord::new(Path::new("car.txt"), 1, 4, true, &triangle());
        let path = write_sidecar(&artifact, &record, None).unwrap();
        assert_eq!(path, dir.path().join("car_hull.provenance.json"));
    }

    #[test]
    fn sidecar_records_hull_facts_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("a_hull.svg");
        fs::write(&artifact, "<svg/>").unwrap();
        let record = RenderRecord::new(Path::new("a.txt"), 10, 4, false, &triangle());
        let path = write_sidecar(&artifact, &record, Some("run-7")).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["output"], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["tag"], "run-7");
        assert_eq!(parsed["render"]["unit"], 10);
        assert_eq!(parsed["render"]["input_points"], 4);
        assert_eq!(parsed["render"]["outline"], false);
        assert_eq!(parsed["render"]["hull_vertices"], 3);
        assert_eq!(parsed["render"]["degenerate"], false);
    }

    #[test]
    fn collinear_input_is_recorded_as_degenerate() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("line_hull.svg");
        let hull = convex_hull(&[Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]).unwrap();
        let record = RenderRecord::new(Path::new("line.txt"), 1, 3, true, &hull);
        let path = write_sidecar(&artifact, &record, None).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["tag"], Value::Null);
        assert_eq!(parsed["render"]["hull_vertices"], 2);
        assert_eq!(parsed["render"]["degenerate"], true);
    }
}
