//! Batch classification of edge pairs read from CSV.
//!
//! One row per pair. Columns: `edge1,edge2` (edge ids), `v1a,v1b,v2a,v2b`
//! (vertex ids), then `a1x..b1z` and `a2x..b2z` (endpoint coordinates).

use anyhow::{Context, Result};
use autovtx::api::{EdgePair, Segment};
use autovtx::Edge;
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::Path;

use crate::outcome::{Outcome, Status};
use crate::provenance::{write_sidecar, Payload};

const ID_COLUMNS: [&str; 6] = ["edge1", "edge2", "v1a", "v1b", "v2a", "v2b"];
const COORD_COLUMNS: [&str; 12] = [
    "a1x", "a1y", "a1z", "b1x", "b1y", "b1z", "a2x", "a2y", "a2z", "b2x", "b2y", "b2z",
];

#[derive(Serialize)]
struct Row<'a> {
    row: usize,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

/// Per-status counts of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub classified: usize,
    pub degenerate: usize,
    pub not_coplanar: usize,
    pub undefined: usize,
}

impl Summary {
    fn record(&mut self, status: Status) {
        self.rows += 1;
        match status {
            Status::Classified => self.classified += 1,
            Status::Degenerate => self.degenerate += 1,
            Status::NotCoplanar => self.not_coplanar += 1,
            Status::UndefinedGeometry | Status::ZeroLengthEdge => self.undefined += 1,
        }
    }
}

pub fn run(input: &str, out: &str) -> Result<Summary> {
    tracing::info!(input, out, "batch");
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {input}"))?
        .collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let pairs = read_pairs(&df)?;
    let outcomes: Vec<Outcome> = pairs.iter().map(Outcome::evaluate).collect();
    let mut summary = Summary::default();
    for (row, outcome) in outcomes.iter().enumerate() {
        summary.record(outcome.status);
        if let Some(msg) = &outcome.warning {
            tracing::warn!(row, status = ?outcome.status, "{msg}");
        }
    }
    let rows: Vec<Row> = outcomes
        .iter()
        .enumerate()
        .map(|(row, outcome)| Row { row, outcome })
        .collect();

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {out}"))?;
    let payload =
        Payload::new(json!({ "input": input })).with_counts(serde_json::to_value(summary)?);
    write_sidecar(out_path, payload)?;

    tracing::info!(
        rows = summary.rows,
        classified = summary.classified,
        degenerate = summary.degenerate,
        not_coplanar = summary.not_coplanar,
        undefined = summary.undefined,
        "batch_done"
    );
    Ok(summary)
}

fn read_pairs(df: &DataFrame) -> Result<Vec<EdgePair<u64, u64>>> {
    let ids = ID_COLUMNS
        .iter()
        .map(|name| u64_column(df, name))
        .collect::<Result<Vec<_>>>()?;
    let coords = COORD_COLUMNS
        .iter()
        .map(|name| f64_column(df, name))
        .collect::<Result<Vec<_>>>()?;
    let point = |base: usize, i: usize| [coords[base][i], coords[base + 1][i], coords[base + 2][i]];
    Ok((0..df.height())
        .map(|i| {
            let e1 = Edge::new(
                ids[0][i],
                [ids[2][i], ids[3][i]],
                Segment::from_coords(point(0, i), point(3, i)),
            );
            let e2 = Edge::new(
                ids[1][i],
                [ids[4][i], ids[5][i]],
                Segment::from_coords(point(6, i), point(9, i)),
            );
            EdgePair::new(e1, e2)
        })
        .collect())
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    let values = series.f64()?.into_iter().collect::<Option<Vec<_>>>();
    values.with_context(|| format!("column `{name}` has missing values"))
}

fn u64_column(df: &DataFrame, name: &str) -> Result<Vec<u64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::UInt64)?;
    let values = series.u64()?.into_iter().collect::<Option<Vec<_>>>();
    values.with_context(|| format!("column `{name}` has missing or negative ids"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str =
        "edge1,edge2,v1a,v1b,v2a,v2b,a1x,a1y,a1z,b1x,b1y,b1z,a2x,a2y,a2z,b2x,b2y,b2z";

    #[test]
    fn batch_classifies_rows_and_writes_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pairs.csv");
        let out = dir.path().join("out").join("results.json");
        let csv = [
            HEADER,
            // X: axes crossing at the origin
            "0,1,0,1,2,3,-1,0,0,1,0,0,0,-1,0,0,1,0",
            // skew
            "2,3,4,5,6,7,0,0,0,1,0,0,0,1,1,1,1,2",
            // shared vertex 9
            "4,5,8,9,9,10,0,0,0,1,0,0,1,0,0,1,1,0",
            // parallel
            "6,7,11,12,13,14,0,0,0,1,0,0,0,1,0,1,1,0",
        ]
        .join("\n");
        fs::write(&input, csv).unwrap();

        let summary = run(input.to_str().unwrap(), out.to_str().unwrap()).unwrap();
        assert_eq!(
            summary,
            Summary {
                rows: 4,
                classified: 1,
                degenerate: 1,
                not_coplanar: 1,
                undefined: 1,
            }
        );

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed[0]["status"], "classified");
        assert_eq!(parsed[0]["intersecting_edges"][0], 0);
        assert_eq!(parsed[0]["intersecting_edges"][1], 1);
        assert_eq!(parsed[1]["status"], "not_coplanar");
        assert_eq!(parsed[2]["status"], "degenerate");
        assert_eq!(parsed[3]["status"], "undefined_geometry");
        assert_eq!(parsed[3]["row"], 3);
        assert!(out.with_file_name("results.provenance.json").exists());
    }

    #[test]
    fn batch_reports_missing_columns() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.csv");
        fs::write(&input, "edge1,edge2\n0,1\n").unwrap();
        let out = dir.path().join("results.json");
        let err = run(input.to_str().unwrap(), out.to_str().unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("missing column"));
    }
}
