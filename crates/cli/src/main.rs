use anyhow::{bail, Result};
use autovtx::api::{EdgePair, Segment};
use autovtx::Edge;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod outcome;
mod provenance;

use outcome::Outcome;

#[derive(Parser)]
#[command(name = "vtx")]
#[command(about = "Classify edge pairs for weld/slice/extend")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify one edge pair and print the result as JSON
    Classify {
        /// First edge as `x,y,z:x,y,z`
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        edge1: Segment,
        /// Second edge as `x,y,z:x,y,z`
        #[arg(long, value_parser = parse_segment, allow_hyphen_values = true)]
        edge2: Segment,
        /// Vertex ids of edge1 then edge2 (four values)
        #[arg(long, value_delimiter = ',', default_values_t = [0u64, 1, 2, 3])]
        verts: Vec<u64>,
        /// Edge ids reported back for edge1 and edge2
        #[arg(long, value_delimiter = ',', default_values_t = [0u64, 1])]
        ids: Vec<u64>,
    },
    /// Classify every row of a CSV and write JSON results plus a provenance sidecar
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify {
            edge1,
            edge2,
            verts,
            ids,
        } => classify(edge1, edge2, verts, ids),
        Action::Batch { input, out } => batch::run(&input, &out).map(|_| ()),
        Action::Report => report(),
    }
}

fn classify(edge1: Segment, edge2: Segment, verts: Vec<u64>, ids: Vec<u64>) -> Result<()> {
    let (&[v0, v1, v2, v3], &[id1, id2]) = (verts.as_slice(), ids.as_slice()) else {
        bail!("expected 4 vertex ids and 2 edge ids, got {verts:?} and {ids:?}");
    };
    let pair = EdgePair::new(
        Edge::new(id1, [v0, v1], edge1),
        Edge::new(id2, [v2, v3], edge2),
    );
    let outcome = Outcome::evaluate(&pair);
    outcome.log();
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": autovtx::VERSION,
        "tolerance": autovtx::VTX_PRECISION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Parse `x,y,z:x,y,z` into a segment.
fn parse_segment(s: &str) -> Result<Segment, String> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `x,y,z:x,y,z`, got `{s}`"))?;
    Ok(Segment::from_coords(parse_point(a)?, parse_point(b)?))
}

fn parse_point(s: &str) -> Result<[f64; 3], String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("`{p}`: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        &[x, y, z] => Ok([x, y, z]),
        _ => Err(format!("expected 3 coordinates, got `{s}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_segment_accepts_negative_coordinates() {
        let s = parse_segment("-1,0,0.5:1, 2,-3").unwrap();
        assert_eq!(s, Segment::from_coords([-1.0, 0.0, 0.5], [1.0, 2.0, -3.0]));
    }

    #[test]
    fn parse_segment_rejects_malformed_input() {
        assert!(parse_segment("1,2,3").is_err());
        assert!(parse_segment("1,2:3,4,5").is_err());
        assert!(parse_segment("1,2,x:3,4,5").is_err());
    }

    #[test]
    fn cli_parses_classify_args() {
        let cmd = Cmd::try_parse_from([
            "vtx",
            "classify",
            "--edge1",
            "-1,0,0:1,0,0",
            "--edge2",
            "0,-1,0:0,1,0",
            "--verts",
            "4,5,6,7",
        ])
        .unwrap();
        match cmd.action {
            Action::Classify { verts, ids, .. } => {
                assert_eq!(verts, vec![4, 5, 6, 7]);
                assert_eq!(ids, vec![0, 1]);
            }
            _ => panic!("expected classify"),
        }
    }
}
