//! JSON view of a classification plus the user-facing warnings.

use autovtx::api::{ClassifyError, EdgePair, Intersection, VtxPlan};
use serde::Serialize;

pub const MSG_DEGENERATE: &str = "edges share a vertex, degenerate case, returning early";
pub const MSG_NOT_COPLANAR: &str = "not coplanar! returning early";
pub const MSG_PARALLEL: &str = "edges are parallel, no unique intersection";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Classified,
    Degenerate,
    NotCoplanar,
    UndefinedGeometry,
    ZeroLengthEdge,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "case", rename_all = "snake_case")]
pub enum PlanView {
    Slice {
        edges: [u64; 2],
    },
    Extend {
        target: u64,
        stem: u64,
        stem_vertex: u64,
    },
    Weld {
        vertices: [u64; 2],
    },
}

impl From<VtxPlan<u64, u64>> for PlanView {
    fn from(plan: VtxPlan<u64, u64>) -> Self {
        match plan {
            VtxPlan::Slice { edges, .. } => PlanView::Slice { edges },
            VtxPlan::Extend {
                target,
                stem,
                stem_vertex,
                ..
            } => PlanView::Extend {
                target,
                stem,
                stem_vertex,
            },
            VtxPlan::Weld { vertices, .. } => PlanView::Weld { vertices },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    pub status: Status,
    pub point: Option<[f64; 3]>,
    pub on_segment1: bool,
    pub on_segment2: bool,
    pub intersecting_edges: [Option<u64>; 2],
    pub plan: Option<PlanView>,
    pub warning: Option<String>,
}

impl Outcome {
    pub fn evaluate(pair: &EdgePair<u64, u64>) -> Self {
        let result = pair.classify();
        let mut out = Outcome {
            status: Status::Classified,
            point: None,
            on_segment1: false,
            on_segment2: false,
            intersecting_edges: [None, None],
            plan: None,
            warning: None,
        };
        match result {
            Ok(r @ Intersection::Classified {
                point,
                on_segment1,
                on_segment2,
            }) => {
                out.point = Some([point.x, point.y, point.z]);
                out.on_segment1 = on_segment1;
                out.on_segment2 = on_segment2;
                out.intersecting_edges = pair.intersecting_edges(&r);
                out.plan = pair.plan(&r).map(PlanView::from);
            }
            Ok(Intersection::Degenerate) => {
                out.status = Status::Degenerate;
                out.warning = Some(MSG_DEGENERATE.to_string());
            }
            Ok(Intersection::NotCoplanar) => {
                out.status = Status::NotCoplanar;
                out.warning = Some(MSG_NOT_COPLANAR.to_string());
            }
            Err(ClassifyError::UndefinedGeometry) => {
                out.status = Status::UndefinedGeometry;
                out.warning = Some(MSG_PARALLEL.to_string());
            }
            Err(err @ ClassifyError::ZeroLengthEdge { .. }) => {
                out.status = Status::ZeroLengthEdge;
                out.warning = Some(err.to_string());
            }
        }
        out
    }

    pub fn log(&self) {
        match &self.warning {
            Some(msg) => tracing::warn!(status = ?self.status, "{msg}"),
            None => tracing::info!(
                point = ?self.point,
                on_segment1 = self.on_segment1,
                on_segment2 = self.on_segment2,
                plan = ?self.plan,
                "classified"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autovtx::Edge;

    fn pair(
        e1: ([f64; 3], [f64; 3]),
        e2: ([f64; 3], [f64; 3]),
        verts: [u64; 4],
    ) -> EdgePair<u64, u64> {
        EdgePair::new(
            Edge::from_coords(10, [verts[0], verts[1]], e1.0, e1.1),
            Edge::from_coords(20, [verts[2], verts[3]], e2.0, e2.1),
        )
    }

    #[test]
    fn crossing_pair_serializes_slice_plan() {
        let p = pair(
            ([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            ([0.0, -1.0, 0.0], [0.0, 1.0, 0.0]),
            [0, 1, 2, 3],
        );
        let out = Outcome::evaluate(&p);
        assert_eq!(out.status, Status::Classified);
        assert_eq!(out.intersecting_edges, [Some(10), Some(20)]);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["status"], "classified");
        assert_eq!(json["plan"]["case"], "slice");
        assert_eq!(json["plan"]["edges"][1], 20);
        assert!(json["warning"].is_null());
    }

    #[test]
    fn warnings_follow_result_variants() {
        let shared = pair(
            ([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            ([0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            [0, 1, 0, 2],
        );
        let out = Outcome::evaluate(&shared);
        assert_eq!(out.status, Status::Degenerate);
        assert_eq!(out.warning.as_deref(), Some(MSG_DEGENERATE));

        let skew = pair(
            ([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            ([0.0, 1.0, 1.0], [1.0, 1.0, 2.0]),
            [0, 1, 2, 3],
        );
        let out = Outcome::evaluate(&skew);
        assert_eq!(out.status, Status::NotCoplanar);
        assert_eq!(out.warning.as_deref(), Some(MSG_NOT_COPLANAR));
        assert!(out.plan.is_none());

        let parallel = pair(
            ([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
            [0, 1, 2, 3],
        );
        let out = Outcome::evaluate(&parallel);
        assert_eq!(out.status, Status::UndefinedGeometry);
        assert_eq!(out.warning.as_deref(), Some(MSG_PARALLEL));
        assert!(out.point.is_none());
    }
}
