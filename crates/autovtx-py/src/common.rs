use autovtx::api::{ClassifyError, Edge, Intersection, Point3, VtxPlan};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub type PyVec3 = (f64, f64, f64);
/// `(edge index, (vertex index, vertex index), (co_a, co_b))`
pub type PyEdge = (u64, (u64, u64), (PyVec3, PyVec3));
/// `(status, point, on_segment1, on_segment2)`
pub type PyResultTuple = (&'static str, Option<PyVec3>, bool, bool);

pub fn edge_from_py(edge: PyEdge) -> Edge<u64, u64> {
    let (id, (va, vb), (a, b)) = edge;
    Edge::from_coords(id, [va, vb], [a.0, a.1, a.2], [b.0, b.1, b.2])
}

#[inline]
pub fn vec3_to_py(p: Point3) -> PyVec3 {
    (p.x, p.y, p.z)
}

/// Expected outcomes become a status tuple; zero-length edges raise `ValueError`.
pub fn result_to_py(result: Result<Intersection, ClassifyError>) -> PyResult<PyResultTuple> {
    match result {
        Ok(Intersection::Degenerate) => Ok(("degenerate", None, false, false)),
        Ok(Intersection::NotCoplanar) => Ok(("not_coplanar", None, false, false)),
        Ok(Intersection::Classified {
            point,
            on_segment1,
            on_segment2,
        }) => Ok((
            "classified",
            Some(vec3_to_py(point)),
            on_segment1,
            on_segment2,
        )),
        Err(ClassifyError::UndefinedGeometry) => Ok(("undefined_geometry", None, false, false)),
        Err(err @ ClassifyError::ZeroLengthEdge { .. }) => {
            Err(PyValueError::new_err(err.to_string()))
        }
    }
}

/// `(case, point, ids)`: edges for slice, `(target, stem, stem_vertex)` for extend,
/// vertices for weld.
pub fn plan_to_py(plan: VtxPlan<u64, u64>) -> (&'static str, PyVec3, Vec<u64>) {
    let point = vec3_to_py(plan.point());
    match plan {
        VtxPlan::Slice { edges, .. } => ("slice", point, edges.to_vec()),
        VtxPlan::Extend {
            target,
            stem,
            stem_vertex,
            ..
        } => ("extend", point, vec![target, stem, stem_vertex]),
        VtxPlan::Weld { vertices, .. } => ("weld", point, vertices.to_vec()),
    }
}
