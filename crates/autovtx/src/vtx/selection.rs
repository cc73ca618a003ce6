//! Host selection snapshot.
//!
//! The host captures its current edge selection as `MeshEdge` values and asks
//! `EdgePair::from_selection` whether the tool applies. Anything other than
//! exactly two selected, visible edges declines quietly with `None`.

use crate::geom3::{ClosedForm, LineLineNearest};

use super::classify::{classify_edge_pair_with, ClassifyError, Intersection};
use super::plan::{plan, VtxPlan};
use super::types::Edge;

/// An edge plus the host's selection flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshEdge<V, E> {
    pub edge: Edge<V, E>,
    pub selected: bool,
    pub hidden: bool,
}

impl<V, E> MeshEdge<V, E> {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.selected && !self.hidden
    }
}

/// Exactly two selected, visible edges, in host order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgePair<V, E> {
    pub first: Edge<V, E>,
    pub second: Edge<V, E>,
}

impl<V: Copy + Eq, E: Copy> EdgePair<V, E> {
    #[inline]
    pub fn new(first: Edge<V, E>, second: Edge<V, E>) -> Self {
        Self { first, second }
    }

    /// Snapshot the selection; `None` unless exactly two edges are selected and not hidden.
    pub fn from_selection<I>(edges: I) -> Option<Self>
    where
        I: IntoIterator<Item = MeshEdge<V, E>>,
    {
        let mut active = edges.into_iter().filter(MeshEdge::is_active);
        let first = active.next()?.edge;
        let second = active.next()?.edge;
        if active.next().is_some() {
            return None;
        }
        Some(Self { first, second })
    }

    #[inline]
    pub fn ids(&self) -> [E; 2] {
        [self.first.id, self.second.id]
    }

    #[inline]
    pub fn classify(&self) -> Result<Intersection, ClassifyError> {
        self.classify_with(&ClosedForm)
    }

    #[inline]
    pub fn classify_with<L: LineLineNearest + ?Sized>(
        &self,
        prim: &L,
    ) -> Result<Intersection, ClassifyError> {
        classify_edge_pair_with(prim, &self.first, &self.second)
    }

    /// Edge ids (per slot) whose segment contains the intersection point.
    #[inline]
    pub fn intersecting_edges(&self, result: &Intersection) -> [Option<E>; 2] {
        result.intersecting_edges(self.first.id, self.second.id)
    }

    #[inline]
    pub fn plan(&self, result: &Intersection) -> Option<VtxPlan<V, E>> {
        plan(result, &self.first, &self.second)
    }
}
