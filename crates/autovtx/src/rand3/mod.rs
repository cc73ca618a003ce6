//! Seeded edge-pair generators (crossing, tee, extension, skew).
//!
//! Purpose
//! - Reproducible inputs with a known answer, for property tests and benches.
//! - Every sample carries its replay token so a failing case can be regenerated.
//!
//! Model
//! - Pick an anchor `p` in a cube, two unit directions at an angle in
//!   `[min_angle, π - min_angle]`, and place each edge along its line with a
//!   parameter window that either straddles `p` or stays on one side of it.
//! - Skew pairs lift the second edge off the common plane by a random gap.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

use crate::geom3::{Point3, Segment};
use crate::vtx::{Edge, EdgePair};

/// Which configuration to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgePairKind {
    /// Lines meet inside both edges.
    Crossing,
    /// Lines meet inside the first edge only.
    Tee,
    /// Lines meet outside both edges.
    Extension,
    /// Lines miss each other by at least `skew_gap.0`.
    Skew,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PairCfg {
    /// Anchor point is drawn from `[-extent, extent]³`.
    pub extent: f64,
    /// Half-length range of the parameter window along each line.
    pub length: (f64, f64),
    /// Smallest angle (radians) between the two lines.
    pub min_angle: f64,
    /// Gap range between the lines for `Skew`.
    pub skew_gap: (f64, f64),
}

impl Default for PairCfg {
    fn default() -> Self {
        Self {
            extent: 10.0,
            length: (0.5, 2.0),
            min_angle: 0.2,
            skew_gap: (0.1, 1.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// One generated pair plus what the classifier should find.
///
/// Vertex ids are `[0, 1]` and `[2, 3]`; edge ids are `0` and `1`.
#[derive(Clone, Copy, Debug)]
pub struct PairSample {
    pub pair: EdgePair<usize, usize>,
    pub kind: EdgePairKind,
    /// Analytic intersection point; `None` for `Skew`.
    pub expected_point: Option<Point3>,
    pub replay: ReplayToken,
}

/// Streaming sampler: `next_pair` advances the index, `regenerate` replays one.
#[derive(Clone, Debug)]
pub struct PairSampler {
    cfg: PairCfg,
    seed: u64,
    index: u64,
}

impl PairSampler {
    pub fn new(cfg: PairCfg, seed: u64) -> Self {
        Self {
            cfg,
            seed,
            index: 0,
        }
    }

    pub fn next_pair(&mut self, kind: EdgePairKind) -> PairSample {
        let replay = ReplayToken {
            seed: self.seed,
            index: self.index,
        };
        self.index += 1;
        self.regenerate(kind, replay)
    }

    pub fn regenerate(&self, kind: EdgePairKind, replay: ReplayToken) -> PairSample {
        let mut rng = replay.to_std_rng();
        let cfg = &self.cfg;
        let p = Vector3::new(
            rng.gen_range(-cfg.extent..=cfg.extent),
            rng.gen_range(-cfg.extent..=cfg.extent),
            rng.gen_range(-cfg.extent..=cfg.extent),
        );
        let d1 = unit_vector(&mut rng);
        let theta = rng.gen_range(cfg.min_angle..=(PI - cfg.min_angle));
        let u = orthogonal_unit(&mut rng, d1);
        let d2 = d1 * theta.cos() + u * theta.sin();

        let (straddle1, straddle2) = match kind {
            EdgePairKind::Crossing | EdgePairKind::Skew => (true, true),
            EdgePairKind::Tee => (true, false),
            EdgePairKind::Extension => (false, false),
        };
        let (s0, s1) = window(&mut rng, cfg, straddle1);
        let (t0, t1) = window(&mut rng, cfg, straddle2);

        let (p2, expected_point) = match kind {
            EdgePairKind::Skew => {
                let gap = rng.gen_range(cfg.skew_gap.0..=cfg.skew_gap.1);
                let n = d1.cross(&d2).normalize();
                (p + n * gap, None)
            }
            _ => (p, Some(p)),
        };

        let e1 = Edge::new(0, [0, 1], Segment::new(p + d1 * s0, p + d1 * s1));
        let e2 = Edge::new(1, [2, 3], Segment::new(p2 + d2 * t0, p2 + d2 * t1));
        PairSample {
            pair: EdgePair::new(e1, e2),
            kind,
            expected_point,
            replay,
        }
    }
}

/// Parameter window along a unit direction: straddles 0, or lies on one side of it.
fn window<R: Rng>(rng: &mut R, cfg: &PairCfg, straddle: bool) -> (f64, f64) {
    let (lo, hi) = cfg.length;
    let near = rng.gen_range(0.2 * lo..=lo);
    let far = rng.gen_range(lo..=hi) + near;
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    if straddle {
        (-near * sign, far * sign)
    } else {
        (near * sign, far * sign)
    }
}

/// Uniform direction on the unit sphere.
fn unit_vector<R: Rng>(rng: &mut R) -> Vector3<f64> {
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let phi: f64 = rng.gen_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vector3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Random unit vector orthogonal to the unit vector `d`.
fn orthogonal_unit<R: Rng>(rng: &mut R, d: Vector3<f64>) -> Vector3<f64> {
    let helper = if d.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u0 = d.cross(&helper).normalize();
    let v0 = d.cross(&u0);
    let phi: f64 = rng.gen_range(0.0..TAU);
    u0 * phi.cos() + v0 * phi.sin()
}
