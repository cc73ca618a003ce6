//! Print the VTX decision for a few seeded edge pairs of each kind.
//!
//! Usage:
//!   cargo run -p autovtx --example vtx_cases -- [seed]

use autovtx::api::{EdgePairKind, PairCfg, PairSampler};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let mut sampler = PairSampler::new(PairCfg::default(), seed);
    for kind in [
        EdgePairKind::Crossing,
        EdgePairKind::Tee,
        EdgePairKind::Extension,
        EdgePairKind::Skew,
    ] {
        for _ in 0..2 {
            let s = sampler.next_pair(kind);
            match s.pair.classify() {
                Ok(r) => println!(
                    "{kind:?} #{}: {:?} -> {:?}",
                    s.replay.index,
                    r,
                    s.pair.plan(&r)
                ),
                Err(err) => println!("{kind:?} #{}: error: {err}", s.replay.index),
            }
        }
    }
}
