//! Reproducible random signed permutations.
//!
//! Every instance is determined by `(len, seed)` so a run can be replayed from
//! its parameters alone.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::signed::{Sign, SignedElement, SignedSequence};

/// Parameters of one random instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstanceCfg {
    pub len: u32,
    pub seed: u64,
}

impl Default for InstanceCfg {
    fn default() -> Self {
        Self { len: 6, seed: 0 }
    }
}

/// Uniform signed permutation of `1..=n`: shuffled labels, independent fair signs.
pub fn random_signed_permutation<R: Rng + ?Sized>(n: u32, rng: &mut R) -> SignedSequence {
    let mut labels: Vec<u32> = (1..=n).collect();
    labels.shuffle(rng);
    labels
        .into_iter()
        .map(|v| {
            let sign = if rng.gen_bool(0.5) {
                Sign::Plus
            } else {
                Sign::Minus
            };
            SignedElement::new(v, sign)
        })
        .collect()
}

/// Draw the instance described by `cfg` from a seeded `StdRng`.
pub fn draw_instance(cfg: InstanceCfg) -> SignedSequence {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    random_signed_permutation(cfg.len, &mut rng)
}
