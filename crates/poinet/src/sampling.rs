//! Seeded POI sampling for stepwise runs.
//!
//! Purpose
//! - Split a POI list into ordered groups by percentage, then grow the POI
//!   pool group by group.
//! - Every random draw goes through an explicit `ReplayToken`; there is no
//!   global RNG state.
//!
//! Model
//! - Shuffle the POIs with the token's RNG, split the shuffled list with
//!   `split_collection`, and take cumulative unions of the groups.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::graph::VertexId;

/// Absolute slack allowed when checking that percentages sum to one.
pub const PERCENT_SUM_EPS: f64 = 1e-9;

/// Replay token to make draws reproducible and indexable.
///
/// `seed` picks the experiment, `index` the iteration inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Single 64-bit seed mixed from `(seed, index)`.
    #[inline]
    pub fn mixed(self) -> u64 {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)))
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        StdRng::seed_from_u64(self.mixed())
    }
}

/// Reject percentages outside [0,1] or not summing to one.
pub fn validate_percentages(percentages: &[f64]) -> Result<()> {
    if percentages.is_empty() {
        return Err(Error::config("percentage list is empty"));
    }
    if let Some(p) = percentages
        .iter()
        .find(|p| !(p.is_finite() && (0.0..=1.0).contains(*p)))
    {
        return Err(Error::config(format!(
            "percentage {p} is outside [0, 1]"
        )));
    }
    let sum: f64 = percentages.iter().sum();
    if (sum - 1.0).abs() > PERCENT_SUM_EPS {
        return Err(Error::config(format!("percentages sum to {sum}, not 1")));
    }
    Ok(())
}

/// Split `items` into consecutive groups sized by `percentages`.
///
/// Sizes are `round(total * p)` (ties to even). Any remainder is handed out
/// one item at a time to the groups with the largest rounding deviation
/// (ties: larger percentage first, then list order). Groups never go negative.
pub fn split_collection<T: Clone>(items: &[T], percentages: &[f64]) -> Result<Vec<Vec<T>>> {
    validate_percentages(percentages)?;
    let total = items.len();
    let exact: Vec<f64> = percentages.iter().map(|p| total as f64 * p).collect();
    let mut sizes: Vec<i64> = exact.iter().map(|x| x.round_ties_even() as i64).collect();

    let diff = total as i64 - sizes.iter().sum::<i64>();
    if diff != 0 {
        let mut order: Vec<usize> = (0..sizes.len()).collect();
        order.sort_by(|&i, &j| {
            let di = (exact[i] - sizes[i] as f64).abs();
            let dj = (exact[j] - sizes[j] as f64).abs();
            dj.total_cmp(&di)
                .then_with(|| percentages[j].total_cmp(&percentages[i]))
        });
        let step = diff.signum();
        let mut left = diff.abs();
        let mut k = 0usize;
        while left > 0 {
            let g = order[k % order.len()];
            k += 1;
            if step < 0 && sizes[g] == 0 {
                continue;
            }
            sizes[g] += step;
            left -= 1;
        }
    }

    let mut groups = Vec::with_capacity(sizes.len());
    let mut start = 0usize;
    for size in sizes {
        let end = start + size as usize;
        groups.push(items[start..end].to_vec());
        start = end;
    }
    debug_assert_eq!(start, total);
    Ok(groups)
}

/// POIs in a reproducible random order.
pub fn shuffled(pois: &[VertexId], token: ReplayToken) -> Vec<VertexId> {
    let mut out = pois.to_vec();
    out.shuffle(&mut token.to_std_rng());
    out
}

/// Growing POI pools: pool `k` holds groups `0..=k` of the shuffled split.
pub fn poi_pools(
    pois: &[VertexId],
    percentages: &[f64],
    token: ReplayToken,
) -> Result<Vec<Vec<VertexId>>> {
    let groups = split_collection(&shuffled(pois, token), percentages)?;
    let mut pool = Vec::with_capacity(pois.len());
    Ok(groups
        .into_iter()
        .map(|g| {
            pool.extend(g);
            pool.clone()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u64) -> Vec<VertexId> {
        (0..n).map(VertexId).collect()
    }

    #[test]
    fn split_exact_sizes() {
        let groups = split_collection(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &[0.3, 0.7]).unwrap();
        assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6, 7, 8, 9, 10]]);
    }

    #[test]
    fn split_hands_out_remainder() {
        // 10 * 1/3 rounds to 3 three times; one item is left over.
        let third = 1.0 / 3.0;
        let groups = split_collection(&ids(10), &[third, third, 1.0 - 2.0 * third]).unwrap();
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes.iter().sum::<usize>(), 10);
        assert!(sizes.iter().all(|&s| s == 3 || s == 4));
    }

    #[test]
    fn split_takes_back_overshoot() {
        // 4.5 rounds to 4 twice (one short); 0.75 rounds to 1 four times (one over).
        let groups = split_collection(&ids(9), &[0.5, 0.5]).unwrap();
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes.iter().sum::<usize>(), 9);
        let groups = split_collection(&ids(3), &[0.25, 0.25, 0.25, 0.25]).unwrap();
        assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), 3);
    }

    #[test]
    fn split_rejects_bad_percentages() {
        assert!(split_collection(&ids(4), &[0.5, 0.4]).unwrap_err().is_config());
        assert!(split_collection(&ids(4), &[1.5, -0.5]).unwrap_err().is_config());
        assert!(split_collection(&ids(4), &[]).unwrap_err().is_config());
        assert!(split_collection(&ids(4), &[f64::NAN]).unwrap_err().is_config());
        // Float noise in the sum is tolerated.
        assert!(split_collection(&ids(4), &[0.1, 0.2, 0.7]).is_ok());
    }

    #[test]
    fn pools_grow_and_are_reproducible() {
        let pois = ids(20);
        let tok = ReplayToken::new(0, 3);
        let pools = poi_pools(&pois, &[0.25, 0.25, 0.5], tok).unwrap();
        assert_eq!(pools.len(), 3);
        assert_eq!(pools[0].len(), 5);
        assert_eq!(pools[1].len(), 10);
        assert_eq!(pools[2].len(), 20);
        assert_eq!(pools[1][..5], pools[0][..]);
        assert_eq!(pools, poi_pools(&pois, &[0.25, 0.25, 0.5], tok).unwrap());
        let mut all = pools[2].clone();
        all.sort();
        assert_eq!(all, pois);
    }

    #[test]
    fn tokens_differ_by_index() {
        let a = ReplayToken::new(7, 0);
        let b = ReplayToken::new(7, 1);
        assert_ne!(a.mixed(), b.mixed());
        assert_eq!(a.mixed(), ReplayToken::new(7, 0).mixed());
    }
}
