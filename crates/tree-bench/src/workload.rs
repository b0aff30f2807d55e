//! Synthetic benchmark workloads.

use std::cmp::Reverse;

use log::debug;

use crate::error::{BenchError, Result};
use crate::order::InsertionOrder;
use crate::rng::SeededRng;
use crate::series::BaseSeries;

pub type Item = (i64, f64);

/// Largest workload a tree can hold: node handles are `u32`.
pub const MAX_ITEMS: usize = u32::MAX as usize;

/// Key offset between consecutive replicas of `base`: one past its span, so
/// every key of replica `t + 1` is greater than every key of replica `t`.
pub fn replica_stride(base: &BaseSeries) -> Result<i64> {
    base.span()
        .and_then(|span| span.checked_add(1))
        .ok_or(BenchError::SpanOverflow)
}

/// Replicates `base` `multiplier` times with non-colliding key offsets and
/// arranges the result in `order`. `seed` drives the shuffle.
pub fn make_items(
    base: &BaseSeries,
    multiplier: u32,
    order: InsertionOrder,
    seed: u64,
) -> Result<Vec<Item>> {
    if multiplier == 0 {
        return Err(BenchError::ZeroMultiplier);
    }
    let stride = replica_stride(base)?;
    let overflow = || BenchError::KeyOverflow { multiplier, stride };

    let requested = base.len() as u128 * u128::from(multiplier);
    let too_many = || BenchError::TooManyItems {
        items: requested,
        max: MAX_ITEMS,
    };
    if requested > MAX_ITEMS as u128 {
        return Err(too_many());
    }
    let mut items = Vec::new();
    items
        .try_reserve_exact(requested as usize)
        .map_err(|_| too_many())?;
    for t in 0..multiplier {
        let offset = stride.checked_mul(i64::from(t)).ok_or_else(overflow)?;
        for &(k, v) in base.items() {
            items.push((k.checked_add(offset).ok_or_else(overflow)?, v));
        }
    }

    match order {
        InsertionOrder::Ascending => items.sort_by_key(|&(k, _)| k),
        InsertionOrder::Descending => items.sort_by_key(|&(k, _)| Reverse(k)),
        InsertionOrder::Shuffled => SeededRng::new(seed).shuffle(&mut items),
    }
    debug!(
        "made {} items ({} x {}, stride {stride}, {order})",
        items.len(),
        multiplier,
        base.len()
    );
    Ok(items)
}

/// Draws `query_count` ranges whose bounds are keys picked uniformly (with
/// repetition) from `keys`, each normalized to `lo <= hi`. No keys, no
/// ranges.
pub fn make_ranges(keys: &[i64], query_count: usize, seed: u64) -> Vec<(i64, i64)> {
    if keys.is_empty() {
        return Vec::new();
    }
    let mut rng = SeededRng::new(seed);
    (0..query_count)
        .map(|_| {
            let a = *rng.pick(keys);
            let b = *rng.pick(keys);
            (a.min(b), a.max(b))
        })
        .collect()
}
