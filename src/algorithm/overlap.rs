//! Pairwise radius shrinkage for overlapping circles
//!
//! The pass is quadratic and runs once; it is not iterated to a fixed point,
//! so a circle shrunk away from one neighbour may still touch another that
//! was resolved earlier. Positions are never changed.

use crate::algorithm::result::PlacedCircle;

/// How an overlap between two circles is split between them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShrinkRule {
    /// Shrink the newer circle first, then the older one using the already
    /// reduced newer radius in the denominator
    ///
    /// Order dependent; the older circle gives up slightly more than its
    /// share, which leaves the pair separated by a small gap.
    #[default]
    Sequential,
    /// Split the overlap by each circle's share of the original radius sum
    ///
    /// The pair ends up exactly touching.
    Proportional,
}

/// Shrink overlapping pairs in placement order
///
/// Each circle is compared against every circle before it; whenever
/// `r1 + r2 - dist > 0` both radii shrink in proportion to their size.
/// Returns the number of adjusted pairs.
pub fn resolve_overlaps(circles: &mut [PlacedCircle], rule: ShrinkRule) -> usize {
    let mut adjustments = 0;

    for index in 1..circles.len() {
        let (resolved, rest) = circles.split_at_mut(index);
        let Some(c1) = rest.first_mut() else {
            continue;
        };

        for c2 in resolved.iter_mut() {
            let difference = c1.r + c2.r - c1.center_distance(c2);
            if difference > 0.0 {
                shrink_pair(c1, c2, difference, rule);
                adjustments += 1;
            }
        }
    }

    adjustments
}

fn shrink_pair(c1: &mut PlacedCircle, c2: &mut PlacedCircle, difference: f64, rule: ShrinkRule) {
    match rule {
        ShrinkRule::Sequential => {
            c1.r -= difference * c1.r / (c1.r + c2.r);
            // Both radii can reach zero for coincident centers
            let remaining = c1.r + c2.r;
            if remaining > 0.0 {
                c2.r -= difference * c2.r / remaining;
            }
        }
        ShrinkRule::Proportional => {
            let total = c1.r + c2.r;
            let (share1, share2) = (c1.r / total, c2.r / total);
            c1.r -= difference * share1;
            c2.r -= difference * share2;
        }
    }
}

/// Count circle pairs that strictly overlap
pub fn count_overlaps(circles: &[PlacedCircle]) -> usize {
    circles
        .iter()
        .enumerate()
        .map(|(i, c1)| {
            circles
                .iter()
                .skip(i + 1)
                .filter(|c2| c1.overlaps(c2))
                .count()
        })
        .sum()
}
