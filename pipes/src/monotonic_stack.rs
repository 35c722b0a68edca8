use itertools::Itertools;

use crate::{Height, Measurement};

/// A step down that has not been closed by a wall on its right yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Basin {
    /// First pipe after the left wall.
    start: usize,
    /// Water level already credited between `start` and the current pipe.
    level: Height,
}

/// Computes trapped water in one left-to-right pass.
///
/// Every step down opens a basin. Every step up fills the open basins from
/// the top of the stack, each to the lowest of the current pipe, the tallest
/// pipe seen so far and the basin's own left wall, and drops the basins that
/// cannot rise any further. Each basin is closed at most once, so the step
/// count stays linear in the length of the profile.
#[tracing::instrument(level = "debug", skip_all, fields(len = heights.len()))]
pub fn compute(heights: &[Height]) -> Measurement {
    let Some(&first) = heights.first() else {
        return Measurement::default();
    };

    let mut water: u64 = 0;
    let mut steps: u64 = 0;
    let mut highest = first;
    let mut basins: Vec<Basin> = Vec::new();

    for (x, (&previous, &height)) in (1..).zip(heights.iter().tuple_windows()) {
        steps += 1;

        if height < previous {
            basins.push(Basin { start: x, level: height });
        } else if height > previous {
            let reachable = height.min(highest);

            while let Some(top) = basins.last().copied() {
                steps += 1;

                let fill = reachable.min(heights[top.start - 1]);
                water += (x - top.start) as u64 * u64::from(fill - top.level);

                let below = basins.len().checked_sub(2).map(|i| basins[i].level);
                if fill == highest || below == Some(fill) {
                    // Full, or its water joined the basin underneath.
                    basins.pop();
                } else if let Some(top) = basins.last_mut() {
                    top.level = fill;
                }

                match basins.last() {
                    Some(next) if reachable > next.level => {}
                    _ => break,
                }
            }
        }

        highest = highest.max(height);
    }

    tracing::debug!(water, steps, open = basins.len(), "monotonic stack finished");
    Measurement { water, steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(&[], 0, 0)]
    #[case(&[5], 0, 0)]
    #[case(&[2, 0, 2], 2, 3)]
    #[case(&[3, 0, 2, 0, 4], 7, 7)]
    #[case(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], 6, 15)]
    #[case(&[4, 2, 0, 3, 2, 5], 9, 9)]
    #[case(&[1, 2, 3, 4, 5], 0, 4)]
    #[case(&[5, 4, 3, 2, 1], 0, 4)]
    fn traps_expected_water(#[case] heights: &[Height], #[case] water: u64, #[case] steps: u64) {
        assert_eq!(Measurement { water, steps }, compute(heights));
    }

    #[rstest]
    #[case(&[5, 0, 0, 0, 1], 3)]
    #[case(&[1, 0, 0, 0, 5], 3)]
    #[case(&[5, 1, 5, 1, 5], 8)]
    #[case(&[3, 3, 0, 0, 3, 3], 6)]
    #[case(&[6, 1, 4, 0, 2, 0, 6], 23)]
    fn nested_basins(#[case] heights: &[Height], #[case] water: u64) {
        assert_eq!(water, compute(heights).water);
    }

    #[test]
    fn plateaus_cost_one_step_each() {
        assert_eq!(Measurement { water: 0, steps: 4 }, compute(&[2, 2, 2, 2, 2]));
    }
}
