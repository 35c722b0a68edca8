use crate::{Height, Measurement};

/// Sweeps every level from the tallest pipe down to zero, crediting the
/// cells that sit between two walls at that level.
///
/// Takes `(max + 1) * len` steps.
#[tracing::instrument(level = "debug", skip_all, fields(len = heights.len()))]
pub fn compute(heights: &[Height]) -> Measurement {
    let Some(&max) = heights.iter().max() else {
        return Measurement::default();
    };

    let mut water: u64 = 0;
    let mut steps: u64 = 0;

    for level in (0..=max).rev() {
        // `None` until the first wall of this level has been passed.
        let mut pending: Option<u64> = None;

        for &height in heights {
            steps += 1;

            if height >= level {
                water += pending.unwrap_or(0);
                pending = Some(0);
            } else if let Some(cells) = pending.as_mut() {
                *cells += 1;
            }
        }
    }

    tracing::debug!(water, steps, "level sweep finished");
    Measurement { water, steps }
}
