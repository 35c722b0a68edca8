use itertools::Itertools;
use miette::*;

pub mod algorithm;
pub mod harness;
pub mod level_sweep;
pub mod monotonic_stack;
pub mod profile;
pub mod render;

pub use algorithm::{Algorithm, ALGORITHMS};
pub use profile::{HeightProfile, ProfileError};

/// Height of a single pipe.
pub type Height = u32;

/// Outcome of running one water algorithm over a profile.
///
/// `steps` only exists to compare algorithms against each other, it is not
/// part of the answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Measurement {
    pub water: u64,
    pub steps: u64,
}

impl From<Measurement> for (u64, u64) {
    fn from(measurement: Measurement) -> Self {
        (measurement.water, measurement.steps)
    }
}

#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("algorithms disagree on trapped water: {details}")]
#[diagnostic(
    code(pipes::disagreement),
    help("every registered algorithm must report the same water total")
)]
pub struct Disagreement {
    details: String,
}

/// Parses a height profile and reports every registered algorithm on it.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn process(input: &str) -> Result<String> {
    let profile = HeightProfile::parse(input)?;
    let results = algorithm::compare(profile.as_slice());

    if !results.iter().map(|(_, m)| m.water).all_equal() {
        let details = results
            .iter()
            .map(|(algorithm, m)| format!("{}={}", algorithm.name, m.water))
            .join(", ");
        return Err(Disagreement { details }.into());
    }

    Ok(results
        .iter()
        .map(|(algorithm, m)| format!("{}: water={} steps={}", algorithm.name, m.water, m.steps))
        .join("\n"))
}
