use crate::{level_sweep, monotonic_stack, Height, Measurement};

/// A named water algorithm.
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub name: &'static str,
    pub description: &'static str,
    pub compute: fn(&[Height]) -> Measurement,
}

/// Every algorithm the comparison runs, in report order.
pub const ALGORITHMS: &[Algorithm] = &[
    Algorithm {
        name: "level-sweep",
        description: "Scans each water level from the tallest pipe down to the ground.",
        compute: level_sweep::compute,
    },
    Algorithm {
        name: "monotonic-stack",
        description: "Fills pending basins in a single left-to-right pass.",
        compute: monotonic_stack::compute,
    },
];

impl Algorithm {
    pub fn find(name: &str) -> Option<&'static Algorithm> {
        ALGORITHMS.iter().find(|algorithm| algorithm.name == name)
    }

    pub fn run(&self, heights: &[Height]) -> Measurement {
        let measurement = (self.compute)(heights);
        tracing::debug!(
            algorithm = self.name,
            water = measurement.water,
            steps = measurement.steps,
            "algorithm finished"
        );
        measurement
    }
}

/// Runs every registered algorithm over the same profile.
pub fn compare(heights: &[Height]) -> Vec<(&'static Algorithm, Measurement)> {
    ALGORITHMS
        .iter()
        .map(|algorithm| (algorithm, algorithm.run(heights)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("level-sweep")]
    #[case("monotonic-stack")]
    fn finds_registered_algorithms(#[case] name: &str) {
        let algorithm = Algorithm::find(name).expect("registered");
        assert_eq!(name, algorithm.name);
        assert!(!algorithm.description.is_empty());
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert!(Algorithm::find("bubble").is_none());
    }

    #[test]
    fn compare_runs_every_algorithm_in_order() {
        let results = compare(&[4, 2, 0, 3, 2, 5]);
        let names: Vec<_> = results.iter().map(|(a, _)| a.name).collect();
        assert_eq!(vec!["level-sweep", "monotonic-stack"], names);
        assert!(results.iter().all(|(_, m)| m.water == 9));
    }
}
