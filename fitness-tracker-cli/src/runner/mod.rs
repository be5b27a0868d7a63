// Batch runner: package -> workout -> summary, one record at a time

use crate::models::{InfoMessage, Package};
use crate::training::{read_package, TrainingError};

/// Result of processing a single package
#[derive(Debug, Clone, PartialEq)]
pub struct PackageOutcome {
    pub package: Package,
    pub result: Result<InfoMessage, TrainingError>,
}

/// Summary of a batch run
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<PackageOutcome>,
    /// Set when fail-fast stopped the run before every package was read
    pub stopped_early: bool,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs packages and forwards each outcome to a sink as soon as it is computed
pub struct Runner {
    fail_fast: bool,
}

impl Runner {
    pub fn new(fail_fast: bool) -> Self {
        Self { fail_fast }
    }

    pub fn run<F>(&self, packages: &[Package], mut sink: F) -> RunReport
    where
        F: FnMut(&PackageOutcome),
    {
        let mut report = RunReport::default();

        for (index, package) in packages.iter().enumerate() {
            let result = process(package);

            if let Err(ref err) = result {
                tracing::debug!("Package #{} ({}) failed: {}", index + 1, package.code, err);
            }

            let outcome = PackageOutcome {
                package: package.clone(),
                result,
            };
            sink(&outcome);

            let failed = outcome.result.is_err();
            report.outcomes.push(outcome);

            if failed && self.fail_fast {
                report.stopped_early = index + 1 < packages.len();
                break;
            }
        }

        tracing::info!(
            "Processed {} packages: {} succeeded, {} failed",
            report.outcomes.len(),
            report.succeeded(),
            report.failed()
        );

        report
    }
}

/// Compute the summary for one package
pub fn process(package: &Package) -> Result<InfoMessage, TrainingError> {
    let workout = read_package(&package.code, &package.data)?;
    Ok(workout.show_training_info())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_packages() -> Vec<Package> {
        vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("XYZ", vec![1.0, 2.0, 3.0]),
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ]
    }

    #[test]
    fn test_failures_are_isolated() {
        let mut seen = Vec::new();
        let report = Runner::new(false).run(&mixed_packages(), |o| seen.push(o.package.code.clone()));

        assert_eq!(seen, vec!["RUN", "XYZ", "SWM"]);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert!(!report.stopped_early);
        assert_eq!(
            report.outcomes[1].result,
            Err(TrainingError::UnknownWorkoutCode("XYZ".to_string()))
        );
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let report = Runner::new(true).run(&mixed_packages(), |_| {});

        assert_eq!(report.outcomes.len(), 2);
        assert!(report.stopped_early);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_samples_all_succeed() {
        let report = Runner::new(true).run(&Package::samples(), |_| {});
        assert!(report.is_success());
        assert_eq!(report.succeeded(), 3);
        assert_eq!(
            report.outcomes[0].result.as_ref().unwrap().training_type,
            "Swimming"
        );
    }

    #[test]
    fn test_empty_run() {
        let report = Runner::new(false).run(&[], |_| {});
        assert!(report.is_success());
        assert!(report.outcomes.is_empty());
    }
}
