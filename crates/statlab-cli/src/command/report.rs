//! Sample statistics report
//!
//! Builds summary statistics and the repeating-value table for the built-in
//! sample, then prints them followed by a from-scratch recomputation of the
//! mean and unbiased variance that cross-checks the library values.

use anyhow::Context;
use statlab_stats::{
    descriptive::{InsufficientSampleError, SampleSummary},
    frequency::FrequencyTable,
};

/// The sample under analysis.
const SAMPLE: [i64; 5] = [1, 1, 2, 2, 3];

pub(crate) fn run() -> anyhow::Result<()> {
    let report = SampleReport::from_sample(&SAMPLE).context("cannot summarize sample")?;
    for line in report.render() {
        println!("{line}");
    }
    Ok(())
}

/// Everything the report prints, computed once from the sample.
#[derive(Debug, Clone)]
struct SampleReport {
    summary: SampleSummary,
    /// Values occurring more than once, ascending, with their counts.
    repeating: Vec<(i64, usize)>,
    verification: Verification,
}

impl SampleReport {
    fn from_sample(sample: &[i64]) -> Result<Self, InsufficientSampleError> {
        #[expect(clippy::cast_precision_loss)]
        let summary = SampleSummary::new(sample.iter().map(|&x| x as f64))?;
        let table = FrequencyTable::from_values(sample.iter().copied());

        Ok(Self {
            summary,
            repeating: table.repeating().collect(),
            verification: Verification::of(sample),
        })
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Mean: {}", self.summary.mean),
            format!("Variance (biased): {}", self.summary.variance_biased),
            format!("Variance (unbiased): {}", self.summary.variance_unbiased),
            String::new(),
            format!("Distinct repeating values: {}", self.repeating.len()),
            "Repeating values and their frequency:".to_string(),
        ];
        for &(value, count) in &self.repeating {
            lines.push(format!("  {value}: {count} times"));
        }
        lines.push(String::new());
        lines.push("Manual verification:".to_string());
        lines.push(format!("Mean: {}", self.verification.mean));
        lines.push(format!(
            "Variance (unbiased): {}",
            self.verification.variance_unbiased
        ));
        lines
    }
}

/// Mean and unbiased variance recomputed from scratch, without going through
/// `statlab-stats`, so the report carries an independent cross-check.
#[derive(Debug, Clone)]
struct Verification {
    mean: f64,
    variance_unbiased: f64,
}

impl Verification {
    /// Requires `sample.len() >= 2`; callers guard this via the summary.
    #[expect(clippy::cast_precision_loss)]
    fn of(sample: &[i64]) -> Self {
        let n = sample.len();
        let mean = sample.iter().map(|&x| x as f64).sum::<f64>() / n as f64;
        let variance_unbiased = sample
            .iter()
            .map(|&x| (x as f64 - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;

        Self {
            mean,
            variance_unbiased,
        }
    }
}
