//! Descriptive statistics for summarizing a sample.
//!
//! Provides the arithmetic mean and both variance estimators (biased,
//! dividing by `n`, and unbiased, dividing by `n - 1` per Bessel's
//! correction), either as standalone functions or combined in
//! [`SampleSummary`].

/// Error returned when a sample is too small for the requested statistic.
///
/// The unbiased variance divides by `n - 1` and is undefined for samples
/// of fewer than two values; the mean and biased variance only require a
/// non-empty sample.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("sample must contain at least {required} values, got {actual}")]
pub struct InsufficientSampleError {
    /// Minimum sample size required by the statistic.
    pub required: usize,
    /// Actual sample size supplied.
    pub actual: usize,
}

/// Summary statistics computed in a single pass over a sample.
///
/// # Examples
///
/// ```
/// use statlab_stats::descriptive::SampleSummary;
///
/// let summary = SampleSummary::new([1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert_eq!(summary.count, 5);
/// assert_eq!(summary.mean, 1.8);
/// assert!((summary.variance_biased - 0.56).abs() < 1e-12);
/// assert!((summary.variance_unbiased - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    /// Number of values in the sample.
    pub count: usize,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// Variance estimator dividing by `n`.
    pub variance_biased: f64,
    /// Variance estimator dividing by `n - 1`.
    pub variance_unbiased: f64,
}

impl SampleSummary {
    /// Computes all summary statistics for a sample.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be
    ///   collected internally.
    ///
    /// # Returns
    ///
    /// * `Ok(SampleSummary)` - if the sample contains at least two values
    /// * `Err(InsufficientSampleError)` - otherwise, since the unbiased
    ///   variance is undefined for smaller samples
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::descriptive::SampleSummary;
    ///
    /// let summary = SampleSummary::new([2.0, 4.0]).unwrap();
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.variance_biased, 1.0);
    /// assert_eq!(summary.variance_unbiased, 2.0);
    ///
    /// assert!(SampleSummary::new([1.0]).is_err());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn new<I>(values: I) -> Result<Self, InsufficientSampleError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let count = values.len();
        if count < 2 {
            return Err(InsufficientSampleError {
                required: 2,
                actual: count,
            });
        }

        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let sum_sq_dev = sum_squared_deviations(&values, mean);

        Ok(Self {
            count,
            mean,
            variance_biased: sum_sq_dev / n,
            variance_unbiased: sum_sq_dev / (n - 1.0),
        })
    }
}

/// Computes the arithmetic mean of a sample.
///
/// # Arguments
///
/// * `values` - The sample values
///
/// # Returns
///
/// * `Ok(mean)` - for a non-empty sample
/// * `Err(InsufficientSampleError)` - for an empty sample
///
/// # Examples
///
/// ```
/// use statlab_stats::descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap(), 1.8);
/// assert!(mean(&[]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Result<f64, InsufficientSampleError> {
    if values.is_empty() {
        return Err(InsufficientSampleError {
            required: 1,
            actual: 0,
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the biased variance of a sample (dividing by `n`).
///
/// A single-value sample has no spread, so its biased variance is `0.0`.
///
/// # Arguments
///
/// * `values` - The sample values
///
/// # Returns
///
/// * `Ok(variance)` - for a non-empty sample
/// * `Err(InsufficientSampleError)` - for an empty sample
///
/// # Examples
///
/// ```
/// use statlab_stats::descriptive::variance_biased;
///
/// let variance = variance_biased(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert!((variance - 0.56).abs() < 1e-12);
///
/// assert_eq!(variance_biased(&[42.0]).unwrap(), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn variance_biased(values: &[f64]) -> Result<f64, InsufficientSampleError> {
    let mean = mean(values)?;
    Ok(sum_squared_deviations(values, mean) / values.len() as f64)
}

/// Computes the unbiased variance of a sample (dividing by `n - 1`,
/// Bessel's correction).
///
/// # Arguments
///
/// * `values` - The sample values
///
/// # Returns
///
/// * `Ok(variance)` - for a sample of at least two values
/// * `Err(InsufficientSampleError)` - otherwise
///
/// # Examples
///
/// ```
/// use statlab_stats::descriptive::variance_unbiased;
///
/// let variance = variance_unbiased(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert!((variance - 0.7).abs() < 1e-12);
///
/// assert!(variance_unbiased(&[42.0]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn variance_unbiased(values: &[f64]) -> Result<f64, InsufficientSampleError> {
    if values.len() < 2 {
        return Err(InsufficientSampleError {
            required: 2,
            actual: values.len(),
        });
    }
    let mean = mean(values)?;
    Ok(sum_squared_deviations(values, mean) / (values.len() - 1) as f64)
}

fn sum_squared_deviations(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
}
