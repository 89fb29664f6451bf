//! Statistical utilities for the Statlab project.
//!
//! This crate provides the calculations behind the sample report:
//!
//! - **Descriptive statistics**: Calculate the mean and both variance
//!   estimators (biased and unbiased) for a sample
//! - **Frequency tabulation**: Count occurrences of each distinct value and
//!   list the values that repeat
//!
//! # Modules
//!
//! - [`descriptive`]: Mean and variance computations with sample-size guards
//! - [`frequency`]: Value-count tables with an ascending repeating-values view
//!
//! # Examples
//!
//! ## Computing summary statistics
//!
//! ```
//! use statlab_stats::descriptive::SampleSummary;
//!
//! let summary = SampleSummary::new([1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
//! assert_eq!(summary.mean, 1.8);
//! ```
//!
//! ## Tabulating repeating values
//!
//! ```
//! use statlab_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::from_values([1, 1, 2, 2, 3]);
//! assert_eq!(table.repeating_len(), 2);
//! ```

pub mod descriptive;
pub mod frequency;
