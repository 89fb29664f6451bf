//! Frequency tabulation for a sample.
//!
//! Counts how often each distinct value occurs in a sample and exposes a
//! filtered view of the values that repeat. Counts are kept in a
//! `BTreeMap`, so all iteration is ascending by value.

use std::collections::BTreeMap;

/// A mapping from distinct sample value to occurrence count.
///
/// # Examples
///
/// ```
/// use statlab_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::from_values([1, 1, 2, 2, 3]);
/// assert_eq!(table.total(), 5);
/// assert_eq!(table.count(1), 2);
/// assert_eq!(table.count(3), 1);
///
/// // Only values occurring more than once, ascending:
/// let repeating: Vec<_> = table.repeating().collect();
/// assert_eq!(repeating, [(1, 2), (2, 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable<K> {
    counts: BTreeMap<K, usize>,
}

impl<K> FrequencyTable<K>
where
    K: Ord + Copy,
{
    /// Builds a frequency table by counting occurrences of each value.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::frequency::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_values([5, 5, 5]);
    /// assert_eq!(table.count(5), 3);
    /// assert_eq!(table.distinct_len(), 1);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut counts = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns the occurrence count of `value`, or `0` if it never occurs.
    #[must_use]
    pub fn count(&self, value: K) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Returns an iterator over all `(value, count)` pairs, ascending by value.
    pub fn counts(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// Returns an iterator over the `(value, count)` pairs with count > 1,
    /// ascending by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlab_stats::frequency::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_values([3, 1, 3, 2]);
    /// let repeating: Vec<_> = table.repeating().collect();
    /// assert_eq!(repeating, [(3, 2)]);
    /// ```
    pub fn repeating(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.counts().filter(|&(_, count)| count > 1)
    }

    /// Returns the number of distinct values that occur more than once.
    #[must_use]
    pub fn repeating_len(&self) -> usize {
        self.repeating().count()
    }

    /// Returns the number of distinct values in the table.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Returns the sum of all counts, which equals the sample size.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns `true` if the table was built from an empty sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample() {
        let table = FrequencyTable::<i64>::from_values([]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.repeating_len(), 0);
        assert_eq!(table.count(0), 0);
    }

    #[test]
    fn test_reference_sample() {
        let table = FrequencyTable::from_values([1, 1, 2, 2, 3]);
        assert_eq!(table.total(), 5);
        assert_eq!(table.distinct_len(), 3);
        assert_eq!(table.repeating_len(), 2);

        let repeating: Vec<_> = table.repeating().collect();
        assert_eq!(repeating, [(1, 2), (2, 2)]);
    }

    #[test]
    fn test_counts_sum_to_sample_size() {
        let values = [9, 4, 4, 7, 9, 9, 1, 4];
        let table = FrequencyTable::from_values(values);
        assert_eq!(table.total(), values.len());
        assert_eq!(table.counts().map(|(_, count)| count).sum::<usize>(), values.len());
    }

    #[test]
    fn test_repeating_excludes_singletons() {
        let table = FrequencyTable::from_values([9, 4, 4, 7, 9, 9, 1, 4]);
        assert!(table.repeating().all(|(_, count)| count > 1));
        assert_eq!(table.count(7), 1);
        assert!(!table.repeating().any(|(value, _)| value == 7));
    }

    #[test]
    fn test_iteration_is_ascending() {
        let table = FrequencyTable::from_values([30, 10, 20, 10, 30, 30]);
        let values: Vec<_> = table.counts().map(|(value, _)| value).collect();
        assert_eq!(values, [10, 20, 30]);

        let repeating: Vec<_> = table.repeating().collect();
        assert_eq!(repeating, [(10, 2), (30, 3)]);
    }

    #[test]
    fn test_no_repeats() {
        let table = FrequencyTable::from_values([1, 2, 3, 4]);
        assert_eq!(table.repeating_len(), 0);
        assert_eq!(table.repeating().count(), 0);
    }

    #[test]
    fn test_negative_values() {
        let table = FrequencyTable::from_values([-3, -3, 0, 2]);
        let repeating: Vec<_> = table.repeating().collect();
        assert_eq!(repeating, [(-3, 2)]);
    }
}
