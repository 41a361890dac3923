use std::collections::HashMap;
use std::fmt;

/// A focal length rounded to one decimal place, stored as tenths of a
/// millimetre so identical readings hash and compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocalLength(u32);

impl FocalLength {
    /// Rounds `mm * 10` to the nearest integer, halves away from zero, and
    /// keeps that as tenths. 0.15 becomes 0.2.
    ///
    /// Returns `None` for readings that are not finite or that round to zero
    /// or below, so a materialized sample is always positive.
    pub fn from_mm(mm: f64) -> Option<Self> {
        if !mm.is_finite() {
            return None;
        }
        let tenths = (mm * 10.0).round();
        if tenths < 1.0 || tenths > u32::MAX as f64 {
            return None;
        }
        Some(Self(tenths as u32))
    }

    pub fn from_tenths(tenths: u32) -> Option<Self> {
        (tenths > 0).then_some(Self(tenths))
    }

    pub fn tenths(self) -> u32 {
        self.0
    }

    pub fn millimeters(self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl fmt::Display for FocalLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Occurrence count per distinct focal length.
///
/// Carries no ordering of its own; [`axis`](Self::axis) and
/// [`entries`](Self::entries) sort at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocalLengthDistribution {
    counts: HashMap<FocalLength, usize>,
}

impl FocalLengthDistribution {
    pub fn aggregate<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = FocalLength>,
    {
        let mut counts: HashMap<FocalLength, usize> = HashMap::new();
        for sample in samples {
            *counts.entry(sample).or_default() += 1;
        }
        Self { counts }
    }

    /// Category and value axes for a bar chart: focal lengths ascending in
    /// millimetres, counts aligned by position.
    pub fn axis(&self) -> (Vec<f64>, Vec<usize>) {
        self.entries()
            .into_iter()
            .map(|(focal_length, count)| (focal_length.millimeters(), count))
            .unzip()
    }

    pub fn entries(&self) -> Vec<(FocalLength, usize)> {
        let mut entries: Vec<(FocalLength, usize)> =
            self.counts.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable_by_key(|(focal_length, _)| *focal_length);
        entries
    }

    pub fn get(&self, focal_length: FocalLength) -> Option<usize> {
        self.counts.get(&focal_length).copied()
    }

    /// Number of distinct focal lengths.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of photos that contributed a sample.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(values: &[f64]) -> Vec<FocalLength> {
        values
            .iter()
            .map(|v| FocalLength::from_mm(*v).unwrap())
            .collect()
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(FocalLength::from_mm(24.05).unwrap().tenths(), 241);
        assert_eq!(FocalLength::from_mm(24.04).unwrap().tenths(), 240);
        assert_eq!(FocalLength::from_mm(24.0).unwrap().millimeters(), 24.0);
        assert_eq!(FocalLength::from_mm(4.25).unwrap().tenths(), 43);
        assert_eq!(FocalLength::from_mm(0.15).unwrap().tenths(), 2);
    }

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        assert_eq!(FocalLength::from_mm(0.0), None);
        assert_eq!(FocalLength::from_mm(0.04), None);
        assert_eq!(FocalLength::from_mm(-35.0), None);
        assert_eq!(FocalLength::from_mm(f64::NAN), None);
        assert_eq!(FocalLength::from_mm(f64::INFINITY), None);
        assert_eq!(FocalLength::from_mm(0.05).unwrap().tenths(), 1);
        assert_eq!(FocalLength::from_tenths(0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FocalLength::from_mm(24.0).unwrap().to_string(), "24.0");
        assert_eq!(FocalLength::from_mm(4.3).unwrap().to_string(), "4.3");
        assert_eq!(FocalLength::from_mm(0.1).unwrap().to_string(), "0.1");
    }

    #[test]
    fn test_aggregate_empty() {
        let dist = FocalLengthDistribution::aggregate(Vec::new());
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0);
        assert_eq!(dist.axis(), (vec![], vec![]));
    }

    #[test]
    fn test_aggregate_groups_identical_values() {
        let dist = FocalLengthDistribution::aggregate(samples(&[24.0, 24.0, 50.0]));
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.get(FocalLength::from_mm(24.0).unwrap()), Some(2));
        assert_eq!(dist.get(FocalLength::from_mm(50.0).unwrap()), Some(1));
        assert_eq!(dist.get(FocalLength::from_mm(35.0).unwrap()), None);
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn test_axis_sorted_ascending_with_aligned_counts() {
        let dist = FocalLengthDistribution::aggregate(samples(&[50.0, 24.0, 35.0, 24.0]));
        let (keys, counts) = dist.axis();
        assert_eq!(keys, vec![24.0, 35.0, 50.0]);
        assert_eq!(counts, vec![2, 1, 1]);
    }

    #[test]
    fn test_axis_orders_numerically_not_lexically() {
        let dist = FocalLengthDistribution::aggregate(samples(&[105.0, 18.0, 9.5, 200.0]));
        let (keys, _) = dist.axis();
        assert_eq!(keys, vec![9.5, 18.0, 105.0, 200.0]);
    }

    #[test]
    fn test_sub_tenth_differences_share_a_bucket() {
        let dist = FocalLengthDistribution::aggregate(samples(&[23.96, 24.0, 24.04]));
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.get(FocalLength::from_mm(24.0).unwrap()), Some(3));
    }
}
