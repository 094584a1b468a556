//! Color frequency table
//!
//! One-pass tally of exact RGB triples. Each color remembers the order in
//! which it was first seen so that equal counts rank deterministically by
//! first raster-order appearance.

use super::Rgb;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: u64,
    first_seen: u64,
}

/// Color frequency table with stable tie ordering
#[derive(Debug, Default)]
pub struct ColorHistogram {
    counts: HashMap<Rgb, Entry>,
    recorded: u64,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a color
    pub fn record(&mut self, color: Rgb) {
        let next_index = self.counts.len() as u64;
        let entry = self.counts.entry(color).or_insert(Entry {
            count: 0,
            first_seen: next_index,
        });
        entry.count += 1;
        self.recorded += 1;
    }

    /// Number of distinct colors seen
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total occurrences recorded
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent colors with their counts
    ///
    /// Ordered by descending count; equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<(Rgb, u64)> {
        let mut entries: Vec<(Rgb, Entry)> =
            self.counts.iter().map(|(color, entry)| (*color, *entry)).collect();

        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries.truncate(n);

        entries
            .into_iter()
            .map(|(color, entry)| (color, entry.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_histogram() {
        let histogram = ColorHistogram::new();

        assert!(histogram.is_empty());
        assert_eq!(histogram.distinct(), 0);
        assert_eq!(histogram.recorded(), 0);
        assert!(histogram.top(5).is_empty());
    }

    #[test]
    fn test_counts_accumulate() {
        let mut histogram = ColorHistogram::new();
        let red = Rgb::new(255, 0, 0);

        for _ in 0..3 {
            histogram.record(red);
        }

        assert_eq!(histogram.distinct(), 1);
        assert_eq!(histogram.recorded(), 3);
        assert_eq!(histogram.top(5), vec![(red, 3)]);
    }

    #[test]
    fn test_top_orders_by_count() {
        let mut histogram = ColorHistogram::new();
        let red = Rgb::new(255, 0, 0);
        let green = Rgb::new(0, 255, 0);

        for _ in 0..5 {
            histogram.record(green);
        }
        for _ in 0..10 {
            histogram.record(red);
        }

        assert_eq!(histogram.top(5), vec![(red, 10), (green, 5)]);
    }

    #[test]
    fn test_ties_rank_by_first_seen() {
        let mut histogram = ColorHistogram::new();
        let first = Rgb::new(10, 20, 30);
        let second = Rgb::new(40, 50, 60);
        let third = Rgb::new(70, 80, 90);

        // Interleave so insertion order differs from recording bursts
        histogram.record(first);
        histogram.record(second);
        histogram.record(third);
        histogram.record(third);
        histogram.record(second);
        histogram.record(first);

        assert_eq!(
            histogram.top(5),
            vec![(first, 2), (second, 2), (third, 2)]
        );
    }

    #[test]
    fn test_top_truncates() {
        let mut histogram = ColorHistogram::new();

        for i in 0..8u8 {
            let color = Rgb::new(i, i, i);
            for _ in 0..(8 - i) {
                histogram.record(color);
            }
        }

        let top = histogram.top(5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0], (Rgb::new(0, 0, 0), 8));
        assert_eq!(top[4], (Rgb::new(4, 4, 4), 4));
    }
}
