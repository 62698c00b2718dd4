// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integer sequence helpers shared by the pitch algebra and the search engine.
//!
//! Everything here is a pure function over slices. The cyclic variants treat
//! a sorted sequence of residues as points on a circle whose circumference is
//! the modulus.

/// Differences between adjacent elements
pub fn diff(seq: &[i64]) -> Vec<i64> {
    seq.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Running sum starting at `start` (the inverse of [`diff`])
///
/// The result is one element longer than `seq`.
pub fn cumsum(seq: &[i64], start: i64) -> Vec<i64> {
    let mut sums = Vec::with_capacity(seq.len() + 1);
    let mut acc = start;
    sums.push(acc);
    for &value in seq {
        acc += value;
        sums.push(acc);
    }
    sums
}

/// Differences around a circle of circumference `modulus`, rotated so the
/// first interval leaves the element at `start_index`
///
/// Expects `cycle` to be sorted with every element in `[0, modulus)`.
pub fn cycle_diff(cycle: &[i64], modulus: i64, start_index: usize) -> Vec<i64> {
    let (Some(&first), Some(&last)) = (cycle.first(), cycle.last()) else {
        return Vec::new();
    };

    let mut intervals = diff(cycle);
    intervals.push(first + modulus - last);
    rotate(&intervals, start_index as i64)
}

/// Cumulative sum of a circular interval sequence, taken modulo the sum of
/// the intervals and returned sorted
pub fn cycle_cumsum(cycle: &[i64], start: i64) -> Vec<i64> {
    let modulus: i64 = cycle.iter().sum();
    if cycle.is_empty() || modulus <= 0 {
        return Vec::new();
    }

    let mut acc = start.rem_euclid(modulus);
    let mut sums = Vec::with_capacity(cycle.len());
    sums.push(acc);
    for &interval in &cycle[..cycle.len() - 1] {
        acc = (acc + interval).rem_euclid(modulus);
        sums.push(acc);
    }
    sums.sort_unstable();
    sums
}

/// Left rotation by `n` places; negative `n` rotates right
pub fn rotate<T: Clone>(seq: &[T], n: i64) -> Vec<T> {
    if seq.is_empty() {
        return Vec::new();
    }

    let split = n.rem_euclid(seq.len() as i64) as usize;
    let mut rotated = seq[split..].to_vec();
    rotated.extend_from_slice(&seq[..split]);
    rotated
}

/// Shortest prefix that the whole sequence keeps repeating
///
/// The final repetition may be cut short, so `[1, 2, 1, 2, 1]` yields
/// `[1, 2]`. A sequence with no repetition is returned whole.
pub fn repeating_subseq<T: PartialEq + Clone>(seq: &[T]) -> Vec<T> {
    let period = (1..=seq.len())
        .find(|&p| (p..seq.len()).all(|i| seq[i] == seq[i - p]))
        .unwrap_or(seq.len());
    seq[..period].to_vec()
}

/// Length of the shortest unit that tiles a circular sequence exactly
///
/// Unlike [`repeating_subseq`] the unit length always divides the length of
/// the sequence.
pub fn cyclic_period<T: PartialEq>(seq: &[T]) -> usize {
    let len = seq.len();
    (1..=len)
        .filter(|p| len % p == 0)
        .find(|&p| (p..len).all(|i| seq[i] == seq[i - p]))
        .unwrap_or(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate() {
        assert_eq!(rotate(&[0, 4, 6, 9, 2], 2), vec![6, 9, 2, 0, 4]);
        assert_eq!(rotate(&[0, 4, 6, 9, 2], -1), vec![2, 0, 4, 6, 9]);
        assert_eq!(rotate::<i64>(&[], 3), Vec::<i64>::new());
    }

    #[test]
    fn test_diff() {
        assert_eq!(diff(&[0, 4, 8, 22, 11]), vec![4, 4, 14, -11]);
        assert!(diff(&[5]).is_empty());
    }

    #[test]
    fn test_cumsum() {
        assert_eq!(cumsum(&[3, 2, 7, 5], 3), vec![3, 6, 8, 15, 20]);
    }

    #[test]
    fn test_cycle_diff() {
        assert_eq!(cycle_diff(&[1, 4, 6, 8, 10], 12, 2), vec![2, 2, 3, 3, 2]);
    }

    #[test]
    fn test_cycle_cumsum() {
        assert_eq!(cycle_cumsum(&[2, 2, 3, 2], 3), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_repeating_subseq() {
        let seq = [1, 2, 3, 1, 2, 7, 1, 2, 3, 1, 2, 7, 1, 2, 3];
        assert_eq!(repeating_subseq(&seq), vec![1, 2, 3, 1, 2, 7]);
        assert_eq!(repeating_subseq(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_cyclic_period() {
        assert_eq!(cyclic_period(&[2, 1, 2, 1, 2, 1, 2, 1]), 2);
        assert_eq!(cyclic_period(&[2, 2, 1, 2, 2, 2, 1]), 7);
        assert_eq!(cyclic_period(&[2, 2, 2, 2, 2, 2]), 1);
    }
}
