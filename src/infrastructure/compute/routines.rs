use serde::Serialize;

/// All primes up to and including `limit`, via the sieve of Eratosthenes.
#[must_use]
pub fn find_primes(limit: usize) -> Vec<usize> {
    if limit < 2 {
        return Vec::new();
    }

    let mut is_composite = vec![false; limit + 1];
    let mut i = 2usize;
    while i * i <= limit {
        if !is_composite[i] {
            let mut multiple = i * i;
            while multiple <= limit {
                is_composite[multiple] = true;
                multiple += i;
            }
        }
        i += 1;
    }

    (2..=limit).filter(|&n| !is_composite[n]).collect()
}

/// Summary statistics over a numeric series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: usize,
}

/// Compute mean, median, min, max, sum, and count.
///
/// The empty series degenerates rather than erroring: mean and median are
/// NaN, min/max are ±Infinity (the fold identities).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summary_stats(data: &[f64]) -> SummaryStats {
    let count = data.len();
    let sum: f64 = data.iter().sum();
    let mean = sum / count as f64;
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let median = if count == 0 {
        f64::NAN
    } else {
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = count / 2;
        if count % 2 == 0 {
            f64::midpoint(sorted[mid - 1], sorted[mid])
        } else {
            sorted[mid]
        }
    };

    SummaryStats {
        mean,
        median,
        min,
        max,
        sum,
        count,
    }
}

/// Naive recursive Fibonacci. Intentionally exponential and unmemoized: the
/// worker's worst-case CPU-load demonstration.
#[must_use]
pub fn fibonacci(n: u32) -> u64 {
    if n < 2 {
        u64::from(n)
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}
