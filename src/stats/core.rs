// src/stats/core.rs

/// Arithmetic mean. Returns NaN for an empty slice.
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance (divisor `n - 1`)
#[inline]
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    let sum_sq: f64 = data.iter().map(|&v| (v - m) * (v - m)).sum();
    sum_sq / (n - 1) as f64
}

/// Sample standard deviation
#[inline]
pub fn stddev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Population central moments about the mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMoments {
    pub n: usize,
    pub mean: f64,
    pub m2: f64,
    pub m3: f64,
    pub m4: f64,
}

impl CentralMoments {
    /// Biased (population) skewness `g1 = m3 / m2^1.5`
    #[inline]
    pub fn g1(&self) -> f64 {
        self.m3 / self.m2.powf(1.5)
    }

    /// Pearson kurtosis `b2 = m4 / m2^2` (3.0 for a normal)
    #[inline]
    pub fn b2(&self) -> f64 {
        self.m4 / (self.m2 * self.m2)
    }
}

/// Single pass over the deviations for the second to fourth moments
pub fn central_moments(data: &[f64]) -> CentralMoments {
    let n = data.len();
    let m = mean(data);

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &v in data {
        let diff = v - m;
        let diff2 = diff * diff;
        m2 += diff2;
        m3 += diff * diff2;
        m4 += diff2 * diff2;
    }

    let nf = n as f64;
    CentralMoments {
        n,
        mean: m,
        m2: m2 / nf,
        m3: m3 / nf,
        m4: m4 / nf,
    }
}

/// Percentile of already ascending data using linear interpolation
///
/// `p` is a fraction in `[0, 1]`. Rank is `p * (n - 1)`; a fractional rank
/// interpolates between the two bracketing order statistics. The result
/// never leaves `[sorted[lo], sorted[hi]]`, so tied neighbours return that
/// value exactly.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty() && (0.0..=1.0).contains(&p));
    let idx = p * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let (a, b) = (sorted[lo], sorted[hi]);
        let w = idx - lo as f64;
        (a + w * (b - a)).max(a).min(b)
    }
}

/// Percentile using linear interpolation (sorts a copy)
///
/// # Panics
///
/// If `data` is empty or `p` lies outside `[0, 1]`.
pub fn percentile(data: &[f64], p: f64) -> f64 {
    assert!(!data.is_empty() && (0.0..=1.0).contains(&p));
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    percentile_sorted(&sorted, p)
}

/// Returns min and max in one pass
#[inline]
pub fn minmax(data: &[f64]) -> (f64, f64) {
    data.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}
