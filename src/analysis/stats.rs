//! Statistics wrapper
//!
//! Thin layer over statrs distributions computing the three analyses the
//! toolkit offers: per-column summaries, Pearson correlation matrices, and
//! two-sample hypothesis tests. Summary semantics follow the conventional
//! sample-adjusted estimators (ddof=1 std, adjusted Fisher-Pearson skewness,
//! excess kurtosis).

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};
use std::str::FromStr;

use crate::analysis::{AnalysisError, Dataset};

/// Fixed significance threshold. Not configurable.
pub const ALPHA: f64 = 0.05;

/// Per-column descriptive summary
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; None for fewer than 2 observations
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Adjusted Fisher-Pearson skewness; None for fewer than 3 observations
    pub skewness: Option<f64>,
    /// Sample excess kurtosis; None for fewer than 4 observations
    pub kurtosis: Option<f64>,
}

/// Pairwise Pearson correlation matrix over the selected columns
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `columns.len()` square
    pub values: Vec<Vec<f64>>,
}

/// Supported two-sample hypothesis tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    /// Independent two-sample t-test with pooled variance
    TTest,
    /// Mann-Whitney U test (asymptotic, tie-corrected)
    MannWhitney,
}

impl FromStr for TestKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t-test" | "ttest" => Ok(TestKind::TTest),
            "mann-whitney" | "mannwhitney" | "u-test" => Ok(TestKind::MannWhitney),
            other => Err(AnalysisError::UnsupportedTestKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestKind::TTest => write!(f, "t-test"),
            TestKind::MannWhitney => write!(f, "mann-whitney"),
        }
    }
}

/// Result of a two-sample hypothesis test
#[derive(Debug, Clone)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
    /// True iff `p_value < ALPHA`
    pub significant: bool,
}

impl TestOutcome {
    fn from_p(statistic: f64, p_value: f64) -> Self {
        Self {
            statistic,
            p_value,
            significant: p_value < ALPHA,
        }
    }
}

/// Compute descriptive summaries for the selected columns.
///
/// Non-numeric columns in the selection are skipped. Fails with
/// `InsufficientData` when the selection contains no numeric column.
pub fn describe(
    dataset: &Dataset,
    columns: &[String],
) -> Result<Vec<ColumnSummary>, AnalysisError> {
    let mut summaries = Vec::new();

    for column in columns {
        if !dataset.headers().contains(column) {
            return Err(AnalysisError::UnknownColumn(column.clone()));
        }
        if !dataset.is_numeric(column) {
            continue;
        }
        let values = dataset.numeric_values(column)?;
        if values.is_empty() {
            continue;
        }
        summaries.push(summarize(column, &values));
    }

    if summaries.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "no numeric columns selected".to_string(),
        ));
    }
    Ok(summaries)
}

/// Pairwise Pearson correlation over the selected numeric columns.
///
/// Requires at least 2 numeric columns. The result is square and symmetric
/// with a unit diagonal.
pub fn correlate(
    dataset: &Dataset,
    columns: &[String],
) -> Result<CorrelationMatrix, AnalysisError> {
    for column in columns {
        if !dataset.headers().contains(column) {
            return Err(AnalysisError::UnknownColumn(column.clone()));
        }
    }

    let numeric: Vec<&String> = columns.iter().filter(|c| dataset.is_numeric(c)).collect();
    if numeric.len() < 2 {
        return Err(AnalysisError::InsufficientData(
            "correlation needs at least 2 numeric columns".to_string(),
        ));
    }

    let n = numeric.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            // Pair each column combination over its complete rows only, so
            // missing cells in one column never shift the other's values
            let (x, y) = dataset.paired_values(numeric[i], numeric[j])?;
            let r = pearson(&x, &y);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: numeric.into_iter().cloned().collect(),
        values,
    })
}

/// Run a two-sample hypothesis test. Both groups must be non-empty.
pub fn hypothesis_test(
    group_a: &[f64],
    group_b: &[f64],
    kind: TestKind,
) -> Result<TestOutcome, AnalysisError> {
    if group_a.is_empty() || group_b.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "both groups must be non-empty".to_string(),
        ));
    }

    match kind {
        TestKind::TTest => t_test(group_a, group_b),
        TestKind::MannWhitney => mann_whitney(group_a, group_b),
    }
}

fn summarize(column: &str, values: &[f64]) -> ColumnSummary {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let m2 = central_moment(values, mean, 2);
    let std = if n >= 2 {
        Some((m2 * n as f64 / (n as f64 - 1.0)).sqrt())
    } else {
        None
    };

    ColumnSummary {
        column: column.to_string(),
        count: n,
        mean,
        std,
        min: sorted[0],
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max: sorted[n - 1],
        skewness: skewness(values, mean, m2),
        kurtosis: kurtosis(values, mean, m2),
    }
}

fn central_moment(values: &[f64], mean: f64, order: u32) -> f64 {
    values
        .iter()
        .map(|v| (v - mean).powi(order as i32))
        .sum::<f64>()
        / values.len() as f64
}

/// Linear-interpolation percentile over pre-sorted values
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Adjusted Fisher-Pearson sample skewness (G1)
fn skewness(values: &[f64], mean: f64, m2: f64) -> Option<f64> {
    let n = values.len() as f64;
    if values.len() < 3 || m2 == 0.0 {
        return None;
    }
    let g1 = central_moment(values, mean, 3) / m2.powf(1.5);
    Some(g1 * (n * (n - 1.0)).sqrt() / (n - 2.0))
}

/// Sample excess kurtosis (G2)
fn kurtosis(values: &[f64], mean: f64, m2: f64) -> Option<f64> {
    let n = values.len() as f64;
    if values.len() < 4 || m2 == 0.0 {
        return None;
    }
    let g2 = central_moment(values, mean, 4) / (m2 * m2) - 3.0;
    Some(((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0)))
}

/// Pearson r over two equal-length, row-aligned series
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    cov / (var_x * var_y).sqrt()
}

/// Independent two-sample t-test with pooled variance, two-sided
fn t_test(a: &[f64], b: &[f64]) -> Result<TestOutcome, AnalysisError> {
    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let df = n1 + n2 - 2.0;
    if df < 1.0 {
        return Err(AnalysisError::InsufficientData(
            "t-test needs at least 3 observations in total".to_string(),
        ));
    }

    let mean1 = a.iter().sum::<f64>() / n1;
    let mean2 = b.iter().sum::<f64>() / n2;
    let ss1: f64 = a.iter().map(|v| (v - mean1).powi(2)).sum();
    let ss2: f64 = b.iter().map(|v| (v - mean2).powi(2)).sum();

    let pooled = (ss1 + ss2) / df;
    let se = (pooled * (1.0 / n1 + 1.0 / n2)).sqrt();
    if se == 0.0 {
        return Err(AnalysisError::InsufficientData(
            "zero variance in both groups".to_string(),
        ));
    }

    let t = (mean1 - mean2) / se;
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| AnalysisError::InsufficientData(e.to_string()))?;
    let p = (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0);

    Ok(TestOutcome::from_p(t, p))
}

/// Mann-Whitney U, normal approximation with tie and continuity corrections,
/// two-sided. The statistic is U for the first group.
fn mann_whitney(a: &[f64], b: &[f64]) -> Result<TestOutcome, AnalysisError> {
    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let n = n1 + n2;

    let ranks = average_ranks(a, b);
    let r1: f64 = ranks[..a.len()].iter().sum();
    let u1 = r1 - n1 * (n1 + 1.0) / 2.0;
    let u2 = n1 * n2 - u1;

    let tie_term = tie_correction(a, b);
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if variance <= 0.0 {
        return Err(AnalysisError::InsufficientData(
            "all observations are identical".to_string(),
        ));
    }

    let mu = n1 * n2 / 2.0;
    let z = (u1.max(u2) - mu - 0.5) / variance.sqrt();
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AnalysisError::InsufficientData(e.to_string()))?;
    let p = (2.0 * (1.0 - normal.cdf(z))).clamp(0.0, 1.0);

    Ok(TestOutcome::from_p(u1, p))
}

/// Ranks of the pooled sample (1-based), ties given their average rank.
/// Ranks for `a` come first, then `b`.
fn average_ranks(a: &[f64], b: &[f64]) -> Vec<f64> {
    let pooled: Vec<f64> = a.iter().chain(b.iter()).copied().collect();
    let mut order: Vec<usize> = (0..pooled.len()).collect();
    order.sort_by(|&i, &j| {
        pooled[i]
            .partial_cmp(&pooled[j])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; pooled.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && pooled[order[j + 1]] == pooled[order[i]] {
            j += 1;
        }
        // positions i..=j share the average of ranks i+1..=j+1
        let avg = (i + j + 2) as f64 / 2.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg;
        }
        i = j + 1;
    }
    ranks
}

/// Sum of t^3 - t over tie groups in the pooled sample
fn tie_correction(a: &[f64], b: &[f64]) -> f64 {
    let mut pooled: Vec<f64> = a.iter().chain(b.iter()).copied().collect();
    pooled.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));

    let mut term = 0.0;
    let mut i = 0;
    while i < pooled.len() {
        let mut j = i;
        while j + 1 < pooled.len() && pooled[j + 1] == pooled[i] {
            j += 1;
        }
        let t = (j - i + 1) as f64;
        term += t * t * t - t;
        i = j + 1;
    }
    term
}
