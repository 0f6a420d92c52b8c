/// Smoothing factor for an EMA of the given span: `2 / (period + 1)`.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Advance an EMA by one value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    previous + ema_alpha(period) * (value - previous)
}

/// Warm EMA over `values`, seeded with the first value and defined at
/// every position. Returns an empty `Vec` for empty input or a zero period.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&seed) = values.first() else {
        return Vec::new();
    };
    if period == 0 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(values.len());
    let mut previous = seed;
    result.push(seed);

    for &value in &values[1..] {
        previous = ema_from_previous(value, previous, period);
        result.push(previous);
    }

    result
}

/// Simple mean of the `period` values ending at `end` (inclusive).
///
/// `None` when the window does not fit inside `values`.
pub fn trailing_mean(values: &[f64], end: usize, period: usize) -> Option<f64> {
    if period == 0 || end >= values.len() || end + 1 < period {
        return None;
    }
    let window = &values[end + 1 - period..=end];
    Some(window.iter().sum::<f64>() / period as f64)
}
