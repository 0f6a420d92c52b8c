//! Volume ratio: today's volume against its trailing average.

use crate::common::math;

/// `volume / mean(volume over the trailing period)`, window including the
/// current bar.
///
/// `None` during the first `period - 1` bars, when any volume in the
/// window is missing, or when the window average is zero.
pub fn calculate_volume_ratio(volumes: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; volumes.len()];
    if period == 0 {
        return result;
    }

    for end in (period.saturating_sub(1))..volumes.len() {
        let window = &volumes[end + 1 - period..=end];
        let Some(values) = window.iter().copied().collect::<Option<Vec<f64>>>() else {
            continue;
        };
        let Some(mean) = math::trailing_mean(&values, values.len() - 1, period) else {
            continue;
        };
        if mean > 0.0 {
            result[end] = Some(values[values.len() - 1] / mean);
        }
    }

    result
}
