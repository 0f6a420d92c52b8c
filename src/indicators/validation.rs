use crate::indicators::error::SeriesError;
use crate::models::series::Bar;

fn validate_finite(value: f64, field: &'static str, index: usize) -> Result<(), SeriesError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SeriesError::NonFiniteValue { field, index })
    }
}

pub fn validate_bar(bar: &Bar, index: usize) -> Result<(), SeriesError> {
    validate_finite(bar.close, "close", index)?;

    for (field, value) in [("open", bar.open), ("high", bar.high), ("low", bar.low)] {
        if let Some(v) = value {
            validate_finite(v, field, index)?;
        }
    }

    if let Some(volume) = bar.volume {
        validate_finite(volume, "volume", index)?;
        if volume < 0.0 {
            return Err(SeriesError::NegativeVolume { index });
        }
    }

    Ok(())
}

/// Check every bar and the strict ordering of timestamps.
pub fn validate_bars(bars: &[Bar]) -> Result<(), SeriesError> {
    for (index, bar) in bars.iter().enumerate() {
        validate_bar(bar, index)?;

        if index > 0 {
            let previous = bars[index - 1].timestamp;
            if bar.timestamp <= previous {
                return Err(SeriesError::NonIncreasingTimestamp {
                    index,
                    previous,
                    current: bar.timestamp,
                });
            }
        }
    }
    Ok(())
}
