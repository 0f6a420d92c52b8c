use etf_signals::config::{FlatRsiPolicy, PipelinePolicy};
use etf_signals::indicators::{compute_indicators, compute_indicators_default};

use crate::support::{falling, rising, series, wave};

#[test]
fn test_emas_bounded_by_seen_closes() {
    let closes = wave(120);
    let frame = compute_indicators_default(&series(&closes));

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (row, &close) in frame.iter().zip(&closes) {
        lo = lo.min(close);
        hi = hi.max(close);
        for ema in [row.ema20.unwrap(), row.ema50.unwrap()] {
            assert!(ema >= lo - 1e-9 && ema <= hi + 1e-9, "ema {} outside [{}, {}]", ema, lo, hi);
        }
    }
}

#[test]
fn test_rsi_within_bounds() {
    for closes in [wave(200), rising(60), falling(60)] {
        let frame = compute_indicators_default(&series(&closes));
        for rsi in frame.iter().filter_map(|r| r.rsi14) {
            assert!(!rsi.is_nan());
            assert!((0.0..=100.0).contains(&rsi), "rsi out of range: {}", rsi);
        }
    }
}

#[test]
fn test_rsi_extremes_on_monotonic_series() {
    let up = compute_indicators_default(&series(&rising(30)));
    let down = compute_indicators_default(&series(&falling(30)));
    assert_eq!(up.last().unwrap().rsi14, Some(100.0));
    assert_eq!(down.last().unwrap().rsi14, Some(0.0));
}

#[test]
fn test_rsi_defined_from_bar_fourteen() {
    let frame = compute_indicators_default(&series(&wave(40)));
    for row in frame.iter() {
        assert_eq!(row.rsi14.is_some(), row.index >= 14, "bar {}", row.index);
    }
}

#[test]
fn test_compute_is_idempotent() {
    let s = series(&wave(90));
    let policy = PipelinePolicy {
        flat_rsi: FlatRsiPolicy::Zero,
        ..PipelinePolicy::default()
    };
    let first = compute_indicators(&s, &policy);
    let second = compute_indicators(&s, &policy);
    assert_eq!(first, second);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.ema20.map(f64::to_bits), b.ema20.map(f64::to_bits));
        assert_eq!(a.rsi14.map(f64::to_bits), b.rsi14.map(f64::to_bits));
        assert_eq!(a.macd.map(f64::to_bits), b.macd.map(f64::to_bits));
    }
}

#[test]
fn test_warm_flag() {
    let frame = compute_indicators_default(&series(&wave(60)));
    assert!(!frame.rows()[18].is_warm(20));
    assert!(frame.rows()[19].is_warm(20));
    assert!(!frame.rows()[48].is_warm(50));
    assert!(frame.rows()[49].is_warm(50));
}

#[test]
fn test_volume_ratio_column() {
    use chrono::Duration;
    use etf_signals::models::{Bar, PriceSeries};

    let bars: Vec<Bar> = (0..25)
        .map(|i| {
            let volume = if i == 24 { 2000.0 } else { 1000.0 };
            Bar::new(crate::support::start_date() + Duration::days(i), 50.0).with_volume(volume)
        })
        .collect();
    let frame = compute_indicators_default(&PriceSeries::new(bars).unwrap());

    assert!(frame.rows()[..19].iter().all(|r| r.volume_ratio.is_none()));
    assert_eq!(frame.rows()[19].volume_ratio, Some(1.0));
    // window mean: (19 * 1000 + 2000) / 20 = 1050
    let last = frame.last().unwrap().volume_ratio.unwrap();
    assert!((last - 2000.0 / 1050.0).abs() < 1e-12);
}
