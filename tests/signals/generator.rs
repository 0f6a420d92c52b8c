use etf_signals::config::{PipelinePolicy, UnknownRegimePolicy};
use etf_signals::indicators::compute_indicators_default;
use etf_signals::models::{RegimeLabel, Signal};
use etf_signals::signals::{buy_condition, generate_signals, sell_condition};

use crate::support::{falling, rising, series, wave};

#[test]
fn test_buy_and_sell_masks_never_overlap() {
    let frame = compute_indicators_default(&series(&wave(250)));
    for row in frame.iter() {
        assert!(!(buy_condition(row) && sell_condition(row)), "bar {}", row.index);
    }
}

#[test]
fn test_signals_follow_masks() {
    let frame = compute_indicators_default(&series(&wave(250)));
    let signals = generate_signals(&frame, RegimeLabel::Bullish, &PipelinePolicy::default());

    assert_eq!(signals.len(), frame.len());
    for row in signals.rows() {
        let expected = if sell_condition(&row.indicators) {
            Signal::Sell
        } else if buy_condition(&row.indicators) {
            Signal::Buy
        } else {
            Signal::Hold
        };
        assert_eq!(row.signal, expected, "bar {}", row.indicators.index);
    }
}

#[test]
fn test_bearish_regime_blocks_buys_only() {
    let policy = PipelinePolicy::default();
    for closes in [rising(60), wave(250)] {
        let frame = compute_indicators_default(&series(&closes));
        let bullish = generate_signals(&frame, RegimeLabel::Bullish, &policy);
        let bearish = generate_signals(&frame, RegimeLabel::Bearish, &policy);

        for (b, s) in bullish.rows().iter().zip(bearish.rows()) {
            match b.signal {
                Signal::Buy => assert_eq!(s.signal, Signal::Hold),
                other => assert_eq!(s.signal, other),
            }
        }
        assert_eq!(bearish.count(Signal::Buy), 0);
    }
}

#[test]
fn test_neutral_regime_allows_buys() {
    let frame = compute_indicators_default(&series(&rising(60)));
    let signals = generate_signals(&frame, RegimeLabel::Neutral, &PipelinePolicy::default());
    assert!(signals.count(Signal::Buy) > 0);
}

#[test]
fn test_sell_ignores_regime() {
    let frame = compute_indicators_default(&series(&falling(60)));
    for regime in [
        RegimeLabel::Bullish,
        RegimeLabel::Neutral,
        RegimeLabel::Bearish,
        RegimeLabel::Unknown,
    ] {
        let signals = generate_signals(&frame, regime, &PipelinePolicy::default());
        assert_eq!(signals.last_signal(), Signal::Sell);
        assert_eq!(signals.count(Signal::Sell), 60 - 14);
    }
}

#[test]
fn test_unknown_regime_policies() {
    let frame = compute_indicators_default(&series(&rising(60)));

    let fail_safe = generate_signals(&frame, RegimeLabel::Unknown, &PipelinePolicy::default());
    assert_eq!(fail_safe.count(Signal::Buy), 0);
    assert_eq!(fail_safe.regime(), RegimeLabel::Unknown);

    let open = PipelinePolicy {
        unknown_regime: UnknownRegimePolicy::FailOpen,
        ..PipelinePolicy::default()
    };
    let fail_open = generate_signals(&frame, RegimeLabel::Unknown, &open);
    let bullish = generate_signals(&frame, RegimeLabel::Bullish, &open);
    assert_eq!(fail_open.signals(), bullish.signals());
}

#[test]
fn test_empty_frame() {
    let frame = compute_indicators_default(&series(&[]));
    let signals = generate_signals(&frame, RegimeLabel::Bullish, &PipelinePolicy::default());
    assert!(signals.is_empty());
    assert_eq!(signals.last_signal(), Signal::Hold);
}
