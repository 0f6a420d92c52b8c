use etf_signals::models::RegimeLabel;
use etf_signals::regime::{assess_regime, assess_regime_detailed};

use crate::support::frame_with_last;

#[test]
fn test_three_votes_bullish() {
    let frame = frame_with_last(20, Some(70.0), 101.0, 100.0, 0.4);
    assert_eq!(assess_regime(&frame), RegimeLabel::Bullish);
}

#[test]
fn test_two_votes_bullish() {
    // rsi and ema trend, macd negative
    let frame = frame_with_last(20, Some(60.0), 101.0, 100.0, -0.1);
    assert_eq!(assess_regime(&frame), RegimeLabel::Bullish);
    // ema trend and macd, rsi weak
    let frame = frame_with_last(20, Some(40.0), 101.0, 100.0, 0.1);
    assert_eq!(assess_regime(&frame), RegimeLabel::Bullish);
}

#[test]
fn test_one_vote_neutral() {
    let frame = frame_with_last(20, Some(60.0), 99.0, 100.0, -0.1);
    assert_eq!(assess_regime(&frame), RegimeLabel::Neutral);
    let frame = frame_with_last(20, Some(50.0), 99.0, 100.0, 0.1);
    assert_eq!(assess_regime(&frame), RegimeLabel::Neutral);
}

#[test]
fn test_no_votes_bearish() {
    let frame = frame_with_last(20, Some(50.0), 99.0, 100.0, -0.1);
    assert_eq!(assess_regime(&frame), RegimeLabel::Bearish);
}

#[test]
fn test_thresholds_are_strict() {
    // rsi == 55, ema20 == ema50, macd == 0: nothing counts
    let frame = frame_with_last(20, Some(55.0), 100.0, 100.0, 0.0);
    assert_eq!(assess_regime(&frame), RegimeLabel::Bearish);
}

#[test]
fn test_votes_reported() {
    let frame = frame_with_last(25, Some(60.0), 99.0, 100.0, 0.2);
    let assessment = assess_regime_detailed(&frame);
    let votes = assessment.votes.unwrap();
    assert!(votes.rsi_strong);
    assert!(!votes.ema_uptrend);
    assert!(votes.macd_positive);
    assert_eq!(votes.count(), 2);
    assert_eq!(assessment.label, RegimeLabel::Bullish);
    assert_eq!(assessment.bars, 25);
}

#[test]
fn test_short_frame_unknown() {
    let frame = frame_with_last(19, Some(70.0), 101.0, 100.0, 0.4);
    let assessment = assess_regime_detailed(&frame);
    assert_eq!(assessment.label, RegimeLabel::Unknown);
    assert!(assessment.votes.is_none());
}

#[test]
fn test_undefined_last_bar_unknown() {
    let frame = frame_with_last(30, None, 101.0, 100.0, 0.4);
    assert_eq!(assess_regime(&frame), RegimeLabel::Unknown);
}

#[test]
fn test_nan_last_bar_unknown() {
    let frame = frame_with_last(30, Some(60.0), 101.0, 100.0, f64::NAN);
    assert_eq!(assess_regime(&frame), RegimeLabel::Unknown);
}

#[test]
fn test_empty_frame_unknown() {
    let frame = frame_with_last(0, Some(60.0), 101.0, 100.0, 0.4);
    assert_eq!(assess_regime(&frame), RegimeLabel::Unknown);
}
