//! End-to-end evaluation of a proxy and a target series.

use serde::{Deserialize, Serialize};

use crate::config::PipelinePolicy;
use crate::indicators::engine::compute_indicators;
use crate::models::regime::RegimeLabel;
use crate::models::series::PriceSeries;
use crate::models::signal::SignalFrame;
use crate::regime::classifier::{assess_regime_detailed, RegimeAssessment};
use crate::signals::generator::SignalGenerator;

/// Output of a full pipeline run for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub regime: RegimeAssessment,
    pub signals: SignalFrame,
}

pub struct SignalEngine {
    policy: PipelinePolicy,
}

impl SignalEngine {
    pub fn new(policy: PipelinePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PipelinePolicy {
        &self.policy
    }

    /// Regime of the market proxy.
    pub fn assess_proxy(&self, proxy: &PriceSeries) -> RegimeAssessment {
        assess_regime_detailed(&compute_indicators(proxy, &self.policy))
    }

    /// Indicators and signals for a target under a known regime.
    pub fn evaluate(&self, target: &PriceSeries, regime: RegimeLabel) -> SignalFrame {
        let frame = compute_indicators(target, &self.policy);
        SignalGenerator::new(self.policy).generate(&frame, regime)
    }

    /// Proxy regime first, then the target's signals gated by it.
    pub fn run(&self, proxy: &PriceSeries, target: &PriceSeries) -> PipelineOutput {
        let regime = self.assess_proxy(proxy);
        let signals = self.evaluate(target, regime.label);
        PipelineOutput { regime, signals }
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(PipelinePolicy::default())
    }
}
