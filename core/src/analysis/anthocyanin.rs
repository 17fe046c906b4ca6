use crate::math::stats::StatsHelper;
use crate::spectral::result::{AccumulationStage, AnthocyaninResult, AntioxidantLevel};

/// Maps the ratio index onto the anthocyanin content estimate.
///
/// Content decreases as the ratio index rises: anthocyanin
/// accumulates while the canopy signal fades.
pub fn evaluate(ratio: f32) -> AnthocyaninResult {
    let content = 1.5 + (1.0 - ratio) * 0.8;

    let antioxidant = if content > 2.0 {
        AntioxidantLevel::Strong
    } else if content > 1.5 {
        AntioxidantLevel::Moderate
    } else {
        AntioxidantLevel::Weak
    };

    let stage = if content > 2.0 {
        AccumulationStage::FullyMature
    } else if content > 1.5 {
        AccumulationStage::MidMaturation
    } else {
        AccumulationStage::Early
    };

    let confidence = (60.0 + content * 15.0).min(95.0);

    AnthocyaninResult {
        content: StatsHelper::round_to(content, 2),
        antioxidant,
        stage,
        confidence: StatsHelper::round_to(confidence, 1),
    }
}
