use crate::math::stats::StatsHelper;
use crate::spectral::result::{FiberQuality, MaturityResult, MaturityStatus, Recommendation};

/// Score at or above which a boll counts as mature (boundary inclusive).
pub const MATURE_SCORE: f32 = 60.0;

/// Maps the two spectral indices onto the maturity result.
///
/// `score = clamp(50 + 100*ratio + 50*red_edge, 0, 100)`; the boll
/// weight estimate spans 4.5-6.0 g across the score range.
pub fn evaluate(ratio: f32, red_edge: f32) -> MaturityResult {
    let score = (50.0 + ratio * 100.0 + red_edge * 50.0).clamp(0.0, 100.0);
    let boll_weight_g = 4.5 + (score / 100.0) * 1.5;

    let fiber_quality = if score > 80.0 {
        FiberQuality::Premium
    } else if score > 60.0 {
        FiberQuality::Good
    } else {
        FiberQuality::Fair
    };

    let status = if score >= MATURE_SCORE {
        MaturityStatus::Mature
    } else {
        MaturityStatus::Immature
    };

    let recommendation = if score > 80.0 {
        Recommendation::HarvestWithinThreeDays
    } else if score > 60.0 {
        Recommendation::HarvestInFiveToSevenDays
    } else {
        Recommendation::ContinueGrowing
    };

    let confidence = (70.0 + score * 0.25).min(95.0);

    MaturityResult {
        score: StatsHelper::round_to(score, 1),
        boll_weight_g: StatsHelper::round_to(boll_weight_g, 2),
        fiber_quality,
        status,
        recommendation,
        confidence: StatsHelper::round_to(confidence, 1),
    }
}
