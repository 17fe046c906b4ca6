use crate::math::stats::StatsHelper;
use crate::spectral::result::{ChlorophyllResult, ChlorophyllStatus};

/// Maps the ratio index onto chlorophyll a/b content estimates.
///
/// Both components increase linearly with the index; the normal range
/// for the total is 2.0-3.0 mg/g.
pub fn evaluate(ratio: f32) -> ChlorophyllResult {
    let chlorophyll_a = 1.2 + ratio * 0.8;
    let chlorophyll_b = 1.0 + ratio * 0.6;
    let total = chlorophyll_a + chlorophyll_b;

    let status = if (2.0..=3.0).contains(&total) {
        ChlorophyllStatus::Normal
    } else if total > 3.0 {
        ChlorophyllStatus::High
    } else {
        ChlorophyllStatus::Low
    };

    let confidence = (65.0 + total * 10.0).min(95.0);

    ChlorophyllResult {
        chlorophyll_a: StatsHelper::round_to(chlorophyll_a, 2),
        chlorophyll_b: StatsHelper::round_to(chlorophyll_b, 2),
        total: StatsHelper::round_to(total, 2),
        status,
        confidence: StatsHelper::round_to(confidence, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_increase_with_the_ratio_index() {
        let low = evaluate(0.0);
        let high = evaluate(0.4);
        assert!(high.chlorophyll_a > low.chlorophyll_a);
        assert!(high.chlorophyll_b > low.chlorophyll_b);
        assert!(high.total > low.total);
    }

    #[test]
    fn zero_ratio_total_is_in_the_normal_band() {
        let result = evaluate(0.0);
        assert_eq!(result.total, 2.2);
        assert_eq!(result.status, ChlorophyllStatus::Normal);
        assert_eq!(result.confidence, 87.0);
    }

    #[test]
    fn strong_vegetation_reads_high() {
        let result = evaluate(0.8);
        assert_eq!(result.status, ChlorophyllStatus::High);
        assert!(result.confidence <= 95.0);
    }

    #[test]
    fn negative_ratio_reads_low() {
        let result = evaluate(-0.5);
        assert_eq!(result.status, ChlorophyllStatus::Low);
        assert!(result.total < 2.0);
    }
}
