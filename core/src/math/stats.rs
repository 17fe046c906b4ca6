pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(values: &[f32]) -> f32 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f32>() / values.len() as f32
    }

    pub fn min_max(values: &[f32]) -> Option<(f32, f32)> {
        if values.is_empty() {
            return None;
        }
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &value in values {
            min = min.min(value);
            max = max.max(value);
        }
        Some((min, max))
    }

    /// Rounds to the given number of decimal places. Results carry
    /// one or two decimals depending on the field.
    pub fn round_to(value: f32, decimals: u32) -> f32 {
        let factor = 10f32.powi(decimals as i32);
        (value * factor).round() / factor
    }
}
