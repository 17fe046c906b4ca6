/// Trapezoidal rule with unit spacing between consecutive samples.
///
/// Fewer than two values yield zero area.
pub fn trapezoid_unit(values: &[f32]) -> f32 {
    values
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / 2.0)
        .sum()
}
