// Axis scaling - Rounded "nice" bounds for chart value axes

/// Compute a rounded axis bound for a raw data extreme.
///
/// A 5% margin is added away from zero, then the result is snapped to a value
/// that reads cleanly on a chart axis:
/// - single-digit inputs collapse to `0` / `5` (or `-5` / `-10`)
/// - two-digit results snap outward to a multiple of 5
/// - anything larger rounds to the nearest step of its order of magnitude
///   (tens for values below 1000, then one step coarser per decade)
pub fn compute_bound(value: f64) -> f64 {
    let adjusted = if value >= 0.0 {
        (value * 1.05).ceil()
    } else {
        (value * 0.95).floor()
    };

    if value.abs() < 10.0 {
        return small_bucket(value);
    }

    let magnitude_abs = adjusted.abs();
    if (10.0..100.0).contains(&magnitude_abs) {
        // Snap outward so the bound never sits inside the adjusted value
        return if adjusted < 0.0 {
            (adjusted / 5.0).floor() * 5.0
        } else {
            (adjusted / 5.0).ceil() * 5.0
        };
    }

    let offset = if magnitude_abs < 1000.0 { 1 } else { 2 };
    let exponent = (magnitude_abs.log10().floor() as i32).saturating_sub(offset);
    let magnitude = 10f64.powi(exponent);
    (adjusted / magnitude).round() * magnitude
}

fn small_bucket(value: f64) -> f64 {
    if value >= 0.0 {
        if value < 5.0 { 0.0 } else { 5.0 }
    } else if value > -5.0 {
        -5.0
    } else {
        -10.0
    }
}
