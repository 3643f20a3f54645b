//! Helpers for discrete probability distributions stored as flat `f64` slices.

/// Sum of all mass in `values`.
pub fn total_mass(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Normalize `values` in place so they sum to 1.0.
///
/// Returns the pre-normalization mass. Returns `None` and leaves `values`
/// untouched when the mass is zero, negative, or non-finite; the caller
/// decides how to surface that.
pub fn normalize(values: &mut [f64]) -> Option<f64> {
    let mass = total_mass(values);
    if !mass.is_finite() || mass <= 0.0 {
        return None;
    }
    for v in values.iter_mut() {
        *v /= mass;
    }
    Some(mass)
}

/// Shannon entropy of a distribution, in nats.
///
/// Zero-probability entries contribute nothing (the p·ln p limit at zero).
pub fn entropy_nats(values: &[f64]) -> f64 {
    -values
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f64>()
}

/// L1 distance between two equally-sized distributions.
///
/// Debug-asserts equal lengths.
pub fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "l1_distance on mismatched lengths");
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
