//! Vector utility functions like cumsum()

/// Running sum of `v`, same length as `v`.
pub fn cumsum(v: &[f64]) -> Vec<f64> {
    v.iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Running sum of `v` with a leading `0.0`, length `v.len() + 1`.
pub fn cumsum_from_zero(v: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(v.len() + 1);
    out.push(0.0);
    out.extend(cumsum(v));
    out
}

/// Checks if two arrays or vectors are almost equal.
///
/// Elements in both containers must be in the same order.
#[cfg(test)]
pub(crate) fn almost_equal(a: &[f64], b: &[f64], eps: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(&x, &y)| (x - y).abs() <= eps)
}
