use std::f64::consts::PI;
use std::ops::Mul;

use num_complex::Complex64;
use serde::Serialize;

/// 2x2 complex transfer matrix relating temperature and heat flux amplitudes
/// on the two faces of a layer (or a stack of layers).
///
/// Entries are row-major: `m[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferMatrix {
    pub m: [[Complex64; 2]; 2],
}

impl TransferMatrix {
    pub fn new(m00: Complex64, m01: Complex64, m10: Complex64, m11: Complex64) -> Self {
        Self {
            m: [[m00, m01], [m10, m11]],
        }
    }

    pub fn identity() -> Self {
        let one = Complex64::new(1.0, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        Self::new(one, zero, zero, one)
    }

    /// Boundary air layer with surface resistance `r` in m^2*K/W:
    /// `[[1, -r], [0, 1]]`.
    pub fn surface(r: f64) -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(-r, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        )
    }

    /// Homogeneous layer of given thickness `d`, conductivity `k` and
    /// periodic penetration depth `delta`, all in SI units.
    pub fn layer(d: f64, k: f64, delta: f64) -> Self {
        let xi = d / delta;
        let (ch, sh) = (xi.cosh(), xi.sinh());
        let (co, si) = (xi.cos(), xi.sin());

        let diag = Complex64::new(ch * co, sh * si);
        let m01 = Complex64::new(sh * co + ch * si, ch * si - sh * co) * -(delta / (2.0 * k));
        let m10 = Complex64::new(sh * co - ch * si, sh * co + ch * si) * -(k / delta);
        Self::new(diag, m01, m10, diag)
    }

    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.m[row][col]
    }

    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|z| z.re.is_finite() && z.im.is_finite())
    }
}

impl Mul for TransferMatrix {
    type Output = TransferMatrix;

    fn mul(self, rhs: TransferMatrix) -> TransferMatrix {
        let a = &self.m;
        let b = &rhs.m;
        TransferMatrix::new(
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        )
    }
}

/// Periodic penetration depth in m: `sqrt(k * T / (pi * rho * c))`.
pub fn penetration_depth(k: f64, density: f64, specific_heat: f64, period_seconds: f64) -> f64 {
    (k * period_seconds / (PI * density * specific_heat)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex64, b: Complex64, eps: f64) -> bool {
        (a - b).norm() < eps
    }

    #[test]
    fn test_identity_product() {
        let s = TransferMatrix::surface(0.13);
        let p = TransferMatrix::identity() * s;
        assert_eq!(p, s);
        let p = s * TransferMatrix::identity();
        assert_eq!(p, s);
    }

    #[test]
    fn test_surfaces_add_in_series() {
        let p = TransferMatrix::surface(0.13) * TransferMatrix::surface(0.04);
        assert!(close(p.get(0, 1), Complex64::new(-0.17, 0.0), 1e-12));
        assert!(close(p.get(0, 0), Complex64::new(1.0, 0.0), 1e-12));
        assert!(close(p.get(1, 0), Complex64::new(0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_product_is_not_commutative() {
        let a = TransferMatrix::new(
            Complex64::new(1.0, 1.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, 3.0),
            Complex64::new(1.0, -1.0),
        );
        let b = TransferMatrix::surface(0.5);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn test_thin_layer_tends_to_pure_resistance() {
        // xi -> 0: [[1, -d/k], [0, 1]]
        let d = 1e-4;
        let k = 0.5;
        let delta = penetration_depth(k, 1500.0, 1000.0, 86400.0);
        let z = TransferMatrix::layer(d, k, delta);
        assert!(close(z.get(0, 0), Complex64::new(1.0, 0.0), 1e-5));
        assert!(close(z.get(1, 1), Complex64::new(1.0, 0.0), 1e-5));
        assert!(close(z.get(0, 1), Complex64::new(-d / k, 0.0), 1e-8));
        assert!(z.get(1, 0).re.abs() < 1e-6);
        // Heat capacity term: Z10 ~ -i * omega * rho * c * d
        let omega = 2.0 * PI / 86400.0;
        let expected_im = -omega * 1500.0 * 1000.0 * d;
        assert!((z.get(1, 0).im - expected_im).abs() / expected_im.abs() < 1e-3);
    }

    #[test]
    fn test_layer_matrix_determinant_is_one() {
        // Reciprocity of the conduction solution: det Z = 1
        let k = 0.13;
        let delta = penetration_depth(k, 500.0, 1600.0, 86400.0);
        let z = TransferMatrix::layer(0.096, k, delta);
        let det = z.get(0, 0) * z.get(1, 1) - z.get(0, 1) * z.get(1, 0);
        assert!(close(det, Complex64::new(1.0, 0.0), 1e-9), "det = {det}");
    }

    #[test]
    fn test_penetration_depth() {
        // Concrete, 24 h: sqrt(1.4 * 86400 / (pi * 2300 * 880))
        let delta = penetration_depth(1.4, 2300.0, 880.0, 86400.0);
        let expected = (1.4 * 86400.0 / (PI * 2300.0 * 880.0)).sqrt();
        assert!((delta - expected).abs() < 1e-12);
        assert!(delta > 0.13 && delta < 0.14);
    }

    #[test]
    fn test_is_finite() {
        assert!(TransferMatrix::identity().is_finite());
        let z = TransferMatrix::layer(500.0, 1.4, 0.138);
        assert!(!z.is_finite());
    }
}
