use std::f64::consts::PI;

use num_complex::Complex64;
use serde::Serialize;

use crate::error::{Result, WallError};
use crate::sim::periodic::transfer_matrix::TransferMatrix;

/// Below this modulus Zee[0][1] is treated as zero.
pub const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// Periodic thermal characteristics of a wall for one oscillation period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodicResponse {
    /// Y12 = |-1 / Zee[0][1]| in W/(m^2*K).
    pub periodic_transmittance: f64,
    /// fd = -Y12 / U (negative; compare by absolute value).
    pub decrement_factor: f64,
    /// arg(Zee[0][1]) converted to hours.
    pub phase_hours: f64,
    /// Phase plus half a period, in hours.
    pub time_lag: f64,
    /// Y11 = |-Zee[0][0] / Zee[0][1]| in W/(m^2*K).
    pub internal_admittance: f64,
    /// Y22 = |-Zee[1][1] / Zee[0][1]| in W/(m^2*K).
    pub external_admittance: f64,
    /// k1 in kJ/(m^2*K).
    pub internal_areal_heat_capacity: f64,
    /// k2 in kJ/(m^2*K).
    pub external_areal_heat_capacity: f64,
}

impl PeriodicResponse {
    /// Extracts the periodic quantities from an environment-to-environment
    /// matrix `zee`, the steady-state transmittance `u` and the period.
    pub fn from_matrix(zee: &TransferMatrix, u: f64, period_hours: f64) -> Result<Self> {
        if !zee.is_finite() {
            return Err(WallError::DegenerateTransferMatrix {
                reason: "non-finite matrix entry".to_string(),
            });
        }
        let z01 = zee.get(0, 1);
        if z01.norm() < DEGENERATE_TOLERANCE {
            return Err(WallError::DegenerateTransferMatrix {
                reason: format!("|Zee[0][1]| = {:e}", z01.norm()),
            });
        }

        let one = Complex64::new(1.0, 0.0);
        let period_s = period_hours * 3600.0;
        let capacity =
            |diag: Complex64| period_s / (2.0 * PI) * ((diag - one) / z01).norm() / 1000.0;

        let periodic_transmittance = (-one / z01).norm();
        let phase_hours = z01.im.atan2(z01.re) * period_hours / (2.0 * PI);

        Ok(Self {
            periodic_transmittance,
            decrement_factor: -periodic_transmittance / u,
            phase_hours,
            time_lag: phase_hours + period_hours / 2.0,
            internal_admittance: (-zee.get(0, 0) / z01).norm(),
            external_admittance: (-zee.get(1, 1) / z01).norm(),
            internal_areal_heat_capacity: capacity(zee.get(0, 0)),
            external_areal_heat_capacity: capacity(zee.get(1, 1)),
        })
    }
}
