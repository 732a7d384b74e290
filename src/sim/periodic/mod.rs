//! Periodic (dynamic) thermal response of a wall by the transfer-matrix
//! method.
//!
//! # Architecture
//!
//! ```text
//! Wall ──► penetration_depths() / xi() ──► layer_transfer_matrices()
//!                                               │  Z = Z_N · … · Z_1
//!                                               ▼
//!                                    wall_transfer_matrix()
//!                                               │  Zee = Zse · Z · Zsi
//!                                               ▼
//!                          environment_transfer_matrix() ──► PeriodicResponse
//! ```

pub mod response;
pub mod transfer_matrix;

pub use response::PeriodicResponse;
pub use transfer_matrix::{TransferMatrix, penetration_depth};

use crate::error::Result;
use crate::sim::construction::Wall;

impl Wall {
    /// Periodic penetration depth of each layer in m.
    pub fn penetration_depths(&self) -> Vec<f64> {
        let period_s = self.boundary().period_seconds();
        self.layers()
            .iter()
            .map(|l| {
                penetration_depth(
                    l.thermal_conductivity(),
                    l.density(),
                    l.specific_heat(),
                    period_s,
                )
            })
            .collect()
    }

    /// Thickness over penetration depth for each layer.
    pub fn xi(&self) -> Vec<f64> {
        self.thicknesses()
            .iter()
            .zip(self.penetration_depths())
            .map(|(d, delta)| d / delta)
            .collect()
    }

    /// One transfer matrix per layer, in layer order.
    pub fn layer_transfer_matrices(&self) -> Vec<TransferMatrix> {
        self.layers()
            .iter()
            .zip(self.penetration_depths())
            .map(|(l, delta)| {
                TransferMatrix::layer(l.thickness(), l.thermal_conductivity(), delta)
            })
            .collect()
    }

    /// Surface-to-surface matrix `Z = Z_N · Z_{N-1} · … · Z_1`, where layer 1
    /// is the first stored layer.
    pub fn wall_transfer_matrix(&self) -> TransferMatrix {
        self.layer_transfer_matrices()
            .into_iter()
            .rev()
            .fold(TransferMatrix::identity(), |acc, z| acc * z)
    }

    /// Environment-to-environment matrix `Zee = Zse · Z · Zsi`.
    pub fn environment_transfer_matrix(&self) -> TransferMatrix {
        let boundary = self.boundary();
        let z_si = TransferMatrix::surface(boundary.surface_resistance_int);
        let z_se = TransferMatrix::surface(boundary.surface_resistance_ext);
        z_se * self.wall_transfer_matrix() * z_si
    }

    /// Periodic quantities derived from [`Self::environment_transfer_matrix`].
    pub fn periodic_response(&self) -> Result<PeriodicResponse> {
        PeriodicResponse::from_matrix(
            &self.environment_transfer_matrix(),
            self.thermal_transmittance(),
            self.boundary().period_hours,
        )
    }

    /// Periodic thermal transmittance Y12 in W/(m^2*K).
    pub fn periodic_thermal_transmittance(&self) -> Result<f64> {
        Ok(self.periodic_response()?.periodic_transmittance)
    }

    /// Decrement factor `-Y12 / U`.
    pub fn decrement_factor(&self) -> Result<f64> {
        Ok(self.periodic_response()?.decrement_factor)
    }

    /// Phase of Zee[0][1] expressed in hours.
    pub fn phase(&self) -> Result<f64> {
        Ok(self.periodic_response()?.phase_hours)
    }

    /// Time lag in hours.
    pub fn time_lag(&self) -> Result<f64> {
        Ok(self.periodic_response()?.time_lag)
    }

    /// Internal periodic admittance Y11 in W/(m^2*K).
    pub fn internal_admittance(&self) -> Result<f64> {
        Ok(self.periodic_response()?.internal_admittance)
    }

    /// External periodic admittance Y22 in W/(m^2*K).
    pub fn external_admittance(&self) -> Result<f64> {
        Ok(self.periodic_response()?.external_admittance)
    }

    /// Internal areal heat capacity k1 in kJ/(m^2*K).
    pub fn internal_areal_heat_capacity(&self) -> Result<f64> {
        Ok(self.periodic_response()?.internal_areal_heat_capacity)
    }

    /// External areal heat capacity k2 in kJ/(m^2*K).
    pub fn external_areal_heat_capacity(&self) -> Result<f64> {
        Ok(self.periodic_response()?.external_areal_heat_capacity)
    }
}
