//! Kinetic parameters of the amplification reaction: the exponential growth
//! constant from the doubling time, and amplicon diffusivity from base-pair
//! length via the empirical scaling law of Lukacs et al. (J Biol Chem, 2000).

use crate::constants::{DIFFUSIVITY_BP_EXPONENT, DIFFUSIVITY_COEFF_CM2_PER_S};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Growth constant of the reaction in s⁻¹ from its doubling time in seconds.
pub fn growth_constant(doubling_time_s: f64) -> Result<f64, ModelError> {
    if !doubling_time_s.is_finite() || doubling_time_s <= 0.0 {
        return Err(ModelError::InvalidParameter(format!(
            "doubling time must be a positive number of seconds, got {}",
            doubling_time_s
        )));
    }
    Ok(1.0 / doubling_time_s)
}

/// Diffusivity of a dsDNA amplicon in cm²/s from its base-pair length.
///
/// D = 4.9e-6 * bp^-0.72; longer molecules diffuse slower.
pub fn diffusivity_cm2_per_s(bp_length: u32) -> Result<f64, ModelError> {
    if bp_length == 0 {
        return Err(ModelError::InvalidParameter(
            "base-pair length must be positive".to_string(),
        ));
    }
    Ok(DIFFUSIVITY_COEFF_CM2_PER_S * (bp_length as f64).powf(DIFFUSIVITY_BP_EXPONENT))
}

/// Reaction-level kinetic parameters, derived once at construction.
///
/// The seed concentration assumes exactly one target copy per representative
/// droplet: C0 = 1 / representative volume (copies/cm³).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticParameters {
    pub growth_constant_per_s: f64,
    pub initial_concentration_per_cm3: f64,
}

impl KineticParameters {
    pub fn new(
        doubling_time_s: f64,
        representative_volume_cm3: f64,
    ) -> Result<Self, ModelError> {
        if !representative_volume_cm3.is_finite() || representative_volume_cm3 <= 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "representative droplet volume must be positive, got {} cm³",
                representative_volume_cm3
            )));
        }
        Ok(KineticParameters {
            growth_constant_per_s: growth_constant(doubling_time_s)?,
            initial_concentration_per_cm3: 1.0 / representative_volume_cm3,
        })
    }
}
