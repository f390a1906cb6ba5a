//! Amplicon geometry: molecular weight and hydrophobic footprint from
//! base-pair length, and the per-run size classes whose coverage is summed
//! by the integrator.
//!
//! Multimers / concatemers of the primary target are modeled as size classes
//! at integer multiples of the base length, each carrying its own
//! diffusivity and (for logistic growth) carrying capacity.

use crate::constants::{
    DS_DNA_DALTONS_OFFSET, DS_DNA_DALTONS_PER_BP, HYDROPHOBIC_RADIUS_COEFF_NM, NM_TO_CM,
};
use crate::error::ModelError;
use crate::kinetics::{KineticParameters, diffusivity_cm2_per_s};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Approximate molecular weight of a double-stranded amplicon in Daltons.
pub fn molecular_weight_da(bp_length: u32) -> f64 {
    2.0 * bp_length as f64 * DS_DNA_DALTONS_PER_BP + DS_DNA_DALTONS_OFFSET
}

/// Radius of the hydrophobic footprint an adsorbed amplicon presents to the
/// oil-water interface, in nm.
pub fn hydrophobic_radius_nm(bp_length: u32) -> f64 {
    HYDROPHOBIC_RADIUS_COEFF_NM * molecular_weight_da(bp_length).cbrt()
}

/// Interfacial area occupied by a single adsorbed amplicon, in nm².
pub fn footprint_area_nm2(bp_length: u32) -> f64 {
    PI * hydrophobic_radius_nm(bp_length).powi(2)
}

/// Total interfacial area (nm²) occupied by `amplicons` molecules of the
/// given length. The count is a modeled expectation and may be fractional;
/// no rounding is applied.
pub fn area_from_amplicons(amplicons: f64, bp_length: u32) -> f64 {
    amplicons * footprint_area_nm2(bp_length)
}

/// Logistic-growth terms derived once per size class from droplet geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticTerms {
    /// Concentration ceiling the logistic term approaches (copies/cm³
    /// equivalent): the representative droplet volume divided by the volume
    /// of the sphere implied by the amplicon's footprint.
    pub carrying_capacity: f64,
    /// Shape offset a = c/C0 - 1.
    pub offset: f64,
}

impl LogisticTerms {
    pub fn derive(
        bp_length: u32,
        representative_volume_cm3: f64,
        kinetics: &KineticParameters,
    ) -> Self {
        let footprint_radius_cm = (footprint_area_nm2(bp_length) / PI).sqrt() * NM_TO_CM;
        let amplicon_sphere_cm3 = (4.0 / 3.0) * PI * footprint_radius_cm.powi(3);
        let carrying_capacity = representative_volume_cm3 / amplicon_sphere_cm3;
        let offset = carrying_capacity / kinetics.initial_concentration_per_cm3 - 1.0;
        LogisticTerms {
            carrying_capacity,
            offset,
        }
    }
}

/// One amplicon size class under consideration. Class `index` (1-based)
/// has base-pair length `base_length * index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmpliconSizeClass {
    pub base_pair_length: u32,
    pub diffusivity_cm2_per_s: f64,
    /// Interfacial coverage at the current step, in the percent-equivalent
    /// units of the saturation pipeline. Updated every step.
    pub cumulative_saturation: f64,
    /// Present only under logistic growth.
    pub logistic: Option<LogisticTerms>,
}

impl AmpliconSizeClass {
    /// Size class for exponential growth.
    pub fn exponential(bp_length: u32) -> Result<Self, ModelError> {
        Ok(AmpliconSizeClass {
            base_pair_length: bp_length,
            diffusivity_cm2_per_s: diffusivity_cm2_per_s(bp_length)?,
            cumulative_saturation: 0.0,
            logistic: None,
        })
    }

    /// Size class for logistic growth; carrying capacity and shape offset
    /// are derived here once and immutable thereafter.
    pub fn logistic(
        bp_length: u32,
        representative_volume_cm3: f64,
        kinetics: &KineticParameters,
    ) -> Result<Self, ModelError> {
        Ok(AmpliconSizeClass {
            base_pair_length: bp_length,
            diffusivity_cm2_per_s: diffusivity_cm2_per_s(bp_length)?,
            cumulative_saturation: 0.0,
            logistic: Some(LogisticTerms::derive(
                bp_length,
                representative_volume_cm3,
                kinetics,
            )),
        })
    }
}
