//! Droplet geometry: per-droplet volume and surface area derived from the
//! measured diameter, and the mean/median reduction over a measurement set.

use crate::constants::{CM3_TO_PL, UM_TO_CM, UM_TO_NM};
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

/// One measured emulsion droplet. Only the diameter is stored; volume and
/// surface area are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropletSample {
    pub diameter_um: f64,
}

impl DropletSample {
    pub fn new(diameter_um: f64) -> Result<Self, ModelError> {
        if !diameter_um.is_finite() || diameter_um <= 0.0 {
            return Err(ModelError::InvalidInput(format!(
                "droplet diameter must be a positive number of micrometers, got {}",
                diameter_um
            )));
        }
        Ok(DropletSample { diameter_um })
    }

    pub fn radius_cm(&self) -> f64 {
        (self.diameter_um / 2.0) * UM_TO_CM
    }

    pub fn radius_nm(&self) -> f64 {
        (self.diameter_um / 2.0) * UM_TO_NM
    }

    /// Sphere volume in cm³ (equivalently mL). This is the unit every
    /// downstream concentration formula expects.
    pub fn volume_cm3(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius_cm().powi(3)
    }

    /// Volume in picoliters, for reporting only.
    pub fn volume_pl(&self) -> f64 {
        self.volume_cm3() * CM3_TO_PL
    }

    /// Sphere surface area in nm².
    pub fn surface_area_nm2(&self) -> f64 {
        4.0 * PI * self.radius_nm().powi(2)
    }
}

/// Which summary statistic represents the droplet population for a run.
/// Fixed at construction; it cannot vary mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statistic {
    Avg,
    Med,
}

impl FromStr for Statistic {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "avg" => Ok(Statistic::Avg),
            "med" => Ok(Statistic::Med),
            other => Err(ModelError::InvalidSelector(format!(
                "statistic must be 'avg' or 'med', got '{}'",
                other
            ))),
        }
    }
}

/// Mean and median volume / surface area over a droplet measurement set.
/// Computed once from the samples and read-only for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropletSummary {
    pub mean_volume_cm3: f64,
    pub median_volume_cm3: f64,
    pub mean_surface_area_nm2: f64,
    pub median_surface_area_nm2: f64,
}

impl DropletSummary {
    pub fn from_samples(samples: &[DropletSample]) -> Result<Self, ModelError> {
        if samples.is_empty() {
            return Err(ModelError::InvalidInput(
                "droplet measurement set is empty".to_string(),
            ));
        }

        let volumes: Vec<f64> = samples.iter().map(|s| s.volume_cm3()).collect();
        let areas: Vec<f64> = samples.iter().map(|s| s.surface_area_nm2()).collect();

        Ok(DropletSummary {
            mean_volume_cm3: mean(&volumes),
            median_volume_cm3: median(&volumes),
            mean_surface_area_nm2: mean(&areas),
            median_surface_area_nm2: median(&areas),
        })
    }

    /// Representative droplet volume in cm³ for the selected statistic.
    pub fn volume_cm3(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Avg => self.mean_volume_cm3,
            Statistic::Med => self.median_volume_cm3,
        }
    }

    /// Representative droplet surface area in nm² for the selected statistic.
    pub fn surface_area_nm2(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Avg => self.mean_surface_area_nm2,
            Statistic::Med => self.median_surface_area_nm2,
        }
    }

    pub fn mean_volume_pl(&self) -> f64 {
        self.mean_volume_cm3 * CM3_TO_PL
    }

    pub fn median_volume_pl(&self) -> f64 {
        self.median_volume_cm3 * CM3_TO_PL
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
