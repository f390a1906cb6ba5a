//! The saturation integrator: discrete 1-second time stepping of the
//! diffusion-adsorption model until the droplet interface saturates or the
//! iteration ceiling is reached.

use crate::adsorption::{GrowthModel, interface_concentration};
use crate::amplicon::{AmpliconSizeClass, area_from_amplicons};
use crate::constants::{
    CONCENTRATION_TO_AMPLICONS, DEFAULT_MAX_SECONDS_EXPONENTIAL, DEFAULT_MAX_SECONDS_LOGISTIC,
    SATURATION_LIMIT_PCT, SECONDS_PER_MINUTE,
};
use crate::droplet::{DropletSummary, Statistic};
use crate::error::ModelError;
use crate::kinetics::KineticParameters;
use serde::{Deserialize, Serialize};

/// Construction parameters for one run.
pub struct SimProps {
    pub summary: DropletSummary,
    pub statistic: Statistic,
    pub growth: GrowthModel,
    /// Doubling time of the reaction in seconds.
    pub doubling_time_s: f64,
    /// Base-pair length of the primary target.
    pub base_pair_length: u32,
    /// Number of amplicon size classes; class i has length base * i.
    pub size_classes: u32,
    /// Iteration ceiling in seconds; None picks the growth-mode default.
    pub max_seconds: Option<u32>,
}

/// How a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Total saturation crossed the limit.
    Saturated,
    /// Iteration ceiling reached without crossing; partial results emitted.
    TimedOut,
}

/// The modeled saturation time course: parallel sequences of elapsed time in
/// minutes and cumulative interfacial saturation in percent, plot-ready for
/// the downstream consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationSeries {
    pub time_min: Vec<f64>,
    pub saturation_pct: Vec<f64>,
}

impl SaturationSeries {
    fn from_history(history: &[f64]) -> Self {
        SaturationSeries {
            time_min: (1..=history.len())
                .map(|t| t as f64 / SECONDS_PER_MINUTE)
                .collect(),
            saturation_pct: history.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.saturation_pct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saturation_pct.is_empty()
    }
}

/// Result handed to the caller at termination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub outcome: Outcome,
    /// Completed steps. When saturated, the crossing step is not counted;
    /// the emitted series then holds `steps_executed - 1` samples (the
    /// boundary-trim contract).
    pub steps_executed: u32,
    pub series: SaturationSeries,
}

/// One run of the adsorption model. Owns all mutable state; single-threaded
/// and deterministic, no RNG anywhere.
pub struct Simulation {
    kinetics: KineticParameters,
    growth: GrowthModel,
    classes: Vec<AmpliconSizeClass>,
    surface_area_nm2: f64,
    max_seconds: u32,
    t_s: u32,
    history: Vec<f64>,
}

impl Simulation {
    /// Build a run from its parameters. Every validation happens here,
    /// before the loop starts; a rejected construction is the only failure
    /// mode of the model.
    pub fn new(props: SimProps) -> Result<Simulation, ModelError> {
        if props.size_classes == 0 {
            return Err(ModelError::InvalidParameter(
                "size-class count must be at least 1".to_string(),
            ));
        }
        if props.base_pair_length == 0 {
            return Err(ModelError::InvalidParameter(
                "base-pair length must be positive".to_string(),
            ));
        }
        if let GrowthModel::Logistic { rate } = props.growth {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(ModelError::InvalidParameter(format!(
                    "logistic rate constant must be positive, got {}",
                    rate
                )));
            }
        }
        if let Some(0) = props.max_seconds {
            return Err(ModelError::InvalidParameter(
                "iteration ceiling must be at least 1 second".to_string(),
            ));
        }

        let volume_cm3 = props.summary.volume_cm3(props.statistic);
        let surface_area_nm2 = props.summary.surface_area_nm2(props.statistic);
        if !surface_area_nm2.is_finite() || surface_area_nm2 <= 0.0 {
            return Err(ModelError::InvalidInput(format!(
                "representative droplet surface area must be positive, got {} nm²",
                surface_area_nm2
            )));
        }

        let kinetics = KineticParameters::new(props.doubling_time_s, volume_cm3)?;

        let mut classes = Vec::with_capacity(props.size_classes as usize);
        for index in 1..=props.size_classes {
            let bp = props.base_pair_length.checked_mul(index).ok_or_else(|| {
                ModelError::InvalidParameter(format!(
                    "size class {} overflows the base-pair length range",
                    index
                ))
            })?;
            let class = match props.growth {
                GrowthModel::Exponential => AmpliconSizeClass::exponential(bp)?,
                GrowthModel::Logistic { .. } => {
                    AmpliconSizeClass::logistic(bp, volume_cm3, &kinetics)?
                }
            };
            classes.push(class);
        }

        let max_seconds = props.max_seconds.unwrap_or(match props.growth {
            GrowthModel::Exponential => DEFAULT_MAX_SECONDS_EXPONENTIAL,
            GrowthModel::Logistic { .. } => DEFAULT_MAX_SECONDS_LOGISTIC,
        });

        Ok(Simulation {
            kinetics,
            growth: props.growth,
            classes,
            surface_area_nm2,
            max_seconds,
            t_s: 0,
            history: Vec::new(),
        })
    }

    pub fn kinetics(&self) -> &KineticParameters {
        &self.kinetics
    }

    pub fn size_classes(&self) -> &[AmpliconSizeClass] {
        &self.classes
    }

    /// Elapsed seconds so far.
    pub fn current_seconds(&self) -> u32 {
        self.t_s
    }

    /// Advance one second and return the total saturation across classes.
    fn step(&mut self) -> f64 {
        self.t_s += 1;
        let t = self.t_s as f64;

        let mut total = 0.0;
        for class in &mut self.classes {
            let concentration = interface_concentration(self.growth, t, &self.kinetics, class);
            let amplicons = concentration * CONCENTRATION_TO_AMPLICONS * self.surface_area_nm2;
            let occupied_nm2 = area_from_amplicons(amplicons, class.base_pair_length);
            // the occupied/total ratio is reported directly as "percent"
            let saturation = occupied_nm2 / self.surface_area_nm2;
            class.cumulative_saturation = saturation;
            total += saturation;
        }
        total
    }

    /// Run to termination. Consuming the simulation makes the one-run
    /// contract a compile-time guarantee.
    pub fn run(mut self) -> RunResult {
        loop {
            let total = self.step();
            self.history.push(total);

            if total > SATURATION_LIMIT_PCT {
                // Drop the crossing sample and the sample before it
                let trimmed = self.history.len().saturating_sub(2);
                self.history.truncate(trimmed);
                return RunResult {
                    outcome: Outcome::Saturated,
                    steps_executed: self.t_s - 1,
                    series: SaturationSeries::from_history(&self.history),
                };
            }

            if self.t_s >= self.max_seconds {
                return RunResult {
                    outcome: Outcome::TimedOut,
                    steps_executed: self.t_s,
                    series: SaturationSeries::from_history(&self.history),
                };
            }
        }
    }
}
