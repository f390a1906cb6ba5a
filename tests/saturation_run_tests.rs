// End-to-end saturation runs
// Exercises whole simulations across growth models and size-class counts to
// ensure outcomes, series shapes, and derived parameters behave as expected.

use approx::assert_relative_eq;
use emulsion_lamp_rust::adsorption::GrowthModel;
use emulsion_lamp_rust::droplet::{DropletSample, DropletSummary, Statistic};
use emulsion_lamp_rust::sim::{Outcome, SimProps, Simulation};
use more_asserts::{assert_ge, assert_gt, assert_le};

fn test_summary() -> DropletSummary {
    let samples: Vec<DropletSample> = [10.0, 20.0, 30.0]
        .iter()
        .map(|d| DropletSample::new(*d).unwrap())
        .collect();
    DropletSummary::from_samples(&samples).unwrap()
}

#[test]
fn exponential_single_class_terminates_within_the_ceiling() {
    println!("🧪 Exponential run: Dt=24s, 100bp, avg statistic, 1 size class");

    let sim = Simulation::new(SimProps {
        summary: test_summary(),
        statistic: Statistic::Avg,
        growth: GrowthModel::Exponential,
        doubling_time_s: 24.0,
        base_pair_length: 100,
        size_classes: 1,
        max_seconds: None,
    })
    .unwrap();

    let expected_c0 = 1.0 / test_summary().mean_volume_cm3;
    assert_relative_eq!(sim.kinetics().initial_concentration_per_cm3, expected_c0);

    let result = sim.run();
    println!(
        "   Outcome: {:?} after {} steps, {} samples emitted",
        result.outcome,
        result.steps_executed,
        result.series.len()
    );

    assert_le!(result.steps_executed, 600, "run must respect the ceiling");
    match result.outcome {
        Outcome::Saturated => {
            // boundary trim: crossing sample and its predecessor dropped
            assert_eq!(result.series.len() as u32, result.steps_executed - 1);
        }
        Outcome::TimedOut => {
            assert_eq!(result.series.len() as u32, result.steps_executed);
        }
    }
}

#[test]
fn three_class_exponential_saturation_never_decreases() {
    println!("🧪 Synthetic 3-size-class exponential run, monotonicity check");

    let result = Simulation::new(SimProps {
        summary: test_summary(),
        statistic: Statistic::Avg,
        growth: GrowthModel::Exponential,
        doubling_time_s: 24.0,
        base_pair_length: 100,
        size_classes: 3,
        max_seconds: None,
    })
    .unwrap()
    .run();

    println!(
        "   {:?} after {} steps",
        result.outcome, result.steps_executed
    );
    assert_gt!(result.series.len(), 0, "series must not be empty");

    let series = &result.series.saturation_pct;
    for window in series.windows(2) {
        assert_ge!(
            window[1],
            window[0],
            "growth only adds coverage, never removes it"
        );
    }
}

#[test]
fn multi_size_logistic_derives_positive_carrying_capacities() {
    println!("🧪 Multi-size logistic run: 3 classes, default rate");

    let sim = Simulation::new(SimProps {
        summary: test_summary(),
        statistic: Statistic::Med,
        growth: GrowthModel::Logistic { rate: 1.0 },
        doubling_time_s: 24.0,
        base_pair_length: 100,
        size_classes: 3,
        max_seconds: None,
    })
    .unwrap();

    let c0 = sim.kinetics().initial_concentration_per_cm3;
    for class in sim.size_classes() {
        let terms = class.logistic.expect("logistic class must carry terms");
        println!(
            "   {} bp: c = {:.4e}, a = {:.4e}",
            class.base_pair_length, terms.carrying_capacity, terms.offset
        );
        assert_gt!(terms.carrying_capacity, 0.0);
        assert_relative_eq!(
            terms.offset,
            terms.carrying_capacity / c0 - 1.0,
            max_relative = 1e-12
        );
    }

    let result = sim.run();
    println!(
        "   {:?} after {} steps, {} samples",
        result.outcome,
        result.steps_executed,
        result.series.len()
    );
    // either outcome is acceptable; a timed-out run still emits its series
    assert_le!(result.steps_executed, 1800);
    assert_gt!(result.series.len(), 0);
}

#[test]
fn statistic_choice_changes_the_representative_geometry() {
    let summary = test_summary();
    let avg = Simulation::new(SimProps {
        summary,
        statistic: Statistic::Avg,
        growth: GrowthModel::Exponential,
        doubling_time_s: 24.0,
        base_pair_length: 100,
        size_classes: 1,
        max_seconds: None,
    })
    .unwrap();
    let med = Simulation::new(SimProps {
        summary,
        statistic: Statistic::Med,
        growth: GrowthModel::Exponential,
        doubling_time_s: 24.0,
        base_pair_length: 100,
        size_classes: 1,
        max_seconds: None,
    })
    .unwrap();

    // mean volume over [10, 20, 30] um exceeds the median volume, so the
    // seed concentrations must differ
    assert_gt!(
        med.kinetics().initial_concentration_per_cm3,
        avg.kinetics().initial_concentration_per_cm3
    );
}
