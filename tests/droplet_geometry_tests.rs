// Droplet geometry validation tests
// Checks the diameter -> volume / surface area pipeline against direct
// recomputation from the sphere formulas.

use approx::assert_relative_eq;
use emulsion_lamp_rust::assert_deviation;
use emulsion_lamp_rust::droplet::{DropletSample, DropletSummary, Statistic};
use std::f64::consts::PI;

fn sample_set() -> Vec<DropletSample> {
    [10.0, 20.0, 30.0]
        .iter()
        .map(|d| DropletSample::new(*d).unwrap())
        .collect()
}

#[test]
fn twenty_micron_droplet_matches_hand_calculation() {
    println!("🧫 Checking the 20 um reference droplet");

    let droplet = DropletSample::new(20.0).unwrap();

    // radius = 10 um = 1e-3 cm
    let r_cm: f64 = 1.0e-3;
    let expected_volume = (4.0 / 3.0) * PI * r_cm.powi(3);
    println!("   Volume: {:.6e} cm³ (expected {:.6e})", droplet.volume_cm3(), expected_volume);
    assert_relative_eq!(droplet.volume_cm3(), expected_volume, max_relative = 1e-12);
    assert_deviation!(droplet.volume_cm3(), 4.18879e-9, 0.01);

    // radius = 10_000 nm
    let r_nm: f64 = 1.0e4;
    let expected_sa = 4.0 * PI * r_nm.powi(2);
    println!("   Surface area: {:.6e} nm² (expected {:.6e})", droplet.surface_area_nm2(), expected_sa);
    assert_relative_eq!(droplet.surface_area_nm2(), expected_sa, max_relative = 1e-12);
}

#[test]
fn summary_means_match_direct_recomputation() {
    let set = sample_set();
    let summary = DropletSummary::from_samples(&set).unwrap();

    let mean_volume = set.iter().map(|s| s.volume_cm3()).sum::<f64>() / set.len() as f64;
    let mean_sa = set.iter().map(|s| s.surface_area_nm2()).sum::<f64>() / set.len() as f64;

    println!("   Mean volume:       {:.6e} cm³", summary.mean_volume_cm3);
    println!("   Mean surface area: {:.6e} nm²", summary.mean_surface_area_nm2);

    assert_relative_eq!(summary.mean_volume_cm3, mean_volume, max_relative = 1e-12);
    assert_relative_eq!(summary.mean_surface_area_nm2, mean_sa, max_relative = 1e-12);
    assert_relative_eq!(summary.volume_cm3(Statistic::Avg), mean_volume);
    assert_relative_eq!(summary.surface_area_nm2(Statistic::Avg), mean_sa);
}

#[test]
fn summarizer_has_no_hidden_state() {
    let set = sample_set();
    let first = DropletSummary::from_samples(&set).unwrap();
    let second = DropletSummary::from_samples(&set).unwrap();
    assert_eq!(first, second, "summarizing twice must give identical values");
}
