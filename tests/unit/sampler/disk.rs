use std::f64::consts::TAU;

use super::*;
use crate::model::settings::ShadowTint;

#[test]
fn spiral_radii_grow_to_the_disk_radius() {
    let settings = RenderSettings::default();
    let kernel = DiskKernel::new(&settings).unwrap();
    let samples = kernel.samples();
    assert_eq!(samples.len(), settings.sample_count as usize);

    let mut prev = 0.0;
    for s in samples {
        assert!(s.dist >= prev);
        assert!(s.dist <= f64::from(settings.disk_radius) + 1e-9);
        assert!((s.offset.hypot() - s.dist).abs() < 1e-9);
        prev = s.dist;
    }
    assert_eq!(samples.last().unwrap().dist, f64::from(settings.disk_radius));
}

#[test]
fn golden_angle_leaves_no_angular_gaps() {
    let kernel = DiskKernel::new(&RenderSettings::default()).unwrap();
    let mut angles: Vec<f64> = kernel
        .samples()
        .iter()
        .map(|s| s.offset.atan2().rem_euclid(TAU))
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut max_gap = TAU - angles.last().unwrap() + angles[0];
    for pair in angles.windows(2) {
        max_gap = max_gap.max(pair[1] - pair[0]);
    }
    // 100 golden-angle samples spread far more evenly than a 0.2 rad gap.
    assert!(max_gap < 0.2, "max angular gap {max_gap}");
}

#[test]
fn matches_ignores_non_sampling_settings() {
    let settings = RenderSettings::default();
    let kernel = DiskKernel::new(&settings).unwrap();
    assert!(kernel.matches(&settings));

    let tinted = RenderSettings {
        shadow_tint: ShadowTint {
            r: 0.5,
            g: 0.5,
            b: 0.5,
        },
        threshold: 60.0,
        ..settings
    };
    assert!(kernel.matches(&tinted));

    let resampled = RenderSettings {
        sample_count: 64,
        ..settings
    };
    assert!(!kernel.matches(&resampled));

    let resized = RenderSettings {
        disk_radius: 40.0,
        ..settings
    };
    assert!(!kernel.matches(&resized));
}

#[test]
fn invalid_settings_do_not_compile() {
    let zero_samples = RenderSettings {
        sample_count: 0,
        ..RenderSettings::default()
    };
    assert!(matches!(
        DiskKernel::new(&zero_samples),
        Err(crate::PenumbraError::Validation(_))
    ));

    let inverted_sizes = RenderSettings {
        min_shadow_size: 50.0,
        max_shadow_size: 10.0,
        ..RenderSettings::default()
    };
    assert!(DiskKernel::new(&inverted_sizes).is_err());
}
