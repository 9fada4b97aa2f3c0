// tests/simd_tests.rs
#![cfg(not(feature = "f32"))] // tolerances assume f64 coefficients

use cga_engine::simd::BatchRotor;
use cga_engine::spaces::ega3::{self, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f64 = 1e-12;

#[test]
fn batch_rotor_matches_sandwich_product() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let axis = [
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0f64),
        ];
        if axis.iter().map(|a| a * a).sum::<f64>() < 1e-3 {
            continue;
        }
        let angle = rng.gen_range(-3.0..3.0);
        let r = ega3::rotor(axis, angle);
        let batch = BatchRotor::from_rotor(&r);

        let v = ega3::vec(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
        );
        let table = v.sp(&r);
        let fast = batch.rotate(v);
        for i in 0..3 {
            assert!(
                (table.val[i] - fast.val[i]).abs() < 1e-9,
                "axis {:?} angle {} slot {}: {} vs {}",
                axis,
                angle,
                i,
                table.val[i],
                fast.val[i]
            );
        }
    }
}

#[test]
fn from_axis_angle_agrees_with_from_rotor() {
    let axis = [0.0, 0.0, 1.0];
    let angle = std::f64::consts::FRAC_PI_2;
    let a = BatchRotor::from_axis_angle(axis, angle);
    let b = BatchRotor::from_rotor(&ega3::rotor(axis, angle));
    let v = ega3::vec(1.0, 0.0, 0.0);
    let ra = a.rotate(v);
    let rb = b.rotate(v);
    for i in 0..3 {
        assert!((ra.val[i] - rb.val[i]).abs() < EPS);
    }
    assert!(ra.val[0].abs() < EPS);
    assert!((ra.val[1] - 1.0).abs() < EPS);
}

#[test]
fn rotate4_matches_scalar_path() {
    let r = BatchRotor::from_axis_angle([1.0, 2.0, 2.0], 0.8);
    let vs = [
        ega3::vec(1.0, 0.0, 0.0),
        ega3::vec(0.0, 1.0, 0.0),
        ega3::vec(0.0, 0.0, 1.0),
        ega3::vec(1.0, -2.0, 3.0),
    ];
    let wide = r.rotate4(vs);
    for (k, v) in vs.iter().enumerate() {
        let narrow = r.rotate(*v);
        for i in 0..3 {
            assert!((wide[k].val[i] - narrow.val[i]).abs() < 1e-12);
        }
    }
}

#[test]
fn rotate8_is_two_rotate4_passes() {
    let r = BatchRotor::from_axis_angle([0.0, 1.0, 0.0], 1.1);
    let v = ega3::vec(0.3, -0.7, 0.2);
    let out = r.rotate8([v; 8]);
    let one = r.rotate(v);
    for o in out.iter() {
        assert_eq!(o, &one);
    }
}

#[test]
fn identity_rotor_folds_safely() {
    let r = BatchRotor::from_rotor(&ega3::rotor([0.0, 0.0, 1.0], 0.0));
    let v: Vector3 = ega3::vec(1.0, 2.0, 3.0);
    assert_eq!(r.rotate(v), v);
}
