//! SIMD-batched rotor application for the Euclidean 3D algebra.
//!
//! The table-driven sandwich is exact but serial; this path folds a
//! rotor down to axis/half-angle form once and rotates four or eight
//! vectors per call with `wide::f64x4`. Lanes run in f64 regardless of
//! the configured scalar field.

use crate::field::Scalar;
use crate::spaces::ega3::{Rotor3, Vector3};
use wide::f64x4;

/// A rotor folded to axis + half-angle form for batched application.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRotor {
    axis: [f64; 3],
    w: f64,
    s: f64,
}

impl BatchRotor {
    /// Build from a rotation axis and angle (radians).
    pub fn from_axis_angle(axis: [Scalar; 3], angle: Scalar) -> Self {
        let axis = [axis[0] as f64, axis[1] as f64, axis[2] as f64];
        let half = angle as f64 * 0.5;
        let n = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        BatchRotor {
            axis: [axis[0] / n, axis[1] / n, axis[2] / n],
            w: half.cos(),
            s: half.sin(),
        }
    }

    /// Fold an even-subalgebra rotor down to axis form.
    ///
    /// The bivector part of `R = cos(t/2) - sin(t/2) (I n)` unpacks to
    /// `s*n = (-e23, e13, -e12)`; an identity rotor gets a placeholder
    /// axis and zero sine.
    pub fn from_rotor(r: &Rotor3) -> Self {
        let sn = [-r.val[3] as f64, r.val[2] as f64, -(r.val[1] as f64)];
        let s = (sn[0] * sn[0] + sn[1] * sn[1] + sn[2] * sn[2]).sqrt();
        if s == 0.0 {
            return BatchRotor { axis: [0.0, 0.0, 1.0], w: r.val[0] as f64, s: 0.0 };
        }
        BatchRotor {
            axis: [sn[0] / s, sn[1] / s, sn[2] / s],
            w: r.val[0] as f64,
            s,
        }
    }

    /// Rotate a single vector (~20 flops), fully inlined.
    #[inline(always)]
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        let [ax, ay, az] = self.axis;
        let [vx, vy, vz] = [v.val[0] as f64, v.val[1] as f64, v.val[2] as f64];

        // t = axis x v
        let tx = ay * vz - az * vy;
        let ty = az * vx - ax * vz;
        let tz = ax * vy - ay * vx;

        // u = axis x t
        let ux = ay * tz - az * ty;
        let uy = az * tx - ax * tz;
        let uz = ax * ty - ay * tx;

        let k1 = 2.0 * self.w * self.s;
        let k2 = 2.0 * self.s * self.s;

        Vector3::new([
            k2.mul_add(ux, k1.mul_add(tx, vx)) as Scalar,
            k2.mul_add(uy, k1.mul_add(ty, vy)) as Scalar,
            k2.mul_add(uz, k1.mul_add(tz, vz)) as Scalar,
        ])
    }

    /// Rotate four vectors in one SIMD pass.
    #[inline(always)]
    pub fn rotate4(&self, vs: [Vector3; 4]) -> [Vector3; 4] {
        let ax = f64x4::splat(self.axis[0]);
        let ay = f64x4::splat(self.axis[1]);
        let az = f64x4::splat(self.axis[2]);

        let lane = |k: usize| {
            f64x4::from([
                vs[0].val[k] as f64,
                vs[1].val[k] as f64,
                vs[2].val[k] as f64,
                vs[3].val[k] as f64,
            ])
        };
        let vx = lane(0);
        let vy = lane(1);
        let vz = lane(2);

        let tx = ay * vz - az * vy;
        let ty = az * vx - ax * vz;
        let tz = ax * vy - ay * vx;

        let ux = ay * tz - az * ty;
        let uy = az * tx - ax * tz;
        let uz = ax * ty - ay * tx;

        let k1 = f64x4::splat(2.0 * self.w * self.s);
        let k2 = f64x4::splat(2.0 * self.s * self.s);

        let rx = k2.mul_add(ux, k1.mul_add(tx, vx)).to_array();
        let ry = k2.mul_add(uy, k1.mul_add(ty, vy)).to_array();
        let rz = k2.mul_add(uz, k1.mul_add(tz, vz)).to_array();

        [
            Vector3::new([rx[0] as Scalar, ry[0] as Scalar, rz[0] as Scalar]),
            Vector3::new([rx[1] as Scalar, ry[1] as Scalar, rz[1] as Scalar]),
            Vector3::new([rx[2] as Scalar, ry[2] as Scalar, rz[2] as Scalar]),
            Vector3::new([rx[3] as Scalar, ry[3] as Scalar, rz[3] as Scalar]),
        ]
    }

    /// Rotate eight vectors by two 4-lane passes.
    #[inline(always)]
    pub fn rotate8(&self, vs: [Vector3; 8]) -> [Vector3; 8] {
        let r0 = self.rotate4([vs[0], vs[1], vs[2], vs[3]]);
        let r1 = self.rotate4([vs[4], vs[5], vs[6], vs[7]]);
        [r0[0], r0[1], r0[2], r0[3], r1[0], r1[1], r1[2], r1[3]]
    }
}
