//! Euclidean 3D algebra: the workhorse space for rotor arithmetic.

use crate::basis::{even_blades, full_blades, grade_blades, Sca, Subspace};
use crate::blade::Blade;
use crate::field::Scalar;
use crate::metric::Euclid;
use crate::multivector::{Closed, Multivector};
use crate::subspaces;

/// The 3D Euclidean metric.
pub type E3 = Euclid<3>;

pub const VEC: [Blade; 3] = grade_blades(3, 1);
pub const BIV: [Blade; 3] = grade_blades(3, 2);
pub const TRI: [Blade; 1] = grade_blades(3, 3);
pub const EVEN: [Blade; 4] = even_blades(3);
pub const FULL: [Blade; 8] = full_blades(3);

subspaces! {
    /// Grade-1 subspace.
    pub VecB = VEC;
    /// Grade-2 subspace.
    pub BivB = BIV;
    /// Grade-3 (pseudoscalar) subspace.
    pub TriB = TRI;
    /// Even subalgebra: scalar + bivectors, the rotor group.
    pub RotB = EVEN;
    /// The full algebra.
    pub FullB = FULL;
}

pub type Scalar3 = Multivector<E3, Sca, 1>;
pub type Vector3 = Multivector<E3, VecB, 3>;
pub type Bivector3 = Multivector<E3, BivB, 3>;
pub type Trivector3 = Multivector<E3, TriB, 1>;
pub type Rotor3 = Multivector<E3, RotB, 4>;
pub type Mv3 = Multivector<E3, FullB, 8>;

impl Closed for RotB {}
impl Closed for FullB {}

/// Build a vector from its three components.
#[inline(always)]
pub fn vec(x: Scalar, y: Scalar, z: Scalar) -> Vector3 {
    Vector3::new([x, y, z])
}

// Unit basis elements are constants conceptually, so they are returned
// fresh from constructors rather than held in shared statics.

pub fn x() -> Vector3 {
    Vector3::new([1.0, 0.0, 0.0])
}

pub fn y() -> Vector3 {
    Vector3::new([0.0, 1.0, 0.0])
}

pub fn z() -> Vector3 {
    Vector3::new([0.0, 0.0, 1.0])
}

pub fn xy() -> Bivector3 {
    Bivector3::new([1.0, 0.0, 0.0])
}

pub fn xz() -> Bivector3 {
    Bivector3::new([0.0, 1.0, 0.0])
}

pub fn yz() -> Bivector3 {
    Bivector3::new([0.0, 0.0, 1.0])
}

/// Rotor rotating by `angle` radians about `axis` (right-handed):
/// `R = cos(angle/2) - sin(angle/2) (I n)`.
pub fn rotor(axis: [Scalar; 3], angle: Scalar) -> Rotor3 {
    let half = angle * 0.5;
    let c = half.cos();
    let s = half.sin();
    let n = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    let (nx, ny, nz) = (axis[0] / n, axis[1] / n, axis[2] / n);
    // I n = n1 e23 - n2 e13 + n3 e12; slots are [1, e12, e13, e23].
    Rotor3::new([c, -s * nz, s * ny, -s * nx])
}

/// Exponential of a bivector: `exp(b) = cos|b| + sin|b| b^`. Spinning by
/// `exp(b)` rotates by `2|b|` against the orientation of `b`.
pub fn rotor_exp(b: &Bivector3) -> Rotor3 {
    let t = b.norm();
    if t == 0.0 {
        return Rotor3::new([1.0, 0.0, 0.0, 0.0]);
    }
    let k = t.sin() / t;
    Rotor3::new([t.cos(), k * b.val[0], k * b.val[1], k * b.val[2]])
}

impl<B: Subspace<N>, const N: usize> Multivector<E3, B, N> {
    /// Even sandwich with the full algebra as intermediate.
    pub fn sp<BV: Subspace<NV>, const NV: usize>(
        &self,
        v: &Multivector<E3, BV, NV>,
    ) -> Self {
        self.spin::<BV, NV, FullB, 8>(v)
    }

    /// Odd sandwich with the full algebra as intermediate.
    pub fn re<BV: Subspace<NV>, const NV: usize>(
        &self,
        v: &Multivector<E3, BV, NV>,
    ) -> Self {
        self.reflect::<BV, NV, FullB, 8>(v)
    }

    /// Spin by the exponential of a bivector generator.
    pub fn rot(&self, b: &Bivector3) -> Self {
        self.sp(&rotor_exp(b))
    }

    /// Long-form alias for `rot`.
    pub fn rotate(&self, b: &Bivector3) -> Self {
        self.rot(b)
    }

    /// Rotate about an axis by an angle in radians.
    pub fn rotate_axis_angle(&self, axis: [Scalar; 3], angle: Scalar) -> Self {
        self.sp(&rotor(axis, angle))
    }
}
