//! Conformal 3D algebra: points, rounds, flats and the full versor zoo.
//!
//! Total dimension 5; masks 1, 2, 4 are the Euclidean directions, 8 is
//! the origin null vector and 16 the infinity null vector. Geometric
//! objects are graded wedges of points; rigid motions are even versors
//! applied with the sandwich product.

use crate::basis::{even_blades, full_blades, grade_blades, Sca, Subspace};
use crate::blade::Blade;
use crate::field::Scalar;
use crate::metric::Conformal;
use crate::multivector::{Closed, Multivector};
use crate::subspaces;

/// The conformal metric over a 3D Euclidean base.
pub type C3 = Conformal<5>;

pub const VEC: [Blade; 5] = grade_blades(5, 1);
pub const EVEC: [Blade; 3] = [1, 2, 4];
pub const EBIV: [Blade; 3] = [3, 5, 6];
pub const PAR: [Blade; 10] = grade_blades(5, 2);
pub const CIR: [Blade; 10] = grade_blades(5, 3);
pub const SPH: [Blade; 5] = grade_blades(5, 4);
pub const ORI: [Blade; 1] = [8];
pub const INF: [Blade; 1] = [16];
pub const MNK: [Blade; 1] = [24];
pub const DRV: [Blade; 3] = [17, 18, 20];
pub const DRB: [Blade; 3] = [19, 21, 22];
pub const DRT: [Blade; 1] = [23];
pub const TNV: [Blade; 3] = [9, 10, 12];
pub const TNB: [Blade; 3] = [11, 13, 14];
pub const TNT: [Blade; 1] = [15];
pub const FLP: [Blade; 4] = [17, 18, 20, 24];
pub const DLL: [Blade; 6] = [3, 5, 6, 17, 18, 20];
pub const LIN: [Blade; 6] = [19, 21, 22, 25, 26, 28];
pub const DLP: [Blade; 4] = [1, 2, 4, 16];
pub const PLN: [Blade; 4] = [23, 27, 29, 30];
pub const ROT: [Blade; 4] = [0, 3, 5, 6];
pub const TRS: [Blade; 4] = [0, 17, 18, 20];
pub const TRV: [Blade; 4] = [0, 9, 10, 12];
pub const DIL: [Blade; 2] = [0, 24];
pub const TSD: [Blade; 5] = [0, 17, 18, 20, 24];
pub const MOT: [Blade; 8] = [0, 3, 5, 6, 17, 18, 20, 23];
pub const BST: [Blade; 11] = [0, 3, 5, 6, 9, 10, 12, 17, 18, 20, 24];
pub const EVEN: [Blade; 16] = even_blades(5);
pub const FULL: [Blade; 32] = full_blades(5);

subspaces! {
    /// Grade-1 subspace: points and dual spheres.
    pub PntB = VEC;
    /// Euclidean direction vectors inside the conformal algebra.
    pub EVecB = EVEC;
    /// Euclidean bivectors: rotor generators.
    pub EBivB = EBIV;
    /// Grade-2 subspace: point pairs.
    pub ParB = PAR;
    /// Grade-3 subspace: circles.
    pub CirB = CIR;
    /// Grade-4 subspace: spheres.
    pub SphB = SPH;
    /// The origin null vector.
    pub OriB = ORI;
    /// The infinity null vector.
    pub InfB = INF;
    /// The Minkowski plane spanned by the null pair.
    pub MnkB = MNK;
    /// Direction vectors (null-translation generators).
    pub DrvB = DRV;
    /// Direction bivectors.
    pub DrbB = DRB;
    /// Direction trivectors.
    pub DrtB = DRT;
    /// Tangent vectors.
    pub TnvB = TNV;
    /// Tangent bivectors.
    pub TnbB = TNB;
    /// Tangent trivectors.
    pub TntB = TNT;
    /// Flat points.
    pub FlpB = FLP;
    /// Dual lines (motor generators).
    pub DllB = DLL;
    /// Direct lines.
    pub LinB = LIN;
    /// Dual planes.
    pub DlpB = DLP;
    /// Direct planes.
    pub PlnB = PLN;
    /// Rotors.
    pub RotB = ROT;
    /// Translators.
    pub TrsB = TRS;
    /// Transversors.
    pub TrvB = TRV;
    /// Dilators.
    pub DilB = DIL;
    /// Dilators translated away from the origin.
    pub TsdB = TSD;
    /// Motors (screw motions).
    pub MotB = MOT;
    /// Boosts.
    pub BstB = BST;
    /// The even subalgebra: general conformal rotors.
    pub ConB = EVEN;
    /// The full algebra.
    pub FullB = FULL;
}

pub type ScalarC = Multivector<C3, Sca, 1>;
pub type Point = Multivector<C3, PntB, 5>;
pub type DualSphere = Point;
pub type Vector = Multivector<C3, EVecB, 3>;
pub type Bivector = Multivector<C3, EBivB, 3>;
pub type Pair = Multivector<C3, ParB, 10>;
pub type Circle = Multivector<C3, CirB, 10>;
pub type Sphere = Multivector<C3, SphB, 5>;
pub type Origin = Multivector<C3, OriB, 1>;
pub type Infinity = Multivector<C3, InfB, 1>;
pub type Minkowski = Multivector<C3, MnkB, 1>;
pub type DirectionVector = Multivector<C3, DrvB, 3>;
pub type DirectionBivector = Multivector<C3, DrbB, 3>;
pub type DirectionTrivector = Multivector<C3, DrtB, 1>;
pub type TangentVector = Multivector<C3, TnvB, 3>;
pub type TangentBivector = Multivector<C3, TnbB, 3>;
pub type TangentTrivector = Multivector<C3, TntB, 1>;
pub type FlatPoint = Multivector<C3, FlpB, 4>;
pub type DualLine = Multivector<C3, DllB, 6>;
pub type Line = Multivector<C3, LinB, 6>;
pub type DualPlane = Multivector<C3, DlpB, 4>;
pub type Plane = Multivector<C3, PlnB, 4>;
pub type Rotor = Multivector<C3, RotB, 4>;
pub type Translator = Multivector<C3, TrsB, 4>;
pub type Transversor = Multivector<C3, TrvB, 4>;
pub type Dilator = Multivector<C3, DilB, 2>;
pub type TranslatedDilator = Multivector<C3, TsdB, 5>;
pub type Motor = Multivector<C3, MotB, 8>;
pub type Boost = Multivector<C3, BstB, 11>;
pub type Con = Multivector<C3, ConB, 16>;
pub type Mv = Multivector<C3, FullB, 32>;

impl Closed for RotB {}
impl Closed for TrsB {}
impl Closed for DilB {}
impl Closed for MotB {}
impl Closed for ConB {}
impl Closed for FullB {}

/// Build a Euclidean direction vector.
#[inline(always)]
pub fn vec(x: Scalar, y: Scalar, z: Scalar) -> Vector {
    Vector::new([x, y, z])
}

pub fn e1() -> Vector {
    Vector::new([1.0, 0.0, 0.0])
}

pub fn e2() -> Vector {
    Vector::new([0.0, 1.0, 0.0])
}

pub fn e3() -> Vector {
    Vector::new([0.0, 0.0, 1.0])
}

/// The origin null vector.
pub fn no() -> Origin {
    Origin::new([1.0])
}

/// The infinity null vector.
pub fn ni() -> Infinity {
    Infinity::new([1.0])
}

/// The Minkowski plane element.
pub fn eplane() -> Minkowski {
    Minkowski::new([1.0])
}

/// Object constructors, built purely from multivector operations.
pub mod construct {
    use super::*;

    /// Null embedding of a Euclidean position: `o + v + (|v|^2 / 2) inf`.
    pub fn point(x: Scalar, y: Scalar, z: Scalar) -> Point {
        Point::new([x, y, z, 1.0, (x * x + y * y + z * z) * 0.5])
    }

    /// Null embedding of a direction vector.
    pub fn null(v: &Vector) -> Point {
        point(v.val[0], v.val[1], v.val[2])
    }

    /// Lift a Euclidean-algebra vector across algebras, then embed it.
    pub fn point_from(v: &crate::spaces::ega3::Vector3) -> Point {
        null(&v.algebra_cast())
    }

    /// Dual sphere centered at a point: `p - (r^2 / 2) inf`.
    pub fn dual_sphere(center: &Point, radius: Scalar) -> DualSphere {
        let mut s = *center;
        s.val[4] -= radius * radius * 0.5;
        s
    }

    /// Point pair through two points.
    pub fn pair(a: &Point, b: &Point) -> Pair {
        a.op(b)
    }

    /// Circle through three points.
    pub fn circle(a: &Point, b: &Point, c: &Point) -> Circle {
        pair(a, b).op(c)
    }

    /// Sphere through four points.
    pub fn sphere(a: &Point, b: &Point, c: &Point, d: &Point) -> Sphere {
        circle(a, b, c).op(d)
    }

    /// Line through two points: their pair wedged with infinity.
    pub fn line(a: &Point, b: &Point) -> Line {
        pair(a, b).op(&ni())
    }

    /// Plane through three points.
    pub fn plane(a: &Point, b: &Point, c: &Point) -> Plane {
        circle(a, b, c).op(&ni())
    }

    /// Flat point: a point wedged with infinity.
    pub fn flat_point(p: &Point) -> FlatPoint {
        p.op(&ni())
    }
}

/// Versor generators.
pub mod gen {
    use super::*;

    /// Rotor as the exponential of a Euclidean bivector:
    /// `exp(b) = cos|b| + sin|b| b^`.
    pub fn rotor(b: &Bivector) -> Rotor {
        let t = b.norm();
        if t == 0.0 {
            return Rotor::new([1.0, 0.0, 0.0, 0.0]);
        }
        let k = t.sin() / t;
        Rotor::new([t.cos(), k * b.val[0], k * b.val[1], k * b.val[2]])
    }

    /// Translator moving by `d`: `1 - (d inf) / 2`. Translation
    /// generators are null, so the exponential series stops here.
    pub fn translator(d: &Vector) -> Translator {
        Translator::new([1.0, -0.5 * d.val[0], -0.5 * d.val[1], -0.5 * d.val[2]])
    }

    /// Transversor (special-conformal generator): `1 + v o`.
    pub fn transversor(v: &Vector) -> Transversor {
        Transversor::new([1.0, v.val[0], v.val[1], v.val[2]])
    }

    /// Dilator scaling by `exp(t)` about the origin:
    /// `cosh(t/2) + sinh(t/2) E`.
    pub fn dilator(t: Scalar) -> Dilator {
        Dilator::new([(t * 0.5).cosh(), (t * 0.5).sinh()])
    }

    /// Dilator about an arbitrary center: the origin dilator conjugated
    /// by the translator reaching the center.
    pub fn dilator_at(center: &Point, t: Scalar) -> TranslatedDilator {
        let tr = translator(&center.project());
        let td: TranslatedDilator = tr.gp(&dilator(t));
        td.gp(&tr.reverse())
    }

    /// Boost along a point pair: `exp(p)`, hyperbolic, circular or
    /// degenerate depending on the sign of `p`'s square.
    pub fn boost(p: &Pair) -> Boost {
        let w = p.wt();
        let pb: Boost = p.cast();
        if w > 0.0 {
            let s = w.sqrt();
            let mut out = pb * (s.sinh() / s);
            out.val[0] += s.cosh();
            out
        } else if w < 0.0 {
            let s = (-w).sqrt();
            let mut out = pb * (s.sin() / s);
            out.val[0] += s.cos();
            out
        } else {
            let mut out = pb;
            out.val[0] += 1.0;
            out
        }
    }

    /// Motor as a translation composed with a rotation.
    pub fn motor(d: &Vector, b: &Bivector) -> Motor {
        translator(d).gp(&rotor(b))
    }
}

impl<B: Subspace<N>, const N: usize> Multivector<C3, B, N> {
    /// Even sandwich with the full algebra as intermediate.
    pub fn sp<BV: Subspace<NV>, const NV: usize>(
        &self,
        v: &Multivector<C3, BV, NV>,
    ) -> Self {
        self.spin::<BV, NV, FullB, 32>(v)
    }

    /// Odd sandwich with the full algebra as intermediate.
    pub fn re<BV: Subspace<NV>, const NV: usize>(
        &self,
        v: &Multivector<C3, BV, NV>,
    ) -> Self {
        self.reflect::<BV, NV, FullB, 32>(v)
    }

    /// Rotate by the exponential of a Euclidean bivector.
    pub fn rot(&self, b: &Bivector) -> Self {
        self.sp(&gen::rotor(b))
    }

    /// Long-form alias for `rot`.
    pub fn rotate(&self, b: &Bivector) -> Self {
        self.rot(b)
    }

    /// Translate by a direction vector.
    pub fn trs(&self, d: &Vector) -> Self {
        self.sp(&gen::translator(d))
    }

    /// Long-form alias for `trs`.
    pub fn translate(&self, d: &Vector) -> Self {
        self.trs(d)
    }

    /// Transverse (special-conformal transform) by a direction vector.
    pub fn trv(&self, v: &Vector) -> Self {
        self.sp(&gen::transversor(v))
    }

    /// Long-form alias for `trv`.
    pub fn transverse(&self, v: &Vector) -> Self {
        self.trv(v)
    }

    /// Apply a motor (screw motion).
    pub fn mot(&self, m: &Motor) -> Self {
        self.sp(m)
    }

    /// Long-form alias for `mot`.
    pub fn motor(&self, m: &Motor) -> Self {
        self.mot(m)
    }

    /// Alias for `mot`: a motor is a twist about a line.
    pub fn twist(&self, m: &Motor) -> Self {
        self.mot(m)
    }

    /// Boost along a point pair.
    pub fn bst(&self, p: &Pair) -> Self {
        self.sp(&gen::boost(p))
    }

    /// Long-form alias for `bst`.
    pub fn boost(&self, p: &Pair) -> Self {
        self.bst(p)
    }

    /// Dilate about a center point by `exp(amt)`.
    pub fn dil(&self, center: &Point, amt: Scalar) -> Self {
        self.sp(&gen::dilator_at(center, amt))
    }

    /// Long-form alias for `dil`.
    pub fn dilate(&self, center: &Point, amt: Scalar) -> Self {
        self.dil(center, amt)
    }
}
