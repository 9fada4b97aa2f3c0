//! The multivector value type.
//!
//! A `Multivector<M, B, N>` is a fixed `[Scalar; N]` tagged by a metric
//! and a subspace marker; slot *i* holds the coefficient of
//! `B::BLADES[i]`. Everything is value semantics: compound operators
//! mutate the receiver, every other operation returns a fresh value.
//!
//! Products between different subspaces name their result subspace
//! through inference or a turbofish; an impossible result type is
//! rejected when its table is monomorphized, at build time.

use crate::basis::{find, slot, Subspace};
use crate::blade::{blade_name, pss, Blade};
use crate::field::Scalar;
use crate::metric::Metric;
use crate::products::{
    apply, involution_signs, scalar_table, CastMap, ConvertMap, Involution, Products,
};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem,
    Sub, SubAssign,
};

/// A geometric number: `N` coefficients over the blades of subspace `B`
/// in the algebra of metric `M`.
pub struct Multivector<M, B, const N: usize> {
    /// Coefficients, positionally matched to `B::BLADES`.
    pub val: [Scalar; N],
    _space: PhantomData<(M, B)>,
}

// Manual impls keep the marker parameters free of derive bounds.
impl<M, B, const N: usize> Copy for Multivector<M, B, N> {}

impl<M, B, const N: usize> Clone for Multivector<M, B, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, B, const N: usize> PartialEq for Multivector<M, B, N> {
    /// Exact element-wise comparison; no epsilon.
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl<M, B, const N: usize> fmt::Debug for Multivector<M, B, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Multivector").field(&self.val).finish()
    }
}

impl<M, B, const N: usize> Default for Multivector<M, B, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<M, B, const N: usize> Multivector<M, B, N> {
    /// Construct from exactly `N` coefficients; a different count is a
    /// type error.
    #[inline(always)]
    pub const fn new(val: [Scalar; N]) -> Self {
        Self { val, _space: PhantomData }
    }

    /// The zero element.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self::new([0.0; N])
    }

    /// Overwrite every coefficient with `v`.
    pub fn reset(&mut self, v: Scalar) -> &mut Self {
        self.val = [v; N];
        self
    }
}

impl<M, B, const N: usize> Index<usize> for Multivector<M, B, N> {
    type Output = Scalar;
    #[inline(always)]
    fn index(&self, i: usize) -> &Scalar {
        &self.val[i]
    }
}

impl<M, B, const N: usize> IndexMut<usize> for Multivector<M, B, N> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut Scalar {
        &mut self.val[i]
    }
}

impl<M: Metric, B: Subspace<N>, const N: usize> Multivector<M, B, N> {
    const SCALAR_GP: [[f64; N]; N] =
        scalar_table(&B::BLADES, &B::BLADES, &M::SIG, M::DIM, M::CONFORMAL);
    const REVERSE_SIGNS: [f64; N] = involution_signs(&B::BLADES, Involution::Reverse);
    const INVOLUTE_SIGNS: [f64; N] = involution_signs(&B::BLADES, Involution::Involute);
    const CONJUGATE_SIGNS: [f64; N] = involution_signs(&B::BLADES, Involution::Conjugate);

    /// A single-blade element. Panics when the blade is not part of `B`.
    pub fn from_blade(b: Blade, w: Scalar) -> Self {
        let mut m = Self::zero();
        m.set(b, w);
        m
    }

    /// Coefficient of a blade. Panics when the blade is not part of `B`.
    #[inline]
    pub fn get(&self, b: Blade) -> Scalar {
        self.val[slot(&B::BLADES, b)]
    }

    /// Set the coefficient of a blade. Panics when the blade is not part
    /// of `B`.
    #[inline]
    pub fn set(&mut self, b: Blade, v: Scalar) -> &mut Self {
        self.val[slot(&B::BLADES, b)] = v;
        self
    }

    // ---- products ----------------------------------------------------

    /// Geometric product. The result subspace is named by the caller
    /// (through inference or a turbofish) and checked at build time.
    #[inline]
    pub fn gp<B2, const N2: usize, BO, const NO: usize>(
        &self,
        rhs: &Multivector<M, B2, N2>,
    ) -> Multivector<M, BO, NO>
    where
        B2: Subspace<N2>,
        BO: Subspace<NO>,
    {
        Multivector::new(apply(
            &Products::<M, B, B2, BO, N, N2, NO>::GEOMETRIC,
            &self.val,
            &rhs.val,
        ))
    }

    /// Outer (wedge) product.
    #[inline]
    pub fn op<B2, const N2: usize, BO, const NO: usize>(
        &self,
        rhs: &Multivector<M, B2, N2>,
    ) -> Multivector<M, BO, NO>
    where
        B2: Subspace<N2>,
        BO: Subspace<NO>,
    {
        Multivector::new(apply(
            &Products::<M, B, B2, BO, N, N2, NO>::OUTER,
            &self.val,
            &rhs.val,
        ))
    }

    /// Inner product (left contraction).
    #[inline]
    pub fn ip<B2, const N2: usize, BO, const NO: usize>(
        &self,
        rhs: &Multivector<M, B2, N2>,
    ) -> Multivector<M, BO, NO>
    where
        B2: Subspace<N2>,
        BO: Subspace<NO>,
    {
        Multivector::new(apply(
            &Products::<M, B, B2, BO, N, N2, NO>::INNER,
            &self.val,
            &rhs.val,
        ))
    }

    /// Commutator product, `(ab - ba) / 2`.
    pub fn commutator<B2, const N2: usize, BO, const NO: usize>(
        &self,
        rhs: &Multivector<M, B2, N2>,
    ) -> Multivector<M, BO, NO>
    where
        B2: Subspace<N2>,
        BO: Subspace<NO>,
    {
        let ab: Multivector<M, BO, NO> = self.gp(rhs);
        let ba: Multivector<M, BO, NO> = rhs.gp(self);
        (ab - ba) * 0.5
    }

    /// Multivector division, `a * !b`.
    pub fn div<B2, const N2: usize, BO, const NO: usize>(
        &self,
        rhs: &Multivector<M, B2, N2>,
    ) -> Multivector<M, BO, NO>
    where
        B2: Subspace<N2>,
        BO: Subspace<NO>,
    {
        self.gp(&rhs.inverse())
    }

    /// Sum across subspaces: the result basis must contain the union of
    /// both operand bases (checked at build time); overlapping blades
    /// add, the rest pass through.
    pub fn sum<B2, const N2: usize, BO, const NO: usize>(
        &self,
        rhs: &Multivector<M, B2, N2>,
    ) -> Multivector<M, BO, NO>
    where
        B2: Subspace<N2>,
        BO: Subspace<NO>,
    {
        let ma = &Products::<M, B, B2, BO, N, N2, NO>::SUM_A;
        let mb = &Products::<M, B, B2, BO, N, N2, NO>::SUM_B;
        let mut out = [0.0 as Scalar; NO];
        for (k, o) in out.iter_mut().enumerate() {
            if ma[k] != usize::MAX {
                *o += self.val[ma[k]];
            }
            if mb[k] != usize::MAX {
                *o += rhs.val[mb[k]];
            }
        }
        Multivector::new(out)
    }

    // ---- casts -------------------------------------------------------

    /// Re-express into another subspace of the same algebra. Destination
    /// slots absent from the source are zero-filled; a nonzero source
    /// coefficient with no destination slot is silently truncated in
    /// release builds and asserted against in debug builds.
    pub fn cast<BO, const NO: usize>(&self) -> Multivector<M, BO, NO>
    where
        BO: Subspace<NO>,
    {
        let map = &CastMap::<B, BO, N, NO>::MAP;
        let mut out = [0.0 as Scalar; NO];
        for (k, o) in out.iter_mut().enumerate() {
            if map[k] != usize::MAX {
                *o = self.val[map[k]];
            }
        }
        for i in 0..N {
            debug_assert!(
                self.val[i] == 0.0 || find(&BO::BLADES, B::BLADES[i]).is_some(),
                "cast drops a nonzero coefficient"
            );
        }
        Multivector::new(out)
    }

    /// Project onto another subspace of the same algebra, dropping
    /// coefficients of blades the destination lacks. This is the
    /// intentional-narrowing counterpart of `cast` (extracting the
    /// Euclidean part of a point, say) and never asserts.
    pub fn project<BO, const NO: usize>(&self) -> Multivector<M, BO, NO>
    where
        BO: Subspace<NO>,
    {
        let map = &CastMap::<B, BO, N, NO>::MAP;
        let mut out = [0.0 as Scalar; NO];
        for (k, o) in out.iter_mut().enumerate() {
            if map[k] != usize::MAX {
                *o = self.val[map[k]];
            }
        }
        Multivector::new(out)
    }

    /// Re-express into a subspace of a different algebra, matching blades
    /// by bitmask. Blades straddling a conformal algebra's null plane are
    /// rejected at build time.
    pub fn algebra_cast<M2, BO, const NO: usize>(&self) -> Multivector<M2, BO, NO>
    where
        M2: Metric,
        BO: Subspace<NO>,
    {
        let map = &ConvertMap::<M, M2, B, BO, N, NO>::MAP;
        let mut out = [0.0 as Scalar; NO];
        for (k, o) in out.iter_mut().enumerate() {
            if map[k] != usize::MAX {
                *o = self.val[map[k]];
            }
        }
        Multivector::new(out)
    }

    /// Positional copy into another subspace (slot *i* to slot *i*),
    /// excess slots dropped or zero-filled.
    pub fn copy_to<BO, const NO: usize>(&self) -> Multivector<M, BO, NO>
    where
        BO: Subspace<NO>,
    {
        let mut out = [0.0 as Scalar; NO];
        let n = if NO < N { NO } else { N };
        out[..n].copy_from_slice(&self.val[..n]);
        Multivector::new(out)
    }

    // ---- involutions -------------------------------------------------

    fn scaled_by(&self, signs: &[f64; N]) -> Self {
        let mut out = self.val;
        for (o, s) in out.iter_mut().zip(signs.iter()) {
            *o *= *s as Scalar;
        }
        Self::new(out)
    }

    /// Reversion: flips blades of grade 2, 3 mod 4.
    pub fn reverse(&self) -> Self {
        self.scaled_by(&Self::REVERSE_SIGNS)
    }

    /// Grade involution: flips odd-grade blades.
    pub fn involute(&self) -> Self {
        self.scaled_by(&Self::INVOLUTE_SIGNS)
    }

    /// Clifford conjugation: flips blades of grade 1, 2 mod 4.
    pub fn conjugate(&self) -> Self {
        self.scaled_by(&Self::CONJUGATE_SIGNS)
    }

    /// Versor inverse: `~a / (a ~a)[0]`. A null element (zero scalar
    /// magnitude) yields its unscaled reverse -- a defined fallback that
    /// keeps numeric pipelines flowing, not an error.
    pub fn inverse(&self) -> Self {
        let r = self.reverse();
        let m = self.rwt();
        if m == 0.0 {
            r
        } else {
            r / m
        }
    }

    // ---- norms -------------------------------------------------------

    /// Weight: scalar part of `x . x`.
    pub fn wt(&self) -> Scalar {
        let mut acc = 0.0 as Scalar;
        for i in 0..N {
            if self.val[i] == 0.0 {
                continue;
            }
            for j in 0..N {
                acc += Self::SCALAR_GP[i][j] as Scalar * self.val[i] * self.val[j];
            }
        }
        acc
    }

    /// Reverse weight: scalar part of `x . ~x`.
    pub fn rwt(&self) -> Scalar {
        let mut acc = 0.0 as Scalar;
        for i in 0..N {
            if self.val[i] == 0.0 {
                continue;
            }
            for j in 0..N {
                acc += Self::SCALAR_GP[i][j] as Scalar
                    * Self::REVERSE_SIGNS[j] as Scalar
                    * self.val[i]
                    * self.val[j];
            }
        }
        acc
    }

    /// Norm: `sqrt(rwt)`, clamped to 0 for negative reverse weights.
    pub fn norm(&self) -> Scalar {
        let a = self.rwt();
        if a < 0.0 {
            0.0
        } else {
            a.sqrt()
        }
    }

    /// Signed norm: preserves the sign of a negative reverse weight.
    pub fn rnorm(&self) -> Scalar {
        let a = self.rwt();
        if a < 0.0 {
            -(-a).sqrt()
        } else {
            a.sqrt()
        }
    }

    /// Normalized by `sqrt(|wt|)`; the zero-norm element maps to zero
    /// rather than NaN.
    pub fn unit(&self) -> Self {
        let t = self.wt().abs().sqrt();
        if t == 0.0 {
            Self::zero()
        } else {
            *self / t
        }
    }

    /// Normalized by the signed norm; zero-guarded like `unit`.
    pub fn runit(&self) -> Self {
        let t = self.rnorm();
        if t == 0.0 {
            Self::zero()
        } else {
            *self / t
        }
    }

    /// Normalized by `norm`; zero-guarded like `unit`.
    pub fn tunit(&self) -> Self {
        let t = self.norm();
        if t == 0.0 {
            Self::zero()
        } else {
            *self / t
        }
    }

    // ---- duality -----------------------------------------------------

    /// Dual: geometric product with the negated pseudoscalar.
    pub fn dual<BO, const NO: usize>(&self) -> Multivector<M, BO, NO>
    where
        BO: Subspace<NO>,
    {
        self.gp(&Multivector::<M, PssOf<M>, 1>::new([-1.0]))
    }

    /// Undual: geometric product with the pseudoscalar.
    pub fn undual<BO, const NO: usize>(&self) -> Multivector<M, BO, NO>
    where
        BO: Subspace<NO>,
    {
        self.gp(&Multivector::<M, PssOf<M>, 1>::new([1.0]))
    }

    /// Euclidean dual: product with the negated Euclidean
    /// sub-pseudoscalar of a conformal algebra.
    pub fn duale<BO, const NO: usize>(&self) -> Multivector<M, BO, NO>
    where
        BO: Subspace<NO>,
    {
        self.gp(&Multivector::<M, EucPssOf<M>, 1>::new([-1.0]))
    }

    /// Euclidean undual.
    pub fn unduale<BO, const NO: usize>(&self) -> Multivector<M, BO, NO>
    where
        BO: Subspace<NO>,
    {
        self.gp(&Multivector::<M, EucPssOf<M>, 1>::new([1.0]))
    }

    // ---- sandwich transforms -----------------------------------------

    /// Even (rotor) sandwich `v x ~v`, projected back onto `x`'s
    /// subspace. `BI` is the intermediate basis holding `v * x` exactly;
    /// the full basis always works.
    pub fn spin<BV, const NV: usize, BI, const NI: usize>(
        &self,
        v: &Multivector<M, BV, NV>,
    ) -> Self
    where
        BV: Subspace<NV>,
        BI: Subspace<NI>,
    {
        let t: Multivector<M, BI, NI> = v.gp(self);
        Self::new(apply(
            &Products::<M, BI, BV, B, NI, NV, N>::GEOMETRIC_PROJECTED,
            &t.val,
            &v.reverse().val,
        ))
    }

    /// Odd (reflection) sandwich `v x^ ~v` over the grade-involuted
    /// receiver, projected like `spin`.
    pub fn reflect<BV, const NV: usize, BI, const NI: usize>(
        &self,
        v: &Multivector<M, BV, NV>,
    ) -> Self
    where
        BV: Subspace<NV>,
        BI: Subspace<NI>,
    {
        let t: Multivector<M, BI, NI> = v.gp(&self.involute());
        Self::new(apply(
            &Products::<M, BI, BV, B, NI, NV, N>::GEOMETRIC_PROJECTED,
            &t.val,
            &v.reverse().val,
        ))
    }
}

/// The pseudoscalar subspace of an algebra.
#[derive(Copy, Clone, Debug)]
pub struct PssOf<M>(PhantomData<M>);

impl<M: Metric> Subspace<1> for PssOf<M> {
    const BLADES: [Blade; 1] = [pss(M::DIM)];
}

/// The Euclidean sub-pseudoscalar subspace of a conformal algebra.
#[derive(Copy, Clone, Debug)]
pub struct EucPssOf<M>(PhantomData<M>);

impl<M: Metric> Subspace<1> for EucPssOf<M> {
    const BLADES: [Blade; 1] = [pss(M::DIM - 2)];
}

/// The unit pseudoscalar element.
pub fn pseudoscalar<M: Metric>() -> Multivector<M, PssOf<M>, 1> {
    Multivector::new([1.0])
}

/// The unit Euclidean sub-pseudoscalar element.
pub fn euclidean_pseudoscalar<M: Metric>() -> Multivector<M, EucPssOf<M>, 1> {
    Multivector::new([1.0])
}

/// Marker for subspaces closed under the geometric product and
/// containing the scalar blade (the full basis and the versor groups).
/// Closure is what lets `*`, `^`, `%` and `/` return `Self`.
pub trait Closed {}

// ---- same-basis arithmetic ------------------------------------------

impl<M, B, const N: usize> Add for Multivector<M, B, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self.val;
        for (o, r) in out.iter_mut().zip(rhs.val.iter()) {
            *o += *r;
        }
        Self::new(out)
    }
}

impl<M, B, const N: usize> Sub for Multivector<M, B, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.val;
        for (o, r) in out.iter_mut().zip(rhs.val.iter()) {
            *o -= *r;
        }
        Self::new(out)
    }
}

impl<M, B, const N: usize> Neg for Multivector<M, B, N> {
    type Output = Self;
    fn neg(self) -> Self {
        let mut out = self.val;
        for o in out.iter_mut() {
            *o = -*o;
        }
        Self::new(out)
    }
}

impl<M, B, const N: usize> AddAssign for Multivector<M, B, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (o, r) in self.val.iter_mut().zip(rhs.val.iter()) {
            *o += *r;
        }
    }
}

impl<M, B, const N: usize> SubAssign for Multivector<M, B, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (o, r) in self.val.iter_mut().zip(rhs.val.iter()) {
            *o -= *r;
        }
    }
}

impl<M, B, const N: usize> Mul<Scalar> for Multivector<M, B, N> {
    type Output = Self;
    fn mul(self, rhs: Scalar) -> Self {
        let mut out = self.val;
        for o in out.iter_mut() {
            *o *= rhs;
        }
        Self::new(out)
    }
}

impl<M, B, const N: usize> Mul<Multivector<M, B, N>> for Scalar {
    type Output = Multivector<M, B, N>;
    fn mul(self, rhs: Multivector<M, B, N>) -> Multivector<M, B, N> {
        rhs * self
    }
}

impl<M, B, const N: usize> MulAssign<Scalar> for Multivector<M, B, N> {
    fn mul_assign(&mut self, rhs: Scalar) {
        for o in self.val.iter_mut() {
            *o *= rhs;
        }
    }
}

impl<M, B, const N: usize> Div<Scalar> for Multivector<M, B, N> {
    type Output = Self;
    fn div(self, rhs: Scalar) -> Self {
        let mut out = self.val;
        for o in out.iter_mut() {
            *o /= rhs;
        }
        Self::new(out)
    }
}

impl<M, B, const N: usize> DivAssign<Scalar> for Multivector<M, B, N> {
    fn div_assign(&mut self, rhs: Scalar) {
        for o in self.val.iter_mut() {
            *o /= rhs;
        }
    }
}

// ---- closed-subspace operator sugar ---------------------------------

impl<M, B, const N: usize> Mul for Multivector<M, B, N>
where
    M: Metric,
    B: Subspace<N> + Closed,
{
    type Output = Self;
    /// Geometric product within a closed subspace.
    fn mul(self, rhs: Self) -> Self {
        self.gp(&rhs)
    }
}

impl<M, B, const N: usize> MulAssign for Multivector<M, B, N>
where
    M: Metric,
    B: Subspace<N> + Closed,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<M, B, const N: usize> BitXor for Multivector<M, B, N>
where
    M: Metric,
    B: Subspace<N> + Closed,
{
    type Output = Self;
    /// Outer product within a closed subspace.
    fn bitxor(self, rhs: Self) -> Self {
        self.op(&rhs)
    }
}

impl<M, B, const N: usize> Rem for Multivector<M, B, N>
where
    M: Metric,
    B: Subspace<N> + Closed,
{
    type Output = Self;
    /// Commutator product within a closed subspace.
    fn rem(self, rhs: Self) -> Self {
        self.commutator(&rhs)
    }
}

impl<M, B, const N: usize> Div for Multivector<M, B, N>
where
    M: Metric,
    B: Subspace<N> + Closed,
{
    type Output = Self;
    /// Multivector division within a closed subspace.
    fn div(self, rhs: Self) -> Self {
        self.gp(&rhs.inverse())
    }
}

impl<M, B, const N: usize> DivAssign for Multivector<M, B, N>
where
    M: Metric,
    B: Subspace<N> + Closed,
{
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<M, B, const N: usize> Add<Scalar> for Multivector<M, B, N>
where
    M: Metric,
    B: Subspace<N> + Closed,
{
    type Output = Self;
    fn add(self, rhs: Scalar) -> Self {
        let mut out = self;
        out.val[slot(&B::BLADES, 0)] += rhs;
        out
    }
}

impl<M, B, const N: usize> Sub<Scalar> for Multivector<M, B, N>
where
    M: Metric,
    B: Subspace<N> + Closed,
{
    type Output = Self;
    fn sub(self, rhs: Scalar) -> Self {
        let mut out = self;
        out.val[slot(&B::BLADES, 0)] -= rhs;
        out
    }
}

// ---- rendering -------------------------------------------------------

impl<M: Metric, B: Subspace<N>, const N: usize> fmt::Display for Multivector<M, B, N> {
    /// Diagnostic rendering: terms above 1e-6 as coefficient + blade
    /// name, space separated; the zero element prints as `0`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for i in 0..N {
            let v = self.val[i];
            if v.abs() > 1e-6 {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}{}", v, blade_name(B::BLADES[i]))?;
                first = false;
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
