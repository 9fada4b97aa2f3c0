//! Product-rule tables: the algebra layer.
//!
//! For every pair of subspaces used together, a term table is computed in
//! const context and attached as an associated const of a zero-sized
//! carrier type, so each monomorphization gets its own compile-time
//! table and the runtime work is a flat multiply-accumulate loop (the
//! same table-then-tight-loop split as the 3D engine this generalizes).
//!
//! Strict tables reject, at build time, any product whose result falls
//! outside the declared result basis; the sandwich transforms use
//! lenient tables that project onto the receiver's basis instead.
//!
//! In conformal metrics the origin/infinity pair is expanded over the
//! diagonal e+/e- axes (o = (e- - e+)/2, inf = e- + e+), multiplied
//! there, and collapsed back, which yields the null-vector product rules
//! (o o = 0, o inf = -1 + o^inf) with exact dyadic weights.

use crate::basis::*;
use crate::blade::*;
use crate::field::Scalar;
use crate::metric::Metric;
use std::marker::PhantomData;

/// Upper bound on distinct result blades per blade pair. The null-pair
/// split can only vary the two null bits of the result, giving at most
/// four distinct output blades; diagonal metrics use one.
pub const MAX_TERMS: usize = 4;

/// One signed contribution of a blade pair into a result slot.
#[derive(Copy, Clone, Debug)]
pub struct Term {
    /// Index into the result basis, `usize::MAX` marking an unused entry.
    pub slot: usize,
    /// Contribution weight; a dyadic rational, exact in either field.
    pub w: f64,
}

impl Term {
    pub const NONE: Term = Term { slot: usize::MAX, w: 0.0 };
}

/// All contributions of one blade pair.
pub type PairTerms = [Term; MAX_TERMS];

/// Which product a table encodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Geometric,
    Outer,
    Inner,
}

/// Which grade-indexed involution a sign table encodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Involution {
    Reverse,
    Involute,
    Conjugate,
}

/// Sign of the product of two diagonal-metric blades, including the
/// square of every repeated axis; 0.0 when a degenerate axis repeats.
const fn diag_weight(a: Blade, b: Blade, sig: &[i8; MAX_DIM]) -> f64 {
    let mut w = if sign_flip(a, b) { -1.0 } else { 1.0 };
    let mut shared = a & b;
    let mut axis = 0;
    while shared != 0 {
        if shared & 1 == 1 {
            match sig[axis] {
                1 => {}
                -1 => w = -w,
                _ => return 0.0,
            }
        }
        shared >>= 1;
        axis += 1;
    }
    w
}

/// Expand a null-basis blade over the diagonal e+/e- pair. The null
/// vectors occupy the same two bit positions as the diagonal pair, so
/// substitution never reorders and the Euclidean part is untouched.
const fn split_expand(b: Blade, dim: usize) -> ([(Blade, f64); 2], usize) {
    let o = origin(dim);
    let i = infinity(dim);
    let e = b & !(o | i);
    match (b & o != 0, b & i != 0) {
        (false, false) => ([(b, 1.0), (0, 0.0)], 1),
        // o = (e- - e+)/2
        (true, false) => ([(e | i, 0.5), (e | o, -0.5)], 2),
        // inf = e- + e+
        (false, true) => ([(e | i, 1.0), (e | o, 1.0)], 2),
        // o^inf = -(e+^e-)
        (true, true) => ([(b, -1.0), (0, 0.0)], 1),
    }
}

/// Collapse a diagonal-basis blade back onto the null pair.
const fn split_collapse(b: Blade, dim: usize) -> ([(Blade, f64); 2], usize) {
    let o = origin(dim);
    let i = infinity(dim);
    let e = b & !(o | i);
    match (b & o != 0, b & i != 0) {
        (false, false) => ([(b, 1.0), (0, 0.0)], 1),
        // e+ = inf/2 - o
        (true, false) => ([(e | i, 0.5), (e | o, -1.0)], 2),
        // e- = inf/2 + o
        (false, true) => ([(e | i, 0.5), (e | o, 1.0)], 2),
        // e+^e- = -(o^inf)
        (true, true) => ([(b, -1.0), (0, 0.0)], 1),
    }
}

const fn push_part(parts: &mut [(Blade, f64); MAX_TERMS], n: &mut usize, b: Blade, w: f64) {
    let mut k = 0;
    while k < *n {
        if parts[k].0 == b {
            parts[k].1 += w;
            return;
        }
        k += 1;
    }
    assert!(*n < MAX_TERMS, "null-vector split exceeded the term bound");
    parts[*n] = (b, w);
    *n += 1;
}

/// All (blade, weight) contributions of the geometric product `a * b`
/// under the metric, with exactly-cancelled terms removed.
pub(crate) const fn gp_parts(
    a: Blade,
    b: Blade,
    sig: &[i8; MAX_DIM],
    dim: usize,
    conformal: bool,
) -> ([(Blade, f64); MAX_TERMS], usize) {
    let mut parts = [(0 as Blade, 0.0f64); MAX_TERMS];
    let mut n = 0;
    if !conformal {
        let w = diag_weight(a, b, sig);
        if w != 0.0 {
            parts[0] = (a ^ b, w);
            n = 1;
        }
        return (parts, n);
    }

    let (ea, na) = split_expand(a, dim);
    let (eb, nb) = split_expand(b, dim);
    let mut i = 0;
    while i < na {
        let mut j = 0;
        while j < nb {
            let w0 = ea[i].1 * eb[j].1 * diag_weight(ea[i].0, eb[j].0, sig);
            if w0 != 0.0 {
                let (back, nc) = split_collapse(ea[i].0 ^ eb[j].0, dim);
                let mut k = 0;
                while k < nc {
                    push_part(&mut parts, &mut n, back[k].0, w0 * back[k].1);
                    k += 1;
                }
            }
            j += 1;
        }
        i += 1;
    }

    // Drop exact cancellations (o*o and friends) so strict tables only
    // see genuine contributions.
    let mut compact = [(0 as Blade, 0.0f64); MAX_TERMS];
    let mut m = 0;
    let mut k = 0;
    while k < n {
        if parts[k].1 != 0.0 {
            compact[m] = parts[k];
            m += 1;
        }
        k += 1;
    }
    (compact, m)
}

/// Contributions of `a ? b` for the requested product kind.
///
/// The outer product is metric-free: disjoint blades wedge with the
/// transposition sign, everything else vanishes. The left contraction
/// keeps the geometric-product terms that lower `b`'s grade by exactly
/// `grade(a)`; over a diagonal metric this is precisely the `inner`
/// validity predicate.
pub(crate) const fn product_parts(
    kind: Kind,
    a: Blade,
    b: Blade,
    sig: &[i8; MAX_DIM],
    dim: usize,
    conformal: bool,
) -> ([(Blade, f64); MAX_TERMS], usize) {
    match kind {
        Kind::Geometric => gp_parts(a, b, sig, dim, conformal),
        Kind::Outer => {
            let mut parts = [(0 as Blade, 0.0f64); MAX_TERMS];
            let mut n = 0;
            if outer(a, b) {
                parts[0] = (a ^ b, if sign_flip(a, b) { -1.0 } else { 1.0 });
                n = 1;
            }
            (parts, n)
        }
        Kind::Inner => {
            let (all, total) = gp_parts(a, b, sig, dim, conformal);
            let mut parts = [(0 as Blade, 0.0f64); MAX_TERMS];
            let mut n = 0;
            if grade(a) <= grade(b) {
                let target = grade(b) - grade(a);
                let mut k = 0;
                while k < total {
                    if grade(all[k].0) == target {
                        parts[n] = all[k];
                        n += 1;
                    }
                    k += 1;
                }
            }
            (parts, n)
        }
    }
}

/// Build the term table for a product of two bases into a result basis.
///
/// With `strict` set, a contribution whose result blade is missing from
/// `out` is a const-eval panic -- the product/result-type combination is
/// rejected when the table is monomorphized, never silently truncated.
pub const fn product_table<const NA: usize, const NB: usize, const NO: usize>(
    kind: Kind,
    a: &[Blade; NA],
    b: &[Blade; NB],
    out: &[Blade; NO],
    sig: &[i8; MAX_DIM],
    dim: usize,
    conformal: bool,
    strict: bool,
) -> [[PairTerms; NB]; NA] {
    assert!(is_canonical(a) && is_canonical(b) && is_canonical(out),
        "bases must be canonically ordered");
    let mut table = [[[Term::NONE; MAX_TERMS]; NB]; NA];
    let mut i = 0;
    while i < NA {
        let mut j = 0;
        while j < NB {
            let (parts, n) = product_parts(kind, a[i], b[j], sig, dim, conformal);
            let mut filled = 0;
            let mut k = 0;
            while k < n {
                match find(out, parts[k].0) {
                    Some(s) => {
                        table[i][j][filled] = Term { slot: s, w: parts[k].1 };
                        filled += 1;
                    }
                    None => {
                        assert!(
                            !strict,
                            "product contributes a blade missing from the declared result basis"
                        );
                    }
                }
                k += 1;
            }
            j += 1;
        }
        i += 1;
    }
    table
}

/// Weight of the scalar component of `a[i] * b[j]`; drives the
/// quadratic forms (wt, rwt) and versor inversion.
pub const fn scalar_table<const NA: usize, const NB: usize>(
    a: &[Blade; NA],
    b: &[Blade; NB],
    sig: &[i8; MAX_DIM],
    dim: usize,
    conformal: bool,
) -> [[f64; NB]; NA] {
    let mut table = [[0.0f64; NB]; NA];
    let mut i = 0;
    while i < NA {
        let mut j = 0;
        while j < NB {
            let (parts, n) = gp_parts(a[i], b[j], sig, dim, conformal);
            let mut k = 0;
            while k < n {
                if parts[k].0 == 0 {
                    table[i][j] = parts[k].1;
                }
                k += 1;
            }
            j += 1;
        }
        i += 1;
    }
    table
}

/// Per-slot signs of a grade-indexed involution over a basis.
pub const fn involution_signs<const N: usize>(
    blades: &[Blade; N],
    kind: Involution,
) -> [f64; N] {
    let mut signs = [1.0f64; N];
    let mut i = 0;
    while i < N {
        let flips = match kind {
            Involution::Reverse => reverse_flips(blades[i]),
            Involution::Involute => involute_flips(blades[i]),
            Involution::Conjugate => conjugate_flips(blades[i]),
        };
        if flips {
            signs[i] = -1.0;
        }
        i += 1;
    }
    signs
}

/// Destination-driven slot map for a cast: each destination slot takes
/// the matching source slot, or `usize::MAX` to zero-fill.
pub const fn cast_map<const NS: usize, const ND: usize>(
    src: &[Blade; NS],
    dst: &[Blade; ND],
) -> [usize; ND] {
    let mut map = [usize::MAX; ND];
    let mut k = 0;
    while k < ND {
        if let Some(i) = find(src, dst[k]) {
            map[k] = i;
        }
        k += 1;
    }
    map
}

/// Cast map across algebras. Blades are matched by identical bitmask;
/// every mapped blade must sit cleanly on one side of the null plane of
/// whichever algebra is conformal (mixed containment has no counterpart
/// across the boundary and is rejected at build time).
pub const fn convert_map<const NS: usize, const ND: usize>(
    src: &[Blade; NS],
    dst: &[Blade; ND],
    src_dim: usize,
    src_conformal: bool,
    dst_dim: usize,
    dst_conformal: bool,
) -> [usize; ND] {
    let mut map = [usize::MAX; ND];
    let mut k = 0;
    while k < ND {
        if let Some(i) = find(src, dst[k]) {
            assert!(
                !src_conformal || check_mink(dst[k], src_dim),
                "blade straddles the source algebra's null plane"
            );
            assert!(
                !dst_conformal || check_mink(dst[k], dst_dim),
                "blade straddles the destination algebra's null plane"
            );
            map[k] = i;
        }
        k += 1;
    }
    map
}

/// Like `cast_map`, but every source blade must survive: the map backs
/// the `+` of two differently-based multivectors, which is not allowed
/// to drop either operand's blades.
pub const fn sum_map<const NS: usize, const ND: usize>(
    src: &[Blade; NS],
    dst: &[Blade; ND],
) -> [usize; ND] {
    assert!(
        contains_all(src, dst),
        "sum result basis must contain the union of both operand bases"
    );
    cast_map(src, dst)
}

/// Carrier for the product tables of one (A, B) -> O subspace triple in
/// metric M. Referencing an associated const forces its const evaluation
/// for that exact monomorphization -- invalid triples fail the build.
pub struct Products<M, A, B, O, const NA: usize, const NB: usize, const NO: usize>(
    PhantomData<(M, A, B, O)>,
);

impl<M, A, B, O, const NA: usize, const NB: usize, const NO: usize>
    Products<M, A, B, O, NA, NB, NO>
where
    M: Metric,
    A: Subspace<NA>,
    B: Subspace<NB>,
    O: Subspace<NO>,
{
    pub const GEOMETRIC: [[PairTerms; NB]; NA] = product_table(
        Kind::Geometric, &A::BLADES, &B::BLADES, &O::BLADES,
        &M::SIG, M::DIM, M::CONFORMAL, true,
    );

    pub const OUTER: [[PairTerms; NB]; NA] = product_table(
        Kind::Outer, &A::BLADES, &B::BLADES, &O::BLADES,
        &M::SIG, M::DIM, M::CONFORMAL, true,
    );

    pub const INNER: [[PairTerms; NB]; NA] = product_table(
        Kind::Inner, &A::BLADES, &B::BLADES, &O::BLADES,
        &M::SIG, M::DIM, M::CONFORMAL, true,
    );

    /// Geometric product projected onto `O`: out-of-basis contributions
    /// are dropped by design. Reserved for the sandwich transforms.
    pub const GEOMETRIC_PROJECTED: [[PairTerms; NB]; NA] = product_table(
        Kind::Geometric, &A::BLADES, &B::BLADES, &O::BLADES,
        &M::SIG, M::DIM, M::CONFORMAL, false,
    );

    /// Slot maps for the sum of A and B into O.
    pub const SUM_A: [usize; NO] = sum_map(&A::BLADES, &O::BLADES);
    pub const SUM_B: [usize; NO] = sum_map(&B::BLADES, &O::BLADES);
}

/// Carrier for a same-algebra cast map from subspace S to D.
pub struct CastMap<S, D, const NS: usize, const ND: usize>(PhantomData<(S, D)>);

impl<S, D, const NS: usize, const ND: usize> CastMap<S, D, NS, ND>
where
    S: Subspace<NS>,
    D: Subspace<ND>,
{
    pub const MAP: [usize; ND] = cast_map(&S::BLADES, &D::BLADES);
}

/// Carrier for a cross-algebra cast map.
pub struct ConvertMap<M1, M2, S, D, const NS: usize, const ND: usize>(
    PhantomData<(M1, M2, S, D)>,
);

impl<M1, M2, S, D, const NS: usize, const ND: usize> ConvertMap<M1, M2, S, D, NS, ND>
where
    M1: Metric,
    M2: Metric,
    S: Subspace<NS>,
    D: Subspace<ND>,
{
    pub const MAP: [usize; ND] = convert_map(
        &S::BLADES, &D::BLADES,
        M1::DIM, M1::CONFORMAL,
        M2::DIM, M2::CONFORMAL,
    );
}

/// Apply a term table: a flat multiply-accumulate over the precomputed
/// contributions, skipping zero coefficients.
#[inline(always)]
pub fn apply<const NA: usize, const NB: usize, const NO: usize>(
    table: &[[PairTerms; NB]; NA],
    a: &[Scalar; NA],
    b: &[Scalar; NB],
) -> [Scalar; NO] {
    let mut out = [0.0 as Scalar; NO];
    for i in 0..NA {
        let ai = a[i];
        if ai == 0.0 {
            continue;
        }
        for j in 0..NB {
            let c = ai * b[j];
            if c == 0.0 {
                continue;
            }
            let mut t = 0;
            while t < MAX_TERMS {
                let term = table[i][j][t];
                if term.slot == usize::MAX {
                    break;
                }
                out[term.slot] += term.w as Scalar * c;
                t += 1;
            }
        }
    }
    out
}
