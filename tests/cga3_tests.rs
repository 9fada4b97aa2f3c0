// tests/cga3_tests.rs

use cga_engine::spaces::cga3::{
    self, construct, gen, Bivector, Dilator, Mv, Pair, Point, Rotor, ScalarC, Sphere,
    Translator,
};
use cga_engine::spaces::ega3;

const EPS: f64 = 1e-12;

#[test]
fn null_vectors_square_to_zero() {
    let oo: Mv = cga3::no().gp(&cga3::no());
    assert_eq!(oo, Mv::zero());
    let ii: Mv = cga3::ni().gp(&cga3::ni());
    assert_eq!(ii, Mv::zero());
}

#[test]
fn null_pair_product_has_scalar_part() {
    // o * inf = -1 + o^inf: a nonzero scalar plus the Minkowski plane.
    let oi: Dilator = cga3::no().gp(&cga3::ni());
    assert_eq!(oi.val, [-1.0, 1.0]);
    // The contraction keeps only the scalar.
    let s: ScalarC = cga3::no().ip(&cga3::ni());
    assert_eq!(s.val, [-1.0]);
}

#[test]
fn minkowski_plane_squares_to_one() {
    let e = cga3::eplane();
    let s: ScalarC = e.gp(&e);
    assert_eq!(s.val, [1.0]);
}

#[test]
fn point_embedding_is_null() {
    let p = construct::point(1.0, 2.0, 3.0);
    // Conformal points are null vectors: p . p = 0.
    let s: ScalarC = p.ip(&p);
    assert!(s.val[0].abs() < EPS);
}

#[test]
fn point_contraction_measures_distance() {
    // p1 . p2 = -d^2 / 2.
    let p1 = construct::point(0.0, 0.0, 0.0);
    let p2 = construct::point(3.0, 4.0, 0.0);
    let s: ScalarC = p1.ip(&p2);
    assert!((s.val[0] + 12.5).abs() < EPS);
}

#[test]
fn translator_moves_points() {
    let p = construct::point(1.0, 0.0, 0.0);
    let moved = p.trs(&cga3::vec(0.0, 2.0, 0.0));
    let expect = construct::point(1.0, 2.0, 0.0);
    for i in 0..5 {
        assert!((moved.val[i] - expect.val[i]).abs() < EPS);
    }
}

#[test]
fn translators_compose_additively() {
    let t1 = gen::translator(&cga3::vec(1.0, 0.0, 0.0));
    let t2 = gen::translator(&cga3::vec(0.0, 1.0, 0.0));
    let both: Translator = t1 * t2;
    let p = construct::point(0.0, 0.0, 0.0).sp(&both);
    let expect = construct::point(1.0, 1.0, 0.0);
    for i in 0..5 {
        assert!((p.val[i] - expect.val[i]).abs() < EPS);
    }
}

#[test]
fn rotor_rotates_points_about_the_origin() {
    // b = -pi/4 e12 spins a quarter turn x -> y.
    let b = Bivector::new([-std::f64::consts::FRAC_PI_4, 0.0, 0.0]);
    let p = construct::point(1.0, 0.0, 0.0).rot(&b);
    let expect = construct::point(0.0, 1.0, 0.0);
    for i in 0..5 {
        assert!((p.val[i] - expect.val[i]).abs() < EPS);
    }
}

#[test]
fn motor_is_a_screw_motion() {
    // Pure-translation motor: rotation part is the identity rotor.
    let m = gen::motor(&cga3::vec(1.0, 0.0, 0.0), &Bivector::zero());
    let p = construct::point(1.0, 0.0, 0.0).mot(&m);
    let expect = construct::point(2.0, 0.0, 0.0);
    for i in 0..5 {
        assert!((p.val[i] - expect.val[i]).abs() < EPS);
    }
    // Motors are closed under composition.
    let m2: cga3::Motor = m * m;
    let p2 = construct::point(0.0, 0.0, 0.0).mot(&m2);
    assert!((p2.val[0] - 2.0).abs() < EPS);
}

#[test]
fn dilator_scales_about_its_center() {
    // Dilating by exp(t) = 2 about the origin sends x=1 to x=2. The
    // result carries an e^-t weight on the origin slot, so normalize.
    let t = 2.0f64.ln();
    let p = construct::point(1.0, 0.0, 0.0).dil(&construct::point(0.0, 0.0, 0.0), t);
    let w = p.val[3];
    assert!(w > 0.0);
    let expect = construct::point(2.0, 0.0, 0.0);
    for i in 0..5 {
        assert!((p.val[i] / w - expect.val[i]).abs() < EPS);
    }
}

#[test]
fn dilation_about_a_point_fixes_it() {
    let c = construct::point(1.0, 1.0, 0.0);
    let p = c.dil(&c, 0.7);
    let w = p.val[3];
    for i in 0..5 {
        assert!((p.val[i] / w - c.val[i]).abs() < EPS);
    }
}

#[test]
fn transversor_fixes_the_origin() {
    let o = construct::point(0.0, 0.0, 0.0);
    let p = o.trv(&cga3::vec(0.5, 0.0, 0.0));
    let w = p.val[3];
    for i in 0..5 {
        assert!((p.val[i] / w - o.val[i]).abs() < EPS);
    }
}

#[test]
fn points_lie_on_their_sphere() {
    let p1 = construct::point(1.0, 0.0, 0.0);
    let p2 = construct::point(-1.0, 0.0, 0.0);
    let p3 = construct::point(0.0, 1.0, 0.0);
    let p4 = construct::point(0.0, 0.0, 1.0);
    let s: Sphere = construct::sphere(&p1, &p2, &p3, &p4);
    assert!(s.val.iter().any(|c| c.abs() > EPS));

    // A point is on the sphere iff it wedges to zero with it.
    let pss: cga3::Mv = p1.op(&s);
    assert!(pss.val.iter().all(|c| c.abs() < EPS));
    // A point off the sphere does not.
    let off: cga3::Mv = construct::point(2.0, 0.0, 0.0).op(&s);
    assert!(off.val.iter().any(|c| c.abs() > EPS));
}

#[test]
fn dual_sphere_contains_its_points() {
    // A point lies on a dual sphere iff their contraction vanishes.
    let center = construct::point(0.0, 0.0, 0.0);
    let ds = construct::dual_sphere(&center, 1.0);
    let on = construct::point(1.0, 0.0, 0.0);
    let s: ScalarC = on.ip(&ds);
    assert!(s.val[0].abs() < EPS);
    let inside = construct::point(0.5, 0.0, 0.0);
    let s2: ScalarC = inside.ip(&ds);
    assert!(s2.val[0].abs() > EPS);
}

#[test]
fn line_is_incident_with_its_points() {
    let a = construct::point(0.0, 0.0, 0.0);
    let b = construct::point(1.0, 0.0, 0.0);
    let l = construct::line(&a, &b);
    assert!(l.val.iter().any(|c| c.abs() > EPS));

    let on = construct::point(2.0, 0.0, 0.0);
    let w: Sphere = on.op(&l);
    assert!(w.val.iter().all(|c| c.abs() < EPS));

    let off = construct::point(0.0, 1.0, 0.0);
    let w2: Sphere = off.op(&l);
    assert!(w2.val.iter().any(|c| c.abs() > EPS));
}

#[test]
fn circle_through_three_points() {
    // Unit circle in the z = 0 plane.
    let a = construct::point(1.0, 0.0, 0.0);
    let b = construct::point(-1.0, 0.0, 0.0);
    let c = construct::point(0.0, 1.0, 0.0);
    let circle = construct::circle(&a, &b, &c);
    let on = construct::point(0.0, -1.0, 0.0);
    let w: Sphere = on.op(&circle);
    assert!(w.val.iter().all(|x| x.abs() < EPS));
    let off = construct::point(0.0, 0.0, 1.0);
    let w2: Sphere = off.op(&circle);
    assert!(w2.val.iter().any(|x| x.abs() > EPS));
}

#[test]
fn boost_of_a_null_pair_is_affine() {
    // A tangent-vector pair e1^o squares to zero, so exp stops at 1 + p.
    let p = Pair::from_blade(0b01001, 1.0);
    assert!(p.wt().abs() < EPS);
    let b = gen::boost(&p);
    assert!((b.val[0] - 1.0).abs() < EPS);
    assert!((b.get(0b01001) - 1.0).abs() < EPS);

    // A boost is still a versor: it preserves the null property.
    let moved = construct::point(0.2, 0.0, 0.0).bst(&(p * 0.1));
    let s: ScalarC = moved.ip(&moved);
    assert!(s.val[0].abs() < 1e-9);
}

#[test]
fn cross_algebra_point_embedding() {
    let v = ega3::vec(1.0, 2.0, 3.0);
    let p = construct::point_from(&v);
    assert_eq!(p, construct::point(1.0, 2.0, 3.0));
    // The Euclidean part projects back out.
    let back: cga3::Vector = p.project();
    assert_eq!(back.val, [1.0, 2.0, 3.0]);
}

#[test]
fn duality_round_trip() {
    let p = construct::point(1.0, 2.0, 3.0);
    let d: Sphere = p.dual();
    let back: Point = d.undual();
    for i in 0..5 {
        assert!((back.val[i] - p.val[i]).abs() < EPS);
    }
}

#[test]
fn euclidean_duality_in_the_conformal_algebra() {
    // duale pairs a Euclidean vector with a Euclidean bivector.
    let v = cga3::e1();
    let d: Bivector = v.duale();
    let back: cga3::Vector = d.unduale();
    for i in 0..3 {
        assert!((back.val[i] - v.val[i]).abs() < EPS);
    }
}

#[test]
fn conformal_rotor_norm_is_one() {
    let b = Bivector::new([0.3, -0.4, 0.5]);
    let r: Rotor = gen::rotor(&b);
    assert!((r.rwt() - 1.0).abs() < EPS);
    let rr: Rotor = r * r.reverse();
    assert!((rr.val[0] - 1.0).abs() < EPS);
    for i in 1..4 {
        assert!(rr.val[i].abs() < EPS);
    }
}

#[test]
fn display_names_null_axes() {
    let p = construct::point(1.5, 0.0, 0.0);
    assert_eq!(format!("{}", p), "1.5e1 1e4 1.125e5");
}
