use core::f64::consts::{FRAC_PI_2, PI};
use crate::*;

const EPSILON: f64 = 1e-9;

fn samples() -> [Vector3; 8] {
    [
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 7.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(1e3, -2e-3, 5.5),
        Vector3::new(-0.3, -0.7, -0.2),
        Vector3::new(10.0, 10.0, -10.0),
        Vector3::new(3.0, 4.0, 0.0),
        Vector3::new(1e-6, 2e-6, -1e-6),
    ]
}

const ANGLES: [f64; 6] = [0.0, 0.25, FRAC_PI_2, 2.0, PI, -3.7];

#[test]
fn subtract_is_add_negated() {
    for a in samples() {
        for b in samples() {
            assert!(a.add(b.negate()).is_close_to(a.subtract(b), EPSILON));
        }
    }
}

#[test]
fn dot_commutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.dot_product(b), b.dot_product(a));
        }
    }
}

#[test]
fn cross_anti_commutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.cross_product(b), b.cross_product(a).negate());
        }
    }
}

#[test]
fn triple_product_cyclic() {
    let samples = samples();
    for a in samples {
        for b in samples {
            for c in samples {
                let abc = a.triple_product(b, c);
                let scale = 1.0 + abc.abs();
                assert!(abc.is_close_to(b.triple_product(c, a), EPSILON * scale));
                assert!(abc.is_close_to(c.triple_product(a, b), EPSILON * scale));
                assert!(abc.is_close_to(-b.triple_product(a, c), EPSILON * scale));
            }
        }
    }
}

#[test]
fn normalize_gives_unit_length() {
    for v in samples() {
        assert!(v.normalize().magnitude().is_close_to(1.0, EPSILON));
    }
}

#[test]
fn zero_divide_policy() {
    assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    for v in samples() {
        assert_eq!(v.divide(0.0), Vector3::ZERO);
    }
}

#[test]
fn distance_is_magnitude_of_difference() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.distance(b), a.subtract(b).magnitude());
        }
    }
}

#[test]
fn rotations_preserve_length() {
    let axes = samples();
    for v in samples() {
        let len = v.magnitude();
        for theta in ANGLES {
            assert!((v * Matrix3::create_x_rotation(theta)).magnitude().is_close_to(len, EPSILON * (1.0 + len)));
            assert!((v * Matrix3::create_y_rotation(theta)).magnitude().is_close_to(len, EPSILON * (1.0 + len)));
            assert!((v * Matrix3::create_z_rotation(theta)).magnitude().is_close_to(len, EPSILON * (1.0 + len)));
            for axis in axes {
                assert!((v * Matrix3::create_axis_rotation(axis, theta)).magnitude().is_close_to(len, EPSILON * (1.0 + len)));
            }
        }
    }
}

#[test]
fn identity_scale() {
    for v in samples() {
        assert_eq!(v * Matrix3::create_scale(1.0, 1.0, 1.0), v);
    }
}

#[test]
fn projection_is_idempotent() {
    for normal in samples() {
        let proj = Matrix3::create_ortho_projection(normal);
        for u in samples() {
            let once = u * proj;
            let twice = once * proj;
            assert!(twice.is_close_to(once, EPSILON * (1.0 + u.magnitude())));
            assert!(once.dot_product(normal).is_close_to(0.0, EPSILON * (1.0 + u.magnitude() * normal.magnitude())));
        }
    }
}

#[test]
fn reflection_is_involution() {
    for normal in samples() {
        let refl = Matrix3::create_reflection(normal);
        for u in samples() {
            assert!((u * refl * refl).is_close_to(u, EPSILON * (1.0 + u.magnitude())));
            assert!((u * refl).magnitude().is_close_to(u.magnitude(), EPSILON * (1.0 + u.magnitude())));
        }
    }
}

#[test]
fn composition_matches_sequential_transform() {
    let a = Matrix3::create_axis_rotation(Vector3::new(1.0, -2.0, 0.5), 0.9);
    let b = Matrix3::create_scale(2.0, -1.0, 0.5);
    let c = Matrix3::create_reflection(Vector3::new(0.0, 1.0, 1.0));

    for v in samples() {
        let tol = EPSILON * (1.0 + v.magnitude());
        assert!((v * (a * b)).is_close_to(v * a * b, tol));
        assert!((v * (a * b * c)).is_close_to(((v * a) * b) * c, tol));
    }
    assert!(((a * b) * c).is_close_to(a * (b * c), EPSILON));
}

#[test]
fn concrete_examples() {
    assert_eq!(Vector3::new(1.0, 0.0, 0.0).cross_product(Vector3::new(0.0, 1.0, 0.0)), Vector3::new(0.0, 0.0, 1.0));
    assert!((Vector3::new(0.0, 1.0, 0.0) * Matrix3::create_x_rotation(FRAC_PI_2)).is_close_to(Vector3::new(0.0, 0.0, 1.0), EPSILON));
    assert_eq!(Vector3::new(1.0, 1.0, 1.0) * Matrix3::create_scale(2.0, 3.0, 4.0), Vector3::new(2.0, 3.0, 4.0));
}

#[test]
fn non_finite_propagates() {
    let nan = Vector3::new(f64::NAN, 1.0, 1.0);
    assert!(nan.normalize().x.is_nan());
    assert!(!(nan * Matrix3::IDENTITY).is_finite());

    let inf = Vector3::new(f64::INFINITY, 0.0, 0.0);
    assert!(inf.magnitude().is_infinite());
    assert!(!Matrix3::create_axis_rotation(inf, 1.0).to_array().iter().all(|val| val.is_finite()));
}
