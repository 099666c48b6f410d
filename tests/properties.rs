use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    thread,
};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use math_utils::{angle::*, *};

const ITERATIONS: usize = 200;

fn init() -> fastrand::Rng {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut hasher = DefaultHasher::new();
    thread::current().name().unwrap().hash(&mut hasher);
    fastrand::Rng::with_seed(hasher.finish())
}

fn rand_f32<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f32, N> {
    Vector::from_fn(|_| (rng.f32() - 0.5) * 200.0)
}

fn rand_f64<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| (rng.f64() - 0.5) * 200.0)
}

fn rand_i32<const N: usize>(rng: &mut fastrand::Rng) -> Vector<i32, N> {
    Vector::from_fn(|_| rng.i32(-100..=100))
}

#[test]
fn add_sub_inverse() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let (v, w) = (rand_i32::<4>(&mut rng), rand_i32::<4>(&mut rng));
        assert_eq!(v + w - w, v);

        let (v, w) = (rand_f64::<3>(&mut rng), rand_f64::<3>(&mut rng));
        assert_abs_diff_eq!(v + w - w, v, epsilon = 1e-12);

        let (v, w) = (rand_f32::<2>(&mut rng), rand_f32::<2>(&mut rng));
        assert_abs_diff_eq!(v + w - w, v, epsilon = 1e-4);
    }
}

#[test]
fn zero_identities() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let v = rand_i32::<3>(&mut rng);
        assert_eq!(v * 0, Vector3i::ZERO);
        assert_eq!(v + Vector3i::ZERO, v);

        let v = rand_f32::<4>(&mut rng);
        assert_eq!(v * 0.0, Vector4f::ZERO);
        assert_eq!(v + Vector4f::ZERO, v);
    }
}

#[test]
fn dot_commutes() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let (v, w) = (rand_i32::<4>(&mut rng), rand_i32::<4>(&mut rng));
        assert_eq!(v.dot(w), w.dot(v));
        assert_eq!(v * w, w * v);

        let (v, w) = (rand_f64::<2>(&mut rng), rand_f64::<2>(&mut rng));
        assert_eq!(v.dot(w), w.dot(v));
    }
}

#[test]
fn cross_anticommutes() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let (v, w) = (rand_i32::<3>(&mut rng), rand_i32::<3>(&mut rng));
        assert_eq!(v.cross(w), -w.cross(v));
        assert_eq!(v.cross(w).dot(v), 0);
        assert_eq!(v.cross(w).dot(w), 0);

        let (v, w) = (rand_i32::<4>(&mut rng), rand_i32::<4>(&mut rng));
        let c = v ^ w;
        assert_eq!(c, -(w ^ v));
        assert_eq!(c.w, 0);
    }
}

#[test]
fn normalization() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let v = rand_f64::<3>(&mut rng);
        let n = v.normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.normalize(), n, epsilon = 1e-12);

        let v = rand_f32::<4>(&mut rng);
        let n = v.normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.normalize(), n, epsilon = 1e-6);

        let mut m = v;
        m.normalize_mut();
        assert_eq!(m, n);
    }

    assert_eq!(Vector2f::ZERO.normalize(), Vector2f::ZERO);
    assert_eq!(Vector3d::ZERO.normalize(), Vector3d::ZERO);
    assert_eq!(Vector4i::ZERO.normalize(), Vector4i::ZERO);
}

#[test]
fn division_by_zero() {
    let _ = init();

    let v = vec3(1.0f32, 2.0, 3.0) / 0.0;
    assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());

    let mut v = vec3(1.0f32, 2.0, 3.0);
    v /= 0.0;
    assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
}

#[test]
fn out_of_range_index() {
    let _ = init();

    let v = vec2(1, 2);
    assert_eq!(v[2], <i32 as Element>::NAN);
    assert_eq!(
        v.get(2),
        Err(VectorError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(vec4(1.0f64, 2.0, 3.0, 4.0)[4].is_nan());
}

#[test]
fn arity_conversions() {
    assert_eq!(Vector4f::from(vec2(1.0, 2.0)), vec4(1.0, 2.0, 0.0, 0.0));
    assert_eq!(Vector3f::from(vec2(1.0, 2.0)), vec3(1.0, 2.0, 0.0));
    assert_eq!(Vector4f::from(vec3(1.0, 2.0, 3.0)), vec4(1.0, 2.0, 3.0, 0.0));
    assert_eq!(Vector2i::from(vec4(1, 2, 3, 4)), vec2(1, 2));
}

#[test]
fn homogeneous_divide() {
    let _ = init();

    let mut v = vec4(2.0f32, 4.0, 6.0, 2.0);
    v.homogenize();
    assert_eq!(v, vec4(1.0, 2.0, 3.0, 1.0));

    let mut v = vec4(1.0f32, 2.0, 3.0, 0.0);
    v.homogenize();
    assert_eq!(v, vec4(1.0, 2.0, 3.0, 0.0));
}

#[test]
fn angle_round_trip() {
    let mut rng = init();
    for degree in [0.0, 90.0, 180.0, 360.0, -45.0, -270.0] {
        assert_relative_eq!(
            radian_to_degree(degree_to_radian(degree)),
            degree,
            max_relative = 1e-12
        );
    }
    for _ in 0..ITERATIONS {
        let degree = (rng.f64() - 0.5) * 4000.0;
        assert_relative_eq!(
            radian_to_degree(degree_to_radian(degree)),
            degree,
            epsilon = 1e-9,
            max_relative = 1e-12
        );
    }
}

#[test]
fn fractional_part() {
    let mut rng = init();
    assert_eq!(fraction(3.75), 0.75);
    assert_eq!(fraction(-3.75), -0.75);
    for _ in 0..ITERATIONS {
        let v = (rng.f32() - 0.5) * 1000.0;
        let f = fraction(v);
        assert!(f.abs() < 1.0);
        assert!(f == 0.0 || f.is_sign_negative() == v.is_sign_negative());
        assert_eq!(v.trunc() + f, v);
    }
}
