// src/vec3.rs
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Sub, Mul, Div};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    pub const ORIGIN: Point3d = Point3d { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Point3d {
        Point3d { x, y, z }
    }

    pub fn dot(&self, other: &Point3d) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    // Distance from the origin.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance(&self, other: &Point3d) -> f64 {
        (*self - *other).length()
    }

    // Divides by the length without checking it; a zero point yields NaN components.
    pub fn normalize(&self) -> Point3d {
        let len = self.length();
        (*self) / len
    }

    pub fn scaled(&self, scalar: f64) -> Point3d {
        (*self) * scalar
    }

    pub fn is_valid(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan())
    }

    /// Rotates this point with Tait-Bryan angles. See [`Rotation`] for the matrix.
    pub fn rotated(&self, angles: &EulerAngles) -> Point3d {
        Rotation::from_euler(angles).apply(*self)
    }
}

impl fmt::Display for Point3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

impl Add for Point3d {
    type Output = Point3d;
    fn add(self, rhs: Point3d) -> Point3d {
        Point3d::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z
        )
    }
}

impl Sub for Point3d {
    type Output = Point3d;
    fn sub(self, rhs: Point3d) -> Point3d {
        Point3d::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z
        )
    }
}

impl Mul<f64> for Point3d {
    type Output = Point3d;
    fn mul(self, rhs: f64) -> Point3d {
        Point3d::new(
            self.x * rhs,
            self.y * rhs,
            self.z * rhs
        )
    }
}

impl Div<f64> for Point3d {
    type Output = Point3d;
    fn div(self, rhs: f64) -> Point3d {
        Point3d::new(
            self.x / rhs,
            self.y / rhs,
            self.z / rhs
        )
    }
}

impl From<[f64; 3]> for Point3d {
    fn from(v: [f64; 3]) -> Self {
        Point3d::new(v[0], v[1], v[2])
    }
}

/// Tait-Bryan angles in degrees. Alpha rotates around z, beta around x', gamma around z''.
///
/// Every constructor and mutator keeps each angle in `[0, 360)`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct EulerAngles {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl EulerAngles {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            alpha: alpha.rem_euclid(360.0),
            beta: beta.rem_euclid(360.0),
            gamma: gamma.rem_euclid(360.0),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn set(&mut self, alpha: f64, beta: f64, gamma: f64) {
        *self = Self::new(alpha, beta, gamma);
    }

    pub fn add_alpha(&mut self, deg: f64) {
        self.alpha = (self.alpha + deg).rem_euclid(360.0);
    }

    pub fn add_beta(&mut self, deg: f64) {
        self.beta = (self.beta + deg).rem_euclid(360.0);
    }

    pub fn add_gamma(&mut self, deg: f64) {
        self.gamma = (self.gamma + deg).rem_euclid(360.0);
    }
}

fn to_reduced_radians(deg: f64) -> f64 {
    ((deg / 180.0) * PI).rem_euclid(2.0 * PI)
}

/// Rotation matrix for a set of [`EulerAngles`], computed once and applied to many points.
///
/// ```text
///  c2 c3              | -c2 s3              |  s2
///  c1 s3 + c3 s1 s2   |  c1 c3 - s1 s2 s3   | -c2 s1
///  s1 s3 - c1 c3 s2   |  c3 s1 + c1 s2 s3   |  c1 c2
/// ```
///
/// with `1 = alpha`, `2 = beta`, `3 = gamma`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation {
    m: [[f64; 3]; 3],
}

impl Rotation {
    pub fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn from_euler(angles: &EulerAngles) -> Self {
        let (s1, c1) = to_reduced_radians(angles.alpha).sin_cos();
        let (s2, c2) = to_reduced_radians(angles.beta).sin_cos();
        let (s3, c3) = to_reduced_radians(angles.gamma).sin_cos();

        Self {
            m: [
                [c2 * c3, -c2 * s3, s2],
                [c1 * s3 + c3 * s1 * s2, c1 * c3 - s1 * s2 * s3, -c2 * s1],
                [s1 * s3 - c1 * c3 * s2, c3 * s1 + c1 * s2 * s3, c1 * c2],
            ],
        }
    }

    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.m
    }

    pub fn apply(&self, p: Point3d) -> Point3d {
        let m = &self.m;
        Point3d::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z,
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z,
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_close(a: Point3d, b: Point3d, eps: f64) {
        assert!(a.distance(&b) < eps, "{} != {}", a, b);
    }

    #[test]
    fn zero_angles_leave_points_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        let none = EulerAngles::new(0.0, 0.0, 0.0);
        for _ in 0..200 {
            let p = Point3d::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            assert_close(p.rotated(&none), p, 1e-12);
        }
    }

    #[test]
    fn full_turns_are_identity() {
        let p = Point3d::new(1.0, -2.0, 3.0);
        let turned = EulerAngles::new(360.0, -720.0, 1080.0);
        assert_eq!(turned, EulerAngles::new(0.0, 0.0, 0.0));
        assert_close(p.rotated(&turned), p, 1e-12);
    }

    #[test]
    fn beta_quarter_turn_maps_z_onto_x() {
        let r = Rotation::from_euler(&EulerAngles::new(0.0, 90.0, 0.0));
        assert_close(r.apply(Point3d::new(0.0, 0.0, 1.0)), Point3d::new(1.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let angles = EulerAngles::new(
                rng.gen_range(0.0..360.0),
                rng.gen_range(0.0..360.0),
                rng.gen_range(0.0..360.0),
            );
            let p = Point3d::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            assert!((p.rotated(&angles).length() - p.length()).abs() < 1e-9);
        }
    }

    #[test]
    fn angles_wrap_on_mutation() {
        let mut a = EulerAngles::new(350.0, 10.0, 0.0);
        a.add_alpha(20.0);
        a.add_beta(-20.0);
        a.add_gamma(-2.5);
        assert_eq!(a.alpha(), 10.0);
        assert_eq!(a.beta(), 350.0);
        assert_eq!(a.gamma(), 357.5);
    }

    #[test]
    fn normalize_of_zero_is_invalid() {
        assert!(!Point3d::ORIGIN.normalize().is_valid());
        let n = Point3d::new(3.0, 0.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }
}
