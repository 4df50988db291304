// src/ray.rs
use crate::error::{GlobeError, GlobeResult};
use crate::vec3::Point3d;

/// A ray segment from `base` to `top`. The length is cached and refreshed on every change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3d {
    base: Point3d,
    top: Point3d,
    length: f64,
}

impl Vector3d {
    pub fn new(base: Point3d, top: Point3d) -> Self {
        Self {
            base,
            top,
            length: top.distance(&base),
        }
    }

    pub fn with_direction(base: Point3d, direction: Point3d) -> Self {
        Self::new(base, base + direction)
    }

    pub fn base(&self) -> Point3d {
        self.base
    }

    pub fn top(&self) -> Point3d {
        self.top
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_base(&mut self, base: Point3d) {
        self.base = base;
        self.recalculate_length();
    }

    pub fn set_top(&mut self, top: Point3d) {
        self.top = top;
        self.recalculate_length();
    }

    pub fn direction(&self) -> GlobeResult<Point3d> {
        if self.length == 0.0 {
            return Err(GlobeError::DegenerateVector(self.base));
        }
        Ok((self.top - self.base) / self.length)
    }

    pub fn scaled(&self, scalar: f64) -> GlobeResult<Vector3d> {
        Ok(Vector3d::new(self.base, self.base + self.direction()?.scaled(scalar)))
    }

    pub fn scale(&mut self, scalar: f64) -> GlobeResult<()> {
        *self = self.scaled(scalar)?;
        Ok(())
    }

    pub fn normalize(&mut self) -> GlobeResult<()> {
        self.scale(1.0)
    }

    fn recalculate_length(&mut self) {
        self.length = self.top.distance(&self.base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_follows_base_and_top() {
        let mut ray = Vector3d::new(Point3d::ORIGIN, Point3d::new(3.0, 4.0, 0.0));
        assert_eq!(ray.length(), 5.0);

        ray.set_top(Point3d::new(0.0, 0.0, 2.0));
        assert_eq!(ray.length(), 2.0);

        ray.set_base(Point3d::new(0.0, 0.0, -1.0));
        assert_eq!(ray.length(), 3.0);
    }

    #[test]
    fn direction_is_unit_length() {
        let ray = Vector3d::new(Point3d::new(1.0, 1.0, 1.0), Point3d::new(4.0, 5.0, 1.0));
        let d = ray.direction().unwrap();
        assert!((d.length() - 1.0).abs() < 1e-12);
        assert!((d.x - 0.6).abs() < 1e-12);
        assert!((d.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn scaling_keeps_base_and_direction() {
        let base = Point3d::new(0.0, 2.0, 0.0);
        let mut ray = Vector3d::with_direction(base, Point3d::new(0.0, 0.0, 0.5));
        let long = ray.scaled(8.0).unwrap();
        assert_eq!(long.base(), base);
        assert!((long.length() - 8.0).abs() < 1e-12);
        assert!(long.top().distance(&Point3d::new(0.0, 2.0, 8.0)) < 1e-12);

        ray.normalize().unwrap();
        assert!((ray.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_ray_has_no_direction() {
        let p = Point3d::new(1.0, 2.0, 3.0);
        let mut ray = Vector3d::new(p, p);
        assert!(matches!(ray.direction(), Err(GlobeError::DegenerateVector(_))));
        assert!(ray.scaled(2.0).is_err());
        assert!(ray.normalize().is_err());
    }
}
