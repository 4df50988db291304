// src/sphere.rs
use std::fmt;

use crate::error::{GlobeError, GlobeResult};
use crate::ray::Vector3d;
use crate::vec3::Point3d;

/// Latitude and longitude in degrees on a sphere surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphericalCoordinates {
    pub lat: f64,
    pub lon: f64,
}

impl SphericalCoordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl fmt::Display for SphericalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+.6}, {:+.6})", self.lat, self.lon)
    }
}

pub struct Sphere3d {
    center: Point3d,
    radius: f64,
}

impl Sphere3d {
    pub fn new(center: Point3d, radius: f64) -> GlobeResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GlobeError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point3d {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn does_intersect(&self, ray: &Vector3d) -> GlobeResult<bool> {
        Ok(self.intersect(ray)?.is_some())
    }

    /// Closest intersection of the ray's line with the sphere hull, `None` on a miss.
    ///
    /// The base of the ray must lie outside the sphere: the root closest to the base is
    /// taken regardless of its sign, so a base inside the sphere gives an arbitrary hit.
    pub fn intersect(&self, ray: &Vector3d) -> GlobeResult<Option<Point3d>> {
        // Hull x² + y² + z² - r² = 0 with the sphere moved to the origin, line base + d * t.
        // Inserting gives a t² + b t + c = 0 with
        //   a = d·d, b = 2 (base·d), c = base·base - r²
        let d = ray.direction()?;
        let base = ray.base() - self.center;

        let a = d.dot(&d);
        let b = 2.0 * base.dot(&d);
        let c = base.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Ok(None);
        }

        let sqrtd = discriminant.sqrt();
        let s1 = (-b + sqrtd) / (2.0 * a);
        let s2 = (-b - sqrtd) / (2.0 * a);
        let t = if s1.abs() < s2.abs() { s1 } else { s2 };

        let hit = ray.scaled(t)?.top();
        Ok(hit.is_valid().then_some(hit))
    }

    pub fn to_spherical(&self, point: Point3d) -> GlobeResult<SphericalCoordinates> {
        let p = point - self.center;
        let r = p.length();
        if r == 0.0 {
            return Err(GlobeError::DegenerateRadius(point));
        }

        let lat = 90.0 - (p.z / r).clamp(-1.0, 1.0).acos().to_degrees();
        let apparent_radius = (p.x * p.x + p.y * p.y).sqrt();

        // Poles have no azimuth.
        let lon = if lat == 90.0 || lat == -90.0 || apparent_radius == 0.0 {
            0.0
        } else {
            let sign_y = if p.y >= 0.0 { 1.0 } else { -1.0 };
            sign_y * (p.x / apparent_radius).clamp(-1.0, 1.0).acos().to_degrees()
        };

        Ok(SphericalCoordinates::new(lat, lon))
    }

    pub fn to_cartesian(&self, coords: &SphericalCoordinates) -> Point3d {
        let polar = (90.0 - coords.lat).to_radians();
        let azimuth = coords.lon.to_radians();
        let (sin_polar, cos_polar) = polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();

        self.center
            + Point3d::new(
                sin_polar * cos_azimuth,
                sin_polar * sin_azimuth,
                cos_polar,
            )
            .scaled(self.radius)
    }
}
