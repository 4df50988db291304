//! Casts one orthographic ray per pixel onto the sphere and colors the hits from a texture.

use crate::error::GlobeResult;
use crate::image::Rgb;
use crate::screen::Screen;
use crate::sphere::{Sphere3d, SphericalCoordinates};
use crate::texture::TextureSampler;

pub const BACKGROUND: Rgb = Rgb::BLACK;

/// Borrows the screen and the sphere for one render pass; holds no state of its own.
pub struct Renderer<'a> {
    screen: &'a mut Screen,
    sphere: &'a Sphere3d,
}

impl<'a> Renderer<'a> {
    pub fn new(screen: &'a mut Screen, sphere: &'a Sphere3d) -> Self {
        Self { screen, sphere }
    }

    /// Spherical coordinates where the ray of pixel `(y, x)` hits the sphere, if it does.
    pub fn cast_ray(&self, y: usize, x: usize) -> GlobeResult<Option<SphericalCoordinates>> {
        let ray = self.screen.pixel_ray(y, x);
        match self.sphere.intersect(&ray)? {
            Some(hit) => Ok(Some(self.sphere.to_spherical(hit)?)),
            None => Ok(None),
        }
    }

    /// Fills the back frame and swaps it to the front.
    ///
    /// The first failing pixel aborts the pass: nothing is swapped and the front frame
    /// still holds the previous image.
    pub fn render<S: TextureSampler + ?Sized>(&mut self, texture: &S, rotation_degrees: f64) -> GlobeResult<()> {
        let (dim_y, dim_x) = self.screen.dimensions();
        // whole degrees, ties to even
        let offset = rotation_degrees.round_ties_even();

        for y in 0..dim_y {
            for x in 0..dim_x {
                let rgb = match self.cast_ray(y, x)? {
                    Some(coords) => {
                        let lon = rotate_longitude(coords.lon, offset);
                        texture.sample(coords.lat, lon)?
                    }
                    None => BACKGROUND,
                };
                self.screen.set_color(y, x, rgb);
            }
        }

        self.screen.swap();
        Ok(())
    }
}

// Shifts a longitude by whole degrees, staying in [-180, 180).
pub fn rotate_longitude(lon: f64, degrees: f64) -> f64 {
    (lon + 180.0 + degrees).rem_euclid(360.0) - 180.0
}
