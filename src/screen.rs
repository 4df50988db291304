//! Pixel grid geometry, the camera looking through it, and the two frames it renders into.
//!
//! The front frame is read by the display while the back frame is written by the
//! renderer; `swap` only flips which index is front.

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::{GlobeError, GlobeResult};
use crate::image::{Image, Rgb};
use crate::ray::Vector3d;
use crate::vec3::Point3d;

pub const SUPPORTED_DIMENSIONS: &[(usize, usize)] = &[(14, 28)];

// Distance of the camera plane in front of the world origin.
const CAMERA_DEPTH: f64 = -10.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig {
    pub dim_y: usize,
    pub res_y: f64,
    pub dim_x: usize,
    pub res_x: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            dim_y: 14,
            res_y: 1.0,
            dim_x: 28,
            res_x: 0.5,
        }
    }
}

pub struct Screen {
    dim_y: usize,
    res_y: f64,
    dim_x: usize,
    res_x: f64,
    camera: Camera,
    frames: [Image; 2],
    front: usize,
}

impl Screen {
    pub fn new(config: ScreenConfig) -> GlobeResult<Self> {
        let ScreenConfig { dim_y, res_y, dim_x, res_x } = config;
        if !SUPPORTED_DIMENSIONS.contains(&(dim_y, dim_x)) {
            return Err(GlobeError::UnsupportedResolution {
                dim_y,
                dim_x,
                supported: SUPPORTED_DIMENSIONS,
            });
        }

        // center the pixel grid on the world origin
        let cam_x = -0.5 * (dim_x - 1) as f64 * res_x;
        let cam_y = -0.5 * (dim_y - 1) as f64 * res_y;

        Ok(Self {
            dim_y,
            res_y,
            dim_x,
            res_x,
            camera: Camera::from_xyz(cam_x, cam_y, CAMERA_DEPTH),
            frames: [Image::new(dim_y, dim_x), Image::new(dim_y, dim_x)],
            front: 0,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.dim_y, self.dim_x)
    }

    pub fn resolution(&self) -> (f64, f64) {
        (self.res_y, self.res_x)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn pixel_ray(&self, y: usize, x: usize) -> Vector3d {
        let offset = Point3d::new(x as f64 * self.res_x, y as f64 * self.res_y, 0.0) + self.camera.center();
        let pixel = self.camera.rotate_point(offset);
        Vector3d::with_direction(pixel, self.camera.view_direction_in_current_rotation())
    }

    pub fn front_frame(&self) -> &Image {
        &self.frames[self.front]
    }

    pub fn back_frame_mut(&mut self) -> &mut Image {
        &mut self.frames[1 - self.front]
    }

    pub fn set_color(&mut self, y: usize, x: usize, rgb: Rgb) {
        self.back_frame_mut().set_color(y, x, rgb);
    }

    pub fn swap(&mut self) {
        self.front = 1 - self.front;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::EulerAngles;

    #[test]
    fn only_fourteen_by_twenty_eight_is_supported() {
        assert!(Screen::new(ScreenConfig::default()).is_ok());

        let err = Screen::new(ScreenConfig { dim_y: 28, dim_x: 14, ..ScreenConfig::default() })
            .err()
            .unwrap();
        assert!(matches!(err, GlobeError::UnsupportedResolution { dim_y: 28, dim_x: 14, .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn grid_is_centered_on_origin() {
        let screen = Screen::new(ScreenConfig::default()).unwrap();
        let first = screen.pixel_ray(0, 0).base();
        let last = screen.pixel_ray(13, 27).base();
        assert!(((first + last) / 2.0).distance(&Point3d::new(0.0, 0.0, CAMERA_DEPTH)) < 1e-12);
        assert_eq!(first, Point3d::new(-6.75, -6.5, -10.0));
    }

    #[test]
    fn pixel_rays_follow_camera_rotation() {
        let mut screen = Screen::new(ScreenConfig::default()).unwrap();
        screen.camera_mut().set_rotation(EulerAngles::new(0.0, 270.0, 0.0));
        let ray = screen.pixel_ray(6, 13);
        assert!(ray.base().distance(&Point3d::new(10.0, -0.5, -0.25)) < 1e-9);
        assert!(ray.direction().unwrap().distance(&Point3d::new(-1.0, 0.0, 0.0)) < 1e-9);
    }

    #[test]
    fn swap_exchanges_front_and_back() {
        let mut screen = Screen::new(ScreenConfig::default()).unwrap();
        screen.set_color(2, 5, Rgb::new(9, 9, 9));
        assert_eq!(screen.front_frame().color(2, 5), Rgb::BLACK);

        let written = screen.back_frame_mut().clone();
        screen.swap();
        assert_eq!(screen.front_frame(), &written);

        screen.set_color(2, 5, Rgb::new(1, 1, 1));
        assert_eq!(screen.front_frame().color(2, 5), Rgb::new(9, 9, 9));
    }
}
