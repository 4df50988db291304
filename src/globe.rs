//! The animated globe: screen, sphere and texture, advanced one frame per tick.

use log::debug;

use crate::config::GlobeConfig;
use crate::error::GlobeResult;
use crate::image::Image;
use crate::renderer::Renderer;
use crate::screen::Screen;
use crate::sphere::Sphere3d;
use crate::state::FrameControl;
use crate::texture::TextureMap;
use crate::vec3::Point3d;

pub struct Globe {
    screen: Screen,
    sphere: Sphere3d,
    texture: TextureMap,
    // accumulated longitude offset of the animation, degrees
    rotation: f64,
}

impl Globe {
    pub fn new(config: &GlobeConfig, texture: TextureMap) -> GlobeResult<Self> {
        let screen = Screen::new(config.screen)?;
        let sphere = Sphere3d::new(Point3d::from(config.sphere.center), config.sphere.radius)?;
        let texture = texture.with_max_interpolation_radius(config.max_interpolation_radius);
        debug!(
            "globe with radius {} on a {:?} screen, interpolation radius {}",
            sphere.radius(),
            screen.dimensions(),
            texture.interpolation_radius()
        );
        Ok(Self::from_parts(screen, sphere, texture))
    }

    pub fn from_parts(screen: Screen, sphere: Sphere3d, texture: TextureMap) -> Self {
        Self {
            screen,
            sphere,
            texture,
            rotation: 0.0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn sphere(&self) -> &Sphere3d {
        &self.sphere
    }

    pub fn texture(&self) -> &TextureMap {
        &self.texture
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn front_frame(&self) -> &Image {
        self.screen.front_frame()
    }

    /// Advances the animation, renders into the back frame and returns the new front frame.
    ///
    /// On error the previous front frame stays in place and can still be read with
    /// [`Globe::front_frame`].
    pub fn draw_next_frame(&mut self, control: &FrameControl) -> GlobeResult<&Image> {
        if !control.paused {
            self.rotation = (self.rotation + control.rotation_per_frame).rem_euclid(360.0);
        }
        self.screen.camera_mut().set_rotation(control.angles);

        Renderer::new(&mut self.screen, &self.sphere).render(&self.texture, self.rotation)?;
        Ok(self.screen.front_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AnimationState;

    fn globe() -> Globe {
        let config = GlobeConfig::embedded().unwrap();
        Globe::new(&config, TextureMap::default_earth().unwrap()).unwrap()
    }

    #[test]
    fn rotation_advances_unless_paused() {
        let mut globe = globe();
        let mut state = AnimationState::new(30, 45.0, 90.0).unwrap();

        globe.draw_next_frame(&state.snapshot()).unwrap();
        globe.draw_next_frame(&state.snapshot()).unwrap();
        assert!((globe.rotation() - 3.0).abs() < 1e-12);

        state.toggle_pause();
        globe.draw_next_frame(&state.snapshot()).unwrap();
        assert!((globe.rotation() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_stays_within_a_turn() {
        let mut globe = globe();
        let state = AnimationState::new(1, -90.0, 90.0).unwrap();
        for _ in 0..5 {
            globe.draw_next_frame(&state.snapshot()).unwrap();
        }
        assert!((globe.rotation() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn frames_show_a_disc_on_black() {
        let mut globe = globe();
        let state = AnimationState::new(30, 45.0, 90.0).unwrap();
        let frame = globe.draw_next_frame(&state.snapshot()).unwrap();
        assert_eq!(frame.dimensions(), (14, 28));
        assert_eq!(frame.color(0, 0), crate::renderer::BACKGROUND);
        assert_ne!(frame.color(7, 14), crate::renderer::BACKGROUND);
        assert_eq!(globe.front_frame().as_bytes().len(), 14 * 28 * 3);
    }

    #[test]
    fn camera_takes_the_snapshot_angles() {
        let mut globe = globe();
        let mut state = AnimationState::new(30, 45.0, 90.0).unwrap();
        state.rotate_around_z_axis(10.0);
        globe.draw_next_frame(&state.snapshot()).unwrap();
        assert_eq!(globe.screen().camera().rotation(), state.rotation_angles());
    }
}
