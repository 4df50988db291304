// src/state.rs
use log::{info, warn};

use crate::error::{GlobeError, GlobeResult};
use crate::vec3::EulerAngles;

// View onto the equator with the north pole up.
pub const DEFAULT_ROTATION: (f64, f64, f64) = (270.0, 180.0, 0.0);

/// Everything a frame needs from the animation state, read once at the top of the frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameControl {
    pub angles: EulerAngles,
    pub rotation_per_frame: f64,
    pub paused: bool,
}

// Animation state shared between the keyboard and the frame loop. The loop owns it and
// is its only writer; the globe only ever sees a `FrameControl` snapshot.
pub struct AnimationState {
    rotation_rate: f64,
    rotation_rate_max: f64,
    target_frame_rate: u32,
    paused: bool,
    should_terminate: bool,
    angles: EulerAngles,
}

impl AnimationState {
    pub fn new(target_frame_rate: u32, rotation_rate: f64, rotation_rate_max: f64) -> GlobeResult<Self> {
        if target_frame_rate == 0 {
            return Err(GlobeError::InvalidFrameRate(target_frame_rate));
        }
        let max_ok = rotation_rate_max.is_finite() && rotation_rate_max >= 0.0;
        if !max_ok || !rotation_rate.is_finite() || rotation_rate.abs() > rotation_rate_max {
            return Err(GlobeError::InvalidRotationRate { rate: rotation_rate, max: rotation_rate_max });
        }
        let (alpha, beta, gamma) = DEFAULT_ROTATION;
        Ok(Self {
            rotation_rate,
            rotation_rate_max,
            target_frame_rate,
            paused: false,
            should_terminate: false,
            angles: EulerAngles::new(alpha, beta, gamma),
        })
    }

    pub fn rotation_rate(&self) -> f64 {
        self.rotation_rate
    }

    // degrees of longitude per frame
    pub fn rotation_rate_per_frame(&self) -> f64 {
        self.rotation_rate / self.target_frame_rate as f64
    }

    pub fn target_frame_rate(&self) -> u32 {
        self.target_frame_rate
    }

    pub fn rotation_angles(&self) -> EulerAngles {
        self.angles
    }

    pub fn set_rotation_angles(&mut self, angles: EulerAngles) {
        self.angles = angles;
    }

    pub fn reset_rotation_angles_to_default(&mut self) {
        let (alpha, beta, gamma) = DEFAULT_ROTATION;
        self.angles.set(alpha, beta, gamma);
    }

    /// Returns false and leaves the rate alone when the new rate would exceed the limit.
    pub fn change_rotation_rate(&mut self, delta: f64) -> bool {
        let new_rate = self.rotation_rate + delta;
        if new_rate.abs() <= self.rotation_rate_max {
            self.rotation_rate = new_rate;
            info!("rotation rate is now {}", self.rotation_rate);
            true
        } else {
            warn!(
                "changing rotation rate would exceed limit {}",
                self.rotation_rate_max * new_rate.signum()
            );
            false
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            info!("animation is now paused");
        } else {
            info!("animation is now running");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn schedule_termination(&mut self) {
        self.should_terminate = true;
    }

    pub fn should_terminate(&self) -> bool {
        self.should_terminate
    }

    pub fn rotate_around_x_axis(&mut self, deg: f64) {
        self.angles.add_alpha(deg);
    }

    pub fn rotate_around_y_axis(&mut self, deg: f64) {
        self.angles.add_beta(deg);
    }

    pub fn rotate_around_z_axis(&mut self, deg: f64) {
        self.angles.add_gamma(deg);
    }

    pub fn snapshot(&self) -> FrameControl {
        FrameControl {
            angles: self.angles,
            rotation_per_frame: self.rotation_rate_per_frame(),
            paused: self.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frame_rate_is_rejected() {
        assert!(matches!(AnimationState::new(0, 45.0, 90.0), Err(GlobeError::InvalidFrameRate(0))));
    }

    #[test]
    fn rate_beyond_the_limit_is_rejected() {
        let err = AnimationState::new(30, 200.0, 90.0).err().unwrap();
        assert!(matches!(err, GlobeError::InvalidRotationRate { .. }));
        assert!(err.is_configuration());

        assert!(AnimationState::new(30, -95.0, 90.0).is_err());
        assert!(AnimationState::new(30, 0.0, -1.0).is_err());
        assert!(AnimationState::new(30, 0.0, f64::INFINITY).is_err());
        assert!(AnimationState::new(30, f64::NAN, 90.0).is_err());
        assert_eq!(AnimationState::new(30, -90.0, 90.0).unwrap().rotation_rate(), -90.0);
    }

    #[test]
    fn per_frame_rate_divides_by_frame_rate() {
        let state = AnimationState::new(30, 45.0, 90.0).unwrap();
        assert!((state.rotation_rate_per_frame() - 1.5).abs() < 1e-12);
        assert_eq!(state.target_frame_rate(), 30);
    }

    #[test]
    fn rate_changes_respect_the_limit() {
        let mut state = AnimationState::new(30, 85.0, 90.0).unwrap();
        assert!(state.change_rotation_rate(5.0));
        assert_eq!(state.rotation_rate(), 90.0);
        assert!(!state.change_rotation_rate(5.0));
        assert_eq!(state.rotation_rate(), 90.0);
        assert!(state.change_rotation_rate(-180.0));
        assert!(!state.change_rotation_rate(-5.0));
        assert_eq!(state.rotation_rate(), -90.0);
    }

    #[test]
    fn axis_rotations_wrap_and_reset() {
        let mut state = AnimationState::new(30, 45.0, 90.0).unwrap();
        state.rotate_around_x_axis(100.0);
        state.rotate_around_y_axis(-190.0);
        state.rotate_around_z_axis(-2.5);
        let a = state.rotation_angles();
        assert_eq!((a.alpha(), a.beta(), a.gamma()), (10.0, 350.0, 357.5));

        state.reset_rotation_angles_to_default();
        assert_eq!(state.rotation_angles(), EulerAngles::new(270.0, 180.0, 0.0));
    }

    #[test]
    fn snapshot_is_detached_from_later_changes() {
        let mut state = AnimationState::new(10, 20.0, 90.0).unwrap();
        let snap = state.snapshot();
        state.toggle_pause();
        state.rotate_around_z_axis(45.0);
        assert!(!snap.paused);
        assert_eq!(snap.angles.gamma(), 0.0);
        assert!((snap.rotation_per_frame - 2.0).abs() < 1e-12);
        assert!(state.snapshot().paused);
    }

    #[test]
    fn termination_is_sticky() {
        let mut state = AnimationState::new(30, 45.0, 90.0).unwrap();
        assert!(!state.should_terminate());
        state.schedule_termination();
        assert!(state.should_terminate());
    }
}
