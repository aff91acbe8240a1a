//! Orbit camera rig.
//!
//! Spherical coordinates around a fixed target, polar angle measured from +Y.
//! Keyboard steps and free drag both go through the same clamp, so the rig
//! never leaves its bounds even for a single frame.

use glam::Vec3;
use serde::Serialize;
use std::f32::consts::{PI, TAU};

use super::controls::ControlState;
use crate::config::CameraConfig;

/// Distance and polar-angle bounds of the orbit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

// Total even for NaN or inverted bounds
impl OrbitLimits {
    fn distance(&self, d: f32) -> f32 {
        d.max(self.min_distance).min(self.max_distance)
    }

    fn polar(&self, p: f32) -> f32 {
        p.max(self.min_polar).min(self.max_polar)
    }
}

/// Camera placement handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
    limits: OrbitLimits,
    rotate_step: f32,
    zoom_step: f32,
    fov: f32,
    near: f32,
    far: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Self {
        let target = Vec3::from_array(config.target);
        let offset = Vec3::from_array(config.position) - target;
        let distance = offset.length();
        let polar = if distance > f32::EPSILON {
            (offset.y / distance).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        let limits = OrbitLimits {
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            min_polar: config.min_polar,
            max_polar: config.max_polar,
        };

        Self {
            target,
            azimuth: offset.x.atan2(offset.z),
            polar: limits.polar(polar),
            distance: limits.distance(distance),
            limits,
            rotate_step: config.rotate_step,
            zoom_step: config.zoom_step,
            fov: config.fov,
            near: config.near,
            far: config.far,
        }
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    /// Apply one frame of held keyboard controls
    ///
    /// Opposing controls held together cancel before anything is clamped.
    pub fn apply_controls(&mut self, controls: ControlState) {
        let turn = axis(controls.rotate_right, controls.rotate_left);
        let zoom = axis(controls.zoom_out, controls.zoom_in);

        self.azimuth += turn * self.rotate_step;
        if zoom != 0.0 {
            self.distance = self.limits.distance(self.distance + zoom * self.zoom_step);
        }
        self.constrain();
    }

    /// Free orbit from a pointer drag, composed with the keyboard steps
    pub fn orbit(&mut self, delta_azimuth: f32, delta_polar: f32) {
        self.azimuth += delta_azimuth;
        self.polar += delta_polar;
        self.constrain();
    }

    /// Scroll-wheel zoom; positive moves away from the target
    pub fn dolly(&mut self, delta: f32) {
        self.distance += delta;
        self.constrain();
    }

    /// Orbit-constraint pass: clamp distance and polar angle, wrap azimuth
    fn constrain(&mut self) {
        self.distance = self.limits.distance(self.distance);
        self.polar = self.limits.polar(self.polar);
        self.azimuth = wrap_angle(self.azimuth);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * self.distance
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            eye: self.eye(),
            target: self.target,
            azimuth: self.azimuth,
            polar: self.polar,
            distance: self.distance,
            fov: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

/// Net direction of a pair of opposing controls: -1, 0 or 1
fn axis(positive: bool, negative: bool) -> f32 {
    f32::from(i8::from(positive) - i8::from(negative))
}

/// Wrap into [-pi, pi)
fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}
