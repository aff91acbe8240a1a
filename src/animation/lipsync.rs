//! Lip-sync driven by the talking flag alone.
//!
//! The mouth shape is a continuous function of time while talking, so it is
//! evaluated directly each frame with no easing between talking and silent.

use glam::Vec3;

use super::pose::{MouthTint, PartTransform};

/// Vertical mouth scale while silent
pub const CLOSED_MOUTH: f32 = 0.1;
/// Mouth oscillation speed while talking (rad/s)
const TALK_RATE: f32 = 15.0;
const OPEN_RANGE: f32 = 0.4;
const MIN_OPEN: f32 = 0.2;
/// How much the mouth widens as it closes
const WIDEN: f32 = 0.3;

/// Mouth scale and tint for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouthShape {
    pub vertical: f32,
    pub horizontal: f32,
    pub tint: MouthTint,
}

impl MouthShape {
    pub fn at(t: f32, is_talking: bool) -> Self {
        if !is_talking {
            return Self {
                vertical: CLOSED_MOUTH,
                horizontal: 1.0,
                tint: MouthTint::Neutral,
            };
        }

        let vertical = (t * TALK_RATE).sin().abs() * OPEN_RANGE + MIN_OPEN;
        Self {
            vertical,
            horizontal: 1.0 + (1.0 - vertical) * WIDEN,
            tint: MouthTint::Active,
        }
    }

    pub fn transform(&self) -> PartTransform {
        PartTransform::IDENTITY.with_scale(Vec3::new(self.horizontal, self.vertical, 1.0))
    }
}
