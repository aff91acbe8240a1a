//! Pose frames: per-part transform deltas for a single rendered frame.
//!
//! A pose frame is rebuilt from scratch every tick and never derived from the
//! previous one, so seeking or restarting the clock cannot accumulate drift.

use glam::{EulerRot, Quat, Vec3};
use serde::Serialize;

/// Animated parts of the primitive figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyPart {
    Head,
    /// Root of the figure: bob and roll move everything
    Body,
    LeftArm,
    RightArm,
    Mouth,
    Legs,
    Feet,
}

impl BodyPart {
    pub const ALL: [BodyPart; 7] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::Mouth,
        Self::Legs,
        Self::Feet,
    ];

    pub const fn count() -> usize {
        Self::ALL.len()
    }
}

/// Local transform delta applied on top of a part's rest pose.
///
/// `rotation` holds euler angles in radians: x = pitch, y = yaw, z = roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartTransform {
    pub rotation: Vec3,
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for PartTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartTransform {
    pub const IDENTITY: Self = Self {
        rotation: Vec3::ZERO,
        position: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn pitch(&self) -> f32 {
        self.rotation.x
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    pub fn roll(&self) -> f32 {
        self.rotation.z
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.rotation.x = pitch;
        self
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.rotation.y = yaw;
        self
    }

    pub fn with_roll(mut self, roll: f32) -> Self {
        self.rotation.z = roll;
        self
    }

    /// Vertical offset from the rest position
    pub fn with_bob(mut self, dy: f32) -> Self {
        self.position.y = dy;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation as a quaternion, applied X then Y then Z
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Mouth material selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MouthTint {
    #[default]
    Neutral,
    Active,
}

/// Immutable pose for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseFrame {
    parts: [PartTransform; BodyPart::count()],
    mouth_tint: MouthTint,
}

impl Default for PoseFrame {
    fn default() -> Self {
        Self::rest()
    }
}

impl PoseFrame {
    /// Every part at its rest transform
    pub fn rest() -> Self {
        Self {
            parts: [PartTransform::IDENTITY; BodyPart::count()],
            mouth_tint: MouthTint::Neutral,
        }
    }

    pub fn part(&self, part: BodyPart) -> &PartTransform {
        &self.parts[part as usize]
    }

    pub fn mouth_tint(&self) -> MouthTint {
        self.mouth_tint
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, &PartTransform)> {
        BodyPart::ALL.into_iter().zip(self.parts.iter())
    }

    /// Replace one part's transform
    pub fn with(mut self, part: BodyPart, transform: PartTransform) -> Self {
        self.parts[part as usize] = transform;
        self
    }

    pub fn with_mouth_tint(mut self, tint: MouthTint) -> Self {
        self.mouth_tint = tint;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_frame() {
        let frame = PoseFrame::rest();
        assert_eq!(frame.iter().count(), BodyPart::count());
        for (_, transform) in frame.iter() {
            assert_eq!(*transform, PartTransform::IDENTITY);
        }
        assert_eq!(frame.mouth_tint(), MouthTint::Neutral);
    }

    #[test]
    fn test_with_replaces_single_part() {
        let head = PartTransform::IDENTITY.with_yaw(0.2).with_pitch(-0.1);
        let frame = PoseFrame::rest().with(BodyPart::Head, head);

        assert_eq!(frame.part(BodyPart::Head).yaw(), 0.2);
        assert_eq!(frame.part(BodyPart::Head).pitch(), -0.1);
        assert_eq!(*frame.part(BodyPart::Body), PartTransform::IDENTITY);
        assert_eq!(*frame.part(BodyPart::Mouth), PartTransform::IDENTITY);
    }

    #[test]
    fn test_quat_matches_single_axis() {
        let roll = PartTransform::IDENTITY.with_roll(0.5).quat();
        let expected = Quat::from_rotation_z(0.5);
        assert!(roll.angle_between(expected) < 1e-5);

        assert!(PartTransform::IDENTITY.quat().angle_between(Quat::IDENTITY) < 1e-6);
    }

    #[test]
    fn test_iter_order_matches_parts() {
        let parts: Vec<BodyPart> = PoseFrame::rest().iter().map(|(p, _)| p).collect();
        assert_eq!(parts, BodyPart::ALL.to_vec());
    }
}
