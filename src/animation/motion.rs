//! Procedural motions, one pose function per animation state.
//!
//! Every motion reads the global elapsed time, not time since the state was
//! entered, so a wave's phase depends on when the viewer was mounted.

use super::lipsync::MouthShape;
use super::pose::{BodyPart, PartTransform, PoseFrame};
use super::state::AnimationState;

/// Pose function for one state, `t` in seconds since mount
pub type MotionFn = fn(f32) -> PoseFrame;

/// Indexed by `AnimationState as usize`
const MOTIONS: [MotionFn; AnimationState::ALL.len()] = [idle, talking, waving, nodding];

impl AnimationState {
    pub fn motion(self) -> MotionFn {
        MOTIONS[self as usize]
    }
}

/// `sin(t * rate) * amplitude`
fn wave(t: f32, rate: f32, amplitude: f32) -> f32 {
    (t * rate).sin() * amplitude
}

fn body(bob: f32, roll: f32) -> PartTransform {
    PartTransform::IDENTITY.with_bob(bob).with_roll(roll)
}

fn arm(roll: f32, pitch: f32) -> PartTransform {
    PartTransform::IDENTITY.with_roll(roll).with_pitch(pitch)
}

fn idle(t: f32) -> PoseFrame {
    let sway = wave(t, 1.2, 0.05);
    PoseFrame::rest()
        .with(BodyPart::Body, body(wave(t, 1.5, 0.03), wave(t, 0.5, 0.02)))
        .with(BodyPart::Head, PartTransform::IDENTITY.with_yaw(wave(t, 0.3, 0.05)))
        .with(BodyPart::LeftArm, arm(sway, 0.0))
        .with(BodyPart::RightArm, arm(-sway, 0.0))
}

fn talking(t: f32) -> PoseFrame {
    // Each arm runs on its own frequencies so the gestures never line up
    let left = arm(wave(t, 2.5, 0.1) + 0.1, wave(t, 1.8, 0.05));
    let right = arm(-(wave(t, 2.3, 0.1) + 0.1), -wave(t, 2.1, 0.05));

    PoseFrame::rest()
        .with(BodyPart::Body, body(wave(t, 2.0, 0.04), wave(t, 1.5, 0.03)))
        .with(
            BodyPart::Head,
            PartTransform::IDENTITY
                .with_yaw(wave(t, 2.0, 0.08))
                .with_pitch(wave(t, 3.0, 0.03)),
        )
        .with(BodyPart::LeftArm, left)
        .with(BodyPart::RightArm, right)
}

/// Raised right arm swinging between -0.8 and -1.2 rad of roll
pub fn wave_progress(t: f32) -> f32 {
    ((t * 4.0).sin() + 1.0) / 2.0
}

fn waving(t: f32) -> PoseFrame {
    let right = arm(-0.8 - wave_progress(t) * 0.4, wave(t, 8.0, 0.3));

    PoseFrame::rest()
        .with(BodyPart::Body, body(wave(t, 2.0, 0.02), 0.0))
        .with(BodyPart::Head, PartTransform::IDENTITY.with_yaw(0.2))
        .with(BodyPart::LeftArm, arm(0.0, 0.0))
        .with(BodyPart::RightArm, right)
}

fn nodding(t: f32) -> PoseFrame {
    PoseFrame::rest()
        .with(BodyPart::Body, body(wave(t, 1.5, 0.02), 0.0))
        .with(BodyPart::Head, PartTransform::IDENTITY.with_pitch(wave(t, 3.0, 0.15)))
        .with(BodyPart::LeftArm, arm(0.0, 0.0))
        .with(BodyPart::RightArm, arm(0.0, 0.0))
}

/// Full pose for one frame: the state's motion plus lip-sync.
///
/// Pure in its inputs; calling it twice with the same arguments gives the
/// same frame.
pub fn compute_pose(t: f32, state: AnimationState, is_talking: bool) -> PoseFrame {
    let mouth = MouthShape::at(t, is_talking);
    state
        .motion()(t)
        .with(BodyPart::Mouth, mouth.transform())
        .with_mouth_tint(mouth.tint)
}
