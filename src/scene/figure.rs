//! Figure assembly: rest layout + body parameters + pose frame.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use super::{Figure, Geometry, Primitive};
use crate::animation::{BodyPart, MouthTint, PartTransform, PoseFrame};
use crate::avatar::BodyParameters;
use crate::config::{MouthConfig, StageConfig};

// Rest layout, root-local units (the figure stands about 1.9 tall)
const HEAD_CENTER: Vec3 = Vec3::new(0.0, 1.7, 0.0);
const HEAD_RADIUS: f32 = 0.15;
const HAIR_CENTER: Vec3 = Vec3::new(0.0, 1.85, 0.0);
const HAIR_RADIUS: f32 = 0.18;
const EYE_OFFSET: Vec3 = Vec3::new(0.05, 1.75, 0.13);
const EYE_RADIUS: f32 = 0.02;
const MOUTH_CENTER: Vec3 = Vec3::new(0.0, 1.63, 0.14);
const MOUTH_SIZE: Vec3 = Vec3::new(0.08, 0.02, 0.02);

const TORSO_CENTER: Vec3 = Vec3::new(0.0, 1.2, 0.0);
const TORSO_SIZE: Vec3 = Vec3::new(0.3, 0.6, 0.2);

const ARM_X: f32 = 0.25;
const ARM_Y: f32 = 1.3;
const ARM_SIZE: Vec3 = Vec3::new(0.1, 0.5, 0.1);

const LEG_X: f32 = 0.1;
const LEG_Y: f32 = 0.5;
const LEG_SIZE: Vec3 = Vec3::new(0.12, 0.8, 0.12);

const FOOT_OFFSET: Vec3 = Vec3::new(0.1, 0.05, 0.05);
const FOOT_SIZE: Vec3 = Vec3::new(0.1, 0.05, 0.2);
const FOOT_COLOR: &str = "#333333";

const PLACEHOLDER_CENTER: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const PLACEHOLDER_SIZE: Vec3 = Vec3::new(0.5, 2.0, 0.3);

/// Place a rest-pose mesh under a pose delta that rotates about `pivot`
fn posed(
    name: &'static str,
    geometry: Geometry,
    rest: Vec3,
    pivot: Vec3,
    delta: &PartTransform,
    scale: Vec3,
    color: &str,
) -> Primitive {
    let rotated = pivot + delta.quat() * (rest - pivot);
    Primitive {
        name,
        geometry,
        position: rotated + delta.position,
        rotation: delta.rotation,
        scale: scale * delta.scale,
        color: color.to_string(),
        opacity: 1.0,
    }
}

fn sphere(radius: f32) -> Geometry {
    Geometry::Sphere { radius }
}

fn cuboid(size: Vec3) -> Geometry {
    Geometry::Box { size }
}

/// Build the posed humanoid
pub fn build_figure(params: &BodyParameters, pose: &PoseFrame, mouth: &MouthConfig) -> Figure {
    let root = pose.part(BodyPart::Body);
    let head = pose.part(BodyPart::Head);
    let left_arm = pose.part(BodyPart::LeftArm);
    let right_arm = pose.part(BodyPart::RightArm);
    let legs = pose.part(BodyPart::Legs);
    let feet = pose.part(BodyPart::Feet);

    let girth = params.body_scale * params.muscle_scale;
    let limb = Vec3::new(params.muscle_scale, 1.0, params.muscle_scale);

    // Limbs turn about their own centers
    let arm_x = ARM_X * params.body_scale;

    let mouth_color = match pose.mouth_tint() {
        MouthTint::Active => &mouth.active_color,
        MouthTint::Neutral => &mouth.neutral_color,
    };
    // The mouth follows the head, then takes its own lip-sync scale
    let mouth_delta = PartTransform {
        scale: pose.part(BodyPart::Mouth).scale,
        ..*head
    };

    let eye_left = EYE_OFFSET * Vec3::new(-1.0, 1.0, 1.0);

    let parts = vec![
        posed("head", sphere(HEAD_RADIUS), HEAD_CENTER, HEAD_CENTER, head, Vec3::ONE, &params.skin_color),
        posed("hair", sphere(HAIR_RADIUS), HAIR_CENTER, HEAD_CENTER, head, Vec3::ONE, &params.hair_color),
        posed("left-eye", sphere(EYE_RADIUS), eye_left, HEAD_CENTER, head, Vec3::ONE, &params.eye_color),
        posed("right-eye", sphere(EYE_RADIUS), EYE_OFFSET, HEAD_CENTER, head, Vec3::ONE, &params.eye_color),
        posed("mouth", cuboid(MOUTH_SIZE), MOUTH_CENTER, HEAD_CENTER, &mouth_delta, Vec3::ONE, mouth_color),
        posed(
            "torso",
            cuboid(TORSO_SIZE),
            TORSO_CENTER,
            TORSO_CENTER,
            &PartTransform::IDENTITY,
            Vec3::new(girth, 1.0, girth),
            &params.clothing_color,
        ),
        posed(
            "left-arm",
            cuboid(ARM_SIZE),
            Vec3::new(-arm_x, ARM_Y, 0.0),
            Vec3::new(-arm_x, ARM_Y, 0.0),
            left_arm,
            limb,
            &params.skin_color,
        ),
        posed(
            "right-arm",
            cuboid(ARM_SIZE),
            Vec3::new(arm_x, ARM_Y, 0.0),
            Vec3::new(arm_x, ARM_Y, 0.0),
            right_arm,
            limb,
            &params.skin_color,
        ),
        posed(
            "left-leg",
            cuboid(LEG_SIZE),
            Vec3::new(-LEG_X, LEG_Y, 0.0),
            Vec3::new(-LEG_X, LEG_Y, 0.0),
            legs,
            limb,
            &params.bottom_color,
        ),
        posed(
            "right-leg",
            cuboid(LEG_SIZE),
            Vec3::new(LEG_X, LEG_Y, 0.0),
            Vec3::new(LEG_X, LEG_Y, 0.0),
            legs,
            limb,
            &params.bottom_color,
        ),
        posed(
            "left-foot",
            cuboid(FOOT_SIZE),
            FOOT_OFFSET * Vec3::new(-1.0, 1.0, 1.0),
            FOOT_OFFSET * Vec3::new(-1.0, 1.0, 1.0),
            feet,
            Vec3::ONE,
            FOOT_COLOR,
        ),
        posed("right-foot", cuboid(FOOT_SIZE), FOOT_OFFSET, FOOT_OFFSET, feet, Vec3::ONE, FOOT_COLOR),
    ];

    Figure {
        position: root.position,
        rotation: root.rotation,
        scale: Vec3::new(1.0, params.height_scale, 1.0) * root.scale,
        parts,
    }
}

/// Semi-transparent stand-in shown while no avatar is loaded
pub fn placeholder(stage: &StageConfig) -> Primitive {
    Primitive {
        name: "placeholder",
        geometry: cuboid(PLACEHOLDER_SIZE),
        position: PLACEHOLDER_CENTER,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
        color: stage.placeholder_color.clone(),
        opacity: stage.placeholder_opacity,
    }
}

pub fn ground_plane(stage: &StageConfig) -> Primitive {
    Primitive {
        name: "ground",
        geometry: Geometry::Plane {
            width: stage.ground_size,
            depth: stage.ground_size,
        },
        position: Vec3::ZERO,
        rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        scale: Vec3::ONE,
        color: stage.ground_color.clone(),
        opacity: 1.0,
    }
}
