//! Scene output: the primitives a renderer draws for one frame.
//!
//! The crate does not own a GPU context. A [`SceneFrame`] is a plain value
//! that a renderer (or the CLI's JSON dump) consumes once per frame.

pub mod figure;
pub mod viewer;

use glam::Vec3;
use serde::Serialize;

use crate::animation::{AnimationState, PoseFrame};
use crate::camera::CameraView;

pub use figure::{build_figure, ground_plane, placeholder};
pub use viewer::AvatarViewer;

/// Primitive geometry shapes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Sphere { radius: f32 },
    Box { size: Vec3 },
    Plane { width: f32, depth: f32 },
}

/// One positioned mesh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    pub name: &'static str,
    pub geometry: Geometry,
    pub position: Vec3,
    /// Euler angles (XYZ order), radians
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: String,
    pub opacity: f32,
}

/// The humanoid: a root transform and its parts in root-local space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub parts: Vec<Primitive>,
}

impl Figure {
    pub fn part(&self, name: &str) -> Option<&Primitive> {
        self.parts.iter().find(|p| p.name == name)
    }
}

/// What stands on the stage
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Figure(Figure),
    /// Shown when no avatar is loaded
    Placeholder(Primitive),
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    /// Seconds since the viewer was mounted
    pub elapsed: f32,
    /// Effective animation state, `None` for the placeholder
    pub state: Option<AnimationState>,
    pub pose: Option<PoseFrame>,
    pub subject: Subject,
    pub ground: Primitive,
    pub camera: CameraView,
}

impl SceneFrame {
    pub fn figure(&self) -> Option<&Figure> {
        match &self.subject {
            Subject::Figure(figure) => Some(figure),
            Subject::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.subject, Subject::Placeholder(_))
    }
}
