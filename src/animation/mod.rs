//! Procedural animation for the primitive figure.
//!
//! Poses are pure functions of elapsed time, animation state and the talking
//! flag. Nothing here touches the scene directly; the figure builder consumes
//! the resulting [`PoseFrame`].

pub mod clock;
pub mod lipsync;
pub mod motion;
pub mod pose;
pub mod state;

pub use clock::{Clock, ManualClock, MountClock};
pub use lipsync::MouthShape;
pub use motion::{compute_pose, MotionFn};
pub use pose::{BodyPart, MouthTint, PartTransform, PoseFrame};
pub use state::{AnimationState, AnimationStateMachine};
