//! Avatar Stage - procedural primitive humanoid with state-driven animation
//!
//! A small headless engine for a stylized avatar that:
//! - Resolves a declarative appearance into body proportions and colors
//! - Animates the figure from elapsed time, a requested state and a talking flag
//! - Drives an orbit camera from held keys composed with free drag
//!
//! Each frame is produced as a plain [`scene::SceneFrame`] value for whatever
//! renderer sits on top.

pub mod animation;
pub mod avatar;
pub mod camera;
pub mod config;
pub mod error;
pub mod scene;

pub use animation::{AnimationState, Clock, ManualClock, MountClock, PoseFrame};
pub use avatar::{Avatar, AvatarAppearance, BodyParameters};
pub use camera::{CameraRig, ControlState, KeyMap};
pub use config::Config;
pub use error::{Result, StageError};
pub use scene::{AvatarViewer, SceneFrame};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
