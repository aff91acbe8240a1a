//! Camera rig: keyboard-driven orbit camera layered over free drag.

pub mod controls;
pub mod rig;

pub use controls::{Control, ControlState, KeyMap};
pub use rig::{CameraRig, CameraView, OrbitLimits};
