//! Keyboard bindings for the camera controls.

use std::collections::HashMap;

use crate::config::ControlsConfig;

/// One of the four camera controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    RotateLeft,
    RotateRight,
    ZoomIn,
    ZoomOut,
}

/// Control signals sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
}

impl ControlState {
    pub fn is_idle(&self) -> bool {
        !(self.rotate_left || self.rotate_right || self.zoom_in || self.zoom_out)
    }

    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::RotateLeft => self.rotate_left = held,
            Control::RotateRight => self.rotate_right = held,
            Control::ZoomIn => self.zoom_in = held,
            Control::ZoomOut => self.zoom_out = held,
        }
    }

    /// Sample the controls from the set of keys currently held down
    pub fn from_keys<I, S>(held: I, keymap: &KeyMap) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self::default();
        for key in held {
            if let Some(control) = keymap.control_for(key.as_ref()) {
                state.set(control, true);
            }
        }
        state
    }
}

/// Key code to control lookup
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: HashMap<String, Control>,
}

impl KeyMap {
    pub fn from_config(config: &ControlsConfig) -> Self {
        let groups = [
            (Control::RotateLeft, &config.rotate_left),
            (Control::RotateRight, &config.rotate_right),
            (Control::ZoomIn, &config.zoom_in),
            (Control::ZoomOut, &config.zoom_out),
        ];

        let mut bindings = HashMap::new();
        for (control, keys) in groups {
            for key in keys {
                if let Some(previous) = bindings.insert(key.clone(), control) {
                    tracing::warn!(
                        "Key {} bound to both {:?} and {:?}, using {:?}",
                        key,
                        previous,
                        control,
                        control
                    );
                }
            }
        }

        Self { bindings }
    }

    pub fn control_for(&self, key: &str) -> Option<Control> {
        self.bindings.get(key).copied()
    }
}
