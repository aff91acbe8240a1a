//! Animation state machine

use serde::{Deserialize, Serialize};

/// Named animation the figure is performing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AnimationState {
    /// Default resting loop
    #[default]
    Idle,
    Talking,
    Waving,
    Nodding,
}

impl AnimationState {
    pub const ALL: [AnimationState; 4] = [Self::Idle, Self::Talking, Self::Waving, Self::Nodding];

    /// Parse a state name. Unknown names fall back to idle.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "idle" => Self::Idle,
            "talking" => Self::Talking,
            "waving" => Self::Waving,
            "nodding" => Self::Nodding,
            _ => Self::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Talking => "talking",
            Self::Waving => "waving",
            Self::Nodding => "nodding",
        }
    }

    /// Level-triggered override: talking wins for as long as the flag is
    /// set, otherwise the requested state (idle when none was requested).
    pub fn effective(requested: Option<AnimationState>, is_talking: bool) -> AnimationState {
        if is_talking {
            Self::Talking
        } else {
            requested.unwrap_or_default()
        }
    }
}

impl std::fmt::Display for AnimationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AnimationState {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for AnimationState {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Holds the effective animation state of one viewer.
///
/// There are no timers and no queued transitions: every evaluation picks the
/// state from the current inputs alone.
#[derive(Debug, Clone, Default)]
pub struct AnimationStateMachine {
    current: AnimationState,
}

impl AnimationStateMachine {
    pub fn new(initial: Option<AnimationState>) -> Self {
        Self {
            current: initial.unwrap_or_default(),
        }
    }

    pub fn current(&self) -> AnimationState {
        self.current
    }

    /// Evaluate the inputs for this frame. Returns the previous state when the
    /// effective state changed.
    pub fn evaluate(
        &mut self,
        requested: Option<AnimationState>,
        is_talking: bool,
    ) -> Option<AnimationState> {
        let next = AnimationState::effective(requested, is_talking);
        if next == self.current {
            return None;
        }
        Some(std::mem::replace(&mut self.current, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_name() {
        assert_eq!(AnimationState::from_name("waving"), AnimationState::Waving);
        assert_eq!(AnimationState::from_name(" Nodding "), AnimationState::Nodding);
        assert_eq!(AnimationState::from_name("dancing"), AnimationState::Idle);
        assert_eq!(AnimationState::from_name(""), AnimationState::Idle);
    }

    #[test]
    fn test_deserialize_unknown_is_idle() {
        let state: AnimationState = serde_json::from_str("\"moonwalk\"").unwrap();
        assert_eq!(state, AnimationState::Idle);
        let state: AnimationState = serde_json::from_str("\"talking\"").unwrap();
        assert_eq!(state, AnimationState::Talking);
        assert_eq!(serde_json::to_string(&AnimationState::Waving).unwrap(), "\"waving\"");
    }

    #[test]
    fn test_default_state() {
        let machine = AnimationStateMachine::default();
        assert_eq!(machine.current(), AnimationState::Idle);
        assert_eq!(
            AnimationStateMachine::new(Some(AnimationState::Nodding)).current(),
            AnimationState::Nodding
        );
    }

    #[test]
    fn test_state_transitions() {
        let mut machine = AnimationStateMachine::new(Some(AnimationState::Waving));

        // Waving -> Talking while the flag is held
        assert_eq!(
            machine.evaluate(Some(AnimationState::Waving), true),
            Some(AnimationState::Waving)
        );
        assert_eq!(machine.current(), AnimationState::Talking);

        // Still talking, no change reported
        assert_eq!(machine.evaluate(Some(AnimationState::Nodding), true), None);
        assert_eq!(machine.current(), AnimationState::Talking);

        // Flag released: straight back to the requested state
        assert_eq!(
            machine.evaluate(Some(AnimationState::Nodding), false),
            Some(AnimationState::Talking)
        );
        assert_eq!(machine.current(), AnimationState::Nodding);

        // Nothing requested falls back to idle
        machine.evaluate(None, false);
        assert_eq!(machine.current(), AnimationState::Idle);
    }

    fn any_request() -> impl Strategy<Value = Option<AnimationState>> {
        proptest::option::of(proptest::sample::select(AnimationState::ALL.to_vec()))
    }

    proptest! {
        #[test]
        fn talking_overrides_any_request(requested in any_request()) {
            prop_assert_eq!(AnimationState::effective(requested, true), AnimationState::Talking);
        }

        #[test]
        fn release_reverts_immediately(requested in any_request()) {
            let mut machine = AnimationStateMachine::default();
            machine.evaluate(requested, true);
            machine.evaluate(requested, false);
            prop_assert_eq!(machine.current(), requested.unwrap_or(AnimationState::Idle));
        }
    }
}
