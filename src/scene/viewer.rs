//! The avatar viewer: one mounted stage with its own clock, state and camera.
//!
//! Each viewer owns everything it animates. Two viewers never share state, and
//! dropping a viewer discards its clock and animation state.

use tracing::debug;

use super::figure::{build_figure, ground_plane, placeholder};
use super::{SceneFrame, Subject};
use crate::animation::{compute_pose, AnimationState, AnimationStateMachine, Clock, MountClock};
use crate::avatar::{Avatar, AvatarAppearance, BodyParameters};
use crate::camera::{CameraRig, ControlState, KeyMap};
use crate::config::{Config, MouthConfig, StageConfig};

pub struct AvatarViewer<C: Clock = MountClock> {
    clock: C,
    animation: AnimationStateMachine,
    camera: CameraRig,
    keymap: KeyMap,
    mouth: MouthConfig,
    stage: StageConfig,
    /// Last resolved appearance, reused until the appearance changes
    body: Option<(AvatarAppearance, BodyParameters)>,
    frames: u64,
}

impl AvatarViewer<MountClock> {
    /// Mount a viewer driven by the wall clock
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, MountClock::new())
    }
}

impl<C: Clock> AvatarViewer<C> {
    pub fn with_clock(config: &Config, clock: C) -> Self {
        debug!("Avatar viewer mounted");
        Self {
            clock,
            animation: AnimationStateMachine::default(),
            camera: CameraRig::from_config(&config.camera),
            keymap: KeyMap::from_config(&config.controls),
            mouth: config.mouth.clone(),
            stage: config.stage.clone(),
            body: None,
            frames: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> AnimationState {
        self.animation.current()
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Pointer drag and scroll go straight to the rig
    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Frames rendered since mount
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply one frame of held camera controls
    pub fn update_camera(&mut self, controls: ControlState) {
        self.camera.apply_controls(controls);
    }

    /// Sample held keys through the viewer's bindings and update the camera
    pub fn update_camera_from_keys<I, S>(&mut self, held: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let controls = ControlState::from_keys(held, &self.keymap);
        self.update_camera(controls);
    }

    /// Render one frame.
    ///
    /// Without an avatar the stage shows the placeholder and no pose is
    /// computed. A missing talking flag counts as silent.
    pub fn render(
        &mut self,
        avatar: Option<&Avatar>,
        animation_state: Option<AnimationState>,
        is_talking: Option<bool>,
    ) -> SceneFrame {
        let elapsed = self.clock.elapsed_secs();
        self.frames += 1;

        let ground = ground_plane(&self.stage);
        let camera = self.camera.view();

        let Some(avatar) = avatar else {
            return SceneFrame {
                elapsed,
                state: None,
                pose: None,
                subject: Subject::Placeholder(placeholder(&self.stage)),
                ground,
                camera,
            };
        };

        let is_talking = is_talking.unwrap_or(false);
        if let Some(previous) = self.animation.evaluate(animation_state, is_talking) {
            debug!(
                "Animation state {} -> {}",
                previous,
                self.animation.current()
            );
        }
        let state = self.animation.current();

        let pose = compute_pose(elapsed, state, is_talking);
        let body = resolve_cached(&mut self.body, avatar);
        let figure = build_figure(body, &pose, &self.mouth);

        SceneFrame {
            elapsed,
            state: Some(state),
            pose: Some(pose),
            subject: Subject::Figure(figure),
            ground,
            camera,
        }
    }
}

/// Resolve body parameters, reusing the cached result while the appearance
/// is unchanged
fn resolve_cached<'a>(
    cache: &'a mut Option<(AvatarAppearance, BodyParameters)>,
    avatar: &Avatar,
) -> &'a BodyParameters {
    if matches!(cache, Some((appearance, _)) if *appearance != avatar.appearance) {
        *cache = None;
    }
    let (_, params) = cache.get_or_insert_with(|| {
        debug!("Resolving appearance for avatar {}", avatar.id);
        (
            avatar.appearance.clone(),
            BodyParameters::resolve(&avatar.appearance),
        )
    });
    params
}

impl<C: Clock> Drop for AvatarViewer<C> {
    fn drop(&mut self) {
        debug!("Avatar viewer unmounted after {} frames", self.frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{BodyPart, ManualClock, MouthTint};
    use crate::avatar::generator::generate_random;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn avatar() -> Avatar {
        generate_random(&mut StdRng::seed_from_u64(7))
    }

    fn viewer() -> AvatarViewer<ManualClock> {
        AvatarViewer::with_clock(&Config::default(), ManualClock::new())
    }

    #[test]
    fn test_placeholder_without_avatar() {
        let mut viewer = viewer();
        let frame = viewer.render(None, Some(AnimationState::Waving), Some(true));
        assert!(frame.is_placeholder());
        assert!(frame.pose.is_none());
        assert!(frame.state.is_none());
        // No avatar means no state evaluation
        assert_eq!(viewer.state(), AnimationState::Idle);
    }

    #[test]
    fn test_talking_overrides_requested_state() {
        let avatar = avatar();
        let mut viewer = viewer();

        let frame = viewer.render(Some(&avatar), Some(AnimationState::Waving), Some(false));
        assert_eq!(frame.state, Some(AnimationState::Waving));

        viewer.clock().advance(Duration::from_millis(16));
        let frame = viewer.render(Some(&avatar), Some(AnimationState::Waving), Some(true));
        assert_eq!(frame.state, Some(AnimationState::Talking));
        assert_eq!(frame.pose.unwrap().mouth_tint(), MouthTint::Active);

        // Reverts as soon as talking stops, no timers involved
        viewer.clock().advance(Duration::from_millis(16));
        let frame = viewer.render(Some(&avatar), Some(AnimationState::Waving), Some(false));
        assert_eq!(frame.state, Some(AnimationState::Waving));
    }

    #[test]
    fn test_missing_inputs_default() {
        let avatar = avatar();
        let mut viewer = viewer();
        let frame = viewer.render(Some(&avatar), None, None);
        assert_eq!(frame.state, Some(AnimationState::Idle));
        assert_eq!(frame.pose.unwrap().mouth_tint(), MouthTint::Neutral);
    }

    #[test]
    fn test_waving_at_mount() {
        let avatar = avatar();
        let mut viewer = viewer();
        let frame = viewer.render(Some(&avatar), Some(AnimationState::Waving), None);
        assert_eq!(frame.elapsed, 0.0);
        let pose = frame.pose.as_ref().unwrap();
        assert!((pose.part(BodyPart::RightArm).roll() + 1.0).abs() < 1e-6);

        let figure = frame.figure().unwrap();
        assert!((figure.part("right-arm").unwrap().rotation.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pose_follows_clock_not_frames() {
        let avatar = avatar();
        let mut a = viewer();
        let mut b = viewer();

        a.clock().set(Duration::from_secs(2));
        let one = a.render(Some(&avatar), None, Some(true));

        for _ in 0..10 {
            b.render(Some(&avatar), None, Some(true));
        }
        b.clock().set(Duration::from_secs(2));
        let two = b.render(Some(&avatar), None, Some(true));

        assert_eq!(one.pose, two.pose);
        assert_eq!(b.frames(), 11);
    }

    #[test]
    fn test_viewers_are_independent() {
        let avatar = avatar();
        let mut a = viewer();
        let mut b = viewer();

        a.render(Some(&avatar), Some(AnimationState::Nodding), None);
        a.update_camera_from_keys(["KeyA"]);

        let frame = b.render(Some(&avatar), None, None);
        assert_eq!(frame.state, Some(AnimationState::Idle));
        assert_eq!(b.camera().azimuth(), 0.0);
        assert!(a.camera().azimuth() < 0.0);
    }

    #[test]
    fn test_appearance_change_is_picked_up() {
        let mut avatar = avatar();
        let mut viewer = viewer();

        avatar.appearance.height = Some(1.0);
        let frame = viewer.render(Some(&avatar), None, None);
        assert_eq!(frame.figure().unwrap().scale.y, 1.0);

        avatar.appearance.height = Some(1.3);
        let frame = viewer.render(Some(&avatar), None, None);
        assert_eq!(frame.figure().unwrap().scale.y, 1.3);
    }

    #[test]
    fn test_camera_clamped_through_viewer() {
        let mut viewer = viewer();
        for _ in 0..400 {
            viewer.update_camera(ControlState {
                zoom_in: true,
                ..Default::default()
            });
        }
        let frame = viewer.render(None, None, None);
        assert_eq!(frame.camera.distance, 1.0);

        viewer.camera_mut().orbit(0.0, 5.0);
        assert_eq!(viewer.camera().polar(), std::f32::consts::FRAC_PI_2);
    }
}
