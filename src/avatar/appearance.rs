//! Appearance resolution: avatar description to body parameters.

use serde::Serialize;

use super::types::{AvatarAppearance, BodyType};

pub const DEFAULT_HEIGHT: f32 = 1.0;
pub const HEIGHT_RANGE: (f32, f32) = (0.7, 1.3);
pub const DEFAULT_MUSCLE_DEFINITION: f32 = 0.0;
pub const MUSCLE_RANGE: (f32, f32) = (0.0, 100.0);

impl BodyType {
    /// Horizontal scale of the torso and arm spacing
    pub fn scale(self) -> f32 {
        match self {
            BodyType::Slim => 0.8,
            BodyType::Athletic => 1.0,
            BodyType::Curvy => 1.2,
        }
    }
}

/// Fully resolved parameters the figure is built from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyParameters {
    pub body_scale: f32,
    /// Uniform vertical scale of the whole figure
    pub height_scale: f32,
    /// Limb and torso thickness multiplier in [1.0, 1.5]
    pub muscle_scale: f32,
    pub skin_color: String,
    pub hair_color: String,
    pub eye_color: String,
    pub clothing_color: String,
    pub bottom_color: String,
}

impl BodyParameters {
    /// Resolve an appearance. Missing legacy fields take their defaults and
    /// out-of-range or non-finite numbers never reach the geometry.
    pub fn resolve(appearance: &AvatarAppearance) -> Self {
        let height = sanitize(appearance.height, DEFAULT_HEIGHT, HEIGHT_RANGE);
        let muscle = sanitize(
            appearance.muscle_definition,
            DEFAULT_MUSCLE_DEFINITION,
            MUSCLE_RANGE,
        );

        Self {
            body_scale: appearance.body_type.scale(),
            height_scale: height,
            muscle_scale: 1.0 + muscle / 200.0,
            skin_color: appearance.skin_tone.clone(),
            hair_color: appearance.hair_color.clone(),
            eye_color: appearance.eye_color.clone(),
            clothing_color: appearance.clothing.color.clone(),
            bottom_color: appearance.clothing.bottom_color().to_string(),
        }
    }
}

fn sanitize(value: Option<f32>, default: f32, (lo, hi): (f32, f32)) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(lo, hi),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::types::{Clothing, Gender};
    use proptest::prelude::*;

    fn appearance(body_type: BodyType) -> AvatarAppearance {
        AvatarAppearance {
            gender: Gender::Other,
            body_type,
            height: None,
            muscle_definition: None,
            skin_tone: "#D2B48C".to_string(),
            hair_color: "#000000".to_string(),
            eye_color: "#0000FF".to_string(),
            clothing: Clothing::new("#FF0000"),
        }
    }

    #[test]
    fn test_body_scale_lookup() {
        let expected = [
            (BodyType::Slim, 0.8),
            (BodyType::Athletic, 1.0),
            (BodyType::Curvy, 1.2),
        ];
        for (body_type, scale) in expected {
            assert_eq!(BodyParameters::resolve(&appearance(body_type)).body_scale, scale);
        }
    }

    #[test]
    fn test_legacy_defaults() {
        let params = BodyParameters::resolve(&appearance(BodyType::Athletic));
        assert_eq!(params.height_scale, 1.0);
        assert_eq!(params.muscle_scale, 1.0);
        assert_eq!(params.bottom_color, "#FF0000");
    }

    #[test]
    fn test_muscle_endpoints() {
        let mut a = appearance(BodyType::Slim);
        a.muscle_definition = Some(0.0);
        assert_eq!(BodyParameters::resolve(&a).muscle_scale, 1.0);
        a.muscle_definition = Some(100.0);
        assert_eq!(BodyParameters::resolve(&a).muscle_scale, 1.5);
    }

    #[test]
    fn test_non_finite_falls_back() {
        let mut a = appearance(BodyType::Curvy);
        a.height = Some(f32::NAN);
        a.muscle_definition = Some(f32::INFINITY);
        let params = BodyParameters::resolve(&a);
        assert_eq!(params.height_scale, 1.0);
        assert_eq!(params.muscle_scale, 1.0);
    }

    #[test]
    fn test_colors_pass_through() {
        let mut a = appearance(BodyType::Slim);
        a.skin_tone = "not-a-color".to_string();
        a.clothing.bottom_color = Some("#123456".to_string());
        let params = BodyParameters::resolve(&a);
        assert_eq!(params.skin_color, "not-a-color");
        assert_eq!(params.hair_color, "#000000");
        assert_eq!(params.eye_color, "#0000FF");
        assert_eq!(params.clothing_color, "#FF0000");
        assert_eq!(params.bottom_color, "#123456");
    }

    proptest! {
        #[test]
        fn muscle_scale_is_linear_and_bounded(m in 0.0f32..=100.0) {
            let mut a = appearance(BodyType::Athletic);
            a.muscle_definition = Some(m);
            let scale = BodyParameters::resolve(&a).muscle_scale;
            prop_assert_eq!(scale, 1.0 + m / 200.0);
            prop_assert!((1.0..=1.5).contains(&scale));
        }

        #[test]
        fn height_passes_through_in_range(h in 0.7f32..=1.3) {
            let mut a = appearance(BodyType::Slim);
            a.height = Some(h);
            prop_assert_eq!(BodyParameters::resolve(&a).height_scale, h);
        }

        #[test]
        fn resolve_is_pure(h in proptest::option::of(0.7f32..=1.3), m in proptest::option::of(0.0f32..=100.0)) {
            let mut a = appearance(BodyType::Curvy);
            a.height = h;
            a.muscle_definition = m;
            let first = BodyParameters::resolve(&a);
            let second = BodyParameters::resolve(&a);
            prop_assert_eq!(first.height_scale.to_bits(), second.height_scale.to_bits());
            prop_assert_eq!(first.muscle_scale.to_bits(), second.muscle_scale.to_bits());
            prop_assert_eq!(first, second);
        }
    }
}
