//! Avatar record types
//!
//! Field names follow the JSON records written by the avatar editor
//! (camelCase). Fields added after the first record version are optional so
//! older records still decode.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AvatarError, StageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Self::Male, Self::Female, Self::Other];
}

/// Coarse body build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Slim,
    Athletic,
    Curvy,
}

impl BodyType {
    pub const ALL: [BodyType; 3] = [Self::Slim, Self::Athletic, Self::Curvy];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingStyle {
    #[default]
    Casual,
    Formal,
    Fantasy,
    Futuristic,
    Sporty,
}

/// Outfit colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clothing {
    /// Top color
    pub color: String,
    /// Bottom color, falls back to `color` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ClothingStyle>,
}

impl Clothing {
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
            bottom_color: None,
            style: None,
        }
    }

    pub fn bottom_color(&self) -> &str {
        self.bottom_color.as_deref().unwrap_or(&self.color)
    }

    pub fn style(&self) -> ClothingStyle {
        self.style.unwrap_or_default()
    }
}

/// Declarative appearance of an avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarAppearance {
    pub gender: Gender,
    pub body_type: BodyType,
    /// Vertical scale multiplier in [0.7, 1.3]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// 0 - 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_definition: Option<f32>,
    pub skin_tone: String,
    pub hair_color: String,
    pub eye_color: String,
    pub clothing: Clothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityTrait {
    Friendly,
    Mysterious,
    Playful,
    Serious,
    Adventurous,
    Calm,
    Intelligent,
    Creative,
    Humorous,
    Empathetic,
    Confident,
    Curious,
}

impl PersonalityTrait {
    pub const ALL: [PersonalityTrait; 12] = [
        Self::Friendly,
        Self::Mysterious,
        Self::Playful,
        Self::Serious,
        Self::Adventurous,
        Self::Calm,
        Self::Intelligent,
        Self::Creative,
        Self::Humorous,
        Self::Empathetic,
        Self::Confident,
        Self::Curious,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarPersonality {
    pub trait1: PersonalityTrait,
    pub trait2: PersonalityTrait,
    /// How talkative the avatar is, 0 - 100
    pub chattiness: u8,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    Male,
    Female,
    Neutral,
}

/// Text-to-speech settings. Carried for the speech collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarVoice {
    #[serde(rename = "type")]
    pub voice_type: VoiceType,
    /// 0.5 - 2.0
    pub pitch: f32,
    /// 0.5 - 2.0
    pub speed: f32,
    pub enabled: bool,
}

/// A complete avatar record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub id: String,
    pub name: String,
    pub appearance: AvatarAppearance,
    pub personality: AvatarPersonality,
    pub voice: AvatarVoice,
    /// RFC 3339 timestamp
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl Avatar {
    /// Decode an avatar record from JSON
    pub fn from_json(s: &str) -> Result<Self, StageError> {
        serde_json::from_str(s).map_err(|e| AvatarError::Decode(e.to_string()).into())
    }

    /// Decode an avatar record from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StageError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AvatarError::ReadFile(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Self::from_json(&contents)
    }
}
