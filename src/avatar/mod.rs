//! Avatar description module
//!
//! Handles avatar records, appearance resolution, and random generation.

pub mod appearance;
pub mod generator;
pub mod types;

pub use appearance::BodyParameters;
pub use generator::{generate_random, generate_themed, generate_variation, Theme};
pub use types::{
    Avatar, AvatarAppearance, AvatarPersonality, AvatarVoice, BodyType, Clothing, ClothingStyle,
    Gender, PersonalityTrait, VoiceType,
};
