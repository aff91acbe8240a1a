//! Random avatar generation
//!
//! All functions take the RNG from the caller so generation is reproducible
//! with a seeded `StdRng`.

use rand::seq::SliceRandom;
use rand::Rng;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use super::types::{
    Avatar, AvatarAppearance, AvatarPersonality, AvatarVoice, BodyType, Clothing, ClothingStyle,
    Gender, PersonalityTrait, VoiceType,
};

const MALE_NAMES: &[&str] = &[
    "Alex", "Blake", "Carter", "Dylan", "Ethan", "Felix", "Gabriel", "Hunter", "Ian", "Jack",
    "Kyle", "Logan",
];
const FEMALE_NAMES: &[&str] = &[
    "Aria", "Bella", "Clara", "Diana", "Emma", "Fiona", "Grace", "Hanna", "Isabella", "Jade",
    "Kira", "Luna",
];
const OTHER_NAMES: &[&str] = &[
    "Avery", "Casey", "Drew", "Ellis", "Finley", "Gray", "Harper", "Jordan", "Kai", "Lane",
    "Morgan", "Nova",
];
const LAST_NAMES: &[&str] = &[
    "Anderson", "Bennett", "Cooper", "Davis", "Evans", "Foster", "Gray", "Hayes", "Irving",
    "Jones", "Kelly", "Lopez",
];

const SKIN_TONES: &[&str] = &[
    "#FFDBAC", "#F4A460", "#D2B48C", "#CD853F", "#A0522D", "#8B4513", "#654321",
];
const HAIR_COLORS: &[&str] = &[
    "#000000", "#654321", "#8B4513", "#D2691E", "#FF4500", "#FFD700", "#90EE90", "#0000FF",
    "#8A2BE2",
];
const EYE_COLORS: &[&str] = &["#8B4513", "#000000", "#0000FF", "#008000", "#808080", "#FFA500"];
const CLOTHING_COLORS: &[&str] = &[
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#FFA500", "#800080",
];

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Style preset for themed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Fantasy,
    Modern,
    Futuristic,
}

impl Theme {
    fn hair_colors(self) -> &'static [&'static str] {
        match self {
            Theme::Fantasy => &["#FFD700", "#8A2BE2", "#FF4500", "#90EE90"],
            Theme::Modern => &["#000000", "#654321", "#8B4513", "#D2691E"],
            Theme::Futuristic => &["#00FFFF", "#FF00FF", "#FFFF00", "#0000FF"],
        }
    }

    fn clothing_colors(self) -> &'static [&'static str] {
        match self {
            Theme::Fantasy => &["#800080", "#8B4513", "#006400", "#8B0000"],
            Theme::Modern => &["#000000", "#FFFFFF", "#808080", "#000080"],
            Theme::Futuristic => &["#00FFFF", "#FF00FF", "#C0C0C0", "#000000"],
        }
    }

    fn leading_traits(self) -> &'static [PersonalityTrait] {
        use PersonalityTrait::*;
        match self {
            Theme::Fantasy => &[Mysterious, Adventurous, Serious],
            Theme::Modern => &[Friendly, Confident, Creative],
            Theme::Futuristic => &[Intelligent, Curious, Serious],
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fantasy" => Ok(Theme::Fantasy),
            "modern" => Ok(Theme::Modern),
            "futuristic" => Ok(Theme::Futuristic),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

fn pick_color<R: Rng + ?Sized>(rng: &mut R, palette: &[&str]) -> String {
    pick(rng, palette).to_string()
}

fn names_for(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => MALE_NAMES,
        Gender::Female => FEMALE_NAMES,
        Gender::Other => OTHER_NAMES,
    }
}

/// Ids look like `avatar_1700000000000_k3j9x0abc`
fn new_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("avatar_{millis}_{suffix}")
}

fn now_rfc3339() -> String {
    humantime::format_rfc3339_millis(SystemTime::now()).to_string()
}

/// Voice parameter in [0.5, 2.0], rounded to one decimal
fn voice_param<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    ((rng.gen::<f32>() * 1.5 + 0.5) * 10.0).round() / 10.0
}

/// Generate a fully random avatar
pub fn generate_random<R: Rng + ?Sized>(rng: &mut R) -> Avatar {
    let gender = pick(rng, &Gender::ALL);
    let name = format!("{} {}", pick(rng, names_for(gender)), pick(rng, LAST_NAMES));

    let mut traits = PersonalityTrait::ALL;
    traits.shuffle(rng);

    let voice_type = match gender {
        Gender::Male => VoiceType::Male,
        Gender::Female => VoiceType::Female,
        Gender::Other => pick(rng, &[VoiceType::Male, VoiceType::Female, VoiceType::Neutral]),
    };

    let now = now_rfc3339();

    Avatar {
        id: new_id(rng),
        name,
        appearance: AvatarAppearance {
            gender,
            body_type: pick(rng, &BodyType::ALL),
            height: None,
            muscle_definition: None,
            skin_tone: pick_color(rng, SKIN_TONES),
            hair_color: pick_color(rng, HAIR_COLORS),
            eye_color: pick_color(rng, EYE_COLORS),
            clothing: Clothing {
                color: pick_color(rng, CLOTHING_COLORS),
                bottom_color: Some(pick_color(rng, CLOTHING_COLORS)),
                style: Some(ClothingStyle::Casual),
            },
        },
        personality: AvatarPersonality {
            trait1: traits[0],
            trait2: traits[1],
            chattiness: rng.gen_range(20..=100),
            interests: Vec::new(),
        },
        voice: AvatarVoice {
            voice_type,
            pitch: voice_param(rng),
            speed: voice_param(rng),
            enabled: true,
        },
        created_at: now.clone(),
        last_modified: Some(now),
    }
}

/// Derive a new avatar from `base`, re-rolling a random subset of attributes
pub fn generate_variation<R: Rng + ?Sized>(base: &Avatar, rng: &mut R) -> Avatar {
    let mut variation = base.clone();
    let now = now_rfc3339();
    variation.id = new_id(rng);
    variation.created_at = now.clone();
    variation.last_modified = Some(now);

    let appearance = &mut variation.appearance;
    if rng.gen_bool(0.5) {
        appearance.hair_color = pick_color(rng, HAIR_COLORS);
    }
    if rng.gen_bool(0.5) {
        appearance.eye_color = pick_color(rng, EYE_COLORS);
    }
    if rng.gen_bool(0.5) {
        appearance.clothing.color = pick_color(rng, CLOTHING_COLORS);
    }
    if rng.gen_bool(0.5) {
        appearance.clothing.bottom_color = Some(pick_color(rng, CLOTHING_COLORS));
    }

    let personality = &mut variation.personality;
    if rng.gen_bool(0.7) {
        let available: Vec<PersonalityTrait> = PersonalityTrait::ALL
            .into_iter()
            .filter(|t| *t != personality.trait1)
            .collect();
        personality.trait2 = pick(rng, &available);
    }
    if rng.gen_bool(0.3) {
        personality.chattiness = rng.gen_range(20..=100);
    }

    variation
}

/// Generate a random avatar with a themed palette and leading trait
pub fn generate_themed<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> Avatar {
    let mut avatar = generate_random(rng);
    avatar.appearance.hair_color = pick_color(rng, theme.hair_colors());
    avatar.appearance.clothing.color = pick_color(rng, theme.clothing_colors());
    avatar.personality.trait1 = pick(rng, theme.leading_traits());
    // A themed trait1 may now collide with trait2
    if avatar.personality.trait2 == avatar.personality.trait1 {
        let available: Vec<PersonalityTrait> = PersonalityTrait::ALL
            .into_iter()
            .filter(|t| *t != avatar.personality.trait1)
            .collect();
        avatar.personality.trait2 = pick(rng, &available);
    }
    avatar
}
