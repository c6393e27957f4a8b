//! Playable character registry loaded from `config/characters.toml`.
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use bevy::{log::warn, prelude::Resource};
use serde::Deserialize;

const ROSTER_CONFIG_PATH: &str = "config/characters.toml";

/// The fixed cast of playable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterId {
    Sebbe,
    Mayo,
    Henke,
    Wugk,
    Venneman,
    Linkan,
    Mans,
}

impl CharacterId {
    pub const ALL: [CharacterId; 7] = [
        CharacterId::Sebbe,
        CharacterId::Mayo,
        CharacterId::Henke,
        CharacterId::Wugk,
        CharacterId::Venneman,
        CharacterId::Linkan,
        CharacterId::Mans,
    ];
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            CharacterId::Sebbe => "sebbe",
            CharacterId::Mayo => "mayo",
            CharacterId::Henke => "henke",
            CharacterId::Wugk => "wugk",
            CharacterId::Venneman => "venneman",
            CharacterId::Linkan => "linkan",
            CharacterId::Mans => "mans",
        };
        write!(f, "{}", id)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawRoster {
    characters: Vec<RawCharacter>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCharacter {
    id: CharacterId,
    name: String,
    description: String,
    #[serde(default = "default_scale")]
    scale: f32,
    #[serde(default)]
    appearance: CharacterAppearance,
}

fn default_scale() -> f32 {
    1.0
}

/// Colour hints consumed by the scene renderer. The core never inspects these.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CharacterAppearance {
    pub shirt: String,
    pub hair: String,
}

impl Default for CharacterAppearance {
    fn default() -> Self {
        Self {
            shirt: "#3a6ea5".to_string(),
            hair: "#5a3825".to_string(),
        }
    }
}

/// Display data for one playable character.
#[derive(Debug, Clone)]
pub struct CharacterProfile {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub scale: f32,
    pub appearance: CharacterAppearance,
}

/// Registry of playable characters, ordered as `CharacterId::ALL`.
#[derive(Resource, Debug, Clone)]
pub struct CharacterRoster {
    profiles: Vec<CharacterProfile>,
}

impl CharacterRoster {
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data =
            fs::read_to_string(&path).map_err(|err| format!("unable to read file: {err}"))?;
        let raw: RawRoster =
            toml::from_str(&data).map_err(|err| format!("invalid roster config: {err}"))?;
        Self::from_config(raw)
    }

    fn from_config(raw: RawRoster) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for character in &raw.characters {
            if !seen.insert(character.id) {
                return Err(format!("duplicate roster entry for '{}'", character.id));
            }
            if character.name.trim().is_empty() {
                return Err(format!("character '{}' has an empty name", character.id));
            }
            if character.scale <= 0.0 {
                return Err(format!(
                    "character '{}' has a non-positive scale {}",
                    character.id, character.scale
                ));
            }
        }

        let mut profiles = Vec::with_capacity(CharacterId::ALL.len());
        for id in CharacterId::ALL {
            let raw_character = raw
                .characters
                .iter()
                .find(|character| character.id == id)
                .ok_or_else(|| format!("roster is missing character '{id}'"))?;
            profiles.push(CharacterProfile {
                id,
                name: raw_character.name.clone(),
                description: raw_character.description.clone(),
                scale: raw_character.scale,
                appearance: raw_character.appearance.clone(),
            });
        }

        Ok(Self { profiles })
    }

    fn fallback() -> Self {
        let entries = [
            (
                CharacterId::Sebbe,
                "Sebbe",
                "The chill regular who's practically family at Rose. The doorman loves him!",
                1.1,
                "#2e86de",
            ),
            (
                CharacterId::Mayo,
                "Mayo",
                "The DJ that always tries to kiss the ladies at a epic drop",
                1.05,
                "#8e44ad",
            ),
            (
                CharacterId::Henke,
                "Henke",
                "Strong party player, but can sometime disappear for a coke and a burger",
                1.1,
                "#c0392b",
            ),
            (
                CharacterId::Wugk,
                "Wugk",
                "Longest guy at the club, perfect wingman when he has not been at a AW with his collegues",
                1.15,
                "#27ae60",
            ),
            (
                CharacterId::Venneman,
                "Venneman",
                "Knows how to talk to people, but does he still have that skill since he hasn't been out since 2021",
                1.08,
                "#d35400",
            ),
            (
                CharacterId::Linkan,
                "Linkan",
                "aka the stockmaster, can maybe sell the doorman some Immunivoastocks to get into the club",
                1.0,
                "#16a085",
            ),
            (
                CharacterId::Mans,
                "MÅNS",
                "Smooth talker who can charm his way in. Always running late, but knows how to talk his way out of it.",
                1.05,
                "#f39c12",
            ),
        ];

        let raw = RawRoster {
            characters: entries
                .into_iter()
                .map(|(id, name, description, scale, shirt)| RawCharacter {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                    scale,
                    appearance: CharacterAppearance {
                        shirt: shirt.to_string(),
                        ..Default::default()
                    },
                })
                .collect(),
        };

        Self::from_config(raw).expect("fallback roster should be valid")
    }

    pub fn profiles(&self) -> &[CharacterProfile] {
        &self.profiles
    }

    pub fn profile(&self, id: CharacterId) -> &CharacterProfile {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .expect("roster covers every character id")
    }

    pub fn display_name(&self, id: CharacterId) -> &str {
        &self.profile(id).name
    }
}

impl Default for CharacterRoster {
    fn default() -> Self {
        match Self::load_from_file(ROSTER_CONFIG_PATH) {
            Ok(roster) => roster,
            Err(error) => {
                warn!(
                    "Failed to load roster from {}: {error}. Falling back to the built-in cast.",
                    ROSTER_CONFIG_PATH
                );
                Self::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_entry(id: CharacterId, name: &str) -> RawCharacter {
        RawCharacter {
            id,
            name: name.to_string(),
            description: String::new(),
            scale: 1.0,
            appearance: CharacterAppearance::default(),
        }
    }

    #[test]
    fn fallback_covers_every_character() {
        let roster = CharacterRoster::fallback();
        assert_eq!(roster.profiles().len(), CharacterId::ALL.len());
        for id in CharacterId::ALL {
            assert!(!roster.profile(id).name.is_empty());
        }
        assert_eq!(roster.display_name(CharacterId::Mans), "MÅNS");
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let raw = RawRoster {
            characters: vec![
                raw_entry(CharacterId::Sebbe, "Sebbe"),
                raw_entry(CharacterId::Sebbe, "Sebbe again"),
            ],
        };
        let error = CharacterRoster::from_config(raw).unwrap_err();
        assert!(error.contains("duplicate"));
    }

    #[test]
    fn missing_characters_are_rejected() {
        let raw = RawRoster {
            characters: vec![raw_entry(CharacterId::Sebbe, "Sebbe")],
        };
        let error = CharacterRoster::from_config(raw).unwrap_err();
        assert!(error.contains("missing"));
    }

    #[test]
    fn bad_scale_is_rejected() {
        let mut entry = raw_entry(CharacterId::Sebbe, "Sebbe");
        entry.scale = 0.0;
        let raw = RawRoster {
            characters: vec![entry],
        };
        let error = CharacterRoster::from_config(raw).unwrap_err();
        assert!(error.contains("scale"));
    }
}
