use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Last-resort voice when neither the themed nor the default table has an entry.
pub const FALLBACK_VOICE: &str = "en-US-AriaNeural";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::King,
        Role::Queen,
        Role::Rook,
        Role::Bishop,
        Role::Knight,
        Role::Pawn,
    ];

    /// Infers the speaker role from a response id. Checks run in priority
    /// order so an id like "king_takes_queen" stays a king line.
    pub fn from_response_id(id: &str) -> Self {
        if id.contains("king") {
            Role::King
        } else if id.contains("queen") {
            Role::Queen
        } else if id.contains("rook") {
            Role::Rook
        } else if id.contains("bishop") {
            Role::Bishop
        } else if id.contains("knight") {
            Role::Knight
        } else {
            Role::Pawn
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::King => "king",
            Role::Queen => "queen",
            Role::Rook => "rook",
            Role::Bishop => "bishop",
            Role::Knight => "knight",
            Role::Pawn => "pawn",
        }
    }
}

/// Classifies a personality into a theme key by substring checks against its
/// lowercased name and theme. The cleric/royal rule is asymmetric: "cleric"
/// matches the name, "royal" matches the theme.
pub fn theme_key(name: &str, theme: &str) -> &'static str {
    let name = name.to_lowercase();
    let theme = theme.to_lowercase();

    if name.contains("italian") || theme.contains("italian") {
        "italian"
    } else if name.contains("french") || theme.contains("french") {
        "french"
    } else if name.contains("sicilian") || theme.contains("sicilian") {
        "sicilian"
    } else if name.contains("cleric") || theme.contains("royal") {
        "royal"
    } else if name.contains("russian") || theme.contains("russian") {
        "russian"
    } else {
        "default"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeVoices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(flatten)]
    pub roles: HashMap<Role, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceMap {
    themes: HashMap<String, ThemeVoices>,
}

impl VoiceMap {
    /// The built-in table of Edge neural voices, keyed by theme.
    pub fn builtin() -> Self {
        let mut themes = HashMap::new();

        let mut default = ThemeVoices::default();
        default.roles.insert(Role::King, "en-GB-RyanNeural".to_string());
        default.roles.insert(Role::Queen, "en-GB-SoniaNeural".to_string());
        default
            .roles
            .insert(Role::Rook, "en-US-ChristopherNeural".to_string());
        default
            .roles
            .insert(Role::Bishop, "en-GB-ThomasNeural".to_string());
        default.roles.insert(Role::Knight, "en-US-GuyNeural".to_string());
        default.roles.insert(Role::Pawn, "en-US-AnaNeural".to_string());
        themes.insert("default".to_string(), default);

        let mut italian = ThemeVoices {
            default: Some("it-IT-DiegoNeural".to_string()),
            ..Default::default()
        };
        italian
            .roles
            .insert(Role::Queen, "it-IT-ElsaNeural".to_string());
        themes.insert("italian".to_string(), italian);

        let mut french = ThemeVoices {
            default: Some("fr-FR-HenriNeural".to_string()),
            ..Default::default()
        };
        french
            .roles
            .insert(Role::Queen, "fr-FR-DeniseNeural".to_string());
        themes.insert("french".to_string(), french);

        let mut sicilian = ThemeVoices {
            default: Some("it-IT-IsabellaNeural".to_string()),
            ..Default::default()
        };
        sicilian
            .roles
            .insert(Role::Bishop, "it-IT-DiegoNeural".to_string());
        themes.insert("sicilian".to_string(), sicilian);

        let mut royal = ThemeVoices {
            default: Some("en-GB-RyanNeural".to_string()),
            ..Default::default()
        };
        royal
            .roles
            .insert(Role::Bishop, "en-IE-ConnorNeural".to_string());
        themes.insert("royal".to_string(), royal);

        let mut russian = ThemeVoices {
            default: Some("ru-RU-DmitryNeural".to_string()),
            ..Default::default()
        };
        russian
            .roles
            .insert(Role::Queen, "ru-RU-SvetlanaNeural".to_string());
        themes.insert("russian".to_string(), russian);

        Self { themes }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read voice map at {}", path.display()))?;
        let map: VoiceMap = serde_json::from_str(&raw)
            .with_context(|| format!("parse voice map at {}", path.display()))?;
        if !map.themes.contains_key("default") {
            bail!("voice map at {} must define a default theme", path.display());
        }
        Ok(map)
    }

    pub fn themes(&self) -> &HashMap<String, ThemeVoices> {
        &self.themes
    }

    /// Picks a voice for a response. Tries the themed table's role entry,
    /// then the themed default, then the default theme's role entry, then
    /// the fallback literal. Always succeeds.
    pub fn resolve(&self, name: &str, theme: &str, response_id: &str) -> String {
        let role = Role::from_response_id(response_id);
        let key = theme_key(name, theme);

        let themed = self
            .themes
            .get(key)
            .or_else(|| self.themes.get("default"));
        if let Some(themed) = themed {
            if let Some(voice) = themed.roles.get(&role) {
                return voice.clone();
            }
            if let Some(voice) = &themed.default {
                return voice.clone();
            }
        }

        if let Some(default) = self.themes.get("default") {
            if let Some(voice) = default.roles.get(&role) {
                return voice.clone();
            }
        }

        FALLBACK_VOICE.to_string()
    }
}
