use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Placeholder tokens substituted into response text before synthesis.
const PLACEHOLDERS: &[(&str, &str)] = &[("capturedPiece", "piece")];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityFile {
    #[serde(default)]
    pub personalities: Vec<Personality>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personality {
    #[serde(default = "default_field")]
    pub name: String,
    #[serde(default = "default_field")]
    pub theme: String,
    #[serde(default)]
    pub responses: Vec<Response>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl PersonalityFile {
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read personality file {}", path.display()))?;
        let file: PersonalityFile = serde_json::from_str(&raw)
            .with_context(|| format!("parse personality file {}", path.display()))?;
        Ok(file)
    }
}

/// Replaces known placeholder tokens with spoken words. Unknown tokens are
/// left as-is.
pub fn render_text(template: &str) -> String {
    let mut text = template.to_string();
    for (token, word) in PLACEHOLDERS {
        text = text.replace(&format!("{{{token}}}"), word);
    }
    text
}

fn default_field() -> String {
    "default".to_string()
}
