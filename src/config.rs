use anyhow::{bail, Context};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::voices::VoiceMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_personalities_dir")]
    pub personalities_dir: PathBuf,
    #[serde(default)]
    pub input_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub voices_path: Option<PathBuf>,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = Self::project_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        if let Ok(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn init_default() -> anyhow::Result<PathBuf> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config = Self::default();
        fs::write(&path, serde_json::to_string_pretty(&config)?)?;
        Ok(path)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = BaseDirs::new().context("unable to resolve home directory")?;
        Ok(base.config_dir().join("chessvoice").join("config.json"))
    }

    pub fn input_dir(&self) -> PathBuf {
        match &self.input_dir {
            Some(dir) => dir.clone(),
            None => self.personalities_dir.join("white"),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self.personalities_dir.join("audio"),
        }
    }

    pub fn voice_map(&self) -> anyhow::Result<VoiceMap> {
        match &self.voices_path {
            Some(path) => VoiceMap::load_from_path(path),
            None => Ok(VoiceMap::builtin()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.batch_size == 0 {
            bail!("batch_size must be greater than 0");
        }

        if self.speech.endpoint.is_empty() {
            bail!("speech.endpoint must not be empty");
        }

        if self.speech.timeout_seconds == 0 {
            bail!("speech.timeout_seconds must be greater than 0");
        }

        if let Some(path) = &self.voices_path {
            if !path.exists() {
                bail!("voices file not found: {}", path.display());
            }
            self.voice_map()?;
        }

        Ok(())
    }

    fn project_path() -> Option<PathBuf> {
        Some(PathBuf::from("chessvoice.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            personalities_dir: default_personalities_dir(),
            input_dir: None,
            output_dir: None,
            batch_size: default_batch_size(),
            voices_path: None,
            speech: SpeechConfig::default(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_personalities_dir() -> PathBuf {
    PathBuf::from("public")
        .join("personalities")
        .join("standard")
}

fn default_batch_size() -> usize {
    5
}

fn default_endpoint() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}
