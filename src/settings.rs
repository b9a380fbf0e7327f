//! Simulation settings and initial scene
//!
//! Loaded from a JSON file by hosts; every section falls back to defaults so a
//! file only needs the values it overrides.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::RenderStyle;
use crate::sim::vector::from_angle;
use crate::sim::{Emitter, Field, SimConfig, Simulation, Vector};

/// Failure to read or parse a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings I/O error: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Emitters and fields present when the simulation starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub emitters: Vec<Emitter>,
    pub fields: Vec<Field>,
}

impl Default for Scene {
    /// One emitter firing right, towards a single repelling field
    fn default() -> Self {
        Self {
            emitters: vec![Emitter::new(Vector::new(100.0, 230.0), from_angle(0.0, 2.0))],
            fields: vec![Field::new(Vector::new(400.0, 230.0), -140.0)],
        }
    }
}

/// Complete host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for emitter spray
    pub seed: u64,
    pub sim: SimConfig,
    pub style: RenderStyle,
    pub scene: Scene,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            sim: SimConfig::default(),
            style: RenderStyle::default(),
            scene: Scene::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Read settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.as_ref().display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Build a simulation populated with this scene
    pub fn build(&self) -> Simulation {
        let mut sim = Simulation::new(self.sim.clone(), self.seed);
        for emitter in &self.scene.emitters {
            sim.add_emitter(emitter.clone());
        }
        for field in &self.scene.fields {
            sim.add_field(field.clone());
        }
        log::info!(
            "Scene: {} emitters, {} fields",
            self.scene.emitters.len(),
            self.scene.fields.len()
        );
        sim
    }
}
