use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::{CatalogConfig, VoiceCatalog};
use crate::error::{Parameter, VoiceError, VoiceResult};
use crate::request::{
    check_range, RequestBuilder, DEFAULT_PITCH, DEFAULT_RATE, FALLBACK_PHRASE, PITCH_RANGE,
    RATE_RANGE,
};
use crate::selection::SelectionState;

/// Session settings: catalog, fallback phrase and initial slider values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default = "default_fallback_phrase")]
    pub fallback_phrase: String,
    #[serde(default = "default_rate")]
    pub default_rate: f32,
    #[serde(default = "default_pitch")]
    pub default_pitch: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            fallback_phrase: default_fallback_phrase(),
            default_rate: default_rate(),
            default_pitch: default_pitch(),
        }
    }
}

fn default_fallback_phrase() -> String {
    FALLBACK_PHRASE.to_string()
}

fn default_rate() -> f32 {
    DEFAULT_RATE
}

fn default_pitch() -> f32 {
    DEFAULT_PITCH
}

impl Config {
    /// Parses and validates a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> VoiceResult<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| VoiceError::InvalidConfig {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field without building anything.
    pub fn validate(&self) -> VoiceResult<()> {
        VoiceCatalog::from_config(&self.catalog)?;
        if self.fallback_phrase.trim().is_empty() {
            return Err(VoiceError::InvalidConfig {
                message: "fallback phrase must not be blank".to_string(),
            });
        }
        check_range(Parameter::Rate, self.default_rate, &RATE_RANGE)?;
        check_range(Parameter::Pitch, self.default_pitch, &PITCH_RANGE)?;
        Ok(())
    }

    /// Shared catalog described by this config.
    pub fn build_catalog(&self) -> VoiceResult<Arc<VoiceCatalog>> {
        VoiceCatalog::from_config(&self.catalog).map(Arc::new)
    }

    /// Builds the request builder and initial selection around one shared catalog.
    pub fn session(&self) -> VoiceResult<(RequestBuilder, SelectionState)> {
        self.validate()?;
        let catalog = self.build_catalog()?;

        let builder =
            RequestBuilder::new(Arc::clone(&catalog)).with_fallback_phrase(&self.fallback_phrase)?;

        let mut selection = SelectionState::new(catalog);
        selection.set_rate(self.default_rate)?;
        selection.set_pitch(self.default_pitch)?;

        Ok((builder, selection))
    }
}
