use serde::Serialize;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::{VoiceCatalog, STANDARD_CATALOG};
use crate::error::{Parameter, VoiceError, VoiceResult};
use crate::language::Language;

/// Spoken in place of an empty or blank message.
pub const FALLBACK_PHRASE: &str = "Digital Dialectics.";

/// Normalized speaking rate accepted by the synthesizer.
pub const RATE_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Pitch multiplier accepted by the synthesizer.
pub const PITCH_RANGE: RangeInclusive<f32> = 0.5..=2.0;

pub const DEFAULT_RATE: f32 = 0.5;

pub const DEFAULT_PITCH: f32 = 1.0;

/// A single utterance ready for the speech engine. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    text: String,
    language: Language,
    rate: f32,
    pitch: f32,
}

impl SpeechRequest {
    /// Text to speak, never empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language the utterance is spoken in.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Raw tag for the engine boundary.
    pub fn language_tag(&self) -> &'static str {
        self.language.tag()
    }

    /// Normalized rate within `RATE_RANGE`.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Pitch multiplier within `PITCH_RANGE`.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

/// Turns selection state into validated [`SpeechRequest`]s against a catalog.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    catalog: Arc<VoiceCatalog>,
    fallback_phrase: String,
}

impl RequestBuilder {
    /// Builder validating against `catalog`, with the standard fallback phrase.
    pub fn new(catalog: Arc<VoiceCatalog>) -> Self {
        Self {
            catalog,
            fallback_phrase: FALLBACK_PHRASE.to_string(),
        }
    }

    /// Replaces the fallback phrase. Blank phrases are rejected.
    pub fn with_fallback_phrase(mut self, phrase: impl Into<String>) -> VoiceResult<Self> {
        let phrase = phrase.into();
        if phrase.trim().is_empty() {
            return Err(VoiceError::InvalidConfig {
                message: "fallback phrase must not be blank".to_string(),
            });
        }
        self.fallback_phrase = phrase;
        Ok(self)
    }

    pub fn catalog(&self) -> &Arc<VoiceCatalog> {
        &self.catalog
    }

    pub fn fallback_phrase(&self) -> &str {
        &self.fallback_phrase
    }

    /// Validates the inputs and returns a request.
    ///
    /// Blank messages are replaced by the fallback phrase.
    pub fn build(
        &self,
        message: &str,
        language: Language,
        rate: f32,
        pitch: f32,
    ) -> VoiceResult<SpeechRequest> {
        if !self.catalog.contains(language) {
            return Err(VoiceError::UnknownLanguage {
                tag: language.tag().to_string(),
            });
        }
        check_range(Parameter::Rate, rate, &RATE_RANGE)?;
        check_range(Parameter::Pitch, pitch, &PITCH_RANGE)?;

        let text = if message.trim().is_empty() {
            self.fallback_phrase.clone()
        } else {
            message.to_string()
        };

        debug!(
            language = language.tag(),
            rate,
            pitch,
            fallback = message.trim().is_empty(),
            "built speech request"
        );

        Ok(SpeechRequest {
            text,
            language,
            rate,
            pitch,
        })
    }

    /// Like [`build`](Self::build), for a raw tag string.
    pub fn build_for_tag(
        &self,
        message: &str,
        tag: &str,
        rate: f32,
        pitch: f32,
    ) -> VoiceResult<SpeechRequest> {
        let language = tag
            .parse::<Language>()
            .map_err(|_| VoiceError::UnknownLanguage {
                tag: tag.to_string(),
            })?;
        self.build(message, language, rate, pitch)
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(Arc::clone(&STANDARD_CATALOG))
    }
}

/// Rejects values outside `range`, NaN included.
pub(crate) fn check_range(
    parameter: Parameter,
    value: f32,
    range: &RangeInclusive<f32>,
) -> VoiceResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(VoiceError::OutOfRange {
            parameter,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
