use std::sync::Arc;

use crate::catalog::{VoiceCatalog, STANDARD_CATALOG};
use crate::error::{Parameter, VoiceError, VoiceResult};
use crate::language::Language;
use crate::request::{
    check_range, RequestBuilder, SpeechRequest, DEFAULT_PITCH, DEFAULT_RATE, PITCH_RANGE,
    RATE_RANGE,
};
use crate::synth::SpeechSynthesizer;

/// Form state behind the speak screen.
///
/// Every mutator validates its input, so `language` is always a catalog member
/// and `rate`/`pitch` always lie inside their ranges.
#[derive(Debug, Clone)]
pub struct SelectionState {
    catalog: Arc<VoiceCatalog>,
    message: String,
    language: Language,
    rate: f32,
    pitch: f32,
}

impl SelectionState {
    /// Empty message, first catalog language, default rate and pitch.
    pub fn new(catalog: Arc<VoiceCatalog>) -> Self {
        let language = catalog.default_tag();
        Self {
            catalog,
            message: String::new(),
            language,
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
        }
    }

    /// Message as typed, possibly empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Currently selected language, always a catalog member.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Current speaking rate.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Current pitch multiplier.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn catalog(&self) -> &Arc<VoiceCatalog> {
        &self.catalog
    }

    /// Replaces the message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Empties the message; the next speak uses the fallback phrase.
    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    /// Selects a catalog language. The current selection is kept on error.
    pub fn select(&mut self, language: Language) -> VoiceResult<()> {
        if !self.catalog.contains(language) {
            return Err(VoiceError::UnknownTag {
                tag: language.tag().to_string(),
            });
        }
        self.language = language;
        Ok(())
    }

    /// Selects a language by raw tag.
    pub fn select_tag(&mut self, tag: &str) -> VoiceResult<()> {
        let language = self.catalog.lookup(tag)?.language;
        self.select(language)
    }

    /// Sets the rate. Out-of-range values leave the current rate in place.
    pub fn set_rate(&mut self, rate: f32) -> VoiceResult<()> {
        check_range(Parameter::Rate, rate, &RATE_RANGE)?;
        self.rate = rate;
        Ok(())
    }

    /// Sets the pitch. Out-of-range values leave the current pitch in place.
    pub fn set_pitch(&mut self, pitch: f32) -> VoiceResult<()> {
        check_range(Parameter::Pitch, pitch, &PITCH_RANGE)?;
        self.pitch = pitch;
        Ok(())
    }

    /// Display name of the selected language.
    pub fn display_name(&self) -> &'static str {
        self.language.display_name()
    }

    /// Rate as a whole-number percentage, e.g. `"50"`.
    pub fn rate_percentage(&self) -> String {
        format!("{:.0}", self.rate * 100.0)
    }

    /// Selection and rate summary shown above the form.
    pub fn status_text(&self) -> String {
        format!(
            "Current selection:\n{}\nRate of Speaking:\n{} %",
            self.display_name(),
            self.rate_percentage()
        )
    }

    /// Accessibility label for the current selection.
    pub fn selection_label(&self) -> String {
        format!("Current language is {}", self.display_name())
    }

    /// Request for the current state, without speaking it.
    pub fn request(&self, builder: &RequestBuilder) -> VoiceResult<SpeechRequest> {
        builder.build(&self.message, self.language, self.rate, self.pitch)
    }

    /// Builds a request from the current state and hands it to `synthesizer`.
    ///
    /// Returns once the utterance is handed off; playback is not awaited.
    pub fn speak<S>(&self, builder: &RequestBuilder, synthesizer: &S) -> anyhow::Result<()>
    where
        S: SpeechSynthesizer + ?Sized,
    {
        let request = self.request(builder)?;
        synthesizer.speak(request)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Arc::clone(&STANDARD_CATALOG))
    }
}
