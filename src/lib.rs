//! Digital Accents - language catalog and speech request model for multi-dialect TTS

pub mod catalog;

pub mod config;

pub mod error;

pub mod language;

pub mod request;

pub mod selection;

pub mod synth;

pub use catalog::{CatalogConfig, CatalogEntry, VoiceCatalog, STANDARD_CATALOG};
pub use config::Config;
pub use error::{Parameter, VoiceError, VoiceResult};
pub use language::Language;
pub use request::{
    RequestBuilder, SpeechRequest, DEFAULT_PITCH, DEFAULT_RATE, FALLBACK_PHRASE, PITCH_RANGE,
    RATE_RANGE,
};
pub use selection::SelectionState;
pub use synth::{
    RecordingSynthesizer, SpeechSynthesizer, SystemBackend, SystemCommand, SystemSynthesizer,
};
