use std::fmt;
use thiserror::Error;

/// Numeric speech parameters that the request builder validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Rate,
    Pitch,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Rate => f.write_str("rate"),
            Parameter::Pitch => f.write_str("pitch"),
        }
    }
}

/// Errors raised by catalog lookups, selection changes and request building
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoiceError {
    /// Display name lookup or selection for a tag the catalog does not offer.
    #[error("Unknown language tag: {tag}")]
    UnknownTag { tag: String },

    /// Speech request for a language outside the catalog.
    #[error("Language '{tag}' is not in the voice catalog")]
    UnknownLanguage { tag: String },

    /// Rate or pitch outside its accepted range, NaN included.
    #[error("{parameter} {value} is out of range ({min}..={max})")]
    OutOfRange {
        parameter: Parameter,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Catalog, fallback phrase or default values rejected at construction.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type for catalog and request operations
pub type VoiceResult<T> = Result<T, VoiceError>;
