//! Voice catalog: the ordered set of languages offered for selection.
//!
//! The catalog is plain data. Changing which languages a release offers means
//! editing [`CANONICAL_LANGUAGES`] or supplying a [`CatalogConfig`]; request
//! building only ever asks the catalog whether a language is a member.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{VoiceError, VoiceResult};
use crate::language::Language;

/// Languages per row in the selection grid.
pub const DEFAULT_ROW_WIDTH: usize = 3;

/// Canonical catalog order, six rows of three.
pub const CANONICAL_LANGUAGES: [Language; 18] = [
    Language::EnGb,
    Language::EnUs,
    Language::ArAe,
    Language::FrFr,
    Language::FrCa,
    Language::PlPl,
    Language::DeDe,
    Language::KoKr,
    Language::HeIl,
    Language::ItIt,
    Language::EsMx,
    Language::EsEs,
    Language::SvSe,
    Language::HiIn,
    Language::TrTr,
    Language::JaJp,
    Language::ElGr,
    Language::RuRu,
];

lazy_static::lazy_static! {
    /// Process-wide catalog, built once on first use and never mutated.
    pub static ref STANDARD_CATALOG: Arc<VoiceCatalog> = Arc::new(VoiceCatalog::standard());
}

/// One selectable language and the name it is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub language: Language,
    pub display_name: &'static str,
}

impl CatalogEntry {
    /// Entry listed under the language's standard display name.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            display_name: language.display_name(),
        }
    }

    /// Raw tag of this entry, e.g. `"ar-AE"`.
    pub fn tag(&self) -> &'static str {
        self.language.tag()
    }
}

/// Serializable catalog definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    #[serde(default = "default_row_width")]
    pub row_width: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            row_width: default_row_width(),
        }
    }
}

fn default_languages() -> Vec<Language> {
    CANONICAL_LANGUAGES.to_vec()
}

fn default_row_width() -> usize {
    DEFAULT_ROW_WIDTH
}

/// Ordered, immutable set of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCatalog {
    entries: Vec<CatalogEntry>,
    row_width: usize,
}

impl VoiceCatalog {
    /// Builds a catalog from an ordered language list.
    ///
    /// The list must be non-empty and free of duplicates, and rows must hold at
    /// least one entry.
    pub fn new(languages: &[Language], row_width: usize) -> VoiceResult<Self> {
        if languages.is_empty() {
            return Err(VoiceError::InvalidConfig {
                message: "catalog must contain at least one language".to_string(),
            });
        }
        if row_width == 0 {
            return Err(VoiceError::InvalidConfig {
                message: "catalog row width must be at least 1".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(languages.len());
        if let Some(duplicate) = languages.iter().find(|language| !seen.insert(**language)) {
            return Err(VoiceError::InvalidConfig {
                message: format!("language {duplicate} appears more than once in the catalog"),
            });
        }

        Ok(Self {
            entries: languages.iter().copied().map(CatalogEntry::new).collect(),
            row_width,
        })
    }

    /// The canonical 18-language catalog in rows of three.
    pub fn standard() -> Self {
        Self {
            entries: CANONICAL_LANGUAGES
                .iter()
                .copied()
                .map(CatalogEntry::new)
                .collect(),
            row_width: DEFAULT_ROW_WIDTH,
        }
    }

    /// Builds a catalog from its serialized definition.
    pub fn from_config(config: &CatalogConfig) -> VoiceResult<Self> {
        Self::new(&config.languages, config.row_width)
    }

    /// Returns a new catalog with `language` appended as the last entry.
    pub fn with_entry(&self, language: Language) -> VoiceResult<Self> {
        let mut languages: Vec<Language> = self.languages().collect();
        languages.push(language);
        Self::new(&languages, self.row_width)
    }

    /// Entries in catalog order. Every call yields the same sequence.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Languages in catalog order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.iter().map(|entry| entry.language)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries per grid row.
    pub fn row_width(&self) -> usize {
        self.row_width
    }

    /// Grid rows for presentation. The last row may be shorter.
    pub fn rows(&self) -> impl Iterator<Item = &[CatalogEntry]> + '_ {
        self.entries.chunks(self.row_width)
    }

    /// Whether `language` is offered by this catalog.
    pub fn contains(&self, language: Language) -> bool {
        self.entries.iter().any(|entry| entry.language == language)
    }

    /// Entry for `language`, if offered.
    pub fn get(&self, language: Language) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.language == language)
    }

    /// Looks up a raw tag such as `"fr-CA"`.
    pub fn lookup(&self, tag: &str) -> VoiceResult<&CatalogEntry> {
        tag.parse::<Language>()
            .ok()
            .and_then(|language| self.get(language))
            .ok_or_else(|| VoiceError::UnknownTag {
                tag: tag.to_string(),
            })
    }

    /// Display name for a raw tag, or `UnknownTag` if the catalog does not offer it.
    pub fn display_name(&self, tag: &str) -> VoiceResult<&'static str> {
        self.lookup(tag).map(|entry| entry.display_name)
    }

    /// Tag of the first entry; the initial selection.
    pub fn default_tag(&self) -> Language {
        // Construction rejects empty catalogs.
        self.entries[0].language
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
