use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VoiceError;

/// Spoken language variants, identified by their `language-REGION` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "ar-AE")]
    ArAe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "fr-CA")]
    FrCa,
    #[serde(rename = "pl-PL")]
    PlPl,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "ko-KR")]
    KoKr,
    #[serde(rename = "he-IL")]
    HeIl,
    #[serde(rename = "it-IT")]
    ItIt,
    #[serde(rename = "es-MX")]
    EsMx,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "sv-SE")]
    SvSe,
    #[serde(rename = "hi-IN")]
    HiIn,
    #[serde(rename = "tr-TR")]
    TrTr,
    #[serde(rename = "ja-JP")]
    JaJp,
    #[serde(rename = "el-GR")]
    ElGr,
    #[serde(rename = "ru-RU")]
    RuRu,
}

impl Language {
    /// Every language the crate knows, in canonical catalog order.
    pub const ALL: [Language; 18] = [
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

    /// Raw tag handed to the speech engine, e.g. `"en-GB"`.
    pub fn tag(self) -> &'static str {
        match self {
            Language::EnGb => "en-GB",
            Language::EnUs => "en-US",
            Language::ArAe => "ar-AE",
            Language::FrFr => "fr-FR",
            Language::FrCa => "fr-CA",
            Language::PlPl => "pl-PL",
            Language::DeDe => "de-DE",
            Language::KoKr => "ko-KR",
            Language::HeIl => "he-IL",
            Language::ItIt => "it-IT",
            Language::EsMx => "es-MX",
            Language::EsEs => "es-ES",
            Language::SvSe => "sv-SE",
            Language::HiIn => "hi-IN",
            Language::TrTr => "tr-TR",
            Language::JaJp => "ja-JP",
            Language::ElGr => "el-GR",
            Language::RuRu => "ru-RU",
        }
    }

    /// Human-readable name shown in the selection grid.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::ArAe => "Arabic",
            Language::DeDe => "German",
            Language::ElGr => "Greek",
            Language::EnGb => "English (Great Britain)",
            Language::EnUs => "English (United States)",
            Language::EsEs => "Spanish (Spain)",
            Language::EsMx => "Spanish (Mexico)",
            Language::KoKr => "Korean",
            Language::FrCa => "French (Canada)",
            Language::FrFr => "French (France)",
            Language::HeIl => "Hebrew",
            Language::HiIn => "Hindi",
            Language::ItIt => "Italian",
            Language::JaJp => "Japanese",
            Language::PlPl => "Polish",
            Language::RuRu => "Russian (Russia)",
            Language::SvSe => "Swedish",
            Language::TrTr => "Turkish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses an exact tag. Matching is case-sensitive: `"en-gb"` is not `en-GB`.
impl FromStr for Language {
    type Err = VoiceError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.tag() == tag)
            .ok_or_else(|| VoiceError::UnknownTag {
                tag: tag.to_string(),
            })
    }
}
