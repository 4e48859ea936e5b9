use anyhow::Result;
use digital_accents::{
    Language, RequestBuilder, VoiceCatalog, VoiceError, FALLBACK_PHRASE, STANDARD_CATALOG,
};
use std::sync::Arc;

#[test]
fn test_every_entry_has_a_display_name() -> Result<()> {
    for entry in STANDARD_CATALOG.entries() {
        let name = STANDARD_CATALOG.display_name(entry.tag())?;
        assert!(!name.is_empty(), "{} has an empty display name", entry.tag());
        assert_eq!(name, entry.display_name);
    }
    Ok(())
}

#[test]
fn test_every_catalog_tag_builds() -> Result<()> {
    let builder = RequestBuilder::default();
    for entry in STANDARD_CATALOG.entries() {
        let request = builder.build_for_tag("Hello", entry.tag(), 0.5, 1.0)?;
        assert_eq!(request.language(), entry.language);
        assert_eq!(request.language_tag(), entry.tag());
    }
    Ok(())
}

#[test]
fn test_tags_outside_catalog_are_unknown_languages() {
    let builder = RequestBuilder::default();
    for tag in ["", "en", "en-gb", "EN-GB", "pt-BR", "zh-CN", "en_GB"] {
        assert!(
            matches!(
                builder.build_for_tag("Hello", tag, 0.5, 1.0),
                Err(VoiceError::UnknownLanguage { .. })
            ),
            "{tag:?} should be rejected"
        );
    }
}

#[test]
fn test_known_languages_missing_from_a_smaller_catalog() {
    let offered = [Language::EnGb, Language::FrFr, Language::DeDe];
    let catalog = Arc::new(VoiceCatalog::new(&offered, 3).expect("valid catalog"));
    let builder = RequestBuilder::new(catalog);

    for language in Language::ALL {
        let result = builder.build("Hello", language, 0.5, 1.0);
        if offered.contains(&language) {
            assert!(result.is_ok(), "{language} should build");
        } else {
            assert!(
                matches!(result, Err(VoiceError::UnknownLanguage { .. })),
                "{language} should be rejected"
            );
        }
    }
}

#[test]
fn test_fallback_phrase() -> Result<()> {
    let builder = RequestBuilder::default();
    let tag = STANDARD_CATALOG.default_tag();

    assert_eq!(builder.build("", tag, 0.5, 1.0)?.text(), "Digital Dialectics.");
    assert_eq!(builder.build("   ", tag, 0.5, 1.0)?.text(), FALLBACK_PHRASE);
    assert_eq!(builder.build("Hello", tag, 0.5, 1.0)?.text(), "Hello");
    Ok(())
}

#[test]
fn test_out_of_range_parameters() {
    let builder = RequestBuilder::default();
    let tag = STANDARD_CATALOG.default_tag();

    assert!(matches!(
        builder.build("Hello", tag, -0.1, 1.0),
        Err(VoiceError::OutOfRange { .. })
    ));
    assert!(matches!(
        builder.build("Hello", tag, 0.5, 3.0),
        Err(VoiceError::OutOfRange { .. })
    ));
}

#[test]
fn test_default_tag_is_first_entry() {
    let first = STANDARD_CATALOG.entries().first().map(|entry| entry.language);
    assert_eq!(first, Some(STANDARD_CATALOG.default_tag()));
    assert_eq!(STANDARD_CATALOG.default_tag(), Language::EnGb);
}

#[test]
fn test_listing_is_stable() {
    let first: Vec<_> = STANDARD_CATALOG.entries().to_vec();
    let second: Vec<_> = STANDARD_CATALOG.entries().to_vec();
    assert_eq!(first, second);
    assert_eq!(
        STANDARD_CATALOG.languages().collect::<Vec<_>>(),
        STANDARD_CATALOG.languages().collect::<Vec<_>>()
    );
}
