use anyhow::Result;
use digital_accents::{
    Config, Language, RecordingSynthesizer, RequestBuilder, SelectionState, SpeechSynthesizer,
    VoiceError,
};

#[test]
fn test_speak_hands_off_current_selection() -> Result<()> {
    let builder = RequestBuilder::default();
    let synth = RecordingSynthesizer::new();
    let mut state = SelectionState::default();

    state.set_message("こんにちは");
    state.select_tag("ja-JP")?;
    state.set_rate(0.4)?;
    state.set_pitch(1.2)?;
    state.speak(&builder, &synth)?;

    let request = synth.last().expect("one request recorded");
    assert_eq!(request.text(), "こんにちは");
    assert_eq!(request.language_tag(), "ja-JP");
    assert_eq!(request.rate(), 0.4);
    assert_eq!(request.pitch(), 1.2);
    Ok(())
}

#[test]
fn test_repeated_speaks_are_independent() -> Result<()> {
    let builder = RequestBuilder::default();
    let synth = RecordingSynthesizer::new();
    let mut state = SelectionState::default();

    state.speak(&builder, &synth)?;
    state.set_message("Hola");
    state.select(Language::EsEs)?;
    state.speak(&builder, &synth)?;
    state.clear_message();
    state.speak(&builder, &synth)?;

    let texts: Vec<String> = synth
        .requests()
        .iter()
        .map(|request| request.text().to_string())
        .collect();
    assert_eq!(texts, vec!["Digital Dialectics.", "Hola", "Digital Dialectics."]);
    assert_eq!(synth.requests()[2].language(), Language::EsEs);
    Ok(())
}

#[test]
fn test_speak_through_trait_object() -> Result<()> {
    let builder = RequestBuilder::default();
    let recording = RecordingSynthesizer::new();
    let synth: &dyn SpeechSynthesizer = &recording;

    SelectionState::default().speak(&builder, synth)?;
    assert_eq!(recording.requests().len(), 1);
    Ok(())
}

#[test]
fn test_builder_from_other_catalog_rejects_selection() -> Result<()> {
    let (builder, _) = Config::from_json(r#"{ "catalog": { "languages": ["sv-SE"] } }"#)?.session()?;
    let synth = RecordingSynthesizer::new();
    let state = SelectionState::default();

    let err = state
        .speak(&builder, &synth)
        .expect_err("en-GB is not offered");
    assert!(matches!(
        err.downcast_ref::<VoiceError>(),
        Some(VoiceError::UnknownLanguage { tag }) if tag == "en-GB"
    ));
    assert!(synth.requests().is_empty());
    Ok(())
}

#[test]
fn test_configured_session() -> Result<()> {
    let config = Config::from_json(
        r#"{
            "catalog": { "languages": ["hi-IN", "he-IL"], "row_width": 1 },
            "fallback_phrase": "Say something.",
            "default_pitch": 0.8
        }"#,
    )?;
    let (builder, state) = config.session()?;
    let synth = RecordingSynthesizer::new();

    assert_eq!(state.catalog().rows().count(), 2);
    assert_eq!(state.status_text(), "Current selection:\nHindi\nRate of Speaking:\n50 %");

    state.speak(&builder, &synth)?;
    let request = synth.last().expect("one request recorded");
    assert_eq!(request.text(), "Say something.");
    assert_eq!(request.language(), Language::HiIn);
    assert_eq!(request.pitch(), 0.8);
    Ok(())
}
