use chessvoice::personality::{render_text, PersonalityFile};
use std::io::Write;

#[test]
fn renders_captured_piece_placeholder() {
    assert_eq!(
        render_text("I took your {capturedPiece}!"),
        "I took your piece!"
    );
}

#[test]
fn unknown_placeholders_pass_through() {
    assert_eq!(render_text("Well played, {player}."), "Well played, {player}.");
}

#[test]
fn parses_file_with_missing_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "personalities": [
                {
                    "responses": [
                        {"id": "greeting", "text": "Hello."},
                        {"id": "no_text"},
                        {"text": "no id"}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let parsed = PersonalityFile::load_from_path(file.path()).unwrap();
    assert_eq!(parsed.personalities.len(), 1);

    let personality = &parsed.personalities[0];
    assert_eq!(personality.name, "default");
    assert_eq!(personality.theme, "default");
    assert_eq!(personality.responses.len(), 3);
    assert_eq!(personality.responses[1].text, None);
    assert_eq!(personality.responses[2].id, None);
}

#[test]
fn rejects_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{not json").unwrap();
    assert!(PersonalityFile::load_from_path(file.path()).is_err());
}
