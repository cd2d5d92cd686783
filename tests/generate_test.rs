use async_trait::async_trait;
use chessvoice::generate;
use chessvoice::tts::{SpeechService, TtsError};
use chessvoice::voices::VoiceMap;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

struct FakeSpeech {
    calls: AtomicUsize,
    fail_marker: Option<String>,
}

impl FakeSpeech {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_marker: None,
        }
    }

    fn failing_on(marker: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_marker: Some(marker.to_string()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechService for FakeSpeech {
    fn name(&self) -> &str {
        "fake"
    }

    async fn synthesize(&self, text: &str, _voice: &str) -> Result<Vec<u8>, TtsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(marker) = &self.fail_marker {
            if text.contains(marker.as_str()) {
                return Err(TtsError::Service("HTTP 500: boom".to_string()));
            }
        }
        Ok(b"ID3fake-audio".to_vec())
    }
}

const PACK: &str = r#"{
    "personalities": [
        {
            "name": "Italian Master",
            "theme": "italian",
            "responses": [
                {"id": "queen_capture", "text": "My queen takes your {capturedPiece}."},
                {"id": "incomplete"},
                {"id": "king_check", "text": "Your king is in danger."}
            ]
        }
    ]
}"#;

#[test]
fn plan_expands_responses_with_rendered_text_and_voice() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("italian.json"), PACK).unwrap();

    let tasks = generate::plan(dir.path(), &VoiceMap::builtin()).unwrap();
    assert_eq!(tasks.len(), 2);

    assert_eq!(tasks[0].response_id, "queen_capture");
    assert_eq!(tasks[0].text, "My queen takes your piece.");
    assert_eq!(tasks[0].voice, "it-IT-ElsaNeural");

    assert_eq!(tasks[1].response_id, "king_check");
    assert_eq!(tasks[1].voice, "it-IT-DiegoNeural");
}

#[test]
fn plan_fails_on_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("white");
    let err = generate::plan(&missing, &VoiceMap::builtin()).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn execute_writes_one_file_per_response() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("italian.json"), PACK).unwrap();

    let tasks = generate::plan(input.path(), &VoiceMap::builtin()).unwrap();
    let service = FakeSpeech::new();
    let summary = generate::execute(&tasks, &service, output.path(), 5)
        .await
        .unwrap();

    assert_eq!(summary.generated, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);
    assert_eq!(service.calls(), 2);
    assert!(output.path().join("queen_capture.mp3").exists());
    assert!(output.path().join("king_check.mp3").exists());
}

#[tokio::test]
async fn rerun_skips_existing_files() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("italian.json"), PACK).unwrap();

    let tasks = generate::plan(input.path(), &VoiceMap::builtin()).unwrap();
    let first = FakeSpeech::new();
    generate::execute(&tasks, &first, output.path(), 5)
        .await
        .unwrap();

    let second = FakeSpeech::new();
    let summary = generate::execute(&tasks, &second, output.path(), 5)
        .await
        .unwrap();

    assert_eq!(summary.generated, 0);
    assert_eq!(summary.skipped, 2);
    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn per_item_failure_does_not_abort_the_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("italian.json"), PACK).unwrap();

    let tasks = generate::plan(input.path(), &VoiceMap::builtin()).unwrap();
    let service = FakeSpeech::failing_on("queen");
    let summary = generate::execute(&tasks, &service, output.path(), 1)
        .await
        .unwrap();

    assert_eq!(summary.generated, 1);
    assert_eq!(summary.failed, 1);
    assert!(!output.path().join("queen_capture.mp3").exists());
    assert!(output.path().join("king_check.mp3").exists());
}

#[tokio::test]
async fn execute_rejects_zero_batch_size() {
    let output = tempfile::tempdir().unwrap();
    let service = FakeSpeech::new();
    let err = generate::execute(&[], &service, output.path(), 0)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("batch_size"));
}
