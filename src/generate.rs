use anyhow::{bail, Context};
use futures_util::future::join_all;
use std::path::{Path, PathBuf};

use crate::personality::{self, PersonalityFile};
use crate::tts::SpeechService;
use crate::voices::VoiceMap;

#[derive(Debug, Clone)]
pub struct GenerationTask {
    pub response_id: String,
    pub text: String,
    pub voice: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum Outcome {
    Generated,
    Skipped,
    Failed,
}

/// Expands every personality file in `input_dir` into generation tasks with
/// rendered text and a resolved voice. Fails if the directory is missing.
pub fn plan(input_dir: &Path, voices: &VoiceMap) -> anyhow::Result<Vec<GenerationTask>> {
    if !input_dir.is_dir() {
        bail!("personality directory not found: {}", input_dir.display());
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(input_dir)
        .with_context(|| format!("read personality directory {}", input_dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();

    let mut tasks = Vec::new();
    for path in files {
        let file = PersonalityFile::load_from_path(&path)?;
        for p in file.personalities {
            tracing::info!(name = %p.name, theme = %p.theme, "processing personality");
            for response in p.responses {
                let (id, text) = match (response.id, response.text) {
                    (Some(id), Some(text)) => (id, text),
                    _ => {
                        tracing::debug!(file = %path.display(), "response missing id or text; skipping");
                        continue;
                    }
                };

                tasks.push(GenerationTask {
                    text: personality::render_text(&text),
                    voice: voices.resolve(&p.name, &p.theme, &id),
                    response_id: id,
                });
            }
        }
    }

    Ok(tasks)
}

/// Runs the tasks in fixed-size batches. Tasks within a batch run
/// concurrently; batches run sequentially. Per-item failures are logged and
/// counted, never fatal.
pub async fn execute(
    tasks: &[GenerationTask],
    service: &dyn SpeechService,
    output_dir: &Path,
    batch_size: usize,
) -> anyhow::Result<RunSummary> {
    if batch_size == 0 {
        bail!("batch_size must be greater than 0");
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let mut summary = RunSummary::default();
    for batch in tasks.chunks(batch_size) {
        let outcomes = join_all(
            batch
                .iter()
                .map(|task| generate_one(task, service, output_dir)),
        )
        .await;

        for outcome in outcomes {
            match outcome {
                Outcome::Generated => summary.generated += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Failed => summary.failed += 1,
            }
        }
    }

    tracing::info!(
        generated = summary.generated,
        skipped = summary.skipped,
        failed = summary.failed,
        "generation complete"
    );

    Ok(summary)
}

async fn generate_one(
    task: &GenerationTask,
    service: &dyn SpeechService,
    output_dir: &Path,
) -> Outcome {
    let path = output_dir.join(format!("{}.mp3", task.response_id));
    if path.exists() {
        tracing::info!(id = %task.response_id, "already exists; skipping");
        return Outcome::Skipped;
    }

    tracing::info!(id = %task.response_id, voice = %task.voice, "generating");
    match service.synthesize(&task.text, &task.voice).await {
        Ok(audio) => match tokio::fs::write(&path, &audio).await {
            Ok(()) => Outcome::Generated,
            Err(err) => {
                tracing::warn!(id = %task.response_id, error = %err, "failed to write audio");
                Outcome::Failed
            }
        },
        Err(err) => {
            tracing::warn!(id = %task.response_id, error = %err, "synthesis failed");
            Outcome::Failed
        }
    }
}
