use std::path::Path;

use crate::config::CorpusConfig;
use crate::error::CorpusError;
use crate::types::{BuildSummary, Pairing, TranscriptEntry};

/// Receives progress events from a corpus build. Observers only watch; they
/// have no way to change what the build does.
pub trait BuildObserver: Send {
    fn on_start(&mut self, _config: &CorpusConfig, _transcripts: usize) {}

    fn on_pair_written(&mut self, _pairing: &Pairing) {}

    fn on_missing_audio(&mut self, _entry: &TranscriptEntry, _expected: &Path) {}

    fn on_pair_failed(&mut self, _pairing: &Pairing, _error: &CorpusError) {}

    fn on_finish(&mut self, _summary: &BuildSummary) {}
}

/// Default observer: reports through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl BuildObserver for TracingObserver {
    fn on_start(&mut self, config: &CorpusConfig, transcripts: usize) {
        tracing::info!(
            audio_dir = %config.audio_dir.display(),
            transcript_dir = %config.transcript_dir.display(),
            output_dir = %config.output_dir.display(),
            transcripts,
            "starting corpus build"
        );
    }

    fn on_pair_written(&mut self, pairing: &Pairing) {
        tracing::debug!(stem = %pairing.stem_lossy(), "wrote audio and label");
    }

    fn on_missing_audio(&mut self, entry: &TranscriptEntry, expected: &Path) {
        tracing::warn!(
            stem = %entry.stem_lossy(),
            expected = %expected.display(),
            "missing audio file for transcript"
        );
    }

    fn on_pair_failed(&mut self, pairing: &Pairing, error: &CorpusError) {
        tracing::warn!(
            stem = %pairing.stem_lossy(),
            error = %error,
            "failed to process pair"
        );
    }

    fn on_finish(&mut self, summary: &BuildSummary) {
        tracing::info!(
            processed = summary.processed,
            failed = summary.failure_count(),
            "corpus build complete"
        );
    }
}
