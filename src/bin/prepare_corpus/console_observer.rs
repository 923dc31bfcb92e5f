use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use mfa_corpus::{
    BuildObserver, BuildSummary, CorpusConfig, CorpusError, Pairing, TranscriptEntry,
};

/// Drives a progress bar on stderr and prints one stdout line per failed pair.
pub struct ConsoleObserver {
    progress: ProgressBar,
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleObserver {
    pub fn new() -> Self {
        let progress = ProgressBar::new(0);
        progress.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
        );
        Self { progress }
    }

    // `suspend` keeps the line from tearing the bar and still prints when
    // the bar is hidden (stderr not a terminal).
    fn diagnostic(&self, line: String) {
        self.progress.suspend(|| println!("{line}"));
    }
}

impl BuildObserver for ConsoleObserver {
    fn on_start(&mut self, _config: &CorpusConfig, transcripts: usize) {
        self.progress.set_length(transcripts as u64);
        self.progress.set_message("starting...");
    }

    fn on_pair_written(&mut self, pairing: &Pairing) {
        self.progress.set_message(pairing.stem_lossy().into_owned());
        self.progress.inc(1);
    }

    fn on_missing_audio(&mut self, entry: &TranscriptEntry, expected: &Path) {
        self.diagnostic(format!(
            "Error: Missing audio file for transcript {} (expected {})",
            entry.stem_lossy(),
            expected.display()
        ));
        self.progress.inc(1);
    }

    fn on_pair_failed(&mut self, pairing: &Pairing, error: &CorpusError) {
        self.diagnostic(format!(
            "Error processing {}: {error}",
            pairing.stem_lossy()
        ));
        self.progress.inc(1);
    }

    fn on_finish(&mut self, _summary: &BuildSummary) {
        self.progress.finish_and_clear();
    }
}
