use std::borrow::Cow;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::CorpusError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Kept as an `OsString` so names that are not UTF-8 still pair.
    pub stem: OsString,
    pub path: PathBuf,
}

impl TranscriptEntry {
    pub fn stem_lossy(&self) -> Cow<'_, str> {
        self.stem.to_string_lossy()
    }
}

/// A transcript whose stem has a matching audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub stem: OsString,
    pub transcript_path: PathBuf,
    pub audio_path: PathBuf,
}

impl Pairing {
    pub fn stem_lossy(&self) -> Cow<'_, str> {
        self.stem.to_string_lossy()
    }
}

#[derive(Debug)]
pub enum PairFailureReason {
    /// No `<stem>.<audio_ext>` in the audio directory.
    MissingAudio { expected: PathBuf },
    /// Copy, read, decode or write failed for this pair.
    Io(CorpusError),
}

#[derive(Debug)]
pub struct PairFailure {
    pub stem: OsString,
    pub reason: PairFailureReason,
}

impl PairFailure {
    pub fn stem_lossy(&self) -> Cow<'_, str> {
        self.stem.to_string_lossy()
    }
}

#[derive(Debug, Default)]
pub struct BuildSummary {
    pub processed: usize,
    /// In processing order.
    pub failures: Vec<PairFailure>,
}

impl BuildSummary {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Failed stems for display; bytes that are not UTF-8 show as U+FFFD.
    pub fn failed_stems(&self) -> Vec<Cow<'_, str>> {
        self.failures.iter().map(PairFailure::stem_lossy).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
