use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    pub audio_dir: PathBuf,
    pub transcript_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Extensions are stored without the leading dot.
    pub audio_extension: String,
    pub transcript_extension: String,
    pub label_extension: String,
}

impl CorpusConfig {
    pub const DEFAULT_AUDIO_DIR: &'static str = "wav";
    pub const DEFAULT_TRANSCRIPT_DIR: &'static str = "transcripts";
    pub const DEFAULT_OUTPUT_DIR: &'static str = "mfa_corpus";
    pub const DEFAULT_AUDIO_EXTENSION: &'static str = "wav";
    pub const DEFAULT_TRANSCRIPT_EXTENSION: &'static str = "txt";
    // The aligner reads `.lab` label files next to each recording.
    pub const DEFAULT_LABEL_EXTENSION: &'static str = "lab";

    pub fn new(
        audio_dir: impl Into<PathBuf>,
        transcript_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            audio_dir: audio_dir.into(),
            transcript_dir: transcript_dir.into(),
            output_dir: output_dir.into(),
            audio_extension: Self::DEFAULT_AUDIO_EXTENSION.to_string(),
            transcript_extension: Self::DEFAULT_TRANSCRIPT_EXTENSION.to_string(),
            label_extension: Self::DEFAULT_LABEL_EXTENSION.to_string(),
        }
    }

    pub fn with_audio_extension(mut self, extension: &str) -> Self {
        self.audio_extension = strip_leading_dot(extension);
        self
    }

    pub fn with_transcript_extension(mut self, extension: &str) -> Self {
        self.transcript_extension = strip_leading_dot(extension);
        self
    }

    pub fn with_label_extension(mut self, extension: &str) -> Self {
        self.label_extension = strip_leading_dot(extension);
        self
    }

    /// `<audio_dir>/<stem>.<audio_ext>`
    pub fn audio_path_for(&self, stem: impl AsRef<OsStr>) -> PathBuf {
        join_with_extension(&self.audio_dir, stem.as_ref(), &self.audio_extension)
    }

    pub fn output_audio_path_for(&self, stem: impl AsRef<OsStr>) -> PathBuf {
        join_with_extension(&self.output_dir, stem.as_ref(), &self.audio_extension)
    }

    pub fn output_label_path_for(&self, stem: impl AsRef<OsStr>) -> PathBuf {
        join_with_extension(&self.output_dir, stem.as_ref(), &self.label_extension)
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_AUDIO_DIR,
            Self::DEFAULT_TRANSCRIPT_DIR,
            Self::DEFAULT_OUTPUT_DIR,
        )
    }
}

fn strip_leading_dot(extension: &str) -> String {
    extension.strip_prefix('.').unwrap_or(extension).to_string()
}

// Built by concatenation so stems containing dots keep them intact, which
// `Path::with_extension` would not.
fn join_with_extension(dir: &Path, stem: &OsStr, extension: &str) -> PathBuf {
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(extension);
    dir.join(name)
}
