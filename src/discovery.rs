use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::error::CorpusError;
use crate::types::TranscriptEntry;

/// Lists the transcripts directly inside `dir`, in directory order.
///
/// Only regular entries whose name ends in `.<extension>` (ASCII
/// case-insensitive) are kept; directories and other names are skipped
/// silently. The stem is the name minus its last extension (`a.b.txt` ->
/// `a.b`) and need not be UTF-8. Failing to read the directory is the one
/// fatal error of a run.
pub fn collect_transcript_entries(
    dir: &Path,
    extension: &str,
) -> Result<Vec<TranscriptEntry>, CorpusError> {
    let entries = fs::read_dir(dir).map_err(|err| CorpusError::enumerate(dir, err))?;
    let suffix = format!(".{extension}");

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| CorpusError::enumerate(dir, err))?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        // Lossy only for the suffix test; the stem keeps the raw name bytes.
        let file_name = entry.file_name();
        if !has_suffix_ignore_ascii_case(&file_name.to_string_lossy(), &suffix) {
            continue;
        }
        let Some(stem) = path.file_stem().map(OsStr::to_os_string) else {
            continue;
        };
        out.push(TranscriptEntry { stem, path });
    }

    tracing::debug!(
        dir = %dir.display(),
        transcripts = out.len(),
        "collected transcript entries"
    );
    Ok(out)
}

fn has_suffix_ignore_ascii_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}
