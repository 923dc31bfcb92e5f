use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CorpusConfig;
use crate::error::CorpusError;
use crate::normalize::normalize_label_text;
use crate::types::{Pairing, TranscriptEntry};

/// Matches a transcript against the audio directory by stem.
///
/// Returns the expected audio path as the error when nothing exists there.
/// Existence is all that is checked: an unreadable audio file still pairs
/// and fails later at copy time.
pub fn resolve_pairing(
    entry: &TranscriptEntry,
    config: &CorpusConfig,
) -> Result<Pairing, PathBuf> {
    let audio_path = config.audio_path_for(&entry.stem);
    if !audio_path.exists() {
        return Err(audio_path);
    }
    Ok(Pairing {
        stem: entry.stem.clone(),
        transcript_path: entry.path.clone(),
        audio_path,
    })
}

/// Writes the output record for one pairing: the audio copied byte-for-byte
/// and the normalized label text, both overwriting earlier outputs.
pub fn write_pair(pairing: &Pairing, config: &CorpusConfig) -> Result<(), CorpusError> {
    let out_audio = config.output_audio_path_for(&pairing.stem);
    copy_audio(&pairing.audio_path, &out_audio)?;

    let raw = read_transcript(&pairing.transcript_path)?;
    let label = normalize_label_text(&raw);

    let out_label = config.output_label_path_for(&pairing.stem);
    fs::write(&out_label, label.as_bytes())
        .map_err(|err| CorpusError::io("writing label", &out_label, err))?;
    Ok(())
}

// Contents only: `fs::copy` would also carry over the source permissions,
// and a read-only copy cannot be overwritten by the next run.
fn copy_audio(source: &Path, destination: &Path) -> Result<(), CorpusError> {
    // Truncating the destination would wipe the source when they alias.
    if destination.exists() && is_same_file(source, destination)? {
        return Err(CorpusError::same_file(source));
    }
    let mut reader =
        File::open(source).map_err(|err| CorpusError::io("opening audio", source, err))?;
    let is_file = reader
        .metadata()
        .map_err(|err| CorpusError::io("inspecting audio", source, err))?
        .is_file();
    if !is_file {
        let err = io::Error::new(io::ErrorKind::InvalidInput, "not a regular file");
        return Err(CorpusError::io("opening audio", source, err));
    }
    let mut writer = File::create(destination)
        .map_err(|err| CorpusError::io("creating output audio", destination, err))?;
    io::copy(&mut reader, &mut writer)
        .map_err(|err| CorpusError::copy(source, destination, err))?;
    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> Result<bool, CorpusError> {
    let a = fs::canonicalize(a).map_err(|err| CorpusError::io("resolving audio", a, err))?;
    let b = fs::canonicalize(b)
        .map_err(|err| CorpusError::io("resolving output audio", b, err))?;
    Ok(a == b)
}

fn read_transcript(path: &Path) -> Result<String, CorpusError> {
    let bytes = fs::read(path).map_err(|err| CorpusError::io("reading transcript", path, err))?;
    String::from_utf8(bytes).map_err(|err| CorpusError::encoding(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        _root: tempfile::TempDir,
        config: CorpusConfig,
    }

    fn fixture() -> Fixture {
        let root = tempfile::tempdir().expect("tempdir");
        let config = CorpusConfig::new(
            root.path().join("wav"),
            root.path().join("transcripts"),
            root.path().join("out"),
        );
        fs::create_dir_all(&config.audio_dir).expect("mkdir wav");
        fs::create_dir_all(&config.transcript_dir).expect("mkdir transcripts");
        fs::create_dir_all(&config.output_dir).expect("mkdir out");
        Fixture {
            _root: root,
            config,
        }
    }

    fn entry(config: &CorpusConfig, stem: &str, text: &[u8]) -> TranscriptEntry {
        let path = config.transcript_dir.join(format!("{stem}.txt"));
        fs::write(&path, text).expect("write transcript");
        TranscriptEntry {
            stem: stem.into(),
            path,
        }
    }

    #[test]
    fn resolve_reports_expected_audio_path_when_missing() {
        let fx = fixture();
        let entry = entry(&fx.config, "C", b"foo");
        let expected = resolve_pairing(&entry, &fx.config).expect_err("no audio");
        assert_eq!(expected, fx.config.audio_dir.join("C.wav"));
    }

    #[test]
    fn write_pair_copies_audio_and_uppercases_label() {
        let fx = fixture();
        let audio = [0u8, 159, 146, 150, 255, 0, 1];
        fs::write(fx.config.audio_dir.join("A.wav"), audio).expect("write audio");
        let entry = entry(&fx.config, "A", b"  hello world\n");

        let pairing = resolve_pairing(&entry, &fx.config).expect("paired");
        write_pair(&pairing, &fx.config).expect("write pair");

        let copied = fs::read(fx.config.output_dir.join("A.wav")).expect("read copy");
        assert_eq!(copied, audio);
        let label = fs::read_to_string(fx.config.output_dir.join("A.lab")).expect("read label");
        assert_eq!(label, "HELLO WORLD");
    }

    #[test]
    fn write_pair_overwrites_previous_outputs() {
        let fx = fixture();
        fs::write(fx.config.audio_dir.join("A.wav"), b"new").expect("write audio");
        fs::write(fx.config.output_dir.join("A.wav"), b"stale audio").expect("write stale");
        fs::write(fx.config.output_dir.join("A.lab"), b"STALE LABEL").expect("write stale");
        let entry = entry(&fx.config, "A", b"fresh");

        let pairing = resolve_pairing(&entry, &fx.config).expect("paired");
        write_pair(&pairing, &fx.config).expect("write pair");

        assert_eq!(fs::read(fx.config.output_dir.join("A.wav")).expect("read"), b"new");
        assert_eq!(
            fs::read_to_string(fx.config.output_dir.join("A.lab")).expect("read"),
            "FRESH"
        );
    }

    #[test]
    fn copy_of_read_only_audio_stays_writable() {
        let fx = fixture();
        let source = fx.config.audio_dir.join("A.wav");
        fs::write(&source, b"take one").expect("write audio");
        let mut perms = fs::metadata(&source).expect("metadata").permissions();
        perms.set_readonly(true);
        fs::set_permissions(&source, perms).expect("make source read-only");
        let entry = entry(&fx.config, "A", b"text");

        let pairing = resolve_pairing(&entry, &fx.config).expect("paired");
        write_pair(&pairing, &fx.config).expect("first write");

        let out_audio = fx.config.output_dir.join("A.wav");
        let out_perms = fs::metadata(&out_audio).expect("metadata").permissions();
        assert!(!out_perms.readonly());

        write_pair(&pairing, &fx.config).expect("second write over previous output");
        assert_eq!(fs::read(&out_audio).expect("read copy"), b"take one");
    }

    #[test]
    fn destination_failure_names_the_output_path() {
        let fx = fixture();
        fs::write(fx.config.audio_dir.join("A.wav"), b"RIFF").expect("write audio");
        let out_audio = fx.config.output_dir.join("A.wav");
        fs::create_dir(&out_audio).expect("block output with a directory");
        let entry = entry(&fx.config, "A", b"text");

        let pairing = resolve_pairing(&entry, &fx.config).expect("paired");
        let err = write_pair(&pairing, &fx.config).expect_err("output is a directory");
        match err {
            CorpusError::Io { context, path, .. } => {
                assert_eq!(context, "creating output audio");
                assert_eq!(path, out_audio);
            }
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_transcript_is_an_encoding_error() {
        let fx = fixture();
        fs::write(fx.config.audio_dir.join("A.wav"), b"RIFF").expect("write audio");
        let entry = entry(&fx.config, "A", &[0x66, 0x6f, 0xff, 0xfe]);

        let pairing = resolve_pairing(&entry, &fx.config).expect("paired");
        let err = write_pair(&pairing, &fx.config).expect_err("bad encoding");
        assert!(matches!(err, CorpusError::Encoding { .. }));
        assert!(!fx.config.output_dir.join("A.lab").exists());
    }

    #[test]
    fn audio_directory_in_place_of_file_is_an_io_error() {
        let fx = fixture();
        fs::create_dir(fx.config.audio_dir.join("A.wav")).expect("mkdir");
        let entry = entry(&fx.config, "A", b"text");

        let pairing = resolve_pairing(&entry, &fx.config).expect("path exists");
        let err = write_pair(&pairing, &fx.config).expect_err("cannot copy a directory");
        match err {
            CorpusError::Io { path, .. } => assert_eq!(path, pairing.audio_path),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn refuses_to_copy_audio_onto_itself() {
        let fx = fixture();
        let config = CorpusConfig::new(
            fx.config.audio_dir.clone(),
            fx.config.transcript_dir.clone(),
            fx.config.audio_dir.clone(),
        );
        fs::write(config.audio_dir.join("A.wav"), b"payload").expect("write audio");
        let entry = entry(&config, "A", b"text");

        let pairing = resolve_pairing(&entry, &config).expect("paired");
        let err = write_pair(&pairing, &config).expect_err("same file");
        assert!(matches!(err, CorpusError::SameFile { .. }));
        assert_eq!(
            fs::read(config.audio_dir.join("A.wav")).expect("source intact"),
            b"payload"
        );
    }
}
