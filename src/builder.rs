use std::fs;

use crate::config::CorpusConfig;
use crate::discovery::collect_transcript_entries;
use crate::error::CorpusError;
use crate::observer::{BuildObserver, TracingObserver};
use crate::pairing::{resolve_pairing, write_pair};
use crate::types::{BuildSummary, PairFailure, PairFailureReason};

pub struct CorpusBuilder {
    config: CorpusConfig,
    observer: Option<Box<dyn BuildObserver>>,
}

impl CorpusBuilder {
    pub fn new(config: CorpusConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn BuildObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Runs the single matching-and-copy pass.
    ///
    /// Per-pair problems are collected in the returned summary and never stop
    /// the run. Only creating the output directory or enumerating the
    /// transcript directory can fail the call as a whole.
    pub fn build(self) -> Result<BuildSummary, CorpusError> {
        let config = self.config;
        let mut observer = self.observer.unwrap_or_else(|| Box::new(TracingObserver));

        fs::create_dir_all(&config.output_dir)
            .map_err(|err| CorpusError::create_output(&config.output_dir, err))?;

        let entries =
            collect_transcript_entries(&config.transcript_dir, &config.transcript_extension)?;
        observer.on_start(&config, entries.len());

        let mut summary = BuildSummary::default();
        for entry in &entries {
            let pairing = match resolve_pairing(entry, &config) {
                Ok(pairing) => pairing,
                Err(expected) => {
                    observer.on_missing_audio(entry, &expected);
                    summary.failures.push(PairFailure {
                        stem: entry.stem.clone(),
                        reason: PairFailureReason::MissingAudio { expected },
                    });
                    continue;
                }
            };

            match write_pair(&pairing, &config) {
                Ok(()) => {
                    summary.processed += 1;
                    observer.on_pair_written(&pairing);
                }
                Err(err) => {
                    observer.on_pair_failed(&pairing, &err);
                    summary.failures.push(PairFailure {
                        stem: pairing.stem,
                        reason: PairFailureReason::Io(err),
                    });
                }
            }
        }

        observer.on_finish(&summary);
        Ok(summary)
    }
}
