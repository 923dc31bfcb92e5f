pub mod builder;
pub mod config;
pub mod discovery;
pub mod error;
pub mod normalize;
pub mod observer;
pub mod pairing;
pub mod types;

pub use builder::CorpusBuilder;
pub use config::CorpusConfig;
pub use error::CorpusError;
pub use normalize::normalize_label_text;
pub use observer::{BuildObserver, TracingObserver};
pub use types::{BuildSummary, PairFailure, PairFailureReason, Pairing, TranscriptEntry};
