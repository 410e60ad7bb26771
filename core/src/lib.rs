//! In-memory full-text search over a static corpus.
//!
//! Documents go into an [`IndexBuilder`]; [`IndexBuilder::finalize`] freezes
//! them into an [`Index`] that answers ranked TF-IDF queries, prefix
//! completions and spelling corrections. Nothing in this crate touches the
//! filesystem.

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod search;
pub mod tokenizer;

pub use config::SearchConfig;
pub use error::Skipped;
pub use fuzzy::{Correction, QueryCorrection};
pub use index::{DocId, DocMeta, Index, IndexBuilder, Posting};
pub use search::ScoredDoc;
