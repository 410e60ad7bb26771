use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::SearchConfig;
use crate::error::Skipped;
use crate::search::{self, ScoredDoc};
use crate::tokenizer::normalize;

/// Sequential, 1-based document identifier.
pub type DocId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    /// Opaque origin of the document, e.g. its path. Only used for display.
    pub source_id: String,
    /// Number of kept terms, duplicates included.
    pub total_words: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: u32,
}

pub(crate) type PostingMap = HashMap<String, Vec<Posting>>;

/// Accumulates documents until [`IndexBuilder::finalize`] freezes them.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    postings: PostingMap,
    docs: Vec<DocMeta>,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    /// Index one document. Documents without a single kept term are
    /// rejected with [`Skipped`] and do not consume an id.
    pub fn add_document(&mut self, source_id: impl Into<String>, text: &str) -> Result<DocId, Skipped> {
        let mut tf_counts: HashMap<String, u32> = HashMap::new();
        let mut total_words: u32 = 0;
        for term in normalize(text) {
            *tf_counts.entry(term).or_insert(0) += 1;
            total_words += 1;
        }

        let source_id = source_id.into();
        if total_words == 0 {
            tracing::debug!(%source_id, "skipping document without indexable terms");
            return Err(Skipped { source_id });
        }

        let doc_id = self.docs.len() as DocId + 1;
        self.docs.push(DocMeta { source_id, total_words });
        for (term, term_freq) in tf_counts {
            self.postings.entry(term).or_default().push(Posting { doc_id, term_freq });
        }
        Ok(doc_id)
    }

    pub fn num_documents(&self) -> usize { self.docs.len() }

    /// Rank documents indexed so far. Only postings are consulted, so this is
    /// valid before the vocabulary exists.
    pub fn search(&self, query: &str) -> Vec<ScoredDoc> {
        search::rank(&self.postings, &self.docs, query)
    }

    /// Freeze the index and build the sorted vocabulary.
    pub fn finalize(self) -> Index {
        let mut vocabulary: Vec<String> = self.postings.keys().cloned().collect();
        vocabulary.sort_unstable();
        tracing::info!(num_docs = self.docs.len(), num_terms = vocabulary.len(), "index finalized");
        Index {
            postings: self.postings,
            docs: self.docs,
            vocabulary,
            config: SearchConfig::default(),
        }
    }
}

/// Read-only index. Every query operation takes `&self`, so a shared
/// `Index` can serve concurrent readers without locking.
#[derive(Debug)]
pub struct Index {
    pub(crate) postings: PostingMap,
    pub(crate) docs: Vec<DocMeta>,
    pub(crate) vocabulary: Vec<String>,
    pub(crate) config: SearchConfig,
}

impl Index {
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    pub fn num_documents(&self) -> usize { self.docs.len() }

    pub fn num_terms(&self) -> usize { self.vocabulary.len() }

    /// All indexed terms, ascending.
    pub fn vocabulary(&self) -> &[String] { &self.vocabulary }

    pub fn contains_term(&self, term: &str) -> bool { self.postings.contains_key(term) }

    /// Postings for `term` in document insertion order.
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    pub fn document(&self, id: DocId) -> Option<&DocMeta> {
        let idx = id.checked_sub(1)?;
        self.docs.get(idx as usize)
    }
}
