use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::index::{DocId, DocMeta, Index, PostingMap};
use crate::tokenizer::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
}

/// `log10(N / (1 + df))`. Negative for terms present in most documents.
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    (total_docs as f64 / (1 + doc_freq) as f64).log10()
}

pub(crate) fn rank(postings: &PostingMap, docs: &[DocMeta], query: &str) -> Vec<ScoredDoc> {
    if docs.is_empty() {
        return Vec::new();
    }

    // Distinct query terms, first occurrence order, so float accumulation is stable.
    let mut seen: HashSet<String> = HashSet::new();
    let terms: Vec<String> = normalize(query).filter(|t| seen.insert(t.clone())).collect();

    let mut scores: HashMap<DocId, f64> = HashMap::new();
    for term in &terms {
        let Some(plist) = postings.get(term) else { continue };
        let idf = idf(docs.len(), plist.len());
        for p in plist {
            let Some(meta) = docs.get(p.doc_id as usize - 1) else { continue };
            let tf = p.term_freq as f64 / meta.total_words as f64;
            *scores.entry(p.doc_id).or_insert(0.0) += tf * idf;
        }
    }

    let mut ranked: Vec<ScoredDoc> = scores
        .into_iter()
        .map(|(doc_id, score)| ScoredDoc { doc_id, score })
        .collect();
    // Equal scores fall back to ascending doc id.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.doc_id.cmp(&b.doc_id)));
    ranked
}

impl Index {
    /// Every document that contains at least one query term, best first.
    pub fn search(&self, query: &str) -> Vec<ScoredDoc> {
        rank(&self.postings, &self.docs, query)
    }

    pub fn search_top(&self, query: &str, k: usize) -> Vec<ScoredDoc> {
        let mut hits = self.search(query);
        hits.truncate(k);
        hits
    }
}
