use crate::index::Index;
use crate::tokenizer::clean_token;

/// Up to `limit` vocabulary terms starting with the cleaned `prefix`, in
/// vocabulary order. `vocabulary` must be sorted ascending.
pub fn complete<'a>(vocabulary: &'a [String], prefix: &str, limit: usize) -> Vec<&'a str> {
    let prefix = clean_token(prefix);
    if prefix.is_empty() {
        return Vec::new();
    }
    // Matches are contiguous in a sorted vocabulary.
    let start = vocabulary.partition_point(|t| t.as_str() < prefix.as_str());
    vocabulary[start..]
        .iter()
        .take_while(|t| t.starts_with(prefix.as_str()))
        .take(limit)
        .map(String::as_str)
        .collect()
}

impl Index {
    pub fn autocomplete(&self, prefix: &str) -> Vec<&str> {
        complete(&self.vocabulary, prefix, self.config.max_completions)
    }
}
