use lazy_static::lazy_static;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

use crate::config::MIN_TERM_LEN;

/// Closed English stop-word list. Contracted forms are kept literally.
pub const STOP_WORDS: &[&str] = &[
    "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
    "be","because","been","before","being","below","between","both","but","by",
    "can't","cannot","could","couldn't",
    "did","didn't","do","does","doesn't","doing","don't","down","during",
    "each","few","for","from","further",
    "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
    "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
    "let's","me","more","most","mustn't","my","myself",
    "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
    "same","shan't","she","she'd","she'll","she's","should","shouldn't","so","some","such",
    "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
    "under","until","up","very",
    "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
    "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves",
];

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = STOP_WORDS.iter().copied().collect();
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Strip everything that is not alphanumeric and lower-case the rest.
/// No length or stop-word filtering is applied.
pub fn clean_token(token: &str) -> String {
    token
        .nfkc()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Whether a cleaned token survives into the index.
pub fn is_term(cleaned: &str) -> bool {
    cleaned.chars().count() >= MIN_TERM_LEN && !is_stopword(cleaned)
}

/// Split on whitespace, clean each token and keep the ones that are terms.
///
/// The returned iterator is lazy and can be cloned to walk the text again.
pub fn normalize(text: &str) -> impl Iterator<Item = String> + Clone + '_ {
    text.split_whitespace()
        .map(clean_token)
        .filter(|t| is_term(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize() {
        let t: Vec<String> = normalize("Running, runner's RUN!").collect();
        assert_eq!(t, vec!["running", "runners", "run"]);
    }

    #[test]
    fn clean_token_keeps_short_and_stop_words() {
        assert_eq!(clean_token("The"), "the");
        assert_eq!(clean_token("a."), "a");
        assert_eq!(clean_token("--"), "");
    }

    #[test]
    fn contractions_lose_their_apostrophe() {
        // "don't" is a stop word only in its literal form
        assert_eq!(clean_token("don't"), "dont");
        assert!(is_term("dont"));
        assert!(is_stopword("don't"));
    }

    #[test]
    fn length_counts_characters() {
        assert!(is_term("été"));
        assert!(!is_term("ça"));
    }
}
