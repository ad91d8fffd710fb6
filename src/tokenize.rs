use regex::Regex;
use std::sync::OnceLock;

fn sentence_breaks() -> &'static Regex {
    static BREAKS: OnceLock<Regex> = OnceLock::new();
    BREAKS.get_or_init(|| Regex::new("[;!?]").unwrap())
}

/// Splits text into sentences, each sentence reduced to its words with all
/// punctuation stripped. Sentences left with no words are dropped.
pub fn sentences(text: &str) -> Vec<Vec<String>> {
    let normalized = sentence_breaks().replace_all(text, ".");
    let mut result = Vec::new();
    for sentence in normalized.split('.') {
        let words = split_words(sentence);
        if !words.is_empty() {
            result.push(words);
        }
    }
    result
}

fn split_words(sentence: &str) -> Vec<String> {
    let stripped: String = sentence
        .chars()
        .filter(|ch| !ch.is_ascii_punctuation())
        .collect();
    stripped
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sentence_boundaries() {
        let result = sentences("one two. three four! five six? seven eight; nine");
        assert_eq!(
            vec![
                vec!["one", "two"],
                vec!["three", "four"],
                vec!["five", "six"],
                vec!["seven", "eight"],
                vec!["nine"],
            ],
            result
        );
    }

    #[test]
    fn test_punctuation_stripped() {
        let result = sentences("it's a well-known (fact), isn't it");
        assert_eq!(vec![vec!["its", "a", "wellknown", "fact", "isnt", "it"]], result);
    }

    #[test]
    fn test_empty_sentences_discarded() {
        assert_eq!(Vec::<Vec<String>>::new(), sentences(""));
        assert_eq!(Vec::<Vec<String>>::new(), sentences("..."));
        assert_eq!(Vec::<Vec<String>>::new(), sentences(",,, !!! ;;;"));

        let result = sentences("real words. ... more words.");
        assert_eq!(vec![vec!["real", "words"], vec!["more", "words"]], result);
    }

    #[test]
    fn test_case_preserved() {
        let result = sentences("The the THE");
        assert_eq!(vec![vec!["The", "the", "THE"]], result);
    }

    #[test]
    fn test_whitespace_split() {
        let result = sentences("spread\tover\n  lines");
        assert_eq!(vec![vec!["spread", "over", "lines"]], result);
    }
}
