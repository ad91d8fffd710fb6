use hashbrown::HashMap;

#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<String, TrieNode>,
    count: u32,
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::default(),
        }
    }

    /// Inserts every window of the sentence whose start leaves at least
    /// `min_len` words, clipped to `max_len` words or the sentence end.
    /// Sentences shorter than `min_len` contribute nothing.
    pub fn insert_sentence(&mut self, words: &[String], min_len: usize, max_len: usize) {
        if words.len() < min_len {
            return;
        }
        for start in 0..=(words.len() - min_len) {
            let end = words.len().min(start + max_len);
            self.insert_window(&words[start..end]);
        }
    }

    fn insert_window(&mut self, window: &[String]) {
        let mut node = &mut self.root;
        for word in window {
            let child = node.children.entry(word.clone()).or_default();
            child.count += 1;
            node = child;
        }
    }

    /// Collects candidate phrases of at least `min_len` words with their
    /// counts: the longest phrase on each path, plus any prefix that occurs
    /// more often than its continuation.
    pub fn phrases(&self, min_len: usize) -> HashMap<String, u32> {
        let mut phrases = HashMap::new();
        let mut path: Vec<&str> = Vec::new();
        Self::collect_phrases(&self.root, &mut path, min_len, &mut phrases);
        phrases
    }

    fn collect_phrases<'a>(
        node: &'a TrieNode,
        path: &mut Vec<&'a str>,
        min_len: usize,
        phrases: &mut HashMap<String, u32>,
    ) {
        if node.children.is_empty() && path.len() >= min_len {
            phrases.insert(path.join(" "), node.count);
            return;
        }

        for (word, child) in node.children.iter() {
            // the prefix has occurrences of its own, outside the longer phrase
            if node.count > child.count && path.len() >= min_len {
                phrases.insert(path.join(" "), node.count);
            }
            path.push(word);
            Self::collect_phrases(child, path, min_len, phrases);
            path.pop();
        }
    }
}
